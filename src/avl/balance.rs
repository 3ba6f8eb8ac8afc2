//! The insert/remove/rebalance engine.
//!
//! Every mutation recurses down to the node it affects and then, on the way back up, passes each
//! ancestor through [`Arena::update`] and [`Arena::balance`]. Each of those calls returns the
//! (possibly new) root of the subtree so the caller can rewire its link.
//!
//! See https://en.wikipedia.org/wiki/AVL_tree#Rebalancing for terminology.

use std::cmp::Ordering;

use log::trace;

use super::node::{Arena, NodeId};

/// The rotations that can restore the AVL invariant at a node whose balance factor is +/-2.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Rotation {
    /// The left subtree is too tall on its left side.
    Right,
    /// The left subtree is too tall on its right side.
    LeftRight,
    /// The right subtree is too tall on its right side.
    Left,
    /// The right subtree is too tall on its left side.
    RightLeft,
}

impl Rotation {
    /// Picks the rotation for a node with `balance_factor`, given the balance factor of its taller
    /// child. `None` means the node is already balanced.
    pub(crate) fn needed(balance_factor: isize, heavy_child: isize) -> Option<Self> {
        match (balance_factor, heavy_child) {
            (-2, n) if n <= 0 => Some(Self::Right),
            (-2, _) => Some(Self::LeftRight),
            (2, n) if n >= 0 => Some(Self::Left),
            (2, _) => Some(Self::RightLeft),
            _ => None,
        }
    }
}

impl<T> Arena<T> {
    pub(crate) fn contains(&self, mut link: Option<NodeId>, value: &T) -> bool
    where
        T: Ord,
    {
        while let Some(id) = link {
            let node = &self[id];
            link = match value.cmp(&node.value) {
                Ordering::Less => node.left,
                Ordering::Equal => return true,
                Ordering::Greater => node.right,
            };
        }
        false
    }

    /// Inserts `value` into the subtree at `link` and returns the new root of that subtree.
    ///
    /// ## Panics
    ///
    /// When `value` is already in the subtree. Callers check with [`Arena::contains`] first.
    pub(crate) fn insert(&mut self, link: Option<NodeId>, value: T) -> NodeId
    where
        T: Ord,
    {
        let Some(id) = link else {
            return self.alloc(value);
        };

        match value.cmp(&self[id].value) {
            Ordering::Less => {
                let left = self[id].left;
                let new_left = self.insert(left, value);
                self[id].left = Some(new_left);
            }
            Ordering::Equal => unreachable!("Inserting a value that is already in the tree"),
            Ordering::Greater => {
                let right = self[id].right;
                let new_right = self.insert(right, value);
                self[id].right = Some(new_right);
            }
        }

        self.update(id);
        self.balance(id)
    }

    /// Removes the node holding `value` from the subtree at `link`. Returns the new root of the
    /// subtree and the removed value, if it was found.
    pub(crate) fn remove(&mut self, link: Option<NodeId>, value: &T) -> (Option<NodeId>, Option<T>)
    where
        T: Ord,
    {
        let Some(id) = link else {
            return (None, None);
        };

        let removed = match value.cmp(&self[id].value) {
            Ordering::Less => {
                let left = self[id].left;
                let (new_left, removed) = self.remove(left, value);
                self[id].left = new_left;
                removed
            }
            Ordering::Greater => {
                let right = self[id].right;
                let (new_right, removed) = self.remove(right, value);
                self[id].right = new_right;
                removed
            }
            Ordering::Equal => match (self[id].left, self[id].right) {
                (None, child) | (child, None) => return (child, Some(self.release(id))),
                (Some(left), Some(right)) => {
                    // Take the replacement from the taller side so the removal is less likely to
                    // unbalance this node.
                    let replacement = if self[right].height >= self[left].height {
                        let (new_right, min) = self.remove_min(right);
                        self[id].right = new_right;
                        min
                    } else {
                        let (new_left, max) = self.remove_max(left);
                        self[id].left = new_left;
                        max
                    };
                    Some(std::mem::replace(&mut self[id].value, replacement))
                }
            },
        };

        self.update(id);
        (Some(self.balance(id)), removed)
    }

    /// Removes the smallest node in the subtree at `id` by recursing to the left until there is
    /// no left child. Returns the new root of the subtree and the smallest value.
    fn remove_min(&mut self, id: NodeId) -> (Option<NodeId>, T) {
        let Some(left) = self[id].left else {
            let right = self[id].right;
            return (right, self.release(id));
        };

        let (new_left, min) = self.remove_min(left);
        self[id].left = new_left;
        self.update(id);
        (Some(self.balance(id)), min)
    }

    /// Mirror image of [`Arena::remove_min`].
    fn remove_max(&mut self, id: NodeId) -> (Option<NodeId>, T) {
        let Some(right) = self[id].right else {
            let left = self[id].left;
            return (left, self.release(id));
        };

        let (new_right, max) = self.remove_max(right);
        self[id].right = new_right;
        self.update(id);
        (Some(self.balance(id)), max)
    }

    /// Recomputes the height and balance factor of `id` from its children. The children must
    /// already be up to date.
    pub(crate) fn update(&mut self, id: NodeId) {
        let left_height = self.height(self[id].left);
        let right_height = self.height(self[id].right);

        let node = &mut self[id];
        node.height = left_height.max(right_height) + 1;
        node.balance_factor = right_height - left_height;
    }

    /// Rotates the subtree at `id` if its balance factor is +/-2 and returns the new root of the
    /// subtree. `id` must have just been passed through [`Arena::update`].
    pub(crate) fn balance(&mut self, id: NodeId) -> NodeId {
        let node = &self[id];
        let heavy_child = match node.balance_factor {
            n if n < 0 => node.left,
            n if n > 0 => node.right,
            _ => None,
        };
        let rotation = heavy_child
            .and_then(|child| Rotation::needed(node.balance_factor, self[child].balance_factor));

        let new_root = match rotation {
            None => id,
            Some(Rotation::Right) => self.rotate_right(id),
            Some(Rotation::Left) => self.rotate_left(id),
            Some(Rotation::LeftRight) => {
                let left = self[id].left.expect("Left-heavy => left child");
                let new_left = self.rotate_left(left);
                self[id].left = Some(new_left);
                self.rotate_right(id)
            }
            Some(Rotation::RightLeft) => {
                let right = self[id].right.expect("Right-heavy => right child");
                let new_right = self.rotate_right(right);
                self[id].right = Some(new_right);
                self.rotate_left(id)
            }
        };

        if cfg!(debug_assertions) {
            let root = &self[new_root];
            let left_height = self.height(root.left);
            let right_height = self.height(root.right);
            assert_eq!(root.height, left_height.max(right_height) + 1);
            assert!(root.balance_factor.abs() <= 1);
        }
        new_root
    }

    /// Rotate `id` to the right. This moves the left child up vertically and `id` down vertically.
    /// Used to rebalance the tree when the left child is too tall. As such, it must only be called
    /// when there _is_ a left child.
    ///
    /// ## Panics
    ///
    /// When called on a node without a left child.
    ///
    /// # Diagram
    ///
    /// ```text
    ///        old_root                  new_root
    ///        /     \                   /     \
    ///   new_root    z     rotate ->   x    old_root
    ///    /   \                               /  \
    ///   x     y                             y    z
    /// ```
    fn rotate_right(&mut self, old_root: NodeId) -> NodeId {
        let new_root = self[old_root].left.expect("Rotate right => left child");
        trace!("rotating right: {:?} replaces {:?}", new_root, old_root);

        self[old_root].left = self[new_root].right;
        self[new_root].right = Some(old_root);

        // The old root is now a child of the new root so it has to be updated first.
        self.update(old_root);
        self.update(new_root);
        new_root
    }

    /// Mirror image of [`Arena::rotate_right`].
    fn rotate_left(&mut self, old_root: NodeId) -> NodeId {
        let new_root = self[old_root].right.expect("Rotate left => right child");
        trace!("rotating left: {:?} replaces {:?}", new_root, old_root);

        self[old_root].right = self[new_root].left;
        self[new_root].left = Some(old_root);

        self.update(old_root);
        self.update(new_root);
        new_root
    }
}
