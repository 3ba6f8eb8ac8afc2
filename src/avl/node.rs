//! Storage for the nodes of a [`Tree`][super::Tree].
//!
//! Nodes live in an arena and refer to their children by index. Every live slot is referenced by
//! exactly one link (either the tree's root or a parent's child link) so each node still owns its
//! children exclusively. Vacated slots are kept on a free-list and handed out again by the next
//! insertion.

use std::fmt;
use std::ops::{Index, IndexMut};

use log::trace;

use crate::print::PrintableNode;

/// Index of a slot in an [`Arena`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct NodeId(usize);

#[derive(Clone, Debug)]
pub(crate) struct Node<T> {
    pub(crate) value: T,
    /// How many levels are below this node. A node with no children has a height of 0 and an
    /// absent subtree has a height of -1.
    pub(crate) height: isize,
    /// `height(right) - height(left)`. Only valid after [`Arena::update`].
    pub(crate) balance_factor: isize,
    pub(crate) left: Option<NodeId>,
    pub(crate) right: Option<NodeId>,
}

impl<T> Node<T> {
    fn new(value: T) -> Self {
        Self {
            value,
            height: 0,
            balance_factor: 0,
            left: None,
            right: None,
        }
    }
}

#[derive(Clone)]
pub(crate) struct Arena<T> {
    slots: Vec<Option<Node<T>>>,
    free: Vec<NodeId>,
}

impl<T> Arena<T> {
    pub(crate) fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
        }
    }

    /// Creates a new leaf holding `value`. This is the only place nodes are created.
    pub(crate) fn alloc(&mut self, value: T) -> NodeId {
        let node = Node::new(value);
        match self.free.pop() {
            Some(id) => {
                trace!("reusing vacated slot {:?}", id);
                self.slots[id.0] = Some(node);
                id
            }
            None => {
                self.slots.push(Some(node));
                NodeId(self.slots.len() - 1)
            }
        }
    }

    /// Vacates the slot at `id` and returns the value that lived there. The caller must have
    /// already unlinked the node from its parent.
    pub(crate) fn release(&mut self, id: NodeId) -> T {
        let node = self.slots[id.0]
            .take()
            .expect("Releasing a slot that is already vacant");
        self.free.push(id);
        node.value
    }

    /// Like indexing but returns `None` instead of panicking for vacant or unknown slots.
    pub(crate) fn get(&self, id: NodeId) -> Option<&Node<T>> {
        self.slots.get(id.0).and_then(Option::as_ref)
    }

    /// The height of the subtree at `link`, treating an absent subtree as -1.
    pub(crate) fn height(&self, link: Option<NodeId>) -> isize {
        link.map_or(-1, |id| self[id].height)
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
    }
}

impl<T> Index<NodeId> for Arena<T> {
    type Output = Node<T>;

    fn index(&self, id: NodeId) -> &Node<T> {
        self.get(id).expect("Link points at a vacant slot")
    }
}

impl<T> IndexMut<NodeId> for Arena<T> {
    fn index_mut(&mut self, id: NodeId) -> &mut Node<T> {
        self.slots
            .get_mut(id.0)
            .and_then(Option::as_mut)
            .expect("Link points at a vacant slot")
    }
}

/// A read-only view of one node in a [`Tree`][super::Tree]. The only thing that can be done with
/// it is walking to its children and rendering its value through [`PrintableNode`].
pub struct NodeRef<'a, T> {
    arena: &'a Arena<T>,
    id: NodeId,
}

impl<'a, T> NodeRef<'a, T> {
    pub(crate) fn new(arena: &'a Arena<T>, id: NodeId) -> Self {
        Self { arena, id }
    }

    fn child(&self, link: Option<NodeId>) -> Option<Self> {
        link.map(|id| Self::new(self.arena, id))
    }
}

/// Manual implementations so that `T` doesn't need to be `Clone`/`Copy` itself.
impl<T> Clone for NodeRef<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<T> Copy for NodeRef<'_, T> {}

impl<T> PrintableNode for NodeRef<'_, T>
where
    T: fmt::Display,
{
    fn left(&self) -> Option<Self> {
        self.child(self.arena[self.id].left)
    }

    fn right(&self) -> Option<Self> {
        self.child(self.arena[self.id].right)
    }

    fn text(&self) -> String {
        self.arena[self.id].value.to_string()
    }
}
