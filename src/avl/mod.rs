//! A self-balancing BST set. After every insertion and deletion, each node on the path back up to
//! the root has its height recomputed and is rotated if its subtrees' heights differ by two. That
//! keeps the height of the tree (and so the cost of every operation) at `O(lg N)`.
//!
//! # Examples
//!
//! ```
//! use balanced_bst::avl::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.contains(&1));
//! assert_eq!(tree.height(), -1);
//!
//! assert!(tree.insert(1));
//! assert!(tree.contains(&1));
//!
//! // Inserting a value that's already there does nothing.
//! assert!(!tree.insert(1));
//! assert_eq!(tree.len(), 1);
//!
//! // Values always come out in order, whatever order they went in.
//! tree.insert(3);
//! tree.insert(2);
//! assert_eq!(tree.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
//!
//! assert!(tree.remove(&2));
//! assert!(!tree.remove(&2));
//! ```

mod balance;
mod iter;
pub(crate) mod node;

use std::fmt;

use log::debug;

pub use iter::{Cursor, Iter};
pub use node::NodeRef;

use node::{Arena, NodeId};

/// A self-balancing Binary Search Tree (specifically, an AVL tree) holding a set of values.
#[derive(Clone)]
pub struct Tree<T> {
    pub(crate) arena: Arena<T>,
    pub(crate) root: Option<NodeId>,
    /// The number of nodes reachable from `root`. Changes exactly once per successful insertion
    /// or removal.
    size: usize,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Tree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T> Tree<T> {
    /// Generate a new, empty `Tree`.
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            root: None,
            size: 0,
        }
    }

    /// The number of values in the tree.
    #[doc(alias = "size")]
    pub fn len(&self) -> usize {
        self.size
    }

    /// Whether the tree has no values.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// The number of edges on the longest path from the root to a leaf. A tree with a single value
    /// has a height of 0 and an empty tree has a height of -1.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::avl::Tree;
    ///
    /// let mut tree = Tree::new();
    /// assert_eq!(tree.height(), -1);
    ///
    /// tree.insert(1);
    /// assert_eq!(tree.height(), 0);
    ///
    /// // Ascending inserts would make a plain BST a linked list. This stays balanced.
    /// tree.insert(2);
    /// tree.insert(3);
    /// assert_eq!(tree.height(), 1);
    /// ```
    pub fn height(&self) -> isize {
        self.arena.height(self.root)
    }

    /// Returns whether `value` is in the tree.
    pub fn contains(&self, value: &T) -> bool
    where
        T: Ord,
    {
        self.arena.contains(self.root, value)
    }

    /// Adds `value` to the tree. Returns `false`, leaving the tree untouched, if the tree already
    /// holds an equal value.
    pub fn insert(&mut self, value: T) -> bool
    where
        T: Ord,
    {
        if self.contains(&value) {
            return false;
        }

        self.root = Some(self.arena.insert(self.root, value));
        self.size += 1;
        true
    }

    /// Removes `value` from the tree. Returns `false`, leaving the tree untouched, if the tree
    /// doesn't hold it.
    pub fn remove(&mut self, value: &T) -> bool
    where
        T: Ord,
    {
        self.take(value).is_some()
    }

    /// Removes `value` from the tree and returns the value that was stored, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::avl::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(String::from("a"));
    ///
    /// assert_eq!(tree.take(&String::from("a")), Some(String::from("a")));
    /// assert_eq!(tree.take(&String::from("a")), None);
    /// ```
    pub fn take(&mut self, value: &T) -> Option<T>
    where
        T: Ord,
    {
        let (root, removed) = self.arena.remove(self.root, value);
        self.root = root;
        if removed.is_some() {
            self.size -= 1;
        }
        removed
    }

    /// Removes every value from the tree.
    pub fn clear(&mut self) {
        debug!("clearing tree of {} values", self.size);
        self.arena.clear();
        self.root = None;
        self.size = 0;
    }

    /// The root node, for walking the tree's shape with [`PrintableNode`][crate::print::PrintableNode].
    pub fn root(&self) -> Option<NodeRef<'_, T>> {
        self.root.map(|id| NodeRef::new(&self.arena, id))
    }

    /// An iterator over the values of the tree in ascending order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// A fail-fast, in-order traversal that doesn't borrow the tree. See [`Cursor`].
    pub fn cursor(&self) -> Cursor<T> {
        Cursor::new(self)
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}


#[cfg(test)]
mod quicktests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::test::quick::Op;
    use crate::test::validate::{assert_avl, is_ordered};

    /// Applies a set of operations to a tree and a `BTreeSet`, checking the invariants after
    /// every one. This way we can ensure that after a random smattering of inserts and deletes we
    /// have the same values in both.
    fn do_ops<K>(ops: &[Op<K>], bst: &mut Tree<K>, set: &mut BTreeSet<K>)
    where
        K: Clone + Ord + fmt::Debug,
    {
        for op in ops {
            match op {
                Op::Insert(k) => {
                    assert_eq!(bst.insert(k.clone()), set.insert(k.clone()));
                }
                Op::Remove(k) => {
                    assert_eq!(bst.remove(k), set.remove(k));
                }
                Op::Iter => {
                    assert!(bst.iter().eq(set.iter()));
                }
            }
            assert!(is_ordered(bst));
            assert_avl(bst);
            assert_eq!(bst.len(), set.len());
        }
    }

    quickcheck::quickcheck! {
        fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
            let mut tree = Tree::new();
            let mut set = BTreeSet::new();

            do_ops(&ops, &mut tree, &mut set);
            set.iter().all(|key| tree.contains(key)) && tree.iter().count() == tree.len()
        }
    }

    quickcheck::quickcheck! {
        fn contains(xs: Vec<i8>) -> bool {
            let mut tree = Tree::new();
            for x in &xs {
                tree.insert(*x);
            }

            xs.iter().all(|x| tree.contains(x))
        }
    }

    quickcheck::quickcheck! {
        fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
            let mut tree = Tree::new();
            for x in &xs {
                tree.insert(*x);
            }
            for delete in &deletes {
                tree.remove(delete);
            }

            let still_present: BTreeSet<_> = xs.iter().filter(|x| !deletes.contains(x)).collect();

            deletes.iter().all(|x| !tree.contains(x))
                && tree.iter().eq(still_present.into_iter())
        }
    }

    quickcheck::quickcheck! {
        fn duplicate_insert_is_rejected(xs: Vec<i16>) -> bool {
            let mut tree = Tree::new();
            for x in &xs {
                tree.insert(*x);
            }
            let len = tree.len();

            xs.iter().all(|x| !tree.insert(*x)) && tree.len() == len
        }
    }
}
