//! In-order traversal of a [`Tree`].
//!
//! Both traversals keep an explicit stack of nodes whose left subtrees have already been pushed.
//! It is primed with the root's left spine; each step pops the smallest unvisited node and pushes
//! the left spine of its right child.

use std::iter::FusedIterator;
use std::marker::PhantomData;

use super::node::{Arena, NodeId};
use super::Tree;
use crate::IterError;

/// A fail-fast, in-order traversal that doesn't borrow the [`Tree`] it came from.
///
/// Because the cursor doesn't hold a borrow, the tree can be changed while the cursor is alive.
/// The cursor notices this on the next call to [`has_next`][Cursor::has_next] or
/// [`next`][Cursor::next] by comparing the tree's size against the size it saw when it was
/// created, and reports [`IterError::ConcurrentModification`]. A removal followed by an insertion
/// leaves the size unchanged and so goes unnoticed.
///
/// The cursor only remembers node positions, not which tree they belong to. Passing it a different
/// tree of the same size walks that tree's nodes instead of reporting an error.
///
/// A cursor can't be restarted. Create a new one with [`Tree::cursor`] to traverse again.
///
/// # Examples
///
/// ```
/// use balanced_bst::avl::Tree;
/// use balanced_bst::IterError;
///
/// let mut tree = Tree::new();
/// tree.insert(2);
/// tree.insert(1);
///
/// let mut cursor = tree.cursor();
/// assert_eq!(cursor.next(&tree), Ok(&1));
///
/// tree.insert(3);
/// assert_eq!(
///     cursor.next(&tree),
///     Err(IterError::ConcurrentModification { expected: 2, found: 3 })
/// );
/// ```
pub struct Cursor<T> {
    stack: Vec<NodeId>,
    expected_len: usize,
    remaining: usize,
    _tree: PhantomData<fn() -> T>,
}

impl<T> Cursor<T> {
    pub(crate) fn new(tree: &Tree<T>) -> Self {
        let mut cursor = Self {
            stack: Vec::new(),
            expected_len: tree.len(),
            remaining: tree.len(),
            _tree: PhantomData,
        };
        cursor.push_left_spine(&tree.arena, tree.root);
        cursor
    }

    /// Returns whether [`next`][Cursor::next] would produce another value.
    pub fn has_next(&self, tree: &Tree<T>) -> Result<bool, IterError> {
        self.check(tree)?;
        Ok(!self.stack.is_empty())
    }

    /// Produces the next value in ascending order.
    pub fn next<'a>(&mut self, tree: &'a Tree<T>) -> Result<&'a T, IterError> {
        self.check(tree)?;
        let id = self.stack.pop().ok_or(IterError::Exhausted)?;

        // A size-preserving change can leave the stack pointing at a slot that was vacated.
        let node = tree
            .arena
            .get(id)
            .ok_or_else(|| self.modification(tree))?;

        self.push_left_spine(&tree.arena, node.right);
        self.remaining = self.remaining.saturating_sub(1);
        Ok(&node.value)
    }

    fn check(&self, tree: &Tree<T>) -> Result<(), IterError> {
        if tree.len() == self.expected_len {
            Ok(())
        } else {
            Err(self.modification(tree))
        }
    }

    fn modification(&self, tree: &Tree<T>) -> IterError {
        IterError::ConcurrentModification {
            expected: self.expected_len,
            found: tree.len(),
        }
    }

    fn push_left_spine(&mut self, arena: &Arena<T>, mut link: Option<NodeId>) {
        while let Some(id) = link {
            self.stack.push(id);
            link = arena.get(id).and_then(|node| node.left);
        }
    }
}

/// An in-order iterator over the values of a [`Tree`]. Created by [`Tree::iter`].
///
/// This holds a borrow of the tree so, unlike [`Cursor`], it can never observe a modification.
pub struct Iter<'a, T> {
    tree: &'a Tree<T>,
    cursor: Cursor<T>,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(tree: &'a Tree<T>) -> Self {
        Self {
            tree,
            cursor: Cursor::new(tree),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.cursor.next(self.tree).ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.cursor.remaining, Some(self.cursor.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}
