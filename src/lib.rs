//! This crate exposes a self-balancing Binary Search Tree (an AVL tree) set,
//! mostly for educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored values. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` will typically store
//! some sort of value (the value that was inserted, for example) and will
//! sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for values in the tree takes `O(height)` (where `height` is defined
//! as the longest path from the root `Node` to a leaf `Node`).
//!
//! ## AVL Trees
//!
//! An AVL tree adds one more invariant: for every `Node`, the heights of its
//! two subtrees differ by at most one. Every insertion and deletion repairs
//! this invariant on the way back up to the root using "rotations". That keeps
//! the height (and so every operation) at `O(lg N)` no matter what order values
//! are inserted in. See [`avl::Tree`].

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod avl;
mod error;
pub mod print;

pub use error::IterError;

#[cfg(test)]
mod test;
