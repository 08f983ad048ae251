//! This crate exposes a handful of classic in-memory data structures, mostly for educational
//! purposes.
//!
//! ## Sequences
//!
//! [`Stack`][stack::Stack], [`Queue`][queue::Queue] and [`Deque`][deque::Deque] are the usual
//! LIFO, FIFO and double-ended containers. They're built from linked nodes (the
//! queue from two stacks) rather than on top of `Vec`. Taking from an empty one gives `None`.
//!
//! ## Binary Heap
//!
//! A [`Heap`][heap::Heap] keeps its elements in an array laid out as a complete binary tree,
//! where every element is at least as "extreme" as its children. What extreme means is a type
//! parameter: [`MaxHeap`][heap::MaxHeap] puts the largest element on top and
//! [`MinHeap`][heap::MinHeap] the smallest. Building a heap from a whole collection at once
//! takes linear time.
//!
//! ## Binary Trees
//!
//! A [`BinaryTree`][tree::BinaryTree] stores linked nodes that know their parent as well as
//! their children. It provides the traversals (pre-, in-, post- and level-order), shape
//! predicates and in-order successor/predecessor navigation.
//!
//! A [`BinarySearchTree`][bst::BinarySearchTree] is a binary tree with two invariants:
//!
//! 1. For every node, all the nodes in its left subtree have a value less than its own value.
//! 2. For every node, all the nodes in its right subtree have a value greater than its own value.
//!
//! Searching takes `O(height)`. This tree doesn't rebalance itself so the height can be as bad
//! as the number of values, e.g. after inserting already sorted values.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod bst;
pub mod deque;
pub mod error;
pub mod heap;
pub mod queue;
pub mod stack;
pub mod tree;


pub use error::{Error, Result};
