//! A LIFO stack backed by a singly-linked list.
//!
//! # Examples
//!
//! ```
//! use datastructs::stack::Stack;
//!
//! let mut stack = Stack::new();
//! stack.push(1);
//! stack.push(2);
//!
//! assert_eq!(stack.peek(), Some(&2));
//! assert_eq!(stack.pop(), Some(2));
//! assert_eq!(stack.pop(), Some(1));
//!
//! // Popping an empty stack isn't an error.
//! assert_eq!(stack.pop(), None);
//! ```

use std::fmt;

type Link<T> = Option<Box<Node<T>>>;

struct Node<T> {
    value: T,
    next: Link<T>,
}

/// A last-in-first-out stack. Every operation is `O(1)`.
pub struct Stack<T> {
    head: Link<T>,
    len: usize,
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Stack<T> {
    fn drop(&mut self) {
        // Unlink node by node so dropping a long stack doesn't recurse through `Box<Node>`.
        self.clear();
    }
}

impl<T> fmt::Debug for Stack<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Stack<T> {
    /// Generates a new, empty `Stack`.
    pub fn new() -> Self {
        Self { head: None, len: 0 }
    }

    /// Pushes `value` on top of the stack.
    pub fn push(&mut self, value: T) {
        let next = self.head.take();
        self.head = Some(Box::new(Node { value, next }));
        self.len += 1;
    }

    /// Removes the top of the stack and returns it, or `None` if the stack is empty.
    pub fn pop(&mut self) -> Option<T> {
        self.head.take().map(|node| {
            let Node { value, next } = *node;
            self.head = next;
            self.len -= 1;
            value
        })
    }

    /// The top of the stack without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.head.as_ref().map(|node| &node.value)
    }

    /// A mutable reference to the top of the stack.
    pub fn peek_mut(&mut self) -> Option<&mut T> {
        self.head.as_mut().map(|node| &mut node.value)
    }

    /// How many values are on the stack.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the stack holds no values.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Drops every value on the stack.
    pub fn clear(&mut self) {
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
        self.len = 0;
    }

    /// Iterates from the top of the stack to the bottom.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        let mut link = self.head.as_deref();
        std::iter::from_fn(move || {
            let node = link?;
            link = node.next.as_deref();
            Some(&node.value)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_in_reverse_push_order() {
        let mut stack = Stack::new();
        for x in 0..5 {
            stack.push(x);
        }
        assert_eq!(stack.len(), 5);

        let popped: Vec<_> = std::iter::from_fn(|| stack.pop()).collect();
        assert_eq!(popped, [4, 3, 2, 1, 0]);
        assert!(stack.is_empty());
    }

    #[test]
    fn empty_stack_yields_none() {
        let mut stack: Stack<i32> = Stack::new();
        assert_eq!(stack.peek(), None);
        assert_eq!(stack.pop(), None);
        assert_eq!(stack.len(), 0);
    }

    #[test]
    fn peek_mut_changes_top() {
        let mut stack = Stack::new();
        stack.push(1);
        stack.push(2);
        if let Some(top) = stack.peek_mut() {
            *top = 20;
        }
        assert_eq!(stack.pop(), Some(20));
        assert_eq!(stack.peek(), Some(&1));
    }

    #[test]
    fn clear_resets_len() {
        let mut stack = Stack::new();
        stack.push("a".to_string());
        stack.push("b".to_string());
        stack.clear();

        assert!(stack.is_empty());
        assert_eq!(stack.pop(), None);

        stack.push("c".to_string());
        assert_eq!(stack.len(), 1);
    }

    #[test]
    fn dropping_a_deep_stack_does_not_overflow() {
        let mut stack = Stack::new();
        for x in 0..1_000_000 {
            stack.push(x);
        }
        drop(stack);
    }

    #[test]
    fn debug_lists_top_first() {
        let mut stack = Stack::new();
        stack.push(1);
        stack.push(2);
        assert_eq!(format!("{:?}", stack), "[2, 1]");
    }
}
