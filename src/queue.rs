//! A FIFO queue made of two [`Stack`]s.
//!
//! Values are pushed onto an inbox stack. When the front is needed and the outbox is empty, the
//! whole inbox is reversed into the outbox. Each value moves between the stacks at most once so
//! `offer` and `poll` are amortized `O(1)`.
//!
//! # Examples
//!
//! ```
//! use datastructs::queue::Queue;
//!
//! let mut queue = Queue::new();
//! queue.offer(1);
//! queue.offer(2);
//!
//! assert_eq!(queue.peek(), Some(&1));
//! assert_eq!(queue.poll(), Some(1));
//! assert_eq!(queue.poll(), Some(2));
//! assert_eq!(queue.poll(), None);
//! ```

use std::fmt;

use crate::stack::Stack;

/// A first-in-first-out queue.
pub struct Queue<T> {
    inbox: Stack<T>,
    outbox: Stack<T>,
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Queue<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Front of the queue is the top of the outbox, back is the top of the inbox.
        let inbox: Vec<_> = self.inbox.iter().collect();
        f.debug_list()
            .entries(self.outbox.iter())
            .entries(inbox.into_iter().rev())
            .finish()
    }
}

impl<T> Queue<T> {
    /// Generates a new, empty `Queue`.
    pub fn new() -> Self {
        Self {
            inbox: Stack::new(),
            outbox: Stack::new(),
        }
    }

    /// Adds `value` to the back of the queue.
    pub fn offer(&mut self, value: T) {
        self.inbox.push(value);
    }

    /// Removes the front of the queue and returns it, or `None` if the queue is empty.
    pub fn poll(&mut self) -> Option<T> {
        self.refill();
        self.outbox.pop()
    }

    /// The front of the queue without removing it. This takes `&mut self` because it may need
    /// to move the inbox over to the outbox first.
    pub fn peek(&mut self) -> Option<&T> {
        self.refill();
        self.outbox.peek()
    }

    /// How many values are queued.
    pub fn len(&self) -> usize {
        self.inbox.len() + self.outbox.len()
    }

    /// Whether the queue holds no values.
    pub fn is_empty(&self) -> bool {
        self.inbox.is_empty() && self.outbox.is_empty()
    }

    /// Drops every queued value.
    pub fn clear(&mut self) {
        self.inbox.clear();
        self.outbox.clear();
    }

    fn refill(&mut self) {
        if self.outbox.is_empty() {
            while let Some(value) = self.inbox.pop() {
                self.outbox.push(value);
            }
        }
    }
}
