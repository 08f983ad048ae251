//! A double-ended queue backed by a doubly-linked list.
//!
//! # Examples
//!
//! ```
//! use datastructs::deque::Deque;
//!
//! let mut deque = Deque::new();
//! deque.offer_last(2);
//! deque.offer_first(1);
//! deque.offer_last(3);
//!
//! assert_eq!(deque.peek_first(), Some(&1));
//! assert_eq!(deque.peek_last(), Some(&3));
//!
//! assert_eq!(deque.poll_last(), Some(3));
//! assert_eq!(deque.poll_first(), Some(1));
//! assert_eq!(deque.poll_first(), Some(2));
//! assert_eq!(deque.poll_first(), None);
//! ```

use std::fmt;
use std::marker::PhantomData;
use std::ptr::NonNull;

/// A deque supporting `O(1)` insertion and removal at both ends.
pub struct Deque<T> {
    head: Link<T>,
    tail: Link<T>,
    len: usize,
    // Tells dropck that we own `Node<T>`s (and so `T`s) even though we only hold pointers.
    _owns: PhantomData<Box<Node<T>>>,
}

type Link<T> = Option<NonNull<Node<T>>>;

struct Node<T> {
    value: T,
    prev: Link<T>,
    next: Link<T>,
}

impl<T> Node<T> {
    fn new_leaked(value: T, prev: Link<T>, next: Link<T>) -> NonNull<Self> {
        NonNull::from(Box::leak(Box::new(Node { value, prev, next })))
    }
}

impl<T> Default for Deque<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Deque<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> fmt::Debug for Deque<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut list = f.debug_list();
        let mut link = self.head;
        while let Some(node) = link {
            // SAFETY: Every link reachable from `head` points at a live node owned by this deque
            // and we hold `&self`, so nothing can be mutating it.
            let node = unsafe { node.as_ref() };
            list.entry(&node.value);
            link = node.next;
        }
        list.finish()
    }
}

impl<T> Deque<T> {
    /// Generates a new, empty `Deque`.
    pub fn new() -> Self {
        Self {
            head: None,
            tail: None,
            len: 0,
            _owns: PhantomData,
        }
    }

    /// Adds `value` to the front of the deque.
    pub fn offer_first(&mut self, value: T) {
        let node = Node::new_leaked(value, None, self.head);
        match self.head {
            // SAFETY: `head` is a live node owned by this deque and `&mut self` guarantees no
            // other reference to it exists.
            Some(mut head) => unsafe { head.as_mut().prev = Some(node) },
            None => self.tail = Some(node),
        }
        self.head = Some(node);
        self.len += 1;
    }

    /// Adds `value` to the back of the deque.
    pub fn offer_last(&mut self, value: T) {
        let node = Node::new_leaked(value, self.tail, None);
        match self.tail {
            // SAFETY: Same as in `offer_first` but for `tail`.
            Some(mut tail) => unsafe { tail.as_mut().next = Some(node) },
            None => self.head = Some(node),
        }
        self.tail = Some(node);
        self.len += 1;
    }

    /// Removes the front of the deque and returns it, or `None` if the deque is empty.
    pub fn poll_first(&mut self) -> Option<T> {
        let head = self.head?;
        // SAFETY: `head` was allocated by `Node::new_leaked` and is only referenced by
        // `self.head` and its successor's `prev`. Both links are rewritten below, before
        // anything could dereference them again.
        let node = unsafe { Box::from_raw(head.as_ptr()) };
        self.head = node.next;
        match self.head {
            // SAFETY: The new head is live and uniquely borrowed through `&mut self`.
            Some(mut new_head) => unsafe { new_head.as_mut().prev = None },
            None => self.tail = None,
        }
        self.len -= 1;
        Some(node.value)
    }

    /// Removes the back of the deque and returns it, or `None` if the deque is empty.
    pub fn poll_last(&mut self) -> Option<T> {
        let tail = self.tail?;
        // SAFETY: Mirror of `poll_first`: only `self.tail` and the predecessor's `next`
        // reference this node and both are rewritten below.
        let node = unsafe { Box::from_raw(tail.as_ptr()) };
        self.tail = node.prev;
        match self.tail {
            // SAFETY: The new tail is live and uniquely borrowed through `&mut self`.
            Some(mut new_tail) => unsafe { new_tail.as_mut().next = None },
            None => self.head = None,
        }
        self.len -= 1;
        Some(node.value)
    }

    /// The front of the deque without removing it.
    pub fn peek_first(&self) -> Option<&T> {
        // SAFETY: `head` is live for as long as `&self` is borrowed since removing it needs
        // `&mut self`.
        self.head.map(|head| unsafe { &(*head.as_ptr()).value })
    }

    /// The back of the deque without removing it.
    pub fn peek_last(&self) -> Option<&T> {
        // SAFETY: Same as `peek_first`.
        self.tail.map(|tail| unsafe { &(*tail.as_ptr()).value })
    }

    /// How many values are in the deque.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the deque holds no values.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Drops every value in the deque.
    pub fn clear(&mut self) {
        while self.poll_first().is_some() {}
    }
}
