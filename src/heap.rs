//! An array backed binary heap whose ordering direction is a type parameter.
//!
//! The heap is a complete binary tree stored level by level. Positions are 1-based: the root is
//! at position `1` and the children of position `k` are at `2k` and `2k + 1`. Position `k` lives
//! in `elements[k - 1]`.
//!
//! Which element "wins" is decided by an [`Order`]. [`MaxFirst`] keeps the largest element on
//! top and [`MinFirst`] the smallest. [`MaxHeap`] and [`MinHeap`] are aliases for the two.
//!
//! # Examples
//!
//! ```
//! use datastructs::heap::{MaxHeap, MinHeap};
//!
//! let mut max = MaxHeap::from(vec![3, 1, 4, 1, 5]);
//! assert_eq!(max.peek_top(), Some(&5));
//! assert_eq!(max.extract_top(), Some(5));
//! assert_eq!(max.extract_top(), Some(4));
//!
//! let mut min: MinHeap<_> = [3, 1, 4, 1, 5].into_iter().collect();
//! min.insert(0);
//! assert_eq!(min.into_sorted_vec(), [0, 1, 1, 3, 4, 5]);
//! ```

use std::fmt;
use std::marker::PhantomData;

use crate::error::Result;

/// Capacity allocated on the first insert into a heap built with [`Heap::new`].
pub const DEFAULT_INITIAL_CAPACITY: usize = 128;

/// Decides which of two elements belongs closer to the top of a heap.
pub trait Order<T: ?Sized> {
    /// Whether `a` is strictly more extreme than `b`, i.e. `a` must sit above `b`. Equal
    /// elements never precede one another.
    fn precedes(a: &T, b: &T) -> bool;
}

/// Largest element on top.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MaxFirst;

/// Smallest element on top.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MinFirst;

impl<T: Ord + ?Sized> Order<T> for MaxFirst {
    fn precedes(a: &T, b: &T) -> bool {
        a > b
    }
}

impl<T: Ord + ?Sized> Order<T> for MinFirst {
    fn precedes(a: &T, b: &T) -> bool {
        a < b
    }
}

/// A heap that pops its largest element first.
pub type MaxHeap<T> = Heap<T, MaxFirst>;

/// A heap that pops its smallest element first.
pub type MinHeap<T> = Heap<T, MinFirst>;

/// A binary heap ordered by `O`.
///
/// | [insert]       | [extract_top]  | [peek_top] | [heapify][Heap::from] |
/// |----------------|----------------|------------|-----------------------|
/// | *O*(log *n*)   | *O*(log *n*)   | *O*(1)     | *O*(*n*)              |
///
/// [insert]: Heap::insert
/// [extract_top]: Heap::extract_top
/// [peek_top]: Heap::peek_top
pub struct Heap<T, O = MaxFirst> {
    elements: Vec<T>,
    _order: PhantomData<O>,
}

impl<T, O> Default for Heap<T, O> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, O> Clone for Heap<T, O>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        Self {
            elements: self.elements.clone(),
            _order: PhantomData,
        }
    }
}

impl<T, O> fmt::Debug for Heap<T, O>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Heap")
            .field("elements", &self.elements)
            .finish()
    }
}

impl<T, O> Heap<T, O> {
    /// Generates a new, empty `Heap`. Nothing is allocated until the first insert, which reserves
    /// [`DEFAULT_INITIAL_CAPACITY`] slots.
    pub fn new() -> Self {
        Self {
            elements: Vec::new(),
            _order: PhantomData,
        }
    }

    /// Generates an empty `Heap` with room for `capacity` elements.
    ///
    /// # Panics
    ///
    /// Like [`Vec::with_capacity`], if the allocation is too large. See
    /// [`try_with_capacity`][Heap::try_with_capacity] for the fallible version.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            elements: Vec::with_capacity(capacity),
            _order: PhantomData,
        }
    }

    /// Generates an empty `Heap` with room for `capacity` elements or reports why that much
    /// storage couldn't be allocated.
    ///
    /// # Examples
    ///
    /// ```
    /// use datastructs::error::Error;
    /// use datastructs::heap::MinHeap;
    ///
    /// let heap = MinHeap::<u64>::try_with_capacity(16).unwrap();
    /// assert!(heap.capacity() >= 16);
    ///
    /// let too_big = MinHeap::<u64>::try_with_capacity(usize::MAX);
    /// assert!(matches!(too_big, Err(Error::Alloc(_))));
    /// ```
    pub fn try_with_capacity(capacity: usize) -> Result<Self> {
        let mut heap = Self::new();
        heap.elements.try_reserve_exact(capacity)?;
        Ok(heap)
    }

    /// The top of the heap without removing it, or `None` if the heap is empty.
    pub fn peek_top(&self) -> Option<&T> {
        self.elements.first()
    }

    /// How many elements are in the heap.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether the heap holds no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// How many elements the heap can hold before it has to grow.
    pub fn capacity(&self) -> usize {
        self.elements.capacity()
    }

    /// Drops every element. The allocated capacity is kept.
    pub fn clear(&mut self) {
        self.elements.clear();
    }

    /// Reserves room for at least `additional` more elements.
    pub fn reserve(&mut self, additional: usize) {
        self.elements.reserve(additional);
    }

    /// Reserves room for at least `additional` more elements or reports why it couldn't.
    pub fn try_reserve(&mut self, additional: usize) -> Result<()> {
        Ok(self.elements.try_reserve(additional)?)
    }

    /// Iterates over the elements in storage (level) order, which is not sorted.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }

    /// The elements in storage (level) order.
    pub fn into_vec(self) -> Vec<T> {
        self.elements
    }

    /// Element at 1-based position `k`.
    fn at(&self, k: usize) -> &T {
        &self.elements[k - 1]
    }

    fn swap(&mut self, i: usize, j: usize) {
        self.elements.swap(i - 1, j - 1);
    }

    /// Doubles the capacity when the heap is full, starting from [`DEFAULT_INITIAL_CAPACITY`] if
    /// nothing was ever allocated.
    fn grow_if_full(&mut self) {
        let capacity = self.elements.capacity();
        if self.elements.len() == capacity {
            let additional = if capacity == 0 {
                DEFAULT_INITIAL_CAPACITY
            } else {
                capacity
            };
            self.elements.reserve_exact(additional);
        }
    }
}

impl<T, O> Heap<T, O>
where
    O: Order<T>,
{
    /// Builds a heap from clones of `elements` with a single heapify pass.
    pub fn from_slice(elements: &[T]) -> Self
    where
        T: Clone,
    {
        Self::from(elements.to_vec())
    }

    /// Adds `value` to the heap.
    ///
    /// # Examples
    ///
    /// ```
    /// use datastructs::heap::MaxHeap;
    ///
    /// let mut heap = MaxHeap::new();
    /// heap.insert(1);
    /// heap.insert(7);
    /// heap.insert(3);
    ///
    /// assert_eq!(heap.peek_top(), Some(&7));
    /// assert_eq!(heap.len(), 3);
    /// ```
    pub fn insert(&mut self, value: T) {
        self.grow_if_full();
        self.elements.push(value);
        self.sift_up(self.elements.len());
    }

    /// Removes the top of the heap and returns it, or `None` if the heap is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use datastructs::heap::MinHeap;
    ///
    /// let mut heap = MinHeap::from([5, 2, 8]);
    /// assert_eq!(heap.extract_top(), Some(2));
    /// assert_eq!(heap.extract_top(), Some(5));
    /// assert_eq!(heap.extract_top(), Some(8));
    /// assert_eq!(heap.extract_top(), None);
    /// ```
    pub fn extract_top(&mut self) -> Option<T> {
        if self.elements.is_empty() {
            return None;
        }
        // Moves the last element into the root slot.
        let top = self.elements.swap_remove(0);
        if !self.elements.is_empty() {
            self.sift_down(1);
        }
        Some(top)
    }

    /// Removes the top of the heap without returning it. Returns whether anything was removed.
    pub fn remove_top(&mut self) -> bool {
        self.extract_top().is_some()
    }

    /// Drains the heap in extraction order: descending for [`MaxHeap`], ascending for
    /// [`MinHeap`].
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.len());
        while let Some(top) = self.extract_top() {
            sorted.push(top);
        }
        sorted
    }

    /// Moves the element at position `k` up until its parent precedes it (or it's the root).
    fn sift_up(&mut self, mut k: usize) {
        while k > 1 {
            let parent = k / 2;
            if !O::precedes(self.at(k), self.at(parent)) {
                break;
            }
            self.swap(k, parent);
            k = parent;
        }

        if cfg!(debug_assertions) && k > 1 {
            assert!(!O::precedes(self.at(k), self.at(k / 2)));
        }
    }

    /// Moves the element at position `k` down, swapping with the more extreme child, until no
    /// child precedes it. When both children are equally extreme the right child (`2k + 1`) is
    /// taken.
    fn sift_down(&mut self, mut k: usize) {
        let len = self.elements.len();
        loop {
            let mut child = 2 * k;
            if child > len {
                break;
            }
            if child < len && !O::precedes(self.at(child), self.at(child + 1)) {
                child += 1;
            }
            if !O::precedes(self.at(child), self.at(k)) {
                break;
            }
            self.swap(k, child);
            k = child;
        }

        if cfg!(debug_assertions) {
            for child in [2 * k, 2 * k + 1] {
                if child <= len {
                    assert!(!O::precedes(self.at(child), self.at(k)));
                }
            }
        }
    }

    /// Restores the heap property over the whole array with one bottom-up pass.
    fn heapify(&mut self) {
        for k in (1..=self.elements.len() / 2).rev() {
            self.sift_down(k);
        }
    }
}

impl<T, O> From<Vec<T>> for Heap<T, O>
where
    O: Order<T>,
{
    /// Takes ownership of `elements` and heapifies them in place in `O(n)`.
    fn from(elements: Vec<T>) -> Self {
        let mut heap = Self {
            elements,
            _order: PhantomData,
        };
        heap.heapify();
        heap
    }
}

impl<T, O, const N: usize> From<[T; N]> for Heap<T, O>
where
    O: Order<T>,
{
    fn from(elements: [T; N]) -> Self {
        Self::from(Vec::from(elements))
    }
}

impl<T, O> FromIterator<T> for Heap<T, O>
where
    O: Order<T>,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<T, O> Extend<T> for Heap<T, O>
where
    O: Order<T>,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}
