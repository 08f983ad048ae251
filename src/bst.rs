//! An unbalanced Binary Search Tree built on [`BinaryTree`].
//!
//! Values are their own keys: for every node, everything in its left subtree is smaller and
//! everything in its right subtree is larger. Inserting a value equal to one already stored
//! replaces it, so the tree never holds duplicates.
//!
//! Nothing rebalances the tree. Inserting sorted input produces a tree as tall as it is long,
//! which the iterative traversals of [`BinaryTree`] handle without recursing.
//!
//! # Examples
//!
//! ```
//! use datastructs::bst::BinarySearchTree;
//!
//! let mut tree = BinarySearchTree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.contains(&1));
//!
//! for x in [5, 3, 8, 1, 4, 7, 9] {
//!     tree.insert(x);
//! }
//! assert!(tree.contains(&4));
//! assert_eq!(tree.len(), 7);
//!
//! // Iteration is in ascending order.
//! assert!(tree.iter().copied().eq([1, 3, 4, 5, 7, 8, 9]));
//!
//! // Removing a value returns it.
//! assert_eq!(tree.remove(&5), Some(5));
//! assert_eq!(tree.remove(&5), None);
//! assert_eq!(tree.len(), 6);
//! ```

use std::cmp::Ordering;
use std::fmt;

use crate::tree::{BinaryTree, Iter, NodeId, Side, Walk};

/// A Binary Search Tree. This can be used for inserting, finding, and removing values.
#[derive(Clone)]
pub struct BinarySearchTree<T> {
    tree: BinaryTree<T>,
    len: usize,
}

impl<T> Default for BinarySearchTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for BinarySearchTree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T> BinarySearchTree<T> {
    /// Generates a new, empty `BinarySearchTree`.
    pub fn new() -> Self {
        Self {
            tree: BinaryTree::new(),
            len: 0,
        }
    }

    /// The number of values in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Drops every value.
    pub fn clear(&mut self) {
        self.tree.clear();
        self.len = 0;
    }

    /// The underlying linked tree, for navigating nodes directly.
    pub fn as_tree(&self) -> &BinaryTree<T> {
        &self.tree
    }

    /// The smallest value.
    pub fn first(&self) -> Option<&T> {
        self.tree.first().and_then(|id| self.tree.get(id))
    }

    /// The largest value.
    pub fn last(&self) -> Option<&T> {
        self.tree.last().and_then(|id| self.tree.get(id))
    }

    /// Iterates over the values in ascending order.
    pub fn iter(&self) -> Iter<'_, T> {
        self.tree.iter()
    }

    /// See [`BinaryTree::pre_order`].
    pub fn pre_order<F, R>(&self, visit: F) -> Walk
    where
        F: FnMut(&T) -> R,
        R: Into<Walk>,
    {
        self.tree.pre_order(visit)
    }

    /// Visits the values in ascending order. See [`BinaryTree::in_order`].
    pub fn in_order<F, R>(&self, visit: F) -> Walk
    where
        F: FnMut(&T) -> R,
        R: Into<Walk>,
    {
        self.tree.in_order(visit)
    }

    /// See [`BinaryTree::post_order`].
    pub fn post_order<F, R>(&self, visit: F) -> Walk
    where
        F: FnMut(&T) -> R,
        R: Into<Walk>,
    {
        self.tree.post_order(visit)
    }

    /// See [`BinaryTree::level_order`].
    pub fn level_order<F, R>(&self, visit: F) -> Walk
    where
        F: FnMut(&T) -> R,
        R: Into<Walk>,
    {
        self.tree.level_order(visit)
    }

    /// See [`BinaryTree::height`].
    pub fn height(&self) -> usize {
        self.tree.height()
    }

    /// See [`BinaryTree::is_proper`].
    pub fn is_proper(&self) -> bool {
        self.tree.is_proper()
    }

    /// See [`BinaryTree::is_full`].
    pub fn is_full(&self) -> bool {
        self.tree.is_full()
    }

    /// See [`BinaryTree::is_complete`].
    pub fn is_complete(&self) -> bool {
        self.tree.is_complete()
    }
}

impl<T> BinarySearchTree<T>
where
    T: Ord,
{
    /// Inserts `value` into the tree. If an equal value is already stored it is replaced and
    /// returned, and the length doesn't change.
    ///
    /// # Examples
    ///
    /// ```
    /// use datastructs::bst::BinarySearchTree;
    ///
    /// let mut tree = BinarySearchTree::new();
    ///
    /// assert_eq!(tree.insert(1), None);
    /// assert_eq!(tree.insert(1), Some(1));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, value: T) -> Option<T> {
        let Some(mut current) = self.tree.root() else {
            self.tree
                .set_root(value)
                .expect("an empty tree accepts a root");
            self.len += 1;
            return None;
        };

        loop {
            let side = match value.cmp(self.value(current)) {
                Ordering::Less => Side::Left,
                Ordering::Greater => Side::Right,
                Ordering::Equal => {
                    let slot = self.tree.get_mut(current).expect("searched node is live");
                    return Some(std::mem::replace(slot, value));
                }
            };
            let child = match side {
                Side::Left => self.tree.left(current),
                Side::Right => self.tree.right(current),
            };
            match child {
                Some(child) => current = child,
                None => {
                    let id = self.tree.push_child(current, side, value);
                    self.len += 1;

                    if cfg!(debug_assertions) {
                        let parent = self.value(current);
                        match side {
                            Side::Left => assert!(self.value(id) < parent),
                            Side::Right => assert!(self.value(id) > parent),
                        }
                    }
                    return None;
                }
            }
        }
    }

    /// Whether a value equal to `value` is stored in the tree.
    pub fn contains(&self, value: &T) -> bool {
        self.find_node(value).is_some()
    }

    /// The stored value equal to `value`, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use datastructs::bst::BinarySearchTree;
    ///
    /// let tree: BinarySearchTree<_> = [2, 1, 3].into_iter().collect();
    ///
    /// assert_eq!(tree.find(&2), Some(&2));
    /// assert_eq!(tree.find(&42), None);
    /// ```
    pub fn find(&self, value: &T) -> Option<&T> {
        self.find_node(value).and_then(|id| self.tree.get(id))
    }

    /// Removes the value equal to `value` from the tree and returns it. If the tree does not
    /// contain such a value, nothing happens.
    ///
    /// A node with two children keeps its place in the tree: it takes over the value of its
    /// in-order successor, which has no left child, and the successor's node is removed instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use datastructs::bst::BinarySearchTree;
    ///
    /// let mut tree: BinarySearchTree<_> = [2, 1, 3].into_iter().collect();
    ///
    /// assert_eq!(tree.remove(&2), Some(2));
    /// assert_eq!(tree.remove(&2), None);
    /// assert!(tree.iter().copied().eq([1, 3]));
    /// ```
    pub fn remove(&mut self, value: &T) -> Option<T> {
        let mut target = self.find_node(value)?;
        if self.tree.degree(target) == Some(2) {
            let successor = self
                .tree
                .next_in_order(target)
                .expect("a node with a right child has a successor");
            self.tree.swap_values(target, successor);
            target = successor;
        }

        let removed = self.tree.unlink(target);
        self.len -= 1;
        Some(removed)
    }

    fn find_node(&self, value: &T) -> Option<NodeId> {
        let mut current = self.tree.root();
        while let Some(id) = current {
            current = match value.cmp(self.value(id)) {
                Ordering::Less => self.tree.left(id),
                Ordering::Equal => return Some(id),
                Ordering::Greater => self.tree.right(id),
            };
        }
        None
    }

    fn value(&self, id: NodeId) -> &T {
        self.tree.get(id).expect("linked node is live")
    }
}

impl<T> FromIterator<T> for BinarySearchTree<T>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T> Extend<T> for BinarySearchTree<T>
where
    T: Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a, T> IntoIterator for &'a BinarySearchTree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> BinarySearchTree<i32> {
        [5, 3, 8, 1, 4, 7, 9].into_iter().collect()
    }

    fn values(walk: impl FnOnce(&mut dyn FnMut(&i32))) -> Vec<i32> {
        let mut out = Vec::new();
        walk(&mut |x| out.push(*x));
        out
    }

    /// Asserts the ordering invariant and parent links of every node.
    fn assert_bst(tree: &BinarySearchTree<i32>) {
        let inner = tree.as_tree();
        let mut pending: Vec<_> = inner.root().into_iter().collect();
        if let Some(root) = inner.root() {
            assert_eq!(inner.parent(root), None);
        }
        while let Some(id) = pending.pop() {
            let value = inner.get(id).unwrap();
            if let Some(left) = inner.left(id) {
                assert!(inner.get(left).unwrap() < value);
                assert_eq!(inner.parent(left), Some(id));
                pending.push(left);
            }
            if let Some(right) = inner.right(id) {
                assert!(inner.get(right).unwrap() > value);
                assert_eq!(inner.parent(right), Some(id));
                pending.push(right);
            }
        }

        let in_order: Vec<_> = tree.iter().copied().collect();
        assert!(in_order.windows(2).all(|w| w[0] < w[1]), "{:?}", in_order);
        assert_eq!(in_order.len(), tree.len());
        assert_eq!(inner.len(), tree.len());
    }

    #[test]
    fn traversal_orders() {
        let tree = sample();
        assert_bst(&tree);

        assert_eq!(
            values(|v| {
                tree.pre_order(v);
            }),
            [5, 3, 1, 4, 8, 7, 9]
        );
        assert_eq!(
            values(|v| {
                tree.in_order(v);
            }),
            [1, 3, 4, 5, 7, 8, 9]
        );
        assert_eq!(
            values(|v| {
                tree.post_order(v);
            }),
            [1, 4, 3, 7, 9, 8, 5]
        );
        assert_eq!(
            values(|v| {
                tree.level_order(v);
            }),
            [5, 3, 8, 1, 4, 7, 9]
        );
    }

    #[test]
    fn shape_queries() {
        let tree = sample();
        assert_eq!(tree.height(), 3);
        assert!(tree.is_proper());
        assert!(tree.is_full());
        assert!(tree.is_complete());
        assert_eq!(tree.first(), Some(&1));
        assert_eq!(tree.last(), Some(&9));

        // Dropping 9 leaves the last level packed to the left.
        let mut packed = tree.clone();
        packed.remove(&9);
        assert!(!packed.is_proper());
        assert!(!packed.is_full());
        assert!(packed.is_complete());

        // Dropping 1 leaves 3 with only a right child.
        let mut tree = tree;
        tree.remove(&1);
        assert!(!tree.is_proper());
        assert!(!tree.is_full());
        assert!(!tree.is_complete());

        // 3 is now a leaf but 8 still has children.
        tree.remove(&4);
        assert!(tree.is_proper());
        assert!(!tree.is_full());
        assert!(!tree.is_complete());
    }

    #[test]
    fn always_adding_right() {
        let mut tree = BinarySearchTree::new();
        for key in 1..=10 {
            tree.insert(key);
        }
        assert_eq!(tree.height(), 10);
        assert_eq!(tree.len(), 10);
        assert!((1..=10).all(|key| tree.contains(&key)));
        assert_bst(&tree);
    }

    #[test]
    fn always_adding_left() {
        let mut tree = BinarySearchTree::new();
        for key in (1..=10).rev() {
            tree.insert(key);
        }
        assert_eq!(tree.height(), 10);
        assert_eq!(tree.first(), Some(&1));
        assert_bst(&tree);
    }

    #[test]
    fn equal_insert_overwrites() {
        // Ordered by the first field only.
        #[derive(Debug, PartialEq, Eq)]
        struct Entry(i32, &'static str);
        impl PartialOrd for Entry {
            fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
                Some(self.cmp(other))
            }
        }
        impl Ord for Entry {
            fn cmp(&self, other: &Self) -> Ordering {
                self.0.cmp(&other.0)
            }
        }

        let mut tree = BinarySearchTree::new();
        assert_eq!(tree.insert(Entry(1, "old")), None);
        tree.insert(Entry(0, "left"));
        assert_eq!(tree.insert(Entry(1, "new")), Some(Entry(1, "old")));
        assert_eq!(tree.len(), 2);
        assert_eq!(tree.find(&Entry(1, "")).map(|e| e.1), Some("new"));
    }

    #[test]
    fn remove_missing_is_noop() {
        let mut tree = sample();
        assert_eq!(tree.remove(&6), None);
        assert_eq!(tree.len(), 7);

        let mut empty: BinarySearchTree<i32> = BinarySearchTree::new();
        assert_eq!(empty.remove(&6), None);
        assert_eq!(empty.len(), 0);
    }

    #[test]
    fn delete_with_no_children() {
        let mut tree = sample();
        assert_eq!(tree.remove(&7), Some(7));
        assert!(!tree.contains(&7));
        assert_eq!(tree.len(), 6);
        assert_bst(&tree);
    }

    #[test]
    fn delete_with_null_left() {
        let mut tree: BinarySearchTree<_> = [5, 3, 7, 9].into_iter().collect();
        assert_eq!(tree.remove(&7), Some(7));
        assert!(tree.iter().copied().eq([3, 5, 9]));

        let inner = tree.as_tree();
        let root = inner.root().unwrap();
        let nine = inner.right(root).unwrap();
        assert_eq!(inner.get(nine), Some(&9));
        assert_eq!(inner.parent(nine), Some(root));
        assert_bst(&tree);
    }

    #[test]
    fn delete_with_null_right() {
        let mut tree: BinarySearchTree<_> = [5, 3, 7, 6].into_iter().collect();
        assert_eq!(tree.remove(&7), Some(7));
        assert!(tree.iter().copied().eq([3, 5, 6]));
        assert_bst(&tree);
    }

    #[test]
    fn delete_with_two_children_uses_successor() {
        let mut tree = sample();
        let root = tree.as_tree().root().unwrap();

        // 3 has children 1 and 4; its successor 4 is a leaf.
        assert_eq!(tree.remove(&3), Some(3));
        let inner = tree.as_tree();
        let left = inner.left(root).unwrap();
        assert_eq!(inner.get(left), Some(&4));
        assert_eq!(inner.right(left), None);
        assert_bst(&tree);

        // The root keeps its node but takes its successor's value.
        assert_eq!(tree.remove(&5), Some(5));
        assert_eq!(tree.as_tree().root(), Some(root));
        assert_eq!(tree.as_tree().get(root), Some(&7));
        assert_eq!(tree.len(), 5);
        assert_bst(&tree);
    }

    #[test]
    fn delete_with_deeper_successor() {
        //     5
        //    / \
        //   2   8
        //      / \
        //     6   9
        //      \
        //       7
        let mut tree: BinarySearchTree<_> = [5, 2, 8, 6, 9, 7].into_iter().collect();
        assert_eq!(tree.remove(&5), Some(5));

        // 6 was the successor; its right child 7 takes its place under 8.
        let inner = tree.as_tree();
        let root = inner.root().unwrap();
        assert_eq!(inner.get(root), Some(&6));
        let eight = inner.right(root).unwrap();
        let seven = inner.left(eight).unwrap();
        assert_eq!(inner.get(seven), Some(&7));
        assert_eq!(inner.parent(seven), Some(eight));
        assert_bst(&tree);
    }

    #[test]
    fn delete_root() {
        let mut tree = BinarySearchTree::new();
        tree.insert(5);
        assert_eq!(tree.remove(&5), Some(5));
        assert!(tree.is_empty());
        assert_eq!(tree.as_tree().root(), None);

        // A root with one child hands over to it.
        tree.insert(5);
        tree.insert(3);
        tree.remove(&5);
        let inner = tree.as_tree();
        assert_eq!(inner.root().and_then(|root| inner.get(root)), Some(&3));
        assert_bst(&tree);
    }

    #[test]
    fn remove_everything_in_any_order() {
        let inserted = [50, 30, 70, 20, 40, 60, 80, 35, 45, 65];
        let orders: [&[i32]; 3] = [
            &[50, 30, 70, 20, 40, 60, 80, 35, 45, 65],
            &[65, 45, 35, 80, 60, 40, 20, 70, 30, 50],
            &[40, 50, 20, 65, 30, 80, 35, 70, 45, 60],
        ];
        for order in orders {
            let mut tree: BinarySearchTree<_> = inserted.into_iter().collect();
            for (removed, x) in order.iter().enumerate() {
                assert_eq!(tree.remove(x), Some(*x));
                assert_eq!(tree.len(), inserted.len() - removed - 1);
                assert_bst(&tree);
            }
            assert!(tree.is_empty());
            assert_eq!(tree.as_tree().root(), None);
        }
    }

    #[test]
    fn clear_and_reuse() {
        let mut tree = sample();
        tree.clear();
        assert!(tree.is_empty());
        assert_eq!(tree.height(), 0);
        assert_eq!(tree.iter().next(), None);

        tree.insert(1);
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn debug_lists_values_in_order() {
        assert_eq!(format!("{:?}", sample()), "{1, 3, 4, 5, 7, 8, 9}");
    }
}
