//! A linked binary tree and the traversal engine shared by the trees in this crate.
//!
//! Nodes live in an arena owned by the [`BinaryTree`] and refer to each other through
//! [`NodeId`]s. Every node knows its parent as well as its two children, which is what lets
//! [`next_in_order`][BinaryTree::next_in_order] and
//! [`prev_in_order`][BinaryTree::prev_in_order] walk upwards without a stack.
//!
//! None of the traversals recurse. Depth-first orders are driven by a [`Stack`] and
//! breadth-first order by a [`Queue`], so a degenerate tree (a "linked list" of nodes) is walked
//! just as safely as a balanced one.
//!
//! # Examples
//!
//! ```
//! use datastructs::tree::BinaryTree;
//!
//! //     1
//! //    / \
//! //   2   3
//! //  /
//! // 4
//! let mut tree = BinaryTree::new();
//! let one = tree.set_root(1).unwrap();
//! let two = tree.attach_left(one, 2).unwrap();
//! tree.attach_right(one, 3).unwrap();
//! tree.attach_left(two, 4).unwrap();
//!
//! let mut pre_order = Vec::new();
//! tree.pre_order(|x| pre_order.push(*x));
//! assert_eq!(pre_order, [1, 2, 4, 3]);
//!
//! assert_eq!(tree.height(), 3);
//! assert!(tree.is_complete());
//! assert!(!tree.is_proper());
//! ```

use std::fmt;

use crate::error::{Error, Result};
use crate::queue::Queue;
use crate::stack::Stack;

/// A handle to a node in a [`BinaryTree`]. A handle stops being valid once its node is removed;
/// the slot may later be reused by another node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// What a traversal visitor wants to happen next.
///
/// Visitors may return a `Walk` directly, `()` (always continue) or a `bool` (`true` to
/// continue).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Walk {
    /// Keep visiting.
    Continue,
    /// End the traversal now.
    Stop,
}

impl From<()> for Walk {
    fn from(_: ()) -> Self {
        Walk::Continue
    }
}

impl From<bool> for Walk {
    fn from(keep_going: bool) -> Self {
        if keep_going {
            Walk::Continue
        } else {
            Walk::Stop
        }
    }
}

fn stops<R: Into<Walk>>(signal: R) -> bool {
    let walk: Walk = signal.into();
    walk == Walk::Stop
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Side {
    Left,
    Right,
}

#[derive(Clone)]
struct Node<T> {
    value: T,
    parent: Option<NodeId>,
    left: Option<NodeId>,
    right: Option<NodeId>,
}

impl<T> Node<T> {
    fn new(value: T, parent: Option<NodeId>) -> Self {
        Self {
            value,
            parent,
            left: None,
            right: None,
        }
    }

    fn child(&self, side: Side) -> Option<NodeId> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    fn child_mut(&mut self, side: Side) -> &mut Option<NodeId> {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    fn degree(&self) -> usize {
        usize::from(self.left.is_some()) + usize::from(self.right.is_some())
    }

    fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

/// A binary tree whose nodes carry parent links.
#[derive(Clone)]
pub struct BinaryTree<T> {
    nodes: Vec<Option<Node<T>>>,
    /// Slots in `nodes` freed by removals, reused before `nodes` grows.
    free: Vec<usize>,
    root: Option<NodeId>,
}

impl<T> Default for BinaryTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for BinaryTree<T>
where
    T: fmt::Debug,
{
    /// Lists the nodes in level order, each with the values of its children.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinaryTree")
            .field("nodes", &DebugLevels(self))
            .finish()
    }
}

struct DebugLevels<'a, T>(&'a BinaryTree<T>);

impl<T> fmt::Debug for DebugLevels<'_, T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tree = self.0;
        let mut list = f.debug_list();
        let mut queue = tree.root_queue();
        while let Some(id) = queue.poll() {
            list.entry(&DebugNode { tree, id });
            tree.offer_children(&mut queue, id);
        }
        list.finish()
    }
}

struct DebugNode<'a, T> {
    tree: &'a BinaryTree<T>,
    id: NodeId,
}

impl<T> fmt::Debug for DebugNode<'_, T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let node = self.tree.node(self.id);
        let value = |id: Option<NodeId>| id.map(|id| &self.tree.node(id).value);
        f.debug_struct("Node")
            .field("value", &node.value)
            .field("left", &value(node.left))
            .field("right", &value(node.right))
            .finish()
    }
}

impl<T> BinaryTree<T> {
    /// Generates a new, empty `BinaryTree`.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            free: Vec::new(),
            root: None,
        }
    }

    /// The root node, if the tree has one.
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// Whether the tree has no nodes.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Removes every node. All outstanding [`NodeId`]s become invalid.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.free.clear();
        self.root = None;
    }

    /// Makes `value` the root of an empty tree.
    ///
    /// # Errors
    ///
    /// [`Error::RootOccupied`] if the tree already has a root.
    pub fn set_root(&mut self, value: T) -> Result<NodeId> {
        if self.root.is_some() {
            return Err(Error::RootOccupied);
        }
        let id = self.alloc(Node::new(value, None));
        self.root = Some(id);
        Ok(id)
    }

    /// Attaches `value` as the left child of `parent`.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidNode`] if `parent` isn't a live node of this tree and
    /// [`Error::ChildOccupied`] if `parent` already has a left child.
    pub fn attach_left(&mut self, parent: NodeId, value: T) -> Result<NodeId> {
        self.attach(parent, Side::Left, value)
    }

    /// Attaches `value` as the right child of `parent`. Fails like
    /// [`attach_left`][BinaryTree::attach_left].
    pub fn attach_right(&mut self, parent: NodeId, value: T) -> Result<NodeId> {
        self.attach(parent, Side::Right, value)
    }

    /// The value stored at `id`.
    pub fn get(&self, id: NodeId) -> Option<&T> {
        self.try_node(id).map(|node| &node.value)
    }

    /// A mutable reference to the value stored at `id`.
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut T> {
        self.nodes
            .get_mut(id.0)
            .and_then(Option::as_mut)
            .map(|node| &mut node.value)
    }

    /// The parent of `id`. `None` for the root (or a stale handle).
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.try_node(id).and_then(|node| node.parent)
    }

    /// The left child of `id`.
    pub fn left(&self, id: NodeId) -> Option<NodeId> {
        self.try_node(id).and_then(|node| node.left)
    }

    /// The right child of `id`.
    pub fn right(&self, id: NodeId) -> Option<NodeId> {
        self.try_node(id).and_then(|node| node.right)
    }

    /// How many children `id` has: 0, 1 or 2. `None` for a stale handle.
    pub fn degree(&self, id: NodeId) -> Option<usize> {
        self.try_node(id).map(Node::degree)
    }

    /// The first node in in-order, i.e. the leftmost node.
    pub fn first(&self) -> Option<NodeId> {
        self.root.map(|root| self.leftmost(root))
    }

    /// The last node in in-order, i.e. the rightmost node.
    pub fn last(&self) -> Option<NodeId> {
        self.root.map(|root| self.rightmost(root))
    }

    /// The node visited right after `id` by an in-order traversal (its in-order successor).
    ///
    /// With a right subtree that is the subtree's leftmost node. Otherwise it is the first
    /// ancestor reached from a left child. `None` when `id` is the last node.
    pub fn next_in_order(&self, id: NodeId) -> Option<NodeId> {
        let node = self.try_node(id)?;
        if let Some(right) = node.right {
            return Some(self.leftmost(right));
        }

        let mut current = id;
        let mut parent = node.parent;
        while let Some(p) = parent {
            let p_node = self.node(p);
            if p_node.right != Some(current) {
                break;
            }
            current = p;
            parent = p_node.parent;
        }
        parent
    }

    /// The node visited right before `id` by an in-order traversal (its in-order predecessor).
    /// Mirror image of [`next_in_order`][BinaryTree::next_in_order].
    pub fn prev_in_order(&self, id: NodeId) -> Option<NodeId> {
        let node = self.try_node(id)?;
        if let Some(left) = node.left {
            return Some(self.rightmost(left));
        }

        let mut current = id;
        let mut parent = node.parent;
        while let Some(p) = parent {
            let p_node = self.node(p);
            if p_node.left != Some(current) {
                break;
            }
            current = p;
            parent = p_node.parent;
        }
        parent
    }

    /// Visits root, then left subtree, then right subtree. Returns [`Walk::Stop`] if the visitor
    /// ended the traversal early.
    pub fn pre_order<F, R>(&self, mut visit: F) -> Walk
    where
        F: FnMut(&T) -> R,
        R: Into<Walk>,
    {
        let mut stack = Stack::new();
        if let Some(root) = self.root {
            stack.push(root);
        }
        while let Some(id) = stack.pop() {
            let node = self.node(id);
            if stops(visit(&node.value)) {
                return Walk::Stop;
            }
            // Right first so that left is popped first.
            if let Some(right) = node.right {
                stack.push(right);
            }
            if let Some(left) = node.left {
                stack.push(left);
            }
        }
        Walk::Continue
    }

    /// Visits left subtree, then root, then right subtree. For a search tree this is ascending
    /// order.
    pub fn in_order<F, R>(&self, mut visit: F) -> Walk
    where
        F: FnMut(&T) -> R,
        R: Into<Walk>,
    {
        let mut stack = Stack::new();
        let mut current = self.root;
        loop {
            while let Some(id) = current {
                stack.push(id);
                current = self.node(id).left;
            }
            let Some(id) = stack.pop() else {
                return Walk::Continue;
            };
            let node = self.node(id);
            if stops(visit(&node.value)) {
                return Walk::Stop;
            }
            current = node.right;
        }
    }

    /// Visits left subtree, then right subtree, then root.
    pub fn post_order<F, R>(&self, mut visit: F) -> Walk
    where
        F: FnMut(&T) -> R,
        R: Into<Walk>,
    {
        let mut stack = Stack::new();
        let mut current = self.root;
        let mut last_visited = None;
        loop {
            while let Some(id) = current {
                stack.push(id);
                current = self.node(id).left;
            }
            let Some(id) = stack.pop() else {
                return Walk::Continue;
            };
            let node = self.node(id);
            if node.right.is_none() || node.right == last_visited {
                // Both subtrees are done.
                if stops(visit(&node.value)) {
                    return Walk::Stop;
                }
                last_visited = Some(id);
            } else {
                stack.push(id);
                current = node.right;
            }
        }
    }

    /// Visits the tree level by level, left to right.
    pub fn level_order<F, R>(&self, mut visit: F) -> Walk
    where
        F: FnMut(&T) -> R,
        R: Into<Walk>,
    {
        let mut queue = self.root_queue();
        while let Some(id) = queue.poll() {
            if stops(visit(&self.node(id).value)) {
                return Walk::Stop;
            }
            self.offer_children(&mut queue, id);
        }
        Walk::Continue
    }

    /// The number of levels in the tree. An empty tree has height 0 and a lone root height 1.
    pub fn height(&self) -> usize {
        let mut queue = self.root_queue();
        let mut height = 0;
        while !queue.is_empty() {
            for _ in 0..queue.len() {
                if let Some(id) = queue.poll() {
                    self.offer_children(&mut queue, id);
                }
            }
            height += 1;
        }
        height
    }

    /// The number of nodes, counted by walking the tree.
    pub fn len(&self) -> usize {
        let mut count = 0;
        self.pre_order(|_| count += 1);
        count
    }

    /// Whether every node has either no children or two.
    pub fn is_proper(&self) -> bool {
        let mut queue = self.root_queue();
        while let Some(id) = queue.poll() {
            if self.node(id).degree() == 1 {
                return false;
            }
            self.offer_children(&mut queue, id);
        }
        true
    }

    /// Whether every level holds as many nodes as it can (`2^level`), i.e. the tree is perfect.
    pub fn is_full(&self) -> bool {
        let mut queue = self.root_queue();
        let mut capacity = 1usize;
        while !queue.is_empty() {
            let level_len = queue.len();
            if level_len != capacity {
                return false;
            }
            for _ in 0..level_len {
                if let Some(id) = queue.poll() {
                    self.offer_children(&mut queue, id);
                }
            }
            capacity = capacity.saturating_mul(2);
        }
        true
    }

    /// Whether the tree is complete: every level is full except possibly the last, whose nodes
    /// are packed to the left.
    pub fn is_complete(&self) -> bool {
        let mut queue = self.root_queue();
        // Set once a node with a missing child is seen. Every later node must be a leaf.
        let mut leaves_only = false;
        while let Some(id) = queue.poll() {
            let node = self.node(id);
            if leaves_only && !node.is_leaf() {
                return false;
            }
            match (node.left, node.right) {
                (Some(left), Some(right)) => {
                    queue.offer(left);
                    queue.offer(right);
                }
                (Some(left), None) => {
                    queue.offer(left);
                    leaves_only = true;
                }
                (None, Some(_)) => return false,
                (None, None) => leaves_only = true,
            }
        }
        true
    }

    /// Iterates over the values in in-order, following successor links.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            tree: self,
            next: self.first(),
        }
    }

    /// Attaches a new node under `parent`, which must be live with an empty `side` slot.
    pub(crate) fn push_child(&mut self, parent: NodeId, side: Side, value: T) -> NodeId {
        debug_assert!(self.node(parent).child(side).is_none());
        let id = self.alloc(Node::new(value, Some(parent)));
        *self.node_mut(parent).child_mut(side) = Some(id);
        id
    }

    /// Exchanges the values of two live nodes, leaving the links untouched.
    pub(crate) fn swap_values(&mut self, a: NodeId, b: NodeId) {
        if a == b {
            return;
        }
        let (low, high) = if a.0 < b.0 { (a.0, b.0) } else { (b.0, a.0) };
        let (head, tail) = self.nodes.split_at_mut(high);
        if let (Some(x), Some(y)) = (head[low].as_mut(), tail[0].as_mut()) {
            std::mem::swap(&mut x.value, &mut y.value);
        }
    }

    /// Removes a node with at most one child and returns its value. The child (if any) takes
    /// the node's place under its parent, or becomes the root.
    pub(crate) fn unlink(&mut self, id: NodeId) -> T {
        let node = self.node(id);
        debug_assert!(node.degree() < 2, "only nodes with at most one child can be unlinked");
        let parent = node.parent;
        let child = node.left.or(node.right);

        if let Some(child) = child {
            self.node_mut(child).parent = parent;
        }
        match parent {
            None => self.root = child,
            Some(parent) => {
                let parent = self.node_mut(parent);
                if parent.left == Some(id) {
                    parent.left = child;
                } else {
                    parent.right = child;
                }
            }
        }

        self.release(id)
    }

    fn attach(&mut self, parent: NodeId, side: Side, value: T) -> Result<NodeId> {
        let occupied = self.try_node(parent).ok_or(Error::InvalidNode)?.child(side);
        if occupied.is_some() {
            return Err(Error::ChildOccupied);
        }
        Ok(self.push_child(parent, side, value))
    }

    fn alloc(&mut self, node: Node<T>) -> NodeId {
        match self.free.pop() {
            Some(slot) => {
                self.nodes[slot] = Some(node);
                NodeId(slot)
            }
            None => {
                self.nodes.push(Some(node));
                NodeId(self.nodes.len() - 1)
            }
        }
    }

    fn release(&mut self, id: NodeId) -> T {
        let node = self.nodes[id.0].take().expect("released node is live");
        self.free.push(id.0);
        node.value
    }

    fn try_node(&self, id: NodeId) -> Option<&Node<T>> {
        self.nodes.get(id.0).and_then(Option::as_ref)
    }

    /// The node behind an id taken from the tree's own links, which are always live.
    fn node(&self, id: NodeId) -> &Node<T> {
        self.try_node(id).expect("linked node is live")
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node<T> {
        self.nodes
            .get_mut(id.0)
            .and_then(Option::as_mut)
            .expect("linked node is live")
    }

    fn leftmost(&self, mut id: NodeId) -> NodeId {
        while let Some(left) = self.node(id).left {
            id = left;
        }
        id
    }

    fn rightmost(&self, mut id: NodeId) -> NodeId {
        while let Some(right) = self.node(id).right {
            id = right;
        }
        id
    }

    fn root_queue(&self) -> Queue<NodeId> {
        let mut queue = Queue::new();
        if let Some(root) = self.root {
            queue.offer(root);
        }
        queue
    }

    fn offer_children(&self, queue: &mut Queue<NodeId>, id: NodeId) {
        let node = self.node(id);
        if let Some(left) = node.left {
            queue.offer(left);
        }
        if let Some(right) = node.right {
            queue.offer(right);
        }
    }
}

/// In-order iterator over a [`BinaryTree`]. Created by [`BinaryTree::iter`].
pub struct Iter<'a, T> {
    tree: &'a BinaryTree<T>,
    next: Option<NodeId>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next?;
        self.next = self.tree.next_in_order(id);
        self.tree.get(id)
    }
}

impl<'a, T> IntoIterator for &'a BinaryTree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
