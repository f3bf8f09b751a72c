//! A mutable BST holding a set of distinct, totally-ordered values. Mutations
//! operate in place by rewiring owned child links. The tree never rebalances
//! itself; callers detect degraded shape with [`Tree::is_balanced`] and
//! restore minimal height with [`Tree::rebalance`].
//!
//! # Examples
//!
//! ```
//! use bst_set::tree::Tree;
//!
//! // Duplicates collapse and the result is balanced.
//! let mut tree = Tree::build(&[1, 5, 7, 3, 2, 4, 1, 2, 3, 4, 5, 1]);
//! assert_eq!(tree.height(), 2);
//! assert!(tree.is_balanced());
//!
//! // A run of ascending inserts degrades the shape...
//! for value in [15, 6, 17, 14] {
//!     tree.insert(value);
//! }
//! assert!(!tree.is_balanced());
//!
//! // ...until the tree is rebuilt from its sorted contents.
//! tree.rebalance();
//! assert!(tree.is_balanced());
//! ```

use std::cmp::Ordering;
use std::collections::VecDeque;
use std::fmt;
use std::ptr;

use thiserror::Error;

/// Errors raised by the traversal operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TraversalError {
    /// A traversal was requested without a visitor callback. The traversal
    /// aborts before any node is visited.
    #[error("a visitor callback is required for traversal")]
    MissingVisitor,
}

/// A visitor callback handed to the traversal operations, invoked exactly
/// once per node in traversal order. `None` makes the traversal fail with
/// [`TraversalError::MissingVisitor`].
pub type Visitor<'a, T> = Option<&'a mut dyn FnMut(&Node<T>)>;

type Link<T> = Option<Box<Node<T>>>;

/// A single tree node: one value and two optional owned children. Handles to
/// nodes are obtained through [`Tree::find`] and the traversal visitors; they
/// are shared borrows, so the borrow checker prevents holding one across a
/// mutation of the tree.
#[derive(Debug, Clone)]
pub struct Node<T> {
    value: T,
    left: Link<T>,
    right: Link<T>,
}

impl<T> Node<T> {
    fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    /// The value stored in this node.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// This node's left child, if present.
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// This node's right child, if present.
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// The number of edges on the longest downward path from this node to a
    /// leaf. A leaf has height 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_set::tree::Tree;
    ///
    /// let tree = Tree::build(&[1, 2, 3]);
    /// let root = tree.find(&2).unwrap();
    /// let leaf = tree.find(&1).unwrap();
    ///
    /// assert_eq!(root.height(), 1);
    /// assert_eq!(leaf.height(), 0);
    /// ```
    pub fn height(&self) -> i32 {
        let left = self.left().map_or(-1, Self::height);
        let right = self.right().map_or(-1, Self::height);
        1 + left.max(right)
    }

    fn find(&self, value: &T) -> Option<&Self>
    where
        T: Ord,
    {
        match value.cmp(&self.value) {
            Ordering::Less => self.left().and_then(|n| n.find(value)),
            Ordering::Equal => Some(self),
            Ordering::Greater => self.right().and_then(|n| n.find(value)),
        }
    }
}

/// A Binary Search Tree holding a set of distinct values. This can be used
/// for inserting, finding, and deleting values, for visiting the values in
/// four traversal orders, and for checking and restoring balance.
#[derive(Debug, Clone)]
pub struct Tree<T> {
    root: Link<T>,
    /// The values the tree was originally built from, kept as provenance.
    /// Never consulted by the tree operations.
    source: Vec<T>,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self {
            root: None,
            source: Vec::new(),
        }
    }

    /// Builds a balanced tree from the given values. The values may be
    /// unsorted and may contain duplicates; each distinct value is stored
    /// once. The resulting tree has minimal height for its value set and
    /// its shape is deterministic: the root of every subtree is the
    /// midpoint `floor((start + end) / 2)` of its sorted sub-range.
    ///
    /// An empty slice yields a valid empty tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_set::tree::Tree;
    ///
    /// let tree = Tree::build(&[1, 5, 7, 3, 2, 4, 1, 2, 3, 4, 5, 1]);
    ///
    /// assert!(tree.is_balanced());
    /// assert_eq!(tree.height(), 2);
    /// assert!(tree.find(&7).is_some());
    /// assert!(tree.find(&6).is_none());
    /// ```
    pub fn build(values: &[T]) -> Self
    where
        T: Ord + Clone,
    {
        let source = values.to_vec();
        let mut unique = source.clone();
        unique.sort_unstable();
        unique.dedup();

        let len = unique.len();
        let root = build_sorted(&mut unique.into_iter(), len);
        Self { root, source }
    }

    /// The values this tree was originally constructed from, duplicates and
    /// all. Mutations do not update this record.
    pub fn source(&self) -> &[T] {
        &self.source
    }

    /// Potentially finds the node holding the given value in this tree. If
    /// no node has the value, `None` is returned. Takes `O(height)` time.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_set::tree::Tree;
    ///
    /// let tree = Tree::build(&[1, 2, 3]);
    ///
    /// assert_eq!(tree.find(&1).map(|node| *node.value()), Some(1));
    /// assert_eq!(tree.find(&42).map(|node| *node.value()), None);
    /// ```
    pub fn find(&self, value: &T) -> Option<&Node<T>>
    where
        T: Ord,
    {
        self.root().and_then(|n| n.find(value))
    }

    /// Inserts the given value into the tree as a new leaf. Inserting a
    /// value that is already present is a silent no-op — duplicates are
    /// never stored. The tree is not rebalanced, so a long run of inserts
    /// can leave it unbalanced.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_set::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// tree.insert(1);
    /// assert!(tree.find(&1).is_some());
    ///
    /// // Already present: nothing changes.
    /// tree.insert(1);
    /// assert_eq!(tree.height(), 0);
    /// ```
    pub fn insert(&mut self, value: T)
    where
        T: Ord,
    {
        insert_at(&mut self.root, value);
    }

    /// Deletes the node holding the given value, if any. Deleting an absent
    /// value is a silent no-op. A node with two children has its value
    /// replaced by its in-order successor (the smallest value in its right
    /// subtree) and the successor's node is removed instead. Balance is not
    /// restored.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_set::tree::Tree;
    ///
    /// let mut tree = Tree::build(&[1, 2, 3]);
    /// tree.delete(&2);
    ///
    /// assert!(tree.find(&2).is_none());
    /// assert!(tree.find(&1).is_some());
    /// assert!(tree.find(&3).is_some());
    /// ```
    pub fn delete(&mut self, value: &T)
    where
        T: Ord,
    {
        delete_at(&mut self.root, value);
    }

    /// Visits every node breadth-first: shallower nodes before deeper ones,
    /// left-to-right within a level. Uses a FIFO queue seeded with the root;
    /// each dequeued node is visited and its present children are enqueued
    /// left-then-right.
    ///
    /// Fails with [`TraversalError::MissingVisitor`] if `visitor` is `None`.
    /// An empty tree produces zero visits without error.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_set::tree::Tree;
    ///
    /// let tree = Tree::build(&[1, 2, 3, 4, 5, 7]);
    ///
    /// let mut values = Vec::new();
    /// tree.level_order(Some(&mut |node| values.push(*node.value())))?;
    /// assert_eq!(values, [3, 1, 5, 2, 4, 7]);
    /// # Ok::<(), bst_set::tree::TraversalError>(())
    /// ```
    pub fn level_order(&self, visitor: Visitor<'_, T>) -> Result<(), TraversalError> {
        let visitor = visitor.ok_or(TraversalError::MissingVisitor)?;

        let mut queue: VecDeque<&Node<T>> = self.root().into_iter().collect();
        while let Some(node) = queue.pop_front() {
            visitor(node);
            if let Some(left) = node.left() {
                queue.push_back(left);
            }
            if let Some(right) = node.right() {
                queue.push_back(right);
            }
        }
        Ok(())
    }

    /// Visits every node depth-first: each node before its left subtree,
    /// its left subtree before its right subtree.
    ///
    /// Fails with [`TraversalError::MissingVisitor`] if `visitor` is `None`.
    pub fn pre_order(&self, visitor: Visitor<'_, T>) -> Result<(), TraversalError> {
        let visitor = visitor.ok_or(TraversalError::MissingVisitor)?;
        pre_order_at(self.root(), visitor);
        Ok(())
    }

    /// Visits every node depth-first: each node after its left subtree and
    /// before its right subtree. By the BST invariant this visits the values
    /// in ascending order; [`Tree::rebalance`] is built on this traversal.
    ///
    /// Fails with [`TraversalError::MissingVisitor`] if `visitor` is `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_set::tree::Tree;
    ///
    /// let tree = Tree::build(&[5, 3, 1, 4, 2, 3]);
    ///
    /// let mut values = Vec::new();
    /// tree.in_order(Some(&mut |node| values.push(*node.value())))?;
    /// assert_eq!(values, [1, 2, 3, 4, 5]);
    /// # Ok::<(), bst_set::tree::TraversalError>(())
    /// ```
    pub fn in_order(&self, visitor: Visitor<'_, T>) -> Result<(), TraversalError> {
        let visitor = visitor.ok_or(TraversalError::MissingVisitor)?;
        in_order_at(self.root(), visitor);
        Ok(())
    }

    /// Visits every node depth-first: each node after both of its subtrees,
    /// left subtree first.
    ///
    /// Fails with [`TraversalError::MissingVisitor`] if `visitor` is `None`.
    pub fn post_order(&self, visitor: Visitor<'_, T>) -> Result<(), TraversalError> {
        let visitor = visitor.ok_or(TraversalError::MissingVisitor)?;
        post_order_at(self.root(), visitor);
        Ok(())
    }

    /// The height of the whole tree: the number of edges on the longest
    /// downward path from the root to a leaf. An empty tree has height -1
    /// (the absent-node sentinel); a single-node tree has height 0.
    pub fn height(&self) -> i32 {
        self.root().map_or(-1, Node::height)
    }

    /// The number of edges from the root down to the given node. The node is
    /// located by pointer identity, not by value, so only handles obtained
    /// from this very tree (via [`Tree::find`] or a traversal) can be found.
    /// Returns -1 if the node is not reachable from the root.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_set::tree::Tree;
    ///
    /// let tree = Tree::build(&[1, 2, 3, 4, 5, 7]);
    ///
    /// let root = tree.find(&3).unwrap();
    /// assert_eq!(tree.depth(root), 0);
    ///
    /// let deep = tree.find(&2).unwrap();
    /// assert_eq!(tree.depth(deep), 2);
    /// ```
    pub fn depth(&self, node: &Node<T>) -> i32 {
        depth_at(self.root(), node, 0)
    }

    /// Whether every node's two subtrees differ in height by at most 1.
    /// This is checked recursively for all nodes, not just the root, in a
    /// single bottom-up `O(n)` pass. An empty tree is balanced.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_set::tree::Tree;
    ///
    /// let mut tree = Tree::build(&[1, 2, 3]);
    /// assert!(tree.is_balanced());
    ///
    /// tree.insert(4);
    /// tree.insert(5);
    /// tree.insert(6);
    /// assert!(!tree.is_balanced());
    /// ```
    pub fn is_balanced(&self) -> bool {
        check_balance(self.root()).balanced
    }

    /// Rebuilds the tree at minimal height from its current values. The
    /// in-order drain of the old tree is already sorted and distinct, so the
    /// rebuild is exactly [`Tree::build`]'s midpoint-split construction.
    /// This is the only way an unbalanced tree returns to a balanced state.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_set::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for value in 1..=6 {
    ///     tree.insert(value);
    /// }
    /// assert!(!tree.is_balanced());
    ///
    /// tree.rebalance();
    /// assert!(tree.is_balanced());
    /// assert_eq!(tree.height(), 2);
    /// ```
    pub fn rebalance(&mut self) {
        let mut values = Vec::new();
        drain_in_order(self.root.take(), &mut values);

        let len = values.len();
        self.root = build_sorted(&mut values.into_iter(), len);
    }

    fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }
}

/// Renders the tree sideways with box-drawing branches, right subtree on
/// top, one node per line. An empty tree renders as `(empty)`.
impl<T> fmt::Display for Tree<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.root() {
            Some(root) => render(root, f, "", true),
            None => writeln!(f, "(empty)"),
        }
    }
}

fn render<T>(node: &Node<T>, f: &mut fmt::Formatter<'_>, prefix: &str, is_left: bool) -> fmt::Result
where
    T: fmt::Display,
{
    if let Some(right) = node.right() {
        let deeper = format!("{prefix}{}", if is_left { "│   " } else { "    " });
        render(right, f, &deeper, false)?;
    }
    writeln!(f, "{prefix}{}{}", if is_left { "└── " } else { "┌── " }, node.value)?;
    if let Some(left) = node.left() {
        let deeper = format!("{prefix}{}", if is_left { "    " } else { "│   " });
        render(left, f, &deeper, true)?;
    }
    Ok(())
}

/// Builds a subtree over the next `len` items of an ascending iterator.
/// Consuming the items in-order with a left split of `floor((len - 1) / 2)`
/// places the same value at every subtree root as the midpoint rule
/// `mid = floor((start + end) / 2)` over the sorted slice.
fn build_sorted<T, I>(values: &mut I, len: usize) -> Link<T>
where
    I: Iterator<Item = T>,
{
    if len == 0 {
        return None;
    }

    let left_len = (len - 1) / 2;
    let left = build_sorted(values, left_len);
    let value = values.next()?;
    let right = build_sorted(values, len - 1 - left_len);

    Some(Box::new(Node { value, left, right }))
}

fn insert_at<T>(link: &mut Link<T>, value: T)
where
    T: Ord,
{
    match link {
        None => *link = Some(Box::new(Node::new(value))),
        Some(node) => match value.cmp(&node.value) {
            Ordering::Less => insert_at(&mut node.left, value),
            // Already present: duplicates are rejected silently.
            Ordering::Equal => {}
            Ordering::Greater => insert_at(&mut node.right, value),
        },
    }
}

fn delete_at<T>(link: &mut Link<T>, value: &T)
where
    T: Ord,
{
    let Some(node) = link else {
        return;
    };

    match value.cmp(&node.value) {
        Ordering::Less => delete_at(&mut node.left, value),
        Ordering::Greater => delete_at(&mut node.right, value),
        Ordering::Equal => match (node.left.take(), node.right.take()) {
            (None, None) => *link = None,
            (Some(child), None) | (None, Some(child)) => *link = Some(child),
            (Some(left), Some(right)) => {
                // Two children: the in-order successor node is unlinked from
                // the right subtree and its value takes this node's place.
                node.left = Some(left);
                node.right = Some(right);
                if let Some(successor) = take_leftmost(&mut node.right) {
                    node.value = successor;
                }
            }
        },
    }
}

/// Unlinks the leftmost node of the subtree at `link` — splicing its right
/// child into its place — and returns its value. `None` only for an empty
/// subtree.
fn take_leftmost<T>(link: &mut Link<T>) -> Option<T> {
    match link {
        Some(node) if node.left.is_some() => take_leftmost(&mut node.left),
        _ => link.take().map(|node| {
            *link = node.right;
            node.value
        }),
    }
}

fn pre_order_at<T>(node: Option<&Node<T>>, visitor: &mut dyn FnMut(&Node<T>)) {
    let Some(node) = node else {
        return;
    };
    visitor(node);
    pre_order_at(node.left(), visitor);
    pre_order_at(node.right(), visitor);
}

fn in_order_at<T>(node: Option<&Node<T>>, visitor: &mut dyn FnMut(&Node<T>)) {
    let Some(node) = node else {
        return;
    };
    in_order_at(node.left(), visitor);
    visitor(node);
    in_order_at(node.right(), visitor);
}

fn post_order_at<T>(node: Option<&Node<T>>, visitor: &mut dyn FnMut(&Node<T>)) {
    let Some(node) = node else {
        return;
    };
    post_order_at(node.left(), visitor);
    post_order_at(node.right(), visitor);
    visitor(node);
}

fn depth_at<T>(current: Option<&Node<T>>, target: &Node<T>, so_far: i32) -> i32 {
    let Some(current) = current else {
        return -1;
    };
    if ptr::eq(current, target) {
        return so_far;
    }

    let left = depth_at(current.left(), target, so_far + 1);
    if left != -1 {
        return left;
    }
    depth_at(current.right(), target, so_far + 1)
}

struct Balance {
    balanced: bool,
    height: i32,
}

/// One bottom-up pass computing balance and height together, so each node's
/// height is computed exactly once. An unbalanced verdict propagates upward
/// without further height bookkeeping.
fn check_balance<T>(node: Option<&Node<T>>) -> Balance {
    let Some(node) = node else {
        return Balance {
            balanced: true,
            height: -1,
        };
    };

    let left = check_balance(node.left());
    let right = check_balance(node.right());
    if !left.balanced || !right.balanced || (left.height - right.height).abs() > 1 {
        return Balance {
            balanced: false,
            height: 0,
        };
    }

    Balance {
        balanced: true,
        height: 1 + left.height.max(right.height),
    }
}

fn drain_in_order<T>(link: Link<T>, out: &mut Vec<T>) {
    if let Some(node) = link {
        drain_in_order(node.left, out);
        out.push(node.value);
        drain_in_order(node.right, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn in_order_values<T: Clone>(tree: &Tree<T>) -> Vec<T> {
        let mut values = Vec::new();
        tree.in_order(Some(&mut |node: &Node<T>| values.push(node.value().clone())))
            .expect("visitor supplied");
        values
    }

    /// Assert the heights of the root, left child, and right child of a tree.
    macro_rules! assert_heights {
        ($tree:ident, $height:expr, $left_height:expr, $right_height:expr) => {{
            assert_eq!($tree.height(), $height);

            if let Some(n) = $tree.root() {
                assert_eq!(n.height(), $height);
                assert_eq!(n.left().map_or(-1, Node::height), $left_height);
                assert_eq!(n.right().map_or(-1, Node::height), $right_height);
            }
        }};
    }

    #[test]
    fn build_dedups_and_sorts() {
        let tree = Tree::build(&[1, 5, 7, 3, 2, 4, 1, 2, 3, 4, 5, 1]);

        assert_eq!(in_order_values(&tree), [1, 2, 3, 4, 5, 7]);
        assert_eq!(tree.height(), 2);
        assert!(tree.is_balanced());
        assert_eq!(tree.source(), [1, 5, 7, 3, 2, 4, 1, 2, 3, 4, 5, 1]);
    }

    #[test]
    fn build_midpoint_shape_is_deterministic() {
        // Sorted distinct values [1, 2, 3, 4, 5, 7] split at their midpoints:
        //
        //         3
        //       /   \
        //      1     5
        //       \   / \
        //        2 4   7
        let tree = Tree::build(&[1, 2, 3, 4, 5, 7]);

        let mut level = Vec::new();
        tree.level_order(Some(&mut |node: &Node<i32>| level.push(*node.value())))
            .expect("visitor supplied");
        assert_eq!(level, [3, 1, 5, 2, 4, 7]);
    }

    #[test]
    fn build_empty_input_yields_empty_tree() {
        let tree: Tree<i32> = Tree::build(&[]);

        assert_eq!(tree.height(), -1);
        assert!(tree.is_balanced());
        assert!(in_order_values(&tree).is_empty());
    }

    #[test]
    fn insert_then_find() {
        let mut tree = Tree::build(&[1, 2, 3, 4, 5, 7]);
        for value in [15, 6, 17, 14] {
            tree.insert(value);
        }

        assert_eq!(tree.find(&6).map(|n| *n.value()), Some(6));
        assert_eq!(in_order_values(&tree), [1, 2, 3, 4, 5, 6, 7, 14, 15, 17]);
        assert!(!tree.is_balanced());
    }

    #[test]
    fn insert_duplicate_is_a_noop() {
        let mut tree = Tree::build(&[1, 2, 3]);
        let before = in_order_values(&tree);

        tree.insert(2);

        assert_eq!(in_order_values(&tree), before);
        assert_eq!(tree.height(), 1);
    }

    #[test]
    fn delete_leaf() {
        let mut tree = Tree::build(&[1, 2, 3]);
        tree.delete(&3);

        assert_eq!(tree.find(&3).map(|n| *n.value()), None);
        assert_eq!(in_order_values(&tree), [1, 2]);
    }

    #[test]
    fn delete_node_with_only_right_child() {
        let mut tree = Tree::new();
        tree.insert(1);
        tree.insert(2);
        tree.delete(&1);

        assert!(tree.find(&1).is_none());
        assert_eq!(in_order_values(&tree), [2]);
    }

    #[test]
    fn delete_node_with_only_left_child() {
        let mut tree = Tree::new();
        tree.insert(2);
        tree.insert(1);
        tree.delete(&2);

        assert!(tree.find(&2).is_none());
        assert_eq!(in_order_values(&tree), [1]);
    }

    #[test]
    fn delete_node_with_two_children_promotes_successor() {
        let mut tree = Tree::build(&[1, 2, 3, 4, 5, 7]);
        // 5 has children 4 and 7; its in-order successor is 7.
        tree.delete(&5);

        assert!(tree.find(&5).is_none());
        assert_eq!(in_order_values(&tree), [1, 2, 3, 4, 7]);
    }

    #[test]
    fn delete_root_with_deep_successor() {
        let mut tree = Tree::build(&[1, 2, 3, 4, 5, 6, 7]);
        // The successor of the root 4 is 5, a left grandchild of 6.
        tree.delete(&4);

        assert!(tree.find(&4).is_none());
        assert_eq!(in_order_values(&tree), [1, 2, 3, 5, 6, 7]);
        assert_eq!(tree.find(&6).and_then(Node::left).map(|n| *n.value()), None);
    }

    #[test]
    fn delete_absent_value_is_a_noop() {
        let mut tree = Tree::build(&[1, 2, 3]);
        tree.delete(&42);

        assert_eq!(in_order_values(&tree), [1, 2, 3]);
    }

    #[test]
    fn delete_only_node_empties_the_tree() {
        let mut tree = Tree::new();
        tree.insert(5);
        tree.delete(&5);

        assert_eq!(tree.height(), -1);
        assert!(tree.find(&5).is_none());
    }

    #[test]
    fn traversal_orders() {
        let tree = Tree::build(&[1, 2, 3, 4, 5, 7]);

        let mut pre = Vec::new();
        tree.pre_order(Some(&mut |n: &Node<i32>| pre.push(*n.value())))
            .expect("visitor supplied");
        assert_eq!(pre, [3, 1, 2, 5, 4, 7]);

        let mut post = Vec::new();
        tree.post_order(Some(&mut |n: &Node<i32>| post.push(*n.value())))
            .expect("visitor supplied");
        assert_eq!(post, [2, 1, 4, 7, 5, 3]);

        let mut level = Vec::new();
        tree.level_order(Some(&mut |n: &Node<i32>| level.push(*n.value())))
            .expect("visitor supplied");
        assert_eq!(level, [3, 1, 5, 2, 4, 7]);
    }

    #[test]
    fn traversals_on_empty_tree_visit_nothing() {
        let tree: Tree<i32> = Tree::new();
        let mut visits = 0;

        tree.level_order(Some(&mut |_: &Node<i32>| visits += 1))
            .expect("visitor supplied");
        tree.pre_order(Some(&mut |_: &Node<i32>| visits += 1))
            .expect("visitor supplied");
        tree.in_order(Some(&mut |_: &Node<i32>| visits += 1))
            .expect("visitor supplied");
        tree.post_order(Some(&mut |_: &Node<i32>| visits += 1))
            .expect("visitor supplied");

        assert_eq!(visits, 0);
    }

    #[test]
    fn traversal_without_visitor_fails_and_leaves_tree_intact() {
        let tree = Tree::build(&[1, 2, 3]);

        assert_eq!(tree.level_order(None), Err(TraversalError::MissingVisitor));
        assert_eq!(tree.pre_order(None), Err(TraversalError::MissingVisitor));
        assert_eq!(tree.in_order(None), Err(TraversalError::MissingVisitor));
        assert_eq!(tree.post_order(None), Err(TraversalError::MissingVisitor));

        assert_eq!(in_order_values(&tree), [1, 2, 3]);
    }

    #[test]
    fn test_height() {
        let mut tree = Tree::new();
        assert_eq!(tree.height(), -1);

        tree.insert(1);
        assert_heights!(tree, 0, -1, -1);

        // Insert a value to the right making it taller.
        tree.insert(2);
        assert_heights!(tree, 1, -1, 0);

        // Insert a value to the left not changing the overall height.
        tree.insert(0);
        assert_heights!(tree, 1, 0, 0);

        // Delete that left value to get to the previous heights.
        tree.delete(&0);
        assert_heights!(tree, 1, -1, 0);
    }

    #[test]
    fn depth_of_root_is_zero() {
        let tree = Tree::build(&[1, 2, 3, 4, 5, 7]);
        let root = tree.find(&3).expect("root present");

        assert_eq!(tree.depth(root), 0);
    }

    #[test]
    fn depth_counts_edges_from_root() {
        let tree = Tree::build(&[1, 2, 3, 4, 5, 7]);

        assert_eq!(tree.depth(tree.find(&5).expect("present")), 1);
        assert_eq!(tree.depth(tree.find(&2).expect("present")), 2);
        assert_eq!(tree.depth(tree.find(&7).expect("present")), 2);
    }

    #[test]
    fn depth_of_foreign_node_is_negative_one() {
        let tree = Tree::build(&[1, 2, 3]);
        let other = Tree::build(&[1, 2, 3]);
        let foreign = other.find(&2).expect("present");

        // Same value, different tree: identity comparison must reject it.
        assert_eq!(tree.depth(foreign), -1);
    }

    #[test]
    fn is_balanced_checks_every_node() {
        // The root's subtrees differ in height by only one, but node 5's
        // subtrees differ by two: the imbalance sits below the root.
        let mut tree = Tree::new();
        for value in [10, 5, 20, 3, 25, 2] {
            tree.insert(value);
        }

        assert!(!tree.is_balanced());
    }

    #[test]
    fn rebalance_restores_minimal_height() {
        let mut tree = Tree::new();
        for value in 1..=6 {
            tree.insert(value);
        }
        assert_eq!(tree.height(), 5);
        assert!(!tree.is_balanced());

        tree.rebalance();

        assert!(tree.is_balanced());
        assert_eq!(tree.height(), 2);
        assert_eq!(in_order_values(&tree), [1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn rebalance_is_idempotent() {
        let mut tree = Tree::new();
        for value in [9, 3, 7, 1, 5, 11, 2] {
            tree.insert(value);
        }

        tree.rebalance();
        let once = in_order_values(&tree);
        tree.rebalance();

        assert_eq!(in_order_values(&tree), once);
        assert!(tree.is_balanced());
    }

    #[test]
    fn rebalance_of_empty_tree_is_a_noop() {
        let mut tree: Tree<i32> = Tree::new();
        tree.rebalance();

        assert_eq!(tree.height(), -1);
    }

    #[test]
    fn display_renders_branch_glyphs() {
        let tree = Tree::build(&[1, 2, 3]);

        assert_eq!(format!("{tree}"), "│   ┌── 3\n└── 2\n    └── 1\n");
        assert_eq!(format!("{}", Tree::<i32>::new()), "(empty)\n");
    }
}
