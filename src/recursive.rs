//! An unbalanced, recursively defined BST. Every operation that changes the shape of the tree
//! takes the tree by value and returns the tree the caller should keep using. Each level of the
//! recursion does the same thing with its children: it hands a child subtree down, gets the
//! rebuilt subtree back and stores it in the link it came from.
//!
//! # Examples
//!
//! ```
//! use bst_engine::Tree;
//!
//! let tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(tree.search(1).is_none());
//!
//! // `insert` hands back the tree to keep using.
//! let tree = tree.insert(5).insert(3).insert(7);
//! assert_eq!(tree.search(3).map(|n| n.key()), Some(3));
//!
//! // Inserting an existing key changes nothing.
//! let tree = tree.insert(3);
//! assert_eq!(tree.len(), 3);
//!
//! // Deleting the root moves another key into it.
//! let tree = tree.delete(5);
//! assert_eq!(tree.root().map(|n| n.key()), Some(7));
//! assert_eq!(tree.inorder().collect::<Vec<_>>(), vec![3, 7]);
//! ```

use std::cmp::Ordering;
use std::mem;

use log::trace;

use crate::error::BstError;
use crate::iter::Inorder;
use crate::Key;

/// A Binary Search Tree of [`Key`]s. Either empty or a [`Node`] owning its two subtrees.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Tree {
    /// The empty tree. Also sits at the bottom of every subtree.
    Empty,
    /// A `Node` with a key and two children (which are both `Tree`s).
    Node(Node),
}

impl Default for Tree {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Node> for Tree {
    fn from(node: Node) -> Self {
        Self::Node(node)
    }
}

impl Tree {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self::Empty
    }

    /// Returns the root `Node`, or `None` for an empty tree.
    pub fn root(&self) -> Option<&Node> {
        match self {
            Self::Empty => None,
            Self::Node(n) => Some(n),
        }
    }

    /// Whether this tree has no nodes.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Returns the tree with `key` added. If `key` is already present the tree comes back
    /// unchanged.
    ///
    /// Always keep the returned tree: inserting into an empty tree produces a new root.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_engine::Tree;
    ///
    /// let tree = Tree::new().insert(2).insert(1).insert(2);
    ///
    /// assert_eq!(tree.root().map(|n| n.key()), Some(2));
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn insert(self, key: Key) -> Self {
        match self {
            Self::Empty => {
                trace!("creating node {}", key);
                Self::Node(Node::new(key))
            }
            Self::Node(n) => Self::Node(n.insert(key)),
        }
    }

    /// Finds the node holding `key`. If no node has the key, `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_engine::Tree;
    ///
    /// let tree: Tree = [5, 3, 7].into_iter().collect();
    ///
    /// assert_eq!(tree.search(7).map(|n| n.key()), Some(7));
    /// assert!(tree.search(42).is_none());
    /// ```
    pub fn search(&self, key: Key) -> Option<&Node> {
        match self {
            Self::Empty => None,
            Self::Node(n) => n.search(key),
        }
    }

    /// Like [`search`][Tree::search] but reports a missing key as [`BstError::KeyNotFound`].
    pub fn find(&self, key: Key) -> Result<&Node, BstError> {
        self.search(key).ok_or(BstError::KeyNotFound(key))
    }

    /// Whether a node holds `key`.
    pub fn contains(&self, key: Key) -> bool {
        self.search(key).is_some()
    }

    /// Returns the node with the smallest key.
    ///
    /// # Errors
    ///
    /// [`BstError::EmptyTree`] if there are no nodes.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_engine::{BstError, Tree};
    ///
    /// let tree: Tree = [5, 3, 7, 2].into_iter().collect();
    /// assert_eq!(tree.minimum().map(|n| n.key()), Ok(2));
    ///
    /// assert!(matches!(Tree::new().minimum(), Err(BstError::EmptyTree { .. })));
    /// ```
    pub fn minimum(&self) -> Result<&Node, BstError> {
        match self {
            Self::Empty => Err(BstError::EmptyTree {
                operation: "minimum",
            }),
            Self::Node(n) => Ok(n.leftmost()),
        }
    }

    /// Returns the node with the largest key.
    ///
    /// # Errors
    ///
    /// [`BstError::EmptyTree`] if there are no nodes.
    pub fn maximum(&self) -> Result<&Node, BstError> {
        match self {
            Self::Empty => Err(BstError::EmptyTree {
                operation: "maximum",
            }),
            Self::Node(n) => Ok(n.rightmost()),
        }
    }

    /// Returns the tree without `key`. Deleting a key that isn't present is a no-op and the tree
    /// comes back unchanged.
    ///
    /// A node with two children is not removed itself. It takes the key of its in-order
    /// successor (the smallest key in its right subtree) and that successor is deleted from the
    /// right subtree instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_engine::Tree;
    ///
    /// let tree: Tree = [5, 3, 7, 6].into_iter().collect();
    /// let tree = tree.delete(5);
    ///
    /// // 6 was the successor of 5 so it is the new root key.
    /// assert_eq!(tree.root().map(|n| n.key()), Some(6));
    /// assert_eq!(tree.inorder().collect::<Vec<_>>(), vec![3, 6, 7]);
    /// ```
    pub fn delete(self, key: Key) -> Self {
        match self {
            Self::Empty => Self::Empty,
            Self::Node(n) => n.delete(key),
        }
    }

    /// Iterates over the keys in ascending order (left subtree, node, right subtree).
    pub fn inorder(&self) -> Inorder<'_> {
        Inorder::new(self)
    }

    /// Number of nodes in the tree.
    pub fn len(&self) -> usize {
        match self {
            Self::Empty => 0,
            Self::Node(n) => 1 + n.left.len() + n.right.len(),
        }
    }

    /// Number of levels in the tree. An empty tree has height 0 and a single node has height 1.
    pub fn height(&self) -> usize {
        match self {
            Self::Empty => 0,
            Self::Node(n) => 1 + n.left.height().max(n.right.height()),
        }
    }

    /// Checks the ordering invariant over the whole tree: every key in a left subtree is
    /// strictly less than its ancestor's key and every key in a right subtree is strictly
    /// greater.
    pub fn is_bst(&self) -> bool {
        self.is_bst_within(None, None)
    }

    fn is_bst_within(&self, lower: Option<Key>, upper: Option<Key>) -> bool {
        match self {
            Self::Empty => true,
            Self::Node(n) => {
                lower.map_or(true, |lower| lower < n.key)
                    && upper.map_or(true, |upper| n.key < upper)
                    && n.left.is_bst_within(lower, Some(n.key))
                    && n.right.is_bst_within(Some(n.key), upper)
            }
        }
    }

    /// Releases every node, each one only after both of its subtrees. Returns how many nodes
    /// were released.
    pub fn teardown(self) -> usize {
        match self {
            Self::Empty => 0,
            Self::Node(Node { key, left, right }) => {
                let released = (*left).teardown() + (*right).teardown();
                trace!("releasing node {}", key);
                released + 1
            }
        }
    }

    fn min_key(&self) -> Option<Key> {
        self.root().map(|n| n.leftmost().key)
    }
}

impl FromIterator<Key> for Tree {
    /// Builds a tree by inserting the keys in iteration order.
    fn from_iter<I: IntoIterator<Item = Key>>(keys: I) -> Self {
        keys.into_iter().fold(Self::new(), Self::insert)
    }
}

impl Extend<Key> for Tree {
    fn extend<I: IntoIterator<Item = Key>>(&mut self, keys: I) {
        for key in keys {
            *self = mem::take(self).insert(key);
        }
    }
}

impl<'a> IntoIterator for &'a Tree {
    type Item = Key;
    type IntoIter = Inorder<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.inorder()
    }
}

/// A `Node` holds one key and always has two children, although either may be
/// [`Empty`][Tree::Empty].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node {
    pub(crate) key: Key,
    pub(crate) left: Box<Tree>,
    pub(crate) right: Box<Tree>,
}

impl Node {
    /// Creates a node holding `key` with no children.
    pub fn new(key: Key) -> Self {
        Self {
            key,
            left: Box::new(Tree::Empty),
            right: Box::new(Tree::Empty),
        }
    }

    /// The key stored in this node.
    pub fn key(&self) -> Key {
        self.key
    }

    /// The root of the left subtree, if there is one.
    pub fn left(&self) -> Option<&Node> {
        self.left.root()
    }

    /// The root of the right subtree, if there is one.
    pub fn right(&self) -> Option<&Node> {
        self.right.root()
    }

    fn insert(mut self, key: Key) -> Self {
        match key.cmp(&self.key) {
            Ordering::Less => {
                let left = mem::take(&mut *self.left);
                *self.left = left.insert(key);
            }
            Ordering::Equal => trace!("ignoring duplicate key {}", key),
            Ordering::Greater => {
                let right = mem::take(&mut *self.right);
                *self.right = right.insert(key);
            }
        }

        self.check_local_order();
        self
    }

    fn search(&self, key: Key) -> Option<&Self> {
        match key.cmp(&self.key) {
            Ordering::Less => self.left.search(key),
            Ordering::Equal => Some(self),
            Ordering::Greater => self.right.search(key),
        }
    }

    fn leftmost(&self) -> &Self {
        match self.left.as_ref() {
            Tree::Empty => self,
            Tree::Node(l) => l.leftmost(),
        }
    }

    fn rightmost(&self) -> &Self {
        match self.right.as_ref() {
            Tree::Empty => self,
            Tree::Node(r) => r.rightmost(),
        }
    }

    /// Deletes `key` from the subtree rooted at this node and returns what should take this
    /// node's place in its parent.
    fn delete(mut self, key: Key) -> Tree {
        match key.cmp(&self.key) {
            Ordering::Less => {
                let left = mem::take(&mut *self.left);
                *self.left = left.delete(key);
            }
            Ordering::Greater => {
                let right = mem::take(&mut *self.right);
                *self.right = right.delete(key);
            }
            Ordering::Equal => match (self.left.is_empty(), self.right.min_key()) {
                (true, None) => {
                    trace!("deleting leaf {}", key);
                    return Tree::Empty;
                }
                (true, Some(_)) => {
                    trace!("replacing {} with its right child", key);
                    return mem::take(&mut *self.right);
                }
                (false, None) => {
                    trace!("replacing {} with its left child", key);
                    return mem::take(&mut *self.left);
                }
                // With two children we keep this node but give it the key of its in-order
                // successor, then remove the successor from the right subtree.
                (false, Some(successor)) => {
                    trace!("splicing successor {} into {}", successor, key);
                    self.key = successor;
                    let right = mem::take(&mut *self.right);
                    *self.right = right.delete(successor);
                }
            },
        }

        self.check_local_order();
        Tree::Node(self)
    }

    /// In debug builds, asserts that this node's children are on the correct side of it.
    fn check_local_order(&self) {
        if cfg!(debug_assertions) {
            if let Some(left) = self.left() {
                assert!(left.key < self.key);
            }
            if let Some(right) = self.right() {
                assert!(self.key < right.key);
            }
        }
    }
}
