//! An unbalanced Binary Search Tree (BST) over integer keys, built from
//! recursive functions that hand every subtree back to its parent.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored keys. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a key and
//! has two child subtrees, either of which may be empty. The invariants
//! of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than its own key.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Because keys are strictly ordered, a key is stored at most once and
//! inserting it again does nothing. Searching takes `O(height)`. This tree
//! never rebalances, so inserting keys in sorted order produces a chain and
//! `height` equals the number of keys. Visiting the left subtree, then the
//! subtree root, then the right subtree yields the keys in ascending order.
//!
//! ## Root rebinding
//!
//! [`Tree::insert`] and [`Tree::delete`] take the tree by value and return
//! the tree to keep using. Inserting into an empty tree and deleting the root
//! both change which node is the root, so the returned value always replaces
//! the old handle:
//!
//! ```
//! use bst_engine::Tree;
//!
//! let mut tree = Tree::new();
//! for key in [5, 3, 7, 2, 4, 6, 8] {
//!     tree = tree.insert(key);
//! }
//! tree = tree.delete(5);
//!
//! assert_eq!(tree.root().map(|n| n.key()), Some(6));
//! assert_eq!(tree.inorder().collect::<Vec<_>>(), vec![2, 3, 4, 6, 7, 8]);
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod error;
pub mod iter;
pub mod recursive;

pub use error::BstError;
pub use iter::Inorder;
pub use recursive::{Node, Tree};

/// The key type stored in a [`Tree`].
pub type Key = i32;
