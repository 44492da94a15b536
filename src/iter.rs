//! Lazy in-order traversal.

use std::iter::FusedIterator;

use crate::recursive::{Node, Tree};
use crate::Key;

/// Ascending iterator over the keys of a [`Tree`], created by [`Tree::inorder`].
///
/// Holds the path of nodes whose left subtrees have been entered but which haven't been yielded
/// yet, so it never needs more than `height` entries.
///
/// # Examples
///
/// ```
/// use bst_engine::Tree;
///
/// let tree: Tree = [5, 3, 7, 2, 4, 6, 8].into_iter().collect();
///
/// assert_eq!(tree.inorder().collect::<Vec<_>>(), vec![2, 3, 4, 5, 6, 7, 8]);
///
/// // Traversing doesn't change anything so it can be done again.
/// assert_eq!(tree.inorder().next(), Some(2));
/// ```
#[derive(Clone, Debug)]
pub struct Inorder<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Inorder<'a> {
    pub(crate) fn new(tree: &'a Tree) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(tree);
        iter
    }

    /// Pushes `tree`'s root and then every left descendant down to the smallest key.
    fn push_left_spine(&mut self, mut tree: &'a Tree) {
        while let Tree::Node(n) = tree {
            self.stack.push(n);
            tree = n.left.as_ref();
        }
    }
}

impl<'a> Iterator for Inorder<'a> {
    type Item = Key;

    fn next(&mut self) -> Option<Key> {
        let node = self.stack.pop()?;
        self.push_left_spine(&node.right);
        Some(node.key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.stack.len(), None)
    }
}

impl FusedIterator for Inorder<'_> {}
