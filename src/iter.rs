use std::iter::FusedIterator;

use crate::{Node, Tree, TreeCallbacks};

/// An in-order iterator over shared references to a tree's values.
///
/// Nodes carry no parent links, so the not-yet-visited ancestors live on
/// an explicit stack; at most `height + 1` entries deep.
pub struct Iter<'a, T> {
    stack: Vec<&'a Node<T>>,
    descending: Option<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.descending {
            self.stack.push(node);
            self.descending = node.left.as_deref();
        }
        let node = self.stack.pop()?;
        self.descending = node.right.as_deref();
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

impl<T, C: TreeCallbacks<Value = T>> Tree<T, C> {
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            stack: Vec::new(),
            descending: self.root.link.as_deref(),
            remaining: self.len,
        }
    }
}

impl<'a, T, C: TreeCallbacks<Value = T>> IntoIterator for &'a Tree<T, C> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Ord + Clone, C: TreeCallbacks<Value = T>> Extend<T> for Tree<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T: Ord + Clone, C: TreeCallbacks<Value = T> + Default> FromIterator<T> for Tree<T, C> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Tree::with_callbacks(C::default());
        tree.extend(iter);
        tree
    }
}
