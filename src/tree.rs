use std::{borrow::Borrow, cmp::Ordering::*};

use crate::node::LinkExt;
use crate::{Insert, NodeView, Noop, Remove, Root, Tree, TreeCallbacks};

impl<T> Tree<T> {
    pub fn new() -> Self {
        Self::with_callbacks(Noop::new())
    }
}

impl<T, C: TreeCallbacks<Value = T> + Default> Default for Tree<T, C> {
    fn default() -> Self {
        Self::with_callbacks(C::default())
    }
}

impl<T, C: TreeCallbacks<Value = T>> Tree<T, C> {
    pub fn with_callbacks(callbacks: C) -> Self {
        Tree {
            root: Root::new(callbacks),
            len: 0,
        }
    }

    /// The callbacks handed to [`Tree::with_callbacks`], e.g. to read a
    /// rotation log back out.
    pub fn callbacks(&self) -> &C {
        &self.root.callbacks
    }

    /// Inserts `value`, rebalancing if needed. Duplicates are rejected
    /// without touching the tree. The `Clone` bound exists only to put
    /// the pivot value into a [`RotationEvent`]; an insert that does not
    /// rotate never clones.
    ///
    /// [`RotationEvent`]: crate::RotationEvent
    pub fn insert(&mut self, value: T) -> Insert<T>
    where
        T: Ord + Clone,
    {
        let mut last = None;
        match self.root.insert(value, &mut last) {
            Some(value) => Insert::Duplicate(value),
            None => {
                self.len += 1;
                Insert::Inserted(last)
            }
        }
    }

    /// Removes `value` if present. A node with two children is replaced
    /// by its in-order predecessor; the unwind rebalances at every level
    /// that needs it.
    pub fn remove<Q>(&mut self, value: &Q) -> Remove<T>
    where
        T: Borrow<Q> + Ord + Clone,
        Q: Ord + ?Sized,
    {
        let mut last = None;
        match self.root.remove(value, &mut last) {
            Some(removed) => {
                self.len -= 1;
                Remove::Removed(removed, last)
            }
            None => Remove::NotFound,
        }
    }

    /// Looks `value` up and returns a snapshot of its node. Absence is
    /// `None`, never an error.
    pub fn find<Q>(&self, value: &Q) -> Option<NodeView<'_, T>>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut node = self.root.link.as_deref();
        while let Some(candidate) = node {
            match value.cmp(candidate.value.borrow()) {
                Equal => return Some(candidate.view()),
                Less => node = candidate.left.as_deref(),
                Greater => node = candidate.right.as_deref(),
            }
        }
        None
    }

    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.find(value).is_some()
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Height of the whole tree: -1 when empty, 0 for a lone root.
    pub fn height(&self) -> i32 {
        self.root.link.height()
    }

    /// Drops every node. Teardown is iterative; children are detached
    /// onto a worklist first so a tall tree cannot recurse on drop.
    pub fn clear(&mut self) {
        let mut worklist = Vec::new();
        worklist.extend(self.root.link.take());
        while let Some(mut node) = worklist.pop() {
            worklist.extend(node.left.take());
            worklist.extend(node.right.take());
        }
        self.len = 0;
    }
}

impl<T, C: TreeCallbacks<Value = T>> Drop for Tree<T, C> {
    fn drop(&mut self) {
        self.clear();
    }
}

#[cfg(test)]
pub(crate) fn check_invariants<T: Ord, C: TreeCallbacks<Value = T>>(tree: &Tree<T, C>) {
    use crate::Node;

    // Returns (height, node count) while checking order, the cached
    // heights, and the balance factor of every node.
    fn walk<'a, T: Ord>(
        node: Option<&'a Node<T>>,
        lower: Option<&'a T>,
        upper: Option<&'a T>,
    ) -> (i32, usize) {
        let Some(node) = node else {
            return (-1, 0);
        };
        if let Some(lower) = lower {
            assert!(node.value > *lower, "left subtree order violated");
        }
        if let Some(upper) = upper {
            assert!(node.value < *upper, "right subtree order violated");
        }
        let (left_height, left_count) = walk(node.left.as_deref(), lower, Some(&node.value));
        let (right_height, right_count) = walk(node.right.as_deref(), Some(&node.value), upper);
        assert_eq!(
            node.height,
            left_height.max(right_height) + 1,
            "cached height out of date"
        );
        assert!(
            (left_height - right_height).abs() <= 1,
            "balance factor out of range"
        );
        (node.height, left_count + right_count + 1)
    }

    let (height, count) = walk(tree.root.link.as_deref(), None, None);
    assert_eq!(tree.len(), count, "len out of sync with node count");
    assert_eq!(tree.height(), height);
}
