use std::{
    borrow::Borrow,
    cmp::{Ordering, Ordering::*},
};

use crate::node::LinkExt;
use crate::{Link, Node, Root, Rotation, RotationEvent, TreeCallbacks};

/// What `insert_at` reports back to its caller. `Added` carries the turn
/// the descent took at this node (`None` for a fresh leaf), which is all
/// the parent needs to tell the inner rebalance case from the outer one.
enum Placed<T> {
    Added(Option<Ordering>),
    Duplicate(T),
}

impl<T, C: TreeCallbacks<Value = T> + Default> Default for Root<T, C> {
    fn default() -> Self {
        Root::new(C::default())
    }
}

// Public
impl<T, C: TreeCallbacks<Value = T>> Root<T, C> {
    pub fn new(callbacks: C) -> Self {
        Root {
            link: None,
            callbacks,
        }
    }
}

// Rotation primitives. These only rewire links and recompute the two
// affected heights; recording the event is the caller's business.
impl<T, C: TreeCallbacks<Value = T>> Root<T, C> {
    /// Right rotation about `pivot`:
    ///
    /// ```text
    ///      pivot            l
    ///      /   \          /   \
    ///     l     C   -->  A   pivot
    ///    / \                 /   \
    ///   A   B               B     C
    /// ```
    ///
    /// Heights are recomputed child before parent: `pivot` first, then
    /// the returned new subtree root.
    fn rotate_right(mut pivot: Box<Node<T>>) -> Box<Node<T>> {
        let mut new_root = pivot
            .left
            .take()
            .expect("right rotation needs a left child");
        pivot.left = new_root.right.take();
        pivot.update_height();
        new_root.right = Some(pivot);
        new_root.update_height();
        new_root
    }

    /// Left rotation about `pivot`, the mirror image:
    ///
    /// ```text
    ///    pivot              r
    ///    /   \            /   \
    ///   A     r   -->  pivot   C
    ///        / \       /   \
    ///       B   C     A     B
    /// ```
    fn rotate_left(mut pivot: Box<Node<T>>) -> Box<Node<T>> {
        let mut new_root = pivot
            .right
            .take()
            .expect("left rotation needs a right child");
        pivot.right = new_root.left.take();
        pivot.update_height();
        new_root.left = Some(pivot);
        new_root.update_height();
        new_root
    }
}

// The recursive insert/remove workers. Each consumes a subtree by value
// and returns the (possibly new) subtree root, which the caller writes
// back into its own child link.
impl<T: Ord + Clone, C: TreeCallbacks<Value = T>> Root<T, C> {
    /// Returns the value back when it was already present. `T: Clone` is
    /// needed only when a rotation fires, to put the pivot value into the
    /// event; a plain insert never clones.
    pub(crate) fn insert(&mut self, value: T, last: &mut Option<RotationEvent<T>>) -> Option<T> {
        let (link, placed) = Self::insert_at(self.link.take(), value, &mut self.callbacks, last);
        self.link = link;
        match placed {
            Placed::Duplicate(value) => Some(value),
            Placed::Added(_) => None,
        }
    }

    /// Returns the removed value, or `None` when it was absent.
    pub(crate) fn remove<Q>(&mut self, value: &Q, last: &mut Option<RotationEvent<T>>) -> Option<T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let (link, removed) = Self::remove_at(self.link.take(), value, &mut self.callbacks, last);
        self.link = link;
        removed
    }

    fn insert_at(
        link: Link<T>,
        value: T,
        cb: &mut C,
        last: &mut Option<RotationEvent<T>>,
    ) -> (Link<T>, Placed<T>) {
        let Some(mut node) = link else {
            return (Node::boxed(value), Placed::Added(None));
        };
        let turn = value.cmp(&node.value);
        let child_turn = match turn {
            Equal => return (Some(node), Placed::Duplicate(value)),
            Less => {
                let (child, placed) = Self::insert_at(node.left.take(), value, cb, last);
                node.left = child;
                match placed {
                    Placed::Added(child_turn) => child_turn,
                    // Duplicate further down; nothing changed below us.
                    duplicate => return (Some(node), duplicate),
                }
            }
            Greater => {
                let (child, placed) = Self::insert_at(node.right.take(), value, cb, last);
                node.right = child;
                match placed {
                    Placed::Added(child_turn) => child_turn,
                    duplicate => return (Some(node), duplicate),
                }
            }
        };
        node.update_height();
        (
            Some(Self::rebalance_after_insert(node, child_turn, cb, last)),
            Placed::Added(Some(turn)),
        )
    }

    /// At most one case fires per insertion, at the lowest ancestor where
    /// the imbalance shows up on the unwind. Whether the inner (double
    /// rotation) case applies is decided by which side of the taller
    /// child the fresh value went to; `child_turn` already holds the turn
    /// the descent took at that child, so no re-comparison against the
    /// inserted value is needed. An imbalance here rules out a rotation
    /// lower down, so the child the turn was taken at is still in place.
    fn rebalance_after_insert(
        mut node: Box<Node<T>>,
        child_turn: Option<Ordering>,
        cb: &mut C,
        last: &mut Option<RotationEvent<T>>,
    ) -> Box<Node<T>> {
        let balance = node.balance();
        if balance > 1 {
            if child_turn == Some(Greater) {
                Self::record(Rotation::LeftRight, &node.value, cb, last);
                node.left = node.left.take().map(Self::rotate_left);
            } else {
                Self::record(Rotation::LeftLeft, &node.value, cb, last);
            }
            return Self::rotate_right(node);
        }
        if balance < -1 {
            if child_turn == Some(Less) {
                Self::record(Rotation::RightLeft, &node.value, cb, last);
                node.right = node.right.take().map(Self::rotate_right);
            } else {
                Self::record(Rotation::RightRight, &node.value, cb, last);
            }
            return Self::rotate_left(node);
        }
        node
    }

    fn remove_at<Q>(
        link: Link<T>,
        value: &Q,
        cb: &mut C,
        last: &mut Option<RotationEvent<T>>,
    ) -> (Link<T>, Option<T>)
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let Some(mut node) = link else {
            return (None, None);
        };
        let removed = match value.cmp(node.value.borrow()) {
            Less => {
                let (child, removed) = Self::remove_at(node.left.take(), value, cb, last);
                node.left = child;
                removed
            }
            Greater => {
                let (child, removed) = Self::remove_at(node.right.take(), value, cb, last);
                node.right = child;
                removed
            }
            Equal => {
                return match (node.left.take(), node.right.take()) {
                    // At most one child: the node is unlinked and the
                    // child (absent or not) takes its place. Nothing to
                    // rebalance at this level.
                    (None, child) => (child, Some(node.value)),
                    (child, None) => (child, Some(node.value)),
                    (Some(left), right) => {
                        // Two children: splice in the in-order
                        // predecessor, the maximum of the left subtree.
                        let (left, predecessor) = Self::take_max(left, cb, last);
                        node.left = left;
                        node.right = right;
                        let removed = std::mem::replace(&mut node.value, predecessor);
                        node.update_height();
                        (
                            Some(Self::rebalance_after_remove(node, cb, last)),
                            Some(removed),
                        )
                    }
                };
            }
        };
        if removed.is_none() {
            return (Some(node), None);
        }
        node.update_height();
        (Some(Self::rebalance_after_remove(node, cb, last)), removed)
    }

    /// Unlinks the rightmost node of `node`'s subtree, rebalancing the
    /// spine on the way back up, and hands its value out.
    fn take_max(
        mut node: Box<Node<T>>,
        cb: &mut C,
        last: &mut Option<RotationEvent<T>>,
    ) -> (Link<T>, T) {
        match node.right.take() {
            None => {
                let unlinked = *node;
                (unlinked.left, unlinked.value)
            }
            Some(right) => {
                let (child, max) = Self::take_max(right, cb, last);
                node.right = child;
                node.update_height();
                (Some(Self::rebalance_after_remove(node, cb, last)), max)
            }
        }
    }

    /// Removal rebalancing is not the mirror of insertion: the inserted
    /// value is gone as a disambiguator, so the surviving taller child's
    /// balance factor picks between the outer and inner case. It can also
    /// fire at several ancestors on the same unwind; callers re-check at
    /// every level.
    fn rebalance_after_remove(
        mut node: Box<Node<T>>,
        cb: &mut C,
        last: &mut Option<RotationEvent<T>>,
    ) -> Box<Node<T>> {
        let balance = node.balance();
        if balance > 1 {
            if node.left.balance() < 0 {
                Self::record(Rotation::LeftRight, &node.value, cb, last);
                node.left = node.left.take().map(Self::rotate_left);
            } else {
                Self::record(Rotation::LeftLeft, &node.value, cb, last);
            }
            return Self::rotate_right(node);
        }
        if balance < -1 {
            if node.right.balance() > 0 {
                Self::record(Rotation::RightLeft, &node.value, cb, last);
                node.right = node.right.take().map(Self::rotate_right);
            } else {
                Self::record(Rotation::RightRight, &node.value, cb, last);
            }
            return Self::rotate_left(node);
        }
        node
    }

    /// One applied case = one callback and one (overwritten) last event.
    #[inline]
    fn record(
        rotation: Rotation,
        at: &T,
        cb: &mut C,
        last: &mut Option<RotationEvent<T>>,
    ) {
        cb.rotate(rotation, at);
        *last = Some(RotationEvent {
            rotation,
            at: at.clone(),
        });
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::Noop;
    use pretty_assertions::assert_eq;

    type R = Root<i32, Noop<i32>>;

    fn leaf(value: i32) -> Box<Node<i32>> {
        Box::new(Node::new(value))
    }

    fn heights(node: &Node<i32>) -> (i32, i32, i32) {
        (
            node.height,
            node.left.as_deref().map_or(-1, |n| n.height),
            node.right.as_deref().map_or(-1, |n| n.height),
        )
    }

    #[test]
    fn rotate_right_lifts_the_left_child() {
        // 30 <- 20 <- 10, a pure left chain.
        let mut pivot = leaf(30);
        let mut middle = leaf(20);
        middle.left = Some(leaf(10));
        middle.update_height();
        pivot.left = Some(middle);
        pivot.update_height();
        assert_eq!(2, pivot.height);

        let root = R::rotate_right(pivot);
        assert_eq!(20, root.value);
        assert_eq!(10, root.left.as_deref().unwrap().value);
        assert_eq!(30, root.right.as_deref().unwrap().value);
        assert_eq!((1, 0, 0), heights(&root));
    }

    #[test]
    fn rotate_left_lifts_the_right_child() {
        let mut pivot = leaf(10);
        let mut middle = leaf(20);
        middle.right = Some(leaf(30));
        middle.update_height();
        pivot.right = Some(middle);
        pivot.update_height();

        let root = R::rotate_left(pivot);
        assert_eq!(20, root.value);
        assert_eq!(10, root.left.as_deref().unwrap().value);
        assert_eq!(30, root.right.as_deref().unwrap().value);
        assert_eq!((1, 0, 0), heights(&root));
    }

    #[test]
    fn rotations_hand_the_middle_subtree_over() {
        // rotate_right must move the new root's old right subtree onto
        // the pivot's left slot.
        let mut pivot = leaf(30);
        let mut left = leaf(10);
        left.left = Some(leaf(5));
        left.right = Some(leaf(20));
        left.update_height();
        pivot.left = Some(left);
        pivot.right = Some(leaf(40));
        pivot.update_height();

        let root = R::rotate_right(pivot);
        assert_eq!(10, root.value);
        let old_pivot = root.right.as_deref().unwrap();
        assert_eq!(30, old_pivot.value);
        assert_eq!(20, old_pivot.left.as_deref().unwrap().value);
        assert_eq!(40, old_pivot.right.as_deref().unwrap().value);
        assert_eq!(5, root.left.as_deref().unwrap().value);
    }

    #[test]
    fn insert_rejects_duplicates_and_hands_the_value_back() {
        let mut root = R::default();
        let mut last = None;
        assert_eq!(None, root.insert(7, &mut last));
        assert_eq!(Some(7), root.insert(7, &mut last));
        assert_eq!(None, last);
    }

    #[test]
    fn remove_of_absent_value_is_a_noop() {
        let mut root = R::default();
        let mut last = None;
        root.insert(1, &mut last);
        root.insert(2, &mut last);
        assert_eq!(None, root.remove(&3, &mut last));
        assert_eq!(Some(2), root.remove(&2, &mut last));
    }
}
