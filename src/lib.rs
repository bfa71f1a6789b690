/// An AVL tree that reports the rebalancing rotations it performs.
mod iter;
mod node;
mod root;
mod traverse;
mod tree;

pub use iter::Iter;

use std::{fmt, marker::PhantomData};

/// An owned, possibly absent subtree. An absent subtree has height -1.
pub type Link<T> = Option<Box<Node<T>>>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<T> {
    // Child links own their subtrees outright; rotations move them
    // between nodes, they are never aliased.
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
    // Cached height of the subtree rooted here. A leaf has height 0.
    pub(crate) height: i32,
    pub(crate) value: T,
}

/// The four rebalancing cases, named after the grandparent-to-grandchild
/// path that caused the imbalance. The two inner cases (`LeftRight`,
/// `RightLeft`) are double rotations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rotation {
    LeftLeft,
    LeftRight,
    RightRight,
    RightLeft,
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Rotation::LeftLeft => "Left-Left",
            Rotation::LeftRight => "Left-Right",
            Rotation::RightRight => "Right-Right",
            Rotation::RightLeft => "Right-Left",
        })
    }
}

/// A rotation that fired during an insert or remove, recorded at the node
/// where the imbalance was detected (its value before the rotation moved
/// anything around).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RotationEvent<T> {
    pub rotation: Rotation,
    pub at: T,
}

impl<T: fmt::Display> fmt::Display for RotationEvent<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} rotation at {}", self.rotation, self.at)
    }
}

/// What [`Tree::insert`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Insert<T> {
    /// The value went in; carries the rotation that restored balance, if
    /// one fired. At most one case fires per insertion.
    Inserted(Option<RotationEvent<T>>),
    /// The value was already present. The tree is untouched and the
    /// rejected value is handed back.
    Duplicate(T),
}

impl<T> Insert<T> {
    pub fn rotation(&self) -> Option<&RotationEvent<T>> {
        match self {
            Insert::Inserted(rotation) => rotation.as_ref(),
            Insert::Duplicate(_) => None,
        }
    }

    pub fn is_duplicate(&self) -> bool {
        matches!(self, Insert::Duplicate(_))
    }
}

/// What [`Tree::remove`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Remove<T> {
    /// The removed value, plus the *last* rotation of the unwind. A
    /// removal can rebalance at several ancestors; only the final event
    /// is kept here, the full sequence goes to [`TreeCallbacks::rotate`].
    Removed(T, Option<RotationEvent<T>>),
    /// The value was not in the tree; nothing changed.
    NotFound,
}

impl<T> Remove<T> {
    pub fn rotation(&self) -> Option<&RotationEvent<T>> {
        match self {
            Remove::Removed(_, rotation) => rotation.as_ref(),
            Remove::NotFound => None,
        }
    }

    pub fn is_removed(&self) -> bool {
        matches!(self, Remove::Removed(..))
    }
}

/// A read-only snapshot of one node, enough for a caller to render it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeView<'a, T> {
    pub value: &'a T,
    pub height: i32,
    /// `height(left) - height(right)`; in `-1..=1` between operations.
    pub balance: i32,
}

/// Hooks into the balancing machinery. `rotate` fires once per applied
/// case, double rotations included, with the value at the unbalanced
/// node. Unlike the event returned from a mutating call, the callback
/// sees every rotation of a multi-level removal unwind.
pub trait TreeCallbacks {
    type Value;

    fn rotate(&mut self, rotation: Rotation, at: &Self::Value);
}

#[derive(Debug, Clone, Copy)]
pub struct Noop<T> {
    _phantom: PhantomData<T>,
}

impl<T> Default for Noop<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Noop<T> {
    pub fn new() -> Self {
        Noop {
            _phantom: PhantomData,
        }
    }
}

impl<T> TreeCallbacks for Noop<T> {
    type Value = T;

    fn rotate(&mut self, _rotation: Rotation, _at: &Self::Value) {}
}

/// The raw balancing layer: a root link plus the callbacks it notifies.
/// [`Tree`] wraps this with length bookkeeping and the public API.
#[derive(Debug)]
pub struct Root<T, C: TreeCallbacks<Value = T>> {
    pub(crate) link: Link<T>,
    pub(crate) callbacks: C,
}

/// An AVL tree of unique, totally ordered values.
/// C is the callbacks type notified of every rotation.
#[derive(Debug)]
pub struct Tree<T, C: TreeCallbacks<Value = T> = Noop<T>> {
    pub(crate) root: Root<T, C>,
    pub(crate) len: usize,
}
