use crate::{Link, Node, NodeView};

// Public API.
impl<T> Node<T> {
    pub fn new(value: T) -> Self {
        Node {
            left: None,
            right: None,
            height: 0,
            value,
        }
    }

    #[inline(always)]
    pub fn value(&self) -> &T {
        &self.value
    }

    #[inline(always)]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// `height(left) - height(right)`. Positive means left-heavy.
    #[inline(always)]
    pub fn balance(&self) -> i32 {
        self.left.height() - self.right.height()
    }

    pub fn view(&self) -> NodeView<'_, T> {
        NodeView {
            value: &self.value,
            height: self.height,
            balance: self.balance(),
        }
    }
}

// Crate internals.
impl<T> Node<T> {
    #[inline(always)]
    pub(crate) fn boxed(value: T) -> Link<T> {
        Some(Box::new(Node::new(value)))
    }

    /// Recompute the cached height from the children. Must run after any
    /// child rewiring, and before the node's own balance factor is read.
    #[inline(always)]
    pub(crate) fn update_height(&mut self) {
        self.height = self.left.height().max(self.right.height()) + 1;
    }
}

pub(crate) trait LinkExt {
    fn height(&self) -> i32;
    fn balance(&self) -> i32;
}

impl<T> LinkExt for Link<T> {
    #[inline(always)]
    fn height(&self) -> i32 {
        // An absent subtree has height -1 so that a leaf comes out at 0.
        self.as_deref().map_or(-1, Node::height)
    }

    #[inline(always)]
    fn balance(&self) -> i32 {
        self.as_deref().map_or(0, Node::balance)
    }
}
