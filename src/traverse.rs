use crate::{Node, Tree, TreeCallbacks};

/// The three depth-first traversals. Each call materializes the full
/// sequence; callers wanting laziness use [`Tree::iter`] instead.
impl<T, C: TreeCallbacks<Value = T>> Tree<T, C> {
    /// Left, self, right: every value in ascending order.
    pub fn inorder(&self) -> Vec<&T> {
        let mut out = Vec::with_capacity(self.len);
        inorder(self.root.link.as_deref(), &mut out);
        out
    }

    /// Self, left, right: the root first, then each subtree.
    pub fn preorder(&self) -> Vec<&T> {
        let mut out = Vec::with_capacity(self.len);
        preorder(self.root.link.as_deref(), &mut out);
        out
    }

    /// Left, right, self: children before their parent, the root last.
    pub fn postorder(&self) -> Vec<&T> {
        let mut out = Vec::with_capacity(self.len);
        postorder(self.root.link.as_deref(), &mut out);
        out
    }
}

fn inorder<'a, T>(node: Option<&'a Node<T>>, out: &mut Vec<&'a T>) {
    if let Some(node) = node {
        inorder(node.left.as_deref(), out);
        out.push(&node.value);
        inorder(node.right.as_deref(), out);
    }
}

fn preorder<'a, T>(node: Option<&'a Node<T>>, out: &mut Vec<&'a T>) {
    if let Some(node) = node {
        out.push(&node.value);
        preorder(node.left.as_deref(), out);
        preorder(node.right.as_deref(), out);
    }
}

fn postorder<'a, T>(node: Option<&'a Node<T>>, out: &mut Vec<&'a T>) {
    if let Some(node) = node {
        postorder(node.left.as_deref(), out);
        postorder(node.right.as_deref(), out);
        out.push(&node.value);
    }
}
