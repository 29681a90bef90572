use alloc::boxed::Box;

/// An owning, optional child pointer.
pub(crate) type Link<K> = Option<Box<TreeNode<K>>>;

// Unbalanced BST node: holds only the key, values live in the `KeyIndex`.
// Every key in `left` is `< key`, every key in `right` is `>= key`.
pub(crate) struct TreeNode<K> {
    pub(crate) key: K,
    pub(crate) left: Link<K>,
    pub(crate) right: Link<K>,
}

impl<K> TreeNode<K> {
    /// Creates a childless node holding `key`.
    pub(crate) fn leaf(key: K) -> Box<Self> {
        Box::new(Self {
            key,
            left: None,
            right: None,
        })
    }
}

/// Returns the smallest key in the subtree rooted at `node`.
///
/// Taking a node rather than a `Link` means the subtree can never be absent.
pub(crate) fn minimum<K>(node: &TreeNode<K>) -> &K {
    let mut node = node;
    while let Some(left) = node.left.as_deref() {
        node = left;
    }
    &node.key
}

/// Returns the largest key in the subtree rooted at `node`.
pub(crate) fn maximum<K>(node: &TreeNode<K>) -> &K {
    let mut node = node;
    while let Some(right) = node.right.as_deref() {
        node = right;
    }
    &node.key
}
