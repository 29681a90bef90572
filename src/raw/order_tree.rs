use alloc::boxed::Box;
use alloc::vec::Vec;
use core::borrow::Borrow;
use core::iter::FusedIterator;
use core::mem;

use smallvec::SmallVec;

use super::node::{Link, TreeNode, maximum, minimum};

// Inline capacity covers the depth of any reasonably shaped tree; degenerate
// trees spill to the heap.
type Stack<'a, K> = SmallVec<[&'a TreeNode<K>; 32]>;

/// Unbalanced binary search tree holding the keys of an `OrderedMap`.
///
/// The tree owns no values. Mutations walk an owning cursor (`&mut Link<K>`)
/// down to the affected position and splice the subtree there, so neither
/// insertion, removal nor teardown recurses: a tree degenerated into a list
/// by sorted insertion is handled without growing the call stack.
pub(crate) struct OrderTree<K> {
    root: Link<K>,
    len: usize,
}

impl<K> OrderTree<K> {
    pub(crate) const fn new() -> Self {
        Self { root: None, len: 0 }
    }

    pub(crate) const fn len(&self) -> usize {
        self.len
    }

    pub(crate) fn root_key(&self) -> Option<&K> {
        self.root.as_deref().map(|node| &node.key)
    }

    pub(crate) fn first(&self) -> Option<&K> {
        self.root.as_deref().map(minimum)
    }

    pub(crate) fn last(&self) -> Option<&K> {
        self.root.as_deref().map(maximum)
    }

    /// Returns the number of nodes on the longest root-to-leaf path.
    pub(crate) fn height(&self) -> usize {
        let mut height = 0;
        let mut stack: Vec<(&TreeNode<K>, usize)> = self.root.as_deref().map(|root| (root, 1)).into_iter().collect();
        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);
            stack.extend(node.left.as_deref().map(|child| (child, depth + 1)));
            stack.extend(node.right.as_deref().map(|child| (child, depth + 1)));
        }
        height
    }

    /// Returns a lazy in-order walk over the keys.
    pub(crate) fn iter(&self) -> InOrder<'_, K> {
        InOrder::new(self.root.as_deref(), self.len)
    }

    /// Calls `visit` on every key in ascending order.
    pub(crate) fn traverse<F>(&self, mut visit: F)
    where
        F: FnMut(&K),
    {
        for key in self.iter() {
            visit(key);
        }
    }

    /// Releases every node, leaving the tree empty.
    pub(crate) fn clear(&mut self) {
        let mut stack: Vec<Box<TreeNode<K>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
        self.len = 0;
    }

    /// Empties the tree, returning its keys in ascending order.
    pub(crate) fn drain_to_vec(&mut self) -> Vec<K> {
        let mut keys = Vec::with_capacity(self.len);
        let mut stack: Vec<Box<TreeNode<K>>> = Vec::new();
        let mut link = self.root.take();
        self.len = 0;

        loop {
            while let Some(mut node) = link {
                link = node.left.take();
                stack.push(node);
            }
            let Some(node) = stack.pop() else {
                break;
            };
            let TreeNode { key, right, .. } = *node;
            keys.push(key);
            link = right;
        }

        keys
    }
}

impl<K: Ord> OrderTree<K> {
    /// Places `key` as a new leaf.
    ///
    /// Smaller keys descend left, everything else (including an equal key)
    /// descends right. Callers never insert a key that is already present.
    pub(crate) fn insert(&mut self, key: K) {
        let mut slot = &mut self.root;
        while let Some(node) = slot {
            slot = if key < node.key { &mut node.left } else { &mut node.right };
        }
        *slot = Some(TreeNode::leaf(key));
        self.len += 1;
    }

    /// Removes `key`, returning the key that was stored in the tree.
    ///
    /// An absent key leaves the tree untouched. A node with two children takes
    /// over the key of its in-order successor, which is then spliced out of
    /// the right subtree; a node with at most one child is replaced by that
    /// child.
    pub(crate) fn remove<Q>(&mut self, key: &Q) -> Option<K>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let slot = slot_of(&mut self.root, key);

        let node = slot.as_mut()?;
        if node.left.is_some() && node.right.is_some() {
            let successor = detach_minimum(&mut node.right)?;
            self.len -= 1;
            return Some(mem::replace(&mut node.key, successor));
        }

        let node = slot.take()?;
        let TreeNode { key, left, right } = *node;
        *slot = left.or(right);
        self.len -= 1;
        Some(key)
    }
}

impl<K: Ord + Clone> Clone for OrderTree<K> {
    /// Rebuilds the tree in pre-order, which reproduces the same shape.
    fn clone(&self) -> Self {
        let mut tree = Self::new();
        let mut stack: Vec<&TreeNode<K>> = self.root.as_deref().into_iter().collect();
        while let Some(node) = stack.pop() {
            tree.insert(node.key.clone());
            stack.extend(node.right.as_deref());
            stack.extend(node.left.as_deref());
        }
        tree
    }
}

impl<K> Drop for OrderTree<K> {
    fn drop(&mut self) {
        self.clear();
    }
}

/// Walks from `link` to the link holding `key`, or to the empty link where it
/// would be inserted.
fn slot_of<'a, K, Q>(link: &'a mut Link<K>, key: &Q) -> &'a mut Link<K>
where
    K: Borrow<Q>,
    Q: ?Sized + Ord,
{
    let mut slot = link;
    while let Some(ordering) = slot.as_deref().map(|node| key.cmp(node.key.borrow())).filter(|o| o.is_ne()) {
        if let Some(node) = slot {
            slot = if ordering.is_lt() { &mut node.left } else { &mut node.right };
        }
    }
    slot
}

/// Unlinks the leftmost node of the subtree at `link`, returning its key.
///
/// The leftmost node has no left child, so its right subtree takes its place.
fn detach_minimum<K>(link: &mut Link<K>) -> Option<K> {
    let mut slot = link;
    while slot.as_deref().is_some_and(|node| node.left.is_some()) {
        slot = &mut slot.as_mut()?.left;
    }
    let node = slot.take()?;
    let TreeNode { key, right, .. } = *node;
    *slot = right;
    Some(key)
}

/// A lazy in-order walk over the keys of an `OrderTree`.
///
/// Front and back cursors each keep their own stack of pending ancestors; the
/// shared `remaining` count stops them from walking past each other.
pub(crate) struct InOrder<'a, K> {
    front: Stack<'a, K>,
    back: Stack<'a, K>,
    remaining: usize,
}

impl<'a, K> InOrder<'a, K> {
    fn new(root: Option<&'a TreeNode<K>>, len: usize) -> Self {
        let mut walk = Self {
            front: SmallVec::new(),
            back: SmallVec::new(),
            remaining: len,
        };
        walk.descend_left(root);
        walk.descend_right(root);
        walk
    }

    pub(crate) fn remaining(&self) -> usize {
        self.remaining
    }

    fn descend_left(&mut self, mut link: Option<&'a TreeNode<K>>) {
        while let Some(node) = link {
            self.front.push(node);
            link = node.left.as_deref();
        }
    }

    fn descend_right(&mut self, mut link: Option<&'a TreeNode<K>>) {
        while let Some(node) = link {
            self.back.push(node);
            link = node.right.as_deref();
        }
    }
}

impl<'a, K> Iterator for InOrder<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.front.pop()?;
        self.descend_left(node.right.as_deref());
        self.remaining -= 1;
        Some(&node.key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K> DoubleEndedIterator for InOrder<'_, K> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.back.pop()?;
        self.descend_right(node.left.as_deref());
        self.remaining -= 1;
        Some(&node.key)
    }
}

impl<K> ExactSizeIterator for InOrder<'_, K> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<K> FusedIterator for InOrder<'_, K> {}

impl<K> Clone for InOrder<'_, K> {
    fn clone(&self) -> Self {
        Self {
            front: self.front.clone(),
            back: self.back.clone(),
            remaining: self.remaining,
        }
    }
}
