//! core::node
//!
//! Immutable, shareable stack slots.
//!
//! # Architecture
//!
//! Nodes form a bush where:
//! - Each node holds one value and an optional parent pointer
//! - Edges point from child to parent, never the other way
//! - A node without a parent is a root
//! - Any number of children may share one parent
//!
//! # Invariants
//!
//! - `depth == 1` iff the node is a root, otherwise `depth == parent.depth + 1`
//! - Fields are fixed at construction; there is no way to mutate a node
//! - Chains are acyclic: a parent always exists before its children

use std::fmt;
use std::iter::FusedIterator;
use std::sync::Arc;

/// One immutable slot of a split end.
///
/// Nodes are handed out behind [`Arc`] so that handles (and other nodes)
/// can share them. Dropping the last reference to a node releases its
/// parent in turn; the release walks up the chain in a loop, so chains of
/// any length drop without recursion.
///
/// # Example
///
/// ```
/// use splitends::Node;
///
/// let root = Node::root("trunk");
/// let a = Node::child("a", root.clone());
/// let b = Node::child("b", root.clone());
///
/// assert_eq!(a.depth(), 2);
/// assert!(std::sync::Arc::ptr_eq(a.parent().unwrap(), b.parent().unwrap()));
/// assert_eq!(a.iter().copied().collect::<Vec<_>>(), vec!["a", "trunk"]);
/// ```
pub struct Node<T> {
    value: T,
    parent: Option<Arc<Node<T>>>,
    depth: usize,
}

impl<T> Node<T> {
    /// Create a root node: no parent, depth 1.
    pub fn root(value: T) -> Arc<Self> {
        Arc::new(Self {
            value,
            parent: None,
            depth: 1,
        })
    }

    /// Create a node on top of `parent`.
    pub fn child(value: T, parent: Arc<Self>) -> Arc<Self> {
        let depth = parent.depth + 1;
        Arc::new(Self {
            value,
            parent: Some(parent),
            depth,
        })
    }

    /// The value stored in this node.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The parent node, `None` for a root.
    pub fn parent(&self) -> Option<&Arc<Self>> {
        self.parent.as_ref()
    }

    /// Number of nodes from this one down to its root, inclusive.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Whether this node has no parent.
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// Iterate values from this node down to its root.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            node: Some(self),
            remaining: self.depth,
        }
    }

    /// Fold values from this node down to its root.
    pub fn fold<A, F>(&self, init: A, f: F) -> A
    where
        F: FnMut(A, &T) -> A,
    {
        self.iter().fold(init, f)
    }

    /// Fold values from this node down to its root, seeded with this
    /// node's own value.
    pub fn reduce<F>(&self, f: F) -> T
    where
        T: Clone,
        F: FnMut(T, &T) -> T,
    {
        match &self.parent {
            Some(parent) => parent.fold(self.value.clone(), f),
            None => self.value.clone(),
        }
    }

    /// Compare the value chains of two nodes element by element.
    ///
    /// O(n) in the worst case. Stops early on depth mismatch, and as soon
    /// as both walks reach the same node, since from there on the chains
    /// are one and the same.
    pub fn content_eq(&self, other: &Self) -> bool
    where
        T: PartialEq,
    {
        if self.depth != other.depth {
            return false;
        }

        let mut left = self;
        let mut right = other;
        loop {
            if std::ptr::eq(left, right) {
                return true;
            }
            if left.value != right.value {
                return false;
            }
            match (left.parent.as_deref(), right.parent.as_deref()) {
                (Some(l), Some(r)) => {
                    left = l;
                    right = r;
                }
                // Equal depths, so both walks hit their roots together.
                _ => return true,
            }
        }
    }
}

impl<T> Drop for Node<T> {
    fn drop(&mut self) {
        let mut next = self.parent.take();
        while let Some(node) = next {
            // `into_inner` hands the node back only to the last holder,
            // even when several threads release the same suffix at once.
            match Arc::into_inner(node) {
                Some(mut node) => next = node.parent.take(),
                None => break,
            }
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("value", &self.value)
            .field("depth", &self.depth)
            .finish()
    }
}

/// Iterator over the values of a chain, from a node down to its root.
pub struct Iter<'a, T> {
    node: Option<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.node?;
        self.node = node.parent.as_deref();
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            node: self.node,
            remaining: self.remaining,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}
