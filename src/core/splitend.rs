//! core::splitend
//!
//! Mutable LIFO handles over shared, immutable node chains.
//!
//! # Design
//!
//! A [`SplitEnd`] is a cursor: it points at a tip [`Node`] and remembers
//! the root of that chain. Pushing allocates a new node on top of the tip;
//! snipping moves the tip to its parent. Neither touches an existing node,
//! so any number of handles can share a chain and diverge from it freely.
//!
//! # Invariants
//!
//! - `len() >= 1`: the root value can never be snipped
//! - `len() == tip.depth()`, cached on the node, never recomputed
//! - Cloning a handle shares its tip; no node is ever copied
//!
//! # Example
//!
//! ```
//! use splitends::{SplitEnd, SplitEndError};
//!
//! let mut trunk = SplitEnd::new("root");
//! trunk.push("a");
//!
//! let mut branch = trunk.clone();
//! branch.push("b");
//!
//! assert_eq!(trunk.len(), 2);
//! assert_eq!(branch.len(), 3);
//! assert_eq!(branch.shared_len(&trunk), 2);
//!
//! assert_eq!(trunk.snip(), Ok("a"));
//! assert_eq!(trunk.snip(), Err(SplitEndError::RootBoundary));
//! assert_eq!(*branch.peek(), "b");
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use super::error::SplitEndError;
use super::node::{Iter, Node};

/// A LIFO stack whose nodes may be shared with other split ends.
///
/// Equality and hashing are by identity of the tip node, which is O(1).
/// Two handles are equal when they denote the very same chain; use
/// [`SplitEnd::content_eq`] to compare the values instead.
pub struct SplitEnd<T> {
    tip: Arc<Node<T>>,
    root: Arc<Node<T>>,
}

// A split end is never empty, `is_extended` is the meaningful check.
#[allow(clippy::len_without_is_empty)]
impl<T> SplitEnd<T> {
    /// Create a split end holding only its root value.
    pub fn new(root: T) -> Self {
        let node = Node::root(root);
        Self {
            tip: Arc::clone(&node),
            root: node,
        }
    }

    /// Create a split end from a root value followed by values pushed in order.
    ///
    /// ```
    /// use splitends::SplitEnd;
    ///
    /// let se = SplitEnd::from_values(1, [2, 3]);
    /// assert_eq!(se.len(), 3);
    /// assert_eq!(*se.peek(), 3);
    /// assert_eq!(*se.root(), 1);
    /// ```
    pub fn from_values<I>(root: T, rest: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut se = Self::new(root);
        se.extend(rest);
        se
    }

    /// Push a value onto the tip.
    #[doc(alias = "extend")]
    pub fn push(&mut self, value: T) {
        self.tip = Node::child(value, Arc::clone(&self.tip));
    }

    /// Remove the tip value and return it.
    ///
    /// The value is cloned out of its node, since other handles may still
    /// share that node.
    ///
    /// # Errors
    ///
    /// Returns `SplitEndError::RootBoundary` if only the root is left. The
    /// handle is unchanged in that case.
    #[doc(alias = "pop")]
    pub fn snip(&mut self) -> Result<T, SplitEndError>
    where
        T: Clone,
    {
        match self.step_down() {
            Some(old_tip) => Ok(old_tip.value().clone()),
            None => {
                #[cfg(feature = "tracing")]
                tracing::debug!("refused to snip the root of a split end");
                Err(SplitEndError::RootBoundary)
            }
        }
    }

    /// Snip up to `n` values off the tip, returned tip first.
    ///
    /// Never removes the root: asking for more than `len() - 1` values
    /// cuts back to the root and returns everything above it.
    ///
    /// ```
    /// use splitends::SplitEnd;
    ///
    /// let mut se = SplitEnd::from_values(0, 1..=4);
    /// assert_eq!(se.cut(2), vec![4, 3]);
    /// assert_eq!(se.cut(10), vec![2, 1]);
    /// assert_eq!(se.len(), 1);
    /// ```
    pub fn cut(&mut self, n: usize) -> Vec<T>
    where
        T: Clone,
    {
        let n = n.min(self.len() - 1);
        let mut cut = Vec::with_capacity(n);
        for _ in 0..n {
            let Some(old_tip) = self.step_down() else {
                break;
            };
            cut.push(old_tip.value().clone());
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(cut = cut.len(), remaining = self.len(), "cut split end");

        cut
    }

    /// Snip every value above the root, returned tip first.
    pub fn cut_to_root(&mut self) -> Vec<T>
    where
        T: Clone,
    {
        self.cut(self.len() - 1)
    }

    /// Copy this split end and push `values` onto the copy.
    ///
    /// `self` is left untouched; the copy shares every node of `self`.
    ///
    /// ```
    /// use splitends::SplitEnd;
    ///
    /// let base = SplitEnd::from_values('a', ['b']);
    /// let longer = base.split(['c', 'd']);
    /// assert_eq!(base.len(), 2);
    /// assert_eq!(longer.len(), 4);
    /// assert_eq!(longer.shared_len(&base), 2);
    /// ```
    pub fn split<I>(&self, values: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut se = self.clone();
        se.extend(values);

        #[cfg(feature = "tracing")]
        tracing::trace!(from = self.len(), to = se.len(), "split split end");

        se
    }

    /// The tip value.
    pub fn peek(&self) -> &T {
        self.tip.value()
    }

    /// The root value, which no snip can remove.
    pub fn root(&self) -> &T {
        self.root.value()
    }

    /// The tip node.
    pub fn tip(&self) -> &Arc<Node<T>> {
        &self.tip
    }

    /// Number of values, root included. O(1).
    pub fn len(&self) -> usize {
        self.tip.depth()
    }

    /// Whether anything sits above the root.
    pub fn is_extended(&self) -> bool {
        self.len() > 1
    }

    /// Iterate values from tip to root.
    pub fn iter(&self) -> Iter<'_, T> {
        self.tip.iter()
    }

    /// Iterate values from root to tip.
    ///
    /// Nodes only link towards the root, so this buffers one reference per
    /// value before yielding.
    pub fn iter_from_root(&self) -> std::iter::Rev<std::vec::IntoIter<&T>> {
        self.iter().collect::<Vec<_>>().into_iter().rev()
    }

    /// Fold values from tip to root.
    pub fn fold<A, F>(&self, init: A, f: F) -> A
    where
        F: FnMut(A, &T) -> A,
    {
        self.tip.fold(init, f)
    }

    /// Fold values from tip to root, seeded with the tip value.
    pub fn reduce<F>(&self, f: F) -> T
    where
        T: Clone,
        F: FnMut(T, &T) -> T,
    {
        self.tip.reduce(f)
    }

    /// Fold values from root to tip.
    pub fn rev_fold<A, F>(&self, init: A, f: F) -> A
    where
        F: FnMut(A, &T) -> A,
    {
        self.iter_from_root().fold(init, f)
    }

    /// Fold values from root to tip, seeded with the root value.
    pub fn rev_reduce<F>(&self, f: F) -> T
    where
        T: Clone,
        F: FnMut(T, &T) -> T,
    {
        self.iter_from_root()
            .skip(1)
            .fold(self.root().clone(), f)
    }

    /// Whether both handles point at the same tip node. Same as `==`.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.tip, &other.tip)
    }

    /// Compare the values of two split ends, root to tip. O(n).
    ///
    /// Handles built independently from equal values compare equal here
    /// even though `==` tells them apart.
    ///
    /// ```
    /// use splitends::SplitEnd;
    ///
    /// let a = SplitEnd::from_values(1, [2, 3]);
    /// let b = SplitEnd::from_values(1, [2, 3]);
    /// assert!(a.content_eq(&b));
    /// assert_ne!(a, b);
    /// ```
    pub fn content_eq(&self, other: &Self) -> bool
    where
        T: PartialEq,
    {
        self.len() == other.len()
            && self.root() == other.root()
            && self.tip.content_eq(&other.tip)
    }

    /// Number of nodes the two split ends have in common.
    ///
    /// This is the depth of the deepest node on both chains, or 0 when the
    /// chains grow from different roots. O(n).
    pub fn shared_len(&self, other: &Self) -> usize {
        if !Arc::ptr_eq(&self.root, &other.root) {
            return 0;
        }

        let depth = self.len().min(other.len());
        let mut left = ancestor_at(&self.tip, depth);
        let mut right = ancestor_at(&other.tip, depth);
        loop {
            if std::ptr::eq(left, right) {
                return left.depth();
            }
            match (left.parent(), right.parent()) {
                (Some(l), Some(r)) => {
                    left = l.as_ref();
                    right = r.as_ref();
                }
                _ => return 0,
            }
        }
    }

    /// Move the tip to its parent, handing back the old tip.
    ///
    /// Returns `None` without touching the handle when the tip is the root.
    fn step_down(&mut self) -> Option<Arc<Node<T>>> {
        let parent = Arc::clone(self.tip.parent()?);
        Some(std::mem::replace(&mut self.tip, parent))
    }
}

/// Walk down from `node` to its ancestor at `depth`.
fn ancestor_at<T>(mut node: &Node<T>, depth: usize) -> &Node<T> {
    while node.depth() > depth {
        match node.parent() {
            Some(parent) => node = parent.as_ref(),
            None => break,
        }
    }
    node
}

impl<T> Clone for SplitEnd<T> {
    fn clone(&self) -> Self {
        Self {
            tip: Arc::clone(&self.tip),
            root: Arc::clone(&self.root),
        }
    }
}

impl<T> PartialEq for SplitEnd<T> {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl<T> Eq for SplitEnd<T> {}

impl<T> Hash for SplitEnd<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        Arc::as_ptr(&self.tip).hash(state);
    }
}

impl<T> Extend<T> for SplitEnd<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<'a, T> IntoIterator for &'a SplitEnd<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for SplitEnd<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tuple = f.debug_tuple("SplitEnd");
        for value in self.iter_from_root() {
            tuple.field(value);
        }
        tuple.finish()
    }
}

/// Renders tip to root, e.g. `>< 3 -> 2 -> 1 ||`.
impl<T: fmt::Display> fmt::Display for SplitEnd<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("><")?;
        for (i, value) in self.iter().enumerate() {
            if i == 0 {
                write!(f, " {}", value)?;
            } else {
                write!(f, " -> {}", value)?;
            }
        }
        f.write_str(" ||")
    }
}
