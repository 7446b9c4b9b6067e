//! SplitEnds - LIFO stacks safely sharing immutable data
//!
//! A [`SplitEnd`] is a small mutable stack whose values live in immutable,
//! reference-counted [`Node`]s. Copying a split end copies one pointer, so
//! many split ends can share the same tail and grow into a bush.
//!
//! # Architecture
//!
//! - [`core::node`] - Immutable nodes: value, parent pointer, cached depth
//! - [`core::splitend`] - Mutable handles over node chains
//! - [`core::error`] - The single error kind, [`SplitEndError`]
//!
//! # Correctness Invariants
//!
//! 1. A split end always holds at least its root value
//! 2. No operation mutates a node after it is built
//! 3. Copy, push, snip and length are O(1)
//!
//! # Features
//!
//! - `tracing` (default) - emit `tracing` events from bulk operations and
//!   from refused snips. No subscriber is installed by this crate.
//!
//! # Example
//!
//! ```
//! use splitends::SplitEnd;
//!
//! let mut h = SplitEnd::new(10);
//! h.push(20);
//! h.push(30);
//!
//! let mut h2 = h.clone();
//! h2.push(40);
//!
//! assert_eq!(h.len(), 3);
//! assert_eq!(h2.len(), 4);
//! assert_eq!(h.snip(), Ok(30));
//! assert_eq!(h2.iter().copied().collect::<Vec<_>>(), vec![40, 30, 20, 10]);
//! ```

pub mod core;

pub use crate::core::error::SplitEndError;
pub use crate::core::node::{Iter, Node};
pub use crate::core::splitend::SplitEnd;
