//! core
//!
//! Core domain types for split ends.
//!
//! # Modules
//!
//! - [`node`] - Immutable, shareable nodes and chain iteration
//! - [`splitend`] - The mutable handle: push, snip, cut, split
//! - [`error`] - Error taxonomy
//!
//! # Design Principles
//!
//! - Nodes are immutable once built; only handles move
//! - Sharing is by reference count, never by copying values
//! - Length is cached per node, so no query walks a chain unless it says so

pub mod error;
pub mod node;
pub mod splitend;
