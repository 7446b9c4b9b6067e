//! core::error
//!
//! Error taxonomy for split ends.
//!
//! A split end is never empty: its root value stays put for the whole life
//! of the handle. The only failure in the crate is therefore an attempt to
//! snip that root, which is a usage error rather than a transient one.

use thiserror::Error;

/// Errors from split end operations.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SplitEndError {
    /// `snip` was called on a handle that only holds its root value.
    #[error("cannot snip the root of a split end")]
    RootBoundary,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_boundary_message() {
        assert_eq!(
            SplitEndError::RootBoundary.to_string(),
            "cannot snip the root of a split end"
        );
    }

    #[test]
    fn is_std_error() {
        fn assert_error<E: std::error::Error + Send + Sync + 'static>() {}
        assert_error::<SplitEndError>();
    }
}
