//! Custom error types used throughout the `gainsplit` crate.
use thiserror::Error;

/// Errors that can occur while inducing a decision tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    /// A non-empty record set is required, but an empty one was given.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}
