//! Error types for the prefix-sum container.

use thiserror::Error;

/// Error variants for Fenwick tree operations.
///
/// Both variants are precondition violations: they signal a programming
/// error in the caller and are never retried internally.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// An element index was outside `[0, size)`.
    #[error("index out of range: {index} (size {size})")]
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// The container size at the time of the call.
        size: usize,
    },

    /// A requested size cannot be backed by the container's arrays.
    #[error("invalid size: {0}")]
    InvalidSize(usize),
}

/// A specialized Result type for Fenwick tree operations.
pub type Result<T> = std::result::Result<T, Error>;
