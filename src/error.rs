//! Error types for fixed-size vector operations

use thiserror::Error;

/// Result type for trueno-fixed operations
pub type Result<T> = std::result::Result<T, VectorError>;

/// Errors that can occur during vector operations
///
/// Only runtime-checked structural access can fail. Shape mismatches that the
/// type system can see are rejected at compile time instead.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum VectorError {
    /// Runtime index is not contained in the vector
    #[error("Index out of range: index {index}, size {size}")]
    IndexOutOfRange {
        /// Requested index
        index: usize,
        /// Number of contained cells
        size: usize,
    },
}
