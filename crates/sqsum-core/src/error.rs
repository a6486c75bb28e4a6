//! Error types for the reduction kernel crates
//!
//! Provides a unified error type shared by all sqsum crates.

use thiserror::Error;

/// Core error type for reduction operations
///
/// Kernel arithmetic itself is infallible; errors only arise at the edges,
/// when foreign data is marshalled in or when an execution engine is built.
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Invalid input data
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Threading or parallelization error
    #[error("Execution error: {0}")]
    Execution(String),

    /// Other errors
    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for size mismatch
    pub fn size_mismatch(expected: usize, actual: usize, context: &str) -> Self {
        Self::InvalidInput(format!(
            "Size mismatch in {context}: expected {expected}, got {actual}"
        ))
    }

    /// Create an error for a byte buffer whose length is not a whole number
    /// of elements
    pub fn ragged_bytes(len: usize, elem_size: usize) -> Self {
        Self::InvalidInput(format!(
            "Byte buffer of {len} bytes is not a multiple of the {elem_size}-byte element size"
        ))
    }
}
