//! Bounded array errors.

use numport_core::SignedSize;
use thiserror::Error;

/// Recoverable failures of bounded array access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ArrayError {
    #[error("index {index} is beyond capacity {capacity}")]
    CapacityExceeded {
        index: SignedSize,
        capacity: SignedSize,
    },

    #[error("index {index} is not present (length {length})")]
    IndexNotPresent { index: SignedSize, length: SignedSize },

    #[error("negative index {index}")]
    NegativeIndex { index: SignedSize },
}

/// Result type for bounded array operations.
pub type Result<T> = std::result::Result<T, ArrayError>;
