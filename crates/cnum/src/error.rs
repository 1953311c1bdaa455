//! Error types for cnum.

use thiserror::Error;

/// Errors that can occur in tensor operations.
#[derive(Debug, Error)]
pub enum TensorError {
    /// Storage length mismatch between two operands.
    #[error("length mismatch: left operand has {left} elements, right operand has {right}")]
    LengthMismatch { left: usize, right: usize },
}
