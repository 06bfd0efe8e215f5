use thiserror::Error;

/// Errors surfaced by the network's public operations.
///
/// The original implementation performed no bounds checking at all; a
/// mismatched vector silently read out of range. Here every dimension
/// mismatch fails fast instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NetworkError {
    /// A vector argument's length does not match the configured dimension.
    #[error("{vector} has length {actual}, expected {expected}")]
    DimensionMismatch {
        /// Which argument was wrong ("inputs" or "targets").
        vector: &'static str,
        expected: usize,
        actual: usize,
    },

    /// A construction precondition was violated (zero layer size or a
    /// non-positive learning rate).
    #[error("invalid network configuration: {0}")]
    InvalidConfig(&'static str),
}
