//! Error types for layout input and configuration

use thiserror::Error;

/// Result type for layout operations
pub type LayoutResult<T> = Result<T, LayoutError>;

/// Errors raised around the layout calculator.
///
/// The calculator itself is infallible; these cover operand input,
/// configuration and config-file I/O.
#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("invalid operand {input:?}: {reason}; enter valid non-negative numbers")]
    InvalidOperand { input: String, reason: String },

    #[error("too many units: {total} exceeds the limit of {max}")]
    TooManyUnits { total: u64, max: u64 },

    #[error("invalid layout config: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
