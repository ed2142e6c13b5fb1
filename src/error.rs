//! Error types for pattern and configuration input

use thiserror::Error;

/// Failures raised while building grids or settings from external input.
///
/// Engine operations themselves never fail; these only come from files,
/// configuration and command-line input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LifeError {
    #[error("grid cannot be empty")]
    EmptyGrid,

    #[error("row {row} has length {found}, expected {expected}")]
    RaggedRow {
        row: usize,
        found: usize,
        expected: usize,
    },

    #[error("invalid character '{ch}' at position ({x}, {y}); only '0', '1' and '2' are allowed")]
    InvalidCell { ch: char, x: usize, y: usize },

    #[error("invalid setting `{field}`: {reason}")]
    InvalidSetting { field: &'static str, reason: String },
}

pub type LifeResult<T> = std::result::Result<T, LifeError>;
