//! Unified library error type.
//! The reconciliation pipeline itself is infallible; errors only arise at the
//! boundaries where records are parsed from their REST payload shapes.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // Deserialization / parsing
    // ---------------------------
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid time string: {0}")]
    InvalidTime(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
