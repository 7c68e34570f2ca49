//! Core error types.

use thiserror::Error;

/// Errors from the automaton engine.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("cannot allocate transition table for {states} states")]
    Allocation { states: usize },

    #[error("symbol {symbol:?} is outside the supported alphabet")]
    OutOfAlphabet { symbol: char },

    #[error("column {index} is outside the alphabet")]
    ColumnOutOfRange { index: usize },

    #[error("state {state} out of range for automaton with {size} states")]
    StateOutOfRange { state: usize, size: usize },

    #[error("invalid machine definition: {reason}")]
    InvalidDefinition { reason: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CoreError {
    /// Returns a stable error code for display and scripting.
    pub fn error_code(&self) -> &'static str {
        match self {
            CoreError::Allocation { .. } => "ALLOCATION_FAILED",
            CoreError::OutOfAlphabet { .. } => "OUT_OF_ALPHABET",
            CoreError::ColumnOutOfRange { .. } => "COLUMN_OUT_OF_RANGE",
            CoreError::StateOutOfRange { .. } => "STATE_OUT_OF_RANGE",
            CoreError::InvalidDefinition { .. } => "BAD_DEFINITION",
            CoreError::Json(_) => "BAD_DEFINITION",
            CoreError::Io(_) => "IO_ERROR",
        }
    }
}
