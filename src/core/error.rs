//! Engine error type.
//!
//! Normal play never fails: rejected clicks are no-ops reported as events.
//! Errors are reserved for caller defects (positions off the board) and
//! for malformed inputs (board layouts, configuration).

use derive_more::{Display, Error};

/// Errors surfaced by the engine.
#[derive(Clone, Debug, PartialEq, Eq, Display, Error)]
pub enum EngineError {
    /// A row or column outside `0..BOARD_SIZE`.
    #[display("position ({row}, {col}) is outside the board")]
    OutOfRange { row: usize, col: usize },

    /// A textual board layout could not be parsed.
    #[display("invalid board layout: {message}")]
    Parse { message: String },

    /// A board value cannot be used as given, e.g. a starting board with
    /// empty cells.
    #[display("invalid board: {message}")]
    InvalidBoard { message: String },

    /// Configuration could not be loaded or failed validation.
    #[display("invalid configuration: {message}")]
    Config { message: String },
}

impl EngineError {
    pub(crate) fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    pub(crate) fn invalid_board(message: impl Into<String>) -> Self {
        Self::InvalidBoard {
            message: message.into(),
        }
    }

    pub(crate) fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}
