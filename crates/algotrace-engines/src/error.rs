//! Error types for engine runs.

use algotrace_board::BoardError;
use thiserror::Error;

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur before or during an engine run.
///
/// Input is validated before the first step is recorded, so a failed run
/// never yields a partial trace.
#[derive(Debug, Error)]
pub enum Error {
    /// Board size of zero
    #[error("Invalid board size {n}: must be at least 1")]
    InvalidBoardSize { n: usize },

    /// Board size above the configured ceiling
    #[error("Board size {n} exceeds the configured maximum of {max}")]
    BoardTooLarge { n: usize, max: usize },

    /// Empty array rejected under strict input checking
    #[error("Empty input for {algorithm}")]
    EmptyInput { algorithm: &'static str },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Trace could not be serialized for digesting
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Board addressing error
    #[error("Board error: {0}")]
    Board(#[from] BoardError),
}
