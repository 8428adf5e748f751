//! Error types for board operations.

use thiserror::Error;

/// Errors raised for an unusable board size or out-of-bounds addressing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    /// Board with no rows
    #[error("board size must be at least 1")]
    EmptyBoard,

    /// Row index past the last row
    #[error("row {row} is outside a board of size {size}")]
    RowOutOfRange { row: usize, size: usize },

    /// Column index past the last column
    #[error("column {col} is outside a board of size {size}")]
    ColumnOutOfRange { col: usize, size: usize },

    /// Flat encoding value that is neither a column nor the unplaced sentinel
    #[error("row {row} holds {value}, expected -1 or a column in 0..{size}")]
    InvalidColumnValue { row: usize, value: i64, size: usize },
}
