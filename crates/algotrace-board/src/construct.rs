//! Construct mode: a learner places queens by hand.
//!
//! Each attempt is validated with the same conflict analysis the backtracking
//! engine uses. A rejected attempt leaves the board untouched and reports the
//! offending line so it can be highlighted.

use thiserror::Error;

use crate::{find_conflict_line, Board, BoardError, Cell, ConflictLine};

/// Why a manual placement was refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlacementError {
    /// The cell is off the board
    #[error(transparent)]
    OutOfRange(#[from] BoardError),

    /// A placed queen attacks the cell
    #[error("{} is attacked by the queen at {}", .0.candidate, .0.queen)]
    Conflict(ConflictLine),
}

/// Interactive board for manual placement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstructBoard {
    board: Board,
}

impl ConstructBoard {
    /// Create an empty construct board of size `n`.
    ///
    /// A zero-size board has no cells to place on and is rejected.
    pub fn new(n: usize) -> Result<Self, BoardError> {
        if n == 0 {
            return Err(BoardError::EmptyBoard);
        }
        Ok(Self {
            board: Board::new(n),
        })
    }

    /// Try to put a queen on `cell`.
    ///
    /// A queen already in `cell.row` is moved rather than duplicated.
    pub fn try_place(&mut self, cell: Cell) -> Result<(), PlacementError> {
        let size = self.board.size();
        if cell.row >= size {
            return Err(BoardError::RowOutOfRange { row: cell.row, size }.into());
        }
        if cell.col >= size {
            return Err(BoardError::ColumnOutOfRange { col: cell.col, size }.into());
        }
        if let Some(line) = find_conflict_line(&self.board, cell) {
            return Err(PlacementError::Conflict(line));
        }
        self.board.place(cell)?;
        Ok(())
    }

    /// Remove the queen in `row`, if there is one.
    pub fn remove(&mut self, row: usize) -> Result<Option<Cell>, BoardError> {
        self.board.remove(row)
    }

    /// Clear the board.
    pub fn reset(&mut self) {
        self.board.clear();
    }

    /// All N queens placed with no conflicts.
    pub fn is_solved(&self) -> bool {
        self.board.is_valid_solution()
    }

    /// Placed queens, top row first.
    pub fn queens(&self) -> Vec<Cell> {
        self.board.queens().collect()
    }

    /// The underlying board.
    pub fn board(&self) -> &Board {
        &self.board
    }
}
