//! Algotrace Board
//!
//! The N-Queens board model shared by the backtracking engine and the
//! interactive construct-mode board.
//!
//! # Representation
//!
//! A board of size N is a row→column map: position `r` holds the column of the
//! queen in row `r`, or `None` when the row is empty. One queen per row is
//! therefore structural; only columns and diagonals can conflict.
//!
//! # Conflict Lines
//!
//! When a candidate cell is unsafe, [`find_conflict_line`] reports the first
//! placed queen (scanning from the top row) that attacks it, together with the
//! full column or diagonal that connects the two. Renderers highlight that one
//! line rather than every threat on the board.
//!
//! ```
//! use algotrace_board::{Board, Cell, LineKind, find_conflict_line};
//!
//! let board = Board::from_columns(&[1, -1, -1, -1]).unwrap();
//! let line = find_conflict_line(&board, Cell::new(1, 1)).unwrap();
//! assert_eq!(line.kind, LineKind::Column);
//! assert_eq!(line.queen, Cell::new(0, 1));
//! assert_eq!(line.cells.len(), 4);
//! ```

mod board;
mod cell;
mod conflict;
mod construct;
mod error;

pub use board::Board;
pub use cell::Cell;
pub use conflict::{find_conflict, find_conflict_line, is_safe, line_cells, ConflictLine, LineKind};
pub use construct::{ConstructBoard, PlacementError};
pub use error::BoardError;

/// Column value used by the flat `-1`-sentinel board encoding for an empty row.
pub const UNPLACED: i64 = -1;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_queens_solution_has_no_conflicts() {
        let board = Board::from_columns(&[1, 3, 0, 2]).unwrap();
        assert!(board.is_valid_solution());

        for queen in board.queens() {
            let mut others = board.clone();
            others.remove(queen.row).unwrap();
            assert!(is_safe(&others, queen));
        }
    }
}
