//! Rebuild N-Queens board state by folding placements over an empty board.

use algotrace_board::{Board, BoardError};

use crate::step::{QueensAction, QueensStep};

/// Apply every `Place`/`Remove` step in order to an empty `n`×`n` board.
pub fn replay_board(n: usize, steps: &[QueensStep]) -> Result<Board, BoardError> {
    let mut board = Board::new(n);
    for step in steps {
        match step.action {
            QueensAction::Place => {
                board.place(step.cell())?;
            }
            QueensAction::Remove => {
                board.remove(step.row)?;
            }
            QueensAction::Try | QueensAction::Check | QueensAction::Success => {}
        }
    }
    Ok(board)
}

/// Whether replaying `steps` reproduces the snapshot held by the last step.
///
/// An empty sequence trivially matches the empty board.
pub fn replay_matches_last(n: usize, steps: &[QueensStep]) -> Result<bool, BoardError> {
    let replayed = replay_board(n, steps)?;
    Ok(match steps.last() {
        Some(last) => last.board == replayed,
        None => replayed == Board::new(n),
    })
}
