//! Safety predicate and conflict-line analysis.
//!
//! A candidate cell `(row, col)` is unsafe when a placed queen at `(r, c)`
//! satisfies `c == col` (column) or `|r - row| == |c - col|` (diagonal).
//!
//! # First Conflict Wins
//!
//! Placed queens are scanned in ascending row order and the first attacker
//! found decides the reported line. Column is tested before diagonal for each
//! queen. The candidate's own row is skipped: in the construct-mode board a
//! queen placed there is being moved, and during backtracking every row at or
//! below the candidate is empty, so the scan only ever meets rows
//! `0..candidate.row`.

use crate::{Board, Cell};

/// The line family connecting an attacking queen to a candidate cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum LineKind {
    /// Same column
    Column,
    /// Top-left to bottom-right (`row - col` constant)
    Diagonal,
    /// Top-right to bottom-left (`row + col` constant)
    AntiDiagonal,
}

/// The full line through an attacking queen that makes a candidate unsafe.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConflictLine {
    /// Which family the line belongs to
    pub kind: LineKind,
    /// The placed queen causing the conflict
    pub queen: Cell,
    /// The cell that was tested
    pub candidate: Cell,
    /// Every in-bounds cell on the line, top row first
    pub cells: Vec<Cell>,
}

impl ConflictLine {
    /// Whether `cell` lies on this line.
    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }
}

/// Classify how `queen` attacks `candidate`, if it does.
fn attack_kind(queen: Cell, candidate: Cell) -> Option<LineKind> {
    if queen.shares_column(&candidate) {
        Some(LineKind::Column)
    } else if queen.shares_diagonal(&candidate) {
        if queen.diagonal() == candidate.diagonal() {
            Some(LineKind::Diagonal)
        } else {
            Some(LineKind::AntiDiagonal)
        }
    } else {
        None
    }
}

/// First placed queen that attacks `candidate`, with the attacking line family.
pub fn find_conflict(board: &Board, candidate: Cell) -> Option<(Cell, LineKind)> {
    board
        .queens()
        .filter(|queen| queen.row != candidate.row)
        .find_map(|queen| attack_kind(queen, candidate).map(|kind| (queen, kind)))
}

/// Safety predicate: no placed queen in another row attacks `candidate`.
pub fn is_safe(board: &Board, candidate: Cell) -> bool {
    find_conflict(board, candidate).is_none()
}

/// Every in-bounds cell of the `kind` line through `anchor` on an `n`×`n` board.
pub fn line_cells(n: usize, anchor: Cell, kind: LineKind) -> Vec<Cell> {
    match kind {
        LineKind::Column => (0..n).map(|row| Cell::new(row, anchor.col)).collect(),
        LineKind::Diagonal => {
            let key = anchor.diagonal();
            (0..n)
                .filter_map(|row| {
                    let col = row as i64 - key;
                    (col >= 0 && (col as usize) < n).then(|| Cell::new(row, col as usize))
                })
                .collect()
        }
        LineKind::AntiDiagonal => {
            let key = anchor.anti_diagonal();
            (0..n)
                .filter_map(|row| {
                    key.checked_sub(row)
                        .filter(|&col| col < n)
                        .map(|col| Cell::new(row, col))
                })
                .collect()
        }
    }
}

/// The conflict line for `candidate`, or `None` if it is safe.
pub fn find_conflict_line(board: &Board, candidate: Cell) -> Option<ConflictLine> {
    let (queen, kind) = find_conflict(board, candidate)?;
    Some(ConflictLine {
        kind,
        queen,
        candidate,
        cells: line_cells(board.size(), queen, kind),
    })
}
