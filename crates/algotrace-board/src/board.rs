//! Row→column board state.
//!
//! The engine mutates one working board in place while backtracking; every
//! recorded step holds its own clone, so snapshots never alias live state.
//!
//! With the `serde` feature the board serializes in the flat encoding used by
//! front ends: one integer per row, `-1` for an empty row.

use crate::{BoardError, Cell, UNPLACED};

/// An N×N board holding at most one queen per row.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "Vec<i64>", try_from = "Vec<i64>")
)]
pub struct Board {
    columns: Vec<Option<usize>>,
}

impl Board {
    /// Create an empty board of size `n`.
    pub fn new(n: usize) -> Self {
        Self {
            columns: vec![None; n],
        }
    }

    /// Build a board from the flat encoding (`-1` marks an empty row).
    pub fn from_columns(columns: &[i64]) -> Result<Self, BoardError> {
        let size = columns.len();
        let columns = columns
            .iter()
            .enumerate()
            .map(|(row, &value)| match value {
                UNPLACED => Ok(None),
                v if v >= 0 && (v as usize) < size => Ok(Some(v as usize)),
                value => Err(BoardError::InvalidColumnValue { row, value, size }),
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { columns })
    }

    /// The flat encoding of this board (`-1` marks an empty row).
    pub fn to_columns(&self) -> Vec<i64> {
        self.columns
            .iter()
            .map(|c| c.map_or(UNPLACED, |c| c as i64))
            .collect()
    }

    /// Side length N.
    #[inline]
    pub fn size(&self) -> usize {
        self.columns.len()
    }

    /// Column of the queen in `row`, if any.
    #[inline]
    pub fn get(&self, row: usize) -> Option<usize> {
        self.columns.get(row).copied().flatten()
    }

    /// Whether a queen sits exactly on `cell`.
    pub fn has_queen(&self, cell: Cell) -> bool {
        self.get(cell.row) == Some(cell.col)
    }

    /// Put a queen on `cell`, returning the column it displaced in that row.
    pub fn place(&mut self, cell: Cell) -> Result<Option<usize>, BoardError> {
        let size = self.size();
        if cell.col >= size {
            return Err(BoardError::ColumnOutOfRange { col: cell.col, size });
        }
        let slot = self
            .columns
            .get_mut(cell.row)
            .ok_or(BoardError::RowOutOfRange { row: cell.row, size })?;
        Ok(slot.replace(cell.col))
    }

    /// Clear `row`, returning the queen that was there.
    pub fn remove(&mut self, row: usize) -> Result<Option<Cell>, BoardError> {
        let size = self.size();
        let slot = self
            .columns
            .get_mut(row)
            .ok_or(BoardError::RowOutOfRange { row, size })?;
        Ok(slot.take().map(|col| Cell::new(row, col)))
    }

    /// Remove every queen.
    pub fn clear(&mut self) {
        self.columns.iter_mut().for_each(|c| *c = None);
    }

    /// Placed queens in ascending row order.
    pub fn queens(&self) -> impl Iterator<Item = Cell> + '_ {
        self.columns
            .iter()
            .enumerate()
            .filter_map(|(row, col)| col.map(|col| Cell::new(row, col)))
    }

    /// Number of placed queens.
    pub fn queen_count(&self) -> usize {
        self.columns.iter().filter(|c| c.is_some()).count()
    }

    /// Every row holds a queen.
    pub fn is_complete(&self) -> bool {
        self.columns.iter().all(Option::is_some)
    }

    /// Complete, and no two queens share a column or a diagonal.
    pub fn is_valid_solution(&self) -> bool {
        if !self.is_complete() {
            return false;
        }
        let queens: Vec<Cell> = self.queens().collect();
        queens.iter().enumerate().all(|(i, a)| {
            queens[i + 1..]
                .iter()
                .all(|b| !a.shares_column(b) && !a.shares_diagonal(b))
        })
    }

    /// Raw row→column slots.
    pub fn as_slice(&self) -> &[Option<usize>] {
        &self.columns
    }

    /// 0/1 grid form (`grid[row][col] == 1` where a queen sits).
    pub fn to_grid(&self) -> Vec<Vec<u8>> {
        let n = self.size();
        self.columns
            .iter()
            .map(|col| {
                let mut row = vec![0u8; n];
                if let Some(c) = col {
                    row[*c] = 1;
                }
                row
            })
            .collect()
    }
}

impl From<Board> for Vec<i64> {
    fn from(board: Board) -> Self {
        board.to_columns()
    }
}

impl TryFrom<Vec<i64>> for Board {
    type Error = BoardError;

    fn try_from(columns: Vec<i64>) -> Result<Self, Self::Error> {
        Board::from_columns(&columns)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, col) in self.columns.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for c in 0..self.size() {
                let glyph = if *col == Some(c) { 'Q' } else { '.' };
                write!(f, "{glyph}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_board_is_empty() {
        let board = Board::new(4);
        assert_eq!(board.size(), 4);
        assert_eq!(board.queen_count(), 0);
        assert_eq!(board.to_columns(), vec![-1, -1, -1, -1]);
        assert!(!board.is_complete());
    }

    #[test]
    fn flat_encoding_round_trip() {
        let board = Board::from_columns(&[1, -1, 0, -1]).unwrap();
        assert_eq!(board.get(0), Some(1));
        assert_eq!(board.get(1), None);
        assert_eq!(board.to_columns(), vec![1, -1, 0, -1]);
    }

    #[test]
    fn flat_encoding_rejects_bad_values() {
        assert_eq!(
            Board::from_columns(&[0, 4, -1, -1]),
            Err(BoardError::InvalidColumnValue { row: 1, value: 4, size: 4 })
        );
        assert!(Board::from_columns(&[-2]).is_err());
    }

    #[test]
    fn place_and_remove() {
        let mut board = Board::new(4);
        assert_eq!(board.place(Cell::new(1, 2)), Ok(None));
        assert_eq!(board.place(Cell::new(1, 3)), Ok(Some(2)));
        assert!(board.has_queen(Cell::new(1, 3)));

        assert_eq!(board.remove(1), Ok(Some(Cell::new(1, 3))));
        assert_eq!(board.remove(1), Ok(None));
    }

    #[test]
    fn out_of_range_addressing() {
        let mut board = Board::new(3);
        assert_eq!(
            board.place(Cell::new(3, 0)),
            Err(BoardError::RowOutOfRange { row: 3, size: 3 })
        );
        assert_eq!(
            board.place(Cell::new(0, 3)),
            Err(BoardError::ColumnOutOfRange { col: 3, size: 3 })
        );
        assert!(board.remove(5).is_err());
    }

    #[test]
    fn solution_validity() {
        assert!(Board::from_columns(&[1, 3, 0, 2]).unwrap().is_valid_solution());
        assert!(Board::from_columns(&[2, 0, 3, 1]).unwrap().is_valid_solution());
        // shared column
        assert!(!Board::from_columns(&[1, 1, 0, 2]).unwrap().is_valid_solution());
        // shared diagonal
        assert!(!Board::from_columns(&[0, 1, 3, 2]).unwrap().is_valid_solution());
        // incomplete
        assert!(!Board::from_columns(&[1, 3, 0, -1]).unwrap().is_valid_solution());
    }

    #[test]
    fn grid_and_display() {
        let board = Board::from_columns(&[1, -1]).unwrap();
        assert_eq!(board.to_grid(), vec![vec![0, 1], vec![0, 0]]);
        assert_eq!(board.to_string(), ".Q\n..");
    }

    #[test]
    fn clones_do_not_alias() {
        let mut live = Board::new(4);
        live.place(Cell::new(0, 1)).unwrap();
        let snapshot = live.clone();
        live.remove(0).unwrap();
        assert_eq!(snapshot.get(0), Some(1));
    }
}
