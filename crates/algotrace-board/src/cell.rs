//! Board cell coordinates.
//!
//! Rows grow downward from 0, columns grow rightward from 0. Two diagonal
//! families pass through every cell:
//!
//! - the main family (top-left to bottom-right), where `row - col` is constant
//! - the anti family (top-right to bottom-left), where `row + col` is constant

/// A `(row, col)` position on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    /// Row index
    pub row: usize,
    /// Column index
    pub col: usize,
}

impl Cell {
    /// Top-left corner.
    pub const ORIGIN: Self = Self { row: 0, col: 0 };

    /// Create a new cell.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Key of the main diagonal through this cell: `row - col`.
    #[inline]
    pub const fn diagonal(&self) -> i64 {
        self.row as i64 - self.col as i64
    }

    /// Key of the anti diagonal through this cell: `row + col`.
    #[inline]
    pub const fn anti_diagonal(&self) -> usize {
        self.row + self.col
    }

    /// Whether both cells lie on one column.
    #[inline]
    pub const fn shares_column(&self, other: &Self) -> bool {
        self.col == other.col
    }

    /// Whether both cells lie on one diagonal of either family.
    ///
    /// Equivalent to `|r1 - r2| == |c1 - c2|`.
    #[inline]
    pub const fn shares_diagonal(&self, other: &Self) -> bool {
        self.row.abs_diff(other.row) == self.col.abs_diff(other.col)
    }

    /// Whether the cell lies inside an `n`×`n` board.
    #[inline]
    pub const fn in_bounds(&self, n: usize) -> bool {
        self.row < n && self.col < n
    }
}

impl From<(usize, usize)> for Cell {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagonal_keys() {
        let cell = Cell::new(2, 1);
        assert_eq!(cell.diagonal(), 1);
        assert_eq!(cell.anti_diagonal(), 3);

        assert_eq!(Cell::new(0, 3).diagonal(), -3);
    }

    #[test]
    fn shared_lines() {
        let a = Cell::new(0, 1);
        assert!(a.shares_column(&Cell::new(3, 1)));
        assert!(a.shares_diagonal(&Cell::new(2, 3)));
        assert!(a.shares_diagonal(&Cell::new(1, 0)));
        assert!(!a.shares_diagonal(&Cell::new(2, 2)));
    }

    #[test]
    fn bounds() {
        assert!(Cell::new(3, 3).in_bounds(4));
        assert!(!Cell::new(4, 0).in_bounds(4));
        assert!(!Cell::new(0, 4).in_bounds(4));
    }

    #[test]
    fn display_and_tuple_conversion() {
        let cell: Cell = (1, 2).into();
        assert_eq!(cell, Cell::new(1, 2));
        assert_eq!(cell.to_string(), "(1, 2)");
    }
}
