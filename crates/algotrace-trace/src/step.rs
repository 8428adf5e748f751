//! Step records for the visualization timeline.
//!
//! Every step carries its zero-based sequence number, an action kind, a
//! human-readable message, and a full copy of the state it depicts, so a
//! renderer can draw any step without consulting its neighbours.

use algotrace_board::{Board, Cell};
use serde::{Deserialize, Serialize};

/// Common accessors over every step type.
pub trait TraceStep {
    /// Position of this step in replay order.
    fn seq(&self) -> u64;

    /// Lower-case action label (`compare`, `swap`, `place`, ...).
    fn action_name(&self) -> &'static str;

    /// Human-readable description.
    fn message(&self) -> &str;
}

/// Linear search step kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchAction {
    /// Element compared and did not match
    Compare,
    /// Element compared and matched
    Found,
}

/// One element examined by linear search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStep {
    pub seq: u64,
    pub action: SearchAction,
    /// Index examined
    pub index: usize,
    /// Value at that index
    pub value: i64,
    /// Value searched for
    pub target: i64,
    /// Outcome of this comparison
    pub found: bool,
    pub message: String,
}

/// Bubble sort step kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortAction {
    /// Pair compared, already in order
    Compare,
    /// Pair compared and swapped
    Swap,
}

/// One inner-loop iteration of bubble sort.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortStep {
    pub seq: u64,
    pub action: SortAction,
    /// Array after any swap of this iteration
    pub array: Vec<i64>,
    /// Compared index pair `(j, j + 1)`
    pub compared: (usize, usize),
    pub swapped: bool,
    /// Outer-loop pass `i`
    pub pass: usize,
    pub message: String,
}

/// N-Queens step kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueensAction {
    /// Candidate cell selected for a safety check
    Try,
    /// Safety check finished; `conflict` names the attacker, if any
    Check,
    /// Queen placed
    Place,
    /// Queen removed while backtracking
    Remove,
    /// All rows filled
    Success,
}

impl QueensAction {
    /// Whether steps of this kind change the board.
    pub fn mutates_board(&self) -> bool {
        matches!(self, QueensAction::Place | QueensAction::Remove)
    }
}

/// One N-Queens event, with the board as it stands after the event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueensStep {
    pub seq: u64,
    pub action: QueensAction,
    /// Row under consideration (`n` for `Success`)
    pub row: usize,
    /// Column under consideration
    pub col: usize,
    pub board: Board,
    /// First queen attacking `(row, col)`, reported by `Check` steps
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conflict: Option<Cell>,
    pub message: String,
}

impl QueensStep {
    /// The cell this step is about.
    pub fn cell(&self) -> Cell {
        Cell::new(self.row, self.col)
    }
}

/// A step from any engine, tagged by algorithm.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "algorithm", rename_all = "snake_case")]
pub enum Step {
    LinearSearch(SearchStep),
    BubbleSort(SortStep),
    NQueens(QueensStep),
}

impl TraceStep for SearchStep {
    fn seq(&self) -> u64 {
        self.seq
    }

    fn action_name(&self) -> &'static str {
        match self.action {
            SearchAction::Compare => "compare",
            SearchAction::Found => "found",
        }
    }

    fn message(&self) -> &str {
        &self.message
    }
}

impl TraceStep for SortStep {
    fn seq(&self) -> u64 {
        self.seq
    }

    fn action_name(&self) -> &'static str {
        match self.action {
            SortAction::Compare => "compare",
            SortAction::Swap => "swap",
        }
    }

    fn message(&self) -> &str {
        &self.message
    }
}

impl TraceStep for QueensStep {
    fn seq(&self) -> u64 {
        self.seq
    }

    fn action_name(&self) -> &'static str {
        match self.action {
            QueensAction::Try => "try",
            QueensAction::Check => "check",
            QueensAction::Place => "place",
            QueensAction::Remove => "remove",
            QueensAction::Success => "success",
        }
    }

    fn message(&self) -> &str {
        &self.message
    }
}

impl TraceStep for Step {
    fn seq(&self) -> u64 {
        match self {
            Step::LinearSearch(s) => s.seq(),
            Step::BubbleSort(s) => s.seq(),
            Step::NQueens(s) => s.seq(),
        }
    }

    fn action_name(&self) -> &'static str {
        match self {
            Step::LinearSearch(s) => s.action_name(),
            Step::BubbleSort(s) => s.action_name(),
            Step::NQueens(s) => s.action_name(),
        }
    }

    fn message(&self) -> &str {
        match self {
            Step::LinearSearch(s) => s.message(),
            Step::BubbleSort(s) => s.message(),
            Step::NQueens(s) => s.message(),
        }
    }
}

impl From<SearchStep> for Step {
    fn from(step: SearchStep) -> Self {
        Step::LinearSearch(step)
    }
}

impl From<SortStep> for Step {
    fn from(step: SortStep) -> Self {
        Step::BubbleSort(step)
    }
}

impl From<QueensStep> for Step {
    fn from(step: QueensStep) -> Self {
        Step::NQueens(step)
    }
}
