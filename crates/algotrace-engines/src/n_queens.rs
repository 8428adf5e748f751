//! N-Queens by row-major backtracking.
//!
//! # Search Order
//!
//! Rows are filled top to bottom and columns are tried in ascending order.
//! That order fixes both the step sequence and which solution `First` mode
//! reports, so it is part of the trace contract.
//!
//! # Recording
//!
//! One working board is mutated in place. Each mutation is applied first and
//! recorded second, with a cloned snapshot, so replay shows effect then
//! record and no step aliases the live board:
//!
//! - `Place` after a queen is put down
//! - `Remove` after a queen is lifted while backtracking
//! - `Success` when row `n` is reached, holding the solved board
//!
//! With [`TraceDetail::Detailed`] every candidate also gets a `Try` step and a
//! `Check` step naming the first attacking queen, if any.
//!
//! In `First` mode nothing is recorded after the first `Success`.

use algotrace_board::{find_conflict, Board, Cell};
use algotrace_trace::{QueensAction, QueensStep, StepRecorder, Trace};
use serde::{Deserialize, Serialize};

use crate::config::{EngineConfig, TraceDetail};
use crate::error::{Error, Result};

/// Whether to stop at the first solution or enumerate them all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SolveMode {
    #[default]
    First,
    All,
}

/// Outcome of one N-Queens run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueensRun {
    /// Board size
    pub n: usize,
    /// Solutions in discovery order
    pub solutions: Vec<Board>,
    pub trace: Trace<QueensStep>,
}

impl QueensRun {
    /// First solution discovered, if any.
    pub fn first_solution(&self) -> Option<&Board> {
        self.solutions.first()
    }
}

/// Configured N-Queens engine.
#[derive(Debug, Clone, Default)]
pub struct NQueensEngine {
    config: EngineConfig,
}

impl NQueensEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Solve an `n`×`n` board.
    ///
    /// Fails with no steps recorded when `n` is zero or above
    /// [`EngineConfig::max_queens`].
    pub fn run(&self, n: usize, mode: SolveMode) -> Result<QueensRun> {
        if n == 0 {
            tracing::warn!("Rejecting N-Queens board of size 0");
            return Err(Error::InvalidBoardSize { n });
        }
        if n > self.config.max_queens {
            tracing::warn!(n, max = self.config.max_queens, "Rejecting oversized N-Queens board");
            return Err(Error::BoardTooLarge {
                n,
                max: self.config.max_queens,
            });
        }

        tracing::debug!(n, ?mode, detail = ?self.config.queens_detail, "Running N-Queens");

        let mut solver = Solver {
            n,
            mode,
            detail: self.config.queens_detail,
            board: Board::new(n),
            recorder: StepRecorder::new(),
            solutions: Vec::new(),
        };
        solver.backtrack(0)?;

        let run = QueensRun {
            n,
            solutions: solver.solutions,
            trace: solver.recorder.finish(),
        };
        tracing::info!(
            n,
            steps = run.trace.len(),
            solutions = run.solutions.len(),
            "N-Queens complete"
        );
        Ok(run)
    }
}

/// Working state for one run.
struct Solver {
    n: usize,
    mode: SolveMode,
    detail: TraceDetail,
    board: Board,
    recorder: StepRecorder<QueensStep>,
    solutions: Vec<Board>,
}

impl Solver {
    /// Fill `row` and below. Returns `true` once the search must stop.
    fn backtrack(&mut self, row: usize) -> Result<bool> {
        if row == self.n {
            self.solutions.push(self.board.clone());
            let count = self.solutions.len();
            let last_col = self.board.get(row - 1).unwrap_or_default();
            let message = format!("All {} queens placed: solution #{count}", self.n);
            self.record(QueensAction::Success, Cell::new(row, last_col), None, message);
            return Ok(self.mode == SolveMode::First);
        }

        for col in 0..self.n {
            let cell = Cell::new(row, col);

            if self.detail == TraceDetail::Detailed {
                let message = format!("Trying column {col} in row {row}");
                self.record(QueensAction::Try, cell, None, message);
            }

            let attacker = find_conflict(&self.board, cell).map(|(queen, _)| queen);

            if self.detail == TraceDetail::Detailed {
                let message = match attacker {
                    Some(queen) => format!("{cell} is attacked by the queen at {queen}"),
                    None => format!("{cell} is safe"),
                };
                self.record(QueensAction::Check, cell, attacker, message);
            }

            if attacker.is_some() {
                continue;
            }

            self.board.place(cell)?;
            let message = format!("Placing queen at row {row}, col {col}");
            self.record(QueensAction::Place, cell, None, message);

            if self.backtrack(row + 1)? {
                return Ok(true);
            }

            self.board.remove(row)?;
            let message = format!("Backtracking: removing queen from row {row}, col {col}");
            self.record(QueensAction::Remove, cell, None, message);
        }

        Ok(false)
    }

    fn record(&mut self, action: QueensAction, cell: Cell, conflict: Option<Cell>, message: String) {
        let board = self.board.clone();
        self.recorder.record(|seq| QueensStep {
            seq,
            action,
            row: cell.row,
            col: cell.col,
            board,
            conflict,
            message,
        });
    }
}
