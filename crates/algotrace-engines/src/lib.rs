//! Algotrace Engines
//!
//! Step-recording implementations of linear search, bubble sort and
//! N-Queens backtracking.
//!
//! Every engine is deterministic: the same input always yields the same
//! result and a step-for-step identical trace. Input validation happens
//! before the first step, so errors never come with a partial trace.
//!
//! # Example
//!
//! ```
//! use algotrace_engines::{NQueensEngine, SolveMode};
//! use algotrace_trace::PlaybackCursor;
//!
//! let run = NQueensEngine::default().run(4, SolveMode::First).unwrap();
//! assert_eq!(run.first_solution().unwrap().to_columns(), vec![1, 3, 0, 2]);
//!
//! let mut cursor = PlaybackCursor::new(run.trace);
//! cursor.jump_to(usize::MAX);
//! assert!(cursor.is_at_end());
//! ```

pub mod bubble_sort;
pub mod config;
pub mod error;
pub mod linear_search;
pub mod n_queens;
pub mod runner;
pub mod stepper;

pub use bubble_sort::{bubble_sort, expected_steps, BubbleSortEngine, SortRun};
pub use config::{EngineConfig, TraceDetail, DEFAULT_MAX_QUEENS};
pub use error::{Error, Result};
pub use linear_search::{linear_search, LinearSearchEngine, SearchRun};
pub use n_queens::{NQueensEngine, QueensRun, SolveMode};
pub use runner::{RunOutput, RunRequest, RunResult, Runner};
pub use stepper::{SearchEvent, SearchStepper, StepperState};
