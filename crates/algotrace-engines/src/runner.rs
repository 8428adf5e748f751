//! Uniform request/response surface over all three engines.

use algotrace_board::Board;
use algotrace_trace::{Step, Trace, TraceDigest};
use serde::{Deserialize, Serialize};

use crate::bubble_sort::BubbleSortEngine;
use crate::config::EngineConfig;
use crate::error::Result;
use crate::linear_search::LinearSearchEngine;
use crate::n_queens::{NQueensEngine, SolveMode};

/// One engine invocation.
///
/// ```
/// use algotrace_engines::RunRequest;
///
/// let request: RunRequest =
///     serde_json::from_str(r#"{"algorithm":"linear_search","array":[3,8],"target":8}"#).unwrap();
/// assert_eq!(request.algorithm(), "linear_search");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "algorithm", rename_all = "snake_case")]
pub enum RunRequest {
    LinearSearch {
        array: Vec<i64>,
        target: i64,
    },
    BubbleSort {
        array: Vec<i64>,
    },
    NQueens {
        n: usize,
        #[serde(default)]
        mode: SolveMode,
    },
}

impl RunRequest {
    pub fn algorithm(&self) -> &'static str {
        match self {
            RunRequest::LinearSearch { .. } => "linear_search",
            RunRequest::BubbleSort { .. } => "bubble_sort",
            RunRequest::NQueens { .. } => "n_queens",
        }
    }
}

/// Algorithm-specific result of a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RunResult {
    /// Linear search: index of the first match
    Index(Option<usize>),
    /// Bubble sort: the sorted sequence
    Sorted(Vec<i64>),
    /// N-Queens: solutions in discovery order
    Solutions(Vec<Board>),
}

/// Result plus the full step trace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunOutput {
    pub result: RunResult,
    pub steps: Trace<Step>,
}

impl RunOutput {
    /// Digest of the serialized step trace.
    pub fn digest(&self) -> Result<TraceDigest> {
        Ok(self.steps.digest()?)
    }
}

/// Dispatches requests to engines sharing one configuration.
#[derive(Debug, Clone, Default)]
pub struct Runner {
    config: EngineConfig,
}

impl Runner {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn run(&self, request: &RunRequest) -> Result<RunOutput> {
        tracing::debug!(algorithm = request.algorithm(), "Dispatching run");

        let output = match request {
            RunRequest::LinearSearch { array, target } => {
                let run = LinearSearchEngine::new(self.config.clone()).run(array, *target)?;
                RunOutput {
                    result: RunResult::Index(run.result_index),
                    steps: run.trace.map(|s| Step::from(s.clone())),
                }
            }
            RunRequest::BubbleSort { array } => {
                let run = BubbleSortEngine::new(self.config.clone()).run(array)?;
                RunOutput {
                    result: RunResult::Sorted(run.result),
                    steps: run.trace.map(|s| Step::from(s.clone())),
                }
            }
            RunRequest::NQueens { n, mode } => {
                let run = NQueensEngine::new(self.config.clone()).run(*n, *mode)?;
                RunOutput {
                    steps: run.trace.map(|s| Step::from(s.clone())),
                    result: RunResult::Solutions(run.solutions),
                }
            }
        };
        Ok(output)
    }
}
