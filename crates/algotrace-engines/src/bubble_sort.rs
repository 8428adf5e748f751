//! Bubble sort with one recorded step per inner-loop comparison.
//!
//! There is no early exit on a swap-free pass: the step count is always
//! `n * (n - 1) / 2`, which lets a front end size its timeline from `n` alone.

use algotrace_trace::{SortAction, SortStep, StepRecorder, Trace};
use serde::{Deserialize, Serialize};

use crate::config::EngineConfig;
use crate::error::{Error, Result};

/// Outcome of one bubble sort run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortRun {
    /// Input sorted ascending
    pub result: Vec<i64>,
    pub trace: Trace<SortStep>,
}

/// Number of steps a run over `n` elements records.
pub const fn expected_steps(n: usize) -> usize {
    n * n.saturating_sub(1) / 2
}

/// Sort a private copy of `sequence`, recording every comparison.
pub fn bubble_sort(sequence: &[i64]) -> SortRun {
    let mut a = sequence.to_vec();
    let n = a.len();
    let mut recorder = StepRecorder::new();

    for i in 0..n {
        for j in 0..n - i - 1 {
            let (left, right) = (a[j], a[j + 1]);
            let swapped = left > right;
            if swapped {
                a.swap(j, j + 1);
            }

            let message = if swapped {
                format!("Swapping {left} and {right}: index {j} held the larger value")
            } else {
                format!("Comparing {left} and {right} at indices {j} and {}: already in order", j + 1)
            };
            recorder.record(|seq| SortStep {
                seq,
                action: if swapped { SortAction::Swap } else { SortAction::Compare },
                array: a.clone(),
                compared: (j, j + 1),
                swapped,
                pass: i,
                message,
            });
        }
    }

    SortRun {
        result: a,
        trace: recorder.finish(),
    }
}

/// Configured bubble sort engine.
#[derive(Debug, Clone, Default)]
pub struct BubbleSortEngine {
    config: EngineConfig,
}

impl BubbleSortEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Validate input against the configuration, then sort.
    pub fn run(&self, sequence: &[i64]) -> Result<SortRun> {
        if sequence.is_empty() && self.config.strict_inputs {
            tracing::warn!("Rejecting empty bubble sort input");
            return Err(Error::EmptyInput {
                algorithm: "bubble sort",
            });
        }

        tracing::debug!(len = sequence.len(), "Running bubble sort");
        let run = bubble_sort(sequence);
        tracing::info!(steps = run.trace.len(), "Bubble sort complete");
        Ok(run)
    }
}
