//! Linear search with one recorded step per element examined.
//!
//! The scan stops at the first match, so a hit at index `i` yields exactly
//! `i + 1` steps and a miss yields one step per element.

use algotrace_trace::{SearchAction, SearchStep, StepRecorder, Trace};
use serde::{Deserialize, Serialize};

use crate::config::EngineConfig;
use crate::error::{Error, Result};

/// Outcome of one linear search run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRun {
    /// First index holding the target, `None` if absent
    pub result_index: Option<usize>,
    pub trace: Trace<SearchStep>,
}

/// The comparison shared by the bulk engine and the quiz stepper.
#[inline]
pub(crate) fn is_match(value: i64, target: i64) -> bool {
    value == target
}

pub(crate) fn compare_message(index: usize, value: i64, target: i64, found: bool) -> String {
    if found {
        format!("Target {target} found at index {index}")
    } else {
        format!("Comparing element {value} at index {index} with target {target}: no match")
    }
}

/// Run linear search over `sequence` for `target`.
///
/// An empty sequence gives an empty trace and no result.
pub fn linear_search(sequence: &[i64], target: i64) -> SearchRun {
    let mut recorder = StepRecorder::new();

    for (index, &value) in sequence.iter().enumerate() {
        let found = is_match(value, target);
        recorder.record(|seq| SearchStep {
            seq,
            action: if found { SearchAction::Found } else { SearchAction::Compare },
            index,
            value,
            target,
            found,
            message: compare_message(index, value, target, found),
        });

        if found {
            return SearchRun {
                result_index: Some(index),
                trace: recorder.finish(),
            };
        }
    }

    SearchRun {
        result_index: None,
        trace: recorder.finish(),
    }
}

/// Configured linear search engine.
#[derive(Debug, Clone, Default)]
pub struct LinearSearchEngine {
    config: EngineConfig,
}

impl LinearSearchEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Validate input against the configuration, then search.
    pub fn run(&self, sequence: &[i64], target: i64) -> Result<SearchRun> {
        if sequence.is_empty() && self.config.strict_inputs {
            tracing::warn!("Rejecting empty linear search input");
            return Err(Error::EmptyInput {
                algorithm: "linear search",
            });
        }

        tracing::debug!(len = sequence.len(), needle = target, "Running linear search");
        let run = linear_search(sequence, target);
        tracing::info!(
            steps = run.trace.len(),
            result = ?run.result_index,
            "Linear search complete"
        );
        Ok(run)
    }
}
