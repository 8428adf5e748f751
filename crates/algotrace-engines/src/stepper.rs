//! Event-at-a-time linear search for interactive walkthroughs.
//!
//! Where [`linear_search`](crate::linear_search::linear_search) records the
//! whole run up front, [`SearchStepper`] yields one [`SearchEvent`] per call
//! to [`advance`](SearchStepper::advance):
//!
//! ```text
//! Pending{i} --Compare--> Compared{i, matched}
//! Compared{i, false} --Move--> Pending{i + 1}
//! Compared{i, true} --Found--> Resolved(Some(i))
//! Pending{len} --NotFound--> Resolved(None)
//! ```
//!
//! `Compare` events match the bulk engine's steps one for one.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::linear_search::is_match;

/// Event emitted by one stepper transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SearchEvent {
    /// Element at `index` compared with the target
    Compare {
        index: usize,
        value: i64,
        target: i64,
        matched: bool,
        comparisons: usize,
    },
    /// No match, moving on
    Move { next_index: usize },
    Found { index: usize, comparisons: usize },
    NotFound { comparisons: usize },
}

/// Stepper state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StepperState {
    /// Next element to compare
    Pending { index: usize },
    /// Comparison made, outcome not yet announced
    Compared { index: usize, matched: bool },
    /// Search over
    Resolved(Option<usize>),
}

type Listener = Box<dyn FnMut(&SearchEvent) + Send>;

/// Linear search driven one event at a time.
pub struct SearchStepper {
    sequence: Vec<i64>,
    target: i64,
    state: StepperState,
    comparisons: usize,
    listeners: Vec<Listener>,
}

impl SearchStepper {
    pub fn new(sequence: Vec<i64>, target: i64) -> Self {
        Self {
            sequence,
            target,
            state: StepperState::Pending { index: 0 },
            comparisons: 0,
            listeners: Vec::new(),
        }
    }

    /// Register an observer called synchronously for every event.
    pub fn on_event(&mut self, listener: impl FnMut(&SearchEvent) + Send + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Perform one transition. Returns `None` once resolved.
    pub fn advance(&mut self) -> Option<SearchEvent> {
        let (event, next) = match self.state {
            StepperState::Resolved(_) => return None,
            StepperState::Pending { index } => match self.sequence.get(index) {
                Some(&value) => {
                    let matched = is_match(value, self.target);
                    self.comparisons += 1;
                    (
                        SearchEvent::Compare {
                            index,
                            value,
                            target: self.target,
                            matched,
                            comparisons: self.comparisons,
                        },
                        StepperState::Compared { index, matched },
                    )
                }
                None => (
                    SearchEvent::NotFound {
                        comparisons: self.comparisons,
                    },
                    StepperState::Resolved(None),
                ),
            },
            StepperState::Compared {
                index,
                matched: true,
            } => (
                SearchEvent::Found {
                    index,
                    comparisons: self.comparisons,
                },
                StepperState::Resolved(Some(index)),
            ),
            StepperState::Compared {
                index,
                matched: false,
            } => (
                SearchEvent::Move {
                    next_index: index + 1,
                },
                StepperState::Pending { index: index + 1 },
            ),
        };

        tracing::trace!(?event, "Stepper transition");
        self.state = next;
        for listener in &mut self.listeners {
            listener(&event);
        }
        Some(event)
    }

    /// Advance until resolved, returning every event emitted.
    pub fn run_to_end(&mut self) -> Vec<SearchEvent> {
        std::iter::from_fn(|| self.advance()).collect()
    }

    pub fn state(&self) -> StepperState {
        self.state
    }

    pub fn comparisons(&self) -> usize {
        self.comparisons
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self.state, StepperState::Resolved(_))
    }

    /// Final answer, `None` while still searching.
    pub fn result(&self) -> Option<Option<usize>> {
        match self.state {
            StepperState::Resolved(found) => Some(found),
            _ => None,
        }
    }
}

impl fmt::Debug for SearchStepper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchStepper")
            .field("len", &self.sequence.len())
            .field("target", &self.target)
            .field("state", &self.state)
            .field("comparisons", &self.comparisons)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::linear_search::linear_search;
    use proptest::prelude::*;
    use std::sync::{Arc, Mutex};

    #[test]
    fn walks_to_a_hit() {
        let mut stepper = SearchStepper::new(vec![4, 9, 2], 9);
        assert_eq!(stepper.state(), StepperState::Pending { index: 0 });

        let events = stepper.run_to_end();
        assert_eq!(
            events,
            vec![
                SearchEvent::Compare {
                    index: 0,
                    value: 4,
                    target: 9,
                    matched: false,
                    comparisons: 1
                },
                SearchEvent::Move { next_index: 1 },
                SearchEvent::Compare {
                    index: 1,
                    value: 9,
                    target: 9,
                    matched: true,
                    comparisons: 2
                },
                SearchEvent::Found {
                    index: 1,
                    comparisons: 2
                },
            ]
        );
        assert_eq!(stepper.result(), Some(Some(1)));
        assert!(stepper.is_resolved());
    }

    #[test]
    fn miss_ends_with_not_found() {
        let mut stepper = SearchStepper::new(vec![1, 2], 5);
        let events = stepper.run_to_end();
        assert_eq!(events.len(), 5);
        assert_eq!(events.last(), Some(&SearchEvent::NotFound { comparisons: 2 }));
        assert_eq!(stepper.result(), Some(None));
    }

    #[test]
    fn empty_sequence_resolves_immediately() {
        let mut stepper = SearchStepper::new(Vec::new(), 1);
        assert_eq!(
            stepper.advance(),
            Some(SearchEvent::NotFound { comparisons: 0 })
        );
        assert_eq!(stepper.advance(), None);
    }

    #[test]
    fn advance_after_resolution_is_a_no_op() {
        let mut stepper = SearchStepper::new(vec![3], 3);
        stepper.run_to_end();
        let before = stepper.state();
        assert_eq!(stepper.advance(), None);
        assert_eq!(stepper.state(), before);
        assert_eq!(stepper.comparisons(), 1);
    }

    #[test]
    fn intermediate_result_is_none() {
        let mut stepper = SearchStepper::new(vec![1, 2], 2);
        stepper.advance();
        assert_eq!(stepper.result(), None);
        assert_eq!(
            stepper.state(),
            StepperState::Compared {
                index: 0,
                matched: false
            }
        );
    }

    #[test]
    fn listeners_see_every_event() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);

        let mut stepper = SearchStepper::new(vec![7, 8], 8);
        stepper.on_event(move |event| sink.lock().unwrap().push(event.clone()));
        let events = stepper.run_to_end();

        assert_eq!(*seen.lock().unwrap(), events);
    }

    proptest! {
        #[test]
        fn compare_events_match_bulk_steps(
            values in prop::collection::vec(-5i64..5, 0..20),
            target in -5i64..5,
        ) {
            let bulk = linear_search(&values, target);
            let mut stepper = SearchStepper::new(values, target);
            let compares: Vec<(usize, i64, bool)> = stepper
                .run_to_end()
                .into_iter()
                .filter_map(|event| match event {
                    SearchEvent::Compare { index, value, matched, .. } => Some((index, value, matched)),
                    _ => None,
                })
                .collect();
            let steps: Vec<(usize, i64, bool)> =
                bulk.trace.iter().map(|s| (s.index, s.value, s.found)).collect();

            prop_assert_eq!(compares, steps);
            prop_assert_eq!(stepper.result(), Some(bulk.result_index));
        }
    }
}
