//! Playback cursor over a recorded trace.
//!
//! The cursor always points at a step (position 0 on a fresh cursor) unless
//! the trace is empty. Navigation clamps at both ends instead of wrapping;
//! a move that would leave the trace is a no-op and returns `None`.

use serde::{Deserialize, Serialize};

use crate::recorder::Trace;

/// Navigation state over one trace.
#[derive(Debug, Clone)]
pub struct PlaybackCursor<S> {
    trace: Trace<S>,
    position: usize,
}

impl<S> PlaybackCursor<S> {
    /// Create a cursor positioned on the first step.
    pub fn new(trace: Trace<S>) -> Self {
        Self { trace, position: 0 }
    }

    /// The trace being navigated.
    pub fn trace(&self) -> &Trace<S> {
        &self.trace
    }

    /// Current position.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Total number of steps.
    pub fn len(&self) -> usize {
        self.trace.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trace.is_empty()
    }

    /// Step at the current position (`None` only for an empty trace).
    pub fn current(&self) -> Option<&S> {
        self.trace.get(self.position)
    }

    /// Advance one step.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<&S> {
        if self.position + 1 >= self.trace.len() {
            return None;
        }
        self.position += 1;
        self.current()
    }

    /// Go back one step.
    pub fn previous(&mut self) -> Option<&S> {
        if self.position == 0 || self.trace.is_empty() {
            return None;
        }
        self.position -= 1;
        self.current()
    }

    /// Jump to `index`, clamped to the last step.
    pub fn jump_to(&mut self, index: usize) -> Option<&S> {
        self.position = index.min(self.trace.len().saturating_sub(1));
        self.current()
    }

    /// Return to the first step.
    pub fn reset(&mut self) -> Option<&S> {
        self.position = 0;
        self.current()
    }

    pub fn is_at_start(&self) -> bool {
        self.position == 0
    }

    pub fn is_at_end(&self) -> bool {
        self.position + 1 >= self.trace.len()
    }

    /// Steps from the start up to and including the current one.
    pub fn history(&self) -> &[S] {
        let end = (self.position + 1).min(self.trace.len());
        &self.trace.as_slice()[..end]
    }

    /// Fraction of the trace shown so far (0.0 - 1.0).
    pub fn progress(&self) -> f64 {
        if self.trace.is_empty() {
            0.0
        } else {
            (self.position + 1) as f64 / self.trace.len() as f64
        }
    }

    /// Snapshot of the cursor for a front end.
    pub fn status(&self) -> CursorStatus {
        self.into()
    }
}

/// Cursor status for sending to a front end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CursorStatus {
    pub position: usize,
    pub total_steps: usize,
    pub progress: f64,
    pub at_start: bool,
    pub at_end: bool,
}

impl<S> From<&PlaybackCursor<S>> for CursorStatus {
    fn from(cursor: &PlaybackCursor<S>) -> Self {
        Self {
            position: cursor.position,
            total_steps: cursor.len(),
            progress: cursor.progress(),
            at_start: cursor.is_at_start(),
            at_end: cursor.is_at_end(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::step::{SearchAction, SearchStep};
    use proptest::prelude::*;

    fn make_trace(count: usize) -> Trace<SearchStep> {
        (0..count)
            .map(|i| SearchStep {
                seq: i as u64,
                action: SearchAction::Compare,
                index: i,
                value: i as i64,
                target: -1,
                found: false,
                message: format!("Comparing index {i}"),
            })
            .collect::<Vec<_>>()
            .into()
    }

    #[test]
    fn cursor_starts_at_first_step() {
        let cursor = PlaybackCursor::new(make_trace(10));
        assert_eq!(cursor.position(), 0);
        assert_eq!(cursor.current().map(|s| s.seq), Some(0));
        assert!(cursor.is_at_start());
        assert!(!cursor.is_at_end());
    }

    #[test]
    fn next_advances_and_stops_at_end() {
        let mut cursor = PlaybackCursor::new(make_trace(3));

        assert_eq!(cursor.next().map(|s| s.seq), Some(1));
        assert_eq!(cursor.next().map(|s| s.seq), Some(2));
        assert!(cursor.is_at_end());

        assert!(cursor.next().is_none());
        assert_eq!(cursor.position(), 2);
    }

    #[test]
    fn previous_stops_at_start() {
        let mut cursor = PlaybackCursor::new(make_trace(3));
        cursor.jump_to(2);

        assert_eq!(cursor.previous().map(|s| s.seq), Some(1));
        assert_eq!(cursor.previous().map(|s| s.seq), Some(0));
        assert!(cursor.previous().is_none());
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn jump_clamps_to_bounds() {
        let mut cursor = PlaybackCursor::new(make_trace(10));

        assert_eq!(cursor.jump_to(5).map(|s| s.seq), Some(5));
        assert_eq!(cursor.jump_to(100).map(|s| s.seq), Some(9));
        assert_eq!(cursor.jump_to(0).map(|s| s.seq), Some(0));
    }

    #[test]
    fn reset_returns_to_first_step() {
        let mut cursor = PlaybackCursor::new(make_trace(4));
        cursor.jump_to(3);
        assert_eq!(cursor.reset().map(|s| s.seq), Some(0));
    }

    #[test]
    fn empty_trace_is_inert() {
        let mut cursor = PlaybackCursor::new(make_trace(0));
        assert!(cursor.current().is_none());
        assert!(cursor.next().is_none());
        assert!(cursor.previous().is_none());
        assert!(cursor.jump_to(3).is_none());
        assert!(cursor.reset().is_none());
        assert_eq!(cursor.progress(), 0.0);
        assert!(cursor.history().is_empty());
    }

    #[test]
    fn progress_and_history() {
        let mut cursor = PlaybackCursor::new(make_trace(4));
        assert_eq!(cursor.progress(), 0.25);
        assert_eq!(cursor.history().len(), 1);

        cursor.jump_to(3);
        assert_eq!(cursor.progress(), 1.0);
        assert_eq!(cursor.history().len(), 4);
    }

    #[test]
    fn status_conversion() {
        let mut cursor = PlaybackCursor::new(make_trace(10));
        cursor.jump_to(3);

        let status = cursor.status();
        assert_eq!(status.position, 3);
        assert_eq!(status.total_steps, 10);
        assert!(!status.at_start);
        assert!(!status.at_end);
    }

    proptest! {
        #[test]
        fn random_navigation_stays_in_bounds(
            len in 0usize..20,
            moves in proptest::collection::vec(0u8..4, 0..50),
        ) {
            let mut cursor = PlaybackCursor::new(make_trace(len));
            for m in moves {
                let step = match m {
                    0 => cursor.next().map(|s| s.seq),
                    1 => cursor.previous().map(|s| s.seq),
                    2 => cursor.jump_to(len / 2).map(|s| s.seq),
                    _ => cursor.reset().map(|s| s.seq),
                };
                if let Some(seq) = step {
                    prop_assert_eq!(seq as usize, cursor.position());
                }
                prop_assert!(len == 0 || cursor.position() < len);
            }
        }
    }
}
