//! Algotrace Traces
//!
//! Ordered, replayable step records for algorithm visualization.
//!
//! # Architecture
//!
//! - **Steps**: one self-contained record per micro-step (comparison, swap,
//!   placement, backtrack), each owning a deep copy of the state it shows
//! - **Recorder**: append-only log that assigns sequence numbers at emission
//! - **Trace**: the frozen, shareable result of one engine run
//! - **Cursor**: forward, backward and random-access navigation over a trace
//!
//! # Usage
//!
//! ```
//! use algotrace_trace::{PlaybackCursor, SearchAction, SearchStep, StepRecorder};
//!
//! let mut recorder = StepRecorder::new();
//! for (index, value) in [3, 8].into_iter().enumerate() {
//!     recorder.record(|seq| SearchStep {
//!         seq,
//!         action: if value == 8 { SearchAction::Found } else { SearchAction::Compare },
//!         index,
//!         value,
//!         target: 8,
//!         found: value == 8,
//!         message: format!("Comparing index {index}"),
//!     });
//! }
//!
//! let mut cursor = PlaybackCursor::new(recorder.finish());
//! assert_eq!(cursor.current().map(|s| s.index), Some(0));
//! assert!(cursor.next().is_some_and(|s| s.found));
//! assert!(cursor.next().is_none());
//! ```

mod cursor;
mod recorder;
mod replay;
mod step;

pub use cursor::{CursorStatus, PlaybackCursor};
pub use recorder::{StepRecorder, Trace, TraceDigest};
pub use replay::{replay_board, replay_matches_last};
pub use step::{
    QueensAction, QueensStep, SearchAction, SearchStep, SortAction, SortStep, Step, TraceStep,
};

#[cfg(test)]
mod tests {
    use super::*;
    use algotrace_board::{Board, Cell};

    fn queens_trace() -> Trace<QueensStep> {
        let mut recorder = StepRecorder::new();
        let mut board = Board::new(2);
        for (action, cell) in [
            (QueensAction::Place, Cell::new(0, 0)),
            (QueensAction::Remove, Cell::new(0, 0)),
            (QueensAction::Place, Cell::new(0, 1)),
        ] {
            match action {
                QueensAction::Place => {
                    board.place(cell).unwrap();
                }
                _ => {
                    board.remove(cell.row).unwrap();
                }
            }
            recorder.record(|seq| QueensStep {
                seq,
                action,
                row: cell.row,
                col: cell.col,
                board: board.clone(),
                conflict: None,
                message: String::new(),
            });
        }
        recorder.finish()
    }

    #[test]
    fn cursors_share_one_trace_independently() {
        let trace = queens_trace();
        let mut a = PlaybackCursor::new(trace.clone());
        let mut b = PlaybackCursor::new(trace);

        a.jump_to(2);
        b.next();

        assert_eq!(a.position(), 2);
        assert_eq!(b.position(), 1);
        assert_eq!(a.current().map(|s| s.action), Some(QueensAction::Place));
        assert_eq!(b.current().map(|s| s.action), Some(QueensAction::Remove));
    }

    #[test]
    fn recorded_trace_replays_to_last_snapshot() {
        let trace = queens_trace();
        assert!(replay_matches_last(2, trace.as_slice()).unwrap());
    }
}
