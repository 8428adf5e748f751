//! Append-only step recording.
//!
//! The recorder owns sequence numbering: the closure passed to
//! [`StepRecorder::record`] receives the next number and builds the step
//! around it, so numbers are dense, zero-based, and fixed at emission.

use std::sync::Arc;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::step::TraceStep;

/// Append-only log of steps for one engine run.
#[derive(Debug, Clone)]
pub struct StepRecorder<S> {
    steps: Vec<S>,
}

impl<S> Default for StepRecorder<S> {
    fn default() -> Self {
        Self { steps: Vec::new() }
    }
}

impl<S: TraceStep> StepRecorder<S> {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sequence number the next step will receive.
    pub fn next_seq(&self) -> u64 {
        self.steps.len() as u64
    }

    /// Append a step built around the next sequence number.
    pub fn record(&mut self, build: impl FnOnce(u64) -> S) -> &S {
        let seq = self.next_seq();
        let step = build(seq);
        debug_assert_eq!(step.seq(), seq, "step built with a foreign sequence number");
        self.steps.push(step);
        &self.steps[self.steps.len() - 1]
    }

    /// Number of steps recorded so far.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Most recent step.
    pub fn last(&self) -> Option<&S> {
        self.steps.last()
    }

    /// Freeze the log into an immutable trace.
    pub fn finish(self) -> Trace<S> {
        Trace {
            steps: self.steps.into(),
        }
    }
}

/// Immutable, cheaply clonable step sequence.
///
/// Clones share storage; any number of cursors may read one trace.
#[derive(Debug, PartialEq, Eq)]
pub struct Trace<S> {
    steps: Arc<[S]>,
}

impl<S> Clone for Trace<S> {
    fn clone(&self) -> Self {
        Self {
            steps: Arc::clone(&self.steps),
        }
    }
}

impl<S> Default for Trace<S> {
    fn default() -> Self {
        Self {
            steps: Arc::from(Vec::new()),
        }
    }
}

impl<S> Trace<S> {
    /// Step at `index`.
    pub fn get(&self, index: usize) -> Option<&S> {
        self.steps.get(index)
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn first(&self) -> Option<&S> {
        self.steps.first()
    }

    pub fn last(&self) -> Option<&S> {
        self.steps.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, S> {
        self.steps.iter()
    }

    pub fn as_slice(&self) -> &[S] {
        &self.steps
    }

    /// Convert every step with `f`, e.g. into the tagged [`crate::Step`] union.
    pub fn map<T>(&self, f: impl FnMut(&S) -> T) -> Trace<T> {
        Trace {
            steps: self.steps.iter().map(f).collect(),
        }
    }
}

impl<S: Serialize> Trace<S> {
    /// BLAKE3 digest of the canonical JSON encoding of all steps.
    ///
    /// Two runs with identical inputs produce identical digests.
    pub fn digest(&self) -> Result<TraceDigest, serde_json::Error> {
        let bytes = serde_json::to_vec(self)?;
        Ok(TraceDigest(*blake3::hash(&bytes).as_bytes()))
    }
}

impl<S> From<Vec<S>> for Trace<S> {
    fn from(steps: Vec<S>) -> Self {
        Self {
            steps: steps.into(),
        }
    }
}

impl<'a, S> IntoIterator for &'a Trace<S> {
    type Item = &'a S;
    type IntoIter = std::slice::Iter<'a, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

impl<S: Serialize> Serialize for Trace<S> {
    fn serialize<Z: Serializer>(&self, serializer: Z) -> Result<Z::Ok, Z::Error> {
        serializer.collect_seq(self.steps.iter())
    }
}

impl<'de, S: Deserialize<'de>> Deserialize<'de> for Trace<S> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<S>::deserialize(deserializer).map(Trace::from)
    }
}

/// A 32-byte trace fingerprint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TraceDigest(pub [u8; 32]);

impl TraceDigest {
    /// Get the raw bytes.
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Convert to hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl std::fmt::Display for TraceDigest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::step::{SortAction, SortStep};

    fn sort_step(seq: u64, array: Vec<i64>) -> SortStep {
        SortStep {
            seq,
            action: SortAction::Compare,
            array,
            compared: (0, 1),
            swapped: false,
            pass: 0,
            message: String::new(),
        }
    }

    #[test]
    fn recorder_starts_empty() {
        let recorder: StepRecorder<SortStep> = StepRecorder::new();
        assert!(recorder.is_empty());
        assert_eq!(recorder.next_seq(), 0);
        assert!(recorder.finish().is_empty());
    }

    #[test]
    fn sequence_numbers_are_dense_and_zero_based() {
        let mut recorder = StepRecorder::new();
        for _ in 0..5 {
            recorder.record(|seq| sort_step(seq, vec![1, 2]));
        }
        let trace = recorder.finish();
        let seqs: Vec<u64> = trace.iter().map(|s| s.seq).collect();
        assert_eq!(seqs, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn record_returns_the_stored_step() {
        let mut recorder = StepRecorder::new();
        let step = recorder.record(|seq| sort_step(seq, vec![9, 8]));
        assert_eq!(step.array, vec![9, 8]);
        assert_eq!(recorder.last().map(|s| s.seq), Some(0));
    }

    #[test]
    fn clones_share_storage() {
        let mut recorder = StepRecorder::new();
        recorder.record(|seq| sort_step(seq, vec![1]));
        let trace = recorder.finish();
        let other = trace.clone();
        assert!(std::ptr::eq(trace.as_slice(), other.as_slice()));
    }

    #[test]
    fn digest_is_stable_and_content_sensitive() {
        let a: Trace<SortStep> = vec![sort_step(0, vec![1, 2])].into();
        let b: Trace<SortStep> = vec![sort_step(0, vec![1, 2])].into();
        let c: Trace<SortStep> = vec![sort_step(0, vec![2, 1])].into();

        assert_eq!(a.digest().unwrap(), b.digest().unwrap());
        assert_ne!(a.digest().unwrap(), c.digest().unwrap());
        assert_eq!(a.digest().unwrap().to_hex().len(), 64);
    }

    #[test]
    fn trace_serializes_as_array() {
        let trace: Trace<SortStep> = vec![sort_step(0, vec![1]), sort_step(1, vec![1])].into();
        let json = serde_json::to_string(&trace).unwrap();
        assert!(json.starts_with('['));

        let parsed: Trace<SortStep> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, trace);
    }
}
