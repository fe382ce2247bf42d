//! Collect stage state tracking.

/// Counters for one collect pass.
#[derive(Debug, Default)]
pub struct CollectState {
    /// Subject directories found under the base directory.
    pub subjects_found: u64,

    /// Candidate (subject, session, condition) triples examined.
    pub candidates_examined: u64,

    /// Files copied into the destination directory.
    pub copied_count: u64,

    /// Candidates whose source file did not exist.
    pub missing_count: u64,
}

impl CollectState {
    /// Record one examined candidate that was copied.
    pub fn record_copied(&mut self) {
        self.candidates_examined += 1;
        self.copied_count += 1;
    }

    /// Record one examined candidate whose source was missing.
    pub fn record_missing(&mut self) {
        self.candidates_examined += 1;
        self.missing_count += 1;
    }
}
