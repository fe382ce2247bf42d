//! Rename stage state tracking.

/// Counters for one rename pass.
#[derive(Debug, Default)]
pub struct RenameState {
    /// Directory entries scanned.
    pub entries_scanned: u64,

    /// Files renamed.
    pub renamed_count: u64,

    /// Entries ignored unconditionally (hidden files, sidecars, wrong extension).
    pub ignored_count: u64,

    /// Well-formed entries whose name does not contain the search substring.
    pub no_match_count: u64,

    /// Matching entries that vanished before the rename could happen.
    pub skipped_missing_count: u64,
}

impl RenameState {
    /// Record one renamed file.
    pub fn record_renamed(&mut self) {
        self.entries_scanned += 1;
        self.renamed_count += 1;
    }

    /// Record one ignored entry.
    pub fn record_ignored(&mut self) {
        self.entries_scanned += 1;
        self.ignored_count += 1;
    }

    /// Record one entry without the search substring.
    pub fn record_no_match(&mut self) {
        self.entries_scanned += 1;
        self.no_match_count += 1;
    }

    /// Record one entry that disappeared before its rename.
    pub fn record_skipped_missing(&mut self) {
        self.entries_scanned += 1;
        self.skipped_missing_count += 1;
    }
}
