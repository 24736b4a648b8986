use camino::Utf8PathBuf;
use serde::{Deserialize, Serialize};

/// Terminal state of one file in a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileStatus {
    /// No legacy calls and no notification usage; never transformed.
    Skipped,
    /// Transformed and persisted.
    Written,
    /// Transformed in memory but the result matched the input (or dry-run).
    Unchanged,
    /// I/O or unexpected failure; the run continued past it.
    Errored,
}

/// Wiring repairs applied to a single file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WiringChanges {
    pub import_added: bool,
    pub hook_added: bool,
    pub async_markers_added: u64,
}

impl WiringChanges {
    pub fn any(&self) -> bool {
        self.import_added || self.hook_added || self.async_markers_added > 0
    }
}

/// Outcome of processing one source file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileOutcome {
    /// Path relative to the source root.
    pub path: Utf8PathBuf,
    pub status: FileStatus,

    /// Legacy calls detected before rewriting.
    pub calls_found: u64,
    /// Legacy calls actually replaced.
    pub calls_replaced: u64,

    #[serde(default)]
    pub wiring: WiringChanges,

    /// Wiring repairs that could not be placed (e.g. no react import line,
    /// no recognizable component declaration). Informational, not an error.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub wiring_skipped: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl FileOutcome {
    pub fn new(path: impl Into<Utf8PathBuf>) -> Self {
        Self {
            path: path.into(),
            status: FileStatus::Skipped,
            calls_found: 0,
            calls_replaced: 0,
            wiring: WiringChanges::default(),
            wiring_skipped: vec![],
            message: None,
        }
    }
}

/// Aggregate counters for a whole run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    pub files_scanned: u64,
    pub files_written: u64,
    pub files_skipped: u64,
    pub files_unchanged: u64,
    pub files_errored: u64,

    pub calls_found: u64,
    pub calls_replaced: u64,
    pub imports_added: u64,
    pub hooks_added: u64,
    pub async_markers_added: u64,
}

impl RunSummary {
    /// Fold one file outcome into the aggregate.
    pub fn record(&mut self, outcome: &FileOutcome) {
        self.files_scanned += 1;
        match outcome.status {
            FileStatus::Skipped => self.files_skipped += 1,
            FileStatus::Written => self.files_written += 1,
            FileStatus::Unchanged => self.files_unchanged += 1,
            FileStatus::Errored => self.files_errored += 1,
        }
        self.calls_found += outcome.calls_found;
        self.calls_replaced += outcome.calls_replaced;
        if outcome.wiring.import_added {
            self.imports_added += 1;
        }
        if outcome.wiring.hook_added {
            self.hooks_added += 1;
        }
        self.async_markers_added += outcome.wiring.async_markers_added;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_tallies_by_status() {
        let mut summary = RunSummary::default();

        let mut written = FileOutcome::new("a.tsx");
        written.status = FileStatus::Written;
        written.calls_found = 3;
        written.calls_replaced = 3;
        written.wiring.import_added = true;
        written.wiring.async_markers_added = 2;
        summary.record(&written);

        let skipped = FileOutcome::new("b.tsx");
        summary.record(&skipped);

        assert_eq!(summary.files_scanned, 2);
        assert_eq!(summary.files_written, 1);
        assert_eq!(summary.files_skipped, 1);
        assert_eq!(summary.calls_replaced, 3);
        assert_eq!(summary.imports_added, 1);
        assert_eq!(summary.async_markers_added, 2);
    }
}
