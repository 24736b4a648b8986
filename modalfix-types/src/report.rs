use crate::outcome::{FileOutcome, RunSummary};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolInfo {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub started_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ended_at: Option<DateTime<Utc>>,

    /// True when no file was written (report-only run).
    #[serde(default)]
    pub dry_run: bool,
}

/// Serializable record of a whole migration run (report.json).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MigrationReport {
    pub schema: String,
    pub tool: ToolInfo,
    pub run: RunInfo,

    /// Source root the corpus was walked from.
    pub src_root: String,

    pub summary: RunSummary,

    #[serde(default)]
    pub files: Vec<FileOutcome>,
}

impl MigrationReport {
    pub fn new(tool: ToolInfo, src_root: impl Into<String>) -> Self {
        Self {
            schema: crate::schema::MODALFIX_REPORT_V1.to_string(),
            tool,
            run: RunInfo::default(),
            src_root: src_root.into(),
            summary: RunSummary::default(),
            files: vec![],
        }
    }
}
