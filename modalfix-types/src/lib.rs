//! Shared DTOs (schemas-as-code) for the modalfix workspace.
//!
//! # Design constraints
//! - These types are intended to be serialized to disk (report.json).
//! - Be conservative with breaking changes.
//! - Prefer adding optional fields over changing semantics.

pub mod category;
pub mod outcome;
pub mod report;

pub mod schema {
    pub const MODALFIX_REPORT_V1: &str = "modalfix.report.v1";
}

pub use category::NotificationKind;
pub use outcome::{FileOutcome, FileStatus, RunSummary, WiringChanges};
pub use report::{MigrationReport, RunInfo, ToolInfo};
