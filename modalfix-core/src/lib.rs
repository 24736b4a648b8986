//! File driver for modalfix: walk a corpus of component files, run the
//! rewrite and wiring passes per file, and persist only what changed.
//!
//! Every file is processed independently; a per-file failure is folded into
//! that file's outcome and never aborts the traversal. The transform passes
//! themselves live in `modalfix-rules`.

mod pipeline;
mod ports;
mod settings;
mod walk;

pub use pipeline::{run_migration, run_on_disk, RunOutcome, ToolError};
pub use ports::{FsSourceStore, SourceStore};
pub use settings::{MigrateSettings, Passes};
pub use walk::collect_component_files;
