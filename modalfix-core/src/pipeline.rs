//! Per-file Read → Transform → Compare → Write state machine and run
//! aggregation.

use crate::ports::{FsSourceStore, SourceStore};
use crate::settings::MigrateSettings;
use crate::walk::collect_component_files;
use camino::{Utf8Path, Utf8PathBuf};
use chrono::Utc;
use diffy::PatchFormatter;
use modalfix_rules::{CallRewriter, WiringOptions, WiringRepairer};
use modalfix_types::outcome::{FileOutcome, FileStatus};
use modalfix_types::report::{MigrationReport, ToolInfo};
use std::collections::BTreeMap;
use tracing::{debug, info, warn};

/// Fatal errors only; anything per-file is folded into that file's outcome.
#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    #[error("source root not found: {0}")]
    MissingRoot(Utf8PathBuf),
    #[error("{0:#}")]
    Internal(#[from] anyhow::Error),
}

/// Result of a whole run.
pub struct RunOutcome {
    pub report: MigrationReport,
    /// Unified diff of every changed (or would-be changed) file.
    pub patch: String,
}

/// Walk the corpus on disk and run the migration over it.
pub fn run_on_disk(settings: &MigrateSettings, tool: ToolInfo) -> Result<RunOutcome, ToolError> {
    if !settings.src_root.is_dir() {
        return Err(ToolError::MissingRoot(settings.src_root.clone()));
    }
    let files = collect_component_files(settings)?;
    let store = FsSourceStore::new(settings.src_root.clone());
    run_migration(settings, &store, &files, tool)
}

/// Run the migration over an explicit file list.
///
/// Each file is processed independently: read, transformed in memory through
/// the enabled passes (rewrite first, then repair), compared against the
/// original, and written back only when the final buffer differs and the run
/// is not a dry run.
pub fn run_migration(
    settings: &MigrateSettings,
    store: &dyn SourceStore,
    files: &[Utf8PathBuf],
    tool: ToolInfo,
) -> Result<RunOutcome, ToolError> {
    let rewriter = CallRewriter::new();
    let repairer = WiringRepairer::new(&WiringOptions {
        module_path: settings.module_path.clone(),
    });

    let mut report = MigrationReport::new(tool, settings.src_root.as_str());
    report.run.started_at = Some(Utc::now());
    report.run.dry_run = settings.dry_run;

    // Before/after text of every file whose final buffer differs.
    let mut changed: BTreeMap<Utf8PathBuf, (String, String)> = BTreeMap::new();

    for path in files {
        let outcome = process_file(
            settings,
            store,
            &rewriter,
            &repairer,
            path,
            &mut changed,
        );
        report.summary.record(&outcome);
        report.files.push(outcome);
    }

    report.run.ended_at = Some(Utc::now());
    info!(
        files = report.summary.files_scanned,
        written = report.summary.files_written,
        replaced = report.summary.calls_replaced,
        "run complete"
    );

    Ok(RunOutcome {
        patch: render_patch(&changed),
        report,
    })
}

fn process_file(
    settings: &MigrateSettings,
    store: &dyn SourceStore,
    rewriter: &CallRewriter,
    repairer: &WiringRepairer,
    path: &Utf8Path,
    changed: &mut BTreeMap<Utf8PathBuf, (String, String)>,
) -> FileOutcome {
    let mut outcome = FileOutcome::new(path.as_str());

    let original = match store.read_to_string(path) {
        Ok(text) => text,
        Err(e) => {
            warn!("{}: {:#}", path, e);
            outcome.status = FileStatus::Errored;
            outcome.message = Some(format!("{e:#}"));
            return outcome;
        }
    };

    // A file with no legacy calls and no notification usage is never
    // transformed at all.
    if !rewriter.contains_legacy_calls(&original)
        && !repairer.inspect(&original).uses_notifications
    {
        debug!("{}: nothing to do", path);
        outcome.status = FileStatus::Skipped;
        return outcome;
    }

    let mut current = original.clone();

    if settings.passes.rewrite {
        let rewritten = rewriter.rewrite(&current);
        outcome.calls_found = rewritten.calls_found;
        outcome.calls_replaced = rewritten.calls_replaced;
        current = rewritten.text;
    }

    if settings.passes.repair {
        let repaired = repairer.repair(&current);
        outcome.wiring = repaired.changes;
        outcome.wiring_skipped = repaired.skipped;
        current = repaired.text;
    }

    if current == original {
        outcome.status = FileStatus::Unchanged;
        return outcome;
    }

    changed.insert(path.to_path_buf(), (original, current.clone()));

    if settings.dry_run {
        outcome.status = FileStatus::Unchanged;
        outcome.message = Some("dry-run: not written".to_string());
        return outcome;
    }

    match store.write(path, &current) {
        Ok(()) => {
            info!(
                "{}: {} calls replaced{}",
                path,
                outcome.calls_replaced,
                if outcome.wiring.any() {
                    ", wiring repaired"
                } else {
                    ""
                }
            );
            outcome.status = FileStatus::Written;
        }
        Err(e) => {
            warn!("{}: {:#}", path, e);
            outcome.status = FileStatus::Errored;
            outcome.message = Some(format!("{e:#}"));
        }
    }

    outcome
}

fn render_patch(changed: &BTreeMap<Utf8PathBuf, (String, String)>) -> String {
    let mut out = String::new();
    let formatter = PatchFormatter::new();

    for (path, (old, new)) in changed {
        out.push_str(&format!("diff --git a/{0} b/{0}\n", path));
        out.push_str(&format!("--- a/{0}\n+++ b/{0}\n", path));

        let patch = diffy::create_patch(old, new);
        out.push_str(&format!("{}", formatter.fmt_patch(&patch)));
        if !out.ends_with('\n') {
            out.push('\n');
        }
    }

    out
}
