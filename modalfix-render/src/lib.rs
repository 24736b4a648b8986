//! Rendering helpers (markdown) for human-readable run artifacts.

use modalfix_types::outcome::{FileOutcome, FileStatus};
use modalfix_types::report::MigrationReport;

pub fn render_run_md(report: &MigrationReport) -> String {
    let mut out = String::new();
    out.push_str("# modalfix run\n\n");
    if report.run.dry_run {
        out.push_str("_Dry run: no files were written._\n\n");
    }
    out.push_str(&format!("- Source root: `{}`\n", report.src_root));
    out.push_str(&format!(
        "- Files: {} scanned, {} written, {} unchanged, {} skipped, {} errored\n",
        report.summary.files_scanned,
        report.summary.files_written,
        report.summary.files_unchanged,
        report.summary.files_skipped,
        report.summary.files_errored
    ));
    out.push_str(&format!(
        "- Calls: {} found, {} replaced\n",
        report.summary.calls_found, report.summary.calls_replaced
    ));
    out.push_str(&format!(
        "- Wiring: {} imports, {} hook bindings, {} async markers\n\n",
        report.summary.imports_added,
        report.summary.hooks_added,
        report.summary.async_markers_added
    ));

    let touched: Vec<&FileOutcome> = report
        .files
        .iter()
        .filter(|f| f.status != FileStatus::Skipped)
        .collect();

    out.push_str("## Files\n\n");
    if touched.is_empty() {
        out.push_str("_No files needed changes._\n");
        return out;
    }

    for f in touched {
        out.push_str(&format!(
            "- `{}` — {}",
            f.path,
            status_label(f.status)
        ));
        if f.calls_replaced > 0 {
            out.push_str(&format!(", {} calls replaced", f.calls_replaced));
        }
        if f.wiring.import_added {
            out.push_str(", import added");
        }
        if f.wiring.hook_added {
            out.push_str(", hook binding added");
        }
        if f.wiring.async_markers_added > 0 {
            out.push_str(&format!(
                ", {} async markers added",
                f.wiring.async_markers_added
            ));
        }
        if let Some(msg) = &f.message {
            out.push_str(&format!(" ({})", msg));
        }
        for note in &f.wiring_skipped {
            out.push_str(&format!("\n  - skipped: {}", note));
        }
        out.push('\n');
    }

    out
}

fn status_label(s: FileStatus) -> &'static str {
    match s {
        FileStatus::Skipped => "skipped",
        FileStatus::Written => "written",
        FileStatus::Unchanged => "unchanged",
        FileStatus::Errored => "errored",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use modalfix_types::report::ToolInfo;

    fn report() -> MigrationReport {
        MigrationReport::new(
            ToolInfo {
                name: "modalfix".to_string(),
                version: None,
            },
            "./src",
        )
    }

    #[test]
    fn empty_run_renders_placeholder() {
        let md = render_run_md(&report());
        assert!(md.contains("# modalfix run"));
        assert!(md.contains("_No files needed changes._"));
    }

    #[test]
    fn touched_files_are_listed_with_counts() {
        let mut r = report();
        let mut f = FileOutcome::new("app/login.tsx");
        f.status = FileStatus::Written;
        f.calls_found = 2;
        f.calls_replaced = 2;
        f.wiring.import_added = true;
        f.wiring_skipped
            .push("no component declaration found; hook binding not inserted".to_string());
        r.summary.record(&f);
        r.files.push(f);

        let md = render_run_md(&r);
        assert!(md.contains("`app/login.tsx` — written, 2 calls replaced, import added"));
        assert!(md.contains("skipped: no component declaration"));
    }

    #[test]
    fn dry_run_is_flagged() {
        let mut r = report();
        r.run.dry_run = true;
        assert!(render_run_md(&r).contains("_Dry run: no files were written._"));
    }
}
