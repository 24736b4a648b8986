mod config;

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand};
use config::ConfigMerger;
use fs_err as fs;
use modalfix_core::{run_on_disk, Passes, RunOutcome, ToolError};
use modalfix_render::render_run_md;
use modalfix_types::report::{MigrationReport, ToolInfo};
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "modalfix",
    version,
    about = "Migrates blocking alert()/confirm() calls to awaited useModal() notifications."
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Rewrite legacy calls, then repair wiring (the normal mode).
    Run(RunArgs),
    /// Rewrite legacy notification calls only.
    Rewrite(RunArgs),
    /// Repair imports, hook bindings, and async markers only.
    Repair(RunArgs),
}

#[derive(Debug, Parser)]
struct RunArgs {
    /// Source tree to migrate (default: ./src).
    #[arg(long, default_value = "./src")]
    src_root: Utf8PathBuf,

    /// Report changes without writing any source file.
    #[arg(long, default_value_t = false)]
    dry_run: bool,

    /// Output directory for run artifacts (default: <src-root>/../artifacts/modalfix).
    #[arg(long)]
    out_dir: Option<Utf8PathBuf>,

    /// Extra directory names to prune from the walk.
    #[arg(long = "ignore-dir")]
    ignore_dirs: Vec<String>,

    /// Extra file names to leave untouched.
    #[arg(long = "ignore-file")]
    ignore_files: Vec<String>,

    /// Extra file extensions to treat as component files.
    #[arg(long = "ext")]
    extensions: Vec<String>,

    /// Module path the useModal hook is imported from.
    #[arg(long)]
    module_path: Option<String>,
}

fn main() -> ExitCode {
    if let Err(e) = real_main() {
        error!("{:?}", e);
        return ExitCode::from(1);
    }
    ExitCode::from(0)
}

fn real_main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let (args, passes) = match cli.cmd {
        Command::Run(args) => (args, Passes::default()),
        Command::Rewrite(args) => (args, Passes::rewrite_only()),
        Command::Repair(args) => (args, Passes::repair_only()),
    };
    run_command(args, passes)
}

fn run_command(args: RunArgs, passes: Passes) -> anyhow::Result<()> {
    let file_config = config::load_or_default(&args.src_root).context("load modalfix.toml")?;
    let settings = ConfigMerger::new(file_config).merge(
        args.src_root.clone(),
        args.dry_run,
        passes,
        &args.extensions,
        &args.ignore_dirs,
        &args.ignore_files,
        args.module_path.as_deref(),
    );

    let out_dir = args.out_dir.unwrap_or_else(|| default_out_dir(&args.src_root));

    // Per-file errors are already folded into the report; only setup
    // failures reach here.
    let outcome = match run_on_disk(&settings, tool_info()) {
        Ok(outcome) => outcome,
        Err(ToolError::MissingRoot(root)) => {
            anyhow::bail!("source root not found: {}", root)
        }
        Err(ToolError::Internal(e)) => return Err(e),
    };

    write_artifacts(&outcome, &out_dir)?;
    print_summary(&outcome.report);

    info!("wrote run artifacts to {}", out_dir);
    Ok(())
}

fn default_out_dir(src_root: &Utf8Path) -> Utf8PathBuf {
    let base = src_root.parent().unwrap_or(src_root);
    base.join("artifacts").join("modalfix")
}

fn write_artifacts(outcome: &RunOutcome, out_dir: &Utf8Path) -> anyhow::Result<()> {
    fs::create_dir_all(out_dir).with_context(|| format!("create {}", out_dir))?;
    write_json(&out_dir.join("report.json"), &outcome.report)?;
    fs::write(out_dir.join("run.md"), render_run_md(&outcome.report))?;
    fs::write(out_dir.join("patch.diff"), &outcome.patch)?;
    Ok(())
}

fn write_json<T: serde::Serialize>(path: &Utf8Path, v: &T) -> anyhow::Result<()> {
    let s = serde_json::to_string_pretty(v).context("serialize json")?;
    fs::write(path, s).with_context(|| format!("write {}", path))?;
    Ok(())
}

fn print_summary(report: &MigrationReport) {
    let s = &report.summary;
    println!("modalfix summary");
    println!(
        "  files: {} scanned, {} written, {} unchanged, {} skipped, {} errored",
        s.files_scanned, s.files_written, s.files_unchanged, s.files_skipped, s.files_errored
    );
    println!(
        "  calls: {} found, {} replaced",
        s.calls_found, s.calls_replaced
    );
    println!(
        "  wiring: {} imports, {} hook bindings, {} async markers",
        s.imports_added, s.hooks_added, s.async_markers_added
    );
    if report.run.dry_run {
        println!("  dry-run: no files were written");
    }
}

fn tool_info() -> ToolInfo {
    ToolInfo {
        name: "modalfix".to_string(),
        version: Some(env!("CARGO_PKG_VERSION").to_string()),
    }
}
