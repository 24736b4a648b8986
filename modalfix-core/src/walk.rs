use crate::settings::MigrateSettings;
use anyhow::Context;
use camino::Utf8PathBuf;
use tracing::warn;
use walkdir::{DirEntry, WalkDir};

/// Collect component files under the source root, sorted, as paths relative
/// to it. Ignored directories are pruned from the walk entirely.
pub fn collect_component_files(settings: &MigrateSettings) -> anyhow::Result<Vec<Utf8PathBuf>> {
    let root = &settings.src_root;
    let mut files = Vec::new();

    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| !is_ignored_dir(e, &settings.ignore_dirs));

    for entry in walker {
        let entry = entry.with_context(|| format!("walk {}", root))?;
        if !entry.file_type().is_file() {
            continue;
        }

        let name = entry.file_name().to_string_lossy();
        if settings.ignore_files.iter().any(|f| f.as_str() == name) {
            continue;
        }
        let Some(ext) = entry.path().extension().and_then(|e| e.to_str()) else {
            continue;
        };
        if !settings.extensions.iter().any(|x| x == ext) {
            continue;
        }

        let rel = entry
            .path()
            .strip_prefix(root.as_std_path())
            .unwrap_or(entry.path());
        match Utf8PathBuf::from_path_buf(rel.to_path_buf()) {
            Ok(p) => files.push(p),
            Err(p) => warn!("skipping non-UTF-8 path {}", p.display()),
        }
    }

    Ok(files)
}

fn is_ignored_dir(entry: &DirEntry, ignore_dirs: &[String]) -> bool {
    entry.file_type().is_dir()
        && ignore_dirs
            .iter()
            .any(|d| d.as_str() == entry.file_name().to_string_lossy())
}
