use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use fs_err as fs;

/// Read/write access to the corpus, keyed by paths relative to the source
/// root.
///
/// modalfix-core uses this so the driver can be tested against an in-memory
/// implementation.
pub trait SourceStore {
    fn root(&self) -> &Utf8Path;

    fn read_to_string(&self, rel: &Utf8Path) -> anyhow::Result<String>;

    fn write(&self, rel: &Utf8Path, contents: &str) -> anyhow::Result<()>;

    fn exists(&self, rel: &Utf8Path) -> bool;
}

/// File-system backed `SourceStore`.
#[derive(Debug, Clone)]
pub struct FsSourceStore {
    root: Utf8PathBuf,
}

impl FsSourceStore {
    pub fn new(root: Utf8PathBuf) -> Self {
        Self { root }
    }

    fn abs(&self, rel: &Utf8Path) -> Utf8PathBuf {
        if rel.is_absolute() {
            rel.to_path_buf()
        } else {
            self.root.join(rel)
        }
    }
}

impl SourceStore for FsSourceStore {
    fn root(&self) -> &Utf8Path {
        &self.root
    }

    fn read_to_string(&self, rel: &Utf8Path) -> anyhow::Result<String> {
        let abs = self.abs(rel);
        fs::read_to_string(&abs).with_context(|| format!("read {}", abs))
    }

    fn write(&self, rel: &Utf8Path, contents: &str) -> anyhow::Result<()> {
        let abs = self.abs(rel);
        fs::write(&abs, contents).with_context(|| format!("write {}", abs))
    }

    fn exists(&self, rel: &Utf8Path) -> bool {
        self.abs(rel).exists()
    }
}
