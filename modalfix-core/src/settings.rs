use camino::Utf8PathBuf;

/// Which transform passes to run, in their fixed order (rewrite first).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Passes {
    pub rewrite: bool,
    pub repair: bool,
}

impl Default for Passes {
    fn default() -> Self {
        Self {
            rewrite: true,
            repair: true,
        }
    }
}

impl Passes {
    pub fn rewrite_only() -> Self {
        Self {
            rewrite: true,
            repair: false,
        }
    }

    pub fn repair_only() -> Self {
        Self {
            rewrite: false,
            repair: true,
        }
    }
}

/// Settings for one migration run.
#[derive(Debug, Clone)]
pub struct MigrateSettings {
    /// Root of the component tree to walk.
    pub src_root: Utf8PathBuf,

    /// Report and patch only; never write files.
    pub dry_run: bool,

    pub passes: Passes,

    /// File extensions considered component files.
    pub extensions: Vec<String>,

    /// Directory names pruned from the walk.
    pub ignore_dirs: Vec<String>,

    /// File names never touched (the notification provider itself).
    pub ignore_files: Vec<String>,

    /// Module the `useModal` hook is imported from.
    pub module_path: String,
}

impl MigrateSettings {
    pub fn new(src_root: Utf8PathBuf) -> Self {
        Self {
            src_root,
            dry_run: false,
            passes: Passes::default(),
            extensions: ["tsx", "ts", "jsx", "js"]
                .map(String::from)
                .to_vec(),
            ignore_dirs: ["node_modules", ".next", "dist", "build", ".git"]
                .map(String::from)
                .to_vec(),
            ignore_files: ["ModalContext.tsx", "ModalContext.ts"]
                .map(String::from)
                .to_vec(),
            module_path: "@/context/ModalContext".to_string(),
        }
    }
}
