// src/config.rs
//! Run options, layered from `decldup.toml` (when present in the working
//! directory) with CLI flags applied on top by the binary.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "decldup.toml";

#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Options {
    /// Similarity threshold in `[0, 1]`; `1.0` means exact matching only.
    #[serde(default = "default_threshold")]
    pub threshold: f64,
    /// Render groups as a JSON array.
    #[serde(default)]
    pub json: bool,
    /// Render groups as a SARIF 2.1.0 document.
    #[serde(default)]
    pub sarif: bool,
    /// Also emit an alias fix artifact for exact groups (needs `out_file`).
    #[serde(default)]
    pub fix: bool,
    /// Write output here instead of stdout.
    #[serde(default)]
    pub out_file: Option<PathBuf>,
    /// Skip files whose path + mtime was seen in a previous run.
    #[serde(default = "default_cache")]
    pub cache: bool,
    /// Ignore patterns, matched as regexes against normalized paths.
    #[serde(default)]
    pub ignore: Vec<String>,
    /// Extraction pool size; 1 processes files strictly sequentially.
    #[serde(default = "default_pool")]
    pub pool: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
            json: false,
            sarif: false,
            fix: false,
            out_file: None,
            cache: default_cache(),
            ignore: Vec::new(),
            pool: default_pool(),
        }
    }
}

const fn default_threshold() -> f64 {
    1.0
}
const fn default_cache() -> bool {
    true
}
const fn default_pool() -> usize {
    1
}

impl Options {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads options from `decldup.toml` in the current directory, falling
    /// back to defaults when the file is absent or malformed. Unknown keys
    /// are ignored.
    #[must_use]
    pub fn load_local() -> Self {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    #[must_use]
    pub fn load_from(path: &Path) -> Self {
        let Ok(content) = fs::read_to_string(path) else {
            return Self::default();
        };
        match toml::from_str::<Options>(&content) {
            Ok(opts) => opts.normalized(),
            Err(e) => {
                eprintln!("WARN: ignoring malformed {}: {e}", path.display());
                Self::default()
            }
        }
    }

    /// Clamps fields into their valid ranges.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        self.threshold = self.threshold.clamp(0.0, 1.0);
        self.pool = self.pool.max(1);
        self
    }
}
