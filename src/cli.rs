// src/cli.rs
use crate::config::Options;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "decldup", version, about = "Duplicate declaration finder")]
pub struct Cli {
    /// Files or directories to scan (directories are walked).
    pub paths: Vec<PathBuf>,

    /// Similarity threshold in [0, 1]; below 1 enables fuzzy matching.
    #[arg(long, short)]
    pub threshold: Option<f64>,

    /// Output a JSON array of groups.
    #[arg(long)]
    pub json: bool,

    /// Output a SARIF 2.1.0 report.
    #[arg(long)]
    pub sarif: bool,

    /// Also write an alias fix file for exact duplicates (requires --out).
    #[arg(long)]
    pub fix: bool,

    /// Write output to a file instead of stdout.
    #[arg(long, short)]
    pub out: Option<PathBuf>,

    /// Disable the path+mtime file cache.
    #[arg(long)]
    pub no_cache: bool,

    /// Ignore pattern (regex against normalized paths); repeatable.
    #[arg(long)]
    pub ignore: Vec<String>,

    /// Extraction pool size; 1 runs strictly sequentially.
    #[arg(long)]
    pub pool: Option<usize>,
}

impl Cli {
    /// Layers flags over file-loaded options; flags win.
    #[must_use]
    pub fn apply_to(&self, mut options: Options) -> Options {
        if let Some(t) = self.threshold {
            options.threshold = t;
        }
        if self.json {
            options.json = true;
        }
        if self.sarif {
            options.sarif = true;
        }
        if self.fix {
            options.fix = true;
        }
        if let Some(out) = &self.out {
            options.out_file = Some(out.clone());
        }
        if self.no_cache {
            options.cache = false;
        }
        if !self.ignore.is_empty() {
            options.ignore.extend(self.ignore.iter().cloned());
        }
        if let Some(pool) = self.pool {
            options.pool = pool;
        }
        options.normalized()
    }
}
