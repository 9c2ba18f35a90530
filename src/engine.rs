// src/engine.rs
//! Per-run orchestration: read files (skipping cached ones), collect
//! declarations, group duplicates, emit reports.

use crate::cache::FileCache;
use crate::collector::{self, SourceFile};
use crate::config::Options;
use crate::decl::DuplicateGroup;
use crate::error::{DeclDupError, Result};
use crate::extractor::{Extractor, Registry};
use crate::grouper;
use crate::report;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::UNIX_EPOCH;

/// One engine per run. Extractors are registered on the instance; there is
/// no ambient global registry.
pub struct Engine {
    registry: Registry,
    options: Options,
    cache: FileCache,
}

impl Engine {
    #[must_use]
    pub fn new(options: Options) -> Self {
        Self {
            registry: Registry::new(),
            options,
            cache: FileCache::default_location(),
        }
    }

    /// Uses an explicit cache root instead of the default location.
    #[must_use]
    pub fn with_cache(mut self, cache: FileCache) -> Self {
        self.cache = cache;
        self
    }

    pub fn register(&mut self, extractor: Box<dyn Extractor>) {
        self.registry.register(extractor);
    }

    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Runs the full pipeline over the given files and returns the groups
    /// regardless of which report mode was requested.
    ///
    /// # Errors
    /// Returns error when reading a source file fails or a report target
    /// cannot be written. Extraction errors never surface here; extractors
    /// own those.
    pub fn run(&self, file_paths: &[PathBuf]) -> Result<Vec<DuplicateGroup>> {
        let files = self.read_files(file_paths)?;

        let decls = if self.options.pool > 1 {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(self.options.pool)
                .build()
                .map_err(|e| DeclDupError::Other(e.to_string()))?;
            pool.install(|| collector::collect_parallel(&self.registry, &files))
        } else {
            collector::collect(&self.registry, &files)
        };

        let groups = grouper::group(&decls, self.options.threshold);

        report::emit(&groups, &self.options)?;

        Ok(groups)
    }

    /// Reads each path as UTF-8, skipping files whose path + mtime key was
    /// already marked in the cache. Cache writes are single-key and
    /// idempotent, so an aborted run is safely resumable.
    fn read_files(&self, file_paths: &[PathBuf]) -> Result<Vec<SourceFile>> {
        let mut files = Vec::new();

        for path in file_paths {
            let mtime = file_mtime_ms(path)?;
            let key = FileCache::key(path, mtime);

            if self.options.cache && self.cache.read::<bool>(&key) == Some(true) {
                continue;
            }

            let text =
                fs::read_to_string(path).map_err(|e| DeclDupError::io(e, path.clone()))?;

            if self.options.cache {
                self.cache.write(&key, &true)?;
            }

            files.push(SourceFile {
                path: path.clone(),
                text,
            });
        }

        Ok(files)
    }
}

fn file_mtime_ms(path: &Path) -> Result<u128> {
    let meta = fs::metadata(path).map_err(|e| DeclDupError::io(e, path.to_path_buf()))?;
    let mtime = meta
        .modified()
        .map_err(|e| DeclDupError::io(e, path.to_path_buf()))?;
    Ok(mtime
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0))
}
