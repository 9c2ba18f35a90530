// src/collector.rs
//! Applies every registered extractor to every input file and
//! concatenates the results.

use crate::decl::Declaration;
use crate::extractor::Registry;
use rayon::prelude::*;
use std::path::PathBuf;

/// A file already read into memory, ready for extraction.
#[derive(Debug, Clone)]
pub struct SourceFile {
    pub path: PathBuf,
    pub text: String,
}

/// Collects declarations in file order, then extractor-registration order
/// within each file. Empty registry or file list yields an empty result.
#[must_use]
pub fn collect(registry: &Registry, files: &[SourceFile]) -> Vec<Declaration> {
    files.iter().flat_map(|f| extract_one(registry, f)).collect()
}

/// Parallel variant: fans per-file extraction out over a rayon pool.
///
/// The order-preserving collect keeps output identical to [`collect`], so
/// grouping (and the fuzzy representative choice) stays deterministic.
#[must_use]
pub fn collect_parallel(registry: &Registry, files: &[SourceFile]) -> Vec<Declaration> {
    files
        .par_iter()
        .map(|f| extract_one(registry, f))
        .collect::<Vec<_>>()
        .into_iter()
        .flatten()
        .collect()
}

fn extract_one(registry: &Registry, file: &SourceFile) -> Vec<Declaration> {
    let mut out = Vec::new();
    for extractor in registry.iter() {
        out.extend(extractor.extract(&file.path, &file.text));
    }
    out
}
