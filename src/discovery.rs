// src/discovery.rs
use crate::config::Options;
use crate::error::Result;
use regex::Regex;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Directories that never contain analyzable declarations.
const PRUNE_DIRS: &[&str] = &[".git", "target", "node_modules", ".cache", "dist"];

/// Walks a root directory and returns analyzable files, with ignore
/// patterns applied and results sorted for deterministic runs.
///
/// # Errors
/// Returns error if an ignore pattern is not a valid regex.
pub fn discover(root: &Path, options: &Options) -> Result<Vec<PathBuf>> {
    let ignore = compile_patterns(&options.ignore)?;

    let walker = WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_entry(|e| !should_prune(&e.file_name().to_string_lossy()));

    let mut paths = Vec::new();
    let mut errors = 0usize;

    for item in walker {
        match item {
            Ok(entry) => {
                if !entry.file_type().is_file() {
                    continue;
                }
                let p = entry.path().strip_prefix(root).unwrap_or(entry.path());
                if is_ignored(p, &ignore) {
                    continue;
                }
                paths.push(entry.path().to_path_buf());
            }
            Err(_) => errors += 1,
        }
    }

    if errors > 0 {
        eprintln!("WARN: Encountered {errors} errors during file walk");
    }

    paths.sort();
    Ok(paths)
}

fn compile_patterns(patterns: &[String]) -> Result<Vec<Regex>> {
    patterns
        .iter()
        .map(|p| Regex::new(p).map_err(Into::into))
        .collect()
}

fn should_prune(name: &str) -> bool {
    PRUNE_DIRS.contains(&name)
}

/// Matches against forward-slash paths so patterns behave the same on
/// every platform.
fn normalize_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

fn is_ignored(path: &Path, patterns: &[Regex]) -> bool {
    if patterns.is_empty() {
        return false;
    }
    let s = normalize_path(path);
    patterns.iter().any(|re| re.is_match(&s))
}
