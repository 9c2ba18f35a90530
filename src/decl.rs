// src/decl.rs
//! Core data model: declarations extracted from source files and the
//! duplicate groups the engine produces from them.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Human-readable provenance of a declaration. Never consulted by the
/// matching logic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub file: String,
    pub name: String,
}

/// One named structural unit extracted from a source file.
///
/// `shape` carries the semantically relevant structure with all
/// extractor-specific normalization already applied; it is the only field
/// that participates in matching. `id` exists for traceability only,
/// conventionally `<file>#<kind>:<local-key>`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Declaration {
    pub id: String,
    pub kind: String,
    pub shape: Value,
    pub location: Location,
}

impl Declaration {
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        kind: impl Into<String>,
        shape: Value,
        file: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            kind: kind.into(),
            shape,
            location: Location {
                file: file.into(),
                name: name.into(),
            },
        }
    }
}

/// A set of declarations judged duplicates of one another.
///
/// Invariant: `decls.len() >= 2`. Similarity is exactly `1.0` for
/// fingerprint-equal groups and lies in `[threshold, 1)` for fuzzy groups.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DuplicateGroup {
    pub similarity: f64,
    pub decls: Vec<Declaration>,
}

impl DuplicateGroup {
    /// True when every member shares one fingerprint.
    #[must_use]
    pub fn is_exact(&self) -> bool {
        (self.similarity - 1.0).abs() < f64::EPSILON
    }
}
