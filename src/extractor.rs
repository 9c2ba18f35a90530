// src/extractor.rs
//! The plugin boundary: extractors turn one file's text into declarations.
//!
//! An extractor owns recognizing its own file types and catching its own
//! parse failures — on malformed input it logs a diagnostic and returns an
//! empty list. The engine never sees extraction errors.

use crate::decl::Declaration;
use std::path::Path;

pub trait Extractor: Send + Sync {
    /// Stable tag identifying this extractor family, used to dedupe
    /// registrations and conventionally echoed in `Declaration::kind`.
    fn kind(&self) -> &'static str;

    /// Extracts declarations from one file. Must return an empty list for
    /// files it does not understand.
    fn extract(&self, path: &Path, text: &str) -> Vec<Declaration>;
}

/// Insertion-ordered extractor registry, owned by one engine instance.
///
/// Registering two extractors with the same `kind` keeps the first; this
/// replaces the original's global set semantics with explicit state.
#[derive(Default)]
pub struct Registry {
    extractors: Vec<Box<dyn Extractor>>,
}

impl Registry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, extractor: Box<dyn Extractor>) {
        if self.extractors.iter().any(|e| e.kind() == extractor.kind()) {
            return;
        }
        self.extractors.push(extractor);
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.extractors.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.extractors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn Extractor> {
        self.extractors.iter().map(AsRef::as_ref)
    }
}
