// src/fingerprint.rs
//! Content-addressing for shapes.
//!
//! A fingerprint is the SHA-256 of a shape's canonical serialization, so
//! two declarations with structurally equal shapes hash identically no
//! matter which file they came from or how their keys were ordered.

use crate::shape;
use serde_json::Value;
use sha2::{Digest, Sha256};
use std::fmt;

/// A fingerprint of a canonicalized shape, as lowercase hex.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Fingerprint(String);

impl Fingerprint {
    /// Computes the fingerprint of a shape value.
    #[must_use]
    pub fn of_shape(value: &Value) -> Self {
        Self::of_text(&shape::canonical_text(value))
    }

    /// Hashes already-canonical text. Callers that need both the
    /// fingerprint and the similarity text can serialize once.
    #[must_use]
    pub fn of_text(canonical: &str) -> Self {
        let digest = Sha256::digest(canonical.as_bytes());
        let mut hex = String::with_capacity(64);
        for byte in digest {
            hex.push_str(&format!("{byte:02x}"));
        }
        Fingerprint(hex)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
