pub mod cache;
pub mod cli;
pub mod collector;
pub mod config;
pub mod decl;
pub mod discovery;
pub mod engine;
pub mod error;
pub mod extractor;
pub mod extractors;
pub mod fingerprint;
pub mod grouper;
pub mod report;
pub mod shape;
pub mod similarity;

pub use decl::{Declaration, DuplicateGroup, Location};
pub use engine::Engine;
pub use extractor::{Extractor, Registry};
