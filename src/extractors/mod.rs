// src/extractors/mod.rs
//! Built-in extractor plugins. Library callers register their own
//! extractors on the engine; the CLI registers these by default.

pub mod json_schema;

pub use json_schema::JsonSchemaExtractor;
