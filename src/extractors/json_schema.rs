// src/extractors/json_schema.rs
//! JSON Schema extractor: emits one declaration for the root schema and
//! one per named entry under `definitions`.

use crate::decl::Declaration;
use crate::extractor::Extractor;
use serde_json::Value;
use std::path::Path;

pub struct JsonSchemaExtractor;

const KIND: &str = "json-schema";

impl Extractor for JsonSchemaExtractor {
    fn kind(&self) -> &'static str {
        KIND
    }

    fn extract(&self, path: &Path, text: &str) -> Vec<Declaration> {
        if path.extension().and_then(|e| e.to_str()) != Some("json") {
            return Vec::new();
        }

        let root: Value = match serde_json::from_str(text) {
            Ok(v) => v,
            Err(e) => {
                // Parse failures belong to the extractor, not the engine.
                eprintln!("WARN: JSON Schema parse error in {}: {e}", path.display());
                return Vec::new();
            }
        };

        let file = path.display().to_string();
        let mut decls = Vec::new();

        for (pointer, subschema) in collect_subschemas(&root) {
            decls.push(Declaration::new(
                format!("{file}{pointer}"),
                KIND,
                subschema,
                file.clone(),
                pointer,
            ));
        }

        decls
    }
}

/// The root schema at `#/` plus each named definition under
/// `#/definitions/<name>`.
fn collect_subschemas(root: &Value) -> Vec<(String, Value)> {
    let mut out = vec![("#/".to_string(), root.clone())];

    if let Some(defs) = root.get("definitions").and_then(Value::as_object) {
        for (name, sub) in defs {
            if sub.is_object() {
                out.push((format!("#/definitions/{name}"), sub.clone()));
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn extract(name: &str, text: &str) -> Vec<Declaration> {
        JsonSchemaExtractor.extract(Path::new(name), text)
    }

    #[test]
    fn root_and_definitions() {
        let text = json!({
            "type": "object",
            "definitions": {
                "User": {"type": "object", "properties": {"id": {"type": "string"}}},
                "Tag": {"type": "string"}
            }
        })
        .to_string();

        let decls = extract("schema.json", &text);
        assert_eq!(decls.len(), 3);
        assert_eq!(decls[0].location.name, "#/");
        assert_eq!(decls[0].kind, "json-schema");

        let names: Vec<_> = decls.iter().map(|d| d.location.name.as_str()).collect();
        assert!(names.contains(&"#/definitions/User"));
        assert!(names.contains(&"#/definitions/Tag"));
    }

    #[test]
    fn malformed_json_yields_empty() {
        let decls = extract("broken.json", "{not valid");
        assert!(decls.is_empty());
    }

    #[test]
    fn non_json_extension_skipped() {
        let decls = extract("schema.yaml", "{}");
        assert!(decls.is_empty());
    }

    #[test]
    fn id_combines_file_and_pointer() {
        let decls = extract("s.json", "{\"type\": \"object\"}");
        assert_eq!(decls[0].id, "s.json#/");
    }
}
