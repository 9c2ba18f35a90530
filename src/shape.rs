// src/shape.rs
//! Shape canonicalization: recursively normalizes a JSON-like value so
//! that structurally equal shapes serialize to byte-identical text.
//!
//! Object keys are sorted, array order is preserved (it is semantically
//! significant), and primitive values pass through untouched — `true`
//! never becomes `1` or `"true"`.

use serde_json::{Map, Value};

/// Canonicalizes an arbitrary JSON-like value. Total and idempotent.
#[must_use]
pub fn canonicalize(value: &Value) -> Value {
    match value {
        Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => value.clone(),
        Value::Array(items) => Value::Array(items.iter().map(canonicalize).collect()),
        Value::Object(fields) => {
            let mut keys: Vec<&String> = fields.keys().collect();
            keys.sort();

            let mut out = Map::new();
            for k in keys {
                // Key is present by construction.
                if let Some(v) = fields.get(k) {
                    out.insert(k.clone(), canonicalize(v));
                }
            }
            Value::Object(out)
        }
    }
}

/// Serializes the canonical form of a shape to stable compact text.
///
/// Two structurally equal shapes always produce the same bytes here; both
/// the fingerprint and the similarity score are computed over this text.
#[must_use]
pub fn canonical_text(value: &Value) -> String {
    canonicalize(value).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn primitives_pass_through() {
        assert_eq!(canonicalize(&json!(null)), json!(null));
        assert_eq!(canonicalize(&json!(true)), json!(true));
        assert_eq!(canonicalize(&json!(42)), json!(42));
        assert_eq!(canonicalize(&json!("true")), json!("true"));
    }

    #[test]
    fn bool_never_coerced() {
        assert_ne!(canonical_text(&json!(true)), canonical_text(&json!(1)));
        assert_ne!(canonical_text(&json!(true)), canonical_text(&json!("true")));
    }

    #[test]
    fn object_key_order_irrelevant() {
        let a = json!({"b": 2, "a": 1});
        let b = json!({"a": 1, "b": 2});
        assert_eq!(canonical_text(&a), canonical_text(&b));
    }

    #[test]
    fn array_order_preserved() {
        let a = json!([1, 2]);
        let b = json!([2, 1]);
        assert_ne!(canonical_text(&a), canonical_text(&b));
    }

    #[test]
    fn nested_objects_sorted_recursively() {
        let a = json!({"outer": {"z": 1, "a": {"y": 2, "x": 3}}});
        let b = json!({"outer": {"a": {"x": 3, "y": 2}, "z": 1}});
        assert_eq!(canonical_text(&a), canonical_text(&b));
    }

    #[test]
    fn idempotent() {
        let v = json!({"b": [{"d": 4, "c": 3}], "a": null});
        let once = canonicalize(&v);
        let twice = canonicalize(&once);
        assert_eq!(once, twice);
    }
}
