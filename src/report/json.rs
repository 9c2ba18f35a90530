// src/report/json.rs
use crate::decl::DuplicateGroup;
use crate::error::Result;

/// Serializes the groups verbatim as a pretty-printed JSON array.
///
/// # Errors
/// Returns error if serialization fails.
pub fn render(groups: &[DuplicateGroup]) -> Result<String> {
    Ok(serde_json::to_string_pretty(groups)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decl::Declaration;
    use serde_json::json;

    #[test]
    fn renders_group_fields() {
        let groups = vec![DuplicateGroup {
            similarity: 1.0,
            decls: vec![
                Declaration::new("a#t:x", "t", json!({"k": 1}), "a.json", "x"),
                Declaration::new("b#t:x", "t", json!({"k": 1}), "b.json", "x"),
            ],
        }];
        let out = render(&groups).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed[0]["similarity"], json!(1.0));
        assert_eq!(parsed[0]["decls"][1]["location"]["file"], json!("b.json"));
    }

    #[test]
    fn empty_groups_render_empty_array() {
        assert_eq!(render(&[]).unwrap(), "[]");
    }
}
