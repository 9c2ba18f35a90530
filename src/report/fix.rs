// src/report/fix.rs
//! Alias artifact for exact duplicate groups: the first member becomes the
//! canonical declaration and every other member's name is aliased to it.
//!
//! The emitted syntax is TypeScript-flavored type aliases; it is only
//! meaningful for declaration kinds whose name is a type-like identifier.

use crate::decl::DuplicateGroup;
use std::fmt::Write;

#[must_use]
pub fn render(groups: &[DuplicateGroup]) -> String {
    let mut body = String::from("// Auto-generated by decldup - identical declarations unified\n\n");

    let exact: Vec<_> = groups.iter().filter(|g| g.is_exact()).collect();

    for (idx, g) in exact.iter().enumerate() {
        let Some(base) = g.decls.first() else {
            continue;
        };
        let base_name = &base.location.name;

        let _ = writeln!(body, "// Group {}", idx + 1);
        let _ = writeln!(
            body,
            "export type {base_name} = {{/* replace with real shape */}};"
        );
        for d in &g.decls[1..] {
            let _ = writeln!(body, "export type {} = {base_name};", d.location.name);
        }
        body.push('\n');
    }

    body
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decl::Declaration;
    use serde_json::json;

    #[test]
    fn aliases_point_at_first_member() {
        let groups = vec![DuplicateGroup {
            similarity: 1.0,
            decls: vec![
                Declaration::new("a#t:User", "t", json!({}), "a.json", "User"),
                Declaration::new("b#t:Person", "t", json!({}), "b.json", "Person"),
                Declaration::new("c#t:Account", "t", json!({}), "c.json", "Account"),
            ],
        }];
        let out = render(&groups);
        assert!(out.contains("export type User = {/* replace with real shape */};"));
        assert!(out.contains("export type Person = User;"));
        assert!(out.contains("export type Account = User;"));
    }

    #[test]
    fn fuzzy_groups_skipped() {
        let groups = vec![DuplicateGroup {
            similarity: 0.9,
            decls: vec![
                Declaration::new("a#t:A", "t", json!({}), "a.json", "A"),
                Declaration::new("b#t:B", "t", json!({}), "b.json", "B"),
            ],
        }];
        let out = render(&groups);
        assert!(!out.contains("export type"));
    }
}
