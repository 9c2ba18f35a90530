// src/report/text.rs
use crate::decl::DuplicateGroup;
use colored::Colorize;
use std::fmt::Write;

/// Formats groups for terminal display: one block per group with the
/// rounded percentage and each member's kind, file and name.
#[must_use]
pub fn render(groups: &[DuplicateGroup]) -> String {
    let mut out = String::new();

    for g in groups {
        let pct = (g.similarity * 100.0).round() as i64;
        let header = format!("Group ({pct}%):");
        if g.is_exact() {
            let _ = writeln!(out, "{}", header.red().bold());
        } else {
            let _ = writeln!(out, "{}", header.yellow().bold());
        }

        for d in &g.decls {
            let _ = writeln!(
                out,
                "  [{}] {}:{}",
                d.kind.cyan(),
                d.location.file,
                d.location.name.dimmed()
            );
        }
        let _ = writeln!(out);
    }

    out
}
