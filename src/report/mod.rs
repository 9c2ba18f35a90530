// src/report/mod.rs
//! Output formatting for duplicate groups.

pub mod fix;
pub mod json;
pub mod sarif;
pub mod text;

use crate::config::Options;
use crate::decl::DuplicateGroup;
use crate::error::{DeclDupError, Result};
use std::fs;
use std::path::Path;

/// Renders groups according to the options and writes the result to the
/// configured target (a file when `out_file` is set, stdout otherwise).
///
/// # Errors
/// Returns error if writing the output or fix artifact fails.
pub fn emit(groups: &[DuplicateGroup], options: &Options) -> Result<()> {
    if options.json {
        write_out(&json::render(groups)?, options.out_file.as_deref())?;
    } else if options.sarif {
        write_out(&sarif::render(groups)?, options.out_file.as_deref())?;
    } else {
        print!("{}", text::render(groups));
    }

    if options.fix {
        if let Some(out) = options.out_file.as_deref() {
            let artifact = fix::render(groups);
            fs::write(out, artifact).map_err(|e| DeclDupError::io(e, out))?;
        }
    }

    Ok(())
}

fn write_out(content: &str, out_file: Option<&Path>) -> Result<()> {
    match out_file {
        Some(path) => fs::write(path, content).map_err(|e| DeclDupError::io(e, path)),
        None => {
            println!("{content}");
            Ok(())
        }
    }
}
