// src/bin/decldup.rs
use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use decldup::cli::Cli;
use decldup::config::Options;
use decldup::discovery;
use decldup::engine::Engine;
use decldup::extractors::JsonSchemaExtractor;

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {e}", "error:".red().bold());
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let options = cli.apply_to(Options::load_local());

    let files = resolve_files(&cli.paths, &options)?;

    let mut engine = Engine::new(options);
    engine.register(Box::new(JsonSchemaExtractor));
    engine.run(&files)?;

    Ok(())
}

/// Expands directory arguments via discovery; file arguments pass through
/// in the order given. No arguments scans the working directory.
fn resolve_files(paths: &[PathBuf], options: &Options) -> Result<Vec<PathBuf>> {
    if paths.is_empty() {
        return Ok(discovery::discover(std::path::Path::new("."), options)?);
    }

    let mut files = Vec::new();
    for p in paths {
        if p.is_dir() {
            files.extend(discovery::discover(p, options)?);
        } else {
            files.push(p.clone());
        }
    }
    Ok(files)
}
