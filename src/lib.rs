pub mod cache;
pub mod calendar;
pub mod cli;
pub mod config;
pub mod domain;
pub mod report;

use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;

use crate::cli::{Cli, Command};
use crate::config::AppConfig;
use crate::report::{compute_report, render_markdown};

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

/// Compare two snapshot directories, write the Markdown report and echo it
/// to standard output. Missing inputs degrade to empty report sections.
pub fn handle_report(
    before_dir: &Path,
    after_dir: &Path,
    output: &Path,
    config: &AppConfig,
) -> Result<()> {
    let report = compute_report(before_dir, after_dir, &config.report);
    let markdown = render_markdown(&report);

    std::fs::write(output, &markdown)
        .with_context(|| format!("Failed to write report to {}", output.display()))?;

    println!("{}", markdown);
    Ok(())
}
