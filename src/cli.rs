use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about = "arg-tennis-tracker aggregation jobs")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Diff two snapshot directories and write a Markdown run report
    Report {
        /// Directory with pre-run snapshot files
        #[arg(long)]
        before: PathBuf,
        /// Directory with post-run data files
        #[arg(long)]
        after: PathBuf,
        /// Output report markdown file
        #[arg(long)]
        output: PathBuf,
    },
}
