use anyhow::Result;

use arg_tennis_tracker::cli::Command;
use arg_tennis_tracker::config::AppConfig;
use arg_tennis_tracker::{handle_report, interpret};

fn main() {
    setup_logging();
    // The report job always exits 0: a failed section degrades to empty and
    // anything else is printed for the workflow log to pick up.
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e}");
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let command = interpret();
    execute_command(&command)
}

fn execute_command(command: &Command) -> Result<()> {
    let config = AppConfig::new();
    match command {
        Command::Report { before, after, output } => {
            handle_report(before, after, output, &config)
        }
    }
}
