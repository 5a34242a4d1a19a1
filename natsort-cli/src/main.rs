//! natsort command-line entry point

use clap::Parser;
use natsort_cli::commands::SortArgs;
use natsort_cli::CliError;
use std::process::ExitCode;

/// Sort entries naturally, optionally filtering by the numbers they contain
#[derive(Debug, Parser)]
#[command(name = "natsort", version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    args: SortArgs,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.args.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match err.downcast_ref::<CliError>() {
                // Already labeled with the offending flag
                Some(CliError::InvalidFilter { .. }) => eprintln!("{err}"),
                _ => eprintln!("Error: {err:#}"),
            }
            ExitCode::FAILURE
        }
    }
}
