//! Entry point for the linecut binary

use clap::Parser;
use linecut_cli::CliArgs;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = CliArgs::parse();

    match args.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
