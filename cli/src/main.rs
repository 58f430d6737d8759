mod args;
mod error;
mod logging;

use args::Cli;
use clap::{CommandFactory, Parser};
use error::CliError;
use std::io;
use std::process::ExitCode;
use tracing::{debug, error};

/// Exit status for usage errors, matching clap's own.
const USAGE_EXIT: u8 = 2;

fn main() -> ExitCode {
    // A bare invocation prints usage to stdout and counts as a usage error
    if std::env::args_os().len() <= 1 {
        if let Err(e) = Cli::command().print_help() {
            eprintln!("error: failed to print usage: {}", e);
        }
        return ExitCode::from(USAGE_EXIT);
    }

    // Exits 0 for --help/--version and 2 for bad flags
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Conversion failed: {}", e);
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let options = cli.convert_options();
    let stdout = io::stdout();

    let stats = parser::convert_path(&cli.in_file, stdout.lock(), &options).map_err(|source| {
        CliError::Convert {
            path: cli.in_file.clone(),
            source,
        }
    })?;

    debug!("Finished: {:?}", stats);
    Ok(())
}
