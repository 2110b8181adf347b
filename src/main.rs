use std::process::ExitCode;

use awdigest::cli::run_cli;
use tracing::error;

fn main() -> ExitCode {
    run_cli().unwrap_or_else(|e| {
        eprintln!("Error: {e:#}");
        error!("Error running cli {e:?}");
        ExitCode::FAILURE
    })
}
