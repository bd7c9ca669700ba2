use shinobi_core::logging;

mod cli;

use crate::cli::CliCommand;

#[tokio::main]
async fn main() {
    // Log to the state file; fall back to stderr when it cannot be opened.
    if logging::init_logging().is_err() {
        logging::init_logging_stderr();
    }

    if let Err(err) = CliCommand::run_from_args().await {
        eprintln!("shinobi error: {:#}", err);
        std::process::exit(1);
    }
}
