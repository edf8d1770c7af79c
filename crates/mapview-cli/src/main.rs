use mapview_core::logging;

mod cli;
mod host;

use crate::cli::CliCommand;

fn main() {
    // Initialize logging as early as possible; the file sink is optional.
    if let Err(err) = logging::init_logging() {
        logging::init_logging_stderr();
        tracing::warn!("file logging unavailable, using stderr: {:#}", err);
    }

    match CliCommand::run_from_args() {
        Ok(true) => {}
        // Failure was already shown through the host.
        Ok(false) => std::process::exit(1),
        Err(err) => {
            eprintln!("mapview error: {:#}", err);
            std::process::exit(1);
        }
    }
}
