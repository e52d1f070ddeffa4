use std::{env, process::ExitCode};

use movierank::config::Config;

mod logging;

fn main() -> ExitCode {
    logging::setup_logging();

    let config = Config::from_args(env::args());

    match movierank::run(&config.input) {
        Ok(summary) => {
            log::debug!(
                "Report finished: {} movies ranked, {} rows skipped",
                summary.accepted,
                summary.rejected
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::debug!("Report aborted: {:?}", e);
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
