use std::process::ExitCode;

use env_logger::Env;
use log::error;

use link_budget_sim::frontend::cli::cli;


fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .init();

    match cli() {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            error!("{error}");
            ExitCode::FAILURE
        }
    }
}
