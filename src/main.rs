use colored::Colorize;
use log::Level;
use prsice::{compile, usage, Outcome};
use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(err) = simple_logger::init_with_level(Level::Info) {
        eprintln!("failed to initialise logging: {err}");
    }

    match compile(std::env::args_os().skip(1)) {
        Ok(Outcome::Help(text)) => {
            eprintln!("{text}");
            ExitCode::SUCCESS
        }
        Ok(Outcome::Ready { config, advisories }) => {
            log::info!("{:?}", config);
            log::info!(
                "{} base file(s), {} target file(s), {} thread(s), {} advisory message(s)",
                config.base().len(),
                config.target().len(),
                config.threads(),
                advisories.len()
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            if err.wants_usage() {
                eprintln!("{}", usage());
            }
            eprintln!("{}", err.to_string().red());
            ExitCode::FAILURE
        }
    }
}
