//! Main application entry point.

use clap::Parser;
use sketchpad_app::{App, Cli};
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Starting Sketchpad");

    let result = Cli::parse()
        .into_config()
        .and_then(App::with_config)
        .and_then(|mut app| app.run());

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("sketchpad: {e}");
            ExitCode::FAILURE
        }
    }
}
