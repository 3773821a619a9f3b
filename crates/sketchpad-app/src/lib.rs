//! Sketchpad Application
//!
//! Headless shell around the core: replays recorded gesture scripts through a
//! canvas session and exports the rendered frame.

mod app;
mod config;
mod script;

pub use app::{App, AppConfig, AppError, encode_png};
pub use config::Cli;
pub use script::{Command, SizeStep, parse_script};
