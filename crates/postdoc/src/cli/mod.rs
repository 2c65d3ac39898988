//! Command surface: argument parsing, configuration and the run loop.

mod app;
mod args;
mod config;
mod logging;

pub use app::{App, AppError};
pub use args::Args;
pub use config::Config;
pub use logging::init_logging;
