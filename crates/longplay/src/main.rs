//! Longplay: offline inspection of capture-session save-state blobs.

mod app;
mod command;
mod config;
mod error;
#[cfg(test)]
mod tests;

pub(crate) use {
    app::App,
    command::Command,
    error::{AppError, Result as AppResult},
};

use crate::config::Config;

use tracing::error;
use tracing_subscriber::EnvFilter;

/// Application entry point.
fn main() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("longplay=debug,longplay_core=debug"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let command = match Command::parse(std::env::args().skip(1)) {
        Ok(cmd) => cmd,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    let config = match Config::load() {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to load config: {:?}", e);
            std::process::exit(1);
        }
    };

    let app = App { config };
    if let Err(e) = app.run(command) {
        error!(error = ?e, "Command failed");
        std::process::exit(1);
    }
}
