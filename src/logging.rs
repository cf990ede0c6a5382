//! Logging setup
//!
//! Builds a `tracing` dispatcher that writes timestamped, level-tagged lines
//! to the console and, optionally, appends them to a log file. The dispatcher
//! is returned to the caller instead of being installed globally; binaries run
//! their session inside `tracing::dispatcher::with_default`, and tests build
//! their own dispatcher around an in-memory writer.

use std::fs::OpenOptions;
use std::io;
use std::sync::Mutex;

use tracing::Dispatch;
use tracing_subscriber::fmt::{self, MakeWriter};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry};

use crate::config::Config;

/// Dispatcher logging to stderr plus the configured log file
pub fn build_dispatch(config: &Config) -> io::Result<Dispatch> {
    dispatch_with(config, io::stderr, true)
}

/// Same as [`build_dispatch`] but with the console output sent to `console`
/// (ANSI colors off), so callers can capture it.
pub fn build_dispatch_with_console<W>(config: &Config, console: W) -> io::Result<Dispatch>
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    dispatch_with(config, console, false)
}

fn dispatch_with<W>(config: &Config, console: W, ansi: bool) -> io::Result<Dispatch>
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    // RUST_LOG wins over the configured filter
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));

    let console_layer = fmt::layer()
        .with_writer(console)
        .with_ansi(ansi)
        .with_target(false);

    let file_layer = match &config.log_file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            Some(
                fmt::layer()
                    .with_writer(Mutex::new(file))
                    .with_ansi(false)
                    .with_target(false),
            )
        }
        None => None,
    };

    let subscriber = Registry::default()
        .with(filter)
        .with(console_layer)
        .with(file_layer);

    Ok(Dispatch::new(subscriber))
}
