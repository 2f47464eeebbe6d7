//! Entry point for the teleprompter.
//!
//! Responsibilities here are intentionally minimal:
//! - Parse the optional script path from the command line.
//! - Load user configuration from `conf/config.toml`.
//! - Read the script via `script_loader`.
//! - Launch the GUI with the loaded script and config.

mod app;
mod config;
mod prompter;
mod script_loader;
mod segmenter;
mod session;

use crate::app::{InitialScript, run_app};
use crate::config::load_config;
use crate::script_loader::load_script;
use anyhow::{Context, Result};
use std::env;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt, prelude::*, reload};

type ReloadHandle = reload::Handle<EnvFilter, tracing_subscriber::Registry>;

static SIGINT_REQUESTED: AtomicBool = AtomicBool::new(false);

/// Returns true once after Ctrl+C was received.
pub(crate) fn take_sigint_requested() -> bool {
    SIGINT_REQUESTED.swap(false, Ordering::SeqCst)
}

fn main() {
    let reload_handle = init_tracing();
    if let Err(err) = run(&reload_handle) {
        error!("{err:?}");
        std::process::exit(1);
    }
}

fn run(reload_handle: &ReloadHandle) -> Result<()> {
    let script_path = parse_args();
    let config = load_config(Path::new("conf/config.toml"));
    set_log_level(reload_handle, config.log_level.as_filter_str());
    info!(
        level = %config.log_level,
        speed = config.speed,
        alignment = %config.alignment,
        max_line_length = config.max_line_length,
        "Starting teleprompter"
    );
    install_sigint_handler();

    let mut startup_error = None;
    let initial = match script_path {
        Some(path) => match load_script(&path) {
            Ok(text) => Some(InitialScript { path, text }),
            Err(err) => {
                warn!(path = %path.display(), "Failed to load script: {err:#}");
                startup_error = Some(format!("{err:#}"));
                None
            }
        },
        None => {
            info!("No script given; waiting for a path");
            None
        }
    };

    run_app(config, initial, startup_error).context("Failed to start the GUI")?;
    Ok(())
}

fn parse_args() -> Option<PathBuf> {
    env::args().nth(1).map(PathBuf::from)
}

fn install_sigint_handler() {
    if let Err(err) = ctrlc::set_handler(|| {
        info!("Received Ctrl+C; closing teleprompter");
        SIGINT_REQUESTED.store(true, Ordering::SeqCst);
    }) {
        warn!("Failed to install Ctrl+C signal handler: {err}");
    }
}

fn init_tracing() -> ReloadHandle {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    let (filter_layer, handle) = reload::Layer::new(env_filter);
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_filter(filter_layer),
        )
        .init();
    warn!("Logging initialized; override level with config.log_level or RUST_LOG");
    handle
}

fn set_log_level(handle: &ReloadHandle, level: &str) {
    let parsed = EnvFilter::builder()
        .parse(level)
        .unwrap_or_else(|_| EnvFilter::new("debug"));
    if let Err(err) = handle.modify(|filter| *filter = parsed.clone()) {
        warn!(%level, "Failed to update log level from config: {err}");
    } else {
        info!(%level, "Applied log level from config");
    }
}
