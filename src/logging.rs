//! Logger setup shared by every binary.
//!
//! The games draw over the whole terminal, so log lines on stderr would tear
//! the picture. Logging is off unless `RUST_LOG` asks for it, and
//! `ARCADE_LOG_FILE` redirects it to a file (default level `info` then).

use std::env;
use std::fs::OpenOptions;

use anyhow::{Context, Result};
use env_logger::{Builder, Env, Target};

pub const LOG_FILE_VAR: &str = "ARCADE_LOG_FILE";

pub fn init() -> Result<()> {
    let log_file = env::var_os(LOG_FILE_VAR).filter(|p| !p.is_empty());
    let default_filter = if log_file.is_some() { "info" } else { "off" };

    let mut builder = Builder::from_env(Env::default().default_filter_or(default_filter));
    if let Some(path) = log_file {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("failed to open log file {}", path.to_string_lossy()))?;
        builder.target(Target::Pipe(Box::new(file)));
    }
    builder
        .try_init()
        .context("logger was already initialised")?;
    Ok(())
}
