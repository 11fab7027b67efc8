//! Signal-initiated shutdown.
//!
//! The OS handler never touches the terminal. It only raises a flag; the loop
//! that owns the terminal sees the flag, returns normally and restores the
//! terminal on the same path a quit key takes.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::{Context, Result};
use log::info;

/// Shared "please stop" flag.
#[derive(Debug, Clone, Default)]
pub struct ShutdownSignal {
    requested: Arc<AtomicBool>,
}

impl ShutdownSignal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a signal wired to SIGINT, SIGTERM and SIGHUP.
    ///
    /// Can only be called once per process.
    pub fn install() -> Result<Self> {
        let signal = Self::new();
        let handle = signal.clone();
        ctrlc::set_handler(move || {
            handle.request();
        })
        .context("failed to install signal handler")?;
        Ok(signal)
    }

    pub fn request(&self) {
        if !self.requested.swap(true, Ordering::SeqCst) {
            info!("shutdown requested");
        }
    }

    pub fn is_requested(&self) -> bool {
        self.requested.load(Ordering::SeqCst)
    }
}
