pub mod check;
pub mod list;
pub mod serve;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use opentime_core::{Clock, FixedClock, MinuteOfDay, SystemClock, WindowRegistry};

/// Where the window table comes from.
#[derive(Args, Debug)]
pub struct RegistryArgs {
    /// YAML window table; the built-in table is used when omitted.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl RegistryArgs {
    pub fn load(&self) -> Result<WindowRegistry> {
        match &self.config {
            Some(path) => WindowRegistry::load_at(path)
                .with_context(|| format!("failed to load window table from {}", path.display())),
            None => WindowRegistry::builtin().context("built-in window table is invalid"),
        }
    }
}

/// Pinned clock for `--at`, otherwise the local wall clock.
pub fn clock_for(at: Option<MinuteOfDay>) -> Box<dyn Clock> {
    match at {
        Some(minute) => Box::new(FixedClock::at_minute(minute)),
        None => Box::new(SystemClock),
    }
}
