//! `opentime serve` — run the HTTP API in the foreground.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use anyhow::{Context, Result};
use clap::Args;

use opentime_server::{start_blocking, LogFormat, ServerSettings, DEFAULT_PORT};

use super::RegistryArgs;

#[derive(Args, Debug)]
pub struct ServeArgs {
    /// TCP port to listen on.
    #[arg(long, short = 'p', default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Interface address to bind.
    #[arg(long, default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    pub bind: IpAddr,

    /// Emit logs as JSON lines.
    #[arg(long)]
    pub log_json: bool,

    #[command(flatten)]
    pub registry: RegistryArgs,
}

impl ServeArgs {
    pub fn run(self) -> Result<()> {
        // Validate before binding so a bad table never starts a server.
        let registry = self.registry.load()?;
        let settings = ServerSettings {
            bind: SocketAddr::new(self.bind, self.port),
            log_format: if self.log_json {
                LogFormat::Json
            } else {
                LogFormat::Text
            },
        };
        start_blocking(settings, registry).context("server exited with error")
    }
}
