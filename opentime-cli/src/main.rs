//! opentime — report whether named time-of-day windows are open.
//!
//! # Usage
//!
//! ```text
//! opentime serve [--port 9080] [--bind 0.0.0.0] [--config windows.yaml] [--log-json]
//! opentime list [--config windows.yaml] [--at H:MM] [--json]
//! opentime check <id> [--config windows.yaml] [--at H:MM] [--json]
//! ```

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{check::CheckArgs, list::ListArgs, serve::ServeArgs};

#[derive(Parser, Debug)]
#[command(
    name = "opentime",
    version,
    about = "Report whether named time-of-day windows are currently open",
    long_about = None,
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API.
    Serve(ServeArgs),

    /// Show every window and whether it is open.
    List(ListArgs),

    /// Evaluate a single window by id.
    Check(CheckArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Serve(args) => args.run(),
        Commands::List(args) => args.run(),
        Commands::Check(args) => args.run(),
    }
}
