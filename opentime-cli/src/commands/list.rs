//! `opentime list` — every window with its open state.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use tabled::{settings::Style, Table, Tabled};

use opentime_core::{MinuteOfDay, WindowStatus};

use super::{clock_for, RegistryArgs};

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Evaluate at this time of day (H:MM) instead of now.
    #[arg(long, value_name = "H:MM")]
    pub at: Option<MinuteOfDay>,

    /// Emit the same JSON as `GET /api/v1/open-time`.
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub registry: RegistryArgs,
}

#[derive(Tabled)]
struct WindowRow {
    #[tabled(rename = "id")]
    id: String,
    #[tabled(rename = "title")]
    title: String,
    #[tabled(rename = "window")]
    window: String,
    #[tabled(rename = "status")]
    status: String,
}

impl ListArgs {
    pub fn run(self) -> Result<()> {
        let registry = self.registry.load()?;
        let now = clock_for(self.at).now();
        let listing = registry.listing(&now);

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&listing).context("failed to serialize listing JSON")?
            );
            return Ok(());
        }

        println!("current time: {}", listing.current_time.bold());
        if listing.settings.is_empty() {
            println!("No windows registered.");
            return Ok(());
        }

        let rows: Vec<WindowRow> = listing.settings.into_iter().map(row).collect();
        let mut table = Table::new(rows);
        table.with(Style::rounded());
        println!("{table}");
        Ok(())
    }
}

fn row(status: WindowStatus) -> WindowRow {
    WindowRow {
        window: format!("{} - {}", status.start_time, status.end_time),
        status: status_label(status.is_open),
        id: status.parameter,
        title: status.title,
    }
}

pub(crate) fn status_label(is_open: bool) -> String {
    if is_open {
        "OPEN".green().bold().to_string()
    } else {
        "CLOSED".red().bold().to_string()
    }
}
