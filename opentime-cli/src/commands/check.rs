//! `opentime check <id>` — evaluate one window.

use anyhow::{bail, Context, Result};
use clap::Args;

use opentime_core::{MinuteOfDay, RegistryError};
use opentime_server::not_found_message;

use super::list::status_label;
use super::{clock_for, RegistryArgs};

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Window id (e.g. "carrier-change").
    pub id: String,

    /// Evaluate at this time of day (H:MM) instead of now.
    #[arg(long, value_name = "H:MM")]
    pub at: Option<MinuteOfDay>,

    /// Emit the same JSON as `GET /api/v1/open-time/<id>`.
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub registry: RegistryArgs,
}

impl CheckArgs {
    pub fn run(self) -> Result<()> {
        let registry = self.registry.load()?;
        let now = clock_for(self.at).now();

        let evaluation = match registry.evaluate(&self.id, &now) {
            Ok(evaluation) => evaluation,
            Err(RegistryError::NotFound { id }) => bail!(not_found_message(&id)),
            Err(err) => return Err(err).context("evaluation failed"),
        };

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&evaluation)
                    .context("failed to serialize evaluation JSON")?
            );
            return Ok(());
        }

        let status = &evaluation.status;
        println!(
            "{} ({}) {} [{} - {}] at {}",
            status.parameter,
            status.title,
            status_label(status.is_open),
            status.start_time,
            status.end_time,
            evaluation.current_time,
        );
        Ok(())
    }
}
