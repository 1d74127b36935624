use cityweather_core::Units;
use clap::{Parser, Subcommand};

use crate::interactive;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "cityweather", version, about = "City weather lookup in the terminal")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeatherMap API key in the platform config file.
    Configure,

    /// Look up one city and print the report, skipping the interactive loop.
    Show {
        /// City name, e.g. "Paris" or "New York".
        city: String,

        /// Unit system: "metric" (°C, m/s) or "imperial" (°F, mph).
        #[arg(long, default_value = "metric")]
        units: Units,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Some(Command::Configure) => interactive::configure(),
            Some(Command::Show { city, units }) => interactive::show_once(&city, units).await,
            None => interactive::run_widget().await,
        }
    }
}
