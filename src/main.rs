//! plantwatch: a terminal dashboard for plant soil moisture sensors
//!
//! Shows live readings from a two-sensor moisture endpoint, a per-plant
//! detail view, and a settings view for editing each plant's acceptable
//! moisture range and photo reference.

mod app;
mod cli;
mod data;
mod settings;
mod ui;

use anyhow::Result;
use cli::{AppConfig, Cli, Commands};

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse_args();

    match cli.command {
        Commands::Watch {
            endpoint,
            store_path,
        } => {
            let config = AppConfig::from_watch_command(endpoint, store_path);

            // Run the TUI application
            app::run(config)?;
        }
    }

    Ok(())
}
