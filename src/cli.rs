//! Command-line interface argument parsing for plantwatch.
//!
//! - `plantwatch watch`
//! - `plantwatch watch --endpoint "http://192.168.1.10:5000/moisture"`
//! - `plantwatch watch --store-path /tmp/plantwatch`

use clap::{Parser, Subcommand};

use crate::data::DEFAULT_ENDPOINT;

/// A terminal dashboard for monitoring plant soil moisture sensors.
#[derive(Parser, Debug)]
#[command(name = "plantwatch")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Launch the TUI dashboard showing live moisture readings
    Watch {
        /// Address of the moisture endpoint
        /// Defaults to the sensor bridge on the local network
        #[arg(short, long)]
        endpoint: Option<String>,

        /// Directory holding the persisted plant settings
        /// Defaults to ~/.local/share/plantwatch/
        #[arg(long)]
        store_path: Option<String>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub endpoint: String,
    pub store_dir: std::path::PathBuf,
}

impl AppConfig {
    /// Create AppConfig from CLI Commands
    pub fn from_watch_command(endpoint: Option<String>, store_path: Option<String>) -> Self {
        // Determine the endpoint: flag, then environment, then the default
        let endpoint = endpoint
            .or_else(|| std::env::var("PLANTWATCH_ENDPOINT").ok())
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

        // Determine the settings directory
        let store_dir = store_path
            .map(std::path::PathBuf::from)
            .unwrap_or_else(|| {
                if let Ok(dir) = std::env::var("PLANTWATCH_DIR") {
                    std::path::PathBuf::from(dir)
                } else {
                    dirs::home_dir()
                        .unwrap_or_else(|| std::path::PathBuf::from("."))
                        .join(".local")
                        .join("share")
                        .join("plantwatch")
                }
            });

        AppConfig {
            endpoint,
            store_dir,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::from_watch_command(None, None);
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert!(config.store_dir.ends_with("plantwatch"));
    }

    #[test]
    fn test_explicit_flags_win() {
        let config = AppConfig::from_watch_command(
            Some("http://10.0.0.5:5000/moisture".to_string()),
            Some("/tmp/plantwatch-test".to_string()),
        );
        assert_eq!(config.endpoint, "http://10.0.0.5:5000/moisture");
        assert_eq!(
            config.store_dir,
            std::path::PathBuf::from("/tmp/plantwatch-test")
        );
    }
}
