use crate::config::AppConfig;
use crate::utils::error::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "devpanel")]
#[command(about = "Addition calculator and connected Android device list")]
pub struct CliConfig {
    /// TOML file with a [bridge] section
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON lines")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Add two numbers the way the calculator panel does
    Add {
        /// First field; omitted means empty
        #[arg(allow_negative_numbers = true)]
        first: Option<String>,
        /// Second field; omitted means empty
        #[arg(allow_negative_numbers = true)]
        second: Option<String>,
        /// Print the result variant as JSON
        #[arg(long)]
        json: bool,
    },
    /// List connected devices
    Devices {
        /// Print the device records as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the device-bridge executable that would be run
    BridgePath,
}

impl CliConfig {
    /// Loads `--config` if given, defaults otherwise.
    pub fn app_config(&self) -> Result<AppConfig> {
        match &self.config {
            Some(path) => {
                tracing::debug!("Loading configuration from {}", path.display());
                AppConfig::from_file(path)
            }
            None => Ok(AppConfig::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_add_with_negative_numbers() {
        let cli = CliConfig::try_parse_from(["devpanel", "add", "-2", "3.5"]).unwrap();
        match cli.command {
            Command::Add { first, second, json } => {
                assert_eq!(first.as_deref(), Some("-2"));
                assert_eq!(second.as_deref(), Some("3.5"));
                assert!(!json);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_parse_add_defaults_to_empty_fields() {
        let cli = CliConfig::try_parse_from(["devpanel", "add"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Add { first: None, second: None, json: false }
        ));
    }

    #[test]
    fn test_parse_devices_with_global_flags() {
        let cli = CliConfig::try_parse_from(["devpanel", "devices", "--json", "-v", "--config", "panel.toml"]).unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.config, Some(PathBuf::from("panel.toml")));
        assert!(matches!(cli.command, Command::Devices { json: true }));
    }

    #[test]
    fn test_missing_config_file_is_io_error() {
        let cli = CliConfig::try_parse_from(["devpanel", "--config", "/no/such/devpanel.toml", "bridge-path"]).unwrap();
        assert!(cli.app_config().is_err());
    }
}
