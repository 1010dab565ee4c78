use anyhow::Context;
use clap::Parser;
use devpanel::config::{AppConfig, Command};
use devpanel::core::labels;
use devpanel::utils::error::{ErrorSeverity, PanelError};
use devpanel::utils::{logger, output, validation::Validate};
use devpanel::{derive, AdbBridge, CliConfig, DeviceListState, DevicePanel};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }
    tracing::debug!("CLI config: {:?}", cli);

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration failed: {} (Category: {:?})", e, e.category());
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(exit_code(e.severity()));
        }
    };

    match cli.command {
        Command::Add { first, second, json } => {
            let first = first.unwrap_or_default();
            let second = second.unwrap_or_default();
            let result = derive(&first, &second);
            if json {
                println!("{}", output::encode_json(&result, false).context("encoding result")?);
            } else {
                println!("{}", labels::CALCULATOR_TITLE);
                println!(
                    "  {} + {}",
                    shown_or(&first, labels::FIRST_PLACEHOLDER),
                    shown_or(&second, labels::SECOND_PLACEHOLDER)
                );
                println!("  {result}");
            }
        }
        Command::Devices { json } => {
            let mut panel = DevicePanel::open(AdbBridge::new(config.bridge));
            let state = panel.wait_for_refresh().await.clone();

            if let DeviceListState::Failed(message) = &state {
                eprintln!("{message}");
                std::process::exit(exit_code(ErrorSeverity::Medium));
            }

            if json {
                let encoded = output::encode_json(state.records(), true).context("encoding devices")?;
                println!("{encoded}");
            } else {
                println!("{}", labels::DEVICE_PANEL_TITLE);
                for line in panel.body_lines() {
                    println!("  {line}");
                }
            }
        }
        Command::BridgePath => {
            let bridge = AdbBridge::new(config.bridge);
            println!("{}", bridge.resolved_path().display());
        }
    }

    Ok(())
}

fn load_config(cli: &CliConfig) -> Result<AppConfig, PanelError> {
    let config = cli.app_config()?;
    config.validate()?;
    Ok(config)
}

/// Empty fields show their placeholder, as in the panel.
fn shown_or<'a>(text: &'a str, placeholder: &'a str) -> &'a str {
    if text.is_empty() {
        placeholder
    } else {
        text
    }
}

fn exit_code(severity: ErrorSeverity) -> i32 {
    match severity {
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    }
}
