//! FraudShield CLI
//!
//! Inspect the toolchain's configuration, YAML config files and saved
//! artifacts from the command line.
//!
//! Environment:
//!   RUST_LOG - Log level (default: info)

use clap::{Parser, Subcommand};
use eyre::Result;
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use fraudshield::utils::constants::{is_known_artifact, APP_NAME, APP_VERSION};
use fraudshield::{AppConfig, PersistenceUtils};

#[derive(Parser)]
#[command(name = "fraudshield", version, about = "Inspect fraud toolchain config and artifacts")]
struct Cli {
    /// Connection string for this run (replaces the empty placeholder)
    #[arg(long, global = true)]
    connection_string: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the resolved configuration
    Constants,
    /// Parse a YAML config file and print it back
    ReadYaml { path: PathBuf },
    /// Load a saved artifact and pretty-print its contents
    Inspect { path: PathBuf },
}

fn main() -> Result<()> {
    // Initialize logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse();

    let mut config = AppConfig::new();
    if let Some(connection_string) = cli.connection_string {
        config = config.with_connection_string(connection_string);
    }
    info!("{} v{} (connection: {})", APP_NAME, APP_VERSION, config.masked_connection_string());

    match cli.command {
        Command::Constants => {
            println!("{config}");
        }
        Command::ReadYaml { path } => {
            let mapping = PersistenceUtils::new().read_yaml_file(&path)?;
            info!("Parsed {} top-level keys from {}", mapping.len(), path.display());
            print!("{}", serde_yaml::to_string(&mapping)?);
        }
        Command::Inspect { path } => {
            let file_name = path.file_name().and_then(|n| n.to_str()).unwrap_or_default();
            if !is_known_artifact(file_name) {
                warn!("{} is not a known artifact name, inspecting anyway", path.display());
            }
            let artifact: serde_json::Value = PersistenceUtils::load_object(&path)?;
            println!("{}", serde_json::to_string_pretty(&artifact)?);
        }
    }

    Ok(())
}
