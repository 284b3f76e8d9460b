use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use prompter_core::AppConfig;

mod commands;

#[derive(Parser)]
#[command(name = "prompter")]
#[command(author, version, about = "Animated text presentation for the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive presenter
    Run {
        /// Script file whose lines are fed to the presenter in order
        #[arg(short, long)]
        script: Option<PathBuf>,
        /// Interval between scripted lines in milliseconds
        #[arg(long, default_value_t = 1500)]
        script_interval_ms: u64,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Write the default configuration file
    Init,
    /// Print the configuration file path
    Path,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let cli = Cli::parse();

    // Load configuration
    let config = Arc::new(AppConfig::load()?);

    match cli.command {
        Some(Commands::Run {
            script,
            script_interval_ms,
        }) => commands::run::run(config, script, script_interval_ms).await,
        Some(Commands::Config { action }) => match action {
            ConfigAction::Init => commands::config::init(&config),
            ConfigAction::Path => commands::config::path(),
        },
        None => commands::run::run(config, None, 1500).await,
    }
}
