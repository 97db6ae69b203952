use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use starlit_core::AppConfig;

mod commands;

#[derive(Parser)]
#[command(name = "starlit")]
#[command(author, version, about = "An animated landing page for your terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Page content file (TOML); defaults to the built-in page
    #[arg(short = 'c', long = "content")]
    content: Option<PathBuf>,

    /// Theme for this session (see `starlit themes`)
    #[arg(short = 't', long = "theme")]
    theme: Option<String>,

    /// Particle field seed, for a reproducible backdrop
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the page (the default when no command is given)
    Run,
    /// List the built-in themes
    Themes,
    /// Inspect or create the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the active configuration as TOML
    Show,
    /// Write the default configuration to the config path
    Init,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let mut config = AppConfig::load().context("failed to load configuration")?;

    // Session-only theme override
    if let Some(name) = cli.theme {
        config.ui.theme.name = name;
    }

    init_logging(&config)?;

    match cli.command {
        Some(Commands::Run) | None => commands::run::run(config, cli.content, cli.seed),
        Some(Commands::Themes) => commands::themes::run(&config),
        Some(Commands::Config { action }) => match action {
            ConfigAction::Show => commands::config::show(&config),
            ConfigAction::Init => commands::config::init(),
        },
    }
}

/// Initialize logging. Output goes to a file under the data directory;
/// the terminal itself belongs to the UI.
fn init_logging(config: &AppConfig) -> Result<()> {
    let log_path = config.log_path();
    if let Some(parent) = log_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let log_file = std::fs::File::options()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("failed to open log file at {}", log_path.display()))?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| config.general.log_level.clone()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(log_file),
        )
        .init();

    Ok(())
}
