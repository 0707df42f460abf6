use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod bell;
mod commands;

#[derive(Parser)]
#[command(name = "circuitroom", version, about = "Circuit-training interval timers")]
struct Cli {
    /// Log filter, e.g. "circuitroom=debug"
    #[arg(long, default_value = "circuitroom=warn")]
    log: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run an interactive timer session
    Run {
        /// Catalog TOML to seed from (default: config, then the built-in circuit)
        #[arg(long)]
        catalog: Option<PathBuf>,
        /// Disable the completion chime for this session
        #[arg(long)]
        silent: bool,
    },
    /// Seed catalog management
    Catalog {
        #[command(subcommand)]
        action: commands::catalog::CatalogAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Completion chime
    Chime {
        #[command(subcommand)]
        action: commands::chime::ChimeAction,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(cli.log.clone())
        .init();

    let result = match cli.command {
        Commands::Run { catalog, silent } => commands::run::run(catalog, silent).await,
        Commands::Catalog { action } => commands::catalog::run(action),
        Commands::Config { action } => commands::config::run(action),
        Commands::Chime { action } => commands::chime::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
