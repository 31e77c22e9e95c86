mod app_config;
mod brief;
mod config;
mod run;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "infmix")]
#[command(about = "Match influencers to a campaign brief")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Select a budget-aware influencer mix and explain each pick
    Match {
        /// Campaign brief (YAML or JSON)
        #[arg(long)]
        brief: PathBuf,
        /// JSON array of candidate profiles; queries Firestore when omitted
        #[arg(long)]
        pool: Option<PathBuf>,
    },
    /// Score and rank the candidate pool without selecting a mix
    Rank {
        /// Campaign brief (YAML or JSON)
        #[arg(long)]
        brief: PathBuf,
        /// JSON array of candidate profiles; queries Firestore when omitted
        #[arg(long)]
        pool: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = config::load_app_config()?;

    // stdout carries the JSON report, so logs go to stderr.
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
    tracing::debug!(?config, "configuration loaded");

    match cli.command {
        Commands::Match { brief, pool } => run::run_match(&config, &brief, pool.as_deref()).await,
        Commands::Rank { brief, pool } => run::run_rank(&config, &brief, pool.as_deref()).await,
    }
}
