mod commands;
mod config;

use clap::{Parser, Subcommand};
use commands::ReviewArgs;
use config::Config;
use std::env;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Environment variable holding a `tracing` filter directive.
const LOG_ENV: &str = "PROOFDESK_LOG";

#[derive(Parser)]
#[command(name = "proofdesk", about = "Editorial review of proofread articles", version)]
struct Cli {
    /// Output in JSON format
    #[arg(long, global = true)]
    json: bool,

    /// Configuration file (defaults to ./proofdesk.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the article as it reads with accepted and modified issues applied
    Preview {
        #[command(flatten)]
        review: ReviewArgs,

        /// Print only the reconciled text
        #[arg(long)]
        plain: bool,
    },

    /// Count issues by review status
    Stats {
        #[command(flatten)]
        review: ReviewArgs,
    },

    /// List issues with optional filters
    Issues {
        #[command(flatten)]
        review: ReviewArgs,

        /// Filter by severity (critical, warning, info)
        #[arg(long)]
        severity: Option<String>,

        /// Filter by engine (ai, deterministic)
        #[arg(long)]
        engine: Option<String>,

        /// Filter by effective status (pending, accepted, rejected, modified)
        #[arg(long)]
        status: Option<String>,

        /// Group issues by severity
        #[arg(long)]
        group: bool,
    },
}

fn init_logging(config: &Config) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(&config.log.filter));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let cwd = env::current_dir()?;
    let config = Config::resolve(cli.config.as_deref(), &cwd)?;
    init_logging(&config);
    debug!(?config, "configuration resolved");

    match cli.command {
        Commands::Preview { review, plain } => {
            commands::preview::run(review, plain, cli.json, &config.preview)
        }
        Commands::Stats { review } => commands::stats::run(review, cli.json),
        Commands::Issues {
            review,
            severity,
            engine,
            status,
            group,
        } => commands::issues::run(review, severity, engine, status, group, cli.json),
    }
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}
