//! # booketl: scheduled book-metadata ETL
//!
//! This is the entry point for the `booketl` binary. It loads configuration,
//! wires the Google Books extractor and the SQLite store into a pipeline, and
//! runs it once or on a schedule.

mod config;

use self::config::{get_config, AppConfig};
use anyhow::Result;
use booketl::{run_scheduled, BookStore, Pipeline, SqliteBookStore};
use booketl_google_books::GoogleBooksExtractor;
use clap::{Parser, Subcommand};
use std::path::Path;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

// --- CLI Definition ---

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Path to a YAML config file. Defaults to `booketl.yml` if present.
    #[arg(long, global = true, env = "BOOKETL_CONFIG")]
    config: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run one extract-and-load batch and exit
    Run,
    /// Run a batch every interval, retrying failed runs
    Schedule(ScheduleArgs),
    /// Create the destination table if it does not exist
    InitDb,
}

#[derive(Parser, Debug)]
struct ScheduleArgs {
    /// Stop after this many intervals instead of running forever.
    #[arg(long)]
    max_runs: Option<usize>,
}

// --- Main Application Entry ---

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();
    let config = get_config(cli.config.as_deref())?;

    match &cli.command {
        Commands::Run => {
            let pipeline = build_pipeline(&config).await?;
            let summary = pipeline.run().await?;
            println!(
                "✅ Loaded {} of {} extracted books from {}.",
                summary.rows_inserted, summary.extracted, summary.source
            );
        }
        Commands::Schedule(args) => {
            let pipeline = build_pipeline(&config).await?;
            let schedule = config.schedule();
            info!(
                "Scheduling runs every {:?} (max runs: {:?}).",
                schedule.interval, args.max_runs
            );
            let succeeded =
                run_scheduled(&pipeline, schedule, config.retry_policy(), args.max_runs).await;
            println!("Scheduler stopped after {succeeded} successful runs.");
        }
        Commands::InitDb => {
            let store = open_store(&config.db_url).await?;
            store.ensure_table().await?;
            println!("✅ Destination table is ready in '{}'.", config.db_url);
        }
    }

    Ok(())
}

async fn build_pipeline(config: &AppConfig) -> Result<Pipeline> {
    let extractor = GoogleBooksExtractor::with_base_url(
        &config.api_url,
        config.query.clone(),
        config.request_timeout(),
    )?;
    let store = open_store(&config.db_url).await?;
    Ok(Pipeline::new(Box::new(extractor), Box::new(store)))
}

async fn open_store(db_url: &str) -> Result<SqliteBookStore> {
    if db_url != ":memory:" {
        if let Some(parent) = Path::new(db_url).parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
    }
    Ok(SqliteBookStore::new(db_url).await?)
}
