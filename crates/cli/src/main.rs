//! Amlguard CLI - AML transaction screening from the command line
//!
//! Usage:
//! ```bash
//! amlguard init
//! amlguard screen ACC_001 15000 --type DEPOSIT
//! amlguard screen ACC_001 200 --type WITHDRAWAL --dry-run
//! amlguard batch transactions.json
//! amlguard list --suspicious
//! amlguard alerts
//! amlguard config --config screening.json
//! ```

use anyhow::Result;
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod db;

use commands::{report, screen};

/// Amlguard - screens account transactions for money-laundering indicators
#[derive(Parser)]
#[command(name = "amlguard")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Database file path
    #[arg(long, default_value = "data/amlguard.db", global = true)]
    pub db: PathBuf,

    /// Screening configuration (JSON); defaults apply when omitted
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log every rule decision (same as RUST_LOG=debug)
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize database with schema
    Init {
        /// Force re-initialization (drops existing data)
        #[arg(long)]
        force: bool,
    },

    /// Screen a single transaction
    Screen {
        /// Account number (e.g., ACC_001)
        account_number: String,
        /// Transaction amount
        amount: Decimal,
        /// Transaction type (DEPOSIT, WITHDRAWAL, TRANSFER, ...)
        #[arg(long = "type", short = 't')]
        transaction_type: Option<String>,
        /// Transaction time (RFC 3339); defaults to now
        #[arg(long)]
        at: Option<DateTime<Utc>>,
        /// Evaluate without persisting
        #[arg(long)]
        dry_run: bool,
    },

    /// Screen every transaction in a JSON array file, in order
    Batch {
        /// Path to a JSON file of transaction requests
        file: PathBuf,
    },

    /// List screened transactions
    List {
        /// Only transactions flagged as suspicious
        #[arg(long)]
        suspicious: bool,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// List alerts
    Alerts {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Print the effective screening configuration
    Config,

    /// Show database status
    Status,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    // Ensure data directory exists
    if let Some(parent) = cli.db.parent() {
        std::fs::create_dir_all(parent).ok();
    }

    let config = commands::load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Init { force } => {
            db::init_database(&cli.db, force).await?;
            println!("✅ Database initialized at {:?}", cli.db);
        }

        Commands::Status => {
            db::show_status(&cli.db).await?;
        }

        Commands::Screen {
            account_number,
            amount,
            transaction_type,
            at,
            dry_run,
        } => {
            screen::screen_one(
                &cli.db,
                &config,
                &account_number,
                amount,
                transaction_type,
                at,
                dry_run,
            )
            .await?;
        }

        Commands::Batch { file } => {
            screen::screen_batch(&cli.db, &config, &file).await?;
        }

        Commands::List { suspicious, json } => {
            report::list_transactions(&cli.db, suspicious, json).await?;
        }

        Commands::Alerts { json } => {
            report::list_alerts(&cli.db, json).await?;
        }

        Commands::Config => {
            report::print_config(&config)?;
        }
    }

    Ok(())
}
