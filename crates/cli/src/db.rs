//! Database initialization and status

use amlguard_persistence::{AlertRepo, SqliteStore, TransactionRepo};
use anyhow::{Context, Result};
use std::path::Path;

fn database_url(db_path: &Path) -> String {
    format!("sqlite:{}", db_path.display())
}

/// Initialize the database with schema
pub async fn init_database(db_path: &Path, force: bool) -> Result<()> {
    if force && db_path.exists() {
        std::fs::remove_file(db_path).context("Failed to remove existing database")?;
        println!("🗑️  Removed existing database");
    }

    println!("📦 Creating schema...");
    let store = SqliteStore::connect(&database_url(db_path))
        .await
        .context("Failed to initialize database")?;

    store.pool().close().await;
    Ok(())
}

/// Show database status
pub async fn show_status(db_path: &Path) -> Result<()> {
    if !db_path.exists() {
        println!("❌ Database not found at {:?}", db_path);
        println!("   Run 'amlguard init' to create the database");
        return Ok(());
    }

    let store = connect(db_path).await?;

    println!("📊 Database Status");
    println!("   Path: {:?}", db_path);
    println!();

    let tx_count = TransactionRepo::count(store.pool()).await?;
    let flagged_count = TransactionRepo::get_suspicious(store.pool()).await?.len();
    let alert_count = AlertRepo::count(store.pool()).await?;

    println!("   Transactions: {}", tx_count);
    println!("   Flagged:      {}", flagged_count);
    println!("   Alerts:       {}", alert_count);

    store.pool().close().await;
    Ok(())
}

/// Open the store, creating the schema if needed
pub async fn connect(db_path: &Path) -> Result<SqliteStore> {
    SqliteStore::connect(&database_url(db_path))
        .await
        .context("Failed to connect to database")
}
