//! Listing and configuration commands

use amlguard_persistence::TransactionStore;
use amlguard_screening::ScreeningConfig;
use anyhow::Result;
use std::path::Path;

use crate::db;

/// List transactions, optionally only the flagged ones
pub async fn list_transactions(db_path: &Path, suspicious_only: bool, json: bool) -> Result<()> {
    let store = db::connect(db_path).await?;
    let transactions = if suspicious_only {
        store.find_suspicious().await?
    } else {
        store.find_all().await?
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&transactions)?);
        return Ok(());
    }

    if transactions.is_empty() {
        println!("No transactions found.");
        return Ok(());
    }

    println!(
        "{:<6} {:<14} {:<12} {:>14} {:<8} {:<25} {}",
        "ID", "Account", "Type", "Amount", "Status", "Timestamp", "Reason"
    );
    println!("{}", "-".repeat(100));
    for tx in &transactions {
        println!(
            "{:<6} {:<14} {:<12} {:>14} {:<8} {:<25} {}",
            tx.id.unwrap_or_default(),
            tx.account_number,
            tx.transaction_type.as_deref().unwrap_or("-"),
            tx.amount,
            tx.status,
            tx.timestamp.format("%Y-%m-%d %H:%M:%S"),
            tx.suspicious_reason
        );
    }
    println!("\n{} transaction(s)", transactions.len());
    Ok(())
}

/// List alerts
pub async fn list_alerts(db_path: &Path, json: bool) -> Result<()> {
    let store = db::connect(db_path).await?;
    let alerts = store.find_alerts().await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&alerts)?);
        return Ok(());
    }

    if alerts.is_empty() {
        println!("No alerts raised.");
        return Ok(());
    }

    println!("🚨 Alerts");
    for alert in &alerts {
        println!(
            "   #{} [{}] account {} (transaction {}): {}",
            alert.id.unwrap_or_default(),
            alert.timestamp.format("%Y-%m-%d %H:%M:%S"),
            alert.account_number,
            alert.transaction_id.unwrap_or_default(),
            alert.reason
        );
    }
    Ok(())
}

/// Print the effective configuration as JSON
pub fn print_config(config: &ScreeningConfig) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(config)?);
    Ok(())
}
