//! Screen commands

use amlguard_core::{Transaction, TransactionRequest};
use amlguard_screening::{ScreeningConfig, ScreeningService};
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use std::path::Path;
use std::sync::Arc;

use crate::db;

/// Screen one transaction given on the command line
pub async fn screen_one(
    db_path: &Path,
    config: &ScreeningConfig,
    account_number: &str,
    amount: Decimal,
    transaction_type: Option<String>,
    at: Option<DateTime<Utc>>,
    dry_run: bool,
) -> Result<()> {
    let store = db::connect(db_path).await?;
    let service = ScreeningService::new(Arc::new(store), config);

    let request = TransactionRequest {
        account_number: Some(account_number.to_string()),
        amount: Some(amount),
        transaction_type,
        timestamp: at,
    };

    let tx = if dry_run {
        service.preview(request).await?
    } else {
        service.screen(request).await?
    };

    print_result(&tx, dry_run);
    Ok(())
}

/// Screen a JSON array of requests in file order
pub async fn screen_batch(db_path: &Path, config: &ScreeningConfig, file: &Path) -> Result<()> {
    let content = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read {:?}", file))?;
    let requests: Vec<TransactionRequest> =
        serde_json::from_str(&content).context("Batch file must be a JSON array of transactions")?;

    let store = db::connect(db_path).await?;
    let service = ScreeningService::new(Arc::new(store), config);

    println!("🔍 Screening {} transactions from {:?}", requests.len(), file);

    let mut flagged = 0;
    let mut cleared = 0;
    let mut rejected = 0;

    for (index, request) in requests.into_iter().enumerate() {
        match service.screen(request).await {
            Ok(tx) if tx.suspicious => {
                flagged += 1;
                println!("   #{:<4} 🚩 {}  {}", index + 1, tx, tx.suspicious_reason);
            }
            Ok(_) => cleared += 1,
            Err(e) if e.is_validation() => {
                rejected += 1;
                println!("   #{:<4} ❌ {}", index + 1, e);
            }
            Err(e) => return Err(e).context(format!("Screening aborted at entry #{}", index + 1)),
        }
    }

    println!();
    println!("   Flagged:  {}", flagged);
    println!("   Cleared:  {}", cleared);
    println!("   Rejected: {}", rejected);
    Ok(())
}

fn print_result(tx: &Transaction, dry_run: bool) {
    let header = if dry_run { "🧪 Dry run" } else { "💾 Screened" };
    println!("{}: {}", header, tx);
    println!("   Timestamp:  {}", tx.timestamp.to_rfc3339());
    println!("   Status:     {}", tx.status);
    if tx.suspicious {
        println!("   Reason:     {}", tx.suspicious_reason);
        if !dry_run {
            println!("   🚨 Alert raised for account {}", tx.account_number);
        }
    }
}
