//! Database schema definitions
//!
//! Row types cho sqlx mapping từ SQLite tables, cùng với DDL.
//! Decimal và timestamp được lưu dạng TEXT.

use crate::error::{PersistenceError, PersistenceResult};
use amlguard_core::{Alert, Transaction, TransactionStatus};
use chrono::{DateTime, SecondsFormat, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use std::str::FromStr;

/// Row type cho bảng `transactions`
#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct TransactionRow {
    pub id: i64,
    pub account_number: String,
    pub amount: String, // Decimal stored as TEXT
    pub transaction_type: Option<String>,
    pub timestamp: String, // RFC 3339, fixed width
    pub suspicious: bool,
    pub suspicious_reason: String,
    pub status: String,
}

/// Row type cho bảng `alerts`
#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct AlertRow {
    pub id: i64,
    pub account_number: String,
    pub reason: String,
    pub timestamp: String,
    pub transaction_id: i64,
}

/// Create tables and indexes if they do not exist yet
pub async fn create_schema(pool: &SqlitePool) -> PersistenceResult<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS transactions (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            account_number TEXT NOT NULL,
            amount TEXT NOT NULL,
            transaction_type TEXT,
            timestamp TEXT NOT NULL,
            suspicious INTEGER NOT NULL DEFAULT 0,
            suspicious_reason TEXT NOT NULL DEFAULT '',
            status TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE INDEX IF NOT EXISTS idx_transactions_account_time
        ON transactions(account_number, timestamp)
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS alerts (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            account_number TEXT NOT NULL,
            reason TEXT NOT NULL,
            timestamp TEXT NOT NULL,
            transaction_id INTEGER NOT NULL,
            FOREIGN KEY (transaction_id) REFERENCES transactions(id)
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

// === Column encoding ===

/// Fixed-width UTC text, so lexical order in SQL equals time order
pub fn encode_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Nanos, true)
}

pub fn decode_timestamp(value: &str) -> PersistenceResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| PersistenceError::InvalidTimestamp(format!("{}: {}", value, e)))
}

pub fn decode_decimal(value: &str) -> PersistenceResult<Decimal> {
    Decimal::from_str(value).map_err(|e| PersistenceError::InvalidDecimal(format!("{}: {}", value, e)))
}

// === Conversion implementations ===

impl TryFrom<TransactionRow> for Transaction {
    type Error = PersistenceError;

    fn try_from(row: TransactionRow) -> Result<Self, Self::Error> {
        let status = TransactionStatus::from_str(&row.status)
            .map_err(|_| PersistenceError::invalid_enum("status", &row.status))?;

        Ok(Transaction {
            id: Some(row.id),
            account_number: row.account_number,
            amount: decode_decimal(&row.amount)?,
            transaction_type: row.transaction_type,
            timestamp: decode_timestamp(&row.timestamp)?,
            suspicious: row.suspicious,
            suspicious_reason: row.suspicious_reason,
            status,
        })
    }
}

impl TryFrom<AlertRow> for Alert {
    type Error = PersistenceError;

    fn try_from(row: AlertRow) -> Result<Self, Self::Error> {
        Ok(Alert {
            id: Some(row.id),
            account_number: row.account_number,
            reason: row.reason,
            timestamp: decode_timestamp(&row.timestamp)?,
            transaction_id: Some(row.transaction_id),
        })
    }
}
