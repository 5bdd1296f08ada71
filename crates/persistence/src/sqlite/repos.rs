//! Repository implementations cho SQLite
//!
//! Mỗi repo nhận một sqlx executor, nên dùng được với cả pool
//! lẫn một database transaction đang mở.

use crate::error::{PersistenceError, PersistenceResult};
use crate::sqlite::schema::*;
use amlguard_core::{Alert, Transaction};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Executor, Sqlite, SqlitePool};
use std::str::FromStr;

// ============================================================================
// Transaction Repository
// ============================================================================

/// Repository cho transactions table
pub struct TransactionRepo;

impl TransactionRepo {
    /// Thêm transaction mới, trả về id được cấp
    pub async fn insert<'e, E>(executor: E, tx: &Transaction) -> PersistenceResult<i64>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let result = sqlx::query(
            r#"
            INSERT INTO transactions (account_number, amount, transaction_type, timestamp, suspicious, suspicious_reason, status)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&tx.account_number)
        .bind(tx.amount.to_string())
        .bind(&tx.transaction_type)
        .bind(encode_timestamp(&tx.timestamp))
        .bind(tx.suspicious)
        .bind(&tx.suspicious_reason)
        .bind(tx.status.as_str())
        .execute(executor)
        .await?;
        Ok(result.last_insert_rowid())
    }

    /// Lấy tất cả transactions theo thứ tự id
    pub async fn get_all(pool: &SqlitePool) -> PersistenceResult<Vec<Transaction>> {
        let rows = sqlx::query_as::<_, TransactionRow>("SELECT * FROM transactions ORDER BY id")
            .fetch_all(pool)
            .await?;
        rows.into_iter().map(Transaction::try_from).collect()
    }

    /// Lấy transactions bị đánh dấu suspicious
    pub async fn get_suspicious(pool: &SqlitePool) -> PersistenceResult<Vec<Transaction>> {
        let rows = sqlx::query_as::<_, TransactionRow>(
            "SELECT * FROM transactions WHERE suspicious = 1 ORDER BY id",
        )
        .fetch_all(pool)
        .await?;
        rows.into_iter().map(Transaction::try_from).collect()
    }

    /// Transactions của account có timestamp > after
    pub async fn get_recent_by_account(
        pool: &SqlitePool,
        account_number: &str,
        after: DateTime<Utc>,
    ) -> PersistenceResult<Vec<Transaction>> {
        let rows = sqlx::query_as::<_, TransactionRow>(
            "SELECT * FROM transactions WHERE account_number = ? AND timestamp > ? ORDER BY timestamp",
        )
        .bind(account_number)
        .bind(encode_timestamp(&after))
        .fetch_all(pool)
        .await?;
        rows.into_iter().map(Transaction::try_from).collect()
    }

    /// Có transaction cùng account, cùng type, đúng amount, timestamp > after không
    pub async fn exists_matching(
        pool: &SqlitePool,
        account_number: &str,
        transaction_type: &str,
        amount: Decimal,
        after: DateTime<Utc>,
    ) -> PersistenceResult<bool> {
        // Amounts are TEXT with caller-chosen scale ("200" vs "200.00"),
        // so equality is decided on the decoded Decimal.
        let amounts: Vec<String> = sqlx::query_scalar(
            r#"
            SELECT amount FROM transactions
            WHERE account_number = ? AND UPPER(transaction_type) = UPPER(?) AND timestamp > ?
            "#,
        )
        .bind(account_number)
        .bind(transaction_type)
        .bind(encode_timestamp(&after))
        .fetch_all(pool)
        .await?;

        for stored in &amounts {
            if decode_decimal(stored)? == amount {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Đếm transactions
    pub async fn count(pool: &SqlitePool) -> PersistenceResult<i64> {
        let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM transactions")
            .fetch_one(pool)
            .await?;
        Ok(row.0)
    }
}

// ============================================================================
// Alert Repository
// ============================================================================

/// Repository cho alerts table
pub struct AlertRepo;

impl AlertRepo {
    /// Thêm alert mới, trả về id được cấp
    pub async fn insert<'e, E>(executor: E, alert: &Alert) -> PersistenceResult<i64>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let transaction_id = alert.transaction_id.ok_or_else(|| {
            PersistenceError::Integrity("alert has no originating transaction".to_string())
        })?;

        let result = sqlx::query(
            "INSERT INTO alerts (account_number, reason, timestamp, transaction_id) VALUES (?, ?, ?, ?)",
        )
        .bind(&alert.account_number)
        .bind(&alert.reason)
        .bind(encode_timestamp(&alert.timestamp))
        .bind(transaction_id)
        .execute(executor)
        .await?;
        Ok(result.last_insert_rowid())
    }

    /// Lấy tất cả alerts theo thứ tự id
    pub async fn get_all(pool: &SqlitePool) -> PersistenceResult<Vec<Alert>> {
        let rows = sqlx::query_as::<_, AlertRow>("SELECT * FROM alerts ORDER BY id")
            .fetch_all(pool)
            .await?;
        rows.into_iter().map(Alert::try_from).collect()
    }

    /// Đếm alerts
    pub async fn count(pool: &SqlitePool) -> PersistenceResult<i64> {
        let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM alerts")
            .fetch_one(pool)
            .await?;
        Ok(row.0)
    }
}

// ============================================================================
// Database initialization
// ============================================================================

/// Tạo database mới (nếu chưa có) với schema
pub async fn init_database(database_url: &str) -> PersistenceResult<SqlitePool> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePool::connect_with(options).await?;
    create_schema(&pool).await?;

    Ok(pool)
}

/// In-memory database trên một connection duy nhất (tests, demos)
pub async fn init_memory_database() -> PersistenceResult<SqlitePool> {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);

    // Every connection to :memory: is a separate database, so keep exactly one alive.
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await?;
    create_schema(&pool).await?;

    Ok(pool)
}
