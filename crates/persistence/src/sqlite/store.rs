//! SQLite-backed [`TransactionStore`].

use crate::error::PersistenceResult;
use crate::sqlite::repos::{init_database, init_memory_database, AlertRepo, TransactionRepo};
use crate::store::{HistoryAccessor, ScreeningRecord, TransactionStore};
use amlguard_core::{Alert, Transaction};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::SqlitePool;

/// Transaction/alert store on a sqlx SQLite pool
#[derive(Debug, Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Open (and create if missing) the database at `db_url`
    ///
    /// # Arguments
    /// * `db_url` - SQLite database URL (e.g., "sqlite:amlguard.db")
    pub async fn connect(db_url: &str) -> PersistenceResult<Self> {
        let pool = init_database(db_url).await?;
        Ok(Self { pool })
    }

    /// Fresh in-memory database
    pub async fn in_memory() -> PersistenceResult<Self> {
        let pool = init_memory_database().await?;
        Ok(Self { pool })
    }

    /// Get SQLite connection pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl HistoryAccessor for SqliteStore {
    async fn find_recent_by_account(
        &self,
        account_number: &str,
        after: DateTime<Utc>,
    ) -> PersistenceResult<Vec<Transaction>> {
        TransactionRepo::get_recent_by_account(&self.pool, account_number, after).await
    }

    async fn exists_matching_deposit(
        &self,
        account_number: &str,
        transaction_type: &str,
        amount: Decimal,
        after: DateTime<Utc>,
    ) -> PersistenceResult<bool> {
        TransactionRepo::exists_matching(&self.pool, account_number, transaction_type, amount, after)
            .await
    }
}

#[async_trait]
impl TransactionStore for SqliteStore {
    async fn save(&self, transaction: &Transaction) -> PersistenceResult<Transaction> {
        let id = TransactionRepo::insert(&self.pool, transaction).await?;
        Ok(Transaction {
            id: Some(id),
            ..transaction.clone()
        })
    }

    async fn save_alert(&self, alert: &Alert) -> PersistenceResult<Alert> {
        let id = AlertRepo::insert(&self.pool, alert).await?;
        Ok(Alert {
            id: Some(id),
            ..alert.clone()
        })
    }

    async fn commit_screening(
        &self,
        transaction: &Transaction,
        alert: Option<&Alert>,
    ) -> PersistenceResult<ScreeningRecord> {
        let mut db_tx = self.pool.begin().await?;

        // Transaction row first so the alert's foreign key resolves;
        // nothing is visible to readers until commit.
        let transaction_id = TransactionRepo::insert(&mut *db_tx, transaction).await?;
        let stored_alert = match alert {
            Some(alert) => {
                let linked = alert.clone().for_transaction(transaction_id);
                let alert_id = AlertRepo::insert(&mut *db_tx, &linked).await?;
                Some(Alert {
                    id: Some(alert_id),
                    ..linked
                })
            }
            None => None,
        };

        db_tx.commit().await?;
        tracing::debug!(
            transaction_id,
            alert_id = stored_alert.as_ref().and_then(|a| a.id),
            "Screening committed"
        );

        Ok(ScreeningRecord {
            transaction: Transaction {
                id: Some(transaction_id),
                ..transaction.clone()
            },
            alert: stored_alert,
        })
    }

    async fn find_all(&self) -> PersistenceResult<Vec<Transaction>> {
        TransactionRepo::get_all(&self.pool).await
    }

    async fn find_suspicious(&self) -> PersistenceResult<Vec<Transaction>> {
        TransactionRepo::get_suspicious(&self.pool).await
    }

    async fn find_alerts(&self) -> PersistenceResult<Vec<Alert>> {
        AlertRepo::get_all(&self.pool).await
    }
}
