//! Store contract consumed by the screening core.
//!
//! [`HistoryAccessor`] is the read side the rules see; [`TransactionStore`]
//! adds writes and listings for the orchestrator.

use crate::error::PersistenceResult;
use amlguard_core::{Alert, Transaction};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

/// Time-windowed queries over one account's stored transactions.
#[async_trait]
pub trait HistoryAccessor: Send + Sync {
    /// Stored transactions of `account_number` with timestamp strictly after `after`
    async fn find_recent_by_account(
        &self,
        account_number: &str,
        after: DateTime<Utc>,
    ) -> PersistenceResult<Vec<Transaction>>;

    /// Whether a stored transaction of `transaction_type` (case-insensitive)
    /// with exactly `amount` exists for `account_number`, strictly after `after`
    async fn exists_matching_deposit(
        &self,
        account_number: &str,
        transaction_type: &str,
        amount: Decimal,
        after: DateTime<Utc>,
    ) -> PersistenceResult<bool>;
}

/// A transaction and its alert as committed together
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreeningRecord {
    pub transaction: Transaction,
    pub alert: Option<Alert>,
}

/// Full persistence contract: history reads, writes, listings.
#[async_trait]
pub trait TransactionStore: HistoryAccessor {
    /// Insert a transaction, returning it with its identity
    async fn save(&self, transaction: &Transaction) -> PersistenceResult<Transaction>;

    /// Insert an alert, returning it with its identity.
    ///
    /// The alert must already reference its transaction.
    async fn save_alert(&self, alert: &Alert) -> PersistenceResult<Alert>;

    /// Write a screened transaction and its alert (if any) as one unit.
    ///
    /// Either both are visible afterwards or neither is.
    async fn commit_screening(
        &self,
        transaction: &Transaction,
        alert: Option<&Alert>,
    ) -> PersistenceResult<ScreeningRecord>;

    async fn find_all(&self) -> PersistenceResult<Vec<Transaction>>;

    async fn find_suspicious(&self) -> PersistenceResult<Vec<Transaction>>;

    async fn find_alerts(&self) -> PersistenceResult<Vec<Alert>>;
}
