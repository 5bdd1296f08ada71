//! In-memory [`TransactionStore`] for tests and demos.

use crate::error::{PersistenceError, PersistenceResult};
use crate::store::{HistoryAccessor, ScreeningRecord, TransactionStore};
use amlguard_core::{Alert, Transaction};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use tokio::sync::RwLock;

#[derive(Debug, Default)]
struct MemoryState {
    transactions: Vec<Transaction>,
    alerts: Vec<Alert>,
    next_transaction_id: i64,
    next_alert_id: i64,
}

impl MemoryState {
    fn insert_transaction(&mut self, transaction: &Transaction) -> Transaction {
        self.next_transaction_id += 1;
        let stored = Transaction {
            id: Some(self.next_transaction_id),
            ..transaction.clone()
        };
        self.transactions.push(stored.clone());
        stored
    }

    fn insert_alert(&mut self, alert: Alert) -> Alert {
        self.next_alert_id += 1;
        let stored = Alert {
            id: Some(self.next_alert_id),
            ..alert
        };
        self.alerts.push(stored.clone());
        stored
    }
}

/// Store keeping everything in process memory
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: RwLock<MemoryState>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl HistoryAccessor for MemoryStore {
    async fn find_recent_by_account(
        &self,
        account_number: &str,
        after: DateTime<Utc>,
    ) -> PersistenceResult<Vec<Transaction>> {
        let state = self.state.read().await;
        Ok(state
            .transactions
            .iter()
            .filter(|t| t.account_number == account_number && t.timestamp > after)
            .cloned()
            .collect())
    }

    async fn exists_matching_deposit(
        &self,
        account_number: &str,
        transaction_type: &str,
        amount: Decimal,
        after: DateTime<Utc>,
    ) -> PersistenceResult<bool> {
        let state = self.state.read().await;
        Ok(state.transactions.iter().any(|t| {
            t.account_number == account_number
                && t.is_type(transaction_type)
                && t.amount == amount
                && t.timestamp > after
        }))
    }
}

#[async_trait]
impl TransactionStore for MemoryStore {
    async fn save(&self, transaction: &Transaction) -> PersistenceResult<Transaction> {
        let mut state = self.state.write().await;
        Ok(state.insert_transaction(transaction))
    }

    async fn save_alert(&self, alert: &Alert) -> PersistenceResult<Alert> {
        let transaction_id = alert.transaction_id.ok_or_else(|| {
            PersistenceError::Integrity("alert has no originating transaction".to_string())
        })?;

        let mut state = self.state.write().await;
        if !state.transactions.iter().any(|t| t.id == Some(transaction_id)) {
            return Err(PersistenceError::Integrity(format!(
                "alert references unknown transaction {}",
                transaction_id
            )));
        }
        Ok(state.insert_alert(alert.clone()))
    }

    async fn commit_screening(
        &self,
        transaction: &Transaction,
        alert: Option<&Alert>,
    ) -> PersistenceResult<ScreeningRecord> {
        // One write guard covers both inserts.
        let mut state = self.state.write().await;
        let stored = state.insert_transaction(transaction);
        let stored_alert = match (alert, stored.id) {
            (Some(alert), Some(id)) => Some(state.insert_alert(alert.clone().for_transaction(id))),
            _ => None,
        };

        Ok(ScreeningRecord {
            transaction: stored,
            alert: stored_alert,
        })
    }

    async fn find_all(&self) -> PersistenceResult<Vec<Transaction>> {
        Ok(self.state.read().await.transactions.clone())
    }

    async fn find_suspicious(&self) -> PersistenceResult<Vec<Transaction>> {
        let state = self.state.read().await;
        Ok(state.transactions.iter().filter(|t| t.suspicious).cloned().collect())
    }

    async fn find_alerts(&self) -> PersistenceResult<Vec<Alert>> {
        Ok(self.state.read().await.alerts.clone())
    }
}
