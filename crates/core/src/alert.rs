//! # Alert Module
//!
//! Alert là bản ghi bền vững cho một giao dịch bị đánh dấu suspicious.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Durable record of one suspicious determination.
///
/// One alert per screened transaction, carrying the aggregated reason text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    /// Assigned by the store on save
    pub id: Option<i64>,
    pub account_number: String,
    pub reason: String,
    /// Alert creation time, not the transaction's own timestamp
    pub timestamp: DateTime<Utc>,
    /// Identity of the originating transaction, set when both are committed
    pub transaction_id: Option<i64>,
}

impl Alert {
    pub fn new(account_number: &str, reason: &str, timestamp: DateTime<Utc>) -> Self {
        Self {
            id: None,
            account_number: account_number.to_string(),
            reason: reason.to_string(),
            timestamp,
            transaction_id: None,
        }
    }

    pub fn for_transaction(mut self, transaction_id: i64) -> Self {
        self.transaction_id = Some(transaction_id);
        self
    }
}
