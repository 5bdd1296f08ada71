//! # Transaction Module
//!
//! Định nghĩa các trạng thái của một giao dịch trong luồng screening:
//! [`TransactionRequest`] (input), [`ValidatedTransaction`] (đã validate),
//! và [`Transaction`] (đã gắn disposition, sẵn sàng persist).

use crate::error::CoreError;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Transaction type of an incoming deposit
pub const DEPOSIT: &str = "DEPOSIT";

/// Transaction type of an outgoing withdrawal
pub const WITHDRAWAL: &str = "WITHDRAWAL";

/// Appended after every triggered reason when building the reason text
pub const REASON_SEPARATOR: &str = "; ";

/// Trạng thái cuối cùng của giao dịch sau screening.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionStatus {
    /// Ít nhất một rule đã trigger
    Flagged,
    /// Không rule nào trigger
    Cleared,
}

impl TransactionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionStatus::Flagged => "FLAGGED",
            TransactionStatus::Cleared => "CLEARED",
        }
    }
}

impl fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for TransactionStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "FLAGGED" => Ok(TransactionStatus::Flagged),
            "CLEARED" => Ok(TransactionStatus::Cleared),
            other => Err(CoreError::InvalidStatus(other.to_string())),
        }
    }
}

/// A transaction as submitted by a caller.
///
/// Every field is optional here; [`crate::validate`] decides what is required.
///
/// # Examples
/// ```
/// use amlguard_core::TransactionRequest;
/// use rust_decimal_macros::dec;
///
/// let req = TransactionRequest::new("ACC1", dec!(250.00)).with_type("DEPOSIT");
/// assert_eq!(req.transaction_type.as_deref(), Some("DEPOSIT"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRequest {
    #[serde(default)]
    pub account_number: Option<String>,
    #[serde(default)]
    pub amount: Option<Decimal>,
    #[serde(default)]
    pub transaction_type: Option<String>,
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
}

impl TransactionRequest {
    /// Tạo request với account và amount
    pub fn new(account_number: &str, amount: Decimal) -> Self {
        Self {
            account_number: Some(account_number.to_string()),
            amount: Some(amount),
            transaction_type: None,
            timestamp: None,
        }
    }

    pub fn with_type(mut self, transaction_type: &str) -> Self {
        self.transaction_type = Some(transaction_type.to_string());
        self
    }

    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }
}

/// A transaction whose required fields are known to be present.
///
/// Rules evaluate against this type; it has no disposition yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedTransaction {
    pub account_number: String,
    pub amount: Decimal,
    pub transaction_type: Option<String>,
    pub timestamp: DateTime<Utc>,
}

impl ValidatedTransaction {
    /// Case-insensitive comparison of the free-form transaction type
    pub fn is_type(&self, kind: &str) -> bool {
        self.transaction_type
            .as_deref()
            .is_some_and(|t| t.eq_ignore_ascii_case(kind))
    }

    /// Gắn disposition, tạo [`Transaction`] chưa có identity
    pub fn into_transaction(self, disposition: Disposition) -> Transaction {
        Transaction {
            id: None,
            account_number: self.account_number,
            amount: self.amount,
            transaction_type: self.transaction_type,
            timestamp: self.timestamp,
            suspicious: disposition.suspicious,
            suspicious_reason: disposition.reason,
            status: disposition.status,
        }
    }
}

/// Final suspicious/status/reason state computed from the rule outcomes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Disposition {
    pub suspicious: bool,
    pub reason: String,
    pub status: TransactionStatus,
}

impl Disposition {
    /// Build the disposition from the ordered list of triggered reasons.
    ///
    /// Each reason is followed by [`REASON_SEPARATOR`], including the last one.
    pub fn from_reasons(reasons: &[String]) -> Self {
        let suspicious = !reasons.is_empty();
        let reason: String = reasons
            .iter()
            .map(|r| format!("{}{}", r, REASON_SEPARATOR))
            .collect();

        Self {
            suspicious,
            reason,
            status: if suspicious {
                TransactionStatus::Flagged
            } else {
                TransactionStatus::Cleared
            },
        }
    }
}

/// Screened transaction, as persisted and returned to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Assigned by the store on save
    pub id: Option<i64>,
    pub account_number: String,
    pub amount: Decimal,
    pub transaction_type: Option<String>,
    pub timestamp: DateTime<Utc>,
    pub suspicious: bool,
    pub suspicious_reason: String,
    pub status: TransactionStatus,
}

impl Transaction {
    pub fn is_flagged(&self) -> bool {
        self.status == TransactionStatus::Flagged
    }

    /// Case-insensitive comparison of the free-form transaction type
    pub fn is_type(&self, kind: &str) -> bool {
        self.transaction_type
            .as_deref()
            .is_some_and(|t| t.eq_ignore_ascii_case(kind))
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} [{}]",
            self.id.map_or_else(|| "-".to_string(), |id| id.to_string()),
            self.account_number,
            self.transaction_type.as_deref().unwrap_or("-"),
            self.amount,
            self.status
        )
    }
}
