//! Structural validation of submitted transactions.

use crate::error::{CoreError, CoreResult};
use crate::transaction::{TransactionRequest, ValidatedTransaction};
use chrono::{DateTime, Datelike, Utc};

/// Years representable as a four-digit RFC 3339 timestamp
const TIMESTAMP_YEARS: std::ops::RangeInclusive<i32> = 0..=9999;

/// Check required fields and fill in the default timestamp.
///
/// Fails if the account number is missing or empty, if the amount is
/// missing, or if the timestamp falls outside years 0000-9999. An absent
/// timestamp becomes `now`.
pub fn validate(request: TransactionRequest, now: DateTime<Utc>) -> CoreResult<ValidatedTransaction> {
    let account_number = match request.account_number {
        Some(account) if !account.is_empty() => account,
        _ => return Err(CoreError::validation("Account number is required")),
    };

    let amount = request
        .amount
        .ok_or_else(|| CoreError::validation("Amount is required"))?;

    let timestamp = request.timestamp.unwrap_or(now);
    if !TIMESTAMP_YEARS.contains(&timestamp.year()) {
        return Err(CoreError::validation(format!(
            "Timestamp out of range: {}",
            timestamp
        )));
    }

    Ok(ValidatedTransaction {
        account_number,
        amount,
        transaction_type: request.transaction_type,
        timestamp,
    })
}
