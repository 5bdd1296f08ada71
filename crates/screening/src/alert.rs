//! Alert Publisher - builds the single aggregated alert for a flagged transaction.

use amlguard_core::{Alert, Clock, Transaction};
use std::sync::Arc;

/// Builds alerts, stamping them with the publisher's clock
pub struct AlertPublisher {
    clock: Arc<dyn Clock>,
}

impl AlertPublisher {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    /// Alert for `transaction`, or `None` when it is not suspicious.
    ///
    /// The reason is the transaction's aggregated reason text; the timestamp
    /// is the creation time, not the transaction's own timestamp.
    pub fn create_alert(&self, transaction: &Transaction) -> Option<Alert> {
        if !transaction.suspicious {
            return None;
        }

        let mut alert = Alert::new(
            &transaction.account_number,
            &transaction.suspicious_reason,
            self.clock.now(),
        );
        alert.transaction_id = transaction.id;
        Some(alert)
    }
}
