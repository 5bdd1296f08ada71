//! # Amlguard Core
//!
//! Domain types cho transaction screening: submission, validated transaction,
//! disposition, alert. Không phụ thuộc vào persistence hay runtime.
//!
//! ## Lifecycle
//!
//! ```text
//! TransactionRequest ──validate──▶ ValidatedTransaction ──dispose──▶ Transaction
//!   (caller input)                  (rules run on this)              (persisted)
//!                                                                        │
//!                                                          suspicious ───┴──▶ Alert
//! ```

pub mod alert;
pub mod clock;
pub mod error;
pub mod transaction;
pub mod validation;

pub use alert::Alert;
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{CoreError, CoreResult};
pub use transaction::{
    Disposition, Transaction, TransactionRequest, TransactionStatus, ValidatedTransaction,
    DEPOSIT, REASON_SEPARATOR, WITHDRAWAL,
};
pub use validation::validate;
