//! # Amlguard Screening
//!
//! AML screening core: rules, rule engine, alert publisher, orchestrator.
//!
//! ## Flow
//!
//! ```text
//! TransactionRequest
//!        │ validate
//!        ▼
//! ValidatedTransaction ──▶ RuleEngine ──▶ [Large, HighFrequency, RapidMovement, RoundAmount]
//!        │                     │                 │ (history via HistoryAccessor)
//!        │                     ▼
//!        │               Evaluation (ordered reasons)
//!        ▼
//!   Disposition ──▶ Transaction ──▶ AlertPublisher ──▶ commit_screening (atomic)
//! ```
//!
//! ## Key Components
//!
//! - [`config::ScreeningConfig`] - Thresholds and windows (not hardcoded)
//! - [`rules::Rule`] - One heuristic behind a common evaluation contract
//! - [`engine::RuleEngine`] - Fixed-order aggregation, no short-circuit
//! - [`alert::AlertPublisher`] - One aggregated alert per flagged transaction
//! - [`service::ScreeningService`] - Orchestrator and logging point

pub mod alert;
pub mod config;
pub mod engine;
pub mod error;
pub mod rules;
pub mod service;

pub use alert::AlertPublisher;
pub use config::ScreeningConfig;
pub use engine::{Evaluation, RuleEngine, TriggeredRule};
pub use error::{ScreeningError, ScreeningResult};
pub use rules::{HighFrequencyRule, LargeAmountRule, RapidMovementRule, RoundAmountRule, Rule};
pub use service::ScreeningService;
