//! # Amlguard Persistence
//!
//! Persistence layer cho Amlguard - transaction history và alerts.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                  TransactionStore                        │
//! │   HistoryAccessor (reads)  +  writes  +  listings        │
//! │  ┌──────────────────┐        ┌──────────────────┐        │
//! │  │   SqliteStore    │        │   MemoryStore    │        │
//! │  │  (sqlx, durable) │        │  (tests, demos)  │        │
//! │  └──────────────────┘        └──────────────────┘        │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use amlguard_persistence::{SqliteStore, TransactionStore};
//!
//! let store = SqliteStore::connect("sqlite:amlguard.db").await?;
//! let flagged = store.find_suspicious().await?;
//! ```

pub mod error;
pub mod memory;
pub mod sqlite;
pub mod store;

pub use error::{PersistenceError, PersistenceResult};
pub use memory::MemoryStore;
pub use sqlite::{AlertRepo, SqliteStore, TransactionRepo};
pub use store::{HistoryAccessor, ScreeningRecord, TransactionStore};
