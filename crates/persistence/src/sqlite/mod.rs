//! SQLite persistence module
//!
//! Repository pattern cho SQLite database access.

pub mod repos;
pub mod schema;
pub mod store;

pub use repos::{init_database, init_memory_database, AlertRepo, TransactionRepo};
pub use schema::{create_schema, AlertRow, TransactionRow};
pub use store::SqliteStore;
