//! # Persistence Errors
//!
//! Error types cho persistence layer, wrapping sqlx và decode errors.

use thiserror::Error;

/// Persistence layer errors.
///
/// Any failure reading history or writing a transaction/alert ends up here.
#[derive(Debug, Error)]
pub enum PersistenceError {
    // === Database errors ===
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    // === Conversion errors ===
    #[error("Invalid decimal value: {0}")]
    InvalidDecimal(String),

    #[error("Invalid timestamp value: {0}")]
    InvalidTimestamp(String),

    #[error("Invalid enum value: {field} = {value}")]
    InvalidEnumValue { field: String, value: String },

    // === Integrity errors ===
    #[error("Integrity violation: {0}")]
    Integrity(String),
}

/// Result type alias cho PersistenceError
pub type PersistenceResult<T> = Result<T, PersistenceError>;

impl PersistenceError {
    pub fn invalid_enum(field: &str, value: &str) -> Self {
        Self::InvalidEnumValue {
            field: field.to_string(),
            value: value.to_string(),
        }
    }

    /// Kiểm tra có phải lỗi database không
    pub fn is_database_error(&self) -> bool {
        matches!(self, Self::Database(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PersistenceError::invalid_enum("status", "PENDING");
        assert_eq!(err.to_string(), "Invalid enum value: status = PENDING");
        assert!(!err.is_database_error());

        let err = PersistenceError::from(sqlx::Error::RowNotFound);
        assert!(err.is_database_error());
    }
}
