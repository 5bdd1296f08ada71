//! Screening errors

use amlguard_core::CoreError;
use amlguard_persistence::PersistenceError;
use thiserror::Error;

/// A failed screening attempt
#[derive(Debug, Error)]
pub enum ScreeningError {
    /// Rejected before any history access or write
    #[error("Transaction rejected: {0}")]
    Validation(#[from] CoreError),

    /// History read or transaction/alert write failed; nothing was committed
    #[error("Store error: {0}")]
    Store(#[from] PersistenceError),
}

/// Result type for screening operations
pub type ScreeningResult<T> = Result<T, ScreeningError>;

impl ScreeningError {
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    pub fn is_store(&self) -> bool {
        matches!(self, Self::Store(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        let err = ScreeningError::from(CoreError::validation("Amount is required"));
        assert!(err.is_validation());
        assert!(err.to_string().contains("Amount is required"));

        let err = ScreeningError::from(PersistenceError::Integrity("x".to_string()));
        assert!(err.is_store());
        assert!(!err.is_validation());
    }
}
