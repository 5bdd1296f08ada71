//! # Error Module
//!
//! Domain errors cho Amlguard sử dụng thiserror.

use thiserror::Error;

/// Core domain errors.
///
/// Các lỗi nghiệp vụ cốt lõi, không liên quan đến infrastructure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A required field of a submitted transaction is missing
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid transaction status: {0}")]
    InvalidStatus(String),
}

/// Result type alias với CoreError
pub type CoreResult<T> = Result<T, CoreError>;

impl CoreError {
    /// Tạo validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Kiểm tra có phải lỗi validation không
    pub fn is_validation(&self) -> bool {
        matches!(self, CoreError::Validation(_))
    }
}
