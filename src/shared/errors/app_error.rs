use serde::Serialize;
use thiserror::Error;

use crate::shared::validation::Notification;

#[derive(Error, Debug, Serialize)]
#[serde(tag = "type", content = "details")]
pub enum AppError {
    /// Expected domain outcome: the command needs correction, nothing was
    /// persisted. Carries a human-readable summary plus the itemized causes.
    #[error("{summary}")]
    Validation {
        summary: String,
        errors: Vec<String>,
    },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Storage error: {0}")]
    Storage(String),

    /// Infrastructure failure surfaced after compensation ran. The message
    /// carries the aggregate id and no further diagnostic detail.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Build a validation error from an accumulated notification.
    pub fn validation(summary: impl Into<String>, notification: Notification) -> Self {
        AppError::Validation {
            summary: summary.into(),
            errors: notification.into_errors(),
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, AppError::Validation { .. })
    }
}

// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;
