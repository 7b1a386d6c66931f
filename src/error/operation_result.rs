// src/error/operation_result.rs
//
// Uniform outcome of a façade operation
//
// ARCHITECTURE:
// - Every service mutation ends here, success or not
// - Errors are categorised for the UI, never re-raised
// - Infrastructure failures are logged with full detail

use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, MediaId};
use crate::error::AppError;

/// Outcome of an operation, with the subject it concerns and a message
/// meant for the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationResult {
    pub success: bool,
    pub error_kind: Option<ErrorKind>,
    pub subject: String,
    pub message: String,

    /// Record the operation created or touched, when there is one
    pub media_id: Option<MediaId>,
}

/// Failure categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    DuplicateMedia,
    DuplicateSeason,
    NotFound,
    SeasonNotFound,
    InvalidRating,
    NotSeen,
    AlreadySeen,
    InvalidYear,
    UnsupportedOperation,
    Validation,
    Storage,
    Internal,
}

impl OperationResult {
    pub fn success(subject: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            success: true,
            error_kind: None,
            subject: subject.into(),
            message: message.into(),
            media_id: None,
        }
    }

    pub fn failure(subject: impl Into<String>, kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            success: false,
            error_kind: Some(kind),
            subject: subject.into(),
            message: message.into(),
            media_id: None,
        }
    }

    pub fn with_media_id(mut self, id: MediaId) -> Self {
        self.media_id = Some(id);
        self
    }

    /// Failure result from AppError
    pub fn from_app_error(subject: impl Into<String>, error: AppError) -> Self {
        let subject = subject.into();
        match error {
            AppError::Domain(domain_error) => {
                let kind = ErrorKind::from(&domain_error);
                Self::failure(subject, kind, domain_error.to_string())
            }

            AppError::Io(io_error) => {
                log::error!("IO error: {:?}", io_error);
                Self::failure(subject, ErrorKind::Storage, format!("Storage failed: {}", io_error))
            }

            AppError::Serialization(serde_error) => {
                log::error!("Serialization error: {:?}", serde_error);
                Self::failure(subject, ErrorKind::Storage, "Stored data could not be read or written")
            }

            AppError::LockPoisoned => {
                log::error!("Library lock poisoned");
                Self::failure(subject, ErrorKind::Internal, "Library is unavailable")
            }

            AppError::Other(message) => {
                log::error!("Other error: {}", message);
                Self::failure(subject, ErrorKind::Internal, message)
            }
        }
    }

    /// Success with `message` on Ok, the categorised failure on Err
    pub fn from_result(subject: impl Into<String>, result: Result<String, AppError>) -> Self {
        match result {
            Ok(message) => Self::success(subject, message),
            Err(error) => Self::from_app_error(subject, error),
        }
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn is_failure(&self) -> bool {
        !self.success
    }
}

impl From<&DomainError> for ErrorKind {
    fn from(error: &DomainError) -> Self {
        match error {
            DomainError::DuplicateMedia { .. } => ErrorKind::DuplicateMedia,
            DomainError::DuplicateSeason(_) => ErrorKind::DuplicateSeason,
            DomainError::SeasonNotFound(_) => ErrorKind::SeasonNotFound,
            DomainError::InvalidRating(_) => ErrorKind::InvalidRating,
            DomainError::NotSeen => ErrorKind::NotSeen,
            DomainError::AlreadySeen => ErrorKind::AlreadySeen,
            DomainError::InvalidYear { .. } => ErrorKind::InvalidYear,
            DomainError::UnsupportedOperation(_) => ErrorKind::UnsupportedOperation,
            DomainError::InvariantViolation(_) => ErrorKind::Validation,
            DomainError::NotFound(_) => ErrorKind::NotFound,
        }
    }
}

impl std::fmt::Display for OperationResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let status = if self.success { "OK" } else { "ERROR" };
        write!(f, "[{}] {}: {}", status, self.subject, self.message)
    }
}
