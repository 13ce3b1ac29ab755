//! Service layer error type
//!
//! A single tagged error enum shared by all services. Each business-rule
//! violation is raised at the point of detection and mapped to a status
//! code once, at the adapter boundary.

use vidtube_db::CommitError;

/// Service layer error type
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// The targeted entity does not exist.
    #[error("{resource} {id} not found")]
    NotFound { resource: &'static str, id: String },

    /// A uniqueness rule would be violated.
    #[error("{resource} already exists: {detail}")]
    AlreadyExists {
        resource: &'static str,
        detail: String,
    },

    /// A relationship row that should be removed is absent.
    #[error("{detail}")]
    NotPresent { detail: String },

    /// Name/password pair did not match any account.
    #[error("wrong name or password")]
    LoginFailed,

    /// The unit of work failed to commit; no partial writes were applied.
    #[error(transparent)]
    Commit(#[from] CommitError),
}

impl ServiceError {
    pub fn not_found(resource: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            resource,
            id: id.to_string(),
        }
    }

    pub fn already_exists(resource: &'static str, detail: impl Into<String>) -> Self {
        Self::AlreadyExists {
            resource,
            detail: detail.into(),
        }
    }

    pub fn not_present(detail: impl Into<String>) -> Self {
        Self::NotPresent {
            detail: detail.into(),
        }
    }

    /// HTTP status code this error maps to by default.
    ///
    /// Individual routes may override the mapping (account update reports
    /// a missing account as 412).
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            Self::NotFound { .. } | Self::LoginFailed => 404,
            Self::AlreadyExists { .. } | Self::NotPresent { .. } => 412,
            Self::Commit(_) => 500,
        }
    }

    /// Error code for API responses
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "NOT_FOUND",
            Self::AlreadyExists { .. } => "ALREADY_EXISTS",
            Self::NotPresent { .. } => "NOT_PRESENT",
            Self::LoginFailed => "LOGIN_FAILED",
            Self::Commit(_) => "COMMIT_FAILED",
        }
    }
}

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;
