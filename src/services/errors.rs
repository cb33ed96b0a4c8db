use thiserror::Error;

use crate::repository::RepositoryError;

/// Result type returned by service functions.
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Outcomes a service call can fail with, one per response class.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The request payload failed validation.
    #[error("form error: {0}")]
    Form(String),
    #[error("resource not found")]
    NotFound,
    /// The supplied password differs from the stored one.
    #[error("password does not match")]
    PasswordMismatch,
    #[error("repository error: {0}")]
    Repository(RepositoryError),
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<RepositoryError> for ServiceError {
    fn from(value: RepositoryError) -> Self {
        match value {
            RepositoryError::NotFound => ServiceError::NotFound,
            other => ServiceError::Repository(other),
        }
    }
}
