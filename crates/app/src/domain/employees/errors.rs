//! Employees service errors.

use sqlx::Error;
use thiserror::Error;

use crate::{domain::tenants::TenantMismatch, storage::StorageError};

#[derive(Debug, Error)]
pub enum EmployeesServiceError {
    #[error(transparent)]
    TenantMismatch(#[from] TenantMismatch),

    #[error("referenced {kind} ({id}) does not exist")]
    MissingReference { kind: &'static str, id: i64 },

    #[error("employee availability ({id}) is at version {found}, not {expected}")]
    StaleVersion { id: i64, expected: i64, found: i64 },

    #[error("employee or employee availability already exists")]
    AlreadyExists,

    #[error("employee not found")]
    NotFound,

    #[error("employee is still referenced, or refers to a missing record")]
    InvalidReference,

    #[error("missing required data")]
    MissingRequiredData,

    #[error("invalid data")]
    InvalidData,

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<StorageError> for EmployeesServiceError {
    fn from(error: StorageError) -> Self {
        match error {
            StorageError::AlreadyExists => Self::AlreadyExists,
            StorageError::NotFound => Self::NotFound,
            StorageError::InvalidReference => Self::InvalidReference,
            StorageError::MissingRequiredData => Self::MissingRequiredData,
            StorageError::InvalidData => Self::InvalidData,
            StorageError::Sql(error) => Self::Sql(error),
        }
    }
}
