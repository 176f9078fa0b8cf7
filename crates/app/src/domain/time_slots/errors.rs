//! Time slots service errors.

use sqlx::Error;
use thiserror::Error;

use crate::{domain::tenants::TenantMismatch, storage::StorageError};

#[derive(Debug, Error)]
pub enum TimeSlotsServiceError {
    #[error(transparent)]
    TenantMismatch(#[from] TenantMismatch),

    #[error("time slot already exists")]
    AlreadyExists,

    #[error("time slot not found")]
    NotFound,

    #[error("related resource not found")]
    InvalidReference,

    #[error("missing required data")]
    MissingRequiredData,

    #[error("invalid data")]
    InvalidData,

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<StorageError> for TimeSlotsServiceError {
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
