//! App Context

use std::sync::Arc;

use sqlx::migrate::MigrateError;
use thiserror::Error;
use tracing::info;

use crate::{
    database::{self, Db},
    domain::{
        employees::{EmployeesService, StorageEmployeesService},
        time_slots::{StorageTimeSlotsService, TimeSlotsService},
    },
    storage::{MemoryStorage, PgStorage, Storage},
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),

    #[error("failed to run database migrations")]
    Migrations(#[source] MigrateError),
}

#[derive(Clone)]
pub struct AppContext {
    pub employees: Arc<dyn EmployeesService>,
    pub time_slots: Arc<dyn TimeSlotsService>,
}

impl AppContext {
    /// Build application context from a database URL, optionally applying
    /// pending migrations first.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing a database connection or running
    /// migrations fails.
    pub async fn from_database_url(url: &str, run_migrations: bool) -> Result<Self, AppInitError> {
        let pool = database::connect(url)
            .await
            .map_err(AppInitError::Database)?;

        if run_migrations {
            database::migrate(&pool)
                .await
                .map_err(AppInitError::Migrations)?;

            info!("database migrations applied");
        }

        Ok(Self::from_storage(Arc::new(PgStorage::new(Db::new(pool)))))
    }

    /// Build application context over process-local storage.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::from_storage(Arc::new(MemoryStorage::new()))
    }

    #[must_use]
    pub fn from_storage(storage: Arc<dyn Storage>) -> Self {
        info!(backend = storage.backend_name(), "storage ready");

        Self {
            employees: Arc::new(StorageEmployeesService::new(Arc::clone(&storage))),
            time_slots: Arc::new(StorageTimeSlotsService::new(storage)),
        }
    }
}
