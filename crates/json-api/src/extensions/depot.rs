//! Depot helper extensions.

use std::any::Any;

use salvo::prelude::{Depot, StatusError};
use tracing::error;

use rostering_app::domain::tenants::TenantId;

/// Helpers for mapping depot extraction failures to HTTP errors.
pub(crate) trait DepotExt {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError>;

    fn insert_tenant_id(&mut self, tenant: TenantId);

    /// The tenant the request is scoped to. Only missing when a route was
    /// mounted outside the tenant middleware.
    fn tenant_id_or_500(&self) -> Result<TenantId, StatusError>;
}

impl DepotExt for Depot {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError> {
        self.obtain::<T>()
            .map_err(|_ignored| StatusError::internal_server_error())
    }

    fn insert_tenant_id(&mut self, tenant: TenantId) {
        self.inject(tenant);
    }

    fn tenant_id_or_500(&self) -> Result<TenantId, StatusError> {
        self.obtain::<TenantId>().copied().map_err(|_ignored| {
            error!("tenant id missing from depot");

            StatusError::internal_server_error()
        })
    }
}
