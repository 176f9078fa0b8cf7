//! Tenants

mod validation;

use tracing::warn;

pub use validation::*;

use crate::ids::TypedId;

/// Tenant marker.
#[derive(Debug)]
pub struct Tenant;

/// Tenant Id
pub type TenantId = TypedId<Tenant>;

/// Validate `entity` against `tenant`, logging any mismatch before returning it.
pub(crate) fn ensure_tenant<E>(tenant: TenantId, entity: &E) -> Result<(), TenantMismatch>
where
    E: TenantScoped + ?Sized,
{
    validate_tenant(tenant, entity).inspect_err(|mismatch| {
        warn!(
            expected = %mismatch.expected,
            found = %mismatch.found,
            kind = mismatch.kind,
            "rejected cross-tenant access"
        );
    })
}
