//! Tenants

pub(crate) mod middleware;

use salvo::http::StatusError;

use rostering_app::domain::tenants::TenantMismatch;

use crate::observability::record_tenant_mismatch;

/// Refuse a request that touched another tenant's data.
///
/// The brief names both tenant ids, the entity kind and its stored id when it has one.
pub(crate) fn forbidden(mismatch: &TenantMismatch) -> StatusError {
    record_tenant_mismatch(mismatch.kind);

    let entity = match mismatch.entity_id {
        Some(id) => format!("{} ({id})", mismatch.kind),
        None => mismatch.kind.to_string(),
    };

    StatusError::forbidden().brief(format!(
        "the tenant id ({}) does not match the {entity}'s tenant id ({})",
        mismatch.expected, mismatch.found
    ))
}
