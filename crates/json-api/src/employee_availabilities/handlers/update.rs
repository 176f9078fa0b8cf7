//! Update Employee Availability Handler

use std::sync::Arc;

use salvo::{oapi::extract::JsonBody, prelude::*};

use crate::{
    employee_availabilities::models::{EmployeeAvailabilityRequest, EmployeeAvailabilityResponse},
    employees::errors::into_status_error,
    extensions::*,
    state::State,
};

/// Update Employee Availability Handler
///
/// Merges the payload into storage. A stored availability with the same id is
/// overwritten (after a version check when `version` is sent); otherwise the
/// payload is inserted under a fresh id.
#[endpoint(
    tags("employee-availabilities"),
    summary = "Update Employee Availability",
    responses(
        (status_code = StatusCode::OK, description = "Availability stored"),
        (status_code = StatusCode::BAD_REQUEST, description = "Employee or time slot does not exist"),
        (status_code = StatusCode::FORBIDDEN, description = "A linked record belongs to another tenant"),
        (status_code = StatusCode::CONFLICT, description = "Stale version or duplicate availability"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<EmployeeAvailabilityRequest>,
    depot: &mut Depot,
) -> Result<Json<EmployeeAvailabilityResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let tenant = depot.tenant_id_or_500()?;

    let stored = state
        .app
        .employees
        .update_employee_availability(tenant, json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(stored.into()))
}
