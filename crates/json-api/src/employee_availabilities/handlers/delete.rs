//! Delete Employee Availability Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use rostering_app::domain::employees::records::EmployeeAvailabilityId;

use crate::{
    employees::{delete::RemovedResponse, errors::into_status_error},
    extensions::*,
    state::State,
};

/// Delete Employee Availability Handler
#[endpoint(
    tags("employee-availabilities"),
    summary = "Delete Employee Availability",
    responses(
        (status_code = StatusCode::OK, description = "Removal attempted"),
        (status_code = StatusCode::FORBIDDEN, description = "Availability belongs to another tenant"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    availability: PathParam<i64>,
    depot: &mut Depot,
) -> Result<Json<RemovedResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let tenant = depot.tenant_id_or_500()?;

    let removed = state
        .app
        .employees
        .remove_employee_availability(
            tenant,
            EmployeeAvailabilityId::from_i64(availability.into_inner()),
        )
        .await
        .map_err(into_status_error)?;

    Ok(Json(RemovedResponse { removed }))
}
