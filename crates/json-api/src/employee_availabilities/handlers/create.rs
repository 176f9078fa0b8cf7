//! Create Employee Availability Handler

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use crate::{
    employee_availabilities::models::EmployeeAvailabilityRequest,
    employees::errors::into_status_error, extensions::*, state::State,
};

/// Employee Availability Created Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct EmployeeAvailabilityCreatedResponse {
    /// Created availability id
    pub id: i64,
}

/// Create Employee Availability Handler
///
/// The employee and time slot must exist and belong to the tenant.
#[endpoint(
    tags("employee-availabilities"),
    summary = "Create Employee Availability",
    responses(
        (status_code = StatusCode::CREATED, description = "Availability created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Employee or time slot does not exist"),
        (status_code = StatusCode::FORBIDDEN, description = "A linked record belongs to another tenant"),
        (status_code = StatusCode::CONFLICT, description = "Availability already exists"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<EmployeeAvailabilityRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<EmployeeAvailabilityCreatedResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let tenant = depot.tenant_id_or_500()?;

    let id = state
        .app
        .employees
        .add_employee_availability(tenant, json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    res.add_header(
        LOCATION,
        format!("/tenants/{tenant}/employee-availabilities/{id}"),
        true,
    )
    .or_500("failed to set location header")?
    .status_code(StatusCode::CREATED);

    Ok(Json(EmployeeAvailabilityCreatedResponse { id: id.into() }))
}
