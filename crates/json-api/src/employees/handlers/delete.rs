//! Delete Employee Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use rostering_app::domain::employees::records::EmployeeId;

use crate::{employees::errors::into_status_error, extensions::*, state::State};

/// Removal Response
///
/// `removed` is `false` when nothing had the id; that is not an error.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct RemovedResponse {
    pub removed: bool,
}

/// Delete Employee Handler
///
/// Skill proficiencies go with the employee. Employees that still have
/// availabilities cannot be removed.
#[endpoint(
    tags("employees"),
    summary = "Delete Employee",
    responses(
        (status_code = StatusCode::OK, description = "Removal attempted"),
        (status_code = StatusCode::FORBIDDEN, description = "Employee belongs to another tenant"),
        (status_code = StatusCode::CONFLICT, description = "Employee still has availabilities"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    employee: PathParam<i64>,
    depot: &mut Depot,
) -> Result<Json<RemovedResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let tenant = depot.tenant_id_or_500()?;

    let removed = state
        .app
        .employees
        .remove_employee(tenant, EmployeeId::from_i64(employee.into_inner()))
        .await
        .map_err(into_status_error)?;

    Ok(Json(RemovedResponse { removed }))
}
