//! Get Employee Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use rostering_app::domain::employees::records::{
    EmployeeId, EmployeeRecord, SkillProficiencyRecord,
};

use crate::{employees::errors::into_status_error, extensions::*, state::State};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct SkillProficiencyResponse {
    pub id: i64,
    pub tenant_id: i64,
    pub version: i64,
    pub skill: String,
}

impl From<SkillProficiencyRecord> for SkillProficiencyResponse {
    fn from(proficiency: SkillProficiencyRecord) -> Self {
        SkillProficiencyResponse {
            id: proficiency.id.into(),
            tenant_id: proficiency.tenant_id.into(),
            version: proficiency.version,
            skill: proficiency.skill,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct EmployeeResponse {
    /// Storage-assigned employee id
    pub id: i64,

    /// Tenant the employee belongs to
    pub tenant_id: i64,

    /// Optimistic locking version
    pub version: i64,

    /// Display name, unique within the tenant
    pub name: String,

    /// Skills the employee holds
    pub skill_proficiencies: Vec<SkillProficiencyResponse>,
}

impl From<EmployeeRecord> for EmployeeResponse {
    fn from(employee: EmployeeRecord) -> Self {
        EmployeeResponse {
            id: employee.id.into(),
            tenant_id: employee.tenant_id.into(),
            version: employee.version,
            name: employee.name,
            skill_proficiencies: employee
                .skill_proficiencies
                .into_iter()
                .map(Into::into)
                .collect(),
        }
    }
}

/// Get Employee Handler
///
/// Returns an employee with its skill proficiencies.
#[endpoint(
    tags("employees"),
    summary = "Get Employee",
    responses(
        (status_code = StatusCode::OK, description = "Employee found"),
        (status_code = StatusCode::FORBIDDEN, description = "Employee belongs to another tenant"),
        (status_code = StatusCode::NOT_FOUND, description = "Employee not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    employee: PathParam<i64>,
    depot: &mut Depot,
) -> Result<Json<EmployeeResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let tenant = depot.tenant_id_or_500()?;

    let employee = state
        .app
        .employees
        .get_employee(tenant, EmployeeId::from_i64(employee.into_inner()))
        .await
        .map_err(into_status_error)?
        .ok_or_else(|| StatusError::not_found().brief("Employee not found"))?;

    Ok(Json(employee.into()))
}
