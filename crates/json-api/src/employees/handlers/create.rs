//! Create Employee Handler

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use rostering_app::domain::employees::data::{NewEmployee, NewSkillProficiency};

use crate::{employees::errors::into_status_error, extensions::*, state::State};

/// Skill Proficiency Request
///
/// Carries its own tenant id, which must match the employee's.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct SkillProficiencyRequest {
    pub tenant_id: i64,
    pub skill: String,
}

/// Create Employee Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateEmployeeRequest {
    pub tenant_id: i64,
    pub name: String,
    #[serde(default)]
    pub skill_proficiencies: Vec<SkillProficiencyRequest>,
}

impl From<CreateEmployeeRequest> for NewEmployee {
    fn from(request: CreateEmployeeRequest) -> Self {
        NewEmployee {
            tenant_id: request.tenant_id.into(),
            name: request.name,
            skill_proficiencies: request
                .skill_proficiencies
                .into_iter()
                .map(|proficiency| NewSkillProficiency {
                    tenant_id: proficiency.tenant_id.into(),
                    skill: proficiency.skill,
                })
                .collect(),
        }
    }
}

/// Employee Created Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct EmployeeCreatedResponse {
    /// Created employee id
    pub id: i64,
}

/// Create Employee Handler
#[endpoint(
    tags("employees"),
    summary = "Create Employee",
    responses(
        (status_code = StatusCode::CREATED, description = "Employee created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::FORBIDDEN, description = "Payload names another tenant"),
        (status_code = StatusCode::CONFLICT, description = "Employee already exists"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateEmployeeRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<EmployeeCreatedResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let tenant = depot.tenant_id_or_500()?;

    let id = state
        .app
        .employees
        .add_employee(tenant, json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    res.add_header(LOCATION, format!("/tenants/{tenant}/employees/{id}"), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(EmployeeCreatedResponse { id: id.into() }))
}
