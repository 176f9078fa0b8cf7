//! Employee Index Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use crate::{
    employees::{errors::into_status_error, get::EmployeeResponse},
    extensions::*,
    state::State,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct EmployeesResponse {
    /// The tenant's employees
    pub employees: Vec<EmployeeResponse>,
}

/// Employee Index Handler
///
/// Returns every employee of the tenant.
#[endpoint(tags("employees"), summary = "List Employees")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<EmployeesResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let tenant = depot.tenant_id_or_500()?;

    let employees = state
        .app
        .employees
        .list_employees(tenant)
        .await
        .map_err(into_status_error)?;

    Ok(Json(EmployeesResponse {
        employees: employees.into_iter().map(Into::into).collect(),
    }))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use rostering_app::domain::employees::MockEmployeesService;

    use crate::test_helpers::{TEST_TENANT, employees_service, make_employee};

    use super::*;

    fn make_service(employees: MockEmployeesService) -> Service {
        employees_service(employees, Router::with_path("employees").get(handler))
    }

    #[tokio::test]
    async fn test_index_returns_tenant_employees() -> TestResult {
        let mut employees = MockEmployeesService::new();

        employees
            .expect_list_employees()
            .once()
            .withf(|tenant| *tenant == TEST_TENANT)
            .return_once(|_| Ok(vec![make_employee(1, "Ann"), make_employee(2, "Bob")]));

        let mut res = TestClient::get("http://example.com/employees")
            .send(&make_service(employees))
            .await;

        let body: EmployeesResponse = res.take_json().await?;

        let names: Vec<&str> = body
            .employees
            .iter()
            .map(|employee| employee.name.as_str())
            .collect();

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(names, vec!["Ann", "Bob"]);

        Ok(())
    }

    #[tokio::test]
    async fn test_index_empty_tenant_returns_empty_list() -> TestResult {
        let mut employees = MockEmployeesService::new();

        employees
            .expect_list_employees()
            .once()
            .return_once(|_| Ok(Vec::new()));

        let mut res = TestClient::get("http://example.com/employees")
            .send(&make_service(employees))
            .await;

        let body: EmployeesResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert!(body.employees.is_empty(), "expected no employees");

        Ok(())
    }
}
