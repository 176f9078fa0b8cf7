//! Employee Errors

use salvo::http::StatusError;
use tracing::error;

use rostering_app::domain::employees::EmployeesServiceError;

use crate::tenants::forbidden;

/// Shared by the employee and employee availability handlers.
pub(crate) fn into_status_error(error: EmployeesServiceError) -> StatusError {
    match error {
        EmployeesServiceError::TenantMismatch(mismatch) => forbidden(&mismatch),
        EmployeesServiceError::MissingReference { .. }
        | EmployeesServiceError::MissingRequiredData
        | EmployeesServiceError::InvalidData => {
            StatusError::bad_request().brief(error.to_string())
        }
        EmployeesServiceError::AlreadyExists
        | EmployeesServiceError::StaleVersion { .. }
        | EmployeesServiceError::InvalidReference => {
            StatusError::conflict().brief(error.to_string())
        }
        EmployeesServiceError::NotFound => StatusError::not_found(),
        EmployeesServiceError::Sql(source) => {
            error!("employee storage failure: {source}");

            StatusError::internal_server_error()
        }
    }
}
