//! Time Slot Errors

use salvo::http::StatusError;
use tracing::error;

use rostering_app::domain::time_slots::TimeSlotsServiceError;

use crate::tenants::forbidden;

pub(crate) fn into_status_error(error: TimeSlotsServiceError) -> StatusError {
    match error {
        TimeSlotsServiceError::TenantMismatch(mismatch) => forbidden(&mismatch),
        TimeSlotsServiceError::MissingRequiredData | TimeSlotsServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid time slot payload")
        }
        TimeSlotsServiceError::AlreadyExists | TimeSlotsServiceError::InvalidReference => {
            StatusError::conflict().brief(error.to_string())
        }
        TimeSlotsServiceError::NotFound => StatusError::not_found(),
        TimeSlotsServiceError::Sql(source) => {
            error!("time slot storage failure: {source}");

            StatusError::internal_server_error()
        }
    }
}
