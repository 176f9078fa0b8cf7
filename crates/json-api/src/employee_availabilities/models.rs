//! Employee availability payloads.

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use rostering_app::domain::employees::{
    data::EmployeeAvailabilityView, records::EmployeeAvailabilityState,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub(crate) enum AvailabilityState {
    Desired,
    Undesired,
    Unavailable,
}

impl From<AvailabilityState> for EmployeeAvailabilityState {
    fn from(state: AvailabilityState) -> Self {
        match state {
            AvailabilityState::Desired => Self::Desired,
            AvailabilityState::Undesired => Self::Undesired,
            AvailabilityState::Unavailable => Self::Unavailable,
        }
    }
}

impl From<EmployeeAvailabilityState> for AvailabilityState {
    fn from(state: EmployeeAvailabilityState) -> Self {
        match state {
            EmployeeAvailabilityState::Desired => Self::Desired,
            EmployeeAvailabilityState::Undesired => Self::Undesired,
            EmployeeAvailabilityState::Unavailable => Self::Unavailable,
        }
    }
}

/// Employee Availability Request
///
/// Links are plain ids. `id` and `version` are only sent when updating a
/// stored availability.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct EmployeeAvailabilityRequest {
    #[serde(default)]
    pub id: Option<i64>,
    pub tenant_id: i64,
    #[serde(default)]
    pub version: Option<i64>,
    pub employee_id: i64,
    pub time_slot_id: i64,
    pub state: AvailabilityState,
}

impl From<EmployeeAvailabilityRequest> for EmployeeAvailabilityView {
    fn from(request: EmployeeAvailabilityRequest) -> Self {
        EmployeeAvailabilityView {
            id: request.id.map(Into::into),
            tenant_id: request.tenant_id.into(),
            version: request.version,
            employee_id: request.employee_id.into(),
            time_slot_id: request.time_slot_id.into(),
            state: request.state.into(),
        }
    }
}

/// Employee Availability Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct EmployeeAvailabilityResponse {
    pub id: Option<i64>,
    pub tenant_id: i64,
    pub version: Option<i64>,
    pub employee_id: i64,
    pub time_slot_id: i64,
    pub state: AvailabilityState,
}

impl From<EmployeeAvailabilityView> for EmployeeAvailabilityResponse {
    fn from(view: EmployeeAvailabilityView) -> Self {
        EmployeeAvailabilityResponse {
            id: view.id.map(Into::into),
            tenant_id: view.tenant_id.into(),
            version: view.version,
            employee_id: view.employee_id.into(),
            time_slot_id: view.time_slot_id.into(),
            state: view.state.into(),
        }
    }
}
