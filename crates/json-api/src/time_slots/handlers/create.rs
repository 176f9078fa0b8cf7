//! Create Time Slot Handler

use std::sync::Arc;

use jiff::Timestamp;
use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use rostering_app::domain::time_slots::data::NewTimeSlot;

use crate::{extensions::*, state::State, time_slots::errors::into_status_error};

/// Create Time Slot Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateTimeSlotRequest {
    pub tenant_id: i64,

    /// RFC 3339 start instant
    pub start: String,

    /// RFC 3339 end instant
    pub end: String,
}

impl CreateTimeSlotRequest {
    fn into_new_time_slot(self) -> Result<NewTimeSlot, StatusError> {
        Ok(NewTimeSlot {
            tenant_id: self.tenant_id.into(),
            start: self
                .start
                .parse::<Timestamp>()
                .or_400("could not parse \"start\"")?,
            end: self
                .end
                .parse::<Timestamp>()
                .or_400("could not parse \"end\"")?,
        })
    }
}

/// Time Slot Created Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct TimeSlotCreatedResponse {
    /// Created time slot id
    pub id: i64,
}

/// Create Time Slot Handler
#[endpoint(
    tags("time-slots"),
    summary = "Create Time Slot",
    responses(
        (status_code = StatusCode::CREATED, description = "Time slot created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::FORBIDDEN, description = "Payload names another tenant"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateTimeSlotRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<TimeSlotCreatedResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let tenant = depot.tenant_id_or_500()?;
    let time_slot = json.into_inner().into_new_time_slot()?;

    let id = state
        .app
        .time_slots
        .add_time_slot(tenant, time_slot)
        .await
        .map_err(into_status_error)?;

    res.add_header(LOCATION, format!("/tenants/{tenant}/time-slots/{id}"), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(TimeSlotCreatedResponse { id: id.into() }))
}
