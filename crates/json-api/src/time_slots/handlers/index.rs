//! Time Slot Index Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use rostering_app::domain::time_slots::records::TimeSlotRecord;

use crate::{extensions::*, state::State, time_slots::errors::into_status_error};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct TimeSlotResponse {
    pub id: i64,
    pub tenant_id: i64,
    pub version: i64,

    /// RFC 3339 start instant
    pub start: String,

    /// RFC 3339 end instant, after `start`
    pub end: String,
}

impl From<TimeSlotRecord> for TimeSlotResponse {
    fn from(time_slot: TimeSlotRecord) -> Self {
        TimeSlotResponse {
            id: time_slot.id.into(),
            tenant_id: time_slot.tenant_id.into(),
            version: time_slot.version,
            start: time_slot.start.to_string(),
            end: time_slot.end.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct TimeSlotsResponse {
    /// The tenant's time slots, earliest first
    pub time_slots: Vec<TimeSlotResponse>,
}

/// Time Slot Index Handler
#[endpoint(tags("time-slots"), summary = "List Time Slots")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<TimeSlotsResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let tenant = depot.tenant_id_or_500()?;

    let time_slots = state
        .app
        .time_slots
        .list_time_slots(tenant)
        .await
        .map_err(into_status_error)?;

    Ok(Json(TimeSlotsResponse {
        time_slots: time_slots.into_iter().map(Into::into).collect(),
    }))
}
