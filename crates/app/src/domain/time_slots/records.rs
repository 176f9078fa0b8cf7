//! Time Slot Records

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::{
    domain::tenants::{TenantId, TenantScoped},
    ids::TypedId,
};

/// Time Slot Id
pub type TimeSlotId = TypedId<TimeSlotRecord>;

/// Time Slot Record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlotRecord {
    pub id: TimeSlotId,
    pub tenant_id: TenantId,
    pub version: i64,
    pub start: Timestamp,
    pub end: Timestamp,
}

impl TenantScoped for TimeSlotRecord {
    fn tenant_id(&self) -> TenantId {
        self.tenant_id
    }

    fn entity_kind(&self) -> &'static str {
        "time slot"
    }

    fn entity_id(&self) -> Option<i64> {
        Some(self.id.into_i64())
    }
}
