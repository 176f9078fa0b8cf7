//! Time Slot Data

use jiff::Timestamp;

use crate::domain::tenants::{TenantId, TenantScoped};

/// New Time Slot Data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTimeSlot {
    pub tenant_id: TenantId,
    pub start: Timestamp,
    pub end: Timestamp,
}

impl TenantScoped for NewTimeSlot {
    fn tenant_id(&self) -> TenantId {
        self.tenant_id
    }

    fn entity_kind(&self) -> &'static str {
        "time slot"
    }
}
