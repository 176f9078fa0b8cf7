//! Employees Data

use serde::{Deserialize, Serialize};

use crate::domain::{
    employees::records::{
        EmployeeAvailabilityId, EmployeeAvailabilityRecord, EmployeeAvailabilityState,
        EmployeeId, EmployeeRecord,
    },
    tenants::{OwnedEntities, TenantId, TenantScoped},
    time_slots::records::{TimeSlotId, TimeSlotRecord},
};

/// New Employee Data
///
/// Every nested proficiency states its own tenant; nothing is inherited from
/// the employee.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEmployee {
    pub tenant_id: TenantId,
    pub name: String,
    pub skill_proficiencies: Vec<NewSkillProficiency>,
}

impl TenantScoped for NewEmployee {
    fn tenant_id(&self) -> TenantId {
        self.tenant_id
    }

    fn entity_kind(&self) -> &'static str {
        "employee"
    }

    fn owned(&self) -> OwnedEntities<'_> {
        self.skill_proficiencies
            .iter()
            .map(|proficiency| proficiency as &dyn TenantScoped)
            .collect()
    }
}

/// New Skill Proficiency Data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSkillProficiency {
    pub tenant_id: TenantId,
    pub skill: String,
}

impl TenantScoped for NewSkillProficiency {
    fn tenant_id(&self) -> TenantId {
        self.tenant_id
    }

    fn entity_kind(&self) -> &'static str {
        "skill proficiency"
    }
}

/// Employee Availability View
///
/// Flat, transport-facing shape of an availability: links are raw ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeAvailabilityView {
    /// Absent for availabilities that have not been persisted yet.
    #[serde(default)]
    pub id: Option<EmployeeAvailabilityId>,
    pub tenant_id: TenantId,
    /// Version the caller last saw; absent skips the stale write check.
    #[serde(default)]
    pub version: Option<i64>,
    pub employee_id: EmployeeId,
    pub time_slot_id: TimeSlotId,
    pub state: EmployeeAvailabilityState,
}

impl TenantScoped for EmployeeAvailabilityView {
    fn tenant_id(&self) -> TenantId {
        self.tenant_id
    }

    fn entity_kind(&self) -> &'static str {
        "employee availability view"
    }

    fn entity_id(&self) -> Option<i64> {
        self.id.map(EmployeeAvailabilityId::into_i64)
    }
}

impl From<EmployeeAvailabilityRecord> for EmployeeAvailabilityView {
    fn from(record: EmployeeAvailabilityRecord) -> Self {
        Self {
            id: Some(record.id),
            tenant_id: record.tenant_id,
            version: Some(record.version),
            employee_id: record.employee_id,
            time_slot_id: record.time_slot_id,
            state: record.state,
        }
    }
}

/// Employee Availability
///
/// An availability linked to the employee and time slot it refers to. Only
/// built from a view once both links have been loaded and validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeAvailability {
    id: Option<EmployeeAvailabilityId>,
    tenant_id: TenantId,
    employee: EmployeeRecord,
    time_slot: TimeSlotRecord,
    state: EmployeeAvailabilityState,
}

impl EmployeeAvailability {
    pub(crate) fn link(
        view: &EmployeeAvailabilityView,
        employee: EmployeeRecord,
        time_slot: TimeSlotRecord,
    ) -> Self {
        Self {
            id: view.id,
            tenant_id: view.tenant_id,
            employee,
            time_slot,
            state: view.state,
        }
    }

    #[must_use]
    pub fn id(&self) -> Option<EmployeeAvailabilityId> {
        self.id
    }

    #[must_use]
    pub fn employee(&self) -> &EmployeeRecord {
        &self.employee
    }

    #[must_use]
    pub fn time_slot(&self) -> &TimeSlotRecord {
        &self.time_slot
    }

    #[must_use]
    pub fn state(&self) -> EmployeeAvailabilityState {
        self.state
    }
}

impl TenantScoped for EmployeeAvailability {
    fn tenant_id(&self) -> TenantId {
        self.tenant_id
    }

    fn entity_kind(&self) -> &'static str {
        "employee availability"
    }

    fn entity_id(&self) -> Option<i64> {
        self.id.map(EmployeeAvailabilityId::into_i64)
    }
}
