//! Test Helpers

use jiff::{SignedDuration, Timestamp};

use crate::{
    domain::{
        employees::{
            EmployeesService, EmployeesServiceError,
            data::{EmployeeAvailabilityView, NewEmployee, NewSkillProficiency},
            records::{EmployeeAvailabilityState, EmployeeId},
        },
        tenants::TenantId,
        time_slots::{
            TimeSlotsService, TimeSlotsServiceError, data::NewTimeSlot, records::TimeSlotId,
        },
    },
    test::TestContext,
};

/// An employee of `tenant` whose skill proficiencies all belong to `tenant` too.
pub(crate) fn new_employee(tenant: TenantId, name: &str, skills: &[&str]) -> NewEmployee {
    NewEmployee {
        tenant_id: tenant,
        name: name.to_string(),
        skill_proficiencies: skills
            .iter()
            .map(|skill| NewSkillProficiency {
                tenant_id: tenant,
                skill: (*skill).to_string(),
            })
            .collect(),
    }
}

pub(crate) async fn add_employee(
    ctx: &TestContext,
    tenant: TenantId,
    name: &str,
) -> Result<EmployeeId, EmployeesServiceError> {
    ctx.employees
        .add_employee(tenant, new_employee(tenant, name, &["Cleaning"]))
        .await
}

/// Add an eight hour time slot starting `hours_from_epoch` after the epoch.
pub(crate) async fn add_time_slot(
    ctx: &TestContext,
    tenant: TenantId,
    hours_from_epoch: i64,
) -> Result<TimeSlotId, TimeSlotsServiceError> {
    let start = Timestamp::UNIX_EPOCH + SignedDuration::from_hours(hours_from_epoch);

    ctx.time_slots
        .add_time_slot(
            tenant,
            NewTimeSlot {
                tenant_id: tenant,
                start,
                end: start + SignedDuration::from_hours(8),
            },
        )
        .await
}

/// A view for a new (never stored) availability.
pub(crate) fn availability_view(
    tenant: TenantId,
    employee: EmployeeId,
    time_slot: TimeSlotId,
    state: EmployeeAvailabilityState,
) -> EmployeeAvailabilityView {
    EmployeeAvailabilityView {
        id: None,
        tenant_id: tenant,
        version: None,
        employee_id: employee,
        time_slot_id: time_slot,
        state,
    }
}
