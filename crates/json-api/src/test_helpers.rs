//! Test helpers.

use std::sync::Arc;

use salvo::{affix_state::inject, prelude::*};

use rostering_app::{
    context::AppContext,
    domain::{
        employees::{
            MockEmployeesService,
            records::{EmployeeRecord, SkillProficiencyRecord},
        },
        tenants::{TenantId, TenantMismatch},
        time_slots::MockTimeSlotsService,
    },
};

use crate::{extensions::*, state::State};

pub(crate) const TEST_TENANT: TenantId = TenantId::from_i64(1);

pub(crate) const OTHER_TENANT: TenantId = TenantId::from_i64(2);

#[salvo::handler]
pub(crate) async fn inject_tenant(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    depot.insert_tenant_id(TEST_TENANT);
    ctrl.call_next(req, depot, res).await;
}

pub(crate) fn strict_employees_mock() -> MockEmployeesService {
    let mut employees = MockEmployeesService::new();

    employees.expect_list_employees().never();
    employees.expect_get_employee().never();
    employees.expect_add_employee().never();
    employees.expect_remove_employee().never();
    employees.expect_add_employee_availability().never();
    employees.expect_update_employee_availability().never();
    employees.expect_remove_employee_availability().never();

    employees
}

pub(crate) fn strict_time_slots_mock() -> MockTimeSlotsService {
    let mut time_slots = MockTimeSlotsService::new();

    time_slots.expect_list_time_slots().never();
    time_slots.expect_add_time_slot().never();

    time_slots
}

pub(crate) fn state(employees: MockEmployeesService, time_slots: MockTimeSlotsService) -> Arc<State> {
    State::from_app_context(AppContext {
        employees: Arc::new(employees),
        time_slots: Arc::new(time_slots),
    })
}

fn service(state: Arc<State>, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state))
            .hoop(inject_tenant)
            .push(route),
    )
}

pub(crate) fn employees_service(employees: MockEmployeesService, route: Router) -> Service {
    service(state(employees, strict_time_slots_mock()), route)
}

pub(crate) fn time_slots_service(time_slots: MockTimeSlotsService, route: Router) -> Service {
    service(state(strict_employees_mock(), time_slots), route)
}

pub(crate) fn make_employee(id: i64, name: &str) -> EmployeeRecord {
    EmployeeRecord {
        id: id.into(),
        tenant_id: TEST_TENANT,
        version: 0,
        name: name.to_string(),
        skill_proficiencies: vec![SkillProficiencyRecord {
            id: (id * 10).into(),
            tenant_id: TEST_TENANT,
            version: 0,
            skill: "Cleaning".to_string(),
        }],
    }
}

pub(crate) fn tenant_mismatch(kind: &'static str) -> TenantMismatch {
    TenantMismatch {
        expected: TEST_TENANT,
        found: OTHER_TENANT,
        kind,
        entity_id: None,
        entity: String::new(),
    }
}
