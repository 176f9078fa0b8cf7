//! Employees service.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use tracing::info;

use crate::{
    domain::{
        employees::{
            data::{EmployeeAvailability, EmployeeAvailabilityView, NewEmployee},
            errors::EmployeesServiceError,
            records::{EmployeeAvailabilityId, EmployeeId, EmployeeRecord},
        },
        tenants::{TenantId, ensure_tenant},
    },
    storage::{Storage, StorageTransaction},
};

#[derive(Debug, Clone)]
pub struct StorageEmployeesService {
    storage: Arc<dyn Storage>,
}

impl StorageEmployeesService {
    #[must_use]
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }
}

/// Resolve the links of an availability view inside `tx`.
///
/// The view, the employee (with everything it owns) and the time slot must all
/// belong to `tenant`. Nothing is written.
async fn convert_from_view(
    tx: &mut Box<dyn StorageTransaction>,
    tenant: TenantId,
    view: &EmployeeAvailabilityView,
) -> Result<EmployeeAvailability, EmployeesServiceError> {
    ensure_tenant(tenant, view)?;

    let employee = tx.find_employee(view.employee_id).await?.ok_or(
        EmployeesServiceError::MissingReference {
            kind: "employee",
            id: view.employee_id.into_i64(),
        },
    )?;

    ensure_tenant(tenant, &employee)?;

    let time_slot = tx.find_time_slot(view.time_slot_id).await?.ok_or(
        EmployeesServiceError::MissingReference {
            kind: "time slot",
            id: view.time_slot_id.into_i64(),
        },
    )?;

    ensure_tenant(tenant, &time_slot)?;

    Ok(EmployeeAvailability::link(view, employee, time_slot))
}

#[async_trait]
impl EmployeesService for StorageEmployeesService {
    async fn list_employees(
        &self,
        tenant: TenantId,
    ) -> Result<Vec<EmployeeRecord>, EmployeesServiceError> {
        let mut tx = self.storage.begin().await?;

        let employees = tx.list_employees(tenant).await?;

        tx.commit().await?;

        Ok(employees)
    }

    async fn get_employee(
        &self,
        tenant: TenantId,
        employee: EmployeeId,
    ) -> Result<Option<EmployeeRecord>, EmployeesServiceError> {
        let mut tx = self.storage.begin().await?;

        let employee = tx.find_employee(employee).await?;

        if let Some(employee) = &employee {
            ensure_tenant(tenant, employee)?;
        }

        tx.commit().await?;

        Ok(employee)
    }

    #[tracing::instrument(
        name = "employees.service.add_employee",
        skip(self, employee),
        fields(tenant_id = %tenant),
        err
    )]
    async fn add_employee(
        &self,
        tenant: TenantId,
        employee: NewEmployee,
    ) -> Result<EmployeeId, EmployeesServiceError> {
        ensure_tenant(tenant, &employee)?;

        if employee.name.trim().is_empty() {
            return Err(EmployeesServiceError::InvalidData);
        }

        let mut tx = self.storage.begin().await?;

        let created = tx.insert_employee(&employee).await?;

        tx.commit().await?;

        info!(employee_id = %created.id, "created employee");

        Ok(created.id)
    }

    #[tracing::instrument(
        name = "employees.service.remove_employee",
        skip(self),
        fields(tenant_id = %tenant, employee_id = %employee),
        err
    )]
    async fn remove_employee(
        &self,
        tenant: TenantId,
        employee: EmployeeId,
    ) -> Result<bool, EmployeesServiceError> {
        let mut tx = self.storage.begin().await?;

        let Some(existing) = tx.find_employee(employee).await? else {
            return Ok(false);
        };

        ensure_tenant(tenant, &existing)?;

        let rows_affected = tx.delete_employee(employee).await?;

        tx.commit().await?;

        Ok(rows_affected > 0)
    }

    #[tracing::instrument(
        name = "employees.service.add_employee_availability",
        skip(self, view),
        fields(tenant_id = %tenant),
        err
    )]
    async fn add_employee_availability(
        &self,
        tenant: TenantId,
        view: EmployeeAvailabilityView,
    ) -> Result<EmployeeAvailabilityId, EmployeesServiceError> {
        let mut tx = self.storage.begin().await?;

        let availability = convert_from_view(&mut tx, tenant, &view).await?;

        let created = tx.insert_employee_availability(&availability).await?;

        tx.commit().await?;

        info!(employee_availability_id = %created.id, "created employee availability");

        Ok(created.id)
    }

    #[tracing::instrument(
        name = "employees.service.update_employee_availability",
        skip(self, view),
        fields(tenant_id = %tenant),
        err
    )]
    async fn update_employee_availability(
        &self,
        tenant: TenantId,
        view: EmployeeAvailabilityView,
    ) -> Result<EmployeeAvailabilityView, EmployeesServiceError> {
        let mut tx = self.storage.begin().await?;

        let availability = convert_from_view(&mut tx, tenant, &view).await?;

        // An id that is not stored yet is merged as a new row.
        if let Some(id) = view.id
            && let Some(stored) = tx.find_employee_availability(id).await?
        {
            ensure_tenant(tenant, &stored)?;

            if let Some(expected) = view.version
                && expected != stored.version
            {
                return Err(EmployeesServiceError::StaleVersion {
                    id: id.into_i64(),
                    expected,
                    found: stored.version,
                });
            }
        }

        let merged = tx.upsert_employee_availability(&availability).await?;

        tx.commit().await?;

        info!(
            employee_availability_id = %merged.id,
            version = merged.version,
            "merged employee availability"
        );

        Ok(merged.into())
    }

    #[tracing::instrument(
        name = "employees.service.remove_employee_availability",
        skip(self),
        fields(tenant_id = %tenant, employee_availability_id = %availability),
        err
    )]
    async fn remove_employee_availability(
        &self,
        tenant: TenantId,
        availability: EmployeeAvailabilityId,
    ) -> Result<bool, EmployeesServiceError> {
        let mut tx = self.storage.begin().await?;

        let Some(existing) = tx.find_employee_availability(availability).await? else {
            return Ok(false);
        };

        ensure_tenant(tenant, &existing)?;

        let rows_affected = tx.delete_employee_availability(availability).await?;

        tx.commit().await?;

        Ok(rows_affected > 0)
    }
}

#[automock]
#[async_trait]
pub trait EmployeesService: Send + Sync {
    /// Retrieves every employee of the tenant.
    async fn list_employees(
        &self,
        tenant: TenantId,
    ) -> Result<Vec<EmployeeRecord>, EmployeesServiceError>;

    /// Retrieves a single employee, `None` when no employee has the id.
    async fn get_employee(
        &self,
        tenant: TenantId,
        employee: EmployeeId,
    ) -> Result<Option<EmployeeRecord>, EmployeesServiceError>;

    /// Creates an employee and its skill proficiencies.
    async fn add_employee(
        &self,
        tenant: TenantId,
        employee: NewEmployee,
    ) -> Result<EmployeeId, EmployeesServiceError>;

    /// Deletes an employee. `false` when there was nothing to delete.
    async fn remove_employee(
        &self,
        tenant: TenantId,
        employee: EmployeeId,
    ) -> Result<bool, EmployeesServiceError>;

    /// Creates an availability from a view.
    async fn add_employee_availability(
        &self,
        tenant: TenantId,
        view: EmployeeAvailabilityView,
    ) -> Result<EmployeeAvailabilityId, EmployeesServiceError>;

    /// Merges a view into storage: overwrites the availability with the same
    /// id, or inserts a new one.
    async fn update_employee_availability(
        &self,
        tenant: TenantId,
        view: EmployeeAvailabilityView,
    ) -> Result<EmployeeAvailabilityView, EmployeesServiceError>;

    /// Deletes an availability. `false` when there was nothing to delete.
    async fn remove_employee_availability(
        &self,
        tenant: TenantId,
        availability: EmployeeAvailabilityId,
    ) -> Result<bool, EmployeesServiceError>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::{
        domain::{
            employees::{data::NewSkillProficiency, records::EmployeeAvailabilityState},
            time_slots::records::TimeSlotId,
        },
        test::{
            TestContext,
            helpers::{add_employee, add_time_slot, availability_view, new_employee},
        },
    };

    use super::*;

    #[tokio::test]
    async fn add_employee_then_get_returns_equivalent_record() -> TestResult {
        let ctx = TestContext::in_memory();

        let id = ctx
            .employees
            .add_employee(ctx.tenant, new_employee(ctx.tenant, "Ann", &["Cooking"]))
            .await?;

        let employee = ctx
            .employees
            .get_employee(ctx.tenant, id)
            .await?
            .ok_or("employee should exist")?;

        assert_eq!(employee.id, id);
        assert_eq!(employee.tenant_id, ctx.tenant);
        assert_eq!(employee.name, "Ann");
        assert_eq!(employee.version, 0);

        let skills: Vec<&str> = employee
            .skill_proficiencies
            .iter()
            .map(|proficiency| proficiency.skill.as_str())
            .collect();

        assert_eq!(skills, vec!["Cooking"]);

        Ok(())
    }

    #[tokio::test]
    async fn get_employee_of_another_tenant_faults() -> TestResult {
        let ctx = TestContext::in_memory();

        let theirs = add_employee(&ctx, ctx.other_tenant, "Bob").await?;

        let result = ctx.employees.get_employee(ctx.tenant, theirs).await;

        assert!(
            matches!(
                result,
                Err(EmployeesServiceError::TenantMismatch(ref mismatch))
                    if mismatch.expected == ctx.tenant && mismatch.found == ctx.other_tenant
            ),
            "expected TenantMismatch, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn get_unknown_employee_returns_none() -> TestResult {
        let ctx = TestContext::in_memory();

        let employee = ctx
            .employees
            .get_employee(ctx.tenant, EmployeeId::from_i64(404))
            .await?;

        assert_eq!(employee, None);

        Ok(())
    }

    #[tokio::test]
    async fn add_employee_with_foreign_skill_proficiency_names_both_tenants() {
        let ctx = TestContext::in_memory();
        let tenant = TenantId::from_i64(5);

        let employee = NewEmployee {
            tenant_id: tenant,
            name: "Ann".to_string(),
            skill_proficiencies: vec![NewSkillProficiency {
                tenant_id: TenantId::from_i64(7),
                skill: "Cooking".to_string(),
            }],
        };

        let result = ctx.employees.add_employee(tenant, employee).await;

        let Err(EmployeesServiceError::TenantMismatch(mismatch)) = &result else {
            panic!("expected TenantMismatch, got {result:?}");
        };

        let message = mismatch.to_string();

        assert!(message.contains("tenant id (5)"), "got {message}");
        assert!(message.contains("tenant id (7)"), "got {message}");
        assert_eq!(mismatch.kind, "skill proficiency");
    }

    #[tokio::test]
    async fn add_employee_for_another_tenant_persists_nothing() -> TestResult {
        let ctx = TestContext::in_memory();

        let result = ctx
            .employees
            .add_employee(ctx.tenant, new_employee(ctx.other_tenant, "Bob", &[]))
            .await;

        assert!(
            matches!(result, Err(EmployeesServiceError::TenantMismatch(_))),
            "expected TenantMismatch, got {result:?}"
        );
        assert!(ctx.employees.list_employees(ctx.other_tenant).await?.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn add_employee_with_blank_name_is_invalid() {
        let ctx = TestContext::in_memory();

        let result = ctx
            .employees
            .add_employee(ctx.tenant, new_employee(ctx.tenant, "  ", &[]))
            .await;

        assert!(
            matches!(result, Err(EmployeesServiceError::InvalidData)),
            "expected InvalidData, got {result:?}"
        );
    }

    #[tokio::test]
    async fn add_employee_with_taken_name_already_exists() -> TestResult {
        let ctx = TestContext::in_memory();

        add_employee(&ctx, ctx.tenant, "Ann").await?;

        let result = add_employee(&ctx, ctx.tenant, "Ann").await;

        assert!(
            matches!(result, Err(EmployeesServiceError::AlreadyExists)),
            "expected AlreadyExists, got {result:?}"
        );

        // Names are only unique within a tenant.
        add_employee(&ctx, ctx.other_tenant, "Ann").await?;

        Ok(())
    }

    #[tokio::test]
    async fn list_employees_only_returns_own_tenant() -> TestResult {
        let ctx = TestContext::in_memory();

        let ann = add_employee(&ctx, ctx.tenant, "Ann").await?;
        add_employee(&ctx, ctx.other_tenant, "Bob").await?;
        let cat = add_employee(&ctx, ctx.tenant, "Cat").await?;
        add_employee(&ctx, ctx.other_tenant, "Dan").await?;

        let ids: Vec<EmployeeId> = ctx
            .employees
            .list_employees(ctx.tenant)
            .await?
            .into_iter()
            .map(|employee| employee.id)
            .collect();

        assert_eq!(ids, vec![ann, cat]);

        Ok(())
    }

    #[tokio::test]
    async fn remove_unknown_employee_returns_false_and_mutates_nothing() -> TestResult {
        let ctx = TestContext::in_memory();

        let ann = add_employee(&ctx, ctx.tenant, "Ann").await?;

        let removed = ctx
            .employees
            .remove_employee(ctx.tenant, EmployeeId::from_i64(404))
            .await?;

        assert!(!removed);
        assert!(ctx.employees.get_employee(ctx.tenant, ann).await?.is_some());

        Ok(())
    }

    #[tokio::test]
    async fn remove_employee_deletes_it() -> TestResult {
        let ctx = TestContext::in_memory();

        let ann = add_employee(&ctx, ctx.tenant, "Ann").await?;

        assert!(ctx.employees.remove_employee(ctx.tenant, ann).await?);
        assert_eq!(ctx.employees.get_employee(ctx.tenant, ann).await?, None);
        assert!(!ctx.employees.remove_employee(ctx.tenant, ann).await?);

        Ok(())
    }

    #[tokio::test]
    async fn remove_employee_of_another_tenant_faults_and_keeps_it() -> TestResult {
        let ctx = TestContext::in_memory();

        let bob = add_employee(&ctx, ctx.other_tenant, "Bob").await?;

        let result = ctx.employees.remove_employee(ctx.tenant, bob).await;

        assert!(
            matches!(result, Err(EmployeesServiceError::TenantMismatch(_))),
            "expected TenantMismatch, got {result:?}"
        );
        assert!(
            ctx.employees
                .get_employee(ctx.other_tenant, bob)
                .await?
                .is_some()
        );

        Ok(())
    }

    #[tokio::test]
    async fn remove_employee_with_availabilities_is_an_invalid_reference() -> TestResult {
        let ctx = TestContext::in_memory();

        let ann = add_employee(&ctx, ctx.tenant, "Ann").await?;
        let slot = add_time_slot(&ctx, ctx.tenant, 0).await?;

        ctx.employees
            .add_employee_availability(
                ctx.tenant,
                availability_view(ctx.tenant, ann, slot, EmployeeAvailabilityState::Desired),
            )
            .await?;

        let result = ctx.employees.remove_employee(ctx.tenant, ann).await;

        assert!(
            matches!(result, Err(EmployeesServiceError::InvalidReference)),
            "expected InvalidReference, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn add_employee_availability_links_employee_and_time_slot() -> TestResult {
        let ctx = TestContext::in_memory();

        let ann = add_employee(&ctx, ctx.tenant, "Ann").await?;
        let slot = add_time_slot(&ctx, ctx.tenant, 0).await?;

        let id = ctx
            .employees
            .add_employee_availability(
                ctx.tenant,
                availability_view(ctx.tenant, ann, slot, EmployeeAvailabilityState::Desired),
            )
            .await?;

        assert!(
            ctx.employees
                .remove_employee_availability(ctx.tenant, id)
                .await?
        );

        Ok(())
    }

    #[tokio::test]
    async fn availability_referencing_foreign_employee_faults_before_persisting() -> TestResult {
        let ctx = TestContext::in_memory();

        let bob = add_employee(&ctx, ctx.other_tenant, "Bob").await?;
        let slot = add_time_slot(&ctx, ctx.tenant, 0).await?;

        let result = ctx
            .employees
            .add_employee_availability(
                ctx.tenant,
                availability_view(ctx.tenant, bob, slot, EmployeeAvailabilityState::Desired),
            )
            .await;

        assert!(
            matches!(
                result,
                Err(EmployeesServiceError::TenantMismatch(ref mismatch)) if mismatch.kind == "employee"
            ),
            "expected TenantMismatch on the employee, got {result:?}"
        );

        // Nothing references Bob, so he can still be removed.
        assert!(ctx.employees.remove_employee(ctx.other_tenant, bob).await?);

        Ok(())
    }

    #[tokio::test]
    async fn availability_referencing_foreign_time_slot_faults() -> TestResult {
        let ctx = TestContext::in_memory();

        let ann = add_employee(&ctx, ctx.tenant, "Ann").await?;
        let slot = add_time_slot(&ctx, ctx.other_tenant, 0).await?;

        let result = ctx
            .employees
            .add_employee_availability(
                ctx.tenant,
                availability_view(ctx.tenant, ann, slot, EmployeeAvailabilityState::Undesired),
            )
            .await;

        assert!(
            matches!(
                result,
                Err(EmployeesServiceError::TenantMismatch(ref mismatch)) if mismatch.kind == "time slot"
            ),
            "expected TenantMismatch on the time slot, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn availability_view_of_another_tenant_faults() -> TestResult {
        let ctx = TestContext::in_memory();

        let ann = add_employee(&ctx, ctx.tenant, "Ann").await?;
        let slot = add_time_slot(&ctx, ctx.tenant, 0).await?;

        let result = ctx
            .employees
            .add_employee_availability(
                ctx.tenant,
                availability_view(
                    ctx.other_tenant,
                    ann,
                    slot,
                    EmployeeAvailabilityState::Desired,
                ),
            )
            .await;

        assert!(
            matches!(
                result,
                Err(EmployeesServiceError::TenantMismatch(ref mismatch))
                    if mismatch.kind == "employee availability view"
            ),
            "expected TenantMismatch on the view, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn availability_referencing_missing_time_slot_faults() -> TestResult {
        let ctx = TestContext::in_memory();

        let ann = add_employee(&ctx, ctx.tenant, "Ann").await?;

        let result = ctx
            .employees
            .add_employee_availability(
                ctx.tenant,
                availability_view(
                    ctx.tenant,
                    ann,
                    TimeSlotId::from_i64(404),
                    EmployeeAvailabilityState::Desired,
                ),
            )
            .await;

        assert!(
            matches!(
                result,
                Err(EmployeesServiceError::MissingReference {
                    kind: "time slot",
                    id: 404
                })
            ),
            "expected MissingReference, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn duplicate_availability_already_exists() -> TestResult {
        let ctx = TestContext::in_memory();

        let ann = add_employee(&ctx, ctx.tenant, "Ann").await?;
        let slot = add_time_slot(&ctx, ctx.tenant, 0).await?;
        let view = availability_view(ctx.tenant, ann, slot, EmployeeAvailabilityState::Desired);

        ctx.employees
            .add_employee_availability(ctx.tenant, view.clone())
            .await?;

        let result = ctx.employees.add_employee_availability(ctx.tenant, view).await;

        assert!(
            matches!(result, Err(EmployeesServiceError::AlreadyExists)),
            "expected AlreadyExists, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn update_employee_availability_overwrites_and_bumps_version() -> TestResult {
        let ctx = TestContext::in_memory();

        let ann = add_employee(&ctx, ctx.tenant, "Ann").await?;
        let slot = add_time_slot(&ctx, ctx.tenant, 0).await?;

        let id = ctx
            .employees
            .add_employee_availability(
                ctx.tenant,
                availability_view(ctx.tenant, ann, slot, EmployeeAvailabilityState::Desired),
            )
            .await?;

        let merged = ctx
            .employees
            .update_employee_availability(
                ctx.tenant,
                EmployeeAvailabilityView {
                    id: Some(id),
                    version: Some(0),
                    ..availability_view(
                        ctx.tenant,
                        ann,
                        slot,
                        EmployeeAvailabilityState::Unavailable,
                    )
                },
            )
            .await?;

        assert_eq!(merged.id, Some(id));
        assert_eq!(merged.version, Some(1));
        assert_eq!(merged.state, EmployeeAvailabilityState::Unavailable);

        Ok(())
    }

    #[tokio::test]
    async fn update_employee_availability_with_stale_version_is_rejected() -> TestResult {
        let ctx = TestContext::in_memory();

        let ann = add_employee(&ctx, ctx.tenant, "Ann").await?;
        let slot = add_time_slot(&ctx, ctx.tenant, 0).await?;
        let view = availability_view(ctx.tenant, ann, slot, EmployeeAvailabilityState::Desired);

        let id = ctx
            .employees
            .add_employee_availability(ctx.tenant, view.clone())
            .await?;

        let current = EmployeeAvailabilityView {
            id: Some(id),
            version: Some(0),
            ..view
        };

        ctx.employees
            .update_employee_availability(ctx.tenant, current.clone())
            .await?;

        let result = ctx
            .employees
            .update_employee_availability(ctx.tenant, current)
            .await;

        assert!(
            matches!(
                result,
                Err(EmployeesServiceError::StaleVersion {
                    expected: 0,
                    found: 1,
                    ..
                })
            ),
            "expected StaleVersion, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_updates_of_one_version_let_exactly_one_through() -> TestResult {
        let ctx = TestContext::in_memory();

        let ann = add_employee(&ctx, ctx.tenant, "Ann").await?;
        let slot = add_time_slot(&ctx, ctx.tenant, 0).await?;
        let view = availability_view(ctx.tenant, ann, slot, EmployeeAvailabilityState::Desired);

        let id = ctx
            .employees
            .add_employee_availability(ctx.tenant, view.clone())
            .await?;

        let mut updates = tokio::task::JoinSet::new();

        for _ in 0..16 {
            let employees = ctx.employees.clone();
            let tenant = ctx.tenant;
            let current = EmployeeAvailabilityView {
                id: Some(id),
                version: Some(0),
                ..view.clone()
            };

            updates.spawn(async move { employees.update_employee_availability(tenant, current).await });
        }

        let mut winners = 0;
        let mut stale = 0;

        while let Some(result) = updates.join_next().await {
            match result? {
                Ok(merged) => {
                    assert_eq!(merged.version, Some(1));
                    winners += 1;
                }
                Err(EmployeesServiceError::StaleVersion { found: 1, .. }) => stale += 1,
                Err(error) => return Err(error.into()),
            }
        }

        assert_eq!(winners, 1, "only one update may win version 0");
        assert_eq!(stale, 15);

        Ok(())
    }

    #[tokio::test]
    async fn update_employee_availability_without_id_inserts() -> TestResult {
        let ctx = TestContext::in_memory();

        let ann = add_employee(&ctx, ctx.tenant, "Ann").await?;
        let slot = add_time_slot(&ctx, ctx.tenant, 0).await?;

        let merged = ctx
            .employees
            .update_employee_availability(
                ctx.tenant,
                availability_view(ctx.tenant, ann, slot, EmployeeAvailabilityState::Undesired),
            )
            .await?;

        let id = merged.id.ok_or("merged availability should have an id")?;

        assert_eq!(merged.version, Some(0));
        assert!(
            ctx.employees
                .remove_employee_availability(ctx.tenant, id)
                .await?
        );

        Ok(())
    }

    #[tokio::test]
    async fn update_cannot_overwrite_another_tenants_availability() -> TestResult {
        let ctx = TestContext::in_memory();

        let bob = add_employee(&ctx, ctx.other_tenant, "Bob").await?;
        let their_slot = add_time_slot(&ctx, ctx.other_tenant, 0).await?;

        let theirs = ctx
            .employees
            .add_employee_availability(
                ctx.other_tenant,
                availability_view(
                    ctx.other_tenant,
                    bob,
                    their_slot,
                    EmployeeAvailabilityState::Desired,
                ),
            )
            .await?;

        let ann = add_employee(&ctx, ctx.tenant, "Ann").await?;
        let our_slot = add_time_slot(&ctx, ctx.tenant, 0).await?;

        let result = ctx
            .employees
            .update_employee_availability(
                ctx.tenant,
                EmployeeAvailabilityView {
                    id: Some(theirs),
                    ..availability_view(
                        ctx.tenant,
                        ann,
                        our_slot,
                        EmployeeAvailabilityState::Unavailable,
                    )
                },
            )
            .await;

        assert!(
            matches!(
                result,
                Err(EmployeesServiceError::TenantMismatch(ref mismatch))
                    if mismatch.kind == "employee availability"
            ),
            "expected TenantMismatch, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn remove_employee_availability_reports_absence() -> TestResult {
        let ctx = TestContext::in_memory();

        let removed = ctx
            .employees
            .remove_employee_availability(ctx.tenant, EmployeeAvailabilityId::from_i64(404))
            .await?;

        assert!(!removed);

        Ok(())
    }

    #[tokio::test]
    async fn remove_employee_availability_of_another_tenant_faults() -> TestResult {
        let ctx = TestContext::in_memory();

        let bob = add_employee(&ctx, ctx.other_tenant, "Bob").await?;
        let slot = add_time_slot(&ctx, ctx.other_tenant, 0).await?;

        let theirs = ctx
            .employees
            .add_employee_availability(
                ctx.other_tenant,
                availability_view(ctx.other_tenant, bob, slot, EmployeeAvailabilityState::Desired),
            )
            .await?;

        let result = ctx
            .employees
            .remove_employee_availability(ctx.tenant, theirs)
            .await;

        assert!(
            matches!(result, Err(EmployeesServiceError::TenantMismatch(_))),
            "expected TenantMismatch, got {result:?}"
        );

        Ok(())
    }
}
