//! In-memory storage engine.
//!
//! State lives in process-local ordered maps behind a single
//! `tokio::sync::Mutex`. A transaction holds the lock for its whole lifetime
//! and works on a private copy of the state, which replaces the shared state
//! on commit. Dropping the transaction discards the copy, so aborted
//! operations leave nothing behind.
//!
//! The engine enforces the same constraints as the `PostgreSQL` schema:
//! non-empty names and skills, `start < end` for time slots, unique employee
//! names per tenant, one availability per employee and time slot, cascading
//! skill proficiencies and restricted deletion of referenced employees.
//!
//! Not durable: everything is lost on restart.

use std::{collections::BTreeMap, sync::Arc};

use async_trait::async_trait;
use tokio::sync::{Mutex, OwnedMutexGuard};

use crate::{
    domain::{
        employees::{
            data::{EmployeeAvailability, NewEmployee},
            records::{
                EmployeeAvailabilityId, EmployeeAvailabilityRecord, EmployeeId, EmployeeRecord,
                SkillProficiencyRecord,
            },
        },
        tenants::{TenantId, TenantScoped},
        time_slots::{
            data::NewTimeSlot,
            records::{TimeSlotId, TimeSlotRecord},
        },
    },
    storage::{Storage, StorageError, StorageTransaction},
};

#[derive(Debug, Clone, Default)]
struct MemoryState {
    last_id: i64,
    employees: BTreeMap<EmployeeId, EmployeeRecord>,
    time_slots: BTreeMap<TimeSlotId, TimeSlotRecord>,
    availabilities: BTreeMap<EmployeeAvailabilityId, EmployeeAvailabilityRecord>,
}

impl MemoryState {
    fn next_id(&mut self) -> i64 {
        self.last_id += 1;
        self.last_id
    }

    fn check_availability(
        &self,
        availability: &EmployeeAvailability,
        replacing: Option<EmployeeAvailabilityId>,
    ) -> Result<(), StorageError> {
        let employee = availability.employee().id;
        let time_slot = availability.time_slot().id;

        if !self.employees.contains_key(&employee) || !self.time_slots.contains_key(&time_slot) {
            return Err(StorageError::InvalidReference);
        }

        let duplicate = self.availabilities.values().any(|existing| {
            Some(existing.id) != replacing
                && existing.tenant_id == availability.tenant_id()
                && existing.employee_id == employee
                && existing.time_slot_id == time_slot
        });

        if duplicate {
            return Err(StorageError::AlreadyExists);
        }

        Ok(())
    }

    fn insert_availability(
        &mut self,
        availability: &EmployeeAvailability,
    ) -> Result<EmployeeAvailabilityRecord, StorageError> {
        self.check_availability(availability, None)?;

        let record = EmployeeAvailabilityRecord {
            id: EmployeeAvailabilityId::from_i64(self.next_id()),
            tenant_id: availability.tenant_id(),
            version: 0,
            employee_id: availability.employee().id,
            time_slot_id: availability.time_slot().id,
            state: availability.state(),
        };

        self.availabilities.insert(record.id, record.clone());

        Ok(record)
    }
}

/// Process-local storage, cheap to clone and share.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    state: Arc<Mutex<MemoryState>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn begin(&self) -> Result<Box<dyn StorageTransaction>, StorageError> {
        let guard = Arc::clone(&self.state).lock_owned().await;
        let working = guard.clone();

        Ok(Box::new(MemoryTransaction { guard, working }))
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}

/// Exclusive transaction over [`MemoryStorage`].
#[derive(Debug)]
pub struct MemoryTransaction {
    guard: OwnedMutexGuard<MemoryState>,
    working: MemoryState,
}

#[async_trait]
impl StorageTransaction for MemoryTransaction {
    async fn list_employees(
        &mut self,
        tenant: TenantId,
    ) -> Result<Vec<EmployeeRecord>, StorageError> {
        Ok(self
            .working
            .employees
            .values()
            .filter(|employee| employee.tenant_id == tenant)
            .cloned()
            .collect())
    }

    async fn find_employee(
        &mut self,
        employee: EmployeeId,
    ) -> Result<Option<EmployeeRecord>, StorageError> {
        Ok(self.working.employees.get(&employee).cloned())
    }

    async fn insert_employee(
        &mut self,
        employee: &NewEmployee,
    ) -> Result<EmployeeRecord, StorageError> {
        if employee.name.trim().is_empty()
            || employee
                .skill_proficiencies
                .iter()
                .any(|proficiency| proficiency.skill.trim().is_empty())
        {
            return Err(StorageError::InvalidData);
        }

        let taken = self
            .working
            .employees
            .values()
            .any(|existing| existing.tenant_id == employee.tenant_id && existing.name == employee.name);

        if taken {
            return Err(StorageError::AlreadyExists);
        }

        let id = EmployeeId::from_i64(self.working.next_id());

        let skill_proficiencies = employee
            .skill_proficiencies
            .iter()
            .map(|proficiency| SkillProficiencyRecord {
                id: self.working.next_id().into(),
                tenant_id: proficiency.tenant_id,
                version: 0,
                skill: proficiency.skill.clone(),
            })
            .collect();

        let record = EmployeeRecord {
            id,
            tenant_id: employee.tenant_id,
            version: 0,
            name: employee.name.clone(),
            skill_proficiencies,
        };

        self.working.employees.insert(id, record.clone());

        Ok(record)
    }

    async fn delete_employee(&mut self, employee: EmployeeId) -> Result<u64, StorageError> {
        if self
            .working
            .availabilities
            .values()
            .any(|availability| availability.employee_id == employee)
        {
            return Err(StorageError::InvalidReference);
        }

        Ok(u64::from(self.working.employees.remove(&employee).is_some()))
    }

    async fn list_time_slots(
        &mut self,
        tenant: TenantId,
    ) -> Result<Vec<TimeSlotRecord>, StorageError> {
        let mut time_slots: Vec<TimeSlotRecord> = self
            .working
            .time_slots
            .values()
            .filter(|time_slot| time_slot.tenant_id == tenant)
            .cloned()
            .collect();

        time_slots.sort_by_key(|time_slot| (time_slot.start, time_slot.id));

        Ok(time_slots)
    }

    async fn find_time_slot(
        &mut self,
        time_slot: TimeSlotId,
    ) -> Result<Option<TimeSlotRecord>, StorageError> {
        Ok(self.working.time_slots.get(&time_slot).cloned())
    }

    async fn insert_time_slot(
        &mut self,
        time_slot: &NewTimeSlot,
    ) -> Result<TimeSlotRecord, StorageError> {
        if time_slot.start >= time_slot.end {
            return Err(StorageError::InvalidData);
        }

        let record = TimeSlotRecord {
            id: TimeSlotId::from_i64(self.working.next_id()),
            tenant_id: time_slot.tenant_id,
            version: 0,
            start: time_slot.start,
            end: time_slot.end,
        };

        self.working.time_slots.insert(record.id, record.clone());

        Ok(record)
    }

    async fn find_employee_availability(
        &mut self,
        availability: EmployeeAvailabilityId,
    ) -> Result<Option<EmployeeAvailabilityRecord>, StorageError> {
        Ok(self.working.availabilities.get(&availability).cloned())
    }

    async fn insert_employee_availability(
        &mut self,
        availability: &EmployeeAvailability,
    ) -> Result<EmployeeAvailabilityRecord, StorageError> {
        self.working.insert_availability(availability)
    }

    async fn upsert_employee_availability(
        &mut self,
        availability: &EmployeeAvailability,
    ) -> Result<EmployeeAvailabilityRecord, StorageError> {
        let Some(id) = availability
            .id()
            .filter(|id| self.working.availabilities.contains_key(id))
        else {
            return self.working.insert_availability(availability);
        };

        self.working.check_availability(availability, Some(id))?;

        let Some(stored) = self.working.availabilities.get_mut(&id) else {
            return Err(StorageError::NotFound);
        };

        stored.tenant_id = availability.tenant_id();
        stored.version += 1;
        stored.employee_id = availability.employee().id;
        stored.time_slot_id = availability.time_slot().id;
        stored.state = availability.state();

        Ok(stored.clone())
    }

    async fn delete_employee_availability(
        &mut self,
        availability: EmployeeAvailabilityId,
    ) -> Result<u64, StorageError> {
        Ok(u64::from(
            self.working.availabilities.remove(&availability).is_some(),
        ))
    }

    async fn commit(self: Box<Self>) -> Result<(), StorageError> {
        let Self { mut guard, working } = *self;

        *guard = working;

        Ok(())
    }
}
