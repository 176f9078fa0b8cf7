//! `PostgreSQL` storage engine.

use std::fmt::{Debug, Formatter, Result as FmtResult};

use async_trait::async_trait;
use sqlx::{Postgres, Transaction};

use crate::{
    database::Db,
    domain::{
        employees::{
            data::{EmployeeAvailability, NewEmployee},
            records::{
                EmployeeAvailabilityId, EmployeeAvailabilityRecord, EmployeeId, EmployeeRecord,
            },
            repositories::{PgEmployeeAvailabilitiesRepository, PgEmployeesRepository},
        },
        tenants::TenantId,
        time_slots::{
            data::NewTimeSlot,
            records::{TimeSlotId, TimeSlotRecord},
            repository::PgTimeSlotsRepository,
        },
    },
    storage::{Storage, StorageError, StorageTransaction},
};

#[derive(Debug, Clone)]
pub struct PgStorage {
    db: Db,
}

impl PgStorage {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self { db }
    }
}

#[async_trait]
impl Storage for PgStorage {
    async fn begin(&self) -> Result<Box<dyn StorageTransaction>, StorageError> {
        let tx = self.db.begin_transaction().await?;

        Ok(Box::new(PgStorageTransaction {
            tx,
            employees: PgEmployeesRepository::new(),
            availabilities: PgEmployeeAvailabilitiesRepository::new(),
            time_slots: PgTimeSlotsRepository::new(),
        }))
    }

    fn backend_name(&self) -> &'static str {
        "postgres"
    }
}

/// A `sqlx` transaction plus the repositories that run inside it. Rolled back
/// by `sqlx` when dropped uncommitted.
pub struct PgStorageTransaction {
    tx: Transaction<'static, Postgres>,
    employees: PgEmployeesRepository,
    availabilities: PgEmployeeAvailabilitiesRepository,
    time_slots: PgTimeSlotsRepository,
}

impl Debug for PgStorageTransaction {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("PgStorageTransaction").finish_non_exhaustive()
    }
}

#[async_trait]
impl StorageTransaction for PgStorageTransaction {
    async fn list_employees(
        &mut self,
        tenant: TenantId,
    ) -> Result<Vec<EmployeeRecord>, StorageError> {
        Ok(self.employees.list_employees(&mut self.tx, tenant).await?)
    }

    async fn find_employee(
        &mut self,
        employee: EmployeeId,
    ) -> Result<Option<EmployeeRecord>, StorageError> {
        Ok(self.employees.find_employee(&mut self.tx, employee).await?)
    }

    async fn insert_employee(
        &mut self,
        employee: &NewEmployee,
    ) -> Result<EmployeeRecord, StorageError> {
        Ok(self.employees.create_employee(&mut self.tx, employee).await?)
    }

    async fn delete_employee(&mut self, employee: EmployeeId) -> Result<u64, StorageError> {
        Ok(self.employees.delete_employee(&mut self.tx, employee).await?)
    }

    async fn list_time_slots(
        &mut self,
        tenant: TenantId,
    ) -> Result<Vec<TimeSlotRecord>, StorageError> {
        Ok(self.time_slots.list_time_slots(&mut self.tx, tenant).await?)
    }

    async fn find_time_slot(
        &mut self,
        time_slot: TimeSlotId,
    ) -> Result<Option<TimeSlotRecord>, StorageError> {
        Ok(self.time_slots.find_time_slot(&mut self.tx, time_slot).await?)
    }

    async fn insert_time_slot(
        &mut self,
        time_slot: &NewTimeSlot,
    ) -> Result<TimeSlotRecord, StorageError> {
        Ok(self
            .time_slots
            .create_time_slot(&mut self.tx, time_slot)
            .await?)
    }

    async fn find_employee_availability(
        &mut self,
        availability: EmployeeAvailabilityId,
    ) -> Result<Option<EmployeeAvailabilityRecord>, StorageError> {
        Ok(self
            .availabilities
            .find_employee_availability(&mut self.tx, availability)
            .await?)
    }

    async fn insert_employee_availability(
        &mut self,
        availability: &EmployeeAvailability,
    ) -> Result<EmployeeAvailabilityRecord, StorageError> {
        Ok(self
            .availabilities
            .create_employee_availability(&mut self.tx, availability)
            .await?)
    }

    async fn upsert_employee_availability(
        &mut self,
        availability: &EmployeeAvailability,
    ) -> Result<EmployeeAvailabilityRecord, StorageError> {
        if let Some(id) = availability.id()
            && let Some(updated) = self
                .availabilities
                .update_employee_availability(&mut self.tx, id, availability)
                .await?
        {
            return Ok(updated);
        }

        Ok(self
            .availabilities
            .create_employee_availability(&mut self.tx, availability)
            .await?)
    }

    async fn delete_employee_availability(
        &mut self,
        availability: EmployeeAvailabilityId,
    ) -> Result<u64, StorageError> {
        Ok(self
            .availabilities
            .delete_employee_availability(&mut self.tx, availability)
            .await?)
    }

    async fn commit(self: Box<Self>) -> Result<(), StorageError> {
        Ok(self.tx.commit().await?)
    }
}
