//! Storage engines.
//!
//! Services never talk to a database directly. They open a
//! [`StorageTransaction`] per operation, do every read and write through it,
//! and commit once at the end. A transaction that is dropped without being
//! committed leaves no trace.

use std::fmt::Debug;

use async_trait::async_trait;

use crate::domain::{
    employees::{
        data::{EmployeeAvailability, NewEmployee},
        records::{EmployeeAvailabilityId, EmployeeAvailabilityRecord, EmployeeId, EmployeeRecord},
    },
    tenants::TenantId,
    time_slots::{
        data::NewTimeSlot,
        records::{TimeSlotId, TimeSlotRecord},
    },
};

mod errors;
pub mod memory;
pub mod postgres;

pub use errors::StorageError;
pub use memory::MemoryStorage;
pub use postgres::PgStorage;

#[async_trait]
pub trait Storage: Debug + Send + Sync {
    /// Open a new transaction.
    async fn begin(&self) -> Result<Box<dyn StorageTransaction>, StorageError>;

    /// Short engine name, used in logs.
    fn backend_name(&self) -> &'static str;
}

/// One atomic unit of work.
///
/// Lookups by id are not tenant filtered: callers validate the tenant of
/// whatever they load. Bulk listings are filtered by tenant.
#[async_trait]
pub trait StorageTransaction: Send {
    async fn list_employees(
        &mut self,
        tenant: TenantId,
    ) -> Result<Vec<EmployeeRecord>, StorageError>;

    async fn find_employee(
        &mut self,
        employee: EmployeeId,
    ) -> Result<Option<EmployeeRecord>, StorageError>;

    /// Insert an employee together with its skill proficiencies.
    async fn insert_employee(
        &mut self,
        employee: &NewEmployee,
    ) -> Result<EmployeeRecord, StorageError>;

    /// Delete an employee and its skill proficiencies, returning the number of
    /// employees removed.
    async fn delete_employee(&mut self, employee: EmployeeId) -> Result<u64, StorageError>;

    async fn list_time_slots(
        &mut self,
        tenant: TenantId,
    ) -> Result<Vec<TimeSlotRecord>, StorageError>;

    async fn find_time_slot(
        &mut self,
        time_slot: TimeSlotId,
    ) -> Result<Option<TimeSlotRecord>, StorageError>;

    async fn insert_time_slot(
        &mut self,
        time_slot: &NewTimeSlot,
    ) -> Result<TimeSlotRecord, StorageError>;

    /// Find an availability and hold a write lock on it until the transaction
    /// ends, so the version read here is still current when it is overwritten.
    async fn find_employee_availability(
        &mut self,
        availability: EmployeeAvailabilityId,
    ) -> Result<Option<EmployeeAvailabilityRecord>, StorageError>;

    /// Insert an availability under a freshly assigned id, ignoring any id it
    /// already carries.
    async fn insert_employee_availability(
        &mut self,
        availability: &EmployeeAvailability,
    ) -> Result<EmployeeAvailabilityRecord, StorageError>;

    /// Overwrite the stored availability with the same id and bump its
    /// version, or insert it under a fresh id when there is none.
    async fn upsert_employee_availability(
        &mut self,
        availability: &EmployeeAvailability,
    ) -> Result<EmployeeAvailabilityRecord, StorageError>;

    async fn delete_employee_availability(
        &mut self,
        availability: EmployeeAvailabilityId,
    ) -> Result<u64, StorageError>;

    /// Make every write of this transaction visible.
    async fn commit(self: Box<Self>) -> Result<(), StorageError>;
}
