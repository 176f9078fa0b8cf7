//! Time slots service.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use tracing::info;

use crate::{
    domain::{
        tenants::{TenantId, ensure_tenant},
        time_slots::{
            data::NewTimeSlot,
            errors::TimeSlotsServiceError,
            records::{TimeSlotId, TimeSlotRecord},
        },
    },
    storage::Storage,
};

#[derive(Debug, Clone)]
pub struct StorageTimeSlotsService {
    storage: Arc<dyn Storage>,
}

impl StorageTimeSlotsService {
    #[must_use]
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }
}

#[async_trait]
impl TimeSlotsService for StorageTimeSlotsService {
    async fn list_time_slots(
        &self,
        tenant: TenantId,
    ) -> Result<Vec<TimeSlotRecord>, TimeSlotsServiceError> {
        let mut tx = self.storage.begin().await?;

        let time_slots = tx.list_time_slots(tenant).await?;

        tx.commit().await?;

        Ok(time_slots)
    }

    #[tracing::instrument(
        name = "time_slots.service.add_time_slot",
        skip(self, time_slot),
        fields(tenant_id = %tenant),
        err
    )]
    async fn add_time_slot(
        &self,
        tenant: TenantId,
        time_slot: NewTimeSlot,
    ) -> Result<TimeSlotId, TimeSlotsServiceError> {
        ensure_tenant(tenant, &time_slot)?;

        if time_slot.start >= time_slot.end {
            return Err(TimeSlotsServiceError::InvalidData);
        }

        let mut tx = self.storage.begin().await?;

        let created = tx.insert_time_slot(&time_slot).await?;

        tx.commit().await?;

        info!(time_slot_id = %created.id, "created time slot");

        Ok(created.id)
    }
}

#[automock]
#[async_trait]
pub trait TimeSlotsService: Send + Sync {
    /// Retrieves the tenant's time slots, earliest first.
    async fn list_time_slots(
        &self,
        tenant: TenantId,
    ) -> Result<Vec<TimeSlotRecord>, TimeSlotsServiceError>;

    /// Creates a time slot, returning its storage-assigned id.
    async fn add_time_slot(
        &self,
        tenant: TenantId,
        time_slot: NewTimeSlot,
    ) -> Result<TimeSlotId, TimeSlotsServiceError>;
}
