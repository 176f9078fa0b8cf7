//! Time Slots Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as};

use crate::domain::{
    tenants::TenantId,
    time_slots::{
        data::NewTimeSlot,
        records::{TimeSlotId, TimeSlotRecord},
    },
};

const LIST_TIME_SLOTS_SQL: &str = include_str!("sql/list_time_slots.sql");
const FIND_TIME_SLOT_SQL: &str = include_str!("sql/find_time_slot.sql");
const CREATE_TIME_SLOT_SQL: &str = include_str!("sql/create_time_slot.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgTimeSlotsRepository;

impl PgTimeSlotsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_time_slots(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        tenant: TenantId,
    ) -> Result<Vec<TimeSlotRecord>, sqlx::Error> {
        query_as::<Postgres, TimeSlotRecord>(LIST_TIME_SLOTS_SQL)
            .bind(tenant.into_i64())
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn find_time_slot(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        time_slot: TimeSlotId,
    ) -> Result<Option<TimeSlotRecord>, sqlx::Error> {
        query_as::<Postgres, TimeSlotRecord>(FIND_TIME_SLOT_SQL)
            .bind(time_slot.into_i64())
            .fetch_optional(&mut **tx)
            .await
    }

    pub(crate) async fn create_time_slot(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        time_slot: &NewTimeSlot,
    ) -> Result<TimeSlotRecord, sqlx::Error> {
        query_as::<Postgres, TimeSlotRecord>(CREATE_TIME_SLOT_SQL)
            .bind(time_slot.tenant_id.into_i64())
            .bind(SqlxTimestamp::from(time_slot.start))
            .bind(SqlxTimestamp::from(time_slot.end))
            .fetch_one(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for TimeSlotRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: TimeSlotId::from_i64(row.try_get("id")?),
            tenant_id: TenantId::from_i64(row.try_get("tenant_id")?),
            version: row.try_get("version")?,
            start: row.try_get::<SqlxTimestamp, _>("start_time")?.to_jiff(),
            end: row.try_get::<SqlxTimestamp, _>("end_time")?.to_jiff(),
        })
    }
}
