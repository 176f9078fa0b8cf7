//! Employee Availabilities Repository

use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as};

use crate::domain::{
    employees::{
        data::EmployeeAvailability,
        records::{
            EmployeeAvailabilityId, EmployeeAvailabilityRecord, EmployeeAvailabilityState,
            EmployeeId,
        },
    },
    tenants::{TenantId, TenantScoped},
    time_slots::records::TimeSlotId,
};

const FIND_EMPLOYEE_AVAILABILITY_SQL: &str =
    include_str!("../sql/find_employee_availability.sql");
const CREATE_EMPLOYEE_AVAILABILITY_SQL: &str =
    include_str!("../sql/create_employee_availability.sql");
const UPDATE_EMPLOYEE_AVAILABILITY_SQL: &str =
    include_str!("../sql/update_employee_availability.sql");
const DELETE_EMPLOYEE_AVAILABILITY_SQL: &str =
    include_str!("../sql/delete_employee_availability.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgEmployeeAvailabilitiesRepository;

impl PgEmployeeAvailabilitiesRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    /// Locks the row (`FOR UPDATE`) for the rest of `tx`.
    pub(crate) async fn find_employee_availability(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        availability: EmployeeAvailabilityId,
    ) -> Result<Option<EmployeeAvailabilityRecord>, sqlx::Error> {
        query_as::<Postgres, EmployeeAvailabilityRecord>(FIND_EMPLOYEE_AVAILABILITY_SQL)
            .bind(availability.into_i64())
            .fetch_optional(&mut **tx)
            .await
    }

    pub(crate) async fn create_employee_availability(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        availability: &EmployeeAvailability,
    ) -> Result<EmployeeAvailabilityRecord, sqlx::Error> {
        query_as::<Postgres, EmployeeAvailabilityRecord>(CREATE_EMPLOYEE_AVAILABILITY_SQL)
            .bind(availability.tenant_id().into_i64())
            .bind(availability.employee().id.into_i64())
            .bind(availability.time_slot().id.into_i64())
            .bind(availability.state().as_str())
            .fetch_one(&mut **tx)
            .await
    }

    /// Overwrite an existing availability, bumping its version. `None` when no
    /// row has the given id.
    pub(crate) async fn update_employee_availability(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        id: EmployeeAvailabilityId,
        availability: &EmployeeAvailability,
    ) -> Result<Option<EmployeeAvailabilityRecord>, sqlx::Error> {
        query_as::<Postgres, EmployeeAvailabilityRecord>(UPDATE_EMPLOYEE_AVAILABILITY_SQL)
            .bind(id.into_i64())
            .bind(availability.tenant_id().into_i64())
            .bind(availability.employee().id.into_i64())
            .bind(availability.time_slot().id.into_i64())
            .bind(availability.state().as_str())
            .fetch_optional(&mut **tx)
            .await
    }

    pub(crate) async fn delete_employee_availability(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        availability: EmployeeAvailabilityId,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_EMPLOYEE_AVAILABILITY_SQL)
            .bind(availability.into_i64())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

impl<'r> FromRow<'r, PgRow> for EmployeeAvailabilityRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let state: String = row.try_get("state")?;

        let state = state
            .parse::<EmployeeAvailabilityState>()
            .map_err(|e| sqlx::Error::ColumnDecode {
                index: "state".to_string(),
                source: Box::new(e),
            })?;

        Ok(Self {
            id: EmployeeAvailabilityId::from_i64(row.try_get("id")?),
            tenant_id: TenantId::from_i64(row.try_get("tenant_id")?),
            version: row.try_get("version")?,
            employee_id: EmployeeId::from_i64(row.try_get("employee_id")?),
            time_slot_id: TimeSlotId::from_i64(row.try_get("time_slot_id")?),
            state,
        })
    }
}
