//! Employees Repository

use std::collections::HashMap;

use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as};

use crate::domain::{
    employees::{
        data::NewEmployee,
        records::{EmployeeId, EmployeeRecord, SkillProficiencyRecord},
    },
    tenants::TenantId,
};

const LIST_EMPLOYEES_SQL: &str = include_str!("../sql/list_employees.sql");
const FIND_EMPLOYEE_SQL: &str = include_str!("../sql/find_employee.sql");
const CREATE_EMPLOYEE_SQL: &str = include_str!("../sql/create_employee.sql");
const DELETE_EMPLOYEE_SQL: &str = include_str!("../sql/delete_employee.sql");
const LIST_SKILL_PROFICIENCIES_SQL: &str = include_str!("../sql/list_skill_proficiencies.sql");
const CREATE_SKILL_PROFICIENCY_SQL: &str = include_str!("../sql/create_skill_proficiency.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgEmployeesRepository;

impl PgEmployeesRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_employees(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        tenant: TenantId,
    ) -> Result<Vec<EmployeeRecord>, sqlx::Error> {
        let rows = query_as::<Postgres, EmployeeRow>(LIST_EMPLOYEES_SQL)
            .bind(tenant.into_i64())
            .fetch_all(&mut **tx)
            .await?;

        self.attach_skill_proficiencies(tx, rows).await
    }

    pub(crate) async fn find_employee(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        employee: EmployeeId,
    ) -> Result<Option<EmployeeRecord>, sqlx::Error> {
        let Some(row) = query_as::<Postgres, EmployeeRow>(FIND_EMPLOYEE_SQL)
            .bind(employee.into_i64())
            .fetch_optional(&mut **tx)
            .await?
        else {
            return Ok(None);
        };

        let mut employees = self.attach_skill_proficiencies(tx, vec![row]).await?;

        Ok(employees.pop())
    }

    pub(crate) async fn create_employee(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        employee: &NewEmployee,
    ) -> Result<EmployeeRecord, sqlx::Error> {
        let row = query_as::<Postgres, EmployeeRow>(CREATE_EMPLOYEE_SQL)
            .bind(employee.tenant_id.into_i64())
            .bind(&employee.name)
            .fetch_one(&mut **tx)
            .await?;

        let mut skill_proficiencies = Vec::with_capacity(employee.skill_proficiencies.len());

        for proficiency in &employee.skill_proficiencies {
            let created = query_as::<Postgres, SkillProficiencyRow>(CREATE_SKILL_PROFICIENCY_SQL)
                .bind(proficiency.tenant_id.into_i64())
                .bind(row.id.into_i64())
                .bind(&proficiency.skill)
                .fetch_one(&mut **tx)
                .await?;

            skill_proficiencies.push(created.proficiency);
        }

        Ok(row.into_record(skill_proficiencies))
    }

    /// Skill proficiencies go with the employee (`ON DELETE CASCADE`).
    pub(crate) async fn delete_employee(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        employee: EmployeeId,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_EMPLOYEE_SQL)
            .bind(employee.into_i64())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    async fn attach_skill_proficiencies(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        rows: Vec<EmployeeRow>,
    ) -> Result<Vec<EmployeeRecord>, sqlx::Error> {
        if rows.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<i64> = rows.iter().map(|row| row.id.into_i64()).collect();

        let proficiencies = query_as::<Postgres, SkillProficiencyRow>(LIST_SKILL_PROFICIENCIES_SQL)
            .bind(ids)
            .fetch_all(&mut **tx)
            .await?;

        let mut by_employee: HashMap<EmployeeId, Vec<SkillProficiencyRecord>> = HashMap::new();

        for row in proficiencies {
            by_employee
                .entry(row.employee_id)
                .or_default()
                .push(row.proficiency);
        }

        Ok(rows
            .into_iter()
            .map(|row| {
                let skill_proficiencies = by_employee.remove(&row.id).unwrap_or_default();

                row.into_record(skill_proficiencies)
            })
            .collect())
    }
}

struct EmployeeRow {
    id: EmployeeId,
    tenant_id: TenantId,
    version: i64,
    name: String,
}

impl EmployeeRow {
    fn into_record(self, skill_proficiencies: Vec<SkillProficiencyRecord>) -> EmployeeRecord {
        EmployeeRecord {
            id: self.id,
            tenant_id: self.tenant_id,
            version: self.version,
            name: self.name,
            skill_proficiencies,
        }
    }
}

impl<'r> FromRow<'r, PgRow> for EmployeeRow {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: EmployeeId::from_i64(row.try_get("id")?),
            tenant_id: TenantId::from_i64(row.try_get("tenant_id")?),
            version: row.try_get("version")?,
            name: row.try_get("name")?,
        })
    }
}

struct SkillProficiencyRow {
    employee_id: EmployeeId,
    proficiency: SkillProficiencyRecord,
}

impl<'r> FromRow<'r, PgRow> for SkillProficiencyRow {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            employee_id: EmployeeId::from_i64(row.try_get("employee_id")?),
            proficiency: SkillProficiencyRecord {
                id: row.try_get::<i64, _>("id")?.into(),
                tenant_id: TenantId::from_i64(row.try_get("tenant_id")?),
                version: row.try_get("version")?,
                skill: row.try_get("skill")?,
            },
        })
    }
}
