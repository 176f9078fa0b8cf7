//! Employee Records

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    domain::{
        tenants::{OwnedEntities, TenantId, TenantScoped},
        time_slots::records::TimeSlotId,
    },
    ids::TypedId,
};

/// Employee Id
pub type EmployeeId = TypedId<EmployeeRecord>;

/// Skill Proficiency Id
pub type SkillProficiencyId = TypedId<SkillProficiencyRecord>;

/// Employee Availability Id
pub type EmployeeAvailabilityId = TypedId<EmployeeAvailabilityRecord>;

/// Employee Record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    pub id: EmployeeId,
    pub tenant_id: TenantId,
    pub version: i64,
    pub name: String,
    pub skill_proficiencies: Vec<SkillProficiencyRecord>,
}

impl TenantScoped for EmployeeRecord {
    fn tenant_id(&self) -> TenantId {
        self.tenant_id
    }

    fn entity_kind(&self) -> &'static str {
        "employee"
    }

    fn entity_id(&self) -> Option<i64> {
        Some(self.id.into_i64())
    }

    fn owned(&self) -> OwnedEntities<'_> {
        self.skill_proficiencies
            .iter()
            .map(|proficiency| proficiency as &dyn TenantScoped)
            .collect()
    }
}

/// Skill Proficiency Record
///
/// Owned by exactly one employee and removed together with it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillProficiencyRecord {
    pub id: SkillProficiencyId,
    pub tenant_id: TenantId,
    pub version: i64,
    pub skill: String,
}

impl TenantScoped for SkillProficiencyRecord {
    fn tenant_id(&self) -> TenantId {
        self.tenant_id
    }

    fn entity_kind(&self) -> &'static str {
        "skill proficiency"
    }

    fn entity_id(&self) -> Option<i64> {
        Some(self.id.into_i64())
    }
}

/// Employee Availability Record
///
/// The persisted row: links are stored as ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeAvailabilityRecord {
    pub id: EmployeeAvailabilityId,
    pub tenant_id: TenantId,
    pub version: i64,
    pub employee_id: EmployeeId,
    pub time_slot_id: TimeSlotId,
    pub state: EmployeeAvailabilityState,
}

impl TenantScoped for EmployeeAvailabilityRecord {
    fn tenant_id(&self) -> TenantId {
        self.tenant_id
    }

    fn entity_kind(&self) -> &'static str {
        "employee availability"
    }

    fn entity_id(&self) -> Option<i64> {
        Some(self.id.into_i64())
    }
}

/// How an employee feels about working a time slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EmployeeAvailabilityState {
    Desired,
    Undesired,
    Unavailable,
}

impl EmployeeAvailabilityState {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Desired => "DESIRED",
            Self::Undesired => "UNDESIRED",
            Self::Unavailable => "UNAVAILABLE",
        }
    }
}

impl fmt::Display for EmployeeAvailabilityState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("unknown employee availability state: {0}")]
pub struct UnknownAvailabilityState(pub String);

impl FromStr for EmployeeAvailabilityState {
    type Err = UnknownAvailabilityState;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "DESIRED" => Ok(Self::Desired),
            "UNDESIRED" => Ok(Self::Undesired),
            "UNAVAILABLE" => Ok(Self::Unavailable),
            other => Err(UnknownAvailabilityState(other.to_string())),
        }
    }
}
