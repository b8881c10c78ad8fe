//! Staff domain types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Role of a medical staff member.
///
/// Wire format: lower-case string (`"admin"`, `"doctor"`, `"nurse"`, `"supervisor"`).
/// Input parsing trims whitespace and ignores case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StaffRole {
    Admin,
    Doctor,
    Nurse,
    Supervisor,
}

/// Returned when a role string names no known role.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown staff role: {0}")]
pub struct UnknownRole(pub String);

/// Who must vouch for a new identity of a given role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Approval {
    /// The role cannot be registered through the public surface at all.
    NotRegistrable,
    /// An existing staff member of this role must present valid credentials.
    RequiredFrom(StaffRole),
}

impl StaffRole {
    pub const ALL: [StaffRole; 4] = [
        StaffRole::Admin,
        StaffRole::Doctor,
        StaffRole::Nurse,
        StaffRole::Supervisor,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Doctor => "doctor",
            Self::Nurse => "nurse",
            Self::Supervisor => "supervisor",
        }
    }

    /// Role-gating policy table.
    ///
    /// Supervisors are the root of the chain and are provisioned out of band.
    pub fn approval(self) -> Approval {
        match self {
            Self::Admin => Approval::RequiredFrom(Self::Supervisor),
            Self::Doctor | Self::Nurse => Approval::RequiredFrom(Self::Admin),
            Self::Supervisor => Approval::NotRegistrable,
        }
    }
}

impl fmt::Display for StaffRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StaffRole {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|role| role.as_str() == normalized)
            .ok_or_else(|| UnknownRole(s.to_owned()))
    }
}
