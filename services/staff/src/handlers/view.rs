use serde::Serialize;

use smarter_domain::staff::StaffRole;

use crate::domain::types::StaffProfile;

/// Wire shape of a staff profile, matching the field names the dashboard reads.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffResponse {
    #[serde(rename = "userID")]
    pub user_id: String,
    pub user_name: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: StaffRole,
    pub hospital_name: String,
    #[serde(rename = "hospitalID")]
    pub hospital_id: String,
    #[serde(serialize_with = "smarter_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<StaffProfile> for StaffResponse {
    fn from(profile: StaffProfile) -> Self {
        Self {
            user_name: profile.display_name(),
            user_id: profile.user_id,
            first_name: profile.first_name,
            last_name: profile.last_name,
            email: profile.email,
            role: profile.role,
            hospital_name: profile.hospital_name,
            hospital_id: profile.hospital_id,
            created_at: profile.created_at,
        }
    }
}

/// `{ message, user }` body returned by login and registration.
#[derive(Debug, Serialize)]
pub struct StaffEnvelope {
    pub message: &'static str,
    pub user: StaffResponse,
}
