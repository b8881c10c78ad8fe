use chrono::{DateTime, Utc};
use uuid::Uuid;

use smarter_domain::staff::StaffRole;

use crate::error::StaffServiceError;

/// Persisted medical-staff identity.
#[derive(Debug, Clone)]
pub struct StaffRecord {
    pub id: Uuid,
    pub user_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: StaffRole,
    pub password_hash: String,
    pub hospital_name: String,
    pub hospital_id: String,
    /// `user_id` of the approver whose credentials gated creation.
    pub approved_by: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl StaffRecord {
    /// Public view of the record. Drops the password hash.
    pub fn profile(&self) -> StaffProfile {
        StaffProfile {
            user_id: self.user_id.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            role: self.role,
            hospital_name: self.hospital_name.clone(),
            hospital_id: self.hospital_id.clone(),
            created_at: self.created_at,
        }
    }
}

/// What login, registration and session checks hand back to callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaffProfile {
    pub user_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: StaffRole,
    pub hospital_name: String,
    pub hospital_id: String,
    pub created_at: DateTime<Utc>,
}

impl StaffProfile {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Identity fields for a new staff member, shared by self-registration and provisioning.
#[derive(Debug, Clone)]
pub struct StaffDetails {
    pub user_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub hospital_name: String,
    pub hospital_id: String,
}

/// Minimum plaintext password length accepted at registration.
pub const MIN_PASSWORD_LEN: usize = 6;

/// bcrypt reads 72 bytes of input including a trailing NUL.
pub const MAX_PASSWORD_BYTES: usize = 71;

impl StaffDetails {
    /// Trim every field except the password and lower-case the email.
    pub fn normalized(self) -> Self {
        Self {
            user_id: self.user_id.trim().to_owned(),
            first_name: self.first_name.trim().to_owned(),
            last_name: self.last_name.trim().to_owned(),
            email: normalize_email(&self.email),
            password: self.password,
            hospital_name: self.hospital_name.trim().to_owned(),
            hospital_id: self.hospital_id.trim().to_owned(),
        }
    }

    /// Expects normalized input.
    pub fn validate(&self) -> Result<(), StaffServiceError> {
        let required = [
            ("userID", &self.user_id),
            ("firstName", &self.first_name),
            ("lastName", &self.last_name),
            ("email", &self.email),
            ("hospitalName", &self.hospital_name),
            ("hospitalID", &self.hospital_id),
        ];
        if let Some((name, _)) = required.iter().find(|(_, value)| value.is_empty()) {
            return Err(StaffServiceError::validation(format!("{name} is required")));
        }
        if !validate_email(&self.email) {
            return Err(StaffServiceError::validation("email is invalid"));
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(StaffServiceError::validation(format!(
                "password must be at least {MIN_PASSWORD_LEN} characters"
            )));
        }
        if self.password.len() > MAX_PASSWORD_BYTES {
            return Err(StaffServiceError::validation(format!(
                "password must be at most {MAX_PASSWORD_BYTES} bytes"
            )));
        }
        Ok(())
    }
}

pub fn normalize_email(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Loose shape check: `local@domain.tld` with no whitespace.
pub fn validate_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.rsplit_once('@') else {
        return false;
    };
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !local.is_empty() && !host.is_empty() && !tld.is_empty()
}
