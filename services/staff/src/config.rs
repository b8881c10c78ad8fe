use std::fmt;

use serde::Deserialize;

use smarter_core::config::Config;

use crate::error::StaffServiceError;

/// What a login for an unregistered `userID` reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownStaffPolicy {
    /// `STAFF_NOT_FOUND`.
    #[default]
    NotFound,
    /// `REGISTRATION_REQUIRED`, for front ends that send the user to the registration page.
    SuggestRegistration,
}

impl UnknownStaffPolicy {
    pub fn apply(self, err: StaffServiceError) -> StaffServiceError {
        match (self, err) {
            (Self::SuggestRegistration, StaffServiceError::StaffNotFound) => {
                StaffServiceError::RegistrationRequired
            }
            (_, err) => err,
        }
    }
}

/// Staff service configuration loaded from environment variables.
#[derive(Deserialize)]
pub struct StaffConfig {
    /// Credential store connection URL. Env var: `DATABASE_URL`.
    pub database_url: String,
    /// HMAC secret for signing session tokens. Env var: `SESSION_SECRET`.
    pub session_secret: String,
    /// Bind host (default `0.0.0.0`). Env var: `HOST`.
    #[serde(default = "default_host")]
    pub host: String,
    /// TCP port to listen on (default 5000). Env var: `PORT`.
    #[serde(default = "default_port")]
    pub port: u16,
    /// bcrypt cost factor used for both hashing and verification (default 10).
    #[serde(default = "default_bcrypt_cost")]
    pub bcrypt_cost: u32,
    /// Session lifetime in seconds (default one hour).
    #[serde(default = "default_session_ttl_secs")]
    pub session_ttl_secs: u64,
    /// Session cookie domain attribute (default `localhost`).
    #[serde(default = "default_cookie_domain")]
    pub cookie_domain: String,
    /// Env var: `UNKNOWN_STAFF_POLICY` (`not_found` | `suggest_registration`).
    #[serde(default)]
    pub unknown_staff_policy: UnknownStaffPolicy,
}

/// Upper bound on `SESSION_TTL_SECS` (30 days).
pub const MAX_SESSION_TTL_SECS: u64 = 30 * 24 * 60 * 60;

/// bcrypt accepts costs in this range only.
pub const BCRYPT_COST_RANGE: std::ops::RangeInclusive<u32> = 4..=31;

fn default_host() -> String {
    "0.0.0.0".to_owned()
}

fn default_port() -> u16 {
    5000
}

fn default_bcrypt_cost() -> u32 {
    10
}

fn default_session_ttl_secs() -> u64 {
    3600
}

fn default_cookie_domain() -> String {
    "localhost".to_owned()
}

impl Config for StaffConfig {
    fn validate(&self) -> Result<(), String> {
        if !BCRYPT_COST_RANGE.contains(&self.bcrypt_cost) {
            return Err(format!(
                "BCRYPT_COST must be within {}..={}, got {}",
                BCRYPT_COST_RANGE.start(),
                BCRYPT_COST_RANGE.end(),
                self.bcrypt_cost
            ));
        }
        if self.session_secret.trim().is_empty() {
            return Err("SESSION_SECRET must not be empty".to_owned());
        }
        if self.session_ttl_secs == 0 || self.session_ttl_secs > MAX_SESSION_TTL_SECS {
            return Err(format!(
                "SESSION_TTL_SECS must be within 1..={MAX_SESSION_TTL_SECS}, got {}",
                self.session_ttl_secs
            ));
        }
        Ok(())
    }
}

impl fmt::Debug for StaffConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StaffConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("bcrypt_cost", &self.bcrypt_cost)
            .field("session_ttl_secs", &self.session_ttl_secs)
            .field("cookie_domain", &self.cookie_domain)
            .field("unknown_staff_policy", &self.unknown_staff_policy)
            .finish_non_exhaustive()
    }
}
