use axum::extract::FromRef;
use sea_orm::DatabaseConnection;

use smarter_auth_types::token::SessionKey;

use crate::config::{StaffConfig, UnknownStaffPolicy};
use crate::infra::db::DbStaffRepository;
use crate::infra::hasher::BcryptHasher;

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub hasher: BcryptHasher,
    pub session_key: SessionKey,
    pub session_ttl_secs: u64,
    pub cookie_domain: String,
    pub unknown_staff_policy: UnknownStaffPolicy,
}

impl AppState {
    pub fn new(db: DatabaseConnection, config: &StaffConfig) -> Self {
        Self {
            db,
            hasher: BcryptHasher {
                cost: config.bcrypt_cost,
            },
            session_key: SessionKey::new(config.session_secret.as_str()),
            session_ttl_secs: config.session_ttl_secs,
            cookie_domain: config.cookie_domain.clone(),
            unknown_staff_policy: config.unknown_staff_policy,
        }
    }

    pub fn staff_repo(&self) -> DbStaffRepository {
        DbStaffRepository {
            db: self.db.clone(),
        }
    }
}

impl FromRef<AppState> for SessionKey {
    fn from_ref(state: &AppState) -> Self {
        state.session_key.clone()
    }
}
