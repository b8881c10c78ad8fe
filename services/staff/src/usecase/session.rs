use smarter_auth_types::token::{SessionKey, issue_session_token};
use smarter_domain::staff::StaffRole;

use crate::domain::repository::StaffRepository;
use crate::domain::types::StaffProfile;
use crate::error::StaffServiceError;

#[derive(Debug)]
pub struct IssuedSession {
    pub token: String,
    pub expires_at: u64,
}

/// Sign a session for a freshly authenticated profile.
pub fn start_session(
    profile: &StaffProfile,
    key: &SessionKey,
    ttl_secs: u64,
) -> Result<IssuedSession, StaffServiceError> {
    let (token, expires_at) = issue_session_token(&profile.user_id, profile.role, key, ttl_secs)
        .map_err(|e| StaffServiceError::Internal(e.into()))?;
    Ok(IssuedSession { token, expires_at })
}

pub struct CheckSessionInput {
    pub user_id: String,
    pub role: StaffRole,
}

/// Resolves a session identity to the staff member's current profile.
pub struct CheckSessionUseCase<R: StaffRepository> {
    pub staff: R,
}

impl<R: StaffRepository> CheckSessionUseCase<R> {
    pub async fn execute(
        &self,
        input: CheckSessionInput,
    ) -> Result<StaffProfile, StaffServiceError> {
        let record = self
            .staff
            .find_by_user_id(&input.user_id)
            .await?
            .ok_or(StaffServiceError::InvalidSession)?;
        // Records are never updated in place, so a role mismatch means the
        // session predates a re-created record.
        if record.role != input.role {
            return Err(StaffServiceError::InvalidSession);
        }
        Ok(record.profile())
    }
}
