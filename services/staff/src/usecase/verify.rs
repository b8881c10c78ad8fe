use smarter_domain::staff::StaffRole;

use crate::domain::repository::{CredentialHasher, StaffRepository};
use crate::domain::types::StaffRecord;
use crate::error::StaffServiceError;

/// Resolve `user_id` to a record holding exactly `role` whose hash matches `password`.
///
/// `Ok(None)` for an unknown id, another role, or a wrong password. Store faults propagate.
pub(crate) async fn verify_role_credentials<R, H>(
    staff: &R,
    hasher: &H,
    role: StaffRole,
    user_id: &str,
    password: &str,
) -> Result<Option<StaffRecord>, StaffServiceError>
where
    R: StaffRepository,
    H: CredentialHasher,
{
    let user_id = user_id.trim();
    if user_id.is_empty() || password.is_empty() {
        return Ok(None);
    }
    let Some(record) = staff.find_by_user_id(user_id).await? else {
        return Ok(None);
    };
    if record.role != role {
        return Ok(None);
    }
    if hasher.verify(password, &record.password_hash).await? {
        Ok(Some(record))
    } else {
        Ok(None)
    }
}

pub struct VerifyApproverInput {
    pub id: String,
    pub password: String,
}

/// Answers "is this a valid `role` credential pair?" for the registration
/// page's pre-check.
pub struct VerifyApproverUseCase<R: StaffRepository, H: CredentialHasher> {
    pub staff: R,
    pub hasher: H,
    pub role: StaffRole,
}

impl<R: StaffRepository, H: CredentialHasher> VerifyApproverUseCase<R, H> {
    pub async fn execute(&self, input: VerifyApproverInput) -> Result<bool, StaffServiceError> {
        let verified = verify_role_credentials(
            &self.staff,
            &self.hasher,
            self.role,
            &input.id,
            &input.password,
        )
        .await?;
        Ok(verified.is_some())
    }
}
