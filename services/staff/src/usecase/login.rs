use crate::domain::repository::{CredentialHasher, StaffRepository};
use crate::domain::types::StaffProfile;
use crate::error::StaffServiceError;

pub struct LoginInput {
    pub user_id: String,
    pub password: String,
}

pub struct LoginUseCase<R: StaffRepository, H: CredentialHasher> {
    pub staff: R,
    pub hasher: H,
}

impl<R: StaffRepository, H: CredentialHasher> LoginUseCase<R, H> {
    /// Unknown `userID` is `StaffNotFound`, never `InvalidCredentials`.
    pub async fn execute(&self, input: LoginInput) -> Result<StaffProfile, StaffServiceError> {
        let user_id = input.user_id.trim();
        if user_id.is_empty() {
            return Err(StaffServiceError::validation("userID is required"));
        }
        if input.password.is_empty() {
            return Err(StaffServiceError::validation("password is required"));
        }

        let record = self
            .staff
            .find_by_user_id(user_id)
            .await?
            .ok_or(StaffServiceError::StaffNotFound)?;

        if !self
            .hasher
            .verify(&input.password, &record.password_hash)
            .await?
        {
            return Err(StaffServiceError::InvalidCredentials);
        }

        tracing::info!(user_id = %record.user_id, role = %record.role, "staff logged in");
        Ok(record.profile())
    }
}
