use chrono::Utc;
use uuid::Uuid;

use smarter_domain::staff::{Approval, StaffRole};

use crate::domain::repository::{CredentialHasher, StaffRepository};
use crate::domain::types::{StaffDetails, StaffProfile, StaffRecord};
use crate::error::StaffServiceError;
use crate::usecase::verify::verify_role_credentials;

/// Credentials of the existing staff member vouching for a registration.
#[derive(Debug, Clone, Default)]
pub struct ApproverCredentials {
    pub id: String,
    pub password: String,
}

pub struct RegisterStaffInput {
    /// Raw role string as submitted.
    pub role: String,
    pub details: StaffDetails,
    pub approver: Option<ApproverCredentials>,
}

// ── RegisterStaff ────────────────────────────────────────────────────────────

pub struct RegisterStaffUseCase<R: StaffRepository, H: CredentialHasher> {
    pub staff: R,
    pub hasher: H,
}

impl<R: StaffRepository, H: CredentialHasher> RegisterStaffUseCase<R, H> {
    pub async fn execute(
        &self,
        input: RegisterStaffInput,
    ) -> Result<StaffProfile, StaffServiceError> {
        let role = input
            .role
            .parse::<StaffRole>()
            .map_err(|_| StaffServiceError::InvalidRole)?;
        let approver_role = match role.approval() {
            Approval::RequiredFrom(approver_role) => approver_role,
            Approval::NotRegistrable => return Err(StaffServiceError::InvalidRole),
        };

        let details = input.details.normalized();
        details.validate()?;
        ensure_unique(&self.staff, &details).await?;

        let approver = input.approver.unwrap_or_default();
        let approver_record = verify_role_credentials(
            &self.staff,
            &self.hasher,
            approver_role,
            &approver.id,
            &approver.password,
        )
        .await?
        .ok_or(StaffServiceError::InvalidApproverCredentials(approver_role))?;

        let record = insert_staff(
            &self.staff,
            &self.hasher,
            details,
            role,
            Some(approver_record.user_id),
        )
        .await?;

        tracing::info!(
            user_id = %record.user_id,
            role = %record.role,
            approved_by = record.approved_by.as_deref().unwrap_or_default(),
            "staff registered"
        );
        Ok(record.profile())
    }
}

// ── ProvisionSupervisor ──────────────────────────────────────────────────────

/// Creates a supervisor, the root of the approval chain, without an approver.
/// Reachable only from the operator CLI.
pub struct ProvisionSupervisorUseCase<R: StaffRepository, H: CredentialHasher> {
    pub staff: R,
    pub hasher: H,
}

impl<R: StaffRepository, H: CredentialHasher> ProvisionSupervisorUseCase<R, H> {
    pub async fn execute(&self, details: StaffDetails) -> Result<StaffProfile, StaffServiceError> {
        let details = details.normalized();
        details.validate()?;
        ensure_unique(&self.staff, &details).await?;

        let record = insert_staff(
            &self.staff,
            &self.hasher,
            details,
            StaffRole::Supervisor,
            None,
        )
        .await?;

        tracing::info!(user_id = %record.user_id, "supervisor provisioned");
        Ok(record.profile())
    }
}

async fn ensure_unique<R: StaffRepository>(
    staff: &R,
    details: &StaffDetails,
) -> Result<(), StaffServiceError> {
    if staff.find_by_user_id(&details.user_id).await?.is_some() {
        return Err(StaffServiceError::DuplicateUserId);
    }
    if staff.email_exists(&details.email).await? {
        return Err(StaffServiceError::DuplicateEmail);
    }
    Ok(())
}

async fn insert_staff<R, H>(
    staff: &R,
    hasher: &H,
    details: StaffDetails,
    role: StaffRole,
    approved_by: Option<String>,
) -> Result<StaffRecord, StaffServiceError>
where
    R: StaffRepository,
    H: CredentialHasher,
{
    let password_hash = hasher.hash(&details.password).await?;
    let record = StaffRecord {
        id: Uuid::now_v7(),
        user_id: details.user_id,
        first_name: details.first_name,
        last_name: details.last_name,
        email: details.email,
        role,
        password_hash,
        hospital_name: details.hospital_name,
        hospital_id: details.hospital_id,
        approved_by,
        created_at: Utc::now(),
    };
    staff.create(&record).await?;
    Ok(record)
}
