#![allow(async_fn_in_trait)]

use crate::domain::types::StaffRecord;
use crate::error::StaffServiceError;

/// Port to the credential store.
pub trait StaffRepository: Send + Sync {
    async fn find_by_user_id(&self, user_id: &str)
    -> Result<Option<StaffRecord>, StaffServiceError>;

    async fn email_exists(&self, email: &str) -> Result<bool, StaffServiceError>;

    /// Insert a new record.
    ///
    /// A store-level uniqueness violation is reported as
    /// `DuplicateUserId` / `DuplicateEmail`, even if the caller's pre-checks passed.
    async fn create(&self, record: &StaffRecord) -> Result<(), StaffServiceError>;
}

/// One-way, cost-factored password transformation.
pub trait CredentialHasher: Send + Sync {
    async fn hash(&self, password: &str) -> Result<String, StaffServiceError>;

    /// `Ok(false)` on mismatch, including an unparseable stored hash.
    async fn verify(&self, password: &str, hash: &str) -> Result<bool, StaffServiceError>;
}
