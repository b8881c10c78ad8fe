use anyhow::Context as _;

use crate::domain::repository::CredentialHasher;
use crate::error::StaffServiceError;

/// bcrypt on the blocking pool. Salt is random per hash and embedded in the output.
///
/// Input past bcrypt's 72-byte window is refused rather than truncated.
#[derive(Debug, Clone, Copy)]
pub struct BcryptHasher {
    pub cost: u32,
}

impl CredentialHasher for BcryptHasher {
    async fn hash(&self, password: &str) -> Result<String, StaffServiceError> {
        let password = password.to_owned();
        let cost = self.cost;
        let hashed =
            tokio::task::spawn_blocking(move || bcrypt::non_truncating_hash(password, cost))
                .await
                .context("join bcrypt hash task")?
                .context("bcrypt hash")?;
        Ok(hashed)
    }

    async fn verify(&self, password: &str, hash: &str) -> Result<bool, StaffServiceError> {
        let password = password.to_owned();
        let hash = hash.to_owned();
        let outcome =
            tokio::task::spawn_blocking(move || bcrypt::non_truncating_verify(password, &hash))
                .await
                .context("join bcrypt verify task")?;
        match outcome {
            Ok(matched) => Ok(matched),
            Err(bcrypt::BcryptError::Truncation(_)) => Ok(false),
            Err(e) => {
                tracing::warn!(error = %e, "stored password hash is unreadable");
                Ok(false)
            }
        }
    }
}
