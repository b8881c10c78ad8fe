//! Session JWT issue and validation.

use std::fmt;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use smarter_domain::staff::StaffRole;

/// HMAC secret used to sign and validate session tokens.
///
/// Cheap to clone; store one in application state and expose it to the
/// [`SessionIdentity`](crate::identity::SessionIdentity) extractor via `FromRef`.
#[derive(Clone)]
pub struct SessionKey(Arc<str>);

impl SessionKey {
    pub fn new(secret: impl Into<Arc<str>>) -> Self {
        Self(secret.into())
    }

    fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl fmt::Debug for SessionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SessionKey(..)")
    }
}

/// Staff identity extracted from a validated session token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionInfo {
    pub user_id: String,
    pub role: StaffRole,
    pub expires_at: u64,
}

/// Errors returned by [`issue_session_token`] and [`validate_session_token`].
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("invalid signature")]
    InvalidSignature,
    #[error("session expired")]
    Expired,
    #[error("malformed token")]
    Malformed,
    #[error("failed to sign session token: {0}")]
    Sign(#[source] jsonwebtoken::errors::Error),
}

/// JWT claims payload.
///
/// | Field | JWT claim | Meaning |
/// |-------|-----------|---------|
/// | `sub` | `sub` | staff `userID` |
/// | `role` | custom | lower-case [`StaffRole`] |
/// | `exp` | `exp` | seconds since epoch |
#[derive(Debug, Serialize, Deserialize)]
pub struct SessionClaims {
    pub sub: String,
    pub role: StaffRole,
    pub exp: u64,
}

fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default()
}

/// Sign a session for `user_id` valid for `ttl_secs`. Returns the token and its expiry.
pub fn issue_session_token(
    user_id: &str,
    role: StaffRole,
    key: &SessionKey,
    ttl_secs: u64,
) -> Result<(String, u64), SessionError> {
    let exp = now_secs().saturating_add(ttl_secs);
    let claims = SessionClaims {
        sub: user_id.to_owned(),
        role,
        exp,
    };
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(key.as_bytes()),
    )
    .map_err(SessionError::Sign)?;
    Ok((token, exp))
}

/// Validate a session cookie value.
///
/// HS256, `exp` checked with the library's default 60s leeway, `exp` + `sub` required.
pub fn validate_session_token(token: &str, key: &SessionKey) -> Result<SessionInfo, SessionError> {
    let mut validation = Validation::new(jsonwebtoken::Algorithm::HS256);
    validation.validate_exp = true;
    validation.required_spec_claims.clear();
    validation.set_required_spec_claims(&["exp", "sub"]);

    let data = decode::<SessionClaims>(
        token,
        &DecodingKey::from_secret(key.as_bytes()),
        &validation,
    )
    .map_err(|e| match e.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => SessionError::Expired,
        jsonwebtoken::errors::ErrorKind::InvalidSignature => SessionError::InvalidSignature,
        _ => SessionError::Malformed,
    })?;

    if data.claims.sub.is_empty() {
        return Err(SessionError::Malformed);
    }

    Ok(SessionInfo {
        user_id: data.claims.sub,
        role: data.claims.role,
        expires_at: data.claims.exp,
    })
}
