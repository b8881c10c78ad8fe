//! Session-cookie identity extractor.

use axum::extract::{FromRef, FromRequestParts};
use axum_extra::extract::CookieJar;
use http::StatusCode;
use http::request::Parts;

use smarter_domain::staff::StaffRole;

use crate::cookie::SESSION_COOKIE;
use crate::token::{SessionKey, validate_session_token};

/// Staff identity proven by a valid `smarter_session` cookie.
///
/// Rejects with 401 if the cookie is absent, expired, or not signed with the
/// state's [`SessionKey`].
#[derive(Debug, Clone)]
pub struct SessionIdentity {
    pub user_id: String,
    pub role: StaffRole,
    pub expires_at: u64,
}

impl<S> FromRequestParts<S> for SessionIdentity
where
    SessionKey: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = StatusCode;

    fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let key = SessionKey::from_ref(state);
        let jar = CookieJar::from_headers(&parts.headers);
        let result = jar
            .get(SESSION_COOKIE)
            .ok_or(StatusCode::UNAUTHORIZED)
            .and_then(|cookie| {
                validate_session_token(cookie.value(), &key).map_err(|e| {
                    tracing::debug!(error = %e, "rejected session cookie");
                    StatusCode::UNAUTHORIZED
                })
            });

        async move {
            let info = result?;
            Ok(Self {
                user_id: info.user_id,
                role: info.role,
                expires_at: info.expires_at,
            })
        }
    }
}
