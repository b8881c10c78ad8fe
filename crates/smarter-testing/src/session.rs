//! Session helpers for integration tests.
//!
//! Protected routes read the `smarter_session` cookie. `MockSession` signs one
//! directly so tests can call those routes without going through login.

use axum::http::{HeaderName, HeaderValue, header};

use smarter_auth_types::cookie::SESSION_COOKIE;
use smarter_auth_types::token::{SessionKey, issue_session_token};
use smarter_domain::staff::StaffRole;

/// Configurable staff identity to present as a signed session cookie.
pub struct MockSession {
    pub user_id: String,
    pub role: StaffRole,
    pub ttl_secs: u64,
}

impl MockSession {
    pub fn new(user_id: impl Into<String>, role: StaffRole) -> Self {
        Self {
            user_id: user_id.into(),
            role,
            ttl_secs: 600,
        }
    }

    /// Return a `Cookie` header carrying a session signed with `key`.
    pub fn cookie_header(&self, key: &SessionKey) -> (HeaderName, HeaderValue) {
        let (token, _) = issue_session_token(&self.user_id, self.role, key, self.ttl_secs)
            .expect("sign test session");
        let value = HeaderValue::from_str(&format!("{SESSION_COOKIE}={token}"))
            .expect("session cookie is a valid header value");
        (header::COOKIE, value)
    }
}
