use axum::{
    Json,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
};
use axum_extra::extract::CookieJar;
use serde::Serialize;

use smarter_auth_types::cookie::clear_session_cookie;
use smarter_auth_types::identity::SessionIdentity;

use crate::error::StaffServiceError;
use crate::handlers::login::session_expires_header;
use crate::handlers::view::StaffResponse;
use crate::state::AppState;
use crate::usecase::session::{CheckSessionInput, CheckSessionUseCase};

// ── GET /api/auth/check ──────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct CheckSessionResponse {
    pub user: StaffResponse,
}

pub async fn check_session(
    State(state): State<AppState>,
    identity: Result<SessionIdentity, StatusCode>,
) -> Result<impl IntoResponse, StaffServiceError> {
    let identity = identity.map_err(|_| StaffServiceError::InvalidSession)?;
    let usecase = CheckSessionUseCase {
        staff: state.staff_repo(),
    };
    let profile = usecase
        .execute(CheckSessionInput {
            user_id: identity.user_id,
            role: identity.role,
        })
        .await?;

    let mut headers = HeaderMap::new();
    let (name, value) = session_expires_header(identity.expires_at);
    headers.insert(name, value);

    let body = CheckSessionResponse {
        user: StaffResponse::from(profile),
    };
    Ok((StatusCode::OK, headers, Json(body)))
}

// ── GET|POST /api/auth/logout ────────────────────────────────────────────────

pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    let jar = clear_session_cookie(jar, state.cookie_domain.clone());
    (StatusCode::NO_CONTENT, jar)
}
