use axum::{
    Json,
    extract::State,
    http::{HeaderMap, HeaderName, HeaderValue, StatusCode},
    response::IntoResponse,
};
use axum_extra::extract::CookieJar;
use serde::{Deserialize, Serialize};

use smarter_auth_types::cookie::set_session_cookie;

use crate::error::StaffServiceError;
use crate::handlers::extract::ApiJson;
use crate::handlers::view::{StaffEnvelope, StaffResponse};
use crate::state::AppState;
use crate::usecase::login::{LoginInput, LoginUseCase};
use crate::usecase::session::start_session;

pub const X_SMARTER_SESSION_EXPIRES: &str = "x-smarter-session-expires";

pub(crate) fn session_expires_header(exp: u64) -> (HeaderName, HeaderValue) {
    (
        HeaderName::from_static(X_SMARTER_SESSION_EXPIRES),
        HeaderValue::from(exp),
    )
}

// ── POST /api/login ──────────────────────────────────────────────────────────

#[derive(Deserialize, Default)]
#[serde(default)]
pub struct LoginRequest {
    #[serde(rename = "userID")]
    pub user_id: String,
    pub password: String,
}

pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    ApiJson(body): ApiJson<LoginRequest>,
) -> Result<impl IntoResponse, StaffServiceError> {
    let usecase = LoginUseCase {
        staff: state.staff_repo(),
        hasher: state.hasher,
    };
    let profile = usecase
        .execute(LoginInput {
            user_id: body.user_id,
            password: body.password,
        })
        .await
        .map_err(|e| state.unknown_staff_policy.apply(e))?;

    let session = start_session(&profile, &state.session_key, state.session_ttl_secs)?;
    let jar = set_session_cookie(
        jar,
        session.token,
        state.cookie_domain.clone(),
        state.session_ttl_secs,
    );

    let mut headers = HeaderMap::new();
    let (name, value) = session_expires_header(session.expires_at);
    headers.insert(name, value);

    let body = StaffEnvelope {
        message: "Login successful",
        user: StaffResponse::from(profile),
    };
    Ok((StatusCode::OK, jar, headers, Json(body)))
}

// ── GET /api/login ───────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct LivenessResponse {
    pub message: &'static str,
}

pub async fn login_liveness() -> Json<LivenessResponse> {
    Json(LivenessResponse {
        message: "Server is working!",
    })
}
