use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use smarter_domain::staff::StaffRole;

use crate::error::StaffServiceError;
use crate::handlers::extract::ApiJson;
use crate::state::AppState;
use crate::usecase::verify::{VerifyApproverInput, VerifyApproverUseCase};

#[derive(Deserialize, Default)]
#[serde(default)]
pub struct VerifyRequest {
    pub id: String,
    pub password: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyResponse {
    pub is_valid: bool,
}

async fn verify_as(
    state: AppState,
    role: StaffRole,
    body: VerifyRequest,
) -> Result<Json<VerifyResponse>, StaffServiceError> {
    let usecase = VerifyApproverUseCase {
        staff: state.staff_repo(),
        hasher: state.hasher,
        role,
    };
    let is_valid = usecase
        .execute(VerifyApproverInput {
            id: body.id,
            password: body.password,
        })
        .await?;
    Ok(Json(VerifyResponse { is_valid }))
}

// ── POST /api/verify-supervisor ──────────────────────────────────────────────

pub async fn verify_supervisor(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<VerifyRequest>,
) -> Result<Json<VerifyResponse>, StaffServiceError> {
    verify_as(state, StaffRole::Supervisor, body).await
}

// ── POST /api/verify-admin ───────────────────────────────────────────────────

pub async fn verify_admin(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<VerifyRequest>,
) -> Result<Json<VerifyResponse>, StaffServiceError> {
    verify_as(state, StaffRole::Admin, body).await
}
