use axum::{Json, extract::State, http::StatusCode};
use serde::Deserialize;

use crate::domain::types::StaffDetails;
use crate::error::StaffServiceError;
use crate::handlers::extract::ApiJson;
use crate::handlers::view::{StaffEnvelope, StaffResponse};
use crate::state::AppState;
use crate::usecase::register::{ApproverCredentials, RegisterStaffInput, RegisterStaffUseCase};

// ── POST /api/register ───────────────────────────────────────────────────────

/// Missing fields deserialize as empty and are reported by validation.
/// Approver credentials are also accepted under the role-specific names the
/// registration forms send (`supervisorId`, `adminId`, ...).
#[derive(Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct RegisterRequest {
    #[serde(rename = "userID")]
    pub user_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: String,
    pub password: String,
    pub hospital_name: String,
    #[serde(rename = "hospitalID")]
    pub hospital_id: String,
    #[serde(alias = "supervisorId", alias = "adminId")]
    pub approver_id: String,
    #[serde(alias = "supervisorPassword", alias = "adminPassword")]
    pub approver_password: String,
}

impl RegisterRequest {
    fn into_input(self) -> RegisterStaffInput {
        let approver = (!self.approver_id.is_empty() || !self.approver_password.is_empty())
            .then(|| ApproverCredentials {
                id: self.approver_id,
                password: self.approver_password,
            });
        RegisterStaffInput {
            role: self.role,
            details: StaffDetails {
                user_id: self.user_id,
                first_name: self.first_name,
                last_name: self.last_name,
                email: self.email,
                password: self.password,
                hospital_name: self.hospital_name,
                hospital_id: self.hospital_id,
            },
            approver,
        }
    }
}

pub async fn register(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<RegisterRequest>,
) -> Result<(StatusCode, Json<StaffEnvelope>), StaffServiceError> {
    let usecase = RegisterStaffUseCase {
        staff: state.staff_repo(),
        hasher: state.hasher,
    };
    let profile = usecase.execute(body.into_input()).await?;
    let body = StaffEnvelope {
        message: "User registered successfully",
        user: StaffResponse::from(profile),
    };
    Ok((StatusCode::CREATED, Json(body)))
}
