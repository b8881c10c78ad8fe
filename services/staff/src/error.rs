use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use smarter_domain::staff::StaffRole;

/// Staff service domain error variants.
#[derive(Debug, thiserror::Error)]
pub enum StaffServiceError {
    #[error("{0}")]
    Validation(String),
    #[error("invalid role")]
    InvalidRole,
    #[error("user id already registered")]
    DuplicateUserId,
    #[error("email already registered")]
    DuplicateEmail,
    #[error("invalid {0} credentials")]
    InvalidApproverCredentials(StaffRole),
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("staff not found")]
    StaffNotFound,
    #[error("staff not registered, please register")]
    RegistrationRequired,
    #[error("invalid session")]
    InvalidSession,
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl StaffServiceError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION",
            Self::InvalidRole => "INVALID_ROLE",
            Self::DuplicateUserId => "DUPLICATE_USER_ID",
            Self::DuplicateEmail => "DUPLICATE_EMAIL",
            Self::InvalidApproverCredentials(_) => "INVALID_APPROVER_CREDENTIALS",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::StaffNotFound => "STAFF_NOT_FOUND",
            Self::RegistrationRequired => "REGISTRATION_REQUIRED",
            Self::InvalidSession => "INVALID_SESSION",
            Self::Internal(_) => "INTERNAL",
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}

/// Unreadable or mistyped request bodies are client validation failures.
impl From<JsonRejection> for StaffServiceError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Validation(rejection.body_text())
    }
}

impl IntoResponse for StaffServiceError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::Validation(_)
            | Self::InvalidRole
            | Self::DuplicateUserId
            | Self::DuplicateEmail
            | Self::InvalidApproverCredentials(_)
            | Self::InvalidCredentials
            | Self::StaffNotFound
            | Self::RegistrationRequired => StatusCode::BAD_REQUEST,
            Self::InvalidSession => StatusCode::UNAUTHORIZED,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        // 4xx are expected client outcomes and already visible in the trace layer.
        // Internal errors carry the anyhow chain, which never reaches the client.
        if let Self::Internal(ref e) = self {
            tracing::error!(error = %format!("{e:#}"), kind = "INTERNAL", "internal error");
        }
        let body = serde_json::json!({
            "kind": self.kind(),
            "message": self.to_string(),
        });
        (status, axum::Json(body)).into_response()
    }
}
