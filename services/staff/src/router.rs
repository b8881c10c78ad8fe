use axum::{
    Router,
    routing::{get, post},
};

use smarter_core::health::healthz;
use smarter_core::middleware::{propagate_request_id_layer, request_id_layer, trace_layer};

use crate::handlers::{
    health::readyz,
    login::{login, login_liveness},
    register::register,
    session::{check_session, logout},
    verify::{verify_admin, verify_supervisor},
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Login
        .route("/api/login", post(login).get(login_liveness))
        // Registration
        .route("/api/register", post(register))
        // Approver checks
        .route("/api/verify-supervisor", post(verify_supervisor))
        .route("/api/verify-admin", post(verify_admin))
        // Session
        .route("/api/auth/check", get(check_session))
        .route("/api/auth/logout", get(logout).post(logout))
        .with_state(state)
        .layer(propagate_request_id_layer())
        .layer(trace_layer())
        .layer(request_id_layer())
}
