use axum::extract::FromRequest;

use crate::error::StaffServiceError;

/// `axum::Json` body whose rejections render as `VALIDATION` errors.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(StaffServiceError))]
pub struct ApiJson<T>(pub T);
