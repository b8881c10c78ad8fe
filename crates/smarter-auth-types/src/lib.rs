//! Session types shared across Smart-ER services.
//!
//! Provides session JWT issue/validation, the session cookie builders, and the
//! `SessionIdentity` extractor for protected routes.

pub mod cookie;
pub mod identity;
pub mod token;
