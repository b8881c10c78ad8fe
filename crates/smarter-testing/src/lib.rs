//! Test utilities for Smart-ER services.
//!
//! Provides session-cookie helpers and a migrated in-memory database.
//! Import from `[dev-dependencies]` only — never in production code.

pub mod db;
pub mod session;
