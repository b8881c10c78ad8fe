//! Cross-cutting plumbing shared by Smart-ER services: env config, liveness,
//! tracing, request-id middleware and serde helpers.

pub mod config;
pub mod health;
pub mod middleware;
pub mod serde;
pub mod tracing;
