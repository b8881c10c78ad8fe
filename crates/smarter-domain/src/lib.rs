//! Domain types shared across Smart-ER services.
//!
//! Pure types with no framework dependencies.

pub mod staff;
