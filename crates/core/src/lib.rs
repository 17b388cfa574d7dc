//! # PharmSched Core
//!
//! Domain types for the PharmSched staff scheduling service: entity payloads
//! and their validation functions, the role-based access policy, and the
//! error taxonomy shared by the persistence and web layers.
//!
//! This crate performs no I/O. Persistence lives in `pharmsched-db` and the
//! HTTP surface in `pharmsched-api`.

/// Error taxonomy shared across the workspace
pub mod errors;
/// Entity payloads and per-entity validation
pub mod models;
/// Pure role × action access decisions
pub mod policy;
