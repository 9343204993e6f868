//! # API crate: the backend collaborators of the papr frontend
//!
//! The frontend talks to exactly one backend endpoint: a health check that
//! answers `{ "status": string }`. This crate owns the HTTP client for it and
//! the small state machine the header indicator renders.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`health`] | `HealthClient` (one `GET`, JSON body), `HealthError`, and `HealthStatus` (status text + error, "live" predicate) |

pub mod health;

pub use health::{HealthClient, HealthError, HealthResponse, HealthStatus};
