//! # aliment-api
//!
//! HTTP API layer for the Aliment service built on Axum.
//!
//! Provides the REST endpoints, DTOs, validating JSON extraction, and
//! error mapping.

pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod router;
pub mod state;

pub use router::build_router;
pub use state::AppState;
