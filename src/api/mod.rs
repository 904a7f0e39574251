//! HTTP API layer for the DevSecOps platform service.
//!
//! Provides the status and analysis endpoints.

pub mod handlers;
mod routes;
mod types;

pub use routes::build_router;
