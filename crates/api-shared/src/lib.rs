//! # API Shared
//!
//! Shared definitions for the ADE APIs.
//!
//! Contains:
//! - Wire request/response types (`dto` module) with OpenAPI schemas
//! - Shared services like `HealthService`
//!
//! Used by `api-rest` for common functionality.

pub mod dto;
pub mod health;

pub use dto::*;
pub use health::HealthService;
