//! VascularAI dashboard API.
//!
//! Serves the demo data behind the VascularAI dashboard: a patient list,
//! per-patient segmentation metrics, the current processing job, and server
//! details. Every table is fixed at startup and read-only afterwards.
//!
//! ```text
//! GET /                          liveness + version
//! GET /api/patients              all patients
//! GET /api/metrics/{patient_id}  metrics, or {"error": "Patient not found"}
//! GET /api/status                current processing job
//! GET /api/server                server details
//! ```
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Unified error types
//! - [`catalog`]: Record types and the immutable demo tables
//! - [`api`]: HTTP handlers, routes, and OpenAPI document
//! - [`utils`]: Utility functions

pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
pub mod utils;

pub use config::Config;
pub use error::{CatalogError, Result, ServiceError};
