//! Unified error types for the dashboard API.

use thiserror::Error;

/// Unified error type for the service.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// Configuration loading error.
    #[error("configuration error: {0}")]
    Config(#[from] envy::Error),

    /// Configuration loaded but holds an unusable value.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Catalog construction or lookup error.
    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// JSON serialization error.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Catalog lookup and consistency errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// No metrics are registered under the requested id.
    ///
    /// The message is returned verbatim to dashboard clients.
    #[error("Patient not found")]
    PatientNotFound {
        /// The id that was requested.
        patient_id: String,
    },

    /// Two patient rows share an id.
    #[error("duplicate patient id {patient_id}")]
    DuplicatePatient {
        /// The repeated id.
        patient_id: String,
    },

    /// Metrics reference a patient that is not in the patient table.
    #[error("metrics registered for unknown patient {patient_id}")]
    OrphanMetrics {
        /// The unknown id.
        patient_id: String,
    },
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, ServiceError>;
