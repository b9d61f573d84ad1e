//! HTTP API handlers.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::debug;
use utoipa::ToSchema;

use crate::catalog::{
    Catalog, MetricEntry, PatientRecord, ProcessingStatus, ServerInfo, ROOT_MESSAGE,
};
use crate::error::CatalogError;

/// Application state shared with handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Read-only dashboard tables.
    pub catalog: Arc<Catalog>,
}

impl AppState {
    /// Create app state backed by the demo catalog.
    pub fn new() -> Self {
        Self::with_catalog(Catalog::demo())
    }

    /// Create app state backed by a specific catalog.
    pub fn with_catalog(catalog: Catalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Root liveness response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RootResponse {
    #[schema(example = "VascularAI API v1.2.0")]
    pub message: String,
    /// Always "online".
    pub status: String,
}

/// Body-level error returned with a 200 status.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = "Patient not found")]
    pub error: String,
}

impl From<CatalogError> for ErrorResponse {
    fn from(err: CatalogError) -> Self {
        Self {
            error: err.to_string(),
        }
    }
}

/// Either a patient's metrics or an error object.
#[derive(Debug, Serialize, ToSchema)]
#[serde(untagged)]
pub enum MetricsResponse {
    Metrics(Vec<MetricEntry>),
    Error(ErrorResponse),
}

/// Framework-style body for unmatched routes and methods.
#[derive(Debug, Serialize)]
pub struct DetailResponse {
    pub detail: &'static str,
}

/// Root handler - reports the API version.
#[utoipa::path(
    get,
    path = "/",
    tag = "dashboard",
    responses((status = 200, description = "Service is online", body = RootResponse))
)]
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: ROOT_MESSAGE.to_string(),
        status: "online".to_string(),
    })
}

/// List every patient in definition order.
#[utoipa::path(
    get,
    path = "/api/patients",
    tag = "dashboard",
    responses((status = 200, description = "All patients", body = [PatientRecord]))
)]
pub async fn list_patients(State(state): State<AppState>) -> Json<Vec<PatientRecord>> {
    let patients = state.catalog.patients();
    debug!(count = patients.len(), "Listing patients");
    Json(patients.to_vec())
}

/// Segmentation metrics for one patient.
///
/// Unknown ids get `{"error": "Patient not found"}` with a 200 status, which
/// is what the dashboard checks for.
#[utoipa::path(
    get,
    path = "/api/metrics/{patient_id}",
    tag = "dashboard",
    params(("patient_id" = String, Path, description = "Patient identifier, e.g. Patient_001")),
    responses((
        status = 200,
        description = "Metric list, or an error object when the patient has no metrics",
        body = MetricsResponse
    ))
)]
pub async fn get_metrics(
    State(state): State<AppState>,
    Path(patient_id): Path<String>,
) -> Json<MetricsResponse> {
    match state.catalog.metrics_for(&patient_id) {
        Ok(entries) => Json(MetricsResponse::Metrics(entries.to_vec())),
        Err(e) => {
            debug!(patient_id = %patient_id, "No metrics for patient");
            Json(MetricsResponse::Error(e.into()))
        }
    }
}

/// Progress of the job currently being processed.
#[utoipa::path(
    get,
    path = "/api/status",
    tag = "dashboard",
    responses((status = 200, description = "Current processing status", body = ProcessingStatus))
)]
pub async fn get_status(State(state): State<AppState>) -> Json<ProcessingStatus> {
    Json(state.catalog.processing_status().clone())
}

/// Inference server details.
#[utoipa::path(
    get,
    path = "/api/server",
    tag = "dashboard",
    responses((status = 200, description = "Server details", body = ServerInfo))
)]
pub async fn get_server_status(State(state): State<AppState>) -> Json<ServerInfo> {
    Json(state.catalog.server_info().clone())
}

/// Fallback for unmatched routes.
pub async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(DetailResponse {
            detail: "Not Found",
        }),
    )
}

/// Fallback for known paths hit with an unsupported method.
pub async fn method_not_allowed() -> impl IntoResponse {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(DetailResponse {
            detail: "Method Not Allowed",
        }),
    )
}
