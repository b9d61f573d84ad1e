//! OpenAPI document for the dashboard endpoints.

use utoipa::OpenApi;

use super::handlers::{self, ErrorResponse, MetricsResponse, RootResponse};
use crate::error::Result;
use crate::catalog::{
    InferenceResult, MetricEntry, PatientRecord, PatientStatus, ProcessingStatus, ServerInfo,
};

/// Generated OpenAPI description, served at `/openapi.json`.
#[derive(OpenApi)]
#[openapi(
    info(title = "VascularAI API"),
    paths(
        handlers::root,
        handlers::list_patients,
        handlers::get_metrics,
        handlers::get_status,
        handlers::get_server_status,
    ),
    components(schemas(
        RootResponse,
        PatientRecord,
        PatientStatus,
        InferenceResult,
        MetricEntry,
        MetricsResponse,
        ErrorResponse,
        ProcessingStatus,
        ServerInfo,
    )),
    tags((name = "dashboard", description = "Read-only dashboard data"))
)]
pub struct ApiDoc;

impl ApiDoc {
    /// The document rendered as pretty-printed JSON.
    pub fn to_pretty_json() -> Result<String> {
        Ok(Self::openapi().to_pretty_json()?)
    }
}
