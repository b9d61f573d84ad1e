//! Dashboard record types as they appear on the wire.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use time::Date;
use utoipa::ToSchema;

time::serde::format_description!(iso_date, Date, "[year]-[month]-[day]");

/// Pipeline state of a patient's job.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, ToSchema,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PatientStatus {
    /// Inference finished.
    Completed,
    /// Inference running.
    Processing,
    /// Waiting for a worker.
    Queued,
}

/// Outcome label shown next to a patient.
///
/// Loosely tracks [`PatientStatus`] but nothing ties the two together.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, ToSchema,
)]
pub enum InferenceResult {
    Success,
    Failed,
    Processing,
    Queued,
}

/// One row of the patient listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PatientRecord {
    /// Patient identifier (e.g., "Patient_001").
    #[schema(example = "Patient_001")]
    pub id: String,
    /// Display name.
    pub name: String,
    /// Age in years.
    pub age: u32,
    /// Job status.
    pub status: PatientStatus,
    /// Inference duration in seconds, `null` until the job completes.
    pub inference_time: Option<f64>,
    /// Result label.
    pub result: InferenceResult,
    /// Scan date.
    #[serde(with = "iso_date")]
    #[schema(value_type = String, example = "2026-02-28")]
    pub date: Date,
}

/// Named quality score for a processed result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MetricEntry {
    /// Metric name (e.g., "clDice").
    #[schema(example = "clDice")]
    pub metric: String,
    /// Score, conventionally within [0, 1].
    #[schema(example = 0.92)]
    pub value: f64,
}

impl MetricEntry {
    /// Create a metric entry.
    pub fn new(metric: impl Into<String>, value: f64) -> Self {
        Self {
            metric: metric.into(),
            value,
        }
    }
}

/// Progress of the job currently shown as running.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProcessingStatus {
    pub patient_id: String,
    /// Percent complete.
    pub progress: u8,
    /// Current pipeline stage.
    pub stage: String,
    pub message: String,
}

/// Inference server description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ServerInfo {
    pub online: bool,
    /// API version, prefixed with "v".
    pub version: String,
    /// Accelerator label.
    pub gpu: String,
    /// Segmentation model label.
    pub model_version: String,
}
