//! Demo tables served by the dashboard API.

use std::collections::HashMap;

use time::macros::date;

use super::types::{
    InferenceResult, MetricEntry, PatientRecord, PatientStatus, ProcessingStatus, ServerInfo,
};

/// API version reported by the root and server endpoints.
pub const API_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Liveness message returned from `/`.
pub const ROOT_MESSAGE: &str = concat!("VascularAI API v", env!("CARGO_PKG_VERSION"));

const GPU_LABEL: &str = "Apple M2 Pro";
const MODEL_LABEL: &str = "VascularNet v2.1";

fn patient(
    id: &str,
    name: &str,
    age: u32,
    status: PatientStatus,
    inference_time: Option<f64>,
    result: InferenceResult,
    date: time::Date,
) -> PatientRecord {
    PatientRecord {
        id: id.to_string(),
        name: name.to_string(),
        age,
        status,
        inference_time,
        result,
        date,
    }
}

/// Segmentation scores in the order the dashboard charts them.
fn scores(cl_dice: f64, dice: f64, iou: f64) -> Vec<MetricEntry> {
    vec![
        MetricEntry::new("clDice", cl_dice),
        MetricEntry::new("Dice Score", dice),
        MetricEntry::new("IoU", iou),
    ]
}

pub(crate) fn patients() -> Vec<PatientRecord> {
    use InferenceResult as R;
    use PatientStatus as S;

    vec![
        patient("Patient_001", "John Doe", 65, S::Completed, Some(4.2), R::Success, date!(2026 - 02 - 28)),
        patient("Patient_002", "Jane Smith", 72, S::Completed, Some(3.8), R::Success, date!(2026 - 02 - 28)),
        patient("Patient_003", "Robert Chen", 58, S::Processing, None, R::Processing, date!(2026 - 03 - 01)),
        // Completed run whose segmentation was rejected.
        patient("Patient_004", "Maria Garcia", 61, S::Completed, Some(5.1), R::Failed, date!(2026 - 02 - 27)),
        patient("Patient_005", "David Kim", 55, S::Completed, Some(3.5), R::Success, date!(2026 - 02 - 27)),
        patient("Patient_006", "Sarah Wilson", 68, S::Queued, None, R::Queued, date!(2026 - 03 - 01)),
    ]
}

pub(crate) fn metrics() -> HashMap<String, Vec<MetricEntry>> {
    HashMap::from([
        ("Patient_001".to_string(), scores(0.92, 0.88, 0.81)),
        ("Patient_002".to_string(), scores(0.89, 0.85, 0.78)),
        ("Patient_004".to_string(), scores(0.45, 0.38, 0.30)),
        ("Patient_005".to_string(), scores(0.95, 0.91, 0.85)),
    ])
}

/// Canned progress payload; independent of the patient table.
pub(crate) fn processing_status() -> ProcessingStatus {
    ProcessingStatus {
        patient_id: "Patient_003".to_string(),
        progress: 80,
        stage: "Vessel Segmentation".to_string(),
        message: "Processing Patient_003... 80%".to_string(),
    }
}

pub(crate) fn server_info() -> ServerInfo {
    ServerInfo {
        online: true,
        version: format!("v{API_VERSION}"),
        gpu: GPU_LABEL.to_string(),
        model_version: MODEL_LABEL.to_string(),
    }
}
