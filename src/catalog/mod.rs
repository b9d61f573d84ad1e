//! Read-only catalog backing the dashboard endpoints.
//!
//! This module handles:
//! - Patient and metric record types
//! - The built-in demo tables
//! - Lookups against the immutable [`Catalog`]

pub mod data;
pub mod types;

use std::collections::{HashMap, HashSet};

use crate::error::CatalogError;

pub use data::{API_VERSION, ROOT_MESSAGE};
pub use types::{
    InferenceResult, MetricEntry, PatientRecord, PatientStatus, ProcessingStatus, ServerInfo,
};

/// Immutable patient and metric tables plus the fixed status payloads.
///
/// Built once at startup and shared behind an `Arc`; there are no mutating
/// methods.
#[derive(Debug, Clone)]
pub struct Catalog {
    patients: Vec<PatientRecord>,
    metrics: HashMap<String, Vec<MetricEntry>>,
    processing: ProcessingStatus,
    server: ServerInfo,
}

impl Catalog {
    /// Build a catalog, checking that patient ids are unique and that every
    /// metrics key names a known patient.
    pub fn new(
        patients: Vec<PatientRecord>,
        metrics: HashMap<String, Vec<MetricEntry>>,
        processing: ProcessingStatus,
        server: ServerInfo,
    ) -> Result<Self, CatalogError> {
        let catalog = Self {
            patients,
            metrics,
            processing,
            server,
        };
        catalog.check_integrity()?;
        Ok(catalog)
    }

    /// Verify that patient ids are unique and every metrics key names a
    /// listed patient.
    pub fn check_integrity(&self) -> Result<(), CatalogError> {
        let mut ids = HashSet::with_capacity(self.patients.len());
        for patient in &self.patients {
            if !ids.insert(patient.id.as_str()) {
                return Err(CatalogError::DuplicatePatient {
                    patient_id: patient.id.clone(),
                });
            }
        }

        match self.metrics.keys().find(|id| !ids.contains(id.as_str())) {
            Some(orphan) => Err(CatalogError::OrphanMetrics {
                patient_id: orphan.clone(),
            }),
            None => Ok(()),
        }
    }

    /// The built-in demo tables.
    pub fn demo() -> Self {
        Self {
            patients: data::patients(),
            metrics: data::metrics(),
            processing: data::processing_status(),
            server: data::server_info(),
        }
    }

    /// All patients in definition order.
    pub fn patients(&self) -> &[PatientRecord] {
        &self.patients
    }

    /// Metrics registered for a patient, in definition order.
    pub fn metrics_for(&self, patient_id: &str) -> Result<&[MetricEntry], CatalogError> {
        self.metrics
            .get(patient_id)
            .map(Vec::as_slice)
            .ok_or_else(|| CatalogError::PatientNotFound {
                patient_id: patient_id.to_string(),
            })
    }

    pub fn processing_status(&self) -> &ProcessingStatus {
        &self.processing
    }

    pub fn server_info(&self) -> &ServerInfo {
        &self.server
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::demo()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn demo_tables_pass_validation() {
        let result = Catalog::new(
            data::patients(),
            data::metrics(),
            data::processing_status(),
            data::server_info(),
        );
        assert!(result.is_ok(), "{:?}", result.err());
    }

    #[test]
    fn demo_catalog_is_consistent() {
        assert_eq!(Catalog::demo().check_integrity(), Ok(()));
    }

    #[test]
    fn patients_keep_definition_order() {
        let catalog = Catalog::demo();
        let ids: Vec<_> = catalog.patients().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(
            ids,
            [
                "Patient_001",
                "Patient_002",
                "Patient_003",
                "Patient_004",
                "Patient_005",
                "Patient_006"
            ]
        );
    }

    #[test]
    fn metrics_lookup_returns_registered_list() {
        let catalog = Catalog::demo();
        let entries = catalog.metrics_for("Patient_004").unwrap();
        assert_eq!(
            entries,
            [
                MetricEntry::new("clDice", 0.45),
                MetricEntry::new("Dice Score", 0.38),
                MetricEntry::new("IoU", 0.30),
            ]
        );
    }

    #[test]
    fn metrics_lookup_misses_fall_through_to_not_found() {
        let catalog = Catalog::demo();
        for id in ["Patient_003", "Patient_006", "patient_001", "", "Patient_001 ", "../etc"] {
            let err = catalog.metrics_for(id).unwrap_err();
            assert_eq!(err.to_string(), "Patient not found");
            assert!(matches!(err, CatalogError::PatientNotFound { ref patient_id } if patient_id == id));
        }
    }

    #[test]
    fn status_and_result_mismatch_is_preserved() {
        let catalog = Catalog::demo();
        let maria = &catalog.patients()[3];
        assert_eq!(maria.status, PatientStatus::Completed);
        assert_eq!(maria.result, InferenceResult::Failed);
    }

    #[test]
    fn processing_status_is_not_derived_from_patients() {
        let catalog = Catalog::demo();
        let status = catalog.processing_status();
        assert_eq!(status.patient_id, "Patient_003");
        assert_eq!(status.progress, 80);
        assert_eq!(status.stage, "Vessel Segmentation");
        assert_eq!(status.message, "Processing Patient_003... 80%");
    }

    #[test]
    fn new_rejects_duplicate_patient_ids() {
        let mut patients = data::patients();
        patients.push(patients[0].clone());

        let err = Catalog::new(
            patients,
            HashMap::new(),
            data::processing_status(),
            data::server_info(),
        )
        .unwrap_err();

        assert!(matches!(err, CatalogError::DuplicatePatient { patient_id } if patient_id == "Patient_001"));
    }

    #[test]
    fn new_rejects_metrics_for_unknown_patient() {
        let mut metrics = data::metrics();
        metrics.insert("Patient_999".to_string(), vec![MetricEntry::new("IoU", 0.5)]);

        let err = Catalog::new(
            data::patients(),
            metrics,
            data::processing_status(),
            data::server_info(),
        )
        .unwrap_err();

        assert!(matches!(err, CatalogError::OrphanMetrics { patient_id } if patient_id == "Patient_999"));
    }
}
