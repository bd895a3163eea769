//! Diagnosis service.

use std::path::Path;

use chrono::Utc;
use tracing::info;

use super::{authorize, ensure_not_past, export_failure, require};
use crate::error::ClinicResult;
use crate::models::{DiagnosisRecord, DoctorRecord};
use crate::repository::{DiagnosisRepository, Repository};

#[derive(Debug)]
pub struct DiagnosisService {
    repository: DiagnosisRepository,
}

impl DiagnosisService {
    pub fn new(repository: DiagnosisRepository) -> Self {
        Self { repository }
    }

    pub fn repository(&self) -> &DiagnosisRepository {
        &self.repository
    }

    /// Record a diagnosis. Diagnoses dated before now are rejected.
    pub fn add(
        &mut self,
        diagnosis: Option<&DiagnosisRecord>,
        caller: Option<&DoctorRecord>,
    ) -> ClinicResult<bool> {
        let diagnosis = require(diagnosis, "diagnosis")?;
        authorize(caller)?;
        ensure_not_past(diagnosis.date, Utc::now(), "diagnosis.date")?;

        self.repository.add_record(diagnosis)?;
        info!(diagnosis_id = diagnosis.id, "diagnosis added");
        Ok(true)
    }

    pub fn remove(&mut self, diagnosis_id: i32, caller: Option<&DoctorRecord>) -> ClinicResult<bool> {
        authorize(caller)?;
        let removed = self.repository.remove(diagnosis_id)?;
        info!(diagnosis_id, removed, "diagnosis removal");
        Ok(removed)
    }

    pub fn exists(&self, diagnosis_id: i32, caller: Option<&DoctorRecord>) -> ClinicResult<bool> {
        authorize(caller)?;
        Ok(self.repository.exists(diagnosis_id)?)
    }

    pub fn get(
        &self,
        diagnosis_id: i32,
        caller: Option<&DoctorRecord>,
    ) -> ClinicResult<Option<DiagnosisRecord>> {
        authorize(caller)?;
        Ok(self.repository.get_record(diagnosis_id)?)
    }

    /// Link a diagnosis to an appointment. Not gated.
    pub fn associate_appointment(&mut self, diagnosis_id: i32, appointment_id: i32) -> ClinicResult<bool> {
        Ok(self
            .repository
            .associate_appointment(diagnosis_id, appointment_id)?)
    }

    /// Appointment linked to a diagnosis. Not gated.
    pub fn appointment_id_of(&self, diagnosis_id: i32) -> ClinicResult<Option<i32>> {
        Ok(self.repository.appointment_id_of(diagnosis_id)?)
    }

    pub fn append_description(
        &mut self,
        diagnosis_id: i32,
        text: &str,
        caller: Option<&DoctorRecord>,
    ) -> ClinicResult<bool> {
        authorize(caller)?;
        Ok(self.repository.append_description(diagnosis_id, text)?)
    }

    pub fn export_snapshot<P: AsRef<Path>>(&self, path: P) -> ClinicResult<()> {
        self.repository.export_snapshot(path).map_err(export_failure)
    }
}
