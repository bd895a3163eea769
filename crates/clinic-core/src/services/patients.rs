//! Patient service.

use std::path::Path;

use tracing::{info, warn};

use super::{authorize, export_failure, require};
use crate::config::ClinicConfig;
use crate::error::ClinicResult;
use crate::models::{DoctorRecord, PatientRecord};
use crate::repository::{PatientRepository, Repository};

/// Patient registry. Any doctor with decision rights may read or register
/// any patient.
#[derive(Debug)]
pub struct PatientService {
    repository: PatientRepository,
    config: ClinicConfig,
}

impl PatientService {
    pub fn new(repository: PatientRepository, config: ClinicConfig) -> Self {
        Self { repository, config }
    }

    pub fn repository(&self) -> &PatientRepository {
        &self.repository
    }

    pub fn add(&mut self, patient: Option<&PatientRecord>, caller: Option<&DoctorRecord>) -> ClinicResult<bool> {
        let patient = require(patient, "patient")?;
        authorize(caller)?;

        self.repository.add_record(patient)?;
        info!(patient_id = patient.id, "patient added");
        Ok(true)
    }

    /// Remove a patient. Returns `Ok(false)` on a pass-code mismatch.
    pub fn remove(&mut self, patient_id: i32, passcode: &str) -> ClinicResult<bool> {
        if !self.config.verify_passcode(passcode) {
            warn!(patient_id, "patient removal refused: pass-code mismatch");
            return Ok(false);
        }
        let removed = self.repository.remove(patient_id)?;
        info!(patient_id, removed, "patient removal");
        Ok(removed)
    }

    pub fn exists(&self, patient_id: i32, caller: Option<&DoctorRecord>) -> ClinicResult<bool> {
        authorize(caller)?;
        Ok(self.repository.exists(patient_id)?)
    }

    pub fn get(&self, patient_id: i32, caller: Option<&DoctorRecord>) -> ClinicResult<Option<PatientRecord>> {
        authorize(caller)?;
        Ok(self.repository.get_record(patient_id)?)
    }

    pub fn appointments_repository_id_of(
        &self,
        patient_id: i32,
        caller: Option<&DoctorRecord>,
    ) -> ClinicResult<Option<i32>> {
        authorize(caller)?;
        Ok(self.repository.appointments_repository_id_of(patient_id)?)
    }

    pub fn export_snapshot<P: AsRef<Path>>(&self, path: P) -> ClinicResult<()> {
        self.repository.export_snapshot(path).map_err(export_failure)
    }
}
