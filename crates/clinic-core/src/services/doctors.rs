//! Doctor service.

use std::path::Path;

use tracing::{info, warn};

use super::{authorize, export_failure};
use crate::config::ClinicConfig;
use crate::error::ClinicResult;
use crate::models::DoctorRecord;
use crate::repository::{DoctorRepository, Repository};

#[derive(Debug)]
pub struct DoctorService {
    repository: DoctorRepository,
    config: ClinicConfig,
}

impl DoctorService {
    pub fn new(repository: DoctorRepository, config: ClinicConfig) -> Self {
        Self { repository, config }
    }

    pub fn repository(&self) -> &DoctorRepository {
        &self.repository
    }

    /// Register a doctor. The record doubles as the caller identity, so a
    /// doctor without decision rights cannot be registered.
    pub fn add(&mut self, doctor: Option<&DoctorRecord>) -> ClinicResult<bool> {
        let doctor = authorize(doctor)?;
        self.repository.add_record(doctor)?;
        info!(doctor_id = doctor.id, "doctor added");
        Ok(true)
    }

    /// Remove a doctor. Returns `Ok(false)` without touching the repository
    /// when the pass-code does not match.
    pub fn remove(&mut self, doctor_id: i32, passcode: &str) -> ClinicResult<bool> {
        if !self.config.verify_passcode(passcode) {
            warn!(doctor_id, "doctor removal refused: pass-code mismatch");
            return Ok(false);
        }
        let removed = self.repository.remove(doctor_id)?;
        info!(doctor_id, removed, "doctor removal");
        Ok(removed)
    }

    pub fn exists(&self, doctor_id: i32, caller: Option<&DoctorRecord>) -> ClinicResult<bool> {
        authorize(caller)?;
        Ok(self.repository.exists(doctor_id)?)
    }

    pub fn get(&self, doctor_id: i32, caller: Option<&DoctorRecord>) -> ClinicResult<Option<DoctorRecord>> {
        authorize(caller)?;
        Ok(self.repository.get_record(doctor_id)?)
    }

    pub fn appointments_repository_id_of(
        &self,
        doctor_id: i32,
        caller: Option<&DoctorRecord>,
    ) -> ClinicResult<Option<i32>> {
        authorize(caller)?;
        Ok(self.repository.appointments_repository_id_of(doctor_id)?)
    }

    pub fn export_snapshot<P: AsRef<Path>>(&self, path: P) -> ClinicResult<()> {
        self.repository.export_snapshot(path).map_err(export_failure)
    }
}
