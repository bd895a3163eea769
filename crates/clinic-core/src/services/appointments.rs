//! Appointment service.

use std::path::Path;

use tracing::{debug, info};

use super::{authorize, export_failure, require};
use crate::error::ClinicResult;
use crate::models::{AppointmentRecord, DoctorRecord, PatientRecord};
use crate::repository::{AppointmentRepository, Repository};

/// Gated access to the appointment repository.
#[derive(Debug)]
pub struct AppointmentService {
    repository: AppointmentRepository,
}

impl AppointmentService {
    pub fn new(repository: AppointmentRepository) -> Self {
        Self { repository }
    }

    pub fn repository(&self) -> &AppointmentRepository {
        &self.repository
    }

    /// Schedule an appointment. Fails if the id is already taken.
    pub fn add(
        &mut self,
        appointment: Option<&AppointmentRecord>,
        caller: Option<&DoctorRecord>,
    ) -> ClinicResult<bool> {
        let appointment = require(appointment, "appointment")?;
        authorize(caller)?;

        self.repository.add_record(appointment)?;
        info!(
            appointment_id = appointment.id,
            patient_id = appointment.patient_id,
            doctor_id = appointment.doctor_id,
            "appointment added"
        );
        Ok(true)
    }

    /// Cancel an appointment. `Ok(false)` when no appointment has this id.
    pub fn remove(&mut self, appointment_id: i32, caller: Option<&DoctorRecord>) -> ClinicResult<bool> {
        authorize(caller)?;
        let removed = self.repository.remove(appointment_id)?;
        info!(appointment_id, removed, "appointment removal");
        Ok(removed)
    }

    pub fn exists(&self, appointment_id: i32, caller: Option<&DoctorRecord>) -> ClinicResult<bool> {
        authorize(caller)?;
        Ok(self.repository.exists(appointment_id)?)
    }

    /// Existence check on behalf of a patient. Only the presence of the
    /// patient identity is required.
    pub fn exists_for_patient(
        &self,
        appointment_id: i32,
        patient: Option<&PatientRecord>,
    ) -> ClinicResult<bool> {
        let patient = require(patient, "patient")?;
        debug!(appointment_id, patient_id = patient.id, "patient appointment lookup");
        Ok(self.repository.exists(appointment_id)?)
    }

    pub fn get(
        &self,
        appointment_id: i32,
        caller: Option<&DoctorRecord>,
    ) -> ClinicResult<Option<AppointmentRecord>> {
        authorize(caller)?;
        Ok(self.repository.get_record(appointment_id)?)
    }

    pub fn export_snapshot<P: AsRef<Path>>(&self, path: P) -> ClinicResult<()> {
        self.repository.export_snapshot(path).map_err(export_failure)
    }
}
