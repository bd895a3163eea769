//! Doctor repository operations.

use super::{ListRepository, RepoResult, Repository, StoredEntity};
use crate::models::{Doctor, DoctorRecord};

pub type DoctorRepository = ListRepository<Doctor>;

impl StoredEntity for Doctor {
    type Record = DoctorRecord;
    const KIND: &'static str = "doctor";

    fn from_record(record: &DoctorRecord) -> Self {
        Doctor::from_record(record)
    }

    fn to_record(&self) -> DoctorRecord {
        self.into()
    }
}

impl ListRepository<Doctor> {
    /// Appointments repository linked to a doctor (never wired, so 0).
    pub fn appointments_repository_id_of(&self, doctor_id: i32) -> RepoResult<Option<i32>> {
        Ok(self
            .get_by_id(doctor_id)?
            .map(|doctor| doctor.appointments_repository_id))
    }
}
