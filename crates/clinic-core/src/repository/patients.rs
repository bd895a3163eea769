//! Patient repository operations.

use super::{ListRepository, RepoResult, Repository, StoredEntity};
use crate::models::{Patient, PatientRecord};

pub type PatientRepository = ListRepository<Patient>;

impl StoredEntity for Patient {
    type Record = PatientRecord;
    const KIND: &'static str = "patient";

    fn from_record(record: &PatientRecord) -> Self {
        Patient::from_record(record)
    }

    fn to_record(&self) -> PatientRecord {
        self.into()
    }
}

impl ListRepository<Patient> {
    /// Appointments repository linked to a patient (never wired, so 0).
    pub fn appointments_repository_id_of(&self, patient_id: i32) -> RepoResult<Option<i32>> {
        Ok(self
            .get_by_id(patient_id)?
            .map(|patient| patient.appointments_repository_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_appointments_repository_id_of() {
        let mut repo = PatientRepository::with_id(1);
        repo.add_record(&PatientRecord::new(1, "Max", 100)).unwrap();
        assert_eq!(repo.appointments_repository_id_of(1).unwrap(), Some(0));
        assert_eq!(repo.appointments_repository_id_of(9).unwrap(), None);
    }

    #[test]
    fn test_stored_patient_matches_record() {
        let mut repo = PatientRepository::with_id(1);
        let record = PatientRecord::new(1, "Max", 100);
        repo.add_record(&record).unwrap();
        assert_eq!(repo.get_by_id(1).unwrap().unwrap(), &Patient::from_record(&record));
    }
}
