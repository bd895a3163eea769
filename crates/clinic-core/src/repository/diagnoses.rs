//! Diagnosis repository operations.

use tracing::debug;

use super::{ListRepository, RepoResult, Repository, StoredEntity};
use crate::models::{Diagnosis, DiagnosisRecord};

pub type DiagnosisRepository = ListRepository<Diagnosis>;

impl StoredEntity for Diagnosis {
    type Record = DiagnosisRecord;
    const KIND: &'static str = "diagnosis";

    fn from_record(record: &DiagnosisRecord) -> Self {
        Diagnosis::from_record(record)
    }

    fn to_record(&self) -> DiagnosisRecord {
        self.into()
    }
}

impl ListRepository<Diagnosis> {
    /// Link a diagnosis to an appointment. `false` when the diagnosis is absent.
    pub fn associate_appointment(&mut self, diagnosis_id: i32, appointment_id: i32) -> RepoResult<bool> {
        let associated = self
            .get_mut(diagnosis_id)?
            .is_some_and(|diagnosis| diagnosis.associate_appointment(appointment_id));
        debug!(diagnosis_id, appointment_id, associated, "associate appointment");
        Ok(associated)
    }

    pub fn appointment_id_of(&self, diagnosis_id: i32) -> RepoResult<Option<i32>> {
        Ok(self.get_by_id(diagnosis_id)?.map(Diagnosis::appointment_id))
    }

    /// Append text to a diagnosis description.
    ///
    /// Returns `false` when the text is blank or the diagnosis is absent.
    pub fn append_description(&mut self, diagnosis_id: i32, text: &str) -> RepoResult<bool> {
        if text.trim().is_empty() {
            return Ok(false);
        }
        let appended = self
            .get_mut(diagnosis_id)?
            .is_some_and(|diagnosis| diagnosis.append_description(text));
        debug!(diagnosis_id, appended, "append diagnosis description");
        Ok(appended)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::RepoError;
    use chrono::Utc;

    fn setup_repo() -> DiagnosisRepository {
        let mut repo = DiagnosisRepository::with_id(1);
        repo.add(Diagnosis::new(1, Utc::now(), 0)).unwrap();
        repo
    }

    #[test]
    fn test_associate_appointment() {
        let mut repo = setup_repo();
        assert!(repo.associate_appointment(1, 4).unwrap());
        assert_eq!(repo.appointment_id_of(1).unwrap(), Some(4));

        assert!(repo.associate_appointment(1, 6).unwrap());
        assert_eq!(repo.appointment_id_of(1).unwrap(), Some(6));

        assert!(!repo.associate_appointment(2, 4).unwrap());
        assert_eq!(repo.appointment_id_of(2).unwrap(), None);
    }

    #[test]
    fn test_append_description() {
        let mut repo = setup_repo();
        assert!(repo.append_description(1, "Seasonal flu").unwrap());
        assert!(repo.append_description(1, "with mild fever").unwrap());
        assert!(!repo.append_description(1, "").unwrap());
        assert!(!repo.append_description(3, "text").unwrap());

        let diagnosis = repo.get_by_id(1).unwrap().unwrap();
        assert_eq!(diagnosis.description(), "Seasonal flu with mild fever");
    }

    #[test]
    fn test_uninitialized() {
        let mut repo = DiagnosisRepository::uninitialized(1);
        assert!(matches!(
            repo.associate_appointment(1, 2),
            Err(RepoError::CollectionUninitialized { .. })
        ));
        assert!(repo.appointment_id_of(1).is_err());
        assert!(repo.append_description(1, "text").is_err());
    }

    #[test]
    fn test_record_keeps_appointment_link() {
        let mut repo = DiagnosisRepository::with_id(1);
        let record = DiagnosisRecord::new(2, Utc::now(), 9);
        repo.add_record(&record).unwrap();
        assert_eq!(repo.get_record(2).unwrap().unwrap(), record);
        assert!(repo.get_by_id(2).unwrap().unwrap().description().is_empty());
    }
}
