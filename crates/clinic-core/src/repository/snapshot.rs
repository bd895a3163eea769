//! Snapshot export and import.
//!
//! A snapshot is one JSON document holding the repository serial id, the
//! entity kind and the full ordered collection, plus a SHA-256 checksum of the
//! serialized collection so a damaged file is rejected on read.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tracing::info;

use super::{ListRepository, RepoError, RepoResult, StoredEntity};

#[derive(Serialize)]
struct SnapshotOut<'a, T> {
    kind: &'a str,
    repository_id: u32,
    checksum: String,
    items: Option<&'a [T]>,
}

#[derive(Deserialize)]
struct SnapshotIn<T> {
    kind: String,
    repository_id: u32,
    checksum: String,
    items: Option<Vec<T>>,
}

impl<T: StoredEntity> ListRepository<T> {
    /// Write the repository to `path`, replacing any existing file.
    pub fn export_snapshot<P: AsRef<Path>>(&self, path: P) -> RepoResult<()> {
        let path = path.as_ref();
        let items = self.items.as_deref();
        let snapshot = SnapshotOut {
            kind: T::KIND,
            repository_id: self.repository_id,
            checksum: checksum(&items)?,
            items,
        };

        let mut writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(&mut writer, &snapshot)?;
        writer.flush()?;

        info!(
            kind = T::KIND,
            repository_id = self.repository_id,
            count = self.len(),
            path = %path.display(),
            "exported snapshot"
        );
        Ok(())
    }

    /// Rebuild a repository from a snapshot written by [`Self::export_snapshot`].
    pub fn read_snapshot<P: AsRef<Path>>(path: P) -> RepoResult<Self> {
        let path = path.as_ref();
        let reader = BufReader::new(File::open(path)?);
        let snapshot: SnapshotIn<T> = serde_json::from_reader(reader)?;

        if snapshot.kind != T::KIND {
            return Err(RepoError::SnapshotMismatch(format!(
                "expected {} snapshot, found {}",
                T::KIND,
                snapshot.kind
            )));
        }
        if checksum(&snapshot.items)? != snapshot.checksum {
            return Err(RepoError::SnapshotMismatch(format!(
                "checksum mismatch in {}",
                path.display()
            )));
        }

        info!(
            kind = T::KIND,
            repository_id = snapshot.repository_id,
            path = %path.display(),
            "read snapshot"
        );
        Ok(Self {
            repository_id: snapshot.repository_id,
            items: snapshot.items,
        })
    }
}

fn checksum<S: Serialize>(items: &S) -> RepoResult<String> {
    let payload = serde_json::to_vec(items)?;
    Ok(hex::encode(Sha256::digest(&payload)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Exam, Patient};
    use crate::repository::{ExamRepository, PatientRepository, Repository};
    use chrono::{Duration, Utc};

    #[test]
    fn test_export_and_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("patients.json");

        let mut repo = PatientRepository::with_id(7);
        repo.add(Patient::new(1, "Max", 100)).unwrap();
        repo.add(Patient::new(2, "Luna", 200)).unwrap();
        repo.export_snapshot(&path).unwrap();

        let loaded = PatientRepository::read_snapshot(&path).unwrap();
        assert_eq!(loaded.repository_id(), 7);
        assert_eq!(loaded.len(), 2);
        let ids: Vec<_> = loaded.iter().map(|p| p.person.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_export_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("exams.json");
        std::fs::write(&path, "old contents that are much longer than nothing").unwrap();

        let mut repo = ExamRepository::with_id(1);
        let mut exam = Exam::new(1, "Blood Test", Utc::now() + Duration::days(3), 10);
        exam.update_cost(12.5);
        repo.add(exam).unwrap();
        repo.export_snapshot(&path).unwrap();

        let loaded = ExamRepository::read_snapshot(&path).unwrap();
        assert_eq!(loaded.get_by_id(1).unwrap().unwrap().cost(), 12.5);
    }

    #[test]
    fn test_long_fraction_cost_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("exams.json");

        let mut repo = ExamRepository::with_id(1);
        let mut exam = Exam::new(1, "Blood Test", Utc::now(), 10);
        assert!(exam.update_cost(994.1424234139935));
        repo.add(exam).unwrap();
        repo.export_snapshot(&path).unwrap();

        let loaded = ExamRepository::read_snapshot(&path).unwrap();
        assert_eq!(loaded.get_by_id(1).unwrap().unwrap().cost(), 994.1424234139935);
    }

    #[test]
    fn test_uninitialized_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("none.json");

        PatientRepository::uninitialized(3).export_snapshot(&path).unwrap();
        let loaded = PatientRepository::read_snapshot(&path).unwrap();
        assert!(!loaded.is_initialized());
    }

    #[test]
    fn test_wrong_kind_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("patients.json");
        PatientRepository::with_id(1).export_snapshot(&path).unwrap();

        let err = ExamRepository::read_snapshot(&path).unwrap_err();
        assert!(matches!(err, RepoError::SnapshotMismatch(_)));
    }

    #[test]
    fn test_tampered_snapshot_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("patients.json");

        let mut repo = PatientRepository::with_id(1);
        repo.add(Patient::new(1, "Max", 100)).unwrap();
        repo.export_snapshot(&path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        std::fs::write(&path, contents.replace("Max", "Rex")).unwrap();

        let err = PatientRepository::read_snapshot(&path).unwrap_err();
        assert!(matches!(err, RepoError::SnapshotMismatch(_)));
    }

    #[test]
    fn test_missing_destination_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("patients.json");

        let err = PatientRepository::with_id(1).export_snapshot(&path).unwrap_err();
        assert!(matches!(err, RepoError::Io(_)));
    }
}
