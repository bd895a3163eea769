//! Exam repository operations.

use tracing::debug;

use super::{ListRepository, RepoResult, StoredEntity};
use crate::models::{Exam, ExamRecord};

pub type ExamRepository = ListRepository<Exam>;

impl StoredEntity for Exam {
    type Record = ExamRecord;
    const KIND: &'static str = "exam";

    fn from_record(record: &ExamRecord) -> Self {
        Exam::from_record(record)
    }

    fn to_record(&self) -> ExamRecord {
        self.into()
    }
}

impl ListRepository<Exam> {
    /// Sum of the cost of every stored exam.
    pub fn total_cost(&self) -> RepoResult<f64> {
        Ok(self.items()?.iter().map(Exam::cost).sum())
    }

    /// Replace the result of an exam.
    ///
    /// Returns `false` when the text is blank or no exam has this id.
    pub fn update_result(&mut self, exam_id: i32, result: &str) -> RepoResult<bool> {
        if result.trim().is_empty() {
            return Ok(false);
        }
        let updated = self
            .get_mut(exam_id)?
            .is_some_and(|exam| exam.update_result(result));
        debug!(exam_id, updated, "update exam result");
        Ok(updated)
    }

    /// Replace the cost of an exam.
    ///
    /// Returns `false` when the exam rejects the cost or no exam has this id.
    pub fn update_cost(&mut self, exam_id: i32, cost: f64) -> RepoResult<bool> {
        let updated = self
            .get_mut(exam_id)?
            .is_some_and(|exam| exam.update_cost(cost));
        debug!(exam_id, cost, updated, "update exam cost");
        Ok(updated)
    }

    /// Sort exams in place by ascending cost (stable).
    ///
    /// Returns `false` only when there is no backing collection.
    pub fn sort_by_cost(&mut self) -> bool {
        match self.items_mut() {
            Ok(items) => {
                items.sort_by(Exam::cmp_cost);
                true
            }
            Err(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::{RepoError, Repository};
    use chrono::{Duration, Utc};

    fn setup_repo() -> ExamRepository {
        ExamRepository::with_id(1)
    }

    fn make_exam(id: i32, exam_type: &str, cost: f64) -> Exam {
        let mut exam = Exam::new(id, exam_type, Utc::now() + Duration::days(1), 10);
        if cost > 0.0 {
            exam.update_cost(cost);
        }
        exam
    }

    #[test]
    fn test_total_cost() {
        let mut repo = setup_repo();
        assert_eq!(repo.total_cost().unwrap(), 0.0);

        repo.add(make_exam(1, "Blood Test", 10.0)).unwrap();
        repo.add(make_exam(2, "X-Ray", 32.5)).unwrap();
        repo.add(make_exam(3, "MRI", 0.0)).unwrap();
        assert_eq!(repo.total_cost().unwrap(), 42.5);
    }

    #[test]
    fn test_total_cost_uninitialized() {
        let repo = ExamRepository::uninitialized(1);
        assert!(matches!(
            repo.total_cost(),
            Err(RepoError::CollectionUninitialized { kind: "exam" })
        ));
    }

    #[test]
    fn test_update_result() {
        let mut repo = setup_repo();
        repo.add(make_exam(1, "Blood Test", 0.0)).unwrap();

        assert!(!repo.update_result(1, " ").unwrap());
        assert!(repo.update_result(1, "Normal").unwrap());
        assert_eq!(repo.get_by_id(1).unwrap().unwrap().result(), Some("Normal"));

        assert!(!repo.update_result(99, "Normal").unwrap());
    }

    #[test]
    fn test_update_cost() {
        let mut repo = setup_repo();
        repo.add(make_exam(1, "Blood Test", 0.0)).unwrap();

        assert!(!repo.update_cost(1, 0.0).unwrap());
        assert!(!repo.update_cost(1, -1.0).unwrap());
        assert_eq!(repo.get_by_id(1).unwrap().unwrap().cost(), 0.0);

        assert!(repo.update_cost(1, 25.5).unwrap());
        assert_eq!(repo.get_by_id(1).unwrap().unwrap().cost(), 25.5);

        assert!(!repo.update_cost(2, 10.0).unwrap());
    }

    #[test]
    fn test_sort_by_cost() {
        let mut repo = setup_repo();
        repo.add(make_exam(1, "MRI", 300.0)).unwrap();
        repo.add(make_exam(2, "Blood Test", 10.0)).unwrap();
        repo.add(make_exam(3, "X-Ray", 45.0)).unwrap();
        repo.add(make_exam(4, "Urine Test", 10.0)).unwrap();

        assert!(repo.sort_by_cost());
        let ids: Vec<_> = repo.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![2, 4, 3, 1]);
    }

    #[test]
    fn test_sort_uninitialized_returns_false() {
        let mut repo = ExamRepository::uninitialized(1);
        assert!(!repo.sort_by_cost());
    }

    #[test]
    fn test_record_round_trip() {
        let mut repo = setup_repo();
        let date = Utc::now() + Duration::days(365);
        let record = ExamRecord::new(1, "Blood Test", date, 10);
        repo.add_record(&record).unwrap();

        assert_eq!(repo.get_record(1).unwrap().unwrap(), record);
        let stored = repo.get_by_id(1).unwrap().unwrap();
        assert_eq!(stored.cost(), 0.0);
        assert!(stored.result().is_none());
    }
}
