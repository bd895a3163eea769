//! Exam service.

use std::path::Path;

use chrono::Utc;
use tracing::{debug, info};

use super::{authorize, ensure_not_past, export_failure, require};
use crate::error::ClinicResult;
use crate::models::{DoctorRecord, ExamRecord};
use crate::repository::{ExamRepository, Repository};

#[derive(Debug)]
pub struct ExamService {
    repository: ExamRepository,
}

impl ExamService {
    pub fn new(repository: ExamRepository) -> Self {
        Self { repository }
    }

    pub fn repository(&self) -> &ExamRepository {
        &self.repository
    }

    /// Order an exam. Exams dated before now are rejected; the cost starts
    /// at 0.
    pub fn add(&mut self, exam: Option<&ExamRecord>, caller: Option<&DoctorRecord>) -> ClinicResult<bool> {
        let exam = require(exam, "exam")?;
        authorize(caller)?;
        ensure_not_past(exam.date, Utc::now(), "exam.date")?;

        self.repository.add_record(exam)?;
        info!(exam_id = exam.id, patient_id = exam.patient_id, "exam added");
        Ok(true)
    }

    pub fn remove(&mut self, exam_id: i32, caller: Option<&DoctorRecord>) -> ClinicResult<bool> {
        authorize(caller)?;
        let removed = self.repository.remove(exam_id)?;
        info!(exam_id, removed, "exam removal");
        Ok(removed)
    }

    /// Not gated.
    pub fn exists(&self, exam_id: i32) -> ClinicResult<bool> {
        Ok(self.repository.exists(exam_id)?)
    }

    /// Not gated.
    pub fn get(&self, exam_id: i32) -> ClinicResult<Option<ExamRecord>> {
        Ok(self.repository.get_record(exam_id)?)
    }

    pub fn update_result(
        &mut self,
        exam_id: i32,
        result: &str,
        caller: Option<&DoctorRecord>,
    ) -> ClinicResult<bool> {
        authorize(caller)?;
        Ok(self.repository.update_result(exam_id, result)?)
    }

    /// Update the cost of an exam.
    ///
    /// Negative costs are refused here without touching the repository. A
    /// cost of exactly 0 passes this check but the exam itself refuses it, so
    /// the stored cost stays as it was.
    pub fn update_cost(&mut self, exam_id: i32, cost: f64, caller: Option<&DoctorRecord>) -> ClinicResult<bool> {
        authorize(caller)?;
        if cost < 0.0 {
            debug!(exam_id, cost, "negative exam cost refused");
            return Ok(false);
        }
        Ok(self.repository.update_cost(exam_id, cost)?)
    }

    pub fn sort_by_cost(&mut self, caller: Option<&DoctorRecord>) -> ClinicResult<bool> {
        authorize(caller)?;
        Ok(self.repository.sort_by_cost())
    }

    pub fn total_cost(&self, caller: Option<&DoctorRecord>) -> ClinicResult<f64> {
        authorize(caller)?;
        Ok(self.repository.total_cost()?)
    }

    pub fn export_snapshot<P: AsRef<Path>>(&self, path: P) -> ClinicResult<()> {
        self.repository.export_snapshot(path).map_err(export_failure)
    }
}
