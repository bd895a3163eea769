//! Exam model.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{ExamRecord, Identified};

/// A medical exam ordered for a patient.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Exam {
    pub id: i32,
    pub date: DateTime<Utc>,
    pub patient_id: i32,
    /// Kind of exam (e.g., "Blood Test")
    pub exam_type: String,
    result: Option<String>,
    cost: f64,
}

impl Exam {
    /// Create an exam with no result and zero cost.
    pub fn new(id: i32, exam_type: impl Into<String>, date: DateTime<Utc>, patient_id: i32) -> Self {
        Self {
            id,
            date,
            patient_id,
            exam_type: exam_type.into(),
            result: None,
            cost: 0.0,
        }
    }

    pub fn from_record(record: &ExamRecord) -> Self {
        Self::new(record.id, record.exam_type.clone(), record.date, record.patient_id)
    }

    pub fn result(&self) -> Option<&str> {
        self.result.as_deref()
    }

    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Replace the result. Blank text is rejected.
    pub fn update_result(&mut self, result: &str) -> bool {
        if result.trim().is_empty() {
            return false;
        }
        self.result = Some(result.to_string());
        true
    }

    /// Replace the cost. Only strictly positive, finite costs are accepted.
    pub fn update_cost(&mut self, cost: f64) -> bool {
        if !cost.is_finite() || cost <= 0.0 {
            return false;
        }
        self.cost = cost;
        true
    }

    /// Order two exams by cost, ascending.
    pub fn cmp_cost(&self, other: &Self) -> Ordering {
        self.cost.total_cmp(&other.cost)
    }
}

/// Exams compare by kind and price, not by identifier.
impl PartialEq for Exam {
    fn eq(&self, other: &Self) -> bool {
        self.exam_type == other.exam_type && self.cost == other.cost
    }
}

impl Identified for Exam {
    fn id(&self) -> i32 {
        self.id
    }
}

impl From<&Exam> for ExamRecord {
    fn from(exam: &Exam) -> Self {
        ExamRecord::new(exam.id, exam.exam_type.clone(), exam.date, exam.patient_id)
    }
}
