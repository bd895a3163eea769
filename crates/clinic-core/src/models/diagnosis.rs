//! Diagnosis model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{DiagnosisRecord, Identified};

/// A diagnosis, optionally linked to the appointment where it was made.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Diagnosis {
    pub id: i32,
    description: String,
    pub date: DateTime<Utc>,
    appointment_id: i32,
}

impl Diagnosis {
    /// Create a diagnosis with an empty description.
    pub fn new(id: i32, date: DateTime<Utc>, appointment_id: i32) -> Self {
        Self {
            id,
            description: String::new(),
            date,
            appointment_id,
        }
    }

    pub fn from_record(record: &DiagnosisRecord) -> Self {
        Self::new(record.id, record.date, record.appointment_id)
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn appointment_id(&self) -> i32 {
        self.appointment_id
    }

    /// Append text to the description, separated by a single space.
    ///
    /// The description can only grow; blank text is rejected.
    pub fn append_description(&mut self, text: &str) -> bool {
        if text.trim().is_empty() {
            return false;
        }
        if !self.description.is_empty() {
            self.description.push(' ');
        }
        self.description.push_str(text);
        true
    }

    /// Link this diagnosis to an appointment. Re-association overwrites.
    pub fn associate_appointment(&mut self, appointment_id: i32) -> bool {
        self.appointment_id = appointment_id;
        true
    }
}

/// Diagnoses compare by description and date, not by identifier.
impl PartialEq for Diagnosis {
    fn eq(&self, other: &Self) -> bool {
        self.description == other.description && self.date == other.date
    }
}

impl Identified for Diagnosis {
    fn id(&self) -> i32 {
        self.id
    }
}

impl From<&Diagnosis> for DiagnosisRecord {
    fn from(diagnosis: &Diagnosis) -> Self {
        DiagnosisRecord::new(diagnosis.id, diagnosis.date, diagnosis.appointment_id)
    }
}
