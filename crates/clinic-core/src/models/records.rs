//! Lightweight transfer records.
//!
//! These are the only shapes accepted and returned by the service layer.
//! Every field is public and nothing is validated here.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Identified;

/// Identity and name of a person.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonRecord {
    pub id: i32,
    pub name: String,
}

impl PersonRecord {
    pub fn new(id: i32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Doctor transfer record, also used as the caller identity of gated
/// operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoctorRecord {
    pub id: i32,
    pub name: String,
    pub license_number: i32,
    /// Sole authorization signal consumed by the services
    pub can_take_decisions: bool,
}

impl Default for DoctorRecord {
    fn default() -> Self {
        Self {
            id: 0,
            name: String::new(),
            license_number: 0,
            can_take_decisions: true,
        }
    }
}

impl DoctorRecord {
    pub fn new(id: i32, name: impl Into<String>, license_number: i32) -> Self {
        Self {
            id,
            name: name.into(),
            license_number,
            can_take_decisions: true,
        }
    }

    /// An anonymous identity that only states whether it may take decisions.
    pub fn with_authority(can_take_decisions: bool) -> Self {
        Self {
            can_take_decisions,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PatientRecord {
    pub id: i32,
    pub name: String,
    pub health_number: i32,
}

impl PatientRecord {
    pub fn new(id: i32, name: impl Into<String>, health_number: i32) -> Self {
        Self {
            id,
            name: name.into(),
            health_number,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExamRecord {
    pub id: i32,
    pub exam_type: String,
    pub date: DateTime<Utc>,
    pub patient_id: i32,
}

impl ExamRecord {
    pub fn new(id: i32, exam_type: impl Into<String>, date: DateTime<Utc>, patient_id: i32) -> Self {
        Self {
            id,
            exam_type: exam_type.into(),
            date,
            patient_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosisRecord {
    pub id: i32,
    pub date: DateTime<Utc>,
    pub appointment_id: i32,
}

impl DiagnosisRecord {
    pub fn new(id: i32, date: DateTime<Utc>, appointment_id: i32) -> Self {
        Self {
            id,
            date,
            appointment_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppointmentRecord {
    pub id: i32,
    pub patient_id: i32,
    pub doctor_id: i32,
    pub date: DateTime<Utc>,
}

impl AppointmentRecord {
    pub fn new(id: i32, patient_id: i32, doctor_id: i32, date: DateTime<Utc>) -> Self {
        Self {
            id,
            patient_id,
            doctor_id,
            date,
        }
    }
}

macro_rules! impl_identified {
    ($($record:ty),+ $(,)?) => {
        $(
            impl Identified for $record {
                fn id(&self) -> i32 {
                    self.id
                }
            }
        )+
    };
}

impl_identified!(
    PersonRecord,
    DoctorRecord,
    PatientRecord,
    ExamRecord,
    DiagnosisRecord,
    AppointmentRecord,
);
