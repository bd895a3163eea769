//! Person, doctor and patient models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{DoctorRecord, Identified, PatientRecord};

/// Attributes shared by every person known to the clinic.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Person {
    /// Caller-assigned identifier (uniqueness is checked by services, not here)
    pub id: i32,
    pub name: String,
    pub gender: Option<String>,
    pub birth_date: Option<DateTime<Utc>>,
}

impl Person {
    /// Create a person with the two attributes every transfer record carries.
    pub fn new(id: i32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            gender: None,
            birth_date: None,
        }
    }
}

/// Two people are the same person when their identifiers match.
impl PartialEq for Person {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Identified for Person {
    fn id(&self) -> i32 {
        self.id
    }
}

/// A doctor: a person plus professional attributes and the decision flag
/// consulted by every gated service operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Doctor {
    pub person: Person,
    /// Never populated by any constructor
    pub specialty: Option<String>,
    /// Professional licence number. The record-based constructor does not
    /// assign it, so stored doctors report 0.
    pub license_number: i32,
    pub can_take_decisions: bool,
    /// Appointments repository link, never wired
    pub appointments_repository_id: i32,
}

impl Default for Doctor {
    fn default() -> Self {
        Self {
            person: Person::default(),
            specialty: None,
            license_number: 0,
            can_take_decisions: true,
            appointments_repository_id: 0,
        }
    }
}

impl Doctor {
    pub fn new(id: i32, name: impl Into<String>) -> Self {
        Self {
            person: Person::new(id, name),
            ..Self::default()
        }
    }

    /// Build the minimal doctor entity from a transfer record.
    ///
    /// Only identity and name are carried over; the licence number in the
    /// record is dropped.
    pub fn from_record(record: &DoctorRecord) -> Self {
        Self::new(record.id, record.name.clone())
    }
}

impl PartialEq for Doctor {
    fn eq(&self, other: &Self) -> bool {
        self.person == other.person
    }
}

impl Identified for Doctor {
    fn id(&self) -> i32 {
        self.person.id
    }
}

impl From<&Doctor> for DoctorRecord {
    fn from(doctor: &Doctor) -> Self {
        DoctorRecord::new(
            doctor.person.id,
            doctor.person.name.clone(),
            doctor.license_number,
        )
    }
}

/// A patient: a person plus the national health number.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Patient {
    pub person: Person,
    pub health_number: i32,
    /// Diagnoses repository link, never wired
    pub diagnoses_repository_id: i32,
    /// Appointments repository link, never wired
    pub appointments_repository_id: i32,
}

impl Patient {
    pub fn new(id: i32, name: impl Into<String>, health_number: i32) -> Self {
        Self {
            person: Person::new(id, name),
            health_number,
            diagnoses_repository_id: 0,
            appointments_repository_id: 0,
        }
    }

    pub fn from_record(record: &PatientRecord) -> Self {
        Self::new(record.id, record.name.clone(), record.health_number)
    }
}

/// Same person and same health number.
impl PartialEq for Patient {
    fn eq(&self, other: &Self) -> bool {
        self.person == other.person && self.health_number == other.health_number
    }
}

impl Identified for Patient {
    fn id(&self) -> i32 {
        self.person.id
    }
}

impl From<&Patient> for PatientRecord {
    fn from(patient: &Patient) -> Self {
        PatientRecord::new(
            patient.person.id,
            patient.person.name.clone(),
            patient.health_number,
        )
    }
}
