//! Appointment models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{AppointmentRecord, Identified};

/// A scheduled visit tying one patient to one doctor at a point in time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Appointment {
    pub id: i32,
    pub date: DateTime<Utc>,
    pub patient_id: i32,
    pub doctor_id: i32,
    /// Exams repository link, never wired
    pub exams_repository_id: i32,
    /// Diagnoses repository link, never wired
    pub diagnoses_repository_id: i32,
    /// No cost computation exists, so this stays 0
    pub cost: f64,
}

impl Appointment {
    pub fn new(id: i32, date: DateTime<Utc>, patient_id: i32, doctor_id: i32) -> Self {
        Self {
            id,
            date,
            patient_id,
            doctor_id,
            exams_repository_id: 0,
            diagnoses_repository_id: 0,
            cost: 0.0,
        }
    }

    pub fn from_record(record: &AppointmentRecord) -> Self {
        Self::new(record.id, record.date, record.patient_id, record.doctor_id)
    }
}

/// Same scheduled visit: identifier, date and both participants.
impl PartialEq for Appointment {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.date == other.date
            && self.patient_id == other.patient_id
            && self.doctor_id == other.doctor_id
    }
}

impl Identified for Appointment {
    fn id(&self) -> i32 {
        self.id
    }
}

impl From<&Appointment> for AppointmentRecord {
    fn from(appointment: &Appointment) -> Self {
        AppointmentRecord::new(
            appointment.id,
            appointment.patient_id,
            appointment.doctor_id,
            appointment.date,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_from_record() {
        let date = Utc::now() + Duration::days(2);
        let appointment = Appointment::from_record(&AppointmentRecord::new(3, 2, 1, date));
        assert_eq!(appointment.id, 3);
        assert_eq!(appointment.patient_id, 2);
        assert_eq!(appointment.doctor_id, 1);
        assert_eq!(appointment.cost, 0.0);
        assert_eq!(appointment.exams_repository_id, 0);
    }

    #[test]
    fn test_equality_ignores_cost_and_links() {
        let date = Utc::now();
        let a = Appointment::new(1, date, 2, 3);
        let mut b = a.clone();
        b.cost = 99.0;
        b.exams_repository_id = 4;
        assert_eq!(a, b);

        let c = Appointment::new(1, date, 2, 4);
        assert_ne!(a, c);
    }
}
