//! Appointment repository operations.

use super::{ListRepository, StoredEntity};
use crate::models::{Appointment, AppointmentRecord};

pub type AppointmentRepository = ListRepository<Appointment>;

impl StoredEntity for Appointment {
    type Record = AppointmentRecord;
    const KIND: &'static str = "appointment";

    fn from_record(record: &AppointmentRecord) -> Self {
        Appointment::from_record(record)
    }

    fn to_record(&self) -> AppointmentRecord {
        self.into()
    }
}
