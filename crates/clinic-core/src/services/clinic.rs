//! The five services built together.

use tracing::info;

use super::{AppointmentService, DiagnosisService, DoctorService, ExamService, PatientService};
use crate::config::ClinicConfig;
use crate::error::ClinicResult;
use crate::repository::{
    AppointmentRepository, DiagnosisRepository, DoctorRepository, ExamRepository,
    PatientRepository, RepositorySequence,
};

/// One service per entity kind, with every repository numbered from the
/// same sequence so no two share a serial id.
#[derive(Debug)]
pub struct ClinicServices {
    pub doctors: DoctorService,
    pub patients: PatientService,
    pub exams: ExamService,
    pub appointments: AppointmentService,
    pub diagnoses: DiagnosisService,
}

impl ClinicServices {
    pub fn new(sequence: &mut RepositorySequence, config: ClinicConfig) -> ClinicResult<Self> {
        let services = Self {
            doctors: DoctorService::new(DoctorRepository::new(sequence)?, config.clone()),
            patients: PatientService::new(PatientRepository::new(sequence)?, config),
            exams: ExamService::new(ExamRepository::new(sequence)?),
            appointments: AppointmentService::new(AppointmentRepository::new(sequence)?),
            diagnoses: DiagnosisService::new(DiagnosisRepository::new(sequence)?),
        };
        info!(last_repository_id = sequence.last_issued(), "clinic services ready");
        Ok(services)
    }

    /// Serial ids of the five repositories, in field order.
    pub fn repository_ids(&self) -> [u32; 5] {
        [
            self.doctors.repository().repository_id(),
            self.patients.repository().repository_id(),
            self.exams.repository().repository_id(),
            self.appointments.repository().repository_id(),
            self.diagnoses.repository().repository_id(),
        ]
    }
}
