//! Clinic Core Library
//!
//! In-memory clinical records: doctors, patients, exams, diagnoses and
//! appointments, each kept in a list-backed repository and fronted by a
//! service that checks the caller before touching it.
//!
//! # Architecture
//!
//! ```text
//! caller ── transfer record + caller identity ──▶ Service
//!                                                   │
//!                                    [null check → authorization → field checks]
//!                                                   │
//!                                                   ▼
//!                                          ListRepository<T>
//!                                                   │
//!                                                   ▼
//!                                          JSON snapshot export
//! ```
//!
//! # Core Principle
//!
//! **Every decision is taken by a doctor with decision rights.** Gated
//! operations refuse callers whose `can_take_decisions` flag is false and
//! leave the repository untouched.
//!
//! # Modules
//!
//! - [`models`]: Entities and their transfer records
//! - [`repository`]: Generic repository contract, per-kind extensions, snapshots
//! - [`services`]: Validation and authorization in front of each repository
//! - [`error`]: Error taxonomy with diagnostic codes
//! - [`config`]: Startup configuration (removal pass-code)

pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

// Re-export commonly used types
pub use config::ClinicConfig;
pub use error::{ClinicError, ClinicResult};
pub use models::{
    Appointment, AppointmentRecord, Diagnosis, DiagnosisRecord, Doctor, DoctorRecord, Exam,
    ExamRecord, Identified, Patient, PatientRecord, Person, PersonRecord,
};
pub use repository::{
    AppointmentRepository, DiagnosisRepository, DoctorRepository, ExamRepository,
    ListRepository, PatientRepository, RepoError, RepoResult, Repository, RepositorySequence,
    StoredEntity,
};
pub use services::{
    AppointmentService, ClinicServices, DiagnosisService, DoctorService, ExamService,
    PatientService,
};
