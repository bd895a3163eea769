use std::path::PathBuf;

use chrono::{Duration, Utc};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use clinic_core::{
    AppointmentRecord, ClinicConfig, ClinicError, ClinicResult, ClinicServices, DiagnosisRecord,
    DoctorRecord, ExamRecord, PatientRecord, RepositorySequence,
};

/// Print the outcome of a service call.
///
/// Authorization failures are reported separately from every other failure.
fn report<T: std::fmt::Debug>(action: &str, result: ClinicResult<T>) -> Option<T> {
    match result {
        Ok(value) => {
            println!("{action}: {value:?}");
            Some(value)
        }
        Err(ClinicError::DoctorNotAuthorized) => {
            println!("{action}: the doctor is not allowed to take decisions");
            None
        }
        Err(e) => {
            println!("{action}: failed ({e})");
            None
        }
    }
}

/// Console walkthrough of the clinic services.
///
/// # Environment Variables
/// - `CLINIC_REMOVAL_PASSCODE`: pass-code for doctor/patient removal (default: "0000")
/// - `CLINIC_SNAPSHOT_DIR`: where snapshots are written (default: system temp dir)
fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("clinic_core=info".parse()?)
                .add_directive("clinic_demo=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ClinicConfig::from_passcode_value(std::env::var("CLINIC_REMOVAL_PASSCODE").ok())?;
    let snapshot_dir = std::env::var("CLINIC_SNAPSHOT_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| std::env::temp_dir());

    let mut sequence = RepositorySequence::new();
    let ClinicServices {
        mut doctors,
        mut patients,
        mut exams,
        mut appointments,
        mut diagnoses,
    } = ClinicServices::new(&mut sequence, config)?;

    tracing::info!("++ Clinic demo, {} repositories numbered", sequence.last_issued());

    let joao = DoctorRecord::new(1, "Dr. João", 2);
    let intern = DoctorRecord {
        can_take_decisions: false,
        ..DoctorRecord::new(2, "Dr. Estagiário", 3)
    };
    let maria = PatientRecord::new(1, "Maria", 123456789);

    println!("== Doctors");
    report("add Dr. João", doctors.add(Some(&joao)));
    report("add intern", doctors.add(Some(&intern)));
    report("add Dr. João again", doctors.add(Some(&joao)));
    report("get doctor 1", doctors.get(1, Some(&joao)));

    println!("== Patients");
    report("add Maria", patients.add(Some(&maria), Some(&joao)));
    report("add Maria as intern", patients.add(Some(&maria), Some(&intern)));
    report("patient 1 exists", patients.exists(1, Some(&joao)));

    println!("== Appointments");
    let appointment = AppointmentRecord::new(3, maria.id, joao.id, Utc::now() + Duration::days(2));
    report("schedule appointment 3", appointments.add(Some(&appointment), Some(&joao)));
    report("get appointment 3", appointments.get(3, Some(&joao)));
    report(
        "appointment 3 seen by Maria",
        appointments.exists_for_patient(3, Some(&maria)),
    );

    println!("== Exams");
    let blood_test = ExamRecord::new(1, "Blood Test", Utc::now() + Duration::days(365), maria.id);
    report("order blood test", exams.add(Some(&blood_test), Some(&joao)));
    report("set cost 0", exams.update_cost(1, 0.0, Some(&joao)));
    report("set cost 25.5", exams.update_cost(1, 25.5, Some(&joao)));
    report("set result as intern", exams.update_result(1, "Normal", Some(&intern)));
    report("set result", exams.update_result(1, "Normal", Some(&joao)));
    report("total cost", exams.total_cost(Some(&joao)));

    println!("== Diagnoses");
    let yesterday = DiagnosisRecord::new(1, Utc::now() - Duration::days(1), 0);
    report("add past diagnosis", diagnoses.add(Some(&yesterday), Some(&joao)));
    let tomorrow = DiagnosisRecord::new(2, Utc::now() + Duration::days(1), 0);
    report("add diagnosis 2", diagnoses.add(Some(&tomorrow), Some(&joao)));
    report(
        "describe diagnosis 2",
        diagnoses.append_description(2, "Seasonal allergy", Some(&joao)),
    );
    report("link diagnosis 2", diagnoses.associate_appointment(2, appointment.id));

    println!("== Snapshots");
    report("export doctors", doctors.export_snapshot(snapshot_dir.join("doctors.json")));
    report("export patients", patients.export_snapshot(snapshot_dir.join("patients.json")));
    report(
        "export appointments",
        appointments.export_snapshot(snapshot_dir.join("appointments.json")),
    );
    report("export exams", exams.export_snapshot(snapshot_dir.join("exams.json")));
    report(
        "export diagnoses",
        diagnoses.export_snapshot(snapshot_dir.join("diagnoses.json")),
    );

    println!("== Removal");
    report("remove Maria with wrong pass-code", patients.remove(1, "9999"));
    report("remove Maria", patients.remove(1, "0000"));

    Ok(())
}
