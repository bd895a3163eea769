//! Service layer.
//!
//! One service per entity kind. Each owns the repository it is given and
//! applies the same policy before touching it:
//!
//! 1. every required argument must be present ([`ClinicError::NullArgument`]),
//! 2. the calling doctor must be allowed to take decisions
//!    ([`ClinicError::DoctorNotAuthorized`]),
//! 3. entity-specific field checks ([`ClinicError::InvalidArgument`]).
//!
//! Repository errors are propagated unchanged; export failures are re-wrapped
//! as [`ClinicError::Export`] carrying the original message.
//!
//! Authorization only looks at the caller's decision flag. Nothing checks that
//! the caller is the doctor who created a record.

mod appointments;
mod clinic;
mod diagnoses;
mod doctors;
mod exams;
mod patients;

pub use appointments::*;
pub use clinic::*;
pub use diagnoses::*;
pub use doctors::*;
pub use exams::*;
pub use patients::*;

use chrono::{DateTime, Utc};
use tracing::warn;

use crate::error::{ClinicError, ClinicResult};
use crate::models::DoctorRecord;
use crate::repository::RepoError;

/// Unwrap a required argument or fail with [`ClinicError::NullArgument`].
pub(crate) fn require<'a, T>(arg: Option<&'a T>, name: &'static str) -> ClinicResult<&'a T> {
    arg.ok_or(ClinicError::NullArgument(name))
}

/// Check that a caller identity is present and may take decisions.
pub(crate) fn authorize(caller: Option<&DoctorRecord>) -> ClinicResult<&DoctorRecord> {
    let caller = require(caller, "caller")?;
    if !caller.can_take_decisions {
        warn!(doctor_id = caller.id, "doctor not authorized to take decisions");
        return Err(ClinicError::DoctorNotAuthorized);
    }
    Ok(caller)
}

/// Reject dates earlier than `now`. A date equal to `now` is accepted.
pub fn ensure_not_past(date: DateTime<Utc>, now: DateTime<Utc>, name: &'static str) -> ClinicResult<()> {
    if date < now {
        return Err(ClinicError::InvalidArgument {
            name,
            reason: format!("{} is in the past", date.to_rfc3339()),
        });
    }
    Ok(())
}

pub(crate) fn export_failure(err: RepoError) -> ClinicError {
    ClinicError::Export(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_require() {
        let value = 5;
        assert_eq!(require(Some(&value), "value").unwrap(), &5);
        assert!(matches!(
            require::<i32>(None, "value"),
            Err(ClinicError::NullArgument("value"))
        ));
    }

    #[test]
    fn test_authorize() {
        let doctor = DoctorRecord::new(1, "Dr. João", 2);
        assert!(authorize(Some(&doctor)).is_ok());

        let denied = DoctorRecord::with_authority(false);
        assert!(matches!(
            authorize(Some(&denied)),
            Err(ClinicError::DoctorNotAuthorized)
        ));
        assert!(matches!(
            authorize(None),
            Err(ClinicError::NullArgument("caller"))
        ));
    }

    #[test]
    fn test_ensure_not_past_boundary() {
        let now = Utc::now();
        assert!(ensure_not_past(now, now, "date").is_ok());
        assert!(ensure_not_past(now + Duration::seconds(1), now, "date").is_ok());

        let err = ensure_not_past(now - Duration::milliseconds(1), now, "date").unwrap_err();
        assert!(matches!(err, ClinicError::InvalidArgument { name: "date", .. }));
    }

    #[test]
    fn test_export_failure_keeps_message() {
        let err = export_failure(RepoError::InvalidOperation("boom".into()));
        assert_eq!(err.to_string(), "export failed: Invalid operation: boom");
    }
}
