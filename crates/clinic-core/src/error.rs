//! Service-level error type.

use thiserror::Error;

use crate::repository::RepoError;

/// Code carried by [`RepoError::EntityAlreadyExists`].
pub const ENTITY_ALREADY_EXISTS_CODE: u16 = 123;
/// Code carried by [`ClinicError::DoctorNotAuthorized`].
pub const DOCTOR_NOT_AUTHORIZED_CODE: u16 = 101;
/// Code carried by [`RepoError::CollectionUninitialized`].
pub const COLLECTION_UNINITIALIZED_CODE: u16 = 0;

#[derive(Debug, Error)]
pub enum ClinicError {
    #[error("doctor is not authorized to take decisions")]
    DoctorNotAuthorized,

    #[error("missing required argument: {0}")]
    NullArgument(&'static str),

    #[error("invalid argument {name}: {reason}")]
    InvalidArgument { name: &'static str, reason: String },

    #[error(transparent)]
    Repository(#[from] RepoError),

    #[error("export failed: {0}")]
    Export(String),

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl ClinicError {
    /// Diagnostic code of the three domain error kinds; `None` otherwise.
    pub fn code(&self) -> Option<u16> {
        match self {
            ClinicError::DoctorNotAuthorized => Some(DOCTOR_NOT_AUTHORIZED_CODE),
            ClinicError::Repository(e) => e.code(),
            _ => None,
        }
    }

    pub fn is_already_exists(&self) -> bool {
        matches!(
            self,
            ClinicError::Repository(RepoError::EntityAlreadyExists { .. })
        )
    }

    pub fn is_collection_uninitialized(&self) -> bool {
        matches!(
            self,
            ClinicError::Repository(RepoError::CollectionUninitialized { .. })
        )
    }
}

pub type ClinicResult<T> = Result<T, ClinicError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes() {
        assert_eq!(ClinicError::DoctorNotAuthorized.code(), Some(101));

        let exists = ClinicError::from(RepoError::EntityAlreadyExists { kind: "exam", id: 1 });
        assert_eq!(exists.code(), Some(123));
        assert!(exists.is_already_exists());

        let uninit = ClinicError::from(RepoError::CollectionUninitialized { kind: "exam" });
        assert_eq!(uninit.code(), Some(0));
        assert!(uninit.is_collection_uninitialized());

        assert_eq!(ClinicError::NullArgument("caller").code(), None);
        assert_eq!(ClinicError::Export("disk full".into()).code(), None);
    }

    #[test]
    fn test_repository_message_is_preserved() {
        let err = ClinicError::from(RepoError::EntityAlreadyExists { kind: "patient", id: 4 });
        assert_eq!(err.to_string(), "patient with id 4 already exists");
    }

    #[test]
    fn test_null_argument_names_parameter() {
        let err = ClinicError::NullArgument("exam");
        assert_eq!(err.to_string(), "missing required argument: exam");
    }
}
