//! Clinic runtime configuration.
//!
//! Resolved once at startup and passed into the services that need it, so no
//! operation reads process-wide state.

use crate::error::{ClinicError, ClinicResult};

/// Pass-code accepted for doctor and patient removal when none is configured.
pub const DEFAULT_REMOVAL_PASSCODE: &str = "0000";

/// Core configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct ClinicConfig {
    removal_passcode: String,
}

impl Default for ClinicConfig {
    fn default() -> Self {
        Self {
            removal_passcode: DEFAULT_REMOVAL_PASSCODE.to_string(),
        }
    }
}

impl ClinicConfig {
    /// Create a configuration with the given removal pass-code.
    ///
    /// The pass-code must be exactly four ASCII digits. It is a shared
    /// placeholder secret compared for equality, not an authentication scheme.
    pub fn new(removal_passcode: impl Into<String>) -> ClinicResult<Self> {
        let removal_passcode = removal_passcode.into();
        if removal_passcode.len() != 4 || !removal_passcode.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ClinicError::Config(
                "removal passcode must be exactly four digits".into(),
            ));
        }
        Ok(Self { removal_passcode })
    }

    /// Build a configuration from an optional raw value.
    ///
    /// `None` or a blank value falls back to [`DEFAULT_REMOVAL_PASSCODE`].
    pub fn from_passcode_value(value: Option<String>) -> ClinicResult<Self> {
        match value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty()) {
            Some(passcode) => Self::new(passcode),
            None => Ok(Self::default()),
        }
    }

    pub fn verify_passcode(&self, candidate: &str) -> bool {
        self.removal_passcode == candidate
    }
}
