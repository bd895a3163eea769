//! Domain models for the clinic records system.

mod appointment;
mod diagnosis;
mod exam;
mod person;
mod records;

pub use appointment::*;
pub use diagnosis::*;
pub use exam::*;
pub use person::*;
pub use records::*;

/// Anything stored in a repository and looked up by its integer identifier.
pub trait Identified {
    fn id(&self) -> i32;
}
