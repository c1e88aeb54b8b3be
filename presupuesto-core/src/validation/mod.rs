//! Project validation against the documented invariants.

pub mod validate;

pub use validate::{validate_project, ValidationResult};
