//! Core validation types and traits
//!
//! This module contains the building blocks that every rule in the crate is
//! expressed with, and that a host validation pipeline consumes:
//!
//! - **Traits**: `Validate`, `ValidateExt`
//! - **Errors**: `ValidationError`, `ValidationErrors`
//!
//! # Composition
//!
//! Rules compose with combinators, so a filename rule can be attached to a
//! generic string rule like any other refinement step:
//!
//! ```
//! use filegate_validator::prelude::*;
//!
//! let windows = filename_for(System::Ntfs).unwrap();
//! let upload_name = string()
//!     .refine(|s: &str| s.len() <= 64, "at most 64 bytes")
//!     .and(windows);
//!
//! assert!(upload_name.validate("invoice-2024.pdf").is_ok());
//! assert!(upload_name.validate("aux.pdf").is_err());
//! ```

pub mod error;
pub mod traits;

pub use error::{ErrorParams, ValidationError, ValidationErrors};
pub use traits::{Validate, ValidateExt};

// ============================================================================
// UTILITIES
// ============================================================================

/// Validates a value with a single validator.
///
/// Convenience for one-off validations.
#[must_use = "validation result must be checked"]
pub fn validate_value<V>(value: &V::Input, validator: &V) -> Result<(), ValidationError>
where
    V: Validate,
{
    validator.validate(value)
}

/// Validates a value with multiple validators, collecting every failure.
///
/// All validators must pass for this to succeed.
pub fn validate_with_all<V>(value: &V::Input, validators: &[&V]) -> Result<(), ValidationErrors>
where
    V: Validate + ?Sized,
{
    validators
        .iter()
        .filter_map(|validator| validator.validate(value).err())
        .collect::<ValidationErrors>()
        .into_result(())
}

// ============================================================================
// TYPE ALIASES
// ============================================================================

/// A validation result using the standard `ValidationError`.
pub type ValidationResult<T> = Result<T, ValidationError>;

// ============================================================================
// TESTS
// ============================================================================
