//! Prelude module for convenient imports.
//!
//! `use filegate_validator::prelude::*;` brings in the traits, the filename
//! matcher and its types, the base string rule and the combinators.

// ============================================================================
// FOUNDATION: Core traits, errors
// ============================================================================

pub use crate::foundation::{Validate, ValidateExt, ValidationError, ValidationErrors};

// ============================================================================
// FILENAME: Matcher, validator, systems
// ============================================================================

pub use crate::filename::{
    Check, Corpus, Family, FilenameArgs, FilenameValidator, Report, System, UnsupportedSystemError,
    filename, filename_for, filename_named,
};

// ============================================================================
// VALIDATORS & COMBINATORS
// ============================================================================

pub use crate::combinators::{
    And, AndAll, Refine, WithMessage, and, and_all, refine, with_message,
};
pub use crate::validators::{AnyString, string};
