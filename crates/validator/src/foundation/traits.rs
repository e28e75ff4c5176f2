//! Core traits for the validation system
//!
//! [`Validate`] is the extension point a host pipeline consumes; every
//! filename rule ends up behind it. [`ValidateExt`] adds the fluent
//! combinator methods.

use std::borrow::Cow;

use crate::foundation::ValidationError;

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// The core trait that all validators implement.
///
/// Generic over the input type so that string rules cannot be applied to
/// anything but strings. Implementations must be pure: the same input
/// always yields the same outcome.
///
/// # Examples
///
/// ```
/// use filegate_validator::foundation::{Validate, ValidationError};
///
/// struct NoSpaces;
///
/// impl Validate for NoSpaces {
///     type Input = str;
///
///     fn validate(&self, input: &str) -> Result<(), ValidationError> {
///         if input.contains(' ') {
///             Err(ValidationError::new("no_spaces", "must not contain spaces"))
///         } else {
///             Ok(())
///         }
///     }
/// }
///
/// assert!(NoSpaces.validate("report.pdf").is_ok());
/// assert!(NoSpaces.validate("my report.pdf").is_err());
/// ```
pub trait Validate {
    /// The type of input being validated.
    ///
    /// Use `?Sized` to allow validation of unsized types like `str`.
    type Input: ?Sized;

    /// Validates the input value.
    ///
    /// # Returns
    ///
    /// * `Ok(())` if validation succeeds
    /// * `Err(ValidationError)` if validation fails
    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError>;
}

impl<V: Validate + ?Sized> Validate for &V {
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        (**self).validate(input)
    }
}

impl<V: Validate + ?Sized> Validate for Box<V> {
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        (**self).validate(input)
    }
}

// ============================================================================
// VALIDATOR EXTENSION TRAIT
// ============================================================================

/// Extension trait providing combinator methods for validators.
///
/// Automatically implemented for all types that implement [`Validate`].
///
/// # Examples
///
/// ```
/// use filegate_validator::prelude::*;
///
/// let rule = string().refine(|s: &str| !s.starts_with('~'), "must not start with '~'");
/// assert!(rule.validate("notes.md").is_ok());
/// assert!(rule.validate("~notes.md").is_err());
/// ```
pub trait ValidateExt: Validate + Sized {
    /// Combines two validators with logical AND.
    ///
    /// Both validators must pass. Short-circuits on the first failure.
    fn and<V>(self, other: V) -> And<Self, V>
    where
        V: Validate<Input = Self::Input>,
    {
        And::new(self, other)
    }

    /// Attaches a custom refinement step to a string rule.
    ///
    /// The refinement fails with `message` whenever `predicate` returns
    /// `false`; the message is fixed and does not depend on the input.
    fn refine<F>(self, predicate: F, message: impl Into<Cow<'static, str>>) -> And<Self, Refine<F>>
    where
        Self: Validate<Input = str>,
        F: Fn(&str) -> bool,
    {
        And::new(self, Refine::new(predicate, message))
    }

    /// Replaces the error message of this validator.
    fn with_message(self, message: impl Into<Cow<'static, str>>) -> WithMessage<Self> {
        WithMessage::new(self, message)
    }
}

impl<T: Validate> ValidateExt for T {}

// ============================================================================
// IMPORT COMBINATOR TYPES
// ============================================================================

pub use crate::combinators::and::And;
pub use crate::combinators::message::WithMessage;
pub use crate::combinators::refine::Refine;

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    struct AlwaysValid;

    impl Validate for AlwaysValid {
        type Input = str;

        fn validate(&self, _input: &Self::Input) -> Result<(), ValidationError> {
            Ok(())
        }
    }

    #[test]
    fn test_validator_trait() {
        assert!(AlwaysValid.validate("test").is_ok());
    }

    #[test]
    fn test_reference_and_box_delegate() {
        let boxed: Box<dyn Validate<Input = str>> = Box::new(AlwaysValid);
        assert!(boxed.validate("x").is_ok());
        assert!((&AlwaysValid).validate("x").is_ok());
    }

    #[test]
    fn test_refine_runs_after_base() {
        let v = AlwaysValid.refine(|s| s.len() < 4, "too long");
        assert!(v.validate("abc").is_ok());
        assert_eq!(v.validate("abcd").unwrap_err().message, "too long");
    }
}
