//! REFINE combinator - a predicate plus a fixed failure message
//!
//! This is the smallest unit a host pipeline needs to accept a custom rule:
//! a pure `Fn(&str) -> bool` and a static message surfaced on failure.

use std::borrow::Cow;
use std::fmt;

use crate::foundation::{Validate, ValidationError};

/// Error code used for every refinement failure.
pub const REFINE_CODE: &str = "refine";

/// A string refinement step.
///
/// # Examples
///
/// ```
/// use filegate_validator::combinators::Refine;
/// use filegate_validator::foundation::Validate;
///
/// let no_tilde = Refine::new(|s: &str| !s.starts_with('~'), "must not start with '~'");
/// assert!(no_tilde.validate("draft.md").is_ok());
/// assert_eq!(no_tilde.validate("~draft.md").unwrap_err().message, "must not start with '~'");
/// ```
#[derive(Clone)]
pub struct Refine<F> {
    predicate: F,
    message: Cow<'static, str>,
    code: Cow<'static, str>,
}

impl<F> Refine<F>
where
    F: Fn(&str) -> bool,
{
    /// Creates a refinement from a predicate and its failure message.
    pub fn new(predicate: F, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            predicate,
            message: message.into(),
            code: Cow::Borrowed(REFINE_CODE),
        }
    }

    /// Replaces the error code reported on failure.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_code(mut self, code: impl Into<Cow<'static, str>>) -> Self {
        self.code = code.into();
        self
    }

    /// Runs the predicate alone.
    pub fn test(&self, input: &str) -> bool {
        (self.predicate)(input)
    }

    /// Returns the failure message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl<F> fmt::Debug for Refine<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Refine")
            .field("code", &self.code)
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

impl<F> Validate for Refine<F>
where
    F: Fn(&str) -> bool,
{
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        if (self.predicate)(input) {
            Ok(())
        } else {
            Err(ValidationError::new(self.code.clone(), self.message.clone()))
        }
    }
}

/// Creates a [`Refine`] combinator.
pub fn refine<F>(predicate: F, message: impl Into<Cow<'static, str>>) -> Refine<F>
where
    F: Fn(&str) -> bool,
{
    Refine::new(predicate, message)
}
