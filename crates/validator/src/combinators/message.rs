//! MESSAGE combinator - custom error messages

use std::borrow::Cow;

use crate::foundation::{Validate, ValidationError};

/// Replaces the error message of a validator.
///
/// The original error is kept as a nested error so callers can still see
/// which rule fired.
///
/// # Examples
///
/// ```
/// use filegate_validator::prelude::*;
///
/// let validator = filename_for(System::Windows)
///     .unwrap()
///     .with_message("Pick a name that works on every office PC");
///
/// let error = validator.validate("PRN").unwrap_err();
/// assert_eq!(error.message, "Pick a name that works on every office PC");
/// assert_eq!(error.code, "invalid_filename");
/// ```
#[derive(Debug, Clone)]
pub struct WithMessage<V> {
    inner: V,
    message: Cow<'static, str>,
    code: Option<Cow<'static, str>>,
}

impl<V> WithMessage<V> {
    /// Creates a new `WithMessage` combinator with a custom message.
    pub fn new(inner: V, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            inner,
            message: message.into(),
            code: None,
        }
    }

    /// Also replaces the error code.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_code(mut self, code: impl Into<Cow<'static, str>>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Returns a reference to the inner validator.
    pub fn inner(&self) -> &V {
        &self.inner
    }

    /// Returns the custom message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Extracts the inner validator.
    pub fn into_inner(self) -> V {
        self.inner
    }
}

impl<V> Validate for WithMessage<V>
where
    V: Validate,
{
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        self.inner.validate(input).map_err(|original| {
            let code = self.code.clone().unwrap_or_else(|| original.code.clone());
            ValidationError::new(code, self.message.clone()).with_nested_error(original)
        })
    }
}

/// Creates a `WithMessage` combinator.
pub fn with_message<V>(validator: V, message: impl Into<Cow<'static, str>>) -> WithMessage<V> {
    WithMessage::new(validator, message)
}
