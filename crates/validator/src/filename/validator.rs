//! The reusable validator handed out by the matcher.

use tracing::trace;

use super::System;
use super::rules::Rule;
use crate::combinators::Refine;
use crate::foundation::{Validate, ValidationError};

/// Error code of every filename rejection reported through [`Validate`].
pub const INVALID_FILENAME: &str = "invalid_filename";

/// Outcome of checking one candidate filename.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum Check {
    Accepted,
    /// Rejected with the rule's fixed message.
    Rejected { message: &'static str },
}

impl Check {
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }

    /// The rejection message, if rejected.
    #[must_use]
    pub const fn message(&self) -> Option<&'static str> {
        match self {
            Self::Accepted => None,
            Self::Rejected { message } => Some(*message),
        }
    }
}

/// Checks filenames against at most one [`Rule`].
///
/// Built by [`filename`](super::filename). Holds no mutable state, so one
/// instance can be shared freely and applied to any number of names.
///
/// # Examples
///
/// ```
/// use filegate_validator::filename::{FilenameArgs, System, filename};
///
/// let windows = filename(Some(FilenameArgs { system: System::Windows })).unwrap();
/// assert!(windows.check("My File-1.doc").is_accepted());
/// assert!(!windows.check("nul.txt").is_accepted());
///
/// let anything = filename(None).unwrap();
/// assert!(anything.check("").is_accepted());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FilenameValidator {
    bound: Option<(System, &'static Rule)>,
}

fn accept_all(_: &str) -> bool {
    true
}

impl FilenameValidator {
    /// A validator that accepts every string.
    #[must_use]
    pub const fn any() -> Self {
        Self { bound: None }
    }

    pub(crate) const fn bound(system: System, rule: &'static Rule) -> Self {
        Self {
            bound: Some((system, rule)),
        }
    }

    /// The system this validator was built for; `None` for pass-through.
    #[must_use]
    pub fn system(&self) -> Option<System> {
        self.bound.map(|(system, _)| system)
    }

    #[must_use]
    pub fn rule(&self) -> Option<&'static Rule> {
        self.bound.map(|(_, rule)| rule)
    }

    /// The rejection message; `None` for pass-through.
    #[must_use]
    pub fn message(&self) -> Option<&'static str> {
        self.rule().map(Rule::message)
    }

    /// The bare predicate, for pipelines that only take a function.
    #[must_use]
    pub fn predicate(&self) -> fn(&str) -> bool {
        match self.rule() {
            Some(rule) => rule.predicate(),
            None => accept_all,
        }
    }

    #[must_use]
    pub fn is_valid(&self, candidate: &str) -> bool {
        self.rule().is_none_or(|rule| rule.accepts(candidate))
    }

    pub fn check(&self, candidate: &str) -> Check {
        let Some((system, rule)) = self.bound else {
            return Check::Accepted;
        };

        if rule.accepts(candidate) {
            trace!(%system, candidate, "filename accepted");
            Check::Accepted
        } else {
            trace!(%system, candidate, "filename rejected");
            Check::Rejected {
                message: rule.message(),
            }
        }
    }

    /// Converts into a predicate-plus-message refinement step.
    ///
    /// A pass-through validator becomes a refinement that never fails; its
    /// [`Refine::message`] is the empty string.
    #[must_use]
    pub fn into_refinement(self) -> Refine<fn(&str) -> bool> {
        Refine::new(self.predicate(), self.message().unwrap_or_default())
            .with_code(INVALID_FILENAME)
    }
}

impl Default for FilenameValidator {
    fn default() -> Self {
        Self::any()
    }
}

impl Validate for FilenameValidator {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        match (self.check(input), self.system()) {
            (Check::Rejected { message }, Some(system)) => {
                Err(ValidationError::new(INVALID_FILENAME, message)
                    .with_param("system", system.as_str()))
            }
            _ => Ok(()),
        }
    }
}
