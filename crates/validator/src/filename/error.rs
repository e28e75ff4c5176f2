//! Configuration errors raised while building a filename validator.
//!
//! These never describe a bad filename; a rejected filename is an ordinary
//! [`Check::Rejected`](super::Check) outcome.

/// A system identifier was requested that has no filename rule.
///
/// Returned for identifiers outside the closed [`System`](super::System)
/// set as well as for known systems without a registered rule (`apfs`,
/// `ext4`, `ios`, ...).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unsupported system type: {system}")]
pub struct UnsupportedSystemError {
    system: String,
}

impl UnsupportedSystemError {
    pub(crate) fn new(system: impl Into<String>) -> Self {
        Self {
            system: system.into(),
        }
    }

    /// The identifier exactly as it was requested.
    #[must_use]
    pub fn system(&self) -> &str {
        &self.system
    }
}
