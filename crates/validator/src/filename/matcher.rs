//! Turns an optional system identifier into a [`FilenameValidator`].

use tracing::{debug, warn};

use super::{FilenameValidator, System, UnsupportedSystemError, registry};

/// Arguments for [`filename`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilenameArgs {
    pub system: System,
}

impl From<System> for FilenameArgs {
    fn from(system: System) -> Self {
        Self { system }
    }
}

/// Builds a filename validator.
///
/// - `None` gives a pass-through validator that accepts every string.
/// - `Some(args)` gives a validator bound to the registered rule for
///   `args.system`, or fails with [`UnsupportedSystemError`] when that
///   system has no rule. The failure happens here, never at check time.
///
/// # Examples
///
/// ```
/// use filegate_validator::filename::{FilenameArgs, System, filename};
///
/// let linux = filename(Some(System::Linux.into())).unwrap();
/// assert!(linux.check(".hidden").is_accepted());
///
/// let err = filename(Some(FilenameArgs { system: System::Apfs })).unwrap_err();
/// assert_eq!(err.to_string(), "Unsupported system type: apfs");
/// ```
pub fn filename(args: Option<FilenameArgs>) -> Result<FilenameValidator, UnsupportedSystemError> {
    match args {
        Some(FilenameArgs { system }) => filename_for(system),
        None => {
            debug!("building pass-through filename validator");
            Ok(FilenameValidator::any())
        }
    }
}

/// Builds a validator bound to the rule registered for `system`.
pub fn filename_for(system: System) -> Result<FilenameValidator, UnsupportedSystemError> {
    let Some(rule) = registry::lookup(system) else {
        warn!(%system, "no filename rule registered for system");
        return Err(UnsupportedSystemError::new(system.as_str()));
    };

    debug!(%system, rule = rule.name(), "building filename validator");
    Ok(FilenameValidator::bound(system, rule))
}

/// Builds a validator from an identifier string, e.g. read from config.
///
/// The string must name one of the [`System`] identifiers (ASCII case is
/// ignored); anything else is an [`UnsupportedSystemError`] carrying the
/// string as given.
pub fn filename_named(system: &str) -> Result<FilenameValidator, UnsupportedSystemError> {
    let system = system.parse::<System>().inspect_err(|err| {
        warn!(system = err.system(), "unknown system identifier");
    })?;
    filename_for(system)
}
