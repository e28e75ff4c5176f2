//! Filename rules.
//!
//! Every rule is a pure predicate over a single filename component plus one
//! fixed rejection message. The Windows and universal predicates are
//! composites of the sub-checks below rather than one pattern, so the
//! reserved-name check can strip extensions explicitly.
//!
//! All rules reject the empty string.

use std::fmt;

/// Device names Windows reserves regardless of extension.
pub const WINDOWS_RESERVED_NAMES: [&str; 22] = [
    "CON", "PRN", "AUX", "NUL", "COM1", "COM2", "COM3", "COM4", "COM5", "COM6", "COM7", "COM8",
    "COM9", "LPT1", "LPT2", "LPT3", "LPT4", "LPT5", "LPT6", "LPT7", "LPT8", "LPT9",
];

// ============================================================================
// SUB-CHECKS
// ============================================================================

/// Returns `true` if the part of `name` before the first `.` is a Windows
/// reserved device name, compared ASCII case-insensitively.
///
/// ```
/// use filegate_validator::filename::rules::is_windows_reserved;
///
/// assert!(is_windows_reserved("NUL"));
/// assert!(is_windows_reserved("nul.txt"));
/// assert!(is_windows_reserved("Com3.tar.gz"));
/// assert!(!is_windows_reserved("CONSOLE"));
/// assert!(!is_windows_reserved(".con"));
/// ```
#[must_use]
pub fn is_windows_reserved(name: &str) -> bool {
    let stem = name.split_once('.').map_or(name, |(stem, _)| stem);
    WINDOWS_RESERVED_NAMES
        .iter()
        .any(|reserved| stem.eq_ignore_ascii_case(reserved))
}

/// `< > : " / \ | ? *` and the control characters `0x00..=0x1F`.
#[must_use]
pub const fn is_windows_illegal_char(c: char) -> bool {
    matches!(
        c,
        '<' | '>' | ':' | '"' | '/' | '\\' | '|' | '?' | '*' | '\0'..='\x1f'
    )
}

/// NUL and `/`.
#[must_use]
pub const fn is_linux_illegal_char(c: char) -> bool {
    matches!(c, '\0' | '/')
}

/// `:` and `/`.
#[must_use]
pub const fn is_macos_illegal_char(c: char) -> bool {
    matches!(c, ':' | '/')
}

#[must_use]
pub fn has_trailing_dot_or_space(name: &str) -> bool {
    name.ends_with(['.', ' '])
}

// ============================================================================
// PREDICATES
// ============================================================================

/// Shared by every Windows-family filesystem.
#[must_use]
pub fn windows_like(name: &str) -> bool {
    !name.is_empty()
        && !is_windows_reserved(name)
        && !name.contains(is_windows_illegal_char)
        && !has_trailing_dot_or_space(name)
}

#[must_use]
pub fn linux(name: &str) -> bool {
    !name.is_empty() && !name.contains(is_linux_illegal_char)
}

#[must_use]
pub fn macos(name: &str) -> bool {
    !name.is_empty() && !name.contains(is_macos_illegal_char)
}

/// Accepts only names every other rule accepts.
#[must_use]
pub fn universal(name: &str) -> bool {
    windows_like(name) && linux(name) && macos(name)
}

// ============================================================================
// RULE
// ============================================================================

/// A filename predicate bound to its fixed rejection message.
#[derive(Clone, Copy)]
pub struct Rule {
    name: &'static str,
    message: &'static str,
    predicate: fn(&str) -> bool,
}

impl Rule {
    pub(crate) const fn new(
        name: &'static str,
        message: &'static str,
        predicate: fn(&str) -> bool,
    ) -> Self {
        Self {
            name,
            message,
            predicate,
        }
    }

    /// Short rule name, e.g. `"windows"`.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// The message reported for every rejection under this rule.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        self.message
    }

    #[must_use]
    pub const fn predicate(&self) -> fn(&str) -> bool {
        self.predicate
    }

    /// Returns `true` if `name` is acceptable under this rule.
    #[must_use]
    pub fn accepts(&self, name: &str) -> bool {
        (self.predicate)(name)
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

pub static UNIVERSAL: Rule = Rule::new(
    "universal",
    "Invalid universal filename: contains illegal characters, is a reserved name, or ends with '.' or ' '.",
    universal,
);

pub static MACOS: Rule = Rule::new(
    "macos",
    "Invalid macOS filename: cannot contain '/' or ':' characters.",
    macos,
);

pub static LINUX: Rule = Rule::new(
    "linux",
    "Invalid Linux filename: cannot contain null or '/' characters.",
    linux,
);

pub static WINDOWS: Rule = Rule::new(
    "windows",
    "Invalid Windows filename: contains illegal characters (< > : \" / \\ | ? *), is a reserved name, or ends with '.' or ' '.",
    windows_like,
);

// ============================================================================
// TESTS
// ============================================================================
