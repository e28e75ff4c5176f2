//! The immutable `System -> Rule` table.
//!
//! Four rules exist. Every Windows-family identifier resolves to the one
//! shared [`WINDOWS`](super::rules::WINDOWS) rule; identifiers without a
//! row (`apfs`, `ext4`, `iso9660`, `ios`, ...) report absence instead of
//! falling back to another rule.

use super::System;
use super::rules::{LINUX, MACOS, Rule, UNIVERSAL, WINDOWS};

/// Returns the rule registered for `system`, if any.
///
/// The same `&'static Rule` is returned on every call.
///
/// ```
/// use filegate_validator::filename::{System, registry};
///
/// let ntfs = registry::lookup(System::Ntfs).unwrap();
/// let fat12 = registry::lookup(System::Fat12).unwrap();
/// assert!(std::ptr::eq(ntfs, fat12));
/// assert!(registry::lookup(System::Ext4).is_none());
/// ```
#[must_use]
pub fn lookup(system: System) -> Option<&'static Rule> {
    match system {
        System::Universal => Some(&UNIVERSAL),
        System::Macos => Some(&MACOS),
        System::Linux => Some(&LINUX),
        System::Windows
        | System::Ntfs
        | System::Fat32
        | System::Exfat
        | System::Refs
        | System::Fat16
        | System::Fat12 => Some(&WINDOWS),
        System::Apfs
        | System::HfsPlus
        | System::Ext2
        | System::Ext3
        | System::Ext4
        | System::Btrfs
        | System::Xfs
        | System::Zfs
        | System::Jfs
        | System::F2fs
        | System::Udf
        | System::Iso9660
        | System::Ios
        | System::Android => None,
    }
}

#[must_use]
pub fn is_supported(system: System) -> bool {
    lookup(system).is_some()
}

/// Identifiers that have a rule, with that rule, in declaration order.
pub fn supported() -> impl Iterator<Item = (System, &'static Rule)> {
    System::ALL
        .into_iter()
        .filter_map(|system| lookup(system).map(|rule| (system, rule)))
}

/// Identifiers without a rule, in declaration order.
pub fn unsupported() -> impl Iterator<Item = System> {
    System::ALL
        .into_iter()
        .filter(|system| !is_supported(*system))
}

/// Statistics about the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistryStats {
    /// Number of known identifiers.
    pub systems: usize,
    /// Identifiers with a rule.
    pub supported: usize,
    /// Distinct rules behind those identifiers.
    pub distinct_rules: usize,
}

#[must_use]
pub fn stats() -> RegistryStats {
    let mut rules: Vec<&'static Rule> = Vec::new();
    for (_, rule) in supported() {
        if !rules.iter().any(|seen| std::ptr::eq(*seen, rule)) {
            rules.push(rule);
        }
    }

    RegistryStats {
        systems: System::ALL.len(),
        supported: supported().count(),
        distinct_rules: rules.len(),
    }
}
