//! Target filesystem / OS identifiers.

use std::fmt;
use std::str::FromStr;

use super::UnsupportedSystemError;

/// A target filesystem or OS family a filename may be validated against.
///
/// The set is closed; parsing any other identifier fails. Not every
/// identifier has a rule: see [`registry`](super::registry) for which ones do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[non_exhaustive]
pub enum System {
    /// Common denominator of every other rule.
    Universal,
    Macos,
    Apfs,
    HfsPlus,
    Linux,
    Ext2,
    Ext3,
    Ext4,
    Btrfs,
    Xfs,
    Zfs,
    Jfs,
    F2fs,
    Windows,
    Ntfs,
    Fat32,
    Exfat,
    Refs,
    Udf,
    Iso9660,
    Fat16,
    Fat12,
    Ios,
    Android,
}

/// Broad grouping of [`System`] identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    Universal,
    Apple,
    Linux,
    Windows,
    Optical,
    Mobile,
}

impl System {
    /// Every identifier, in declaration order.
    pub const ALL: [Self; 24] = [
        Self::Universal,
        Self::Macos,
        Self::Apfs,
        Self::HfsPlus,
        Self::Linux,
        Self::Ext2,
        Self::Ext3,
        Self::Ext4,
        Self::Btrfs,
        Self::Xfs,
        Self::Zfs,
        Self::Jfs,
        Self::F2fs,
        Self::Windows,
        Self::Ntfs,
        Self::Fat32,
        Self::Exfat,
        Self::Refs,
        Self::Udf,
        Self::Iso9660,
        Self::Fat16,
        Self::Fat12,
        Self::Ios,
        Self::Android,
    ];

    /// Canonical lowercase identifier, e.g. `"hfs+"` or `"ntfs"`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Universal => "universal",
            Self::Macos => "macos",
            Self::Apfs => "apfs",
            Self::HfsPlus => "hfs+",
            Self::Linux => "linux",
            Self::Ext2 => "ext2",
            Self::Ext3 => "ext3",
            Self::Ext4 => "ext4",
            Self::Btrfs => "btrfs",
            Self::Xfs => "xfs",
            Self::Zfs => "zfs",
            Self::Jfs => "jfs",
            Self::F2fs => "f2fs",
            Self::Windows => "windows",
            Self::Ntfs => "ntfs",
            Self::Fat32 => "fat32",
            Self::Exfat => "exfat",
            Self::Refs => "refs",
            Self::Udf => "udf",
            Self::Iso9660 => "iso9660",
            Self::Fat16 => "fat16",
            Self::Fat12 => "fat12",
            Self::Ios => "ios",
            Self::Android => "android",
        }
    }

    #[must_use]
    pub const fn family(self) -> Family {
        match self {
            Self::Universal => Family::Universal,
            Self::Macos | Self::Apfs | Self::HfsPlus => Family::Apple,
            Self::Linux
            | Self::Ext2
            | Self::Ext3
            | Self::Ext4
            | Self::Btrfs
            | Self::Xfs
            | Self::Zfs
            | Self::Jfs
            | Self::F2fs => Family::Linux,
            Self::Windows
            | Self::Ntfs
            | Self::Fat32
            | Self::Exfat
            | Self::Refs
            | Self::Fat16
            | Self::Fat12 => Family::Windows,
            Self::Udf | Self::Iso9660 => Family::Optical,
            Self::Ios | Self::Android => Family::Mobile,
        }
    }
}

impl fmt::Display for System {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for System {
    type Err = UnsupportedSystemError;

    /// Parses a canonical identifier, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|system| system.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnsupportedSystemError::new(s))
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Universal => "universal",
            Self::Apple => "apple",
            Self::Linux => "linux",
            Self::Windows => "windows",
            Self::Optical => "optical",
            Self::Mobile => "mobile",
        })
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for System {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for System {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
