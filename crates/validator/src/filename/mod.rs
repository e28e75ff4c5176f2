//! Filename validation per target filesystem.
//!
//! A [`System`] names a target; the [`registry`] maps the supported ones to
//! a [`Rule`](rules::Rule); [`filename`] turns an optional system into a
//! reusable [`FilenameValidator`].
//!
//! Only single filename components are checked. Nothing here touches the
//! filesystem, rewrites names, or looks at path length.
//!
//! | Rule      | Systems                                             | Rejects                                                                    |
//! |-----------|-----------------------------------------------------|----------------------------------------------------------------------------|
//! | universal | `universal`                                         | anything any other rule rejects                                            |
//! | windows   | `windows ntfs fat32 exfat refs fat16 fat12`         | `< > : " / \ \| ? *`, `0x00..=0x1F`, reserved names, trailing `.` or space |
//! | linux     | `linux`                                             | NUL, `/`                                                                   |
//! | macos     | `macos`                                             | `:`, `/`                                                                   |
//!
//! Every rule also rejects the empty string.

mod error;
mod matcher;
pub mod registry;
pub mod report;
pub mod rules;
mod system;
mod validator;

pub use error::UnsupportedSystemError;
pub use matcher::{FilenameArgs, filename, filename_for, filename_named};
pub use report::{Corpus, Report};
pub use system::{Family, System};
pub use validator::{Check, FilenameValidator, INVALID_FILENAME};
