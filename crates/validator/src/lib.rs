//! # filegate-validator
//!
//! Checks candidate filenames against the naming rules of a target
//! filesystem or OS, and exposes the result as a composable string rule.
//!
//! ## Quick Start
//!
//! ```
//! use filegate_validator::prelude::*;
//!
//! let ntfs = filename(Some(FilenameArgs { system: System::Ntfs }))?;
//! assert!(ntfs.check("My File-1.doc").is_accepted());
//! assert_eq!(
//!     ntfs.check("Com3.log").message(),
//!     ntfs.message(),
//! );
//!
//! // Unknown or unsupported targets are a configuration error.
//! assert!(filename_named("ext4").is_err());
//! # Ok::<(), UnsupportedSystemError>(())
//! ```
//!
//! ## Plugging into a pipeline
//!
//! Every [`FilenameValidator`](filename::FilenameValidator) implements
//! [`Validate`](foundation::Validate), and can also be turned into a bare
//! predicate-plus-message [`Refine`](combinators::Refine) step:
//!
//! ```
//! use filegate_validator::prelude::*;
//!
//! let rule = filename_for(System::Universal)?;
//! let field = string().and(rule.into_refinement());
//! assert!(field.validate("plain_file-1.ext").is_ok());
//! assert!(field.validate("a:b").is_err());
//! # Ok::<(), UnsupportedSystemError>(())
//! ```

pub mod combinators;
pub mod filename;
pub mod foundation;
mod macros;
pub mod prelude;
pub mod validators;
