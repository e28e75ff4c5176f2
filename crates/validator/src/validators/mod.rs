//! Built-in validators
//!
//! Only the base string rule lives here; filename rules are built by the
//! [`filename`](crate::filename) matcher and attached to it as refinements.

pub mod string;

pub use string::{AnyString, string};
