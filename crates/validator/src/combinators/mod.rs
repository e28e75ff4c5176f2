//! Combinators for composing validators
//!
//! - [`And`] / [`AndAll`] - every validator must pass
//! - [`Refine`] - a predicate with a fixed failure message
//! - [`WithMessage`] - replace the reported message

pub mod and;
pub mod message;
pub mod refine;

pub use and::{And, AndAll, and, and_all};
pub use message::{WithMessage, with_message};
pub use refine::{Refine, refine};
