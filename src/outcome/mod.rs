//! The [`Outcome`] container and its combinators.
//!
//! `Outcome<T>` is either `Ok(value)` or `Errored(errors)`, where `errors` is a
//! non-empty list of [`Error`](crate::Error) trees. Sequential composition
//! ([`Outcome::and_then`] and friends) stops at the first failure, while
//! independent composition ([`ZipOutcomes`], [`transpose`], [`merge`])
//! gathers every failure in argument order.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::{Error, Outcome};
//!
//! let ok = Outcome::ok(21).map(|x| x * 2);
//! assert_eq!(ok.into_value(), Some(42));
//!
//! let results = vec![Outcome::ok(1), Outcome::fail("a"), Outcome::fail("b")];
//! let all: Outcome<Vec<i32>> = outcome_rail::outcome::transpose(results);
//! assert_eq!(all.errors(), &[Error::new("a"), Error::new("b")]);
//! ```
pub mod core;
pub mod factory;
pub mod iter;
pub mod sequence;
pub mod zip;

pub use self::core::*;
pub use self::iter::*;
pub use self::sequence::{merge, transpose};
pub use self::zip::ZipOutcomes;
