//! Error types and utilities.
//!
//! This module provides the building blocks every container in the crate
//! shares: the tree-shaped [`Error`], the non-empty [`Errors`] list carried by
//! a failed [`Outcome`](crate::Outcome), formatting configuration and the
//! member naming policy.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::{Error, ErrorFormatConfig};
//!
//! let err = Error::context("signup", "invalid form", [
//!     Error::index(0, "bad row", [Error::new("Too young")]),
//! ]);
//!
//! assert_eq!(err.to_string(), "signup: invalid form -> [0] bad row -> Too young");
//! println!("{}", err.format_with(&ErrorFormatConfig::pretty()));
//! ```
use smallvec::SmallVec;

pub mod error;
pub mod error_formatter;
pub mod errors;
pub mod naming;

pub use error::{Error, ErrorClass, ErrorKind, ExceptionInfo, Flatten};
pub use error_formatter::ErrorFormatConfig;
pub use errors::{EmptyErrors, Errors};
pub use naming::NamingPolicy;

/// SmallVec-backed collection used for accumulating errors.
///
/// Uses inline storage for 1 element to avoid heap allocations
/// in the common case where a failure carries a single error.
pub type ErrorVec<E> = SmallVec<[E; 1]>;
