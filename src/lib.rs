//! Railway-style `Option` and `Outcome` combinators over structured error trees.
//!
//! An [`Outcome<T>`] holds either a value or a non-empty list of [`Error`]
//! trees. Dependent steps short-circuit on the first failure; independent
//! steps are zipped and report every failure at once.
//!
//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `outcome_rail::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## Error Trees
//!
//! ```
//! use outcome_rail::{Error, ErrorClass};
//!
//! let err = Error::new("could not register user")
//!     .with_root_cause(Error::member("Email", "invalid member", [Error::new("missing @")]));
//!
//! assert_eq!(err.flatten().count(), 3);
//! assert!(err.contains(ErrorClass::Member));
//! ```
//!
//! ## Bind Short-Circuits, Zip Accumulates
//!
//! ```
//! use outcome_rail::{Error, Outcome, ZipOutcomes};
//!
//! let first = Outcome::<i32>::fail("first");
//! let second = Outcome::<i32>::fail("second");
//!
//! let zipped = (first.clone(), second.clone()).zip_all();
//! assert_eq!(zipped.errors(), &[Error::new("first"), Error::new("second")]);
//!
//! let bound = first.and_then(|_| second);
//! assert_eq!(bound.errors(), &[Error::new("first")]);
//! ```
//!
//! ## Options
//!
//! ```
//! use outcome_rail::{Error, OptionExt, Outcome};
//!
//! let name = Some("ferris").and_then_with(|n| n.chars().next(), |n, first| (n.len(), first));
//! assert_eq!(name, Some((6, 'f')));
//!
//! let missing: Option<u8> = None;
//! assert_eq!(missing.ok_or_error("missing"), Outcome::fail(Error::new("missing")));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Labelled, indexed and member-scoped error helpers
pub mod context;
/// Conversions between `Outcome`, `Option` and `Result`
pub mod convert;
/// Macros for building and unwrapping outcomes
pub mod macros;
/// Combinators for the standard `Option`
pub mod option;
/// The `Outcome` container and its combinators
pub mod outcome;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Extension traits bridging plain `Result` values
pub mod traits;
/// Error tree, error list and formatting types
pub mod types;

/// Async adapters for options and outcomes (requires `async` feature)
#[cfg(feature = "async")]
pub mod async_ext;

/// Async prelude - all async utilities in one import (requires `async` feature)
#[cfg(feature = "async")]
pub mod prelude_async;

pub use context::{parse_each, MemberParser};
pub use convert::*;
pub use option::{OptionExt, ZipOptions};
pub use outcome::{Outcome, ZipOutcomes, CONSTRUCTED_RESULT_MESSAGE};
pub use traits::ResultExt;
pub use types::{
    EmptyErrors, Error, ErrorClass, ErrorFormatConfig, ErrorKind, ErrorVec, Errors,
    ExceptionInfo, Flatten, NamingPolicy,
};

#[doc(hidden)]
pub mod __private {
    pub use alloc::format;
}
