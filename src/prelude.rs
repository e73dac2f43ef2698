//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use outcome_rail::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`fail!`], [`ensure!`], [`rail!`]
//! - **Types**: [`Outcome`], [`Error`], [`Errors`], [`ErrorClass`], [`MemberParser`],
//!   [`NamingPolicy`]
//! - **Traits**: [`OptionExt`], [`ZipOptions`], [`ZipOutcomes`], [`ResultExt`]
//!
//! # Examples
//!
//! ```
//! use outcome_rail::prelude::*;
//!
//! fn parse_age(raw: &str) -> Outcome<u8> {
//!     raw.parse::<u8>()
//!         .into_outcome()
//!         .ensure(|age| *age >= 18, "Too young")
//! }
//!
//! let ages = parse_each(["30", "12", "x"], parse_age, "invalid age");
//! assert_eq!(ages.errors().len(), 2);
//! assert!(ages.has_error_where(ErrorClass::Index, |e| e.index_of() == Some(2)));
//! ```

// Macros
pub use crate::{ensure, fail, rail};

// Core types
pub use crate::context::{parse_each, MemberParser};
pub use crate::outcome::Outcome;
pub use crate::types::{Error, ErrorClass, Errors, NamingPolicy};

// Traits
pub use crate::option::{OptionExt, ZipOptions};
pub use crate::outcome::ZipOutcomes;
pub use crate::traits::ResultExt;

/// Plain `Result` carrying every error of a failed [`Outcome`].
///
/// Lets `?` propagate outcome errors through functions that return
/// `Result`.
///
/// # Examples
///
/// ```
/// use outcome_rail::prelude::*;
///
/// fn total(a: Outcome<i32>, b: Outcome<i32>) -> RailResult<i32> {
///     let (a, b) = (a, b).zip_all().into_result()?;
///     Ok(a + b)
/// }
///
/// assert_eq!(total(Outcome::ok(1), Outcome::ok(2)), Ok(3));
/// assert_eq!(total(Outcome::fail("a"), Outcome::fail("b")).unwrap_err().len(), 2);
/// ```
pub type RailResult<T> = Result<T, Errors>;
