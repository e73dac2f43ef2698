//! Async extensions for outcome-rail.
//!
//! The adapters await one user future at a time, in argument order, and
//! keep the sync aggregation rules: binds short-circuit, sequences
//! accumulate.
//!
//! # Feature Flag
//!
//! Requires the `async` feature to be enabled:
//!
//! ```toml
//! [dependencies]
//! outcome-rail = { version = "0.1", features = ["async"] }
//! ```
//!
//! # Examples
//!
//! ```rust
//! use outcome_rail::prelude_async::*;
//!
//! async fn lookup(id: u32) -> Outcome<String> {
//!     Outcome::ok(id)
//!         .ensure(|id| *id > 0, "id must be positive")
//!         .and_then_async(|id| async move { Outcome::ok(format!("user-{id}")) })
//!         .await
//! }
//! ```

mod catch_future;
mod option;
mod outcome;
mod sequence;

#[cfg(feature = "tracing")]
mod tracing_ext;

pub use catch_future::{CatchFuture, FutureResultExt};
pub use option::OptionAsyncExt;
pub use outcome::ZipOutcomesAsync;
pub use sequence::{chain_async, merge_async, transpose_async};

#[cfg(feature = "tracing")]
pub use tracing_ext::{instrument_error, FutureSpanExt, OutcomeSpanExt, SpanContextFuture};
