//! Async prelude - all async utilities in one import.
//!
//! Re-exports everything from the sync [`prelude`](crate::prelude) plus the
//! async-specific items.
//!
//! # What's Included
//!
//! - **Traits**: [`OptionAsyncExt`], [`ZipOutcomesAsync`], [`FutureResultExt`]
//! - **Types**: [`CatchFuture`]
//! - **Functions**: [`transpose_async`], [`merge_async`], [`chain_async`]
//! - **Tracing** (feature `tracing`): `FutureSpanExt`, `OutcomeSpanExt`, `instrument_error`

// Re-export everything from sync prelude
pub use crate::prelude::*;

// Async-specific exports
pub use crate::async_ext::{
    chain_async, merge_async, transpose_async, CatchFuture, FutureResultExt, OptionAsyncExt,
    ZipOutcomesAsync,
};

#[cfg(feature = "tracing")]
pub use crate::async_ext::{instrument_error, FutureSpanExt, OutcomeSpanExt};
