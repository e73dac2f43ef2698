//! Extension traits bridging plain `Result` values into [`Outcome`](crate::Outcome).
//!
//! - [`ResultExt`]: wraps a native error as an exceptional [`Error`](crate::Error)
//!   or converts it with a caller-supplied handler.

pub mod result_ext;

pub use result_ext::ResultExt;
