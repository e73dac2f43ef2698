pub mod context;
pub mod convert;
pub mod laws;
pub mod types;

#[cfg(feature = "async")]
pub mod async_ext;
