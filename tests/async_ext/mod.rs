//! Integration tests for async extensions.

mod option_tests;
mod sequence_tests;
