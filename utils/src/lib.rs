//! Test-side helpers for stand-ins.
//!
//! - **`assert`**: value assertions that fail with [`AssertionError`]
//! - **`guards`**: [`is_assertion_error`], telling a deliberate assertion
//!   failure apart from every other error
//! - **`logging`**: tracing setup for test binaries

pub mod assert;
pub mod guards;
pub mod logging;

pub use assert::{AssertionError, assert_equals, assert_not_equals, assert_strict_equals, fail};
pub use guards::is_assertion_error;
pub use logging::init_test_tracing;
