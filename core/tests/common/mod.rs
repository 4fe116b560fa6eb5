//! Shared test utilities and fixtures

#![allow(dead_code)]

use standin_core::{TypeTag, Value};

/// Install test tracing. Call at the top of any test whose logs matter.
pub fn setup() {
    standin_utils::init_test_tracing();
}

/// Assert a value is shaped like a stand-in: callable, constructible, readable.
#[track_caller]
pub fn assert_function(value: &Value) {
    assert_eq!(value.type_of(), TypeTag::Function, "{value} is not a function");
    assert!(value.is_callable(), "{value} is not callable");
}

#[track_caller]
pub fn assert_stand_in(value: &Value) {
    assert_function(value);
    assert!(value.is_constructible(), "{value} is not constructible");
    assert!(value.is_stand_in(), "{value} is not a stand-in");
}
