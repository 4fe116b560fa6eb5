//! Value assertions.
//!
//! Each assertion returns `Err(AssertionError)` instead of panicking so the
//! failure can be inspected, propagated with `?`, or raised as a panic payload
//! with [`AssertionError::raise`].

use std::panic;

use standin_core::Value;
use standin_core::ops::{same_value, strict_equals};
use thiserror::Error;

/// A deliberate failure raised by comparison logic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct AssertionError {
    message: String,
}

impl AssertionError {
    /// Error-kind tag.
    pub const NAME: &'static str = "AssertionError";

    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        Self::NAME
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Unwind with this error as the panic payload.
    pub fn raise(self) -> ! {
        panic::panic_any(self)
    }
}

/// Pass if `actual` and `expected` are the same value (`NaN` matches `NaN`,
/// stand-ins match only themselves).
pub fn assert_equals(actual: &Value, expected: impl Into<Value>) -> Result<(), AssertionError> {
    let expected = expected.into();
    if same_value(actual, &expected) {
        return Ok(());
    }
    Err(AssertionError::new(format!(
        "Values are not equal: expected {expected}, actual {actual}"
    )))
}

pub fn assert_not_equals(
    actual: &Value,
    expected: impl Into<Value>,
) -> Result<(), AssertionError> {
    let expected = expected.into();
    if !same_value(actual, &expected) {
        return Ok(());
    }
    Err(AssertionError::new(format!(
        "Expected actual: {actual} not to be: {expected}"
    )))
}

/// Like [`assert_equals`] but with `===` semantics.
pub fn assert_strict_equals(
    actual: &Value,
    expected: impl Into<Value>,
) -> Result<(), AssertionError> {
    let expected = expected.into();
    if strict_equals(actual, &expected) {
        return Ok(());
    }
    Err(AssertionError::new(format!(
        "Values are not strictly equal: expected {expected}, actual {actual}"
    )))
}

pub fn fail(message: impl AsRef<str>) -> Result<(), AssertionError> {
    Err(AssertionError::new(format!(
        "Failed assertion: {}",
        message.as_ref()
    )))
}

#[cfg(test)]
mod tests {
    use std::panic;

    use insta::assert_snapshot;
    use standin_core::{Value, anything};

    use super::{AssertionError, assert_equals, assert_not_equals, assert_strict_equals, fail};

    #[test]
    fn equal_values_pass() {
        assert_eq!(assert_equals(&Value::from(11), 11), Ok(()));
        assert_eq!(assert_equals(&Value::from(""), ""), Ok(()));
        assert_eq!(assert_equals(&Value::from(f64::NAN), f64::NAN), Ok(()));
    }

    #[test]
    fn stand_in_against_literal_fails_with_message() {
        let result = Value::from(anything().call(&[Value::from("test-data")]));
        let err = assert_equals(&result, "expected-output").unwrap_err();
        assert_eq!(err.name(), "AssertionError");
        let rendered = err.to_string().replace(&result.to_string(), "<stand-in>");
        assert_snapshot!(rendered, @r#"Values are not equal: expected "expected-output", actual <stand-in>"#);
    }

    #[test]
    fn distinct_stand_ins_are_not_equal() {
        let first = Value::from(anything());
        let second = Value::from(anything());
        assert_eq!(assert_not_equals(&first, second), Ok(()));
        assert!(assert_not_equals(&first, first.clone()).is_err());
    }

    #[test]
    fn strict_equality_keeps_zeros_together() {
        assert_eq!(assert_strict_equals(&Value::from(0.0), -0.0), Ok(()));
        assert!(assert_equals(&Value::from(0.0), -0.0).is_err());
    }

    #[test]
    fn fail_prefixes_its_message() {
        let err = fail("unreachable branch").unwrap_err();
        assert_snapshot!(err.message(), @"Failed assertion: unreachable branch");
    }

    #[test]
    fn raise_unwinds_with_the_error_as_payload() {
        let payload = panic::catch_unwind(|| AssertionError::new("boom").raise()).unwrap_err();
        let err = payload.downcast_ref::<AssertionError>().unwrap();
        assert_eq!(err.message(), "boom");
    }
}
