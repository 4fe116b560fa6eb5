use std::any::Any;
use std::error::Error;

use crate::assert::AssertionError;

/// Whether a caught error is a deliberate assertion failure.
///
/// Recognizes an [`AssertionError`] held directly, boxed as a
/// `dyn Error`, or wrapped in an [`anyhow::Error`]. Accepts the payload of
/// [`std::panic::catch_unwind`] as-is (pass `&*payload`, not the box).
/// Every other input, error or not, is `false`.
#[must_use]
pub fn is_assertion_error(error: &dyn Any) -> bool {
    if let Some(err) = error.downcast_ref::<AssertionError>() {
        return err.name() == AssertionError::NAME;
    }
    if let Some(err) = error.downcast_ref::<anyhow::Error>() {
        return err.downcast_ref::<AssertionError>().is_some();
    }
    if let Some(err) = error.downcast_ref::<Box<dyn Error + Send + Sync>>() {
        return err.downcast_ref::<AssertionError>().is_some();
    }
    if let Some(err) = error.downcast_ref::<Box<dyn Error>>() {
        return err.downcast_ref::<AssertionError>().is_some();
    }
    false
}
