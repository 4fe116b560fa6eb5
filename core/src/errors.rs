//! Runtime type errors raised by ordinary values.
//!
//! These are the incidental failures a stand-in exists to prevent: reading
//! through `undefined`, calling a number, iterating a boolean. Nothing in
//! [`crate::StandIn`] produces one.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    #[error("{callee} is not a function")]
    NotCallable { callee: String },
    #[error("{callee} is not a constructor")]
    NotConstructor { callee: String },
    #[error("{target} is not iterable")]
    NotIterable { target: String },
    #[error("Cannot read properties of {target} (reading '{key}')")]
    ReadOfNullish { target: &'static str, key: String },
    #[error("Cannot convert {target} to object (deleting '{key}')")]
    DeleteOfNullish { target: &'static str, key: String },
    #[error("Cannot use 'in' operator to search for '{key}' in {target}")]
    InOperandNotObject { key: String, target: String },
}

impl RuntimeError {
    /// Error-kind tag, as the host would report it.
    pub const NAME: &'static str = "TypeError";

    #[must_use]
    pub fn name(&self) -> &'static str {
        Self::NAME
    }

    /// Log and hand back the error. Every failure in the value model goes
    /// through here.
    pub(crate) fn raise(self) -> Self {
        tracing::debug!(error = %self, kind = Self::NAME, "meta-operation failed");
        self
    }
}
