//! Primitive value types for stand-ins.
//!
//! This crate contains the pure building blocks of the dynamic value model:
//! primitives, property keys, coercion hints and `typeof` tags. No IO, no
//! global state. Everything here can be used from any layer.

mod key;
mod number;
mod primitive;

pub use key::{PropertyKey, WellKnownSymbol};
pub use number::{format_number, parse_number};
pub use primitive::Primitive;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

// ============================================================================
// Coercion Hints
// ============================================================================

/// Preference supplied by the consuming context when a value is converted
/// to a primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Hint {
    /// Arithmetic and relational comparison.
    Number,
    /// Template and explicit string conversion.
    String,
    /// Addition and loose equality, where neither is preferred.
    #[default]
    Default,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown coercion hint: {0}")]
pub struct UnknownHintError(String);

impl Hint {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Hint::Number => "number",
            Hint::String => "string",
            Hint::Default => "default",
        }
    }

    #[must_use]
    pub fn all() -> &'static [Hint] {
        &[Hint::Number, Hint::String, Hint::Default]
    }
}

impl FromStr for Hint {
    type Err = UnknownHintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "number" => Ok(Hint::Number),
            "string" => Ok(Hint::String),
            "default" => Ok(Hint::Default),
            other => Err(UnknownHintError(other.to_string())),
        }
    }
}

impl fmt::Display for Hint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// typeof Tags
// ============================================================================

/// Result of the `typeof` operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeTag {
    Undefined,
    Object,
    Boolean,
    Number,
    String,
    Function,
}

impl TypeTag {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            TypeTag::Undefined => "undefined",
            TypeTag::Object => "object",
            TypeTag::Boolean => "boolean",
            TypeTag::Number => "number",
            TypeTag::String => "string",
            TypeTag::Function => "function",
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
