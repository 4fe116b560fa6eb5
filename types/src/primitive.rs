//! Primitive values and their conversions.

use std::fmt;

use serde::{Serialize, Serializer};
use serde_json::{Number as JsonNumber, Value as JsonValue};

use crate::TypeTag;
use crate::number::{format_number, parse_number};

/// Largest integer a double represents exactly.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// A primitive value.
///
/// `PartialEq` is strict equality: numbers compare as IEEE doubles, so
/// `NaN != NaN` and `0 == -0`. Use [`Primitive::same_value`] to tell those
/// apart.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Primitive {
    #[default]
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    String(String),
}

impl Primitive {
    #[must_use]
    pub fn type_of(&self) -> TypeTag {
        match self {
            Primitive::Undefined => TypeTag::Undefined,
            Primitive::Null => TypeTag::Object,
            Primitive::Bool(_) => TypeTag::Boolean,
            Primitive::Number(_) => TypeTag::Number,
            Primitive::String(_) => TypeTag::String,
        }
    }

    #[must_use]
    pub fn is_nullish(&self) -> bool {
        matches!(self, Primitive::Undefined | Primitive::Null)
    }

    #[must_use]
    pub fn to_boolean(&self) -> bool {
        match self {
            Primitive::Undefined | Primitive::Null => false,
            Primitive::Bool(value) => *value,
            Primitive::Number(value) => !(value.is_nan() || *value == 0.0),
            Primitive::String(value) => !value.is_empty(),
        }
    }

    #[must_use]
    pub fn to_number(&self) -> f64 {
        match self {
            Primitive::Undefined => f64::NAN,
            Primitive::Null | Primitive::Bool(false) => 0.0,
            Primitive::Bool(true) => 1.0,
            Primitive::Number(value) => *value,
            Primitive::String(value) => parse_number(value),
        }
    }

    /// The host's string conversion (`String(value)`).
    #[must_use]
    pub fn to_js_string(&self) -> String {
        match self {
            Primitive::Undefined => "undefined".to_string(),
            Primitive::Null => "null".to_string(),
            Primitive::Bool(value) => value.to_string(),
            Primitive::Number(value) => format_number(*value),
            Primitive::String(value) => value.clone(),
        }
    }

    /// Equality that treats `NaN` as equal to itself and `0` as distinct from `-0`.
    #[must_use]
    pub fn same_value(&self, other: &Primitive) -> bool {
        match (self, other) {
            (Primitive::Number(a), Primitive::Number(b)) => {
                if a.is_nan() && b.is_nan() {
                    return true;
                }
                a == b && a.is_sign_negative() == b.is_sign_negative()
            }
            _ => self == other,
        }
    }

    /// `==` between two primitives.
    #[must_use]
    pub fn loose_equals(&self, other: &Primitive) -> bool {
        match (self, other) {
            (a, b) if a.is_nullish() || b.is_nullish() => a.is_nullish() && b.is_nullish(),
            (Primitive::String(a), Primitive::String(b)) => a == b,
            (Primitive::Bool(a), Primitive::Bool(b)) => a == b,
            // Mixed number/string/boolean pairs all meet at ToNumber.
            _ => self.to_number() == other.to_number(),
        }
    }

    /// JSON projection. `None` means "not representable" (`undefined`).
    #[must_use]
    pub fn to_json(&self) -> Option<JsonValue> {
        match self {
            Primitive::Undefined => None,
            Primitive::Null => Some(JsonValue::Null),
            Primitive::Bool(value) => Some(JsonValue::Bool(*value)),
            Primitive::Number(value) => Some(number_to_json(*value)),
            Primitive::String(value) => Some(JsonValue::String(value.clone())),
        }
    }
}

fn number_to_json(value: f64) -> JsonValue {
    if !value.is_finite() {
        return JsonValue::Null;
    }
    if value.fract() == 0.0 && value.abs() <= MAX_SAFE_INTEGER {
        return JsonValue::Number(JsonNumber::from(value as i64));
    }
    JsonNumber::from_f64(value).map_or(JsonValue::Null, JsonValue::Number)
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_js_string())
    }
}

/// Serializes the JSON projection; `undefined` becomes `null`.
impl Serialize for Primitive {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.to_json() {
            Some(json) => json.serialize(serializer),
            None => serializer.serialize_unit(),
        }
    }
}

impl From<bool> for Primitive {
    fn from(value: bool) -> Self {
        Primitive::Bool(value)
    }
}

impl From<f64> for Primitive {
    fn from(value: f64) -> Self {
        Primitive::Number(value)
    }
}

impl From<i32> for Primitive {
    fn from(value: i32) -> Self {
        Primitive::Number(f64::from(value))
    }
}

impl From<u32> for Primitive {
    fn from(value: u32) -> Self {
        Primitive::Number(f64::from(value))
    }
}

impl From<&str> for Primitive {
    fn from(value: &str) -> Self {
        Primitive::String(value.to_string())
    }
}

impl From<String> for Primitive {
    fn from(value: String) -> Self {
        Primitive::String(value)
    }
}
