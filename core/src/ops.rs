//! Abstract operations: coercion, arithmetic, comparison and equality.
//!
//! These reproduce the host's implicit conversions so code written against a
//! stand-in degrades the same way it would at runtime:
//!
//! - `+` and `==` coerce with the default hint, so a stand-in acts as `true`
//!   (`"Hello " + s` is `"Hello true"`, `s + 10` is `11`).
//! - Other arithmetic and the relational operators coerce with the number
//!   hint, so a stand-in acts as `0` (`s > 0` is `false`, `s < 10` is `true`).
//!
//! None of these fail for any input.

use std::cmp::Ordering;

use standin_types::{Hint, Primitive};

use crate::value::Value;

// ============================================================================
// Coercion
// ============================================================================

#[must_use]
pub fn to_primitive(value: &Value, hint: Hint) -> Primitive {
    match value {
        Value::Primitive(primitive) => primitive.clone(),
        Value::StandIn(stand_in) => stand_in.to_primitive(hint),
        Value::Intrinsic(intrinsic) => Primitive::String(intrinsic.source_text()),
        Value::Sequence(_) => Primitive::from("[object Generator]"),
        Value::Step(_) => Primitive::from("[object Object]"),
    }
}

#[must_use]
pub fn to_number(value: &Value) -> f64 {
    to_primitive(value, Hint::Number).to_number()
}

/// `String(value)`
#[must_use]
pub fn to_string(value: &Value) -> String {
    to_primitive(value, Hint::String).to_js_string()
}

/// Truthiness. Every non-primitive is truthy.
#[must_use]
pub fn to_boolean(value: &Value) -> bool {
    match value {
        Value::Primitive(primitive) => primitive.to_boolean(),
        Value::StandIn(_) | Value::Intrinsic(_) | Value::Sequence(_) | Value::Step(_) => true,
    }
}

// ============================================================================
// Arithmetic
// ============================================================================

/// `a + b`: concatenation if either side is a string after default-hint
/// coercion, numeric addition otherwise.
#[must_use]
pub fn add(a: &Value, b: &Value) -> Value {
    let left = to_primitive(a, Hint::Default);
    let right = to_primitive(b, Hint::Default);
    if matches!(left, Primitive::String(_)) || matches!(right, Primitive::String(_)) {
        let mut joined = left.to_js_string();
        joined.push_str(&right.to_js_string());
        return Value::from(joined);
    }
    Value::from(left.to_number() + right.to_number())
}

#[must_use]
pub fn subtract(a: &Value, b: &Value) -> Value {
    Value::from(to_number(a) - to_number(b))
}

#[must_use]
pub fn multiply(a: &Value, b: &Value) -> Value {
    Value::from(to_number(a) * to_number(b))
}

#[must_use]
pub fn divide(a: &Value, b: &Value) -> Value {
    Value::from(to_number(a) / to_number(b))
}

/// `a % b`, taking the sign of the dividend.
#[must_use]
pub fn remainder(a: &Value, b: &Value) -> Value {
    Value::from(to_number(a) % to_number(b))
}

// ============================================================================
// Relational comparison
// ============================================================================

/// `None` when either side is `NaN`; every relational operator is then `false`.
fn compare(a: &Value, b: &Value) -> Option<Ordering> {
    let left = to_primitive(a, Hint::Number);
    let right = to_primitive(b, Hint::Number);
    if let (Primitive::String(x), Primitive::String(y)) = (&left, &right) {
        return Some(x.encode_utf16().cmp(y.encode_utf16()));
    }
    left.to_number().partial_cmp(&right.to_number())
}

#[must_use]
pub fn less_than(a: &Value, b: &Value) -> bool {
    compare(a, b) == Some(Ordering::Less)
}

#[must_use]
pub fn greater_than(a: &Value, b: &Value) -> bool {
    compare(a, b) == Some(Ordering::Greater)
}

#[must_use]
pub fn less_or_equal(a: &Value, b: &Value) -> bool {
    matches!(compare(a, b), Some(Ordering::Less | Ordering::Equal))
}

#[must_use]
pub fn greater_or_equal(a: &Value, b: &Value) -> bool {
    matches!(compare(a, b), Some(Ordering::Greater | Ordering::Equal))
}

// ============================================================================
// Equality
// ============================================================================

/// `a === b`
#[must_use]
pub fn strict_equals(a: &Value, b: &Value) -> bool {
    a == b
}

/// `a == b`
#[must_use]
pub fn loose_equals(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Primitive(x), Value::Primitive(y)) => x.loose_equals(y),
        (Value::Primitive(primitive), object) | (object, Value::Primitive(primitive)) => {
            !primitive.is_nullish() && to_primitive(object, Hint::Default).loose_equals(primitive)
        }
        _ => a == b,
    }
}

/// `Object.is(a, b)`
#[must_use]
pub fn same_value(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Primitive(x), Value::Primitive(y)) => x.same_value(y),
        _ => a == b,
    }
}
