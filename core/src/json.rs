//! JSON stringification.

use crate::value::Value;

/// `JSON.stringify(value)`.
///
/// Returns `None` ("not representable") for `undefined`, stand-ins and
/// intrinsic methods, the same way a serializer skips functions. A sequence
/// handle has no enumerable state and renders as `{}`; a step drops its
/// stand-in `value` and keeps `done`. Never fails.
#[must_use]
pub fn stringify(value: &Value) -> Option<String> {
    match value {
        Value::Primitive(primitive) => primitive.to_json().map(|json| json.to_string()),
        Value::Sequence(_) => Some("{}".to_string()),
        Value::Step(_) => Some(r#"{"done":false}"#.to_string()),
        Value::StandIn(_) | Value::Intrinsic(_) => {
            tracing::trace!(%value, "callable value is not representable as JSON");
            None
        }
    }
}
