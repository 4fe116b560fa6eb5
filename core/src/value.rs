//! The dynamic value model.
//!
//! [`Value`] performs the same meta-operations as a stand-in, but fallibly:
//! reading through `undefined`, calling a number or iterating a boolean fails
//! with a [`RuntimeError`], exactly the class of error a stand-in is there to
//! keep out of a test.

use std::fmt;
use std::iter::FusedIterator;
use std::vec;

use standin_types::{Primitive, PropertyKey, TypeTag, WellKnownSymbol, format_number};

use crate::errors::RuntimeError;
use crate::intrinsic::Intrinsic;
use crate::sequence::StandInSequence;
use crate::stand_in::StandIn;

/// Any value a test can hold.
///
/// `PartialEq` is strict equality (`===`): primitives by value, everything
/// else by identity.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Primitive(Primitive),
    StandIn(StandIn),
    Intrinsic(Intrinsic),
    Sequence(StandInSequence),
    /// What a sequence's `next` returns: `{ value: <stand-in>, done: false }`.
    Step(StandIn),
}

impl Value {
    pub const UNDEFINED: Value = Value::Primitive(Primitive::Undefined);
    pub const NULL: Value = Value::Primitive(Primitive::Null);

    #[must_use]
    pub fn type_of(&self) -> TypeTag {
        match self {
            Value::Primitive(primitive) => primitive.type_of(),
            Value::StandIn(_) | Value::Intrinsic(_) => TypeTag::Function,
            Value::Sequence(_) | Value::Step(_) => TypeTag::Object,
        }
    }

    #[must_use]
    pub fn is_stand_in(&self) -> bool {
        matches!(self, Value::StandIn(_))
    }

    #[must_use]
    pub fn as_stand_in(&self) -> Option<&StandIn> {
        match self {
            Value::StandIn(stand_in) => Some(stand_in),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_primitive(&self) -> Option<&Primitive> {
        match self {
            Value::Primitive(primitive) => Some(primitive),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Primitive(Primitive::String(text)) => Some(text),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Primitive(Primitive::Number(number)) => Some(*number),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_callable(&self) -> bool {
        matches!(self, Value::StandIn(_) | Value::Intrinsic(_))
    }

    #[must_use]
    pub fn is_constructible(&self) -> bool {
        self.is_stand_in()
    }

    /// `value[key]`
    pub fn get(&self, key: impl Into<PropertyKey>) -> Result<Value, RuntimeError> {
        let key = key.into();
        match self {
            Value::StandIn(stand_in) => Ok(stand_in.get(key)),
            Value::Primitive(primitive @ (Primitive::Undefined | Primitive::Null)) => {
                Err(RuntimeError::ReadOfNullish {
                    target: nullish_name(primitive),
                    key: key.to_string(),
                }
                .raise())
            }
            Value::Primitive(Primitive::String(text)) => Ok(string_property(text, &key)),
            Value::Intrinsic(intrinsic) => Ok(intrinsic.property(&key)),
            Value::Sequence(_) => Ok(sequence_property(&key)),
            Value::Step(item) => Ok(step_property(item, &key)),
            Value::Primitive(_) => Ok(Value::UNDEFINED),
        }
    }

    /// `value(...args)`
    pub fn call(&self, args: &[Value]) -> Result<Value, RuntimeError> {
        match self {
            Value::StandIn(stand_in) => Ok(Value::StandIn(stand_in.call(args))),
            Value::Intrinsic(intrinsic) => Ok(intrinsic.apply(args)),
            Value::Primitive(_) | Value::Sequence(_) | Value::Step(_) => {
                Err(RuntimeError::NotCallable {
                    callee: self.to_string(),
                }
                .raise())
            }
        }
    }

    /// `new value(...args)`
    pub fn construct(&self, args: &[Value]) -> Result<Value, RuntimeError> {
        match self {
            Value::StandIn(stand_in) => Ok(Value::StandIn(stand_in.construct(args))),
            _ => Err(RuntimeError::NotConstructor {
                callee: self.to_string(),
            }
            .raise()),
        }
    }

    /// `value[key](...args)`
    pub fn invoke(
        &self,
        key: impl Into<PropertyKey>,
        args: &[Value],
    ) -> Result<Value, RuntimeError> {
        self.get(key)?.call(args)
    }

    /// `key in value`
    pub fn has(&self, key: impl Into<PropertyKey>) -> Result<bool, RuntimeError> {
        let key = key.into();
        match self {
            Value::StandIn(stand_in) => Ok(stand_in.has(key)),
            Value::Intrinsic(_) => Ok(matches!(key.as_name(), Some("length" | "name"))),
            Value::Sequence(_) => Ok(matches!(
                key,
                PropertyKey::Symbol(WellKnownSymbol::Iterator)
            ) || key.as_name() == Some("next")),
            Value::Step(_) => Ok(matches!(key.as_name(), Some("value" | "done"))),
            Value::Primitive(primitive) => Err(RuntimeError::InOperandNotObject {
                key: key.to_string(),
                target: primitive.to_js_string(),
            }
            .raise()),
        }
    }

    /// `delete value[key]`
    pub fn delete(&self, key: impl Into<PropertyKey>) -> Result<bool, RuntimeError> {
        let key = key.into();
        match self {
            Value::StandIn(stand_in) => Ok(stand_in.delete(key)),
            Value::Primitive(primitive @ (Primitive::Undefined | Primitive::Null)) => {
                Err(RuntimeError::DeleteOfNullish {
                    target: nullish_name(primitive),
                    key: key.to_string(),
                }
                .raise())
            }
            Value::Primitive(_) | Value::Intrinsic(_) | Value::Sequence(_) | Value::Step(_) => {
                Ok(true)
            }
        }
    }

    /// `for (const item of value)`
    pub fn try_iter(&self) -> Result<ValueIter, RuntimeError> {
        let inner = match self {
            Value::StandIn(stand_in) => IterInner::StandIns(stand_in.iter()),
            Value::Sequence(sequence) => IterInner::StandIns(sequence.clone()),
            Value::Primitive(Primitive::String(text)) => {
                IterInner::Chars(text.chars().collect::<Vec<_>>().into_iter())
            }
            Value::Primitive(_) | Value::Intrinsic(_) | Value::Step(_) => {
                return Err(RuntimeError::NotIterable {
                    target: self.to_string(),
                }
                .raise());
            }
        };
        Ok(ValueIter { inner })
    }
}

fn nullish_name(primitive: &Primitive) -> &'static str {
    match primitive {
        Primitive::Null => "null",
        _ => "undefined",
    }
}

/// A sequence's `next` steps it; `[Symbol.iterator]` opens an equivalent
/// sequence, since no sequence remembers its position.
fn sequence_property(key: &PropertyKey) -> Value {
    match key {
        PropertyKey::Name(name) if name == "next" => Value::Intrinsic(Intrinsic::Next),
        PropertyKey::Symbol(WellKnownSymbol::Iterator) => Value::Intrinsic(Intrinsic::Iterator),
        _ => Value::UNDEFINED,
    }
}

fn step_property(item: &StandIn, key: &PropertyKey) -> Value {
    match key.as_name() {
        Some("value") => Value::StandIn(item.clone()),
        Some("done") => Value::from(false),
        _ => Value::UNDEFINED,
    }
}

fn string_property(text: &str, key: &PropertyKey) -> Value {
    match key {
        PropertyKey::Index(index) => text
            .encode_utf16()
            .nth(*index as usize)
            .map_or(Value::UNDEFINED, |unit| {
                Value::from(String::from_utf16_lossy(&[unit]))
            }),
        PropertyKey::Name(name) if name == "length" => {
            Value::from(text.encode_utf16().count() as f64)
        }
        PropertyKey::Name(_) | PropertyKey::Symbol(_) => Value::UNDEFINED,
    }
}

/// Inspection form, as an assertion message would print the value.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Primitive(Primitive::String(text)) => write!(f, "{text:?}"),
            Value::Primitive(Primitive::Number(number)) => f.write_str(&format_number(*number)),
            Value::Primitive(primitive) => write!(f, "{primitive}"),
            Value::StandIn(stand_in) => write!(f, "[Function: standIn {}]", stand_in.id()),
            Value::Intrinsic(intrinsic) => write!(f, "[Function: {}]", intrinsic.name()),
            Value::Sequence(sequence) => write!(f, "Object [Generator] {}", sequence.id()),
            Value::Step(item) => write!(
                f,
                "{{ value: [Function: standIn {}], done: false }}",
                item.id()
            ),
        }
    }
}

// ============================================================================
// Iteration
// ============================================================================

/// Iterator over a [`Value`]: unbounded for stand-ins, characters for strings.
#[derive(Debug, Clone)]
pub struct ValueIter {
    inner: IterInner,
}

#[derive(Debug, Clone)]
enum IterInner {
    StandIns(StandInSequence),
    Chars(vec::IntoIter<char>),
}

impl Iterator for ValueIter {
    type Item = Value;

    fn next(&mut self) -> Option<Value> {
        match &mut self.inner {
            IterInner::StandIns(sequence) => sequence.next().map(Value::StandIn),
            IterInner::Chars(chars) => chars.next().map(|c| Value::from(c.to_string())),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.inner {
            IterInner::StandIns(sequence) => sequence.size_hint(),
            IterInner::Chars(chars) => chars.size_hint(),
        }
    }
}

impl FusedIterator for ValueIter {}

// ============================================================================
// Conversions
// ============================================================================

impl From<Primitive> for Value {
    fn from(value: Primitive) -> Self {
        Value::Primitive(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Primitive(Primitive::Bool(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Primitive(Primitive::Number(value))
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Primitive(Primitive::from(value))
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Primitive(Primitive::from(value))
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Primitive(Primitive::from(value))
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Primitive(Primitive::String(value))
    }
}

impl From<StandIn> for Value {
    fn from(value: StandIn) -> Self {
        Value::StandIn(value)
    }
}

impl From<&StandIn> for Value {
    fn from(value: &StandIn) -> Self {
        Value::StandIn(value.clone())
    }
}

impl From<Intrinsic> for Value {
    fn from(value: Intrinsic) -> Self {
        Value::Intrinsic(value)
    }
}

impl From<StandInSequence> for Value {
    fn from(value: StandInSequence) -> Self {
        Value::Sequence(value)
    }
}
