//! The stand-in and its factory.
//!
//! A stand-in has no state beyond its identity. Its behavior is the dispatch
//! table below, keyed by meta-operation kind:
//!
//! | Operation | Answer |
//! |---|---|
//! | read `length` | `0` |
//! | read `toString` / `valueOf` | [`Intrinsic`] returning `""` / `0` |
//! | read `[Symbol.toPrimitive]` / `[Symbol.iterator]` | [`Intrinsic`] |
//! | read anything else | new stand-in |
//! | call, construct | new stand-in |
//! | `in`, `delete` | `true` |
//! | coerce with number / string / default hint | `0` / `""` / `true` |
//! | iterate | new, unbounded [`StandInSequence`] |
//! | anything else | new stand-in |
//!
//! Children are created only when observed, so the infinite graph of
//! stand-ins is never built eagerly.

use std::array;

use standin_types::{Hint, Primitive, PropertyKey, WellKnownSymbol};

use crate::ids::ObjectId;
use crate::intrinsic::Intrinsic;
use crate::meta::{MetaObject, MetaOperation};
use crate::sequence::StandInSequence;
use crate::value::Value;

/// Create a new stand-in.
///
/// Every call returns a value with its own identity; no two stand-ins are
/// ever equal.
#[must_use]
pub fn anything() -> StandIn {
    let id = ObjectId::next();
    tracing::trace!(%id, "stand-in created");
    StandIn { id }
}

/// The primitive a stand-in coerces to under `hint`.
pub(crate) fn coerce(hint: Hint) -> Primitive {
    match hint {
        Hint::Number => Primitive::Number(0.0),
        Hint::String => Primitive::String(String::new()),
        Hint::Default => Primitive::Bool(true),
    }
}

/// A value that is an object, a function and a constructor at once.
///
/// Cloning copies the reference: the clone has the same identity and
/// compares equal to the original.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StandIn {
    id: ObjectId,
}

impl StandIn {
    #[must_use]
    pub fn id(&self) -> ObjectId {
        self.id
    }

    /// Read a property. Reserved names answer with fixed values; every
    /// other key, including numeric ones, yields a new stand-in.
    #[must_use]
    pub fn get(&self, key: impl Into<PropertyKey>) -> Value {
        self.read(&key.into())
    }

    /// Call as a function. Arguments are ignored.
    #[must_use]
    pub fn call(&self, args: &[Value]) -> StandIn {
        self.derive(MetaOperation::Call(args))
    }

    /// Call as a constructor. Arguments are ignored.
    #[must_use]
    pub fn construct(&self, args: &[Value]) -> StandIn {
        self.derive(MetaOperation::Construct(args))
    }

    /// `key in stand_in`: every property exists.
    #[must_use]
    pub fn has(&self, _key: impl Into<PropertyKey>) -> bool {
        true
    }

    /// `delete stand_in[key]`: always reported as successful.
    #[must_use]
    pub fn delete(&self, _key: impl Into<PropertyKey>) -> bool {
        true
    }

    #[must_use]
    pub fn to_primitive(&self, hint: Hint) -> Primitive {
        coerce(hint)
    }

    /// Explicit numeric conversion (`valueOf()`).
    #[must_use]
    pub fn value_of(&self) -> f64 {
        0.0
    }

    /// Explicit string conversion (`toString()`).
    #[must_use]
    pub fn to_js_string(&self) -> String {
        String::new()
    }

    /// Open a new, unbounded sequence of stand-ins.
    #[must_use]
    pub fn iter(&self) -> StandInSequence {
        StandInSequence::open()
    }

    /// Object destructuring: `const { a, b } = stand_in`.
    #[must_use]
    pub fn pluck<const N: usize>(&self, names: [&str; N]) -> [Value; N] {
        names.map(|name| self.get(name))
    }

    /// Array destructuring: `const [a, b, c] = stand_in`.
    ///
    /// Draws the first `N` elements of a new sequence.
    #[must_use]
    pub fn destructure<const N: usize>(&self) -> [StandIn; N] {
        let mut sequence = self.iter();
        array::from_fn(|_| sequence.next().unwrap_or_else(anything))
    }

    fn read(&self, key: &PropertyKey) -> Value {
        match key {
            PropertyKey::Name(name) => match name.as_str() {
                "length" => Value::from(0),
                "toString" => Value::Intrinsic(Intrinsic::ToString),
                "valueOf" => Value::Intrinsic(Intrinsic::ValueOf),
                _ => Value::StandIn(self.derive(MetaOperation::Get(key))),
            },
            PropertyKey::Symbol(WellKnownSymbol::ToPrimitive) => {
                Value::Intrinsic(Intrinsic::ToPrimitive)
            }
            PropertyKey::Symbol(WellKnownSymbol::Iterator) => {
                Value::Intrinsic(Intrinsic::Iterator)
            }
            PropertyKey::Index(_) | PropertyKey::Symbol(_) => {
                Value::StandIn(self.derive(MetaOperation::Get(key)))
            }
        }
    }

    fn derive(&self, operation: MetaOperation<'_>) -> StandIn {
        let child = StandIn {
            id: ObjectId::next(),
        };
        tracing::trace!(
            parent = %self.id,
            id = %child.id,
            operation = operation.kind(),
            "stand-in derived"
        );
        child
    }
}

impl MetaObject for StandIn {
    fn get(&self, key: &PropertyKey) -> Value {
        self.read(key)
    }

    fn call(&self, args: &[Value]) -> Value {
        Value::StandIn(StandIn::call(self, args))
    }

    fn construct(&self, args: &[Value]) -> Value {
        Value::StandIn(StandIn::construct(self, args))
    }

    fn has(&self, _key: &PropertyKey) -> bool {
        true
    }

    fn delete(&self, _key: &PropertyKey) -> bool {
        true
    }

    fn to_primitive(&self, hint: Hint) -> Primitive {
        coerce(hint)
    }

    fn iterate(&self) -> StandInSequence {
        StandInSequence::open()
    }

    fn fallback(&self, operation: &MetaOperation<'_>) -> Value {
        Value::StandIn(self.derive(*operation))
    }
}

impl IntoIterator for &StandIn {
    type Item = StandIn;
    type IntoIter = StandInSequence;

    fn into_iter(self) -> StandInSequence {
        self.iter()
    }
}
