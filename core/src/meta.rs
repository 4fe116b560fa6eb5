//! The meta-operation surface.
//!
//! A dynamic runtime routes property reads, calls, `in` checks and the rest
//! through a handful of internal hooks. [`MetaOperation`] names those hooks
//! and [`MetaObject`] is the dispatch table an object answers them with: one
//! method per operation kind, plus [`MetaObject::fallback`] for the rest.

use standin_types::{Hint, Primitive, PropertyKey};

use crate::sequence::StandInSequence;
use crate::value::Value;

#[derive(Debug, Clone, Copy)]
pub enum MetaOperation<'a> {
    Get(&'a PropertyKey),
    Set(&'a PropertyKey, &'a Value),
    Has(&'a PropertyKey),
    Delete(&'a PropertyKey),
    Call(&'a [Value]),
    Construct(&'a [Value]),
    ToPrimitive(Hint),
    Iterate,
    DefineProperty(&'a PropertyKey),
    GetOwnPropertyDescriptor(&'a PropertyKey),
    OwnKeys,
    GetPrototypeOf,
    SetPrototypeOf,
    IsExtensible,
    PreventExtensions,
}

impl MetaOperation<'_> {
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            MetaOperation::Get(_) => "get",
            MetaOperation::Set(..) => "set",
            MetaOperation::Has(_) => "has",
            MetaOperation::Delete(_) => "deleteProperty",
            MetaOperation::Call(_) => "apply",
            MetaOperation::Construct(_) => "construct",
            MetaOperation::ToPrimitive(_) => "toPrimitive",
            MetaOperation::Iterate => "iterate",
            MetaOperation::DefineProperty(_) => "defineProperty",
            MetaOperation::GetOwnPropertyDescriptor(_) => "getOwnPropertyDescriptor",
            MetaOperation::OwnKeys => "ownKeys",
            MetaOperation::GetPrototypeOf => "getPrototypeOf",
            MetaOperation::SetPrototypeOf => "setPrototypeOf",
            MetaOperation::IsExtensible => "isExtensible",
            MetaOperation::PreventExtensions => "preventExtensions",
        }
    }
}

/// An object defined entirely by how it answers meta-operations.
///
/// Implementations are infallible: every method returns a value.
pub trait MetaObject {
    fn get(&self, key: &PropertyKey) -> Value;

    fn call(&self, args: &[Value]) -> Value;

    fn construct(&self, args: &[Value]) -> Value;

    fn has(&self, key: &PropertyKey) -> bool;

    fn delete(&self, key: &PropertyKey) -> bool;

    fn to_primitive(&self, hint: Hint) -> Primitive;

    fn iterate(&self) -> StandInSequence;

    /// Answer for every operation without a dedicated method above.
    fn fallback(&self, operation: &MetaOperation<'_>) -> Value;

    /// Route an operation to the method that answers it.
    fn dispatch(&self, operation: MetaOperation<'_>) -> Value {
        match operation {
            MetaOperation::Get(key) => self.get(key),
            MetaOperation::Has(key) => Value::from(self.has(key)),
            MetaOperation::Delete(key) => Value::from(self.delete(key)),
            MetaOperation::Call(args) => self.call(args),
            MetaOperation::Construct(args) => self.construct(args),
            MetaOperation::ToPrimitive(hint) => Value::Primitive(self.to_primitive(hint)),
            MetaOperation::Iterate => Value::Sequence(self.iterate()),
            other => self.fallback(&other),
        }
    }
}
