//! The universal stand-in.
//!
//! [`anything()`] returns a value that can be read, called, constructed,
//! iterated and coerced without ever failing. Every derived value is either a
//! fixed primitive or another, independently identified stand-in, so property
//! chains (`a.b.c`) and call chains (`f()()()`) resolve to any depth.
//!
//! The crate also carries the dynamic [`Value`] model stand-ins are observed
//! through. Ordinary values in that model fail the way a dynamic runtime
//! would ([`RuntimeError`]); stand-ins never do.

pub mod errors;
mod ids;
mod intrinsic;
pub mod json;
mod meta;
pub mod ops;
mod sequence;
mod stand_in;
mod value;

pub use errors::RuntimeError;
pub use ids::ObjectId;
pub use intrinsic::Intrinsic;
pub use meta::{MetaObject, MetaOperation};
pub use sequence::StandInSequence;
pub use stand_in::{StandIn, anything};
pub use value::{Value, ValueIter};

pub use standin_types::{Hint, Primitive, PropertyKey, TypeTag, WellKnownSymbol};
