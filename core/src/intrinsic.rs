use standin_types::{Hint, PropertyKey};

use crate::sequence::StandInSequence;
use crate::stand_in::{anything, coerce};
use crate::value::Value;

/// Methods a stand-in hands out under its reserved property names.
///
/// They are ordinary functions: callable, not constructible, and they do not
/// depend on the receiver they were read from. Equality is by kind, so
/// `toString` read from two different stand-ins compares equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intrinsic {
    /// `toString`: always `""`.
    ToString,
    /// `valueOf`: always `0`.
    ValueOf,
    /// `[Symbol.toPrimitive]`: takes a hint string.
    ToPrimitive,
    /// `[Symbol.iterator]`: opens a new sequence.
    Iterator,
    /// A sequence's `next`: steps to a new stand-in, never done.
    Next,
}

impl Intrinsic {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Intrinsic::ToString => "toString",
            Intrinsic::ValueOf => "valueOf",
            Intrinsic::ToPrimitive => "[Symbol.toPrimitive]",
            Intrinsic::Iterator => "[Symbol.iterator]",
            Intrinsic::Next => "next",
        }
    }

    /// Declared parameter count, what `length` reads.
    #[must_use]
    pub const fn length(self) -> u32 {
        match self {
            Intrinsic::ToString | Intrinsic::ValueOf | Intrinsic::Iterator => 0,
            Intrinsic::ToPrimitive | Intrinsic::Next => 1,
        }
    }

    /// Own properties: `length` and `name`. Everything else is absent.
    pub(crate) fn property(self, key: &PropertyKey) -> Value {
        match key.as_name() {
            Some("length") => Value::from(self.length()),
            Some("name") => Value::from(self.name()),
            _ => Value::UNDEFINED,
        }
    }

    /// What the host prints when a function is converted to a string.
    #[must_use]
    pub fn source_text(self) -> String {
        format!("function {}() {{ [native code] }}", self.name())
    }

    #[must_use]
    pub fn apply(self, args: &[Value]) -> Value {
        match self {
            Intrinsic::ToString => Value::from(""),
            Intrinsic::ValueOf => Value::from(0),
            Intrinsic::ToPrimitive => {
                // Anything that is not "number" or "string" is the default hint.
                let hint = args
                    .first()
                    .and_then(Value::as_str)
                    .and_then(|raw| raw.parse::<Hint>().ok())
                    .unwrap_or_default();
                Value::Primitive(coerce(hint))
            }
            Intrinsic::Iterator => Value::Sequence(StandInSequence::open()),
            Intrinsic::Next => Value::Step(anything()),
        }
    }
}
