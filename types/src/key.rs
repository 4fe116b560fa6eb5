//! Property keys.
//!
//! Keys are canonicalized on construction: a string that spells an array
//! index (`"0"`, `"999"`) becomes [`PropertyKey::Index`], so `s["0"]` and
//! `s[0]` address the same property.

use std::fmt;

/// Symbols the host defines for protocol hooks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WellKnownSymbol {
    ToPrimitive,
    Iterator,
    AsyncIterator,
    ToStringTag,
    HasInstance,
}

impl WellKnownSymbol {
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            WellKnownSymbol::ToPrimitive => "Symbol.toPrimitive",
            WellKnownSymbol::Iterator => "Symbol.iterator",
            WellKnownSymbol::AsyncIterator => "Symbol.asyncIterator",
            WellKnownSymbol::ToStringTag => "Symbol.toStringTag",
            WellKnownSymbol::HasInstance => "Symbol.hasInstance",
        }
    }
}

impl fmt::Display for WellKnownSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({})", self.description())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PropertyKey {
    Name(String),
    Index(u32),
    Symbol(WellKnownSymbol),
}

impl PropertyKey {
    /// Canonical key for a string: array-index spellings become `Index`.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match array_index(raw) {
            Some(index) => PropertyKey::Index(index),
            None => PropertyKey::Name(raw.to_string()),
        }
    }

    #[must_use]
    pub fn as_name(&self) -> Option<&str> {
        match self {
            PropertyKey::Name(name) => Some(name),
            PropertyKey::Index(_) | PropertyKey::Symbol(_) => None,
        }
    }

    #[must_use]
    pub fn is_symbol(&self) -> bool {
        matches!(self, PropertyKey::Symbol(_))
    }
}

/// An array index is a canonical decimal `u32` below `u32::MAX`.
fn array_index(raw: &str) -> Option<u32> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if raw.len() > 1 && raw.starts_with('0') {
        return None;
    }
    raw.parse::<u32>().ok().filter(|index| *index != u32::MAX)
}

impl From<&str> for PropertyKey {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

impl From<String> for PropertyKey {
    fn from(value: String) -> Self {
        match array_index(&value) {
            Some(index) => PropertyKey::Index(index),
            None => PropertyKey::Name(value),
        }
    }
}

impl From<&String> for PropertyKey {
    fn from(value: &String) -> Self {
        Self::parse(value)
    }
}

impl From<u32> for PropertyKey {
    fn from(value: u32) -> Self {
        PropertyKey::Index(value)
    }
}

impl From<i32> for PropertyKey {
    fn from(value: i32) -> Self {
        u32::try_from(value)
            .map_or_else(|_| PropertyKey::Name(value.to_string()), PropertyKey::Index)
    }
}

impl From<WellKnownSymbol> for PropertyKey {
    fn from(value: WellKnownSymbol) -> Self {
        PropertyKey::Symbol(value)
    }
}

impl From<&PropertyKey> for PropertyKey {
    fn from(value: &PropertyKey) -> Self {
        value.clone()
    }
}

impl fmt::Display for PropertyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyKey::Name(name) => f.write_str(name),
            PropertyKey::Index(index) => write!(f, "{index}"),
            PropertyKey::Symbol(symbol) => write!(f, "{symbol}"),
        }
    }
}
