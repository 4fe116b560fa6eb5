use std::iter::FusedIterator;

use crate::ids::ObjectId;
use crate::stand_in::{StandIn, anything};

/// The unbounded sequence a stand-in hands out when iterated.
///
/// Every element is a newly created stand-in; nothing is cached, so the
/// sequence never repeats itself and never ends. Bound consumption with
/// [`Iterator::take`] or a `break`.
///
/// Each iteration request opens a new handle with its own identity, so two
/// loops over the same stand-in never interfere.
#[derive(Debug, Clone)]
pub struct StandInSequence {
    id: ObjectId,
}

impl StandInSequence {
    pub(crate) fn open() -> Self {
        let id = ObjectId::next();
        tracing::trace!(%id, "stand-in sequence opened");
        Self { id }
    }

    #[must_use]
    pub fn id(&self) -> ObjectId {
        self.id
    }
}

impl Iterator for StandInSequence {
    type Item = StandIn;

    fn next(&mut self) -> Option<StandIn> {
        Some(anything())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl FusedIterator for StandInSequence {}

impl PartialEq for StandInSequence {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for StandInSequence {}
