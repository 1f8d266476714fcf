//! Event square types and where they sit on the track.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// The kind of life-event a square triggers.
///
/// Declaration order is the resolution order when several kinds share a
/// square, so `Ord` is derived on purpose.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum EventKind {
    Pay,
    CareerChange,
    EducationChance,
    Relationship,
    Children,
}

impl EventKind {
    /// Every kind, in resolution order.
    pub const ALL: [EventKind; 5] = [
        EventKind::Pay,
        EventKind::CareerChange,
        EventKind::EducationChance,
        EventKind::Relationship,
        EventKind::Children,
    ];
}

/// Placement of one event kind on the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventSquare {
    /// Which event fires.
    pub kind: EventKind,

    /// Display name, e.g. "Paycheck".
    pub name: String,

    /// Single-character map symbol.
    pub symbol: char,

    /// Track positions hosting this event.
    pub positions: SmallVec<[u32; 8]>,
}

impl EventSquare {
    /// Create a placement.
    #[must_use]
    pub fn new(kind: EventKind, name: impl Into<String>, symbol: char, positions: &[u32]) -> Self {
        Self {
            kind,
            name: name.into(),
            symbol,
            positions: SmallVec::from_slice(positions),
        }
    }

    /// Whether this event occupies `position`.
    #[must_use]
    pub fn occupies(&self, position: u32) -> bool {
        self.positions.contains(&position)
    }
}
