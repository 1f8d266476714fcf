//! What resolving an event did to a player.
//!
//! Every resolver returns an `Outcome`, including the ones where nothing
//! changed: a missed paycheck or a declined offer is a result, not an error.

use serde::{Deserialize, Serialize};

use crate::catalog::{CareerId, EducationId, EventKind};

/// Narrative result of one event resolution.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// A paycheck was paid.
    Paid { amount: i64 },
    /// Unemployed players get nothing from paycheck squares.
    PayMissed,

    /// Career applied without a choice (unemployed player or starting draw).
    CareerAssigned { career: CareerId },
    /// The player switched to the drawn career.
    CareerSwitched { from: CareerId, to: CareerId },
    /// The player kept their career over the drawn one.
    CareerKept { current: CareerId, offered: CareerId },
    /// The drawn career is the one already held.
    CareerUnchanged { career: CareerId },

    /// The player paid for and received an education.
    EducationEnrolled { education: EducationId, cost: i64 },
    /// Education granted free as the starting draw.
    EducationGranted { education: EducationId },
    /// The player passed on the drawn education.
    EducationDeclined { education: EducationId },

    /// The catalog has nothing of this kind to draw.
    NothingToDraw { kind: EventKind },

    /// Marriage attempt succeeded.
    Married,
    /// Marriage attempt failed the coin flip.
    MarriageFailed,
    /// The player chose not to attempt marriage.
    MarriageDeclined,
    /// Already married; no attempt possible.
    AlreadyMarried,

    /// Children attempt; `count` may be zero.
    ChildrenBorn { count: u32 },
    /// The player chose not to try for children.
    ChildrenDeclined,
    /// Unmarried players cannot have children.
    NotMarried,
}

impl Outcome {
    /// Whether the player's record changed.
    #[must_use]
    pub fn changed_player(&self) -> bool {
        match self {
            Outcome::Paid { amount } => *amount != 0,
            Outcome::CareerAssigned { .. }
            | Outcome::CareerSwitched { .. }
            | Outcome::EducationEnrolled { .. }
            | Outcome::EducationGranted { .. }
            | Outcome::Married => true,
            Outcome::ChildrenBorn { count } => *count > 0,
            _ => false,
        }
    }
}

/// One resolved event during a move.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    /// Square the event sits on.
    pub position: u32,
    /// Which event fired.
    pub kind: EventKind,
    /// What it did.
    pub outcome: Outcome,
}
