use crate::elements::ElementType;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Hash)]
pub enum MoveCategory {
    /// Damage scaled by the attacker's Attack stat.
    Physical,
    /// Damage scaled by the attacker's Attack stat against elemental resistances.
    Special,
    /// No direct damage; exists to inflict a status effect.
    Status,
}

/// The closed set of status conditions a move can inflict.
///
/// The behavioural rules for each condition (action prevention, stat
/// modifiers, end-of-turn ticks) live in the engine's status table; this
/// enum is only the shared vocabulary between move data and the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Hash)]
pub enum StatusKind {
    Burn,
    Poison,
    Sleep,
    Paralysis,
    Blind,
    Regen,
}

impl fmt::Display for StatusKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StatusKind::Burn => "burn",
            StatusKind::Poison => "poison",
            StatusKind::Sleep => "sleep",
            StatusKind::Paralysis => "paralysis",
            StatusKind::Blind => "blindness",
            StatusKind::Regen => "regeneration",
        };
        write!(f, "{}", name)
    }
}

/// Static definition of a move, consumed by the engine but owned by the
/// external catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveData {
    pub id: String,
    pub name: String,
    pub element: ElementType,
    pub category: MoveCategory,
    /// Base power; 0 for status moves.
    pub power: u16,
    /// Base accuracy in percent; 0 means the move always hits.
    pub accuracy: u8,
    /// Higher priority moves resolve before lower ones regardless of speed.
    pub priority: i8,
    /// Turns before the move can be used again; 0 means usable every turn.
    pub cooldown: u8,
    /// Status inflicted on a successful hit, if any.
    pub status_effect: Option<StatusKind>,
    /// Probability in [0, 1] that `status_effect` is applied on a hit.
    pub status_chance: f64,
}

impl MoveData {
    /// True when the move always hits, skipping the accuracy roll.
    pub fn always_hits(&self) -> bool {
        self.accuracy == 0
    }

    pub fn is_damaging(&self) -> bool {
        !matches!(self.category, MoveCategory::Status)
    }
}
