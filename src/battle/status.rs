use schema::StatusKind;
use serde::{Deserialize, Serialize};

use crate::battle::rng::TurnRng;

/// A status condition currently affecting one creature.
///
/// A creature holds at most one status at a time; applying a new one
/// replaces the old instance outright (no stacking, no refresh-merge).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusInstance {
    pub kind: StatusKind,
    pub turns_remaining: u8,
}

impl StatusInstance {
    pub fn new(kind: StatusKind) -> Self {
        Self {
            kind,
            turns_remaining: StatusRules::for_kind(kind).duration,
        }
    }
}

/// Whether a status stops its bearer from acting this turn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PreventRule {
    /// Never blocks the action.
    No,
    /// Blocks the action unconditionally while the status lasts.
    Always,
    /// Blocks the action with the given probability; consumes one RNG
    /// draw each time it is evaluated.
    Chance(f64),
}

/// End-of-turn HP effect of a status. The amount is `max_hp / divisor`,
/// floored, with a minimum of 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickEffect {
    None,
    Damage { divisor: u16 },
    Heal { divisor: u16 },
}

/// The full behavioural row for one status condition.
///
/// Adding a status means adding a row here and a variant to
/// [`StatusKind`]; nothing in the engine branches on individual kinds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatusRules {
    pub prevent: PreventRule,
    /// Multiplier on effective speed while the status is active.
    pub speed_factor: f64,
    /// Multiplier on effective accuracy while the status is active.
    pub accuracy_factor: f64,
    /// Multiplier on effective attack while the status is active.
    pub attack_factor: f64,
    pub tick: TickEffect,
    /// Turns the status lasts when freshly applied.
    pub duration: u8,
}

impl StatusRules {
    const NEUTRAL: StatusRules = StatusRules {
        prevent: PreventRule::No,
        speed_factor: 1.0,
        accuracy_factor: 1.0,
        attack_factor: 1.0,
        tick: TickEffect::None,
        duration: 0,
    };

    pub fn for_kind(kind: StatusKind) -> StatusRules {
        match kind {
            StatusKind::Burn => StatusRules {
                attack_factor: 0.75,
                tick: TickEffect::Damage { divisor: 16 },
                duration: 4,
                ..Self::NEUTRAL
            },
            StatusKind::Poison => StatusRules {
                tick: TickEffect::Damage { divisor: 8 },
                duration: 4,
                ..Self::NEUTRAL
            },
            StatusKind::Sleep => StatusRules {
                prevent: PreventRule::Always,
                duration: 2,
                ..Self::NEUTRAL
            },
            StatusKind::Paralysis => StatusRules {
                prevent: PreventRule::Chance(0.25),
                speed_factor: 0.5,
                duration: 4,
                ..Self::NEUTRAL
            },
            StatusKind::Blind => StatusRules {
                accuracy_factor: 0.6,
                duration: 3,
                ..Self::NEUTRAL
            },
            StatusKind::Regen => StatusRules {
                tick: TickEffect::Heal { divisor: 16 },
                duration: 3,
                ..Self::NEUTRAL
            },
        }
    }
}

/// Evaluate the action-prevention rule for a status, consuming an RNG
/// draw only when the rule is probabilistic. Returns true when the
/// bearer's action is blocked this turn.
pub fn prevents_action(status: Option<&StatusInstance>, rng: &mut TurnRng) -> bool {
    let Some(status) = status else {
        return false;
    };
    match StatusRules::for_kind(status.kind).prevent {
        PreventRule::No => false,
        PreventRule::Always => true,
        PreventRule::Chance(p) => rng.chance(p),
    }
}
