use schema::ElementType;

use crate::battle::status::StatusRules;
use crate::creature::CreatureInstance;

/// Effective attack stat including active status modifiers (a burn
/// weakens physical output).
pub fn effective_attack(creature: &CreatureInstance) -> u16 {
    scaled_stat(creature.attack, status_factor(creature, |r| r.attack_factor))
}

/// Effective defense stat. No status in the current set modifies
/// defense, but routing the lookup through the table keeps this in step
/// with future rows.
pub fn effective_defense(creature: &CreatureInstance) -> u16 {
    creature.defense
}

/// Effective speed including active status modifiers (paralysis halves
/// speed). Used for action ordering.
pub fn effective_speed(creature: &CreatureInstance) -> u16 {
    scaled_stat(creature.speed, status_factor(creature, |r| r.speed_factor))
}

/// Accuracy multiplier from the attacker's active status (blindness
/// reduces it). Applied on top of the move's base accuracy.
pub fn accuracy_factor(creature: &CreatureInstance) -> f64 {
    status_factor(creature, |r| r.accuracy_factor)
}

/// Pure type-chart lookup, usable by callers for damage previews without
/// touching battle state.
pub fn type_effectiveness(attack_type: ElementType, defender_type: ElementType) -> f64 {
    ElementType::effectiveness(attack_type, defender_type)
}

fn status_factor(creature: &CreatureInstance, select: impl Fn(&StatusRules) -> f64) -> f64 {
    creature
        .status
        .as_ref()
        .map(|s| select(&StatusRules::for_kind(s.kind)))
        .unwrap_or(1.0)
}

fn scaled_stat(base: u16, factor: f64) -> u16 {
    if factor == 1.0 {
        return base;
    }
    (f64::from(base) * factor).floor() as u16
}
