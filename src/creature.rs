use std::collections::BTreeMap;

use schema::{BaseStats, ElementType};
use serde::{Deserialize, Serialize};

use crate::battle::status::StatusInstance;

/// One battling creature instance.
///
/// Instances are owned exclusively by the `PlayerSide` holding them and
/// only move between active/bench/fallen through engine-controlled
/// transitions. Cooldowns use a `BTreeMap` so that iteration order is
/// defined and identical across runs; a hash map here would make replay
/// depend on unspecified key order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatureInstance {
    pub instance_id: String,
    pub definition_id: String,
    pub element: ElementType,
    pub current_hp: u16,
    pub max_hp: u16,
    pub attack: u16,
    pub defense: u16,
    pub speed: u16,
    pub status: Option<StatusInstance>,
    pub move_cooldowns: BTreeMap<String, u8>,
    pub known_move_ids: Vec<String>,
}

impl CreatureInstance {
    /// Build an instance from catalog data, at full HP with every
    /// cooldown at zero.
    pub fn new(
        instance_id: impl Into<String>,
        definition_id: impl Into<String>,
        element: ElementType,
        base_stats: &BaseStats,
        known_move_ids: Vec<String>,
    ) -> Self {
        let move_cooldowns = known_move_ids
            .iter()
            .map(|id| (id.clone(), 0))
            .collect();

        CreatureInstance {
            instance_id: instance_id.into(),
            definition_id: definition_id.into(),
            element,
            current_hp: base_stats.hp,
            max_hp: base_stats.hp,
            attack: base_stats.attack,
            defense: base_stats.defense,
            speed: base_stats.speed,
            status: None,
            move_cooldowns,
            known_move_ids,
        }
    }

    /// Invariant: fainted exactly when HP is zero.
    pub fn is_fainted(&self) -> bool {
        self.current_hp == 0
    }

    /// Apply damage, flooring HP at zero. Returns true when this damage
    /// caused the creature to faint.
    pub fn take_damage(&mut self, amount: u16) -> bool {
        let was_alive = !self.is_fainted();
        self.current_hp = self.current_hp.saturating_sub(amount);
        was_alive && self.is_fainted()
    }

    /// Restore HP, capped at max. Fainted creatures cannot be healed
    /// through battle effects.
    pub fn heal(&mut self, amount: u16) -> u16 {
        if self.is_fainted() {
            return 0;
        }
        let healed = amount.min(self.max_hp - self.current_hp);
        self.current_hp += healed;
        healed
    }

    pub fn knows_move(&self, move_id: &str) -> bool {
        self.known_move_ids.iter().any(|id| id == move_id)
    }

    pub fn cooldown_for(&self, move_id: &str) -> u8 {
        self.move_cooldowns.get(move_id).copied().unwrap_or(0)
    }

    /// Start a move's cooldown after it executes.
    pub fn set_cooldown(&mut self, move_id: &str, turns: u8) {
        if turns > 0 {
            self.move_cooldowns.insert(move_id.to_string(), turns);
        }
    }

    /// End-of-turn cooldown decrement, floored at zero.
    pub fn tick_cooldowns(&mut self) {
        for turns in self.move_cooldowns.values_mut() {
            *turns = turns.saturating_sub(1);
        }
    }

    /// Apply a status, replacing any existing one.
    pub fn apply_status(&mut self, status: StatusInstance) {
        self.status = Some(status);
    }

    pub fn clear_status(&mut self) {
        self.status = None;
    }
}

/// Build a creature instance for battle. This is the construction entry
/// point external collaborators use when assembling a team from their
/// catalog.
pub fn create_creature_instance(
    instance_id: impl Into<String>,
    definition_id: impl Into<String>,
    element: ElementType,
    base_stats: &BaseStats,
    known_move_ids: Vec<String>,
) -> CreatureInstance {
    CreatureInstance::new(instance_id, definition_id, element, base_stats, known_move_ids)
}
