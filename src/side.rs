use serde::{Deserialize, Serialize};

use crate::creature::CreatureInstance;

/// One player's chosen action for a turn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PlayerAction {
    /// Use a move known by the active creature, referenced by catalog id.
    UseMove { move_id: String },

    /// Swap the active creature for a living bench creature.
    Switch { switch_to_instance_id: String },
}

/// One side of the battle: the active creature, the bench, and the
/// fallen.
///
/// The union of the three groups is always the side's original lineup.
/// Order changes only through an explicit switch (old active goes to the
/// back of the bench) or a faint promotion (front of the bench becomes
/// active).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerSide {
    pub player_id: String,
    pub active: Option<CreatureInstance>,
    pub bench: Vec<CreatureInstance>,
    pub fallen: Vec<CreatureInstance>,
}

impl PlayerSide {
    /// Build a side from a lineup. The first creature leads; the rest
    /// wait on the bench in lineup order.
    pub fn new(player_id: impl Into<String>, mut team: Vec<CreatureInstance>) -> Self {
        let active = if team.is_empty() {
            None
        } else {
            Some(team.remove(0))
        };
        PlayerSide {
            player_id: player_id.into(),
            active,
            bench: team,
            fallen: Vec::new(),
        }
    }

    /// True while this side can still fight.
    pub fn has_living_creatures(&self) -> bool {
        self.active.as_ref().is_some_and(|c| !c.is_fainted()) || !self.bench.is_empty()
    }

    /// Whether `instance_id` names a living bench creature.
    pub fn bench_position(&self, instance_id: &str) -> Option<usize> {
        self.bench
            .iter()
            .position(|c| c.instance_id == instance_id && !c.is_fainted())
    }

    /// Swap the active creature with the named bench creature. Returns
    /// false (leaving the side untouched) when the target is not a living
    /// bench creature.
    pub fn switch_to(&mut self, instance_id: &str) -> bool {
        let Some(position) = self.bench_position(instance_id) else {
            return false;
        };
        let incoming = self.bench.remove(position);
        if let Some(outgoing) = self.active.replace(incoming) {
            self.bench.push(outgoing);
        }
        true
    }

    /// Move a fainted active creature to the fallen group and promote the
    /// front of the bench, if anyone is left. Returns the promoted
    /// creature's instance id.
    pub fn retire_active(&mut self) -> Option<String> {
        if let Some(fainted) = self.active.take() {
            debug_assert!(fainted.is_fainted(), "retired a living creature");
            self.fallen.push(fainted);
        }
        if self.bench.is_empty() {
            return None;
        }
        let promoted = self.bench.remove(0);
        let id = promoted.instance_id.clone();
        self.active = Some(promoted);
        Some(id)
    }
}
