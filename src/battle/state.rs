use schema::StatusKind;
use serde::{Deserialize, Serialize};

use crate::creature::CreatureInstance;
use crate::side::PlayerSide;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Copy)]
pub enum BattlePhase {
    AwaitingActions,
    Resolving,
    Finished,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Copy)]
pub enum BattleOutcome {
    Ongoing,
    SideOneWin,
    SideTwoWin,
    Draw,
}

/// Why a chosen action was skipped instead of executed. Malformed input
/// degrades to one of these, never to a panic, so a buggy caller still
/// gets a deterministic replayable turn.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum ActionFailureReason {
    /// The active creature does not know the named move.
    UnknownMove { move_id: String },
    /// The named move has cooldown turns remaining.
    MoveOnCooldown { move_id: String, turns_remaining: u8 },
    /// The switch target is not a living bench creature.
    InvalidSwitchTarget { instance_id: String },
    /// The side has no creature on the field.
    NoActiveCreature,
    /// The creature that chose the action (or its target) fainted before
    /// the action could execute.
    CreatureFainted,
    /// The bearer's status blocked the action this turn.
    StatusPrevented { status: StatusKind },
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum BattleEvent {
    // Turn management
    TurnStarted {
        turn_number: u32,
    },
    TurnEnded {
        turn_number: u32,
    },

    // Actions
    CreatureSwitched {
        side_index: usize,
        /// None when the engine promoted a bench creature after a faint.
        old_instance_id: Option<String>,
        new_instance_id: String,
    },
    MoveUsed {
        side_index: usize,
        instance_id: String,
        move_id: String,
    },
    MoveMissed {
        side_index: usize,
        instance_id: String,
        move_id: String,
    },
    CriticalHit {
        side_index: usize,
        instance_id: String,
        move_id: String,
    },
    SuperEffective {
        multiplier: f64,
    },
    NotVeryEffective {
        multiplier: f64,
    },
    NoEffect,
    DamageDealt {
        side_index: usize,
        instance_id: String,
        amount: u16,
        remaining_hp: u16,
    },

    // Status effects
    StatusApplied {
        side_index: usize,
        instance_id: String,
        status: StatusKind,
    },
    StatusDamage {
        side_index: usize,
        instance_id: String,
        status: StatusKind,
        amount: u16,
        remaining_hp: u16,
    },
    StatusHeal {
        side_index: usize,
        instance_id: String,
        status: StatusKind,
        amount: u16,
        new_hp: u16,
    },
    StatusExpired {
        side_index: usize,
        instance_id: String,
        status: StatusKind,
    },

    // Fainting and failures
    CreatureFainted {
        side_index: usize,
        instance_id: String,
    },
    ActionFailed {
        side_index: usize,
        reason: ActionFailureReason,
    },

    // Battle end
    BattleEnded {
        winner: Option<usize>,
    },
}

impl BattleEvent {
    /// Formats the event into a human-readable string using battle
    /// context. Returns None for silent events that should not produce
    /// user-visible text.
    pub fn format(&self, state: &BattleState) -> Option<String> {
        match self {
            BattleEvent::TurnStarted { turn_number } => {
                Some(format!("=== Turn {} ===", turn_number))
            }
            BattleEvent::TurnEnded { .. } => None,

            BattleEvent::CreatureSwitched {
                side_index,
                old_instance_id,
                new_instance_id,
            } => {
                let player = &state.sides[*side_index].player_id;
                match old_instance_id {
                    Some(old) => Some(format!(
                        "{} recalled {} and sent out {}!",
                        player, old, new_instance_id
                    )),
                    None => Some(format!("{} sent out {}!", player, new_instance_id)),
                }
            }

            BattleEvent::MoveUsed {
                instance_id,
                move_id,
                ..
            } => Some(format!("{} used {}!", instance_id, move_id)),
            BattleEvent::MoveMissed { instance_id, .. } => {
                Some(format!("{}'s attack missed!", instance_id))
            }
            BattleEvent::CriticalHit { .. } => Some("A critical hit!".to_string()),

            BattleEvent::SuperEffective { .. } => Some("It's super effective!".to_string()),
            BattleEvent::NotVeryEffective { .. } => {
                Some("It's not very effective...".to_string())
            }
            BattleEvent::NoEffect => Some("It had no effect!".to_string()),

            BattleEvent::DamageDealt {
                instance_id,
                amount,
                ..
            } => Some(format!("{} took {} damage!", instance_id, amount)),

            BattleEvent::StatusApplied {
                instance_id,
                status,
                ..
            } => Some(format!("{} was afflicted by {}!", instance_id, status)),
            BattleEvent::StatusDamage {
                instance_id,
                status,
                amount,
                ..
            } => Some(format!(
                "{} is hurt by its {}! ({} damage)",
                instance_id, status, amount
            )),
            BattleEvent::StatusHeal {
                instance_id,
                status,
                amount,
                ..
            } => Some(format!(
                "{} recovered {} HP from its {}!",
                instance_id, amount, status
            )),
            BattleEvent::StatusExpired {
                instance_id,
                status,
                ..
            } => Some(format!("{}'s {} wore off.", instance_id, status)),

            BattleEvent::CreatureFainted { instance_id, .. } => {
                Some(format!("{} fainted!", instance_id))
            }
            BattleEvent::ActionFailed { reason, .. } => {
                Some(Self::format_failure_reason(reason))
            }

            BattleEvent::BattleEnded { winner } => match winner {
                Some(index) => Some(format!(
                    "{} has won the battle!",
                    state.sides[*index].player_id
                )),
                None => Some("The battle ended in a draw!".to_string()),
            },
        }
    }

    fn format_failure_reason(reason: &ActionFailureReason) -> String {
        match reason {
            ActionFailureReason::UnknownMove { move_id } => {
                format!("It doesn't know {}!", move_id)
            }
            ActionFailureReason::MoveOnCooldown { move_id, .. } => {
                format!("{} isn't ready yet!", move_id)
            }
            ActionFailureReason::InvalidSwitchTarget { .. } => {
                "It can't come out right now!".to_string()
            }
            ActionFailureReason::NoActiveCreature => "But there was nobody left!".to_string(),
            ActionFailureReason::CreatureFainted => "But it had already fainted!".to_string(),
            ActionFailureReason::StatusPrevented { status } => match status {
                StatusKind::Sleep => "It is fast asleep.".to_string(),
                StatusKind::Paralysis => "It is fully paralyzed!".to_string(),
                _ => "But it failed!".to_string(),
            },
        }
    }
}

/// Ordered collection of everything that happened during one resolved
/// turn. The order is part of the replay contract.
#[derive(Debug, Clone, Default)]
pub struct EventBus {
    events: Vec<BattleEvent>,
}

impl EventBus {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn push(&mut self, event: BattleEvent) {
        self.events.push(event);
    }

    pub fn events(&self) -> &[BattleEvent] {
        &self.events
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn into_events(self) -> Vec<BattleEvent> {
        self.events
    }

    /// Print all events in debug format with indentation.
    pub fn print_debug(&self) {
        for event in &self.events {
            println!("  {:?}", event);
        }
    }

    /// Print all events using their formatted text (when available)
    /// along with battle context. Falls back to debug format for silent
    /// events.
    pub fn print_formatted(&self, state: &BattleState) {
        for event in &self.events {
            match event.format(state) {
                Some(formatted) => println!("  {}", formatted),
                None => println!("  {:?} (silent)", event),
            }
        }
    }
}

impl std::fmt::Display for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for event in &self.events {
            writeln!(f, "  {:?}", event)?;
        }
        Ok(())
    }
}

/// Full serializable snapshot of a battle between turns.
///
/// `simulate_turn` treats a snapshot as immutable input and returns the
/// successor snapshot; nothing in this struct is mutated across calls.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct BattleState {
    pub battle_id: String,
    /// Seed recorded at creation, for audit; each turn receives its own
    /// seed from the caller.
    pub seed: u64,
    pub turn_number: u32,
    pub phase: BattlePhase,
    pub result: BattleOutcome,
    pub sides: [PlayerSide; 2],
    /// Event log of the most recently resolved turn, replaced each turn.
    pub last_turn_events: Vec<BattleEvent>,
}

impl BattleState {
    pub fn new(battle_id: impl Into<String>, seed: u64, side1: PlayerSide, side2: PlayerSide) -> Self {
        BattleState {
            battle_id: battle_id.into(),
            seed,
            turn_number: 0,
            phase: BattlePhase::AwaitingActions,
            result: BattleOutcome::Ongoing,
            sides: [side1, side2],
            last_turn_events: Vec::new(),
        }
    }

    pub fn side(&self, index: usize) -> &PlayerSide {
        &self.sides[index]
    }

    pub fn active_creature(&self, index: usize) -> Option<&CreatureInstance> {
        self.sides[index].active.as_ref()
    }
}

/// Assemble the opening snapshot of a battle from two lineups.
pub fn create_initial_battle_state(
    battle_id: impl Into<String>,
    seed: u64,
    side1_id: impl Into<String>,
    side2_id: impl Into<String>,
    side1_team: Vec<CreatureInstance>,
    side2_team: Vec<CreatureInstance>,
) -> BattleState {
    BattleState::new(
        battle_id,
        seed,
        PlayerSide::new(side1_id, side1_team),
        PlayerSide::new(side2_id, side2_team),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::creature::CreatureInstance;
    use schema::{BaseStats, ElementType};

    fn team(prefix: &str, count: usize) -> Vec<CreatureInstance> {
        let stats = BaseStats {
            hp: 40,
            attack: 50,
            defense: 50,
            speed: 50,
        };
        (0..count)
            .map(|i| {
                CreatureInstance::new(
                    format!("{}-{}", prefix, i),
                    "test-def",
                    ElementType::Normal,
                    &stats,
                    vec!["tackle".into()],
                )
            })
            .collect()
    }

    #[test]
    fn initial_state_starts_at_turn_zero() {
        let state =
            create_initial_battle_state("b1", 99, "alice", "bob", team("a", 2), team("b", 2));
        assert_eq!(state.turn_number, 0);
        assert_eq!(state.phase, BattlePhase::AwaitingActions);
        assert_eq!(state.result, BattleOutcome::Ongoing);
        assert_eq!(state.seed, 99);
        assert!(state.last_turn_events.is_empty());
        assert_eq!(state.active_creature(0).unwrap().instance_id, "a-0");
        assert_eq!(state.sides[1].bench.len(), 1);
    }

    #[test]
    fn state_round_trips_through_json() {
        let state =
            create_initial_battle_state("b1", 7, "alice", "bob", team("a", 3), team("b", 1));
        let json = serde_json::to_string(&state).expect("state serializes");
        let back: BattleState = serde_json::from_str(&json).expect("state deserializes");
        assert_eq!(state, back);
    }

    #[test]
    fn silent_events_return_none() {
        let state =
            create_initial_battle_state("b1", 1, "alice", "bob", team("a", 1), team("b", 1));
        assert!(BattleEvent::TurnEnded { turn_number: 3 }.format(&state).is_none());
        assert!(BattleEvent::TurnStarted { turn_number: 3 }.format(&state).is_some());
        assert_eq!(
            BattleEvent::NoEffect.format(&state),
            Some("It had no effect!".to_string())
        );
    }
}
