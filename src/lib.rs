//! Deterministic turn-resolution engine for two-player creature
//! battles.
//!
//! The engine is a pure function over snapshots: callers hold a
//! [`BattleState`], submit one [`PlayerAction`] per side together with a
//! turn seed, and receive the successor snapshot plus an ordered event
//! log. Identical inputs always produce identical outputs, so a battle
//! can be replayed or audited from its seeds alone.

pub mod battle;
pub mod catalog;
pub mod creature;
pub mod errors;
pub mod side;

pub use battle::calculators::BattleConfig;
pub use battle::engine::{simulate_turn, simulate_turn_with_config};
pub use battle::rng::{seed_from_str, TurnRng};
pub use battle::state::{
    create_initial_battle_state, ActionFailureReason, BattleEvent, BattleOutcome, BattlePhase,
    BattleState, EventBus,
};
pub use battle::stats::type_effectiveness;
pub use battle::status::{PreventRule, StatusInstance, StatusRules, TickEffect};
pub use catalog::{CreatureCatalog, MoveCatalog};
pub use creature::{create_creature_instance, CreatureInstance};
pub use errors::{BattleResult, BattleStateError, CatalogError, CatalogResult, EngineError};
pub use side::{PlayerAction, PlayerSide};
