pub mod calculators;
pub mod engine;
pub mod rng;
pub mod state;
pub mod stats;
pub mod status;

#[cfg(test)]
mod tests;

pub use calculators::BattleConfig;
pub use engine::{simulate_turn, simulate_turn_with_config};
pub use rng::TurnRng;
pub use state::{BattleEvent, BattleOutcome, BattlePhase, BattleState, EventBus};
