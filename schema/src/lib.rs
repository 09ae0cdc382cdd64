// Creature Clash Schema - Shared type definitions
// This crate contains the static data definitions that are shared between
// the battle engine and its external collaborators (catalog services,
// persistence, UI previews).

// Re-export the main types
pub use creature_data::*;
pub use elements::*;
pub use move_data::*;

pub mod creature_data;
pub mod elements;
pub mod move_data;
