use crate::elements::ElementType;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseStats {
    pub hp: u16,
    pub attack: u16,
    pub defense: u16,
    pub speed: u16,
}

/// Static definition of a creature species, consumed by the engine but
/// owned by the external catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatureDefinition {
    pub id: String,
    pub name: String,
    pub element: ElementType,
    pub base_stats: BaseStats,
    /// Move ids this species can know, in catalog order.
    pub move_pool: Vec<String>,
}
