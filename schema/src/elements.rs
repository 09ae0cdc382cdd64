use serde::{Deserialize, Serialize};
use std::fmt;

/// Damage multiplier for a super-effective matchup.
pub const SUPER_EFFECTIVE: f64 = 1.5;
/// Damage multiplier for a resisted matchup.
pub const NOT_EFFECTIVE: f64 = 0.75;
/// Damage multiplier when the defender is immune.
pub const IMMUNE: f64 = 0.0;
/// Damage multiplier for every matchup the chart does not list.
pub const NEUTRAL: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Hash)]
pub enum ElementType {
    Normal,
    Fire,
    Water,
    Grass,
    Electric,
    Ice,
    Earth,
    Air,
    Spirit,
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl ElementType {
    /// Calculate the type effectiveness multiplier for an attacking element
    /// against a defending element.
    ///
    /// Returns one of the chart constants: `SUPER_EFFECTIVE`, `NOT_EFFECTIVE`,
    /// `IMMUNE`, or `NEUTRAL` for every pair the chart does not list.
    pub fn effectiveness(attacking: ElementType, defending: ElementType) -> f64 {
        use ElementType::*;

        match (attacking, defending) {
            // Fire
            (Fire, Grass) | (Fire, Ice) => SUPER_EFFECTIVE,
            (Fire, Fire) | (Fire, Water) | (Fire, Earth) => NOT_EFFECTIVE,

            // Water
            (Water, Fire) | (Water, Earth) => SUPER_EFFECTIVE,
            (Water, Water) | (Water, Grass) => NOT_EFFECTIVE,

            // Grass
            (Grass, Water) | (Grass, Earth) => SUPER_EFFECTIVE,
            (Grass, Grass) | (Grass, Fire) | (Grass, Air) => NOT_EFFECTIVE,

            // Electric
            (Electric, Water) | (Electric, Air) => SUPER_EFFECTIVE,
            (Electric, Electric) | (Electric, Grass) => NOT_EFFECTIVE,
            (Electric, Earth) => IMMUNE,

            // Ice
            (Ice, Grass) | (Ice, Air) | (Ice, Earth) => SUPER_EFFECTIVE,
            (Ice, Ice) | (Ice, Fire) | (Ice, Water) => NOT_EFFECTIVE,

            // Earth
            (Earth, Fire) | (Earth, Electric) => SUPER_EFFECTIVE,
            (Earth, Grass) => NOT_EFFECTIVE,
            (Earth, Air) => IMMUNE,

            // Air
            (Air, Grass) | (Air, Ice) => SUPER_EFFECTIVE,
            (Air, Electric) => NOT_EFFECTIVE,

            // Spirit
            (Spirit, Spirit) => SUPER_EFFECTIVE,
            (Spirit, Normal) => IMMUNE,

            // Normal
            (Normal, Spirit) => IMMUNE,

            _ => NEUTRAL,
        }
    }

    pub fn is_immune(attacking: ElementType, defending: ElementType) -> bool {
        Self::effectiveness(attacking, defending) == IMMUNE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn super_effective_pairs() {
        assert_eq!(
            ElementType::effectiveness(ElementType::Fire, ElementType::Grass),
            SUPER_EFFECTIVE
        );
        assert_eq!(
            ElementType::effectiveness(ElementType::Water, ElementType::Fire),
            SUPER_EFFECTIVE
        );
    }

    #[test]
    fn immunities() {
        assert_eq!(
            ElementType::effectiveness(ElementType::Electric, ElementType::Earth),
            IMMUNE
        );
        assert!(ElementType::is_immune(ElementType::Earth, ElementType::Air));
        assert!(ElementType::is_immune(ElementType::Normal, ElementType::Spirit));
    }

    #[test]
    fn unlisted_pairs_are_neutral() {
        assert_eq!(
            ElementType::effectiveness(ElementType::Normal, ElementType::Fire),
            NEUTRAL
        );
        assert_eq!(
            ElementType::effectiveness(ElementType::Spirit, ElementType::Earth),
            NEUTRAL
        );
        // A type against itself is neutral unless the chart says otherwise
        assert_eq!(
            ElementType::effectiveness(ElementType::Normal, ElementType::Normal),
            NEUTRAL
        );
    }
}
