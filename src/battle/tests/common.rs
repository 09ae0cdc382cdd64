//! Shared fixtures for battle scenario tests: a small canned move
//! catalog and creature builders with explicit stats.

use schema::{BaseStats, ElementType, MoveCategory, MoveData, StatusKind};

use crate::battle::state::{create_initial_battle_state, BattleState};
use crate::catalog::MoveCatalog;
use crate::creature::CreatureInstance;
use crate::side::PlayerAction;

/// Canned moves for scenarios. Accuracy 0 marks a sure hit, so most
/// tests are not at the mercy of the accuracy roll.
pub fn fixture_catalog() -> MoveCatalog {
    let moves = vec![
        MoveData {
            id: "focus".into(),
            name: "Focus".into(),
            element: ElementType::Normal,
            category: MoveCategory::Status,
            power: 0,
            accuracy: 0,
            priority: 0,
            cooldown: 0,
            status_effect: None,
            status_chance: 0.0,
        },
        MoveData {
            id: "tackle".into(),
            name: "Tackle".into(),
            element: ElementType::Normal,
            category: MoveCategory::Physical,
            power: 40,
            accuracy: 0,
            priority: 0,
            cooldown: 0,
            status_effect: None,
            status_chance: 0.0,
        },
        MoveData {
            id: "quick_jab".into(),
            name: "Quick Jab".into(),
            element: ElementType::Normal,
            category: MoveCategory::Physical,
            power: 30,
            accuracy: 0,
            priority: 1,
            cooldown: 0,
            status_effect: None,
            status_chance: 0.0,
        },
        MoveData {
            id: "heavy_slam".into(),
            name: "Heavy Slam".into(),
            element: ElementType::Normal,
            category: MoveCategory::Physical,
            power: 90,
            accuracy: 0,
            priority: 0,
            cooldown: 2,
            status_effect: None,
            status_chance: 0.0,
        },
        MoveData {
            id: "wild_swing".into(),
            name: "Wild Swing".into(),
            element: ElementType::Normal,
            category: MoveCategory::Physical,
            power: 70,
            accuracy: 55,
            priority: 0,
            cooldown: 0,
            status_effect: None,
            status_chance: 0.0,
        },
        MoveData {
            id: "ember".into(),
            name: "Ember".into(),
            element: ElementType::Fire,
            category: MoveCategory::Special,
            power: 50,
            accuracy: 0,
            priority: 0,
            cooldown: 0,
            status_effect: Some(StatusKind::Burn),
            status_chance: 1.0,
        },
        MoveData {
            id: "venom_sting".into(),
            name: "Venom Sting".into(),
            element: ElementType::Grass,
            category: MoveCategory::Physical,
            power: 30,
            accuracy: 0,
            priority: 0,
            cooldown: 0,
            status_effect: Some(StatusKind::Poison),
            status_chance: 1.0,
        },
        MoveData {
            id: "static_jolt".into(),
            name: "Static Jolt".into(),
            element: ElementType::Electric,
            category: MoveCategory::Status,
            power: 0,
            accuracy: 0,
            priority: 0,
            cooldown: 0,
            status_effect: Some(StatusKind::Paralysis),
            status_chance: 1.0,
        },
        MoveData {
            id: "zap".into(),
            name: "Zap".into(),
            element: ElementType::Electric,
            category: MoveCategory::Physical,
            power: 60,
            accuracy: 0,
            priority: 0,
            cooldown: 0,
            status_effect: None,
            status_chance: 0.0,
        },
    ];
    MoveCatalog::new(moves)
}

pub fn creature(
    instance_id: &str,
    element: ElementType,
    hp: u16,
    attack: u16,
    defense: u16,
    speed: u16,
    moves: &[&str],
) -> CreatureInstance {
    let stats = BaseStats {
        hp,
        attack,
        defense,
        speed,
    };
    CreatureInstance::new(
        instance_id,
        format!("{}-def", instance_id),
        element,
        &stats,
        moves.iter().map(|m| m.to_string()).collect(),
    )
}

/// A plain normal-type fighter with balanced stats and the full fixture
/// move list.
pub fn fighter(instance_id: &str, hp: u16, speed: u16) -> CreatureInstance {
    creature(
        instance_id,
        ElementType::Normal,
        hp,
        60,
        60,
        speed,
        &[
            "focus",
            "tackle",
            "quick_jab",
            "heavy_slam",
            "wild_swing",
            "ember",
            "venom_sting",
            "static_jolt",
            "zap",
        ],
    )
}

pub fn battle_of(team1: Vec<CreatureInstance>, team2: Vec<CreatureInstance>) -> BattleState {
    create_initial_battle_state("test-battle", 0, "red", "blue", team1, team2)
}

pub fn use_move(move_id: &str) -> PlayerAction {
    PlayerAction::UseMove {
        move_id: move_id.to_string(),
    }
}

pub fn switch_to(instance_id: &str) -> PlayerAction {
    PlayerAction::Switch {
        switch_to_instance_id: instance_id.to_string(),
    }
}
