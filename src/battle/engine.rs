use crate::battle::calculators::{resolve_critical, resolve_damage, resolve_hit, BattleConfig};
use crate::battle::rng::TurnRng;
use crate::battle::state::{
    ActionFailureReason, BattleEvent, BattleOutcome, BattlePhase, BattleState, EventBus,
};
use crate::battle::stats::effective_speed;
use crate::battle::status::{prevents_action, StatusInstance, StatusRules, TickEffect};
use crate::catalog::MoveCatalog;
use crate::side::PlayerAction;
use schema::ElementType;

/// Resolve one full turn under the default rule constants.
///
/// The input snapshot is never mutated; the successor snapshot carries
/// the incremented turn number, the updated sides, and the ordered event
/// log for this turn. Feeding the same snapshot, actions, and seed in
/// again always produces an identical successor.
///
/// The RNG stream is consumed in a fixed order:
/// 1. one draw if the two actions tie on rank, priority, and speed;
/// 2. per action, in resolution order: action-prevention (only when the
///    actor's status rule is probabilistic), then hit, then critical,
///    then damage variance, then status-application chance, each drawn
///    only when the preceding step calls for it;
/// 3. end-of-turn ticks consume nothing.
///
/// Malformed actions (unknown move, cooling-down move, bad switch
/// target) degrade to an `ActionFailed` event and consume no draws, so a
/// buggy caller cannot desynchronize a replay.
pub fn simulate_turn(
    catalog: &MoveCatalog,
    state: &BattleState,
    action1: &PlayerAction,
    action2: &PlayerAction,
    seed: u64,
) -> BattleState {
    simulate_turn_with_config(catalog, state, action1, action2, seed, &BattleConfig::default())
}

/// [`simulate_turn`] with caller-supplied rule constants.
pub fn simulate_turn_with_config(
    catalog: &MoveCatalog,
    state: &BattleState,
    action1: &PlayerAction,
    action2: &PlayerAction,
    seed: u64,
    config: &BattleConfig,
) -> BattleState {
    // Terminal states are absorbing: no events, no turn increment.
    if state.result != BattleOutcome::Ongoing {
        return state.clone();
    }

    let mut next = state.clone();
    next.phase = BattlePhase::Resolving;

    let mut rng = TurnRng::new(seed);
    let mut bus = EventBus::new();
    bus.push(BattleEvent::TurnStarted {
        turn_number: next.turn_number + 1,
    });

    // The creature each action was chosen for. If it faints before its
    // action executes, the action is skipped rather than handed to the
    // promoted replacement.
    let actor_ids: [Option<String>; 2] = [
        next.sides[0].active.as_ref().map(|c| c.instance_id.clone()),
        next.sides[1].active.as_ref().map(|c| c.instance_id.clone()),
    ];

    let actions = [action1, action2];
    let order = determine_order(&next, catalog, &actions, &mut rng);

    for &side_index in &order {
        if next.result != BattleOutcome::Ongoing {
            break;
        }
        execute_action(
            &mut next,
            catalog,
            config,
            side_index,
            actor_ids[side_index].as_deref(),
            actions[side_index],
            &mut bus,
            &mut rng,
        );
        update_outcome(&mut next, &mut bus);
    }

    if next.result == BattleOutcome::Ongoing {
        end_of_turn(&mut next, &mut bus);
        update_outcome(&mut next, &mut bus);
    }

    next.turn_number += 1;
    bus.push(BattleEvent::TurnEnded {
        turn_number: next.turn_number,
    });

    next.phase = if next.result == BattleOutcome::Ongoing {
        BattlePhase::AwaitingActions
    } else {
        BattlePhase::Finished
    };
    next.last_turn_events = bus.into_events();
    next
}

/// Sort key for action ordering: switches outrank moves, then move
/// priority, then effective speed, each descending.
fn action_sort_key(
    state: &BattleState,
    catalog: &MoveCatalog,
    side_index: usize,
    action: &PlayerAction,
) -> (u8, i8, u16) {
    let speed = state.sides[side_index]
        .active
        .as_ref()
        .map(effective_speed)
        .unwrap_or(0);
    match action {
        PlayerAction::Switch { .. } => (1, 0, speed),
        PlayerAction::UseMove { move_id } => {
            let priority = catalog.get(move_id).map(|m| m.priority).unwrap_or(0);
            (0, priority, speed)
        }
    }
}

/// Decide which side acts first. A full tie on the sort key is broken by
/// a single RNG draw; array position never decides.
fn determine_order(
    state: &BattleState,
    catalog: &MoveCatalog,
    actions: &[&PlayerAction; 2],
    rng: &mut TurnRng,
) -> [usize; 2] {
    let key0 = action_sort_key(state, catalog, 0, actions[0]);
    let key1 = action_sort_key(state, catalog, 1, actions[1]);
    if key0 > key1 {
        [0, 1]
    } else if key1 > key0 {
        [1, 0]
    } else if rng.chance(0.5) {
        [0, 1]
    } else {
        [1, 0]
    }
}

fn execute_action(
    next: &mut BattleState,
    catalog: &MoveCatalog,
    config: &BattleConfig,
    side_index: usize,
    actor_id: Option<&str>,
    action: &PlayerAction,
    bus: &mut EventBus,
    rng: &mut TurnRng,
) {
    match action {
        PlayerAction::Switch {
            switch_to_instance_id,
        } => execute_switch(next, side_index, switch_to_instance_id, bus),
        PlayerAction::UseMove { move_id } => {
            execute_move(next, catalog, config, side_index, actor_id, move_id, bus, rng)
        }
    }
}

fn execute_switch(
    next: &mut BattleState,
    side_index: usize,
    target_id: &str,
    bus: &mut EventBus,
) {
    let old_instance_id = next.sides[side_index]
        .active
        .as_ref()
        .map(|c| c.instance_id.clone());
    if next.sides[side_index].switch_to(target_id) {
        bus.push(BattleEvent::CreatureSwitched {
            side_index,
            old_instance_id,
            new_instance_id: target_id.to_string(),
        });
    } else {
        bus.push(BattleEvent::ActionFailed {
            side_index,
            reason: ActionFailureReason::InvalidSwitchTarget {
                instance_id: target_id.to_string(),
            },
        });
    }
}

#[allow(clippy::too_many_arguments)]
fn execute_move(
    next: &mut BattleState,
    catalog: &MoveCatalog,
    config: &BattleConfig,
    side_index: usize,
    actor_id: Option<&str>,
    move_id: &str,
    bus: &mut EventBus,
    rng: &mut TurnRng,
) {
    let fail = |bus: &mut EventBus, reason: ActionFailureReason| {
        bus.push(BattleEvent::ActionFailed { side_index, reason });
    };

    let Some(attacker) = next.sides[side_index].active.clone() else {
        fail(bus, ActionFailureReason::NoActiveCreature);
        return;
    };
    if attacker.is_fainted() || Some(attacker.instance_id.as_str()) != actor_id {
        fail(bus, ActionFailureReason::CreatureFainted);
        return;
    }
    if !attacker.knows_move(move_id) {
        fail(
            bus,
            ActionFailureReason::UnknownMove {
                move_id: move_id.to_string(),
            },
        );
        return;
    }
    let turns_remaining = attacker.cooldown_for(move_id);
    if turns_remaining > 0 {
        fail(
            bus,
            ActionFailureReason::MoveOnCooldown {
                move_id: move_id.to_string(),
                turns_remaining,
            },
        );
        return;
    }
    let Some(move_data) = catalog.get(move_id).cloned() else {
        fail(
            bus,
            ActionFailureReason::UnknownMove {
                move_id: move_id.to_string(),
            },
        );
        return;
    };

    if let Some(status) = attacker.status {
        if prevents_action(Some(&status), rng) {
            fail(bus, ActionFailureReason::StatusPrevented { status: status.kind });
            return;
        }
    }

    bus.push(BattleEvent::MoveUsed {
        side_index,
        instance_id: attacker.instance_id.clone(),
        move_id: move_id.to_string(),
    });
    if let Some(active) = next.sides[side_index].active.as_mut() {
        active.set_cooldown(move_id, move_data.cooldown);
    }

    let defender_index = 1 - side_index;
    let Some(defender) = next.sides[defender_index].active.clone() else {
        fail(bus, ActionFailureReason::CreatureFainted);
        return;
    };
    if defender.is_fainted() {
        fail(bus, ActionFailureReason::CreatureFainted);
        return;
    }

    let type_multiplier = ElementType::effectiveness(move_data.element, defender.element);
    if move_data.is_damaging() && type_multiplier == 0.0 {
        bus.push(BattleEvent::NoEffect);
        return;
    }

    if !resolve_hit(&attacker, &defender, &move_data, config, rng) {
        bus.push(BattleEvent::MoveMissed {
            side_index,
            instance_id: attacker.instance_id.clone(),
            move_id: move_id.to_string(),
        });
        return;
    }

    if move_data.is_damaging() {
        let is_critical = resolve_critical(&attacker, config, rng);
        if is_critical {
            bus.push(BattleEvent::CriticalHit {
                side_index,
                instance_id: attacker.instance_id.clone(),
                move_id: move_id.to_string(),
            });
        }
        let damage = resolve_damage(
            &attacker,
            &defender,
            defender.element,
            &move_data,
            is_critical,
            config,
            rng,
        );
        if type_multiplier > 1.0 {
            bus.push(BattleEvent::SuperEffective {
                multiplier: type_multiplier,
            });
        } else if type_multiplier < 1.0 {
            bus.push(BattleEvent::NotVeryEffective {
                multiplier: type_multiplier,
            });
        }

        let mut fainted = false;
        if let Some(target) = next.sides[defender_index].active.as_mut() {
            fainted = target.take_damage(damage);
            bus.push(BattleEvent::DamageDealt {
                side_index: defender_index,
                instance_id: target.instance_id.clone(),
                amount: damage,
                remaining_hp: target.current_hp,
            });
        }
        if fainted {
            faint_active(next, defender_index, bus);
        }
    }

    if let Some(kind) = move_data.status_effect {
        // Only the creature the move actually struck can be afflicted;
        // a promoted replacement is not a valid target.
        let target_standing = next.sides[defender_index]
            .active
            .as_ref()
            .is_some_and(|c| c.instance_id == defender.instance_id && !c.is_fainted());
        if target_standing && rng.chance(move_data.status_chance) {
            if let Some(target) = next.sides[defender_index].active.as_mut() {
                target.apply_status(StatusInstance::new(kind));
                bus.push(BattleEvent::StatusApplied {
                    side_index: defender_index,
                    instance_id: target.instance_id.clone(),
                    status: kind,
                });
            }
        }
    }
}

/// Retire a fainted active creature and promote the front of the bench.
fn faint_active(next: &mut BattleState, side_index: usize, bus: &mut EventBus) {
    let Some(active) = next.sides[side_index].active.as_ref() else {
        return;
    };
    if !active.is_fainted() {
        return;
    }
    bus.push(BattleEvent::CreatureFainted {
        side_index,
        instance_id: active.instance_id.clone(),
    });
    if let Some(promoted) = next.sides[side_index].retire_active() {
        bus.push(BattleEvent::CreatureSwitched {
            side_index,
            old_instance_id: None,
            new_instance_id: promoted,
        });
    }
}

/// End-of-turn bookkeeping for both sides, in fixed side order: cooldown
/// decrements, then status tick damage or healing, then status duration
/// countdown. Consumes no RNG draws.
fn end_of_turn(next: &mut BattleState, bus: &mut EventBus) {
    for side_index in 0..2 {
        let mut fainted = false;
        if let Some(active) = next.sides[side_index].active.as_mut() {
            active.tick_cooldowns();

            if let Some(status) = active.status {
                let rules = StatusRules::for_kind(status.kind);
                match rules.tick {
                    TickEffect::Damage { divisor } => {
                        let amount = (active.max_hp / divisor).max(1);
                        fainted = active.take_damage(amount);
                        bus.push(BattleEvent::StatusDamage {
                            side_index,
                            instance_id: active.instance_id.clone(),
                            status: status.kind,
                            amount,
                            remaining_hp: active.current_hp,
                        });
                    }
                    TickEffect::Heal { divisor } => {
                        let healed = active.heal((active.max_hp / divisor).max(1));
                        if healed > 0 {
                            bus.push(BattleEvent::StatusHeal {
                                side_index,
                                instance_id: active.instance_id.clone(),
                                status: status.kind,
                                amount: healed,
                                new_hp: active.current_hp,
                            });
                        }
                    }
                    TickEffect::None => {}
                }

                if !fainted {
                    let remaining = status.turns_remaining.saturating_sub(1);
                    if remaining == 0 {
                        active.clear_status();
                        bus.push(BattleEvent::StatusExpired {
                            side_index,
                            instance_id: active.instance_id.clone(),
                            status: status.kind,
                        });
                    } else {
                        active.status = Some(StatusInstance {
                            kind: status.kind,
                            turns_remaining: remaining,
                        });
                    }
                }
            }
        }
        if fainted {
            faint_active(next, side_index, bus);
        }
    }
}

/// Check win conditions, recording the outcome and the closing event the
/// first time a side runs out of creatures.
fn update_outcome(next: &mut BattleState, bus: &mut EventBus) {
    if next.result != BattleOutcome::Ongoing {
        return;
    }
    let alive = [
        next.sides[0].has_living_creatures(),
        next.sides[1].has_living_creatures(),
    ];
    let (result, winner) = match alive {
        [true, true] => return,
        [true, false] => (BattleOutcome::SideOneWin, Some(0)),
        [false, true] => (BattleOutcome::SideTwoWin, Some(1)),
        [false, false] => (BattleOutcome::Draw, None),
    };
    next.result = result;
    bus.push(BattleEvent::BattleEnded { winner });
}
