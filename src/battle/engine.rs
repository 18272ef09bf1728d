use crate::battle::rng::BattleRng;
use crate::battle::state::{BattleEvent, Encounter, EventBus, GameState};
use crate::errors::BattleStateError;
use tracing::{debug, info};

/// Fighter indices in the order they attack within one round.
pub const TURN_ORDER: [usize; 2] = [0, 1];

/// Index of the fighter facing `index`.
pub fn opponent_of(index: usize) -> usize {
    1 - index
}

/// Resolves one half-turn: the fighter at `attacker_index` either loses the
/// turn to a stun or attacks the other fighter.
///
/// Advances the turn counter and moves the encounter into its final state as
/// soon as a fighter goes down. Returns the events of the half-turn.
pub fn resolve_half_turn(
    encounter: &mut Encounter,
    attacker_index: usize,
    rng: &mut impl BattleRng,
) -> Result<EventBus, BattleStateError> {
    if attacker_index > 1 {
        return Err(BattleStateError::InvalidFighterIndex(attacker_index));
    }
    if encounter.game_state.is_over() {
        return Err(BattleStateError::BattleFinished);
    }

    let defender_index = opponent_of(attacker_index);
    let mut bus = EventBus::new();
    bus.push(BattleEvent::TurnStarted {
        turn_number: encounter.turn_number,
        attacker: attacker_index,
        defender: defender_index,
    });

    let (attacker, defender) = encounter.split_fighters_mut(attacker_index);
    if attacker.is_stunned() {
        debug!(fighter = attacker.name(), "turn skipped by stun");
        attacker.clear_stun();
        bus.push(BattleEvent::TurnSkipped {
            fighter: attacker_index,
        });
    } else {
        let outcome = attacker.attack(defender, rng);
        if outcome.evaded {
            bus.push(BattleEvent::AttackEvaded {
                attacker: attacker_index,
                defender: defender_index,
            });
        } else {
            bus.push(BattleEvent::DamageDealt {
                attacker: attacker_index,
                target: defender_index,
                damage: outcome.damage,
                max_damage: outcome.is_max_damage,
                remaining_hp: defender.hp(),
            });
            if defender.is_stunned() {
                bus.push(BattleEvent::FighterStunned {
                    target: defender_index,
                });
            }
            if !defender.is_alive() {
                debug!(fighter = defender.name(), hp = defender.hp(), "fighter defeated");
                bus.push(BattleEvent::FighterDefeated {
                    fighter: defender_index,
                });
            }
        }
    }

    bus.push(encounter.health_snapshot());
    finalize_half_turn(encounter);
    Ok(bus)
}

fn finalize_half_turn(encounter: &mut Encounter) {
    encounter.turn_number += 1;

    let [first, second] = &encounter.fighters;
    let state = GameState::from_standing(first.is_alive(), second.is_alive());
    if state.is_over() {
        info!(outcome = ?state, turns = encounter.turn_number - 1, "battle decided");
        encounter.game_state = state;
    }
}
