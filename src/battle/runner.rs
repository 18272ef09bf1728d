use crate::battle::engine::{resolve_half_turn, TURN_ORDER};
use crate::battle::narration::Narrator;
use crate::battle::pacing::Pacer;
use crate::battle::rng::BattleRng;
use crate::battle::state::{BattleEvent, Encounter, EventBus, GameState};
use crate::errors::{BattleEngineError, BattleResult, BattleStateError};
use tracing::info;

/// High-level battle driver: alternates half-turns until a fighter drops,
/// pacing between half-turns and narrating every step.
#[derive(Debug)]
pub struct BattleRunner<P: Pacer> {
    encounter: Encounter,
    pacer: P,
}

impl<P: Pacer> BattleRunner<P> {
    pub fn new(encounter: Encounter, pacer: P) -> Self {
        Self { encounter, pacer }
    }

    pub fn encounter(&self) -> &Encounter {
        &self.encounter
    }

    pub fn pacer(&self) -> &P {
        &self.pacer
    }

    /// True once either fighter has dropped.
    pub fn is_battle_ended(&self) -> bool {
        self.encounter.game_state().is_over()
    }

    /// Index of the fighter left standing, if the duel is decided.
    pub fn get_winner(&self) -> Option<usize> {
        self.encounter.game_state().winner()
    }

    /// Runs the battle to its final result.
    ///
    /// Fighter 0 opens every round. A round stops early as soon as either
    /// fighter is down, and no beat is waited after the deciding half-turn.
    /// A finished battle cannot be run again.
    pub fn run(
        &mut self,
        rng: &mut impl BattleRng,
        narrator: &mut impl Narrator,
    ) -> BattleResult<GameState> {
        if self.is_battle_ended() {
            return Err(BattleStateError::BattleFinished.into());
        }

        let [first, second] = self.encounter.fighters();
        info!(
            first = first.name(),
            first_hp = first.hp(),
            second = second.name(),
            second_hp = second.hp(),
            "battle started"
        );

        let mut opening = EventBus::new();
        opening.push(BattleEvent::BattleStarted);
        opening.push(self.encounter.health_snapshot());
        self.narrate(narrator, &opening)?;

        'battle: while self.encounter.all_standing() {
            for attacker_index in TURN_ORDER {
                let bus = resolve_half_turn(&mut self.encounter, attacker_index, rng)?;
                self.narrate(narrator, &bus)?;

                if !self.encounter.all_standing() {
                    break 'battle;
                }
                self.pacer.beat();
            }
        }

        let outcome = self.encounter.game_state();
        let mut closing = EventBus::new();
        closing.push(BattleEvent::BattleEnded);
        closing.push(BattleEvent::OutcomeDeclared { outcome });
        closing.push(self.encounter.health_snapshot());
        self.narrate(narrator, &closing)?;

        Ok(outcome)
    }

    fn narrate(&self, narrator: &mut impl Narrator, bus: &EventBus) -> BattleResult<()> {
        narrator
            .narrate(&self.encounter, bus)
            .map_err(BattleEngineError::Narration)
    }
}
