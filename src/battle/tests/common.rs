use crate::battle::narration::Narrator;
use crate::battle::pacing::Pacer;
use crate::battle::rng::{BattleRng, TurnRng, FRACTION_SCALE};
use crate::battle::runner::BattleRunner;
use crate::battle::state::{BattleEvent, Encounter, EventBus, GameState};
use crate::combatant::Combatant;
use schema::Archetype;
use std::io;

/// Scripted evasion draw that always connects (0.999).
pub const NEVER_EVADE: u32 = FRACTION_SCALE - 1;
/// Scripted evasion draw that always evades (0.0).
pub const ALWAYS_EVADE: u32 = 0;

/// Creates the standard Deadpool (index 0) vs Wolverine (index 1) encounter.
pub fn create_test_encounter(deadpool_hp: i32, wolverine_hp: i32) -> Encounter {
    match Encounter::new(
        Combatant::from_archetype(Archetype::Deadpool, deadpool_hp),
        Combatant::from_archetype(Archetype::Wolverine, wolverine_hp),
    ) {
        Ok(encounter) => encounter,
        Err(err) => panic!("Failed to create test encounter: {}", err),
    }
}

/// Draws for an attack that connects for `damage`.
pub fn hit(damage: u32) -> [u32; 2] {
    [damage, NEVER_EVADE]
}

/// Draws for an attack of `damage` that the defender evades.
pub fn evaded(damage: u32) -> [u32; 2] {
    [damage, ALWAYS_EVADE]
}

/// Flattens per-attack draws into a scripted `TurnRng`.
pub fn script(attacks: &[[u32; 2]]) -> TurnRng {
    TurnRng::new_for_test(attacks.iter().flatten().copied().collect())
}

/// Always rolls the top of the range and never lets the defender evade.
pub struct MaxDamageRng;

impl BattleRng for MaxDamageRng {
    fn roll_range(&mut self, _min: u32, max: u32, _reason: &str) -> u32 {
        max
    }

    fn roll_fraction(&mut self, _reason: &str) -> f64 {
        f64::from(NEVER_EVADE) / f64::from(FRACTION_SCALE)
    }
}

/// Counts beats instead of sleeping.
#[derive(Debug, Default)]
pub struct CountingPacer {
    pub beats: usize,
}

impl Pacer for CountingPacer {
    fn beat(&mut self) {
        self.beats += 1;
    }
}

/// Keeps every narrated event and its formatted line.
#[derive(Debug, Default)]
pub struct RecordingNarrator {
    pub events: Vec<BattleEvent>,
    pub lines: Vec<String>,
}

impl RecordingNarrator {
    pub fn health_snapshots(&self) -> Vec<[i32; 2]> {
        self.events
            .iter()
            .filter_map(|event| match event {
                BattleEvent::HealthSnapshot { hp } => Some(*hp),
                _ => None,
            })
            .collect()
    }

    pub fn count(&self, predicate: impl Fn(&BattleEvent) -> bool) -> usize {
        self.events.iter().filter(|&event| predicate(event)).count()
    }
}

impl Narrator for RecordingNarrator {
    fn narrate(&mut self, encounter: &Encounter, events: &EventBus) -> io::Result<()> {
        self.events.extend_from_slice(events.events());
        self.lines.extend(events.formatted_lines(encounter));
        Ok(())
    }
}

/// Runs an encounter to completion with a counting pacer and a recording narrator.
pub fn run_battle(
    encounter: Encounter,
    rng: &mut impl BattleRng,
) -> (GameState, BattleRunner<CountingPacer>, RecordingNarrator) {
    let mut runner = BattleRunner::new(encounter, CountingPacer::default());
    let mut narrator = RecordingNarrator::default();
    let outcome = match runner.run(rng, &mut narrator) {
        Ok(outcome) => outcome,
        Err(err) => panic!("Expected the battle to finish but got error: {}", err),
    };
    (outcome, runner, narrator)
}
