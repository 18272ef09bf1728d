// In: src/lib.rs

//! Arena Duel Battle Engine
//!
//! A two-fighter, turn-based duel: random damage rolls, evasion, a one-turn
//! stun on maximum damage, and a narrated play-by-play until one fighter
//! drops. Randomness, pacing and narration are injected so battles can be
//! scripted in tests.

// --- MODULE DECLARATIONS ---
pub mod battle;
pub mod combatant;
pub mod console;
pub mod errors;
pub mod session;

// --- PUBLIC API RE-EXPORTS ---

// --- From the `schema` crate ---
pub use schema::{Archetype, FighterStats, DEADPOOL_STATS, WOLVERINE_STATS};

// --- From this crate's modules (`src/`) ---

// Core battle engine functions and state.
pub use battle::engine::{opponent_of, resolve_half_turn, TURN_ORDER};
pub use battle::runner::BattleRunner;
pub use battle::state::{BattleEvent, Encounter, EventBus, GameState};

// Injected collaborators.
pub use battle::narration::{JsonNarrator, Narrator, TextNarrator};
pub use battle::pacing::{NoPacing, Pacer, SleepPacer, DEFAULT_BEAT};
pub use battle::rng::{BattleRng, RandomRng, TurnRng};

// Core runtime types for a battle.
pub use combatant::{AttackOutcome, Combatant};

// Console input and the full console duel.
pub use console::read_positive_int;
pub use session::{run_duel, DuelSetup, OutputFormat};

// Crate-specific error and result types.
pub use errors::{BattleEngineError, BattleResult, BattleStateError, InputError};
