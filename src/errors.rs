use std::io;
use thiserror::Error;

/// Main error type for the Arena Duel battle engine
#[derive(Debug, Error)]
pub enum BattleEngineError {
    /// Error related to invalid battle state
    #[error("Battle state error: {0}")]
    BattleState(#[from] BattleStateError),
    /// Error while reading a value from the console
    #[error("Input error: {0}")]
    Input(#[from] InputError),
    /// Narration could not be written to its output
    #[error("Narration error: {0}")]
    Narration(#[source] io::Error),
}

/// Errors related to battle state validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BattleStateError {
    /// A fighter entered the battle without any HP left
    #[error("{name} cannot enter the battle with {hp} HP")]
    FighterDefeated { name: String, hp: i32 },
    /// Invalid fighter index
    #[error("Invalid fighter index: {0}")]
    InvalidFighterIndex(usize),
    /// The battle already reached a final result
    #[error("Battle is already over")]
    BattleFinished,
}

/// Errors related to console input
#[derive(Debug, Error)]
pub enum InputError {
    /// The input stream closed before a valid value was entered
    #[error("Input ended before a value was entered")]
    Exhausted,
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Type alias for Results using BattleEngineError
pub type BattleResult<T> = Result<T, BattleEngineError>;
