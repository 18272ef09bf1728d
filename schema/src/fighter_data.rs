use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoStaticStr};

/// Fixed combat numbers for one kind of fighter.
///
/// Damage is rolled uniformly from `min_damage..=max_damage`; a hit is evaded
/// when a uniform draw from `[0, 1)` falls below `evasion_probability`.
///
/// Fields are private: the only stat blocks are the archetype constants.
///
/// ```compile_fail
/// let stats = schema::FighterStats {
///     name: "Cable",
///     min_damage: 50,
///     max_damage: 5,
///     evasion_probability: 1.0,
/// };
/// ```
#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct FighterStats {
    name: &'static str,
    min_damage: u32,
    max_damage: u32,
    evasion_probability: f64,
}

impl FighterStats {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn min_damage(&self) -> u32 {
        self.min_damage
    }

    pub fn max_damage(&self) -> u32 {
        self.max_damage
    }

    pub fn evasion_probability(&self) -> f64 {
        self.evasion_probability
    }

    /// Returns true if the damage range is non-empty and positive and the
    /// evasion probability lies in `[0, 1)`.
    pub fn is_valid(&self) -> bool {
        self.min_damage > 0
            && self.min_damage <= self.max_damage
            && (0.0..1.0).contains(&self.evasion_probability)
    }
}

pub const DEADPOOL_STATS: FighterStats = FighterStats {
    name: "Deadpool",
    min_damage: 10,
    max_damage: 100,
    evasion_probability: 0.25,
};

pub const WOLVERINE_STATS: FighterStats = FighterStats {
    name: "Wolverine",
    min_damage: 10,
    max_damage: 120,
    evasion_probability: 0.20,
};

/// The two fighter archetypes that can enter the arena.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(Display, EnumIter, IntoStaticStr)]
pub enum Archetype {
    Deadpool,
    Wolverine,
}

impl Archetype {
    pub fn stats(self) -> FighterStats {
        match self {
            Archetype::Deadpool => DEADPOOL_STATS,
            Archetype::Wolverine => WOLVERINE_STATS,
        }
    }
}
