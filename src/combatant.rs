use crate::battle::rng::BattleRng;
use schema::{Archetype, FighterStats};
use serde::Serialize;
use tracing::debug;

/// What happened when one combatant swung at another.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttackOutcome {
    pub evaded: bool,
    pub damage: u32,
    pub is_max_damage: bool,
}

/// A fighter inside a battle: fixed stats plus the mutable health and stun flag.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Combatant {
    stats: FighterStats,
    health: i32,
    stunned: bool,
}

impl Combatant {
    pub fn new(stats: FighterStats, health: i32) -> Self {
        debug_assert!(stats.is_valid(), "invalid stats for {}", stats.name());
        Self {
            stats,
            health,
            stunned: false,
        }
    }

    pub fn from_archetype(archetype: Archetype, health: i32) -> Self {
        Self::new(archetype.stats(), health)
    }

    pub fn name(&self) -> &'static str {
        self.stats.name()
    }

    pub fn stats(&self) -> &FighterStats {
        &self.stats
    }

    pub fn hp(&self) -> i32 {
        self.health
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    pub fn is_stunned(&self) -> bool {
        self.stunned
    }

    /// Called once when a stunned combatant's turn is skipped.
    pub fn clear_stun(&mut self) {
        self.stunned = false;
    }

    /// Draws a damage value from this combatant's inclusive range.
    pub fn roll_damage(&self, rng: &mut impl BattleRng) -> u32 {
        rng.roll_range(self.stats.min_damage(), self.stats.max_damage(), "damage")
    }

    /// Returns true if an incoming hit is evaded.
    pub fn resolve_evasion(&self, rng: &mut impl BattleRng) -> bool {
        rng.roll_fraction("evasion") < self.stats.evasion_probability()
    }

    /// Applies an incoming hit unless it is evaded. Returns true on evasion.
    ///
    /// This is the only place health changes.
    pub fn receive_damage(&mut self, amount: u32, rng: &mut impl BattleRng) -> bool {
        if self.resolve_evasion(rng) {
            debug!(fighter = self.name(), amount, "hit evaded");
            return true;
        }
        let amount = i32::try_from(amount).unwrap_or(i32::MAX);
        self.health = self.health.saturating_sub(amount);
        false
    }

    /// Rolls damage and applies it to `opponent`.
    ///
    /// A connecting max-damage hit stuns the opponent for its next turn, but
    /// only while it is still standing.
    pub fn attack(&self, opponent: &mut Combatant, rng: &mut impl BattleRng) -> AttackOutcome {
        let damage = self.roll_damage(rng);
        let evaded = opponent.receive_damage(damage, rng);
        let is_max_damage = damage == self.stats.max_damage();

        if !evaded && is_max_damage && opponent.is_alive() {
            debug!(attacker = self.name(), target = opponent.name(), "max damage stun");
            opponent.stunned = true;
        }

        AttackOutcome {
            evaded,
            damage,
            is_max_damage,
        }
    }
}
