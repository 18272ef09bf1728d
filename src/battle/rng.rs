use rand::rngs::ThreadRng;
use rand::Rng;
use tracing::trace;

/// Scale used by [`TurnRng`] to turn scripted integers into fractions.
/// A scripted value of `250` is read as the fraction `0.25`.
pub const FRACTION_SCALE: u32 = 1000;

/// Source of every random draw a battle consumes.
///
/// The `reason` string names the mechanic asking for the draw; it shows up in
/// trace logs and in the panic message of an exhausted [`TurnRng`].
pub trait BattleRng {
    /// Uniform integer in `min..=max`.
    fn roll_range(&mut self, min: u32, max: u32, reason: &str) -> u32;

    /// Uniform fraction in `[0, 1)`.
    fn roll_fraction(&mut self, reason: &str) -> f64;
}

/// Uncontrolled randomness backed by any `rand` generator.
#[derive(Debug, Clone)]
pub struct RandomRng<R = ThreadRng> {
    inner: R,
}

impl RandomRng<ThreadRng> {
    pub fn new() -> Self {
        Self { inner: rand::rng() }
    }
}

impl Default for RandomRng<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> RandomRng<R> {
    pub fn from_rng(inner: R) -> Self {
        Self { inner }
    }
}

impl<R: Rng> BattleRng for RandomRng<R> {
    fn roll_range(&mut self, min: u32, max: u32, reason: &str) -> u32 {
        let value = self.inner.random_range(min..=max);
        trace!(reason, value, "rolled range");
        value
    }

    fn roll_fraction(&mut self, reason: &str) -> f64 {
        let value: f64 = self.inner.random();
        trace!(reason, value, "rolled fraction");
        value
    }
}

/// Scripted outcomes consumed in order, one per draw.
///
/// Range draws return the scripted value as-is (it must lie in the requested
/// range). Fraction draws return `value / FRACTION_SCALE`.
#[derive(Debug, Clone)]
pub struct TurnRng {
    outcomes: Vec<u32>,
    index: usize,
}

impl TurnRng {
    pub fn new_for_test(outcomes: Vec<u32>) -> Self {
        Self { outcomes, index: 0 }
    }

    /// Number of scripted outcomes not yet consumed.
    pub fn remaining(&self) -> usize {
        self.outcomes.len() - self.index
    }

    fn next_outcome(&mut self, reason: &str) -> u32 {
        if self.index >= self.outcomes.len() {
            panic!(
                "TurnRng exhausted! Tried to get a value for: '{}'. Need more random values.",
                reason
            );
        }
        let outcome = self.outcomes[self.index];
        trace!(reason, outcome, "consumed scripted outcome");
        self.index += 1;
        outcome
    }
}

impl BattleRng for TurnRng {
    fn roll_range(&mut self, min: u32, max: u32, reason: &str) -> u32 {
        let outcome = self.next_outcome(reason);
        assert!(
            (min..=max).contains(&outcome),
            "scripted value {} for '{}' is outside {}..={}",
            outcome,
            reason,
            min,
            max
        );
        outcome
    }

    fn roll_fraction(&mut self, reason: &str) -> f64 {
        let outcome = self.next_outcome(reason);
        assert!(
            outcome < FRACTION_SCALE,
            "scripted fraction {} for '{}' must be below {}",
            outcome,
            reason,
            FRACTION_SCALE
        );
        f64::from(outcome) / f64::from(FRACTION_SCALE)
    }
}
