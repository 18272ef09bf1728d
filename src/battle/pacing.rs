use std::thread;
use std::time::Duration;

/// Default pause between half-turns.
pub const DEFAULT_BEAT: Duration = Duration::from_secs(1);

/// Presentation pacing between half-turns. Carries no ordering meaning.
pub trait Pacer {
    /// Wait one beat.
    fn beat(&mut self);
}

/// Blocks the current thread for a fixed duration on every beat.
#[derive(Debug, Clone, Copy)]
pub struct SleepPacer {
    beat: Duration,
}

impl SleepPacer {
    pub fn new(beat: Duration) -> Self {
        Self { beat }
    }
}

impl Pacer for SleepPacer {
    fn beat(&mut self) {
        if !self.beat.is_zero() {
            thread::sleep(self.beat);
        }
    }
}

/// Pacer that never waits.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPacing;

impl Pacer for NoPacing {
    fn beat(&mut self) {}
}
