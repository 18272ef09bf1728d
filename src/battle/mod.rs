pub mod engine;
pub mod narration;
pub mod pacing;
pub mod rng;
pub mod runner;
pub mod state;

#[cfg(test)]
mod tests;
