// Arena Duel Schema - Shared type definitions
// This crate holds the fixed fighter data shared by the battle engine and
// anything that needs to describe the roster without pulling in the engine.

// Re-export the main types
pub use fighter_data::*;

pub mod fighter_data;
