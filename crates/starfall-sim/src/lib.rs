//! Simulation engine for STARFALL.
//!
//! Owns the hecs ECS world, runs systems at a fixed tick rate,
//! and produces GameStateSnapshots for the frontend.

pub mod achievements;
pub mod effects;
pub mod engine;
pub mod progression;
pub mod stars;
pub mod systems;
pub mod world_setup;

pub use engine::GameSession;
pub use starfall_core as core;
