//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are free functions taking `&mut World` (or `&World` for
//! read-only). They do not own state — persistent state lives in
//! components or on the `GameSession`.

pub mod cleanup;
pub mod collision;
pub mod enemy_ai;
pub mod movement;
pub mod player;
pub mod snapshot;
pub mod spawner;
