//! Enemy and boss behavior for STARFALL.
//!
//! Implements enemy steering rules, boss phase state machines, and
//! ship class profiles as pure functions over plain data.

pub mod boss;
pub mod profiles;
pub mod steering;

pub use starfall_core as core;

#[cfg(test)]
mod tests;
