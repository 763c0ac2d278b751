//! Steppe Arena - Turn-Based Battle Simulation

pub mod arena;
pub mod combat;
pub mod core;
