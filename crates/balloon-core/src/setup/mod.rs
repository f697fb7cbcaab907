//! World Setup
//!
//! Roster construction and per-episode re-randomization.

pub mod reset;
pub mod world;

pub use reset::*;
pub use world::*;
