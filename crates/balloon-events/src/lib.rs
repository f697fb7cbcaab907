//! Shared data types and serialization for the balloon arena scenario.
//!
//! This crate contains pure data structures with no scenario logic.
//! It is a dependency for the scenario crate and anything that reads its output.

pub mod geometry;
pub mod info;
pub mod snapshot;

pub use geometry::Vec2;

pub use info::{InfoMap, ObservationInfo};

pub use snapshot::{
    generate_snapshot_id, AgentSnapshot, LandmarkSnapshot, Record, StepRecord, WorldSnapshot,
};
