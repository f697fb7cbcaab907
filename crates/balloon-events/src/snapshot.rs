//! Snapshot Types
//!
//! Serialization structs for world snapshots and per-agent step records.
//!
//! Records are written one per line (JSONL) so a run can be replayed or
//! inspected without the scenario crate.

use serde::{Deserialize, Serialize};

use crate::{ObservationInfo, Vec2};

/// Generates a snapshot ID from the episode number.
pub fn generate_snapshot_id(episode: u64) -> String {
    format!("snap_{:06}", episode)
}

/// Agent state at snapshot time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentSnapshot {
    pub name: String,
    pub index: usize,
    /// 0 for adversaries, 1 for good agents
    pub team: u8,
    pub position: Vec2,
    pub velocity: Vec2,
    pub num_balloons: u32,
}

/// Landmark state at snapshot time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LandmarkSnapshot {
    pub name: String,
    pub position: Vec2,
    #[serde(default)]
    pub boundary: bool,
}

/// Whole-arena snapshot, taken at the start of an episode
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldSnapshot {
    pub snapshot_id: String,
    pub episode: u64,
    pub seed: u64,
    pub agents: Vec<AgentSnapshot>,
    #[serde(default)]
    pub landmarks: Vec<LandmarkSnapshot>,
}

/// One agent's reward and observation for one tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepRecord {
    pub episode: u64,
    pub tick: u64,
    pub agent: String,
    pub reward: f32,
    pub observation: Vec<f32>,
    pub info: ObservationInfo,
}

/// A single JSONL line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "record", rename_all = "snake_case")]
pub enum Record {
    World(WorldSnapshot),
    Step(StepRecord),
}
