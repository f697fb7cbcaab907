//! Snapshot Generation
//!
//! Converts live world state into the serializable records of `balloon-events`.

use balloon_events::{
    generate_snapshot_id, AgentSnapshot, LandmarkSnapshot, StepRecord, WorldSnapshot,
};

use crate::components::World;
use crate::error::ScenarioError;
use crate::systems::{observe, reward};

/// Capture positions and balloon counts of every entity
pub fn world_snapshot(world: &World, episode: u64, seed: u64) -> WorldSnapshot {
    WorldSnapshot {
        snapshot_id: generate_snapshot_id(episode),
        episode,
        seed,
        agents: world
            .agents
            .iter()
            .map(|a| AgentSnapshot {
                name: a.name.clone(),
                index: a.index,
                team: a.team().id(),
                position: a.position,
                velocity: a.velocity,
                num_balloons: a.num_balloons,
            })
            .collect(),
        landmarks: world
            .landmarks
            .iter()
            .map(|l| LandmarkSnapshot {
                name: l.name.clone(),
                position: l.position,
                boundary: l.boundary,
            })
            .collect(),
    }
}

/// Reward and observation of every agent at one tick.
///
/// With `padded` set, observations use the fixed-width layout sized from the
/// world.
pub fn step_records(
    world: &World,
    episode: u64,
    tick: u64,
    padded: bool,
) -> Result<Vec<StepRecord>, ScenarioError> {
    let layout = crate::systems::ObservationLayout::for_world(world);

    world
        .agents
        .iter()
        .map(|agent| {
            let observation = observe(agent, world)?;
            let vector = if padded {
                observation.to_padded(&layout)
            } else {
                observation.to_vec()
            };
            Ok(StepRecord {
                episode,
                tick,
                agent: agent.name.clone(),
                reward: reward(agent, world),
                observation: vector,
                info: observation.into_info(),
            })
        })
        .collect()
}
