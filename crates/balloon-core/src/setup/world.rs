//! World Construction
//!
//! Builds the fixed roster: adversaries first, then good agents, then landmarks.

use crate::components::{Agent, CommState, Landmark, World};
use crate::config::ScenarioConfig;

/// Build a world with the static attributes of every entity set.
///
/// Positions are left at the origin; call [`reset_world`](super::reset_world)
/// before using the world.
pub fn build_world(config: &ScenarioConfig) -> World {
    let population = &config.population;
    let num_agents = population.num_agents();
    let mut world = World::new(population.vocabulary_size);

    world.agents = (0..num_agents)
        .map(|i| {
            let adversary = i < population.num_adversaries;
            let profile = if adversary {
                &config.adversary
            } else {
                &config.good
            };
            Agent::new(
                i,
                adversary,
                profile,
                population.num_balloons,
                CommState::zeros(num_agents, population.vocabulary_size),
            )
        })
        .collect();

    world.landmarks = (0..population.num_landmarks)
        .map(|i| Landmark::new(i, &config.landmarks))
        .collect();

    tracing::debug!(
        agents = world.agents.len(),
        adversaries = population.num_adversaries,
        landmarks = world.landmarks.len(),
        "built balloon world"
    );

    world
}
