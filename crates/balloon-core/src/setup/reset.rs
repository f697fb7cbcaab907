//! Episode Reset
//!
//! Re-randomizes per-episode state. Static attributes and counts are untouched.

use rand::Rng;

use crate::components::{Vec2, World};
use crate::config::ScenarioConfig;

/// Sample a point uniformly from the square `[-extent, extent]^2`
fn uniform_in_square<R: Rng>(rng: &mut R, extent: f32) -> Vec2 {
    if !extent.is_finite() || extent <= 0.0 {
        return Vec2::ZERO;
    }
    Vec2::new(
        rng.gen_range(-extent..=extent),
        rng.gen_range(-extent..=extent),
    )
}

/// Start a new episode.
///
/// Agents are recolored by team, respawned in the arena square with zero
/// velocity, refilled to their initial balloon count, and have their message
/// state cleared. Non-boundary landmarks are respawned in the landmark square.
pub fn reset_world<R: Rng>(world: &mut World, config: &ScenarioConfig, rng: &mut R) {
    for agent in world.agents.iter_mut() {
        agent.color = if agent.adversary {
            config.adversary.color
        } else {
            config.good.color
        };
    }
    for landmark in world.landmarks.iter_mut() {
        landmark.color = config.landmarks.color;
    }

    for agent in world.agents.iter_mut() {
        agent.position = uniform_in_square(rng, config.arena.agent_spawn_extent);
        agent.velocity = Vec2::ZERO;
        agent.num_balloons = agent.init_num_balloons();
        agent.comm.reset();
    }

    for landmark in world.landmarks.iter_mut().filter(|l| !l.boundary) {
        landmark.position = uniform_in_square(rng, config.landmarks.spawn_extent);
        landmark.velocity = Vec2::ZERO;
    }

    tracing::debug!(
        agents = world.agents.len(),
        landmarks = world.landmarks.len(),
        "reset balloon world"
    );
}
