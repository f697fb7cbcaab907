//! Scenario Entry Points
//!
//! The four calls a simulation host drives: build, reset, reward, observe,
//! plus the diagnostic info accessor.

use rand::rngs::SmallRng;
use rand::SeedableRng;

use balloon_events::{InfoMap, ObservationInfo};

use crate::components::World;
use crate::config::ScenarioConfig;
use crate::error::ScenarioError;
use crate::setup::{build_world, reset_world};
use crate::systems::{observe, reward, Observation};

/// Contract between a scenario and the host that steps the physics.
///
/// Agents are addressed by their roster `index`.
pub trait Scenario {
    /// Build the world and run the first reset
    fn make_world(&mut self) -> World;

    /// Re-randomize per-episode state in place
    fn reset_world(&mut self, world: &mut World);

    fn reward(&self, agent: usize, world: &World) -> Result<f32, ScenarioError>;

    /// Flat observation vector for one agent
    fn observation(&mut self, agent: usize, world: &World) -> Result<Vec<f32>, ScenarioError>;

    /// Labeled breakdown of the latest observation computed for `agent`
    /// this episode. Empty if none has been computed yet.
    ///
    /// Snapshots are kept per agent, so asking for one agent never returns
    /// another agent's view. This differs from a single scenario-wide
    /// snapshot overwritten by whichever agent was observed last.
    fn info(&self, agent: usize, world: &World) -> InfoMap;
}

/// The team balloon scenario
pub struct BalloonScenario {
    config: ScenarioConfig,
    rng: SmallRng,
    /// Latest observation breakdown per agent index, cleared on reset
    last_info: Vec<Option<ObservationInfo>>,
}

impl BalloonScenario {
    /// Create a scenario whose resets are reproducible from `seed`
    pub fn new(config: ScenarioConfig, seed: u64) -> Self {
        Self {
            config,
            rng: SmallRng::seed_from_u64(seed),
            last_info: Vec::new(),
        }
    }

    pub fn config(&self) -> &ScenarioConfig {
        &self.config
    }

    /// Observation with its breakdown attached. Does not touch the info store.
    pub fn observe(&self, agent: usize, world: &World) -> Result<Observation, ScenarioError> {
        observe(world.agent(agent)?, world)
    }
}

impl Default for BalloonScenario {
    fn default() -> Self {
        Self::new(ScenarioConfig::default(), 0)
    }
}

impl Scenario for BalloonScenario {
    fn make_world(&mut self) -> World {
        let mut world = build_world(&self.config);
        self.reset_world(&mut world);
        world
    }

    fn reset_world(&mut self, world: &mut World) {
        reset_world(world, &self.config, &mut self.rng);
        self.last_info.clear();
        self.last_info.resize(world.num_agents(), None);
    }

    fn reward(&self, agent: usize, world: &World) -> Result<f32, ScenarioError> {
        Ok(reward(world.agent(agent)?, world))
    }

    fn observation(&mut self, agent: usize, world: &World) -> Result<Vec<f32>, ScenarioError> {
        let observation = self.observe(agent, world)?;
        let vector = observation.to_vec();

        if self.last_info.len() <= agent {
            self.last_info.resize(agent + 1, None);
        }
        self.last_info[agent] = Some(observation.into_info());
        Ok(vector)
    }

    fn info(&self, agent: usize, _world: &World) -> InfoMap {
        self.last_info
            .get(agent)
            .and_then(Option::as_ref)
            .map(ObservationInfo::to_map)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_make_world_resets() {
        let mut scenario = BalloonScenario::new(ScenarioConfig::default(), 11);
        let world = scenario.make_world();

        assert_eq!(world.agents.len(), 4);
        // Built positions are all at the origin until reset moves them
        assert!(world.agents.iter().any(|a| a.position.norm() > 0.0));
    }

    #[test]
    fn test_info_empty_before_observation() {
        let mut scenario = BalloonScenario::default();
        let world = scenario.make_world();
        assert!(scenario.info(0, &world).is_empty());
    }

    #[test]
    fn test_info_follows_observation() {
        let mut scenario = BalloonScenario::default();
        let world = scenario.make_world();

        scenario.observation(2, &world).unwrap();
        let info = scenario.info(2, &world);

        assert_eq!(info.len(), 7);
        assert!(scenario.info(1, &world).is_empty());
    }

    #[test]
    fn test_reset_clears_info() {
        let mut scenario = BalloonScenario::default();
        let mut world = scenario.make_world();

        scenario.observation(0, &world).unwrap();
        assert!(!scenario.info(0, &world).is_empty());

        scenario.reset_world(&mut world);
        assert!(scenario.info(0, &world).is_empty());
    }

    #[test]
    fn test_unknown_agent() {
        let mut scenario = BalloonScenario::default();
        let world = scenario.make_world();

        assert!(matches!(
            scenario.reward(9, &world),
            Err(ScenarioError::AgentIndexOutOfRange { index: 9, .. })
        ));
        assert!(scenario.observation(9, &world).is_err());
        assert!(scenario.info(9, &world).is_empty());
    }
}
