//! World Container
//!
//! Holds the agent and landmark rosters. Counts are fixed once built.

use serde::{Deserialize, Serialize};

use super::{Agent, Landmark};
use crate::error::ScenarioError;

/// Spatial dimensionality of the arena
pub const DIM_P: usize = 2;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct World {
    pub agents: Vec<Agent>,
    pub landmarks: Vec<Landmark>,
    /// Communication vocabulary size
    pub dim_c: usize,
}

impl World {
    pub fn new(dim_c: usize) -> Self {
        Self {
            agents: Vec::new(),
            landmarks: Vec::new(),
            dim_c,
        }
    }

    pub fn dim_p(&self) -> usize {
        DIM_P
    }

    pub fn num_agents(&self) -> usize {
        self.agents.len()
    }

    /// All agents that are not adversaries, in roster order
    pub fn good_agents(&self) -> impl Iterator<Item = &Agent> {
        self.agents.iter().filter(|a| !a.adversary)
    }

    /// All adversarial agents, in roster order
    pub fn adversaries(&self) -> impl Iterator<Item = &Agent> {
        self.agents.iter().filter(|a| a.adversary)
    }

    /// Look up an agent by its `index`
    pub fn agent(&self, index: usize) -> Result<&Agent, ScenarioError> {
        self.agents
            .iter()
            .find(|a| a.index == index)
            .ok_or(ScenarioError::AgentIndexOutOfRange {
                index,
                num_agents: self.agents.len(),
            })
    }

    /// Check the roster invariants the observation and reward code relies on:
    /// unique indices in `[0, num_agents)` and comm states shaped
    /// `[num_agents x dim_c]` with exactly that many values.
    pub fn validate(&self) -> Result<(), ScenarioError> {
        let num_agents = self.agents.len();
        let mut seen = vec![false; num_agents];

        for agent in &self.agents {
            if agent.index >= num_agents {
                return Err(ScenarioError::AgentIndexOutOfRange {
                    index: agent.index,
                    num_agents,
                });
            }
            if seen[agent.index] {
                return Err(ScenarioError::DuplicateAgentIndex { index: agent.index });
            }
            seen[agent.index] = true;

            let (rows, cols) = agent.comm.shape();
            if rows != num_agents || cols != self.dim_c {
                return Err(ScenarioError::CommShapeMismatch {
                    agent: agent.index,
                    rows,
                    cols,
                    expected_rows: num_agents,
                    expected_cols: self.dim_c,
                });
            }
            if !agent.comm.is_well_formed() {
                return Err(ScenarioError::CommDataLength {
                    agent: agent.index,
                    len: agent.comm.flatten().len(),
                    expected: rows * cols,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::CommState;
    use crate::config::AgentProfile;

    fn roster(adversary_flags: &[bool]) -> World {
        let mut world = World::new(2);
        let n = adversary_flags.len();
        for (i, &adv) in adversary_flags.iter().enumerate() {
            let profile = if adv {
                AgentProfile::adversary()
            } else {
                AgentProfile::good()
            };
            world
                .agents
                .push(Agent::new(i, adv, &profile, 5, CommState::zeros(n, 2)));
        }
        world
    }

    #[test]
    fn test_team_queries_preserve_order() {
        let world = roster(&[false, true, false, true]);

        let good: Vec<_> = world.good_agents().map(|a| a.index).collect();
        let adv: Vec<_> = world.adversaries().map(|a| a.index).collect();

        assert_eq!(good, vec![0, 2]);
        assert_eq!(adv, vec![1, 3]);
        assert_eq!(world.dim_p(), 2);
    }

    #[test]
    fn test_agent_lookup() {
        let world = roster(&[true, false]);
        assert_eq!(world.agent(1).unwrap().name, "agent 1");
        assert_eq!(
            world.agent(5),
            Err(ScenarioError::AgentIndexOutOfRange {
                index: 5,
                num_agents: 2
            })
        );
    }

    #[test]
    fn test_validate_accepts_built_roster() {
        assert!(roster(&[true, true, false, false]).validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_roster() {
        let mut world = roster(&[true, false, false]);
        world.agents[2].index = 1;
        assert_eq!(
            world.validate(),
            Err(ScenarioError::DuplicateAgentIndex { index: 1 })
        );

        let mut world = roster(&[true, false, false]);
        world.agents[0].index = 3;
        assert!(matches!(
            world.validate(),
            Err(ScenarioError::AgentIndexOutOfRange { index: 3, .. })
        ));

        let mut world = roster(&[true, false]);
        world.agents[1].comm = CommState::zeros(3, 2);
        assert!(matches!(
            world.validate(),
            Err(ScenarioError::CommShapeMismatch { agent: 1, rows: 3, .. })
        ));
    }

    #[test]
    fn test_validate_rejects_truncated_comm_data() {
        let world = roster(&[true, true, false, false]);
        let mut json = serde_json::to_value(&world).unwrap();
        json["agents"][1]["comm"]["data"] = serde_json::json!([0, 0]);
        let world: World = serde_json::from_value(json).unwrap();

        assert_eq!(
            world.validate(),
            Err(ScenarioError::CommDataLength {
                agent: 1,
                len: 2,
                expected: 8
            })
        );
        // Observing past the short row reports an error instead of panicking
        assert_eq!(
            crate::systems::observe(&world.agents[3], &world),
            Err(ScenarioError::CommRowOutOfRange {
                peer: 1,
                observer: 3
            })
        );
    }
}
