//! Agent Components
//!
//! The scenario-specific agent record: team, ranges, balloons, and comm state.

use serde::{Deserialize, Serialize};

use super::{Color, Entity, Vec2};
use crate::config::AgentProfile;

/// Team affiliation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Team {
    Adversary,
    Good,
}

impl Team {
    /// Numeric team id: 0 for adversaries, 1 for good agents
    pub fn id(&self) -> u8 {
        match self {
            Team::Adversary => 0,
            Team::Good => 1,
        }
    }
}

/// Outgoing message state: one row of vocabulary symbols per peer index
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommState {
    rows: usize,
    cols: usize,
    data: Vec<u32>,
}

impl CommState {
    /// Zero matrix of shape `[num_agents x vocabulary_size]`
    pub fn zeros(num_agents: usize, vocabulary_size: usize) -> Self {
        Self {
            rows: num_agents,
            cols: vocabulary_size,
            data: vec![0; num_agents * vocabulary_size],
        }
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Row addressed to the peer with the given index
    pub fn row(&self, peer: usize) -> Option<&[u32]> {
        if peer >= self.rows {
            return None;
        }
        let start = peer * self.cols;
        self.data.get(start..start + self.cols)
    }

    pub fn row_mut(&mut self, peer: usize) -> Option<&mut [u32]> {
        if peer >= self.rows {
            return None;
        }
        let start = peer * self.cols;
        self.data.get_mut(start..start + self.cols)
    }

    /// Whether the stored values fill the declared shape exactly
    pub fn is_well_formed(&self) -> bool {
        self.data.len() == self.rows * self.cols
    }

    /// Row-major contents
    pub fn flatten(&self) -> &[u32] {
        &self.data
    }

    pub fn reset(&mut self) {
        self.data.iter_mut().for_each(|v| *v = 0);
    }
}

/// A controllable agent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Agent {
    pub name: String,
    /// Position in the roster, also the row peers address messages to
    pub index: usize,
    pub adversary: bool,
    pub size: f32,
    pub collide: bool,
    pub movable: bool,
    pub max_speed: f32,
    pub accel: f32,
    pub obs_range: f32,
    pub atk_range: f32,
    /// Balloons left; changed only by external combat logic
    pub num_balloons: u32,
    init_num_balloons: u32,
    pub position: Vec2,
    pub velocity: Vec2,
    pub comm: CommState,
    pub color: Color,
}

impl Agent {
    /// Create an agent with the static attributes of a team profile
    pub fn new(
        index: usize,
        adversary: bool,
        profile: &AgentProfile,
        num_balloons: u32,
        comm: CommState,
    ) -> Self {
        Self {
            name: format!("agent {}", index),
            index,
            adversary,
            size: profile.size,
            collide: true,
            movable: true,
            max_speed: profile.max_speed,
            accel: profile.accel,
            obs_range: profile.obs_range,
            atk_range: profile.atk_range,
            num_balloons,
            init_num_balloons: num_balloons,
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            comm,
            color: profile.color,
        }
    }

    pub fn team(&self) -> Team {
        if self.adversary {
            Team::Adversary
        } else {
            Team::Good
        }
    }

    /// Balloon count every episode starts from
    pub fn init_num_balloons(&self) -> u32 {
        self.init_num_balloons
    }

    pub fn is_opponent_of(&self, other: &Agent) -> bool {
        self.adversary != other.adversary
    }
}

impl Entity for Agent {
    fn position(&self) -> Vec2 {
        self.position
    }

    fn size(&self) -> f32 {
        self.size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_team_ids() {
        assert_eq!(Team::Adversary.id(), 0);
        assert_eq!(Team::Good.id(), 1);
    }

    #[test]
    fn test_comm_rows() {
        let mut comm = CommState::zeros(4, 2);
        assert_eq!(comm.shape(), (4, 2));
        assert_eq!(comm.flatten().len(), 8);

        comm.row_mut(2).unwrap().copy_from_slice(&[1, 3]);
        assert_eq!(comm.row(2), Some(&[1, 3][..]));
        assert_eq!(comm.row(0), Some(&[0, 0][..]));
        assert_eq!(comm.flatten(), &[0, 0, 0, 0, 1, 3, 0, 0]);
        assert!(comm.row(4).is_none());

        comm.reset();
        assert!(comm.flatten().iter().all(|&v| v == 0));
    }

    #[test]
    fn test_short_data_has_no_rows() {
        let mut comm: CommState =
            serde_json::from_str(r#"{"rows":4,"cols":2,"data":[0,0]}"#).unwrap();
        assert!(!comm.is_well_formed());
        assert_eq!(comm.row(0), Some(&[0, 0][..]));
        assert!(comm.row(3).is_none());
        assert!(comm.row_mut(3).is_none());
        assert!(CommState::zeros(4, 2).is_well_formed());
    }

    #[test]
    fn test_agent_from_profile() {
        let agent = Agent::new(1, true, &AgentProfile::adversary(), 5, CommState::zeros(4, 2));
        assert_eq!(agent.name, "agent 1");
        assert_eq!(agent.team(), Team::Adversary);
        assert_eq!(agent.accel, 3.0);
        assert_eq!(agent.num_balloons, 5);
        assert_eq!(agent.init_num_balloons(), 5);
        assert!(agent.collide);
    }
}
