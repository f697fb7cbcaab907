//! Reward System
//!
//! Team-relative shaping: balloons kept minus balloons the other team still has.

use serde::{Deserialize, Serialize};

use crate::components::{Agent, World};

/// The two terms behind a reward value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardBreakdown {
    pub own: u32,
    pub opponents: u64,
    pub total: i64,
}

pub fn reward_breakdown(agent: &Agent, world: &World) -> RewardBreakdown {
    let opponents: u64 = world
        .agents
        .iter()
        .filter(|other| agent.is_opponent_of(other))
        .map(|other| u64::from(other.num_balloons))
        .sum();

    RewardBreakdown {
        own: agent.num_balloons,
        opponents,
        total: i64::from(agent.num_balloons) - opponents as i64,
    }
}

/// `own.num_balloons - sum(num_balloons of the opposing team)`.
///
/// Recomputed from scratch on every call; depends only on current balloon
/// counts.
pub fn reward(agent: &Agent, world: &World) -> f32 {
    reward_breakdown(agent, world).total as f32
}
