//! Observation System
//!
//! Builds an agent's view of the arena from the entities inside its
//! observation range.
//!
//! The natural result is variable-length: out-of-range landmarks and peers are
//! dropped rather than zero-filled, so the vector from [`Observation::to_vec`]
//! changes length as agents move. Training loops that need a fixed width use
//! [`Observation::to_padded`] with an [`ObservationLayout`] instead.

use balloon_events::ObservationInfo;

use crate::components::{Agent, Vec2, World};
use crate::error::ScenarioError;
use crate::systems::perception::{visible_landmarks, visible_peers};

/// One agent's observation, grouped by feature
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    info: ObservationInfo,
}

impl Observation {
    /// Labeled breakdown of this observation
    pub fn info(&self) -> &ObservationInfo {
        &self.info
    }

    pub fn into_info(self) -> ObservationInfo {
        self.info
    }

    /// Concatenate all groups in order: own velocity, own position, own
    /// message matrix, obstacle positions, peer positions, good-peer
    /// velocities, peer messages.
    pub fn to_vec(&self) -> Vec<f32> {
        let info = &self.info;
        let mut out = Vec::with_capacity(self.len());

        out.extend(info.own_velocity.to_array());
        out.extend(info.own_position.to_array());
        out.extend(info.own_message.iter().map(|&v| v as f32));
        for group in [
            &info.obstacle_positions,
            &info.other_positions,
            &info.other_velocities,
        ] {
            out.extend(group.iter().flat_map(|v| v.to_array()));
        }
        for message in &info.other_messages {
            out.extend(message.iter().map(|&v| v as f32));
        }
        out
    }

    /// Length of [`to_vec`](Self::to_vec)
    pub fn len(&self) -> usize {
        let info = &self.info;
        4 + info.own_message.len()
            + 2 * (info.obstacle_positions.len()
                + info.other_positions.len()
                + info.other_velocities.len())
            + info.other_messages.iter().map(Vec::len).sum::<usize>()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Fixed-width encoding: each variable group is zero-padded (or
    /// truncated) to the slot counts of `layout`.
    pub fn to_padded(&self, layout: &ObservationLayout) -> Vec<f32> {
        let info = &self.info;
        let mut out = Vec::with_capacity(layout.width());

        out.extend(info.own_velocity.to_array());
        out.extend(info.own_position.to_array());
        push_slots(
            &mut out,
            std::iter::once(info.own_message.iter().map(|&v| v as f32).collect::<Vec<_>>()),
            1,
            layout.own_message_len,
        );

        let positions = |group: &Vec<Vec2>| -> Vec<Vec<f32>> {
            group.iter().map(|v| v.to_array().to_vec()).collect()
        };
        push_slots(
            &mut out,
            positions(&info.obstacle_positions),
            layout.max_landmarks,
            2,
        );
        push_slots(&mut out, positions(&info.other_positions), layout.max_peers, 2);
        push_slots(&mut out, positions(&info.other_velocities), layout.max_peers, 2);
        push_slots(
            &mut out,
            info.other_messages
                .iter()
                .map(|m| m.iter().map(|&v| v as f32).collect::<Vec<_>>()),
            layout.max_peers,
            layout.dim_c,
        );

        out
    }
}

/// Write `slots` entries of exactly `width` values each, zero-filling missing
/// entries and short rows, dropping anything beyond.
fn push_slots<I>(out: &mut Vec<f32>, items: I, slots: usize, width: usize)
where
    I: IntoIterator<Item = Vec<f32>>,
{
    let mut items = items.into_iter();
    for _ in 0..slots {
        let mut row = items.next().unwrap_or_default();
        row.resize(width, 0.0);
        out.extend(row);
    }
}

/// Slot counts for the fixed-width observation encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObservationLayout {
    pub max_landmarks: usize,
    pub max_peers: usize,
    pub own_message_len: usize,
    pub dim_c: usize,
}

impl ObservationLayout {
    /// Enough slots for every non-boundary landmark and every peer in `world`
    pub fn for_world(world: &World) -> Self {
        let num_agents = world.num_agents();
        Self {
            max_landmarks: world.landmarks.iter().filter(|l| !l.boundary).count(),
            max_peers: num_agents.saturating_sub(1),
            own_message_len: num_agents * world.dim_c,
            dim_c: world.dim_c,
        }
    }

    /// Total encoded length
    pub fn width(&self) -> usize {
        4 + self.own_message_len + 2 * self.max_landmarks + 4 * self.max_peers
            + self.max_peers * self.dim_c
    }
}

/// Assemble the observation of `agent`.
///
/// Fails if a visible peer has no message row addressed to `agent.index`,
/// which means the roster and comm states disagree.
pub fn observe(agent: &Agent, world: &World) -> Result<Observation, ScenarioError> {
    let obstacle_positions: Vec<Vec2> = visible_landmarks(agent, world)
        .map(|landmark| landmark.position - agent.position)
        .collect();

    let mut other_messages = Vec::new();
    let mut other_positions = Vec::new();
    let mut other_velocities = Vec::new();
    for peer in visible_peers(agent, world) {
        let row = peer
            .comm
            .row(agent.index)
            .ok_or(ScenarioError::CommRowOutOfRange {
                peer: peer.index,
                observer: agent.index,
            })?;
        other_messages.push(row.to_vec());
        other_positions.push(peer.position - agent.position);
        if !peer.adversary {
            other_velocities.push(peer.velocity);
        }
    }

    tracing::trace!(
        agent = agent.index,
        obstacles = obstacle_positions.len(),
        peers = other_positions.len(),
        "assembled observation"
    );

    Ok(Observation {
        info: ObservationInfo {
            own_velocity: agent.velocity,
            own_position: agent.position,
            own_message: agent.comm.flatten().to_vec(),
            obstacle_positions,
            other_positions,
            other_velocities,
            other_messages,
        },
    })
}
