//! Scenario Systems
//!
//! Perception predicates, reward shaping, and observation assembly.

pub mod observation;
pub mod perception;
pub mod reward;

pub use observation::{observe, Observation, ObservationLayout};
pub use perception::{
    distance, in_attack_range, is_collision, is_visible, visible_landmarks, visible_peers,
};
pub use reward::{reward, reward_breakdown, RewardBreakdown};
