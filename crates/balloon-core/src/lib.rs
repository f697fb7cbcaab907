//! Team balloon scenario for a multi-agent particle arena.
//!
//! Two teams share a bounded 2D arena with a few static landmarks. Each agent
//! carries a balloon count; rewards compare a team's balloons against the
//! other team's, and observations are limited to what lies within an agent's
//! observation range. Physics, collision response, and rendering belong to
//! the host that drives the [`Scenario`] trait.

pub mod components;
pub mod config;
pub mod error;
pub mod output;
pub mod scenario;
pub mod setup;
pub mod systems;

pub use components::{Agent, CommState, Entity, Landmark, Team, Vec2, World};
pub use config::ScenarioConfig;
pub use error::{ConfigError, ScenarioError};
pub use scenario::{BalloonScenario, Scenario};

pub use setup::{build_world, reset_world};
pub use systems::{
    distance, in_attack_range, is_collision, is_visible, observe, reward, Observation,
    ObservationLayout,
};

pub use balloon_events::{InfoMap, ObservationInfo};
