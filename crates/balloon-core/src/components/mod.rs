//! Entity Components
//!
//! Plain records for agents, landmarks, and the world that holds them.

pub mod agent;
pub mod landmark;
pub mod world;

pub use agent::*;
pub use landmark::*;
pub use world::*;

pub use balloon_events::Vec2;

/// RGB display color
pub type Color = [f32; 3];

/// Anything with a position and a physical radius
pub trait Entity {
    fn position(&self) -> Vec2;
    fn size(&self) -> f32;
}
