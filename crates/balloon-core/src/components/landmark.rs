//! Landmark Components

use serde::{Deserialize, Serialize};

use super::{Color, Entity, Vec2};
use crate::config::LandmarkProfile;

/// A static obstacle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    pub name: String,
    pub collide: bool,
    pub movable: bool,
    pub size: f32,
    /// Boundary landmarks are never repositioned and never observed
    pub boundary: bool,
    pub position: Vec2,
    pub velocity: Vec2,
    pub color: Color,
}

impl Landmark {
    pub fn new(index: usize, profile: &LandmarkProfile) -> Self {
        Self {
            name: format!("landmark {}", index),
            collide: true,
            movable: false,
            size: profile.size,
            boundary: false,
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            color: profile.color,
        }
    }

    pub fn with_boundary(mut self, position: Vec2) -> Self {
        self.boundary = true;
        self.position = position;
        self
    }
}

impl Entity for Landmark {
    fn position(&self) -> Vec2 {
        self.position
    }

    fn size(&self) -> f32 {
        self.size
    }
}
