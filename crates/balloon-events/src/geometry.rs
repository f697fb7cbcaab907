//! Planar geometry
//!
//! The arena is two-dimensional, so positions and velocities are plain `Vec2`s.

use serde::{Deserialize, Serialize};
use std::ops::Sub;

/// A point or displacement in the arena plane
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean length
    pub fn norm(&self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Euclidean distance to another point
    pub fn distance(&self, other: Vec2) -> f32 {
        (*self - other).norm()
    }

    pub fn to_array(self) -> [f32; 2] {
        [self.x, self.y]
    }
}

impl Sub for Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_norm_and_distance() {
        let a = Vec2::new(3.0, 4.0);
        assert_eq!(a.norm(), 5.0);
        assert_eq!(a.distance(Vec2::ZERO), 5.0);
        assert_eq!(Vec2::ZERO.distance(a), 5.0);
    }

    #[test]
    fn test_relative_offset() {
        let landmark = Vec2::new(0.7, -0.2);
        let observer = Vec2::new(0.5, 0.3);
        let rel = landmark - observer;
        assert!((rel.x - 0.2).abs() < 1e-6);
        assert!((rel.y + 0.5).abs() < 1e-6);
    }
}
