//! Observation Info
//!
//! Labeled breakdown of a single agent observation, kept for diagnostics.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::Vec2;

/// Label -> value mapping handed to hosts that want an untyped info dict
pub type InfoMap = BTreeMap<String, serde_json::Value>;

/// The seven feature groups that make up one observation.
///
/// Field order matches the order in which the groups are concatenated into
/// the observation vector.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ObservationInfo {
    #[serde(rename = "own velocity")]
    pub own_velocity: Vec2,
    #[serde(rename = "own position")]
    pub own_position: Vec2,
    /// The observer's full communication matrix, row-major
    #[serde(rename = "own message")]
    pub own_message: Vec<u32>,
    /// Visible landmarks, relative to the observer
    #[serde(rename = "obstacle positions")]
    pub obstacle_positions: Vec<Vec2>,
    /// Visible peers, relative to the observer
    #[serde(rename = "other positions")]
    pub other_positions: Vec<Vec2>,
    /// Raw velocities of visible non-adversary peers
    #[serde(rename = "other velocities")]
    pub other_velocities: Vec<Vec2>,
    /// Each visible peer's communication row addressed to the observer
    #[serde(rename = "other messages")]
    pub other_messages: Vec<Vec<u32>>,
}

impl ObservationInfo {
    pub const LABELS: [&'static str; 7] = [
        "own velocity",
        "own position",
        "own message",
        "obstacle positions",
        "other positions",
        "other velocities",
        "other messages",
    ];

    /// Convert into a label-keyed map.
    pub fn to_map(&self) -> InfoMap {
        match serde_json::to_value(self) {
            Ok(serde_json::Value::Object(map)) => map.into_iter().collect(),
            _ => InfoMap::new(),
        }
    }

    /// Number of peers that were in range
    pub fn visible_peer_count(&self) -> usize {
        self.other_positions.len()
    }

    /// Number of landmarks that were in range
    pub fn visible_obstacle_count(&self) -> usize {
        self.obstacle_positions.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ObservationInfo {
        ObservationInfo {
            own_velocity: Vec2::new(0.1, 0.0),
            own_position: Vec2::new(0.5, -0.5),
            own_message: vec![0, 0, 1, 0],
            obstacle_positions: vec![Vec2::new(0.2, 0.0)],
            other_positions: vec![Vec2::new(-1.0, 1.0)],
            other_velocities: vec![],
            other_messages: vec![vec![1, 0]],
        }
    }

    #[test]
    fn test_map_has_all_labels() {
        let map = sample().to_map();
        assert_eq!(map.len(), 7);
        for label in ObservationInfo::LABELS {
            assert!(map.contains_key(label), "missing {}", label);
        }
        assert_eq!(map["other messages"], serde_json::json!([[1, 0]]));
        assert_eq!(map["other velocities"], serde_json::json!([]));
    }

    #[test]
    fn test_counts() {
        let info = sample();
        assert_eq!(info.visible_peer_count(), 1);
        assert_eq!(info.visible_obstacle_count(), 1);
    }

    #[test]
    fn test_json_roundtrip_uses_labels() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert!(json.contains("\"obstacle positions\""));
        let back: ObservationInfo = serde_json::from_str(&json).unwrap();
        assert_eq!(back, sample());
    }
}
