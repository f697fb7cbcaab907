//! Configuration System
//!
//! Loads scenario parameters from a TOML file so populations and agent
//! profiles can be adjusted without recompiling. Every section is optional;
//! missing values fall back to the stock balloon scenario.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ConfigError;

/// Default config file path
pub const DEFAULT_CONFIG_PATH: &str = "balloon.toml";

/// Top-level configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub population: PopulationConfig,
    #[serde(default = "AgentProfile::adversary")]
    pub adversary: AgentProfile,
    #[serde(default = "AgentProfile::good")]
    pub good: AgentProfile,
    #[serde(default)]
    pub landmarks: LandmarkProfile,
    #[serde(default)]
    pub arena: ArenaConfig,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            population: PopulationConfig::default(),
            adversary: AgentProfile::adversary(),
            good: AgentProfile::good(),
            landmarks: LandmarkProfile::default(),
            arena: ArenaConfig::default(),
        }
    }
}

/// Entity counts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PopulationConfig {
    pub num_good_agents: usize,
    pub num_adversaries: usize,
    pub num_landmarks: usize,
    /// Balloons each agent starts every episode with
    pub num_balloons: u32,
    /// Communication vocabulary size (`dim_c`)
    pub vocabulary_size: usize,
}

impl Default for PopulationConfig {
    fn default() -> Self {
        Self {
            num_good_agents: 2,
            num_adversaries: 2,
            num_landmarks: 3,
            num_balloons: 5,
            vocabulary_size: 2,
        }
    }
}

impl PopulationConfig {
    pub fn num_agents(&self) -> usize {
        self.num_adversaries + self.num_good_agents
    }
}

/// Static attributes shared by every agent on one team
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentProfile {
    pub size: f32,
    pub accel: f32,
    pub max_speed: f32,
    pub obs_range: f32,
    pub atk_range: f32,
    pub color: [f32; 3],
}

impl AgentProfile {
    pub fn adversary() -> Self {
        Self {
            size: 0.1,
            accel: 3.0,
            max_speed: 1.0,
            obs_range: 3.0,
            atk_range: 0.5,
            color: [0.85, 0.35, 0.35],
        }
    }

    pub fn good() -> Self {
        Self {
            size: 0.1,
            accel: 4.0,
            max_speed: 1.3,
            obs_range: 3.0,
            atk_range: 0.5,
            color: [0.35, 0.85, 0.35],
        }
    }
}

/// Landmark attributes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LandmarkProfile {
    pub size: f32,
    pub color: [f32; 3],
    /// Non-boundary landmarks spawn uniformly in `[-spawn_extent, spawn_extent]`
    pub spawn_extent: f32,
}

impl Default for LandmarkProfile {
    fn default() -> Self {
        Self {
            size: 0.1,
            color: [0.25, 0.25, 0.25],
            spawn_extent: 0.9,
        }
    }
}

/// Arena bounds used at reset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    /// Agents spawn uniformly in `[-agent_spawn_extent, agent_spawn_extent]`
    pub agent_spawn_extent: f32,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            agent_spawn_extent: 1.0,
        }
    }
}

impl ScenarioConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_str(&content)
    }

    /// Parse and validate configuration from a TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let config: ScenarioConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from the default path, or use defaults if not found
    pub fn load_or_default() -> Self {
        Self::load(DEFAULT_CONFIG_PATH).unwrap_or_else(|e| {
            tracing::warn!("Could not load {}: {}. Using defaults.", DEFAULT_CONFIG_PATH, e);
            Self::default()
        })
    }

    /// Serialize as a TOML string
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Reject values that would build a degenerate world
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population.num_agents() == 0 {
            return Err(ConfigError::Invalid("the roster has no agents".into()));
        }
        if self.population.vocabulary_size == 0 {
            return Err(ConfigError::Invalid("vocabulary_size must be positive".into()));
        }
        for (team, profile) in [("adversary", &self.adversary), ("good", &self.good)] {
            // Negated comparisons so NaN is rejected too
            if !(profile.size >= 0.0 && profile.obs_range >= 0.0 && profile.atk_range >= 0.0) {
                return Err(ConfigError::Invalid(format!(
                    "{} profile has a negative or NaN size or range",
                    team
                )));
            }
        }
        for extent in [self.arena.agent_spawn_extent, self.landmarks.spawn_extent] {
            if !(extent.is_finite() && extent >= 0.0) {
                return Err(ConfigError::Invalid(format!(
                    "spawn extent {} must be finite and non-negative",
                    extent
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ScenarioConfig::default();
        assert_eq!(config.population.num_agents(), 4);
        assert_eq!(config.population.num_landmarks, 3);
        assert_eq!(config.population.num_balloons, 5);
        assert_eq!(config.population.vocabulary_size, 2);
        assert_eq!(config.adversary.accel, 3.0);
        assert_eq!(config.good.max_speed, 1.3);
        assert_eq!(config.landmarks.spawn_extent, 0.9);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = ScenarioConfig::from_str(
            r#"
            [population]
            num_balloons = 10

            [good]
            size = 0.2
            accel = 5.0
            max_speed = 2.0
            obs_range = 1.5
            atk_range = 0.25
            color = [0.0, 1.0, 0.0]
            "#,
        )
        .unwrap();

        assert_eq!(config.population.num_balloons, 10);
        assert_eq!(config.population.num_adversaries, 2);
        assert_eq!(config.good.obs_range, 1.5);
        assert_eq!(config.adversary, AgentProfile::adversary());
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config = ScenarioConfig::from_str("").unwrap();
        assert_eq!(config, ScenarioConfig::default());
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = ScenarioConfig::default();
        let text = config.to_toml().unwrap();
        assert_eq!(ScenarioConfig::from_str(&text).unwrap(), config);
    }

    #[test]
    fn test_rejects_empty_roster() {
        let result = ScenarioConfig::from_str(
            r#"
            [population]
            num_good_agents = 0
            num_adversaries = 0
            "#,
        );
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_shipped_config_matches_defaults() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../balloon.toml");
        if path.exists() {
            assert_eq!(ScenarioConfig::load(&path).unwrap(), ScenarioConfig::default());
        }
    }

    #[test]
    fn test_rejects_non_finite_values() {
        let mut config = ScenarioConfig::default();
        config.landmarks.spawn_extent = f32::NAN;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let mut config = ScenarioConfig::default();
        config.arena.agent_spawn_extent = f32::INFINITY;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let mut config = ScenarioConfig::default();
        config.good.obs_range = f32::NAN;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let result = ScenarioConfig::from_str("[landmarks]\nspawn_extent = nan\n");
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_load_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("balloon.toml");
        std::fs::write(&path, "[arena]\nagent_spawn_extent = 0.5\n").unwrap();

        let config = ScenarioConfig::load(&path).unwrap();
        assert_eq!(config.arena.agent_spawn_extent, 0.5);

        let missing = ScenarioConfig::load(dir.path().join("missing.toml"));
        assert!(matches!(missing, Err(ConfigError::Io(_))));
    }
}
