//! Error types
//!
//! The scenario never fails on a well-formed world. These errors surface a
//! misconfigured roster or config file instead of silently reading bad state.

use thiserror::Error;

/// Violations of the roster preconditions
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScenarioError {
    #[error("agent index {index} out of range for a roster of {num_agents}")]
    AgentIndexOutOfRange { index: usize, num_agents: usize },

    #[error("agent index {index} is used by more than one agent")]
    DuplicateAgentIndex { index: usize },

    #[error(
        "agent {agent} has a {rows}x{cols} communication state, expected {expected_rows}x{expected_cols}"
    )]
    CommShapeMismatch {
        agent: usize,
        rows: usize,
        cols: usize,
        expected_rows: usize,
        expected_cols: usize,
    },

    #[error("agent {agent} has {len} communication values, expected {expected}")]
    CommDataLength {
        agent: usize,
        len: usize,
        expected: usize,
    },

    #[error("agent {peer} has no communication row addressed to agent {observer}")]
    CommRowOutOfRange { peer: usize, observer: usize },
}

/// Errors that can occur while loading or validating a config
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}
