//! Session settings
//!
//! Read once at session start. Bad values fail fast instead of falling back to
//! a default, since a wrong multiplier skews every velocity in the session.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Configuration errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Difficulty key is not one of easy/normal/hard
    UnknownDifficulty(String),
    /// Settings document could not be parsed
    Malformed(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownDifficulty(key) => {
                write!(f, "unknown difficulty '{key}' (expected easy, normal or hard)")
            }
            Self::Malformed(reason) => write!(f, "malformed settings: {reason}"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Difficulty selector; scales every ball velocity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Normal => "normal",
            Difficulty::Hard => "hard",
        }
    }

    /// Velocity multiplier for this difficulty
    pub fn multiplier(&self) -> f32 {
        match self {
            Difficulty::Easy => 0.7,
            Difficulty::Normal => 1.0,
            Difficulty::Hard => 1.5,
        }
    }
}

impl FromStr for Difficulty {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "normal" => Ok(Difficulty::Normal),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(ConfigError::UnknownDifficulty(s.to_string())),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn default_player_name() -> String {
    "Player".to_string()
}

fn default_session_id() -> String {
    "local".to_string()
}

/// Per-session settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub difficulty: Difficulty,
    /// RNG seed; random when absent
    #[serde(default)]
    pub seed: Option<u64>,
    /// Name recorded on local leaderboard entries
    #[serde(default = "default_player_name")]
    pub player_name: String,
    /// Identifier passed to the score reporter
    #[serde(default = "default_session_id")]
    pub session_id: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Normal,
            seed: None,
            player_name: default_player_name(),
            session_id: default_session_id(),
        }
    }
}

impl Settings {
    /// Parse settings from JSON. Missing fields take their defaults;
    /// an unknown difficulty is an error.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::Malformed(e.to_string()))
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        serde_json::to_string(self).map_err(|e| ConfigError::Malformed(e.to_string()))
    }

    /// Configured seed, or a fresh random one
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random)
    }
}
