//! Score reporting and leaderboard
//!
//! The game loop hands the final score to a [`ScoreReporter`] once per
//! session and then asks it for the current leaderboard. A remote service
//! implements the trait on the host side; [`LocalLeaderboard`] keeps the top
//! scores in memory (optionally backed by a JSON file on native targets).

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Maximum number of entries kept on the local leaderboard
pub const MAX_LEADERBOARD_ENTRIES: usize = 10;

/// A single leaderboard row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    /// Bricks destroyed
    pub score: u32,
    /// Session length in whole seconds
    pub time: u64,
    pub name: String,
}

/// Reporter failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportError {
    /// Transport or storage failure
    Unavailable(String),
    /// Response could not be decoded
    Malformed(String),
}

impl fmt::Display for ReportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable(reason) => write!(f, "score service unavailable: {reason}"),
            Self::Malformed(reason) => write!(f, "malformed leaderboard data: {reason}"),
        }
    }
}

impl std::error::Error for ReportError {}

/// Receives final scores and serves the leaderboard
pub trait ScoreReporter {
    fn submit(&mut self, session_id: &str, score: u32, elapsed_secs: u64)
    -> Result<(), ReportError>;

    /// Leaderboard, best first
    fn fetch_leaderboard(&mut self, session_id: &str)
    -> Result<Vec<LeaderboardEntry>, ReportError>;
}

/// Decode a leaderboard payload as returned by a score service
pub fn parse_leaderboard(json: &str) -> Result<Vec<LeaderboardEntry>, ReportError> {
    serde_json::from_str(json).map_err(|e| ReportError::Malformed(e.to_string()))
}

/// In-memory top-N leaderboard
#[derive(Debug, Clone, Default)]
pub struct LocalLeaderboard {
    /// Name recorded on submitted entries
    player_name: String,
    entries: Vec<LeaderboardEntry>,
}

impl LocalLeaderboard {
    /// Create an empty leaderboard recording scores under `player_name`
    pub fn new(player_name: &str) -> Self {
        Self {
            player_name: player_name.to_string(),
            entries: Vec::new(),
        }
    }

    pub fn entries(&self) -> &[LeaderboardEntry] {
        &self.entries
    }

    /// Position a result would take (0-based). Higher score first, faster time breaks ties.
    fn insertion_index(&self, score: u32, time: u64) -> usize {
        self.entries
            .iter()
            .position(|e| score > e.score || (score == e.score && time < e.time))
            .unwrap_or(self.entries.len())
    }

    /// Check if a result earns a place on the board
    pub fn qualifies(&self, score: u32, time: u64) -> bool {
        if score == 0 {
            return false;
        }
        self.insertion_index(score, time) < MAX_LEADERBOARD_ENTRIES
    }

    /// Rank a result would achieve (1-indexed, None if it doesn't qualify)
    pub fn potential_rank(&self, score: u32, time: u64) -> Option<usize> {
        if !self.qualifies(score, time) {
            return None;
        }
        Some(self.insertion_index(score, time) + 1)
    }

    /// Add a result to the board (if it qualifies).
    /// Returns the rank achieved (1-indexed).
    pub fn add_score(&mut self, name: &str, score: u32, time: u64) -> Option<usize> {
        if !self.qualifies(score, time) {
            return None;
        }

        let index = self.insertion_index(score, time);
        self.entries.insert(
            index,
            LeaderboardEntry {
                score,
                time,
                name: name.to_string(),
            },
        );
        self.entries.truncate(MAX_LEADERBOARD_ENTRIES);

        Some(index + 1)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn top_score(&self) -> Option<u32> {
        self.entries.first().map(|e| e.score)
    }

    /// Load entries from JSON, re-sorting and trimming whatever was stored
    pub fn from_json(player_name: &str, json: &str) -> Result<Self, ReportError> {
        let mut board = Self::new(player_name);
        for entry in parse_leaderboard(json)? {
            board.add_score(&entry.name, entry.score, entry.time);
        }
        Ok(board)
    }

    pub fn to_json(&self) -> Result<String, ReportError> {
        serde_json::to_string(&self.entries).map_err(|e| ReportError::Malformed(e.to_string()))
    }

    /// Load from a file; a missing file yields an empty board
    pub fn load(player_name: &str, path: &Path) -> Result<Self, ReportError> {
        if !path.exists() {
            log::info!("No leaderboard at {}, starting fresh", path.display());
            return Ok(Self::new(player_name));
        }
        let json = std::fs::read_to_string(path)
            .map_err(|e| ReportError::Unavailable(format!("{}: {e}", path.display())))?;
        let board = Self::from_json(player_name, &json)?;
        log::info!("Loaded {} leaderboard entries", board.entries.len());
        Ok(board)
    }

    pub fn save(&self, path: &Path) -> Result<(), ReportError> {
        let json = self.to_json()?;
        std::fs::write(path, json)
            .map_err(|e| ReportError::Unavailable(format!("{}: {e}", path.display())))?;
        log::info!("Leaderboard saved ({} entries)", self.entries.len());
        Ok(())
    }
}

impl ScoreReporter for LocalLeaderboard {
    fn submit(
        &mut self,
        session_id: &str,
        score: u32,
        elapsed_secs: u64,
    ) -> Result<(), ReportError> {
        let name = self.player_name.clone();
        match self.add_score(&name, score, elapsed_secs) {
            Some(rank) => log::info!("Session {session_id}: rank {rank} with {score}"),
            None => log::info!("Session {session_id}: {score} did not place"),
        }
        Ok(())
    }

    fn fetch_leaderboard(
        &mut self,
        _session_id: &str,
    ) -> Result<Vec<LeaderboardEntry>, ReportError> {
        Ok(self.entries.clone())
    }
}
