//! Core types for playback management

use serde::{Deserialize, Serialize};
use std::time::Duration;

use sakura_core::{Song, SongId};

/// Playback state
///
/// Derived from the transport flags: no current song is `Idle`, otherwise
/// the playing flag picks `Playing` or `Paused`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaybackState {
    /// No song loaded
    Idle,

    /// Currently playing
    Playing,

    /// Paused mid-song (or stopped at the end of the queue)
    Paused,
}

/// Repeat mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepeatMode {
    /// Stop when queue ends
    #[default]
    Off,

    /// Loop entire queue
    All,

    /// Loop current song only
    One,
}

impl RepeatMode {
    /// Next mode in the repeat button cycle: off → all → one → off
    pub fn cycle(self) -> Self {
        match self {
            RepeatMode::Off => RepeatMode::All,
            RepeatMode::All => RepeatMode::One,
            RepeatMode::One => RepeatMode::Off,
        }
    }
}

impl std::str::FromStr for RepeatMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "off" => Ok(RepeatMode::Off),
            "all" => Ok(RepeatMode::All),
            "one" => Ok(RepeatMode::One),
            other => Err(format!("unknown repeat mode: {other}")),
        }
    }
}

/// Configuration for the playback controller
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaybackConfig {
    /// Initial volume (0.0-1.0, default: 0.7)
    pub volume: f32,

    /// Maximum recently-played size (default: 20)
    pub history_limit: usize,

    /// Initial shuffle flag (default: off)
    pub shuffle: bool,

    /// Initial repeat mode (default: Off)
    pub repeat: RepeatMode,

    /// Real time per simulated second of playback (default: 1s)
    pub tick_period: Duration,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            volume: 0.7,
            history_limit: 20,
            shuffle: false,
            repeat: RepeatMode::Off,
            tick_period: Duration::from_secs(1),
        }
    }
}

/// Read-only view of the controller for rendering
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaybackSnapshot {
    pub state: PlaybackState,
    pub current_song: Option<Song>,
    pub current_time: f64,
    pub duration: u32,
    pub volume: f32,
    pub is_muted: bool,
    pub is_shuffled: bool,
    pub repeat: RepeatMode,
    pub queue: Vec<SongId>,
    pub current_index: usize,
    pub recently_played: Vec<SongId>,
    pub liked_songs: Vec<SongId>,
}
