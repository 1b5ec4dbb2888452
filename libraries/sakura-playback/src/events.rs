//! Playback Events
//!
//! Event-based communication for UI synchronization during playback.
//! Events are emitted at key points:
//! - State changes (play/pause/stop at queue end)
//! - Song changes (play, next, previous, auto-advance)
//! - Position updates (every tick and on seek)
//! - Toggles (shuffle, repeat, mute, like)

use serde::{Deserialize, Serialize};

use crate::types::{PlaybackState, RepeatMode};
use sakura_core::SongId;

/// Events emitted by the playback controller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PlaybackEvent {
    /// Playback state changed
    StateChanged {
        /// The new playback state
        state: PlaybackState,
    },

    /// Current song changed
    ///
    /// Also emitted when repeat one restarts the same song, in which case
    /// both ids are equal. `previous` restarting a song more than 3 seconds
    /// in only reports a [`PlaybackEvent::PositionUpdate`].
    SongChanged {
        /// ID of the new (current) song
        song_id: SongId,
        /// ID of the previous song (if any)
        previous_song_id: Option<SongId>,
    },

    /// Position update
    PositionUpdate {
        /// Elapsed time in seconds
        position_secs: f64,
        /// Song duration in seconds
        duration_secs: u32,
    },

    /// Volume or mute flag changed
    VolumeChanged {
        /// New volume level (0.0-1.0)
        level: f32,
        /// Whether audio is muted
        is_muted: bool,
    },

    /// Queue replaced or reordered
    QueueChanged {
        /// New queue length
        length: usize,
    },

    /// Shuffle toggled
    ShuffleChanged {
        /// Whether shuffle is now on
        enabled: bool,
    },

    /// Repeat mode cycled
    RepeatChanged {
        /// The new repeat mode
        mode: RepeatMode,
    },

    /// Song added to or removed from the liked set
    LikeToggled {
        /// Affected song
        song_id: SongId,
        /// Whether the song is now liked
        liked: bool,
    },

    /// Reached the end of the queue with repeat off
    QueueEnded,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_serialize_with_type_tag() {
        let event = PlaybackEvent::StateChanged {
            state: PlaybackState::Playing,
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "state_changed");
        assert_eq!(json["state"], "playing");

        let json = serde_json::to_value(PlaybackEvent::QueueEnded).unwrap();
        assert_eq!(json["type"], "queue_ended");
    }

    #[test]
    fn song_changed_round_trips() {
        let event = PlaybackEvent::SongChanged {
            song_id: SongId::new("song_2"),
            previous_song_id: Some(SongId::new("song_1")),
        };
        let json = serde_json::to_string(&event).unwrap();
        let back: PlaybackEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }
}
