//! Song types

use super::{AlbumId, ArtistId, SongId};
use serde::{Deserialize, Serialize};

/// A song in the catalog
///
/// Songs are immutable once loaded. Durations are whole seconds, matching
/// the one-second resolution of simulated playback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Song {
    /// Unique song identifier
    pub id: SongId,
    /// Song title
    pub title: String,
    /// Performing artist
    pub artist_id: ArtistId,
    /// Album the song appears on
    pub album_id: AlbumId,

    /// Length in seconds
    pub duration: u32,

    /// Position on its album, starting at 1
    pub track_number: u32,
    /// Explicit lyrics marker
    pub explicit: bool,

    /// Popularity score (0-100)
    pub popularity: u8,

    /// Total plays, shown as e.g. `2.1B`
    pub play_count: u64,
}
