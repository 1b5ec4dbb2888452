//! Album types

use super::{AlbumId, ArtistId};
use serde::{Deserialize, Serialize};

/// An album
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Album {
    /// Unique album identifier
    pub id: AlbumId,
    /// Album title
    pub title: String,
    /// Album artist
    pub artist_id: ArtistId,
    /// Cover art URL
    pub cover_url: String,
    /// Release date as `YYYY-MM-DD`
    pub release_date: String,
    /// Track count as listed on the album
    pub total_tracks: u32,
    /// Primary genre
    pub genre: String,
}

impl Album {
    /// Release year parsed from the release date, if well-formed
    pub fn release_year(&self) -> Option<u32> {
        self.release_date.get(..4).and_then(|y| y.parse().ok())
    }
}
