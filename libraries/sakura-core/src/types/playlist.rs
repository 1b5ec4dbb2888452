/// Playlist domain types
use super::{PlaylistId, SongId};
use serde::{Deserialize, Serialize};

/// Playlist
///
/// Holds song ids rather than songs; resolve them through
/// [`Catalog::playlist_songs`](crate::Catalog::playlist_songs).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Playlist {
    /// Unique playlist identifier
    pub id: PlaylistId,

    /// Playlist name
    pub name: String,

    /// Short description shown under the title
    pub description: String,

    /// Cover image
    pub cover_url: String,

    /// Owner (a user id, or `spotify` for editorial playlists)
    pub user_id: String,

    /// Visible to everyone
    pub public: bool,

    /// Other users may add songs
    pub collaborative: bool,

    /// Songs in play order
    pub song_ids: Vec<SongId>,

    /// Creation date (`YYYY-MM-DD`)
    pub created_at: String,
}

impl Playlist {
    /// Number of songs in the playlist
    pub fn len(&self) -> usize {
        self.song_ids.len()
    }

    /// Whether the playlist has no songs
    pub fn is_empty(&self) -> bool {
        self.song_ids.is_empty()
    }

    /// Whether the playlist contains the given song
    pub fn contains(&self, song_id: &SongId) -> bool {
        self.song_ids.contains(song_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn playlist_membership() {
        let playlist = Playlist {
            id: PlaylistId::new("playlist-1"),
            name: "My Favorites".to_string(),
            description: String::new(),
            cover_url: String::new(),
            user_id: "user-1".to_string(),
            public: false,
            collaborative: false,
            song_ids: vec![SongId::new("song_1"), SongId::new("song_2")],
            created_at: "2024-01-01".to_string(),
        };

        assert_eq!(playlist.len(), 2);
        assert!(!playlist.is_empty());
        assert!(playlist.contains(&SongId::new("song_2")));
        assert!(!playlist.contains(&SongId::new("song_3")));
    }
}
