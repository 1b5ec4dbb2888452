//! In-memory catalog store
//!
//! Owns the artist, album, song and playlist records and answers the
//! lookup, filter and search queries the views need. All queries are
//! total: unknown ids give `None` or an empty list.

use crate::builtin;
use crate::types::{Album, AlbumId, Artist, ArtistId, Playlist, PlaylistId, Song, SongId};
use serde::{Deserialize, Serialize};

/// Number of songs on the home page "recently played" shelf
const RECENT_SAMPLE_SIZE: usize = 6;

/// Static music catalog
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    artists: Vec<Artist>,
    albums: Vec<Album>,
    songs: Vec<Song>,
    playlists: Vec<Playlist>,
}

impl Catalog {
    /// Create a catalog from explicit records
    pub fn new(
        artists: Vec<Artist>,
        albums: Vec<Album>,
        songs: Vec<Song>,
        playlists: Vec<Playlist>,
    ) -> Self {
        Self {
            artists,
            albums,
            songs,
            playlists,
        }
    }

    /// The sample library bundled with the player
    pub fn builtin() -> Self {
        Self::new(
            builtin::artists(),
            builtin::albums(),
            builtin::songs(),
            builtin::playlists(),
        )
    }

    // ===== Collections =====

    /// All artists in catalog order
    pub fn artists(&self) -> &[Artist] {
        &self.artists
    }

    /// All albums in catalog order
    pub fn albums(&self) -> &[Album] {
        &self.albums
    }

    /// All songs in catalog order
    pub fn songs(&self) -> &[Song] {
        &self.songs
    }

    /// All playlists in catalog order
    pub fn playlists(&self) -> &[Playlist] {
        &self.playlists
    }

    // ===== Lookups =====

    /// Get artist by ID
    pub fn artist(&self, id: &ArtistId) -> Option<&Artist> {
        self.artists.iter().find(|artist| &artist.id == id)
    }

    /// Get album by ID
    pub fn album(&self, id: &AlbumId) -> Option<&Album> {
        self.albums.iter().find(|album| &album.id == id)
    }

    /// Get song by ID
    pub fn song(&self, id: &SongId) -> Option<&Song> {
        self.songs.iter().find(|song| &song.id == id)
    }

    /// Get playlist by ID
    pub fn playlist(&self, id: &PlaylistId) -> Option<&Playlist> {
        self.playlists.iter().find(|playlist| &playlist.id == id)
    }

    // ===== Filters =====

    /// Songs by an artist, in catalog order
    pub fn songs_by_artist(&self, artist_id: &ArtistId) -> Vec<&Song> {
        self.songs
            .iter()
            .filter(|song| &song.artist_id == artist_id)
            .collect()
    }

    /// Songs on an album, in catalog order
    pub fn songs_by_album(&self, album_id: &AlbumId) -> Vec<&Song> {
        self.songs
            .iter()
            .filter(|song| &song.album_id == album_id)
            .collect()
    }

    /// Albums by an artist
    pub fn albums_by_artist(&self, artist_id: &ArtistId) -> Vec<&Album> {
        self.albums
            .iter()
            .filter(|album| &album.artist_id == artist_id)
            .collect()
    }

    /// Songs of a playlist in playlist order
    ///
    /// Ids that do not resolve to a catalog song are skipped.
    pub fn playlist_songs(&self, playlist_id: &PlaylistId) -> Vec<&Song> {
        self.playlist(playlist_id)
            .map(|playlist| {
                playlist
                    .song_ids
                    .iter()
                    .filter_map(|id| self.song(id))
                    .collect()
            })
            .unwrap_or_default()
    }

    // ===== Search =====

    /// Songs whose title, artist name or album title contains the query
    /// (case-insensitive)
    pub fn search_songs(&self, query: &str) -> Vec<&Song> {
        let query = query.to_lowercase();
        self.songs
            .iter()
            .filter(|song| {
                song.title.to_lowercase().contains(&query)
                    || self
                        .artist(&song.artist_id)
                        .is_some_and(|artist| artist.name.to_lowercase().contains(&query))
                    || self
                        .album(&song.album_id)
                        .is_some_and(|album| album.title.to_lowercase().contains(&query))
            })
            .collect()
    }

    /// Artists whose name contains the query (case-insensitive)
    pub fn search_artists(&self, query: &str) -> Vec<&Artist> {
        let query = query.to_lowercase();
        self.artists
            .iter()
            .filter(|artist| artist.name.to_lowercase().contains(&query))
            .collect()
    }

    /// Albums whose title or artist name contains the query (case-insensitive)
    pub fn search_albums(&self, query: &str) -> Vec<&Album> {
        let query = query.to_lowercase();
        self.albums
            .iter()
            .filter(|album| {
                album.title.to_lowercase().contains(&query)
                    || self
                        .artist(&album.artist_id)
                        .is_some_and(|artist| artist.name.to_lowercase().contains(&query))
            })
            .collect()
    }

    // ===== Shelves =====

    /// Most popular songs first, at most `limit` of them
    pub fn top_songs(&self, limit: usize) -> Vec<&Song> {
        let mut songs: Vec<&Song> = self.songs.iter().collect();
        // Stable sort keeps catalog order between equally popular songs
        songs.sort_by(|a, b| b.popularity.cmp(&a.popularity));
        songs.truncate(limit);
        songs
    }

    /// Placeholder shelf for the home page before anything has been played
    pub fn recently_played_sample(&self) -> Vec<&Song> {
        self.songs.iter().take(RECENT_SAMPLE_SIZE).collect()
    }

    /// Artist name for a song, if the artist is known
    pub fn artist_name(&self, song: &Song) -> Option<&str> {
        self.artist(&song.artist_id).map(|artist| artist.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_sizes() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.artists().len(), 6);
        assert_eq!(catalog.albums().len(), 6);
        assert_eq!(catalog.songs().len(), 18);
        assert_eq!(catalog.playlists().len(), 4);
    }

    #[test]
    fn builtin_references_resolve() {
        let catalog = Catalog::builtin();
        for song in catalog.songs() {
            assert!(catalog.artist(&song.artist_id).is_some(), "{}", song.id);
            assert!(catalog.album(&song.album_id).is_some(), "{}", song.id);
        }
        for playlist in catalog.playlists() {
            assert_eq!(
                catalog.playlist_songs(&playlist.id).len(),
                playlist.song_ids.len()
            );
        }
    }

    #[test]
    fn lookup_by_id() {
        let catalog = Catalog::builtin();
        let song = catalog.song(&SongId::new("song_11")).unwrap();
        assert_eq!(song.title, "Sunflower");
        assert_eq!(song.duration, 158);
        assert_eq!(catalog.artist_name(song), Some("Post Malone"));

        assert!(catalog.song(&SongId::new("song_99")).is_none());
        assert!(catalog.playlist(&PlaylistId::new("nope")).is_none());
    }

    #[test]
    fn songs_by_album_in_track_order() {
        let catalog = Catalog::builtin();
        let songs = catalog.songs_by_album(&AlbumId::new("album_1"));
        let tracks: Vec<u32> = songs.iter().map(|s| s.track_number).collect();
        assert_eq!(tracks, vec![1, 2, 3]);
    }

    #[test]
    fn albums_by_artist() {
        let catalog = Catalog::builtin();
        let albums = catalog.albums_by_artist(&ArtistId::new("artist_6"));
        assert_eq!(albums.len(), 1);
        assert_eq!(albums[0].title, "Certified Lover Boy");
    }

    #[test]
    fn playlist_songs_keep_playlist_order() {
        let catalog = Catalog::builtin();
        let songs = catalog.playlist_songs(&PlaylistId::new("playlist_3"));
        let ids: Vec<&str> = songs.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["song_8", "song_13", "song_14", "song_5"]);

        assert!(catalog.playlist_songs(&PlaylistId::new("missing")).is_empty());
    }

    #[test]
    fn playlist_songs_skip_unknown_ids() {
        let mut playlists = Catalog::builtin().playlists().to_vec();
        playlists[0].song_ids.push(SongId::new("song_404"));
        let builtin = Catalog::builtin();
        let catalog = Catalog::new(
            builtin.artists().to_vec(),
            builtin.albums().to_vec(),
            builtin.songs().to_vec(),
            playlists,
        );

        assert_eq!(catalog.playlist_songs(&PlaylistId::new("playlist_1")).len(), 5);
    }

    #[test]
    fn search_songs_matches_title_artist_and_album() {
        let catalog = Catalog::builtin();

        // Title
        let by_title = catalog.search_songs("LEVITATING");
        assert_eq!(by_title.len(), 1);

        // Artist name
        let by_artist = catalog.search_songs("billie");
        assert_eq!(by_artist.len(), 3);

        // Album title: "After Hours" album plus the title track
        let by_album = catalog.search_songs("after hours");
        assert_eq!(by_album.len(), 3);

        assert!(catalog.search_songs("zzz").is_empty());
    }

    #[test]
    fn search_albums_and_artists() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.search_artists("dr").len(), 1);
        assert_eq!(catalog.search_albums("drake").len(), 1);
        assert_eq!(catalog.search_albums("nostalgia").len(), 1);
        // Empty query matches everything
        assert_eq!(catalog.search_artists("").len(), 6);
    }

    #[test]
    fn top_songs_sorted_by_popularity() {
        let catalog = Catalog::builtin();
        let top = catalog.top_songs(3);
        let titles: Vec<&str> = top.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["Blinding Lights", "Sunflower", "Don't Start Now"]);

        assert_eq!(catalog.top_songs(100).len(), 18);
        assert!(catalog.top_songs(0).is_empty());
    }

    #[test]
    fn recently_played_sample_is_first_six() {
        let catalog = Catalog::builtin();
        let sample = catalog.recently_played_sample();
        assert_eq!(sample.len(), 6);
        assert_eq!(sample[0].id, SongId::new("song_1"));
        assert_eq!(sample[5].id, SongId::new("song_6"));
    }
}
