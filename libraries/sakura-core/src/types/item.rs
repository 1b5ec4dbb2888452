//! Browsable catalog items
//!
//! The home and search views show albums, playlists and artists side by
//! side. Each kind is a variant carrying only its own record, so callers
//! match on the variant instead of probing fields.

use super::{Album, Artist, Playlist, Song, SongId};
use crate::Catalog;
use serde::{Deserialize, Serialize};

/// Kind of a catalog item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogKind {
    /// An album by one artist
    Album,
    /// A curated playlist
    Playlist,
    /// An artist and all of their songs
    Artist,
}

/// A browsable item: album, playlist or artist
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "item", rename_all = "lowercase")]
pub enum CatalogItem {
    /// Album card, subtitled with the artist name
    Album(Album),
    /// Playlist card, subtitled with the song count
    Playlist(Playlist),
    /// Artist card, subtitled with the follower count
    Artist(Artist),
}

impl CatalogItem {
    /// The item's kind
    pub fn kind(&self) -> CatalogKind {
        match self {
            CatalogItem::Album(_) => CatalogKind::Album,
            CatalogItem::Playlist(_) => CatalogKind::Playlist,
            CatalogItem::Artist(_) => CatalogKind::Artist,
        }
    }

    /// Identifier of the underlying record
    pub fn id(&self) -> &str {
        match self {
            CatalogItem::Album(album) => album.id.as_str(),
            CatalogItem::Playlist(playlist) => playlist.id.as_str(),
            CatalogItem::Artist(artist) => artist.id.as_str(),
        }
    }

    /// Card title
    pub fn title(&self) -> &str {
        match self {
            CatalogItem::Album(album) => &album.title,
            CatalogItem::Playlist(playlist) => &playlist.name,
            CatalogItem::Artist(artist) => &artist.name,
        }
    }

    /// Card subtitle
    ///
    /// - album: artist name (`Unknown Artist` if unresolved)
    /// - playlist: song count
    /// - artist: follower count in millions
    pub fn subtitle(&self, catalog: &Catalog) -> String {
        match self {
            CatalogItem::Album(album) => catalog
                .artist(&album.artist_id)
                .map(|artist| artist.name.clone())
                .unwrap_or_else(|| "Unknown Artist".to_string()),
            CatalogItem::Playlist(playlist) => format!("{} songs", playlist.song_ids.len()),
            CatalogItem::Artist(artist) => {
                format!("{:.1}M followers", artist.followers as f64 / 1_000_000.0)
            }
        }
    }

    /// Card image
    pub fn image_url(&self) -> &str {
        match self {
            CatalogItem::Album(album) => &album.cover_url,
            CatalogItem::Playlist(playlist) => &playlist.cover_url,
            CatalogItem::Artist(artist) => &artist.image_url,
        }
    }

    /// Songs the item plays, in play order, ready to become a queue
    pub fn songs(&self, catalog: &Catalog) -> Vec<Song> {
        let songs = match self {
            CatalogItem::Album(album) => catalog.songs_by_album(&album.id),
            CatalogItem::Playlist(playlist) => catalog.playlist_songs(&playlist.id),
            CatalogItem::Artist(artist) => catalog.songs_by_artist(&artist.id),
        };
        songs.into_iter().cloned().collect()
    }

    /// Whether the given song belongs to this item
    pub fn contains_song(&self, song_id: &SongId, catalog: &Catalog) -> bool {
        match self {
            CatalogItem::Playlist(playlist) => playlist.contains(song_id),
            CatalogItem::Album(album) => catalog
                .song(song_id)
                .is_some_and(|song| song.album_id == album.id),
            CatalogItem::Artist(artist) => catalog
                .song(song_id)
                .is_some_and(|song| song.artist_id == artist.id),
        }
    }
}

impl From<Album> for CatalogItem {
    fn from(album: Album) -> Self {
        CatalogItem::Album(album)
    }
}

impl From<Playlist> for CatalogItem {
    fn from(playlist: Playlist) -> Self {
        CatalogItem::Playlist(playlist)
    }
}

impl From<Artist> for CatalogItem {
    fn from(artist: Artist) -> Self {
        CatalogItem::Artist(artist)
    }
}
