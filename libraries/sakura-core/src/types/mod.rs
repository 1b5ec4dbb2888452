//! Domain types for songs, artists, albums, playlists and users

mod album;
mod artist;
mod ids;
mod item;
mod playlist;
mod song;
mod user;

pub use album::Album;
pub use artist::Artist;
pub use ids::{AlbumId, ArtistId, PlaylistId, SongId, UserId};
pub use item::{CatalogItem, CatalogKind};
pub use playlist::Playlist;
pub use song::Song;
pub use user::User;
