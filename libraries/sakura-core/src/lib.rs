//! Sakura Player Core
//!
//! Platform-agnostic domain types, catalog store and error handling for
//! Sakura Player.
//!
//! This crate is the leaf of the workspace: the playback controller and the
//! mock authentication controller both build on the types defined here.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Song`, `Artist`, `Album`, `Playlist`, `User`
//! - **Catalog**: the static in-memory library with lookup and search helpers
//! - **Catalog items**: `CatalogItem`, one variant per browsable kind
//! - **Error Handling**: unified `SakuraError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use sakura_core::{Catalog, CatalogItem, PlaylistId};
//!
//! let catalog = Catalog::builtin();
//!
//! let playlist = catalog.playlist(&PlaylistId::new("playlist_1")).unwrap();
//! let item = CatalogItem::Playlist(playlist.clone());
//!
//! assert_eq!(item.title(), "Today's Top Hits");
//! assert_eq!(item.songs(&catalog).len(), 5);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod catalog;
pub mod error;
pub mod format;
pub mod types;

mod builtin;

// Re-export commonly used types
pub use catalog::Catalog;
pub use error::{Result, SakuraError};
pub use format::{format_duration, format_play_count};

pub use types::{
    Album, AlbumId, Artist, ArtistId, CatalogItem, CatalogKind, Playlist, PlaylistId, Song,
    SongId, User, UserId,
};
