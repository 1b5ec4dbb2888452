/// ID types for Sakura Player entities
use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from any string-like value
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the inner string
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }
    };
}

string_id!(
    /// Song identifier (e.g. `song_1`)
    SongId
);

string_id!(
    /// Artist identifier (e.g. `artist_1`)
    ArtistId
);

string_id!(
    /// Album identifier (e.g. `album_1`)
    AlbumId
);

string_id!(
    /// Playlist identifier (e.g. `playlist_1`)
    PlaylistId
);

string_id!(
    /// User identifier (e.g. `user_1718000000000_k3j9x0a2b`)
    UserId
);
