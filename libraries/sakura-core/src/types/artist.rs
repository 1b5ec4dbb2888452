//! Artist types

use super::ArtistId;
use serde::{Deserialize, Serialize};

/// An artist
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artist {
    /// Unique artist identifier
    pub id: ArtistId,
    /// Display name
    pub name: String,
    /// Profile image URL
    pub image_url: String,
    /// Follower count, shown as e.g. `12.3M followers`
    pub followers: u64,
    /// Verified artist badge
    pub verified: bool,
}
