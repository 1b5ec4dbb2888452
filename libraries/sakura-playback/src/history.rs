//! Recently played tracking
//!
//! Bounded, most-recent-first list of songs, deduplicated by id.

use sakura_core::{Song, SongId};
use std::collections::VecDeque;

/// Recently played songs
///
/// Pushing a song that is already present moves it to the front instead of
/// adding a second entry. When full, the oldest entry is discarded.
#[derive(Debug, Clone)]
pub struct RecentlyPlayed {
    /// Most recent = front
    songs: VecDeque<Song>,

    /// Maximum size
    max_size: usize,
}

impl RecentlyPlayed {
    /// Create new list with specified maximum size
    pub fn new(max_size: usize) -> Self {
        Self {
            songs: VecDeque::with_capacity(max_size),
            max_size,
        }
    }

    /// Record a play
    pub fn push(&mut self, song: Song) {
        self.songs.retain(|s| s.id != song.id);
        self.songs.push_front(song);
        self.songs.truncate(self.max_size);
    }

    /// Most recent song
    pub fn latest(&self) -> Option<&Song> {
        self.songs.front()
    }

    /// All songs, most recent first
    pub fn iter(&self) -> impl Iterator<Item = &Song> {
        self.songs.iter()
    }

    /// Song ids, most recent first
    pub fn ids(&self) -> Vec<SongId> {
        self.songs.iter().map(|s| s.id.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.songs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    /// Clear all entries
    pub fn clear(&mut self) {
        self.songs.clear();
    }

    /// Get maximum size
    pub fn max_size(&self) -> usize {
        self.max_size
    }
}

impl Default for RecentlyPlayed {
    fn default() -> Self {
        Self::new(20)
    }
}
