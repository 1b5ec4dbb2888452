//! Play queue with canonical order
//!
//! Keeps two sequences:
//! - Active queue: the order songs actually play in (possibly shuffled)
//! - Original queue: insertion order, used to undo a shuffle exactly
//!
//! plus the cursor into the active queue.

use crate::shuffle;
use rand::Rng;
use sakura_core::{Song, SongId};

/// Play queue
///
/// Invariant: when the active queue is non-empty, `index < active.len()`.
#[derive(Debug, Clone, Default)]
pub struct Queue {
    /// Songs in play order
    active: Vec<Song>,

    /// Songs in insertion order
    original: Vec<Song>,

    /// Cursor into `active`
    index: usize,
}

impl Queue {
    /// Create new empty queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the queue, playing in the given order
    pub fn load(&mut self, songs: Vec<Song>) {
        self.active.clone_from(&songs);
        self.original = songs;
        self.index = 0;
    }

    /// Replace the queue, playing in a fresh random order
    ///
    /// The given order is kept as the canonical order.
    pub fn load_shuffled<R: Rng + ?Sized>(&mut self, songs: Vec<Song>, rng: &mut R) {
        self.active = shuffle::shuffled(&songs, rng);
        self.original = songs;
        self.index = 0;
    }

    /// Reshuffle from the canonical order, keeping the current song at the
    /// cursor position
    ///
    /// The current song is taken out of the new permutation and put back at
    /// the old cursor index, so the cursor keeps pointing at it while its
    /// neighbours change.
    pub fn shuffle_around<R: Rng + ?Sized>(&mut self, current: Option<&SongId>, rng: &mut R) {
        let mut shuffled = shuffle::shuffled(&self.original, rng);

        if let Some(found) = current.and_then(|id| shuffled.iter().position(|s| &s.id == id)) {
            if found != self.index {
                let song = shuffled.remove(found);
                let at = self.index.min(shuffled.len());
                shuffled.insert(at, song);
            }
        }

        self.active = shuffled;
        self.clamp_index();
    }

    /// Restore the canonical order and move the cursor to the current song
    /// (or the start if it is not queued)
    pub fn restore_original_order(&mut self, current: Option<&SongId>) {
        self.active.clone_from(&self.original);
        self.index = current
            .and_then(|id| self.position_of(id))
            .unwrap_or(0);
    }

    /// Index of a song in the active queue
    pub fn position_of(&self, id: &SongId) -> Option<usize> {
        self.active.iter().position(|s| &s.id == id)
    }

    /// Move the cursor, clamped to the queue bounds
    pub fn set_index(&mut self, index: usize) {
        self.index = index;
        self.clamp_index();
    }

    /// Current cursor position
    pub fn index(&self) -> usize {
        self.index
    }

    /// Song under the cursor
    pub fn current(&self) -> Option<&Song> {
        self.active.get(self.index)
    }

    /// Active queue in play order
    pub fn songs(&self) -> &[Song] {
        &self.active
    }

    /// Canonical (unshuffled) order
    pub fn original(&self) -> &[Song] {
        &self.original
    }

    /// Total number of songs in queue
    pub fn len(&self) -> usize {
        self.active.len()
    }

    /// Check if queue is empty
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Index of the last song, if any
    pub fn last_index(&self) -> Option<usize> {
        self.active.len().checked_sub(1)
    }

    fn clamp_index(&mut self) {
        self.index = match self.last_index() {
            Some(last) => self.index.min(last),
            None => 0,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use sakura_core::{AlbumId, ArtistId};

    fn create_test_song(id: &str) -> Song {
        Song {
            id: SongId::new(id),
            title: format!("Song {id}"),
            artist_id: ArtistId::new("artist_1"),
            album_id: AlbumId::new("album_1"),
            duration: 180,
            track_number: 1,
            explicit: false,
            popularity: 50,
            play_count: 0,
        }
    }

    fn songs(n: usize) -> Vec<Song> {
        (1..=n).map(|i| create_test_song(&i.to_string())).collect()
    }

    fn ids(songs: &[Song]) -> Vec<String> {
        songs.iter().map(|s| s.id.to_string()).collect()
    }

    #[test]
    fn create_empty_queue() {
        let queue = Queue::new();
        assert!(queue.is_empty());
        assert_eq!(queue.len(), 0);
        assert_eq!(queue.index(), 0);
        assert!(queue.current().is_none());
        assert_eq!(queue.last_index(), None);
    }

    #[test]
    fn load_keeps_order() {
        let mut queue = Queue::new();
        queue.load(songs(3));

        assert_eq!(ids(queue.songs()), vec!["1", "2", "3"]);
        assert_eq!(ids(queue.original()), vec!["1", "2", "3"]);
        assert_eq!(queue.current().unwrap().id.as_str(), "1");
    }

    #[test]
    fn load_shuffled_keeps_canonical_order() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut queue = Queue::new();
        queue.load_shuffled(songs(10), &mut rng);

        assert_eq!(ids(queue.original()), ids(&songs(10)));
        let mut active = ids(queue.songs());
        active.sort();
        let mut expected = ids(&songs(10));
        expected.sort();
        assert_eq!(active, expected);
    }

    #[test]
    fn set_index_clamps() {
        let mut queue = Queue::new();
        queue.load(songs(3));

        queue.set_index(10);
        assert_eq!(queue.index(), 2);

        queue.load(Vec::new());
        queue.set_index(4);
        assert_eq!(queue.index(), 0);
    }

    #[test]
    fn shuffle_around_keeps_current_at_cursor() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut queue = Queue::new();
        queue.load(songs(8));
        queue.set_index(5);
        let current = SongId::new("6");

        for _ in 0..20 {
            queue.shuffle_around(Some(&current), &mut rng);
            assert_eq!(queue.index(), 5);
            assert_eq!(queue.current().unwrap().id, current);
            assert_eq!(queue.len(), 8);
        }
    }

    #[test]
    fn shuffle_around_without_current_song() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut queue = Queue::new();
        queue.load(songs(4));
        queue.set_index(3);

        queue.shuffle_around(Some(&SongId::new("missing")), &mut rng);
        assert_eq!(queue.len(), 4);
        assert_eq!(queue.index(), 3);
    }

    #[test]
    fn restore_original_order_relocates_cursor() {
        let mut rng = StdRng::seed_from_u64(13);
        let mut queue = Queue::new();
        queue.load(songs(6));
        queue.set_index(1);
        let current = SongId::new("2");

        queue.shuffle_around(Some(&current), &mut rng);
        queue.set_index(4);
        let now_playing = queue.current().unwrap().id.clone();

        queue.restore_original_order(Some(&now_playing));
        assert_eq!(ids(queue.songs()), ids(&songs(6)));
        assert_eq!(queue.current().unwrap().id, now_playing);
    }

    #[test]
    fn restore_without_match_goes_to_start() {
        let mut queue = Queue::new();
        queue.load(songs(3));
        queue.set_index(2);

        queue.restore_original_order(Some(&SongId::new("other")));
        assert_eq!(queue.index(), 0);

        queue.set_index(2);
        queue.restore_original_order(None);
        assert_eq!(queue.index(), 0);
    }
}
