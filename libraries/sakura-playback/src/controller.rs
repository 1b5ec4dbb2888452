//! Playback controller - core state machine
//!
//! Coordinates queue, history, volume, shuffle and repeat. Time is advanced
//! externally through [`PlaybackController::tick`]; the controller itself
//! never spawns tasks or sleeps.

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::SeedableRng;
use sakura_core::{Playlist, Song, SongId};
use tracing::debug;

use crate::{
    events::PlaybackEvent,
    history::RecentlyPlayed,
    queue::Queue,
    types::{PlaybackConfig, PlaybackSnapshot, PlaybackState, RepeatMode},
    volume::Volume,
};

/// Seconds into a song after which `previous` restarts it instead of
/// moving back
const RESTART_THRESHOLD_SECS: f64 = 3.0;

/// Undrained events kept before the oldest are discarded
pub const MAX_PENDING_EVENTS: usize = 1024;

/// Main playback controller
///
/// Every operation is total: missing preconditions (empty queue, no song)
/// turn it into a no-op and out-of-range arguments are clamped.
pub struct PlaybackController {
    // Transport
    current_song: Option<Song>,
    is_playing: bool,
    current_time: f64,
    duration: u32,

    // Settings
    volume: Volume,
    shuffle: bool,
    repeat: RepeatMode,

    // Components
    queue: Queue,
    recently_played: RecentlyPlayed,
    liked: HashSet<SongId>,
    current_playlist: Option<Playlist>,
    rng: StdRng,

    // Event queue for UI synchronization, capped at MAX_PENDING_EVENTS
    pending_events: Vec<PlaybackEvent>,
}

impl PlaybackController {
    /// Create new controller with an entropy-seeded RNG
    pub fn new(config: PlaybackConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Create new controller with the given RNG
    ///
    /// Seed the RNG to make shuffles reproducible.
    pub fn with_rng(config: PlaybackConfig, rng: StdRng) -> Self {
        Self {
            current_song: None,
            is_playing: false,
            current_time: 0.0,
            duration: 0,
            volume: Volume::new(config.volume),
            shuffle: config.shuffle,
            repeat: config.repeat,
            queue: Queue::new(),
            recently_played: RecentlyPlayed::new(config.history_limit),
            liked: HashSet::new(),
            current_playlist: None,
            rng,
            pending_events: Vec::new(),
        }
    }

    // ===== Transport =====

    /// Play a song, optionally replacing the queue
    ///
    /// With a new queue, the cursor lands on the song's position in the
    /// (possibly shuffled) active queue, or 0 if it is not in there. Without
    /// one, `start_index` moves the cursor inside the existing queue.
    pub fn play(&mut self, song: Song, queue: Option<Vec<Song>>, start_index: Option<usize>) {
        debug!(song_id = %song.id, title = %song.title, "Playing song");

        if let Some(songs) = queue {
            if self.shuffle {
                self.queue.load_shuffled(songs, &mut self.rng);
            } else {
                self.queue.load(songs);
            }
            let index = self.queue.position_of(&song.id).unwrap_or(0);
            self.queue.set_index(index);
            self.emit_queue_changed();
        } else if let Some(index) = start_index {
            self.queue.set_index(index);
        }

        self.load_song(song);
        self.set_playing(true);
    }

    /// Pause playback
    pub fn pause(&mut self) {
        if self.is_playing {
            debug!("Pausing playback");
            self.set_playing(false);
        }
    }

    /// Resume playback if a song is loaded
    pub fn resume(&mut self) {
        if self.current_song.is_some() && !self.is_playing {
            debug!("Resuming playback");
            self.set_playing(true);
        }
    }

    /// Skip to the next song
    ///
    /// Repeat one replays the current entry. At the end of the queue repeat
    /// all wraps to the start and repeat off stops playback without moving
    /// the cursor.
    pub fn next(&mut self) {
        let Some(last) = self.queue.last_index() else {
            return;
        };

        let index = self.queue.index();
        let next_index = match self.repeat {
            RepeatMode::One => index,
            _ if index < last => index + 1,
            RepeatMode::All => 0,
            RepeatMode::Off => {
                debug!("Reached end of queue");
                self.set_playing(false);
                self.push_event(PlaybackEvent::QueueEnded);
                return;
            }
        };

        self.jump_to(next_index);
    }

    /// Go back to the previous song, or restart the current one when more
    /// than 3 seconds in
    pub fn previous(&mut self) {
        let Some(last) = self.queue.last_index() else {
            return;
        };

        if self.current_time > RESTART_THRESHOLD_SECS {
            debug!("Restarting current song");
            self.current_time = 0.0;
            self.emit_position();
            return;
        }

        let index = self.queue.index();
        let prev_index = match index.checked_sub(1) {
            Some(i) => i,
            None if self.repeat == RepeatMode::All => last,
            None => 0,
        };

        self.jump_to(prev_index);
    }

    /// Seek within the current song, clamped to `[0, duration]`
    pub fn seek(&mut self, seconds: f64) {
        let seconds = if seconds.is_nan() { 0.0 } else { seconds };
        self.current_time = seconds.clamp(0.0, f64::from(self.duration));
        self.emit_position();
    }

    /// Advance simulated time by one second
    ///
    /// Reaching the song's duration advances the queue and resets the time
    /// to 0. Returns whether playback is still running afterwards.
    pub fn tick(&mut self) -> bool {
        if !self.is_playing || self.current_song.is_none() {
            return false;
        }

        self.current_time += 1.0;
        if self.current_time >= f64::from(self.duration) {
            self.next();
            self.current_time = 0.0;
        }
        self.emit_position();

        self.is_playing
    }

    // ===== Volume =====

    /// Set volume (clamped to 0.0-1.0); a positive level unmutes
    pub fn set_volume(&mut self, level: f32) {
        self.volume.set_level(level);
        self.emit_volume_changed();
    }

    /// Toggle mute without touching the volume level
    pub fn toggle_mute(&mut self) {
        self.volume.toggle_mute();
        self.emit_volume_changed();
    }

    // ===== Shuffle / repeat =====

    /// Toggle shuffle
    ///
    /// Turning it on reshuffles the canonical queue while keeping the
    /// current song at the cursor. Turning it off restores the canonical
    /// order and moves the cursor to the current song.
    pub fn toggle_shuffle(&mut self) {
        self.shuffle = !self.shuffle;
        let current = self.current_song.as_ref().map(|s| s.id.clone());

        if self.shuffle {
            self.queue.shuffle_around(current.as_ref(), &mut self.rng);
        } else {
            self.queue.restore_original_order(current.as_ref());
        }

        debug!(enabled = self.shuffle, "Shuffle toggled");
        self.push_event(PlaybackEvent::ShuffleChanged {
            enabled: self.shuffle,
        });
        self.emit_queue_changed();
    }

    /// Cycle repeat mode: off → all → one → off
    pub fn toggle_repeat(&mut self) {
        self.repeat = self.repeat.cycle();
        debug!(mode = ?self.repeat, "Repeat mode changed");
        self.push_event(PlaybackEvent::RepeatChanged { mode: self.repeat });
    }

    // ===== Library =====

    /// Add or remove a song from the liked set
    pub fn toggle_like(&mut self, song_id: &SongId) {
        let liked = if self.liked.remove(song_id) {
            false
        } else {
            self.liked.insert(song_id.clone());
            true
        };

        self.push_event(PlaybackEvent::LikeToggled {
            song_id: song_id.clone(),
            liked,
        });
    }

    /// Check if a song is liked
    pub fn is_liked(&self, song_id: &SongId) -> bool {
        self.liked.contains(song_id)
    }

    /// Liked song ids (unordered)
    pub fn liked_songs(&self) -> &HashSet<SongId> {
        &self.liked
    }

    /// Record a song as most recently played
    pub fn add_to_recently_played(&mut self, song: Song) {
        self.recently_played.push(song);
    }

    /// Set or clear the playlist being browsed
    pub fn set_current_playlist(&mut self, playlist: Option<Playlist>) {
        self.current_playlist = playlist;
    }

    /// Playlist being browsed
    pub fn current_playlist(&self) -> Option<&Playlist> {
        self.current_playlist.as_ref()
    }

    // ===== Queries =====

    /// Song currently loaded
    pub fn current_song(&self) -> Option<&Song> {
        self.current_song.as_ref()
    }

    /// Whether playback is running
    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    /// Elapsed seconds in the current song
    pub fn current_time(&self) -> f64 {
        self.current_time
    }

    /// Duration of the current song in seconds
    pub fn duration(&self) -> u32 {
        self.duration
    }

    /// Volume level (0.0-1.0), independent of mute
    pub fn volume(&self) -> f32 {
        self.volume.level()
    }

    /// Output gain: 0 when muted
    pub fn effective_volume(&self) -> f32 {
        self.volume.effective()
    }

    /// Check if muted
    pub fn is_muted(&self) -> bool {
        self.volume.is_muted()
    }

    /// Check if shuffle is on
    pub fn is_shuffled(&self) -> bool {
        self.shuffle
    }

    /// Current repeat mode
    pub fn repeat(&self) -> RepeatMode {
        self.repeat
    }

    /// Active queue in play order
    pub fn queue(&self) -> &[Song] {
        self.queue.songs()
    }

    /// Queue in canonical (unshuffled) order
    pub fn original_queue(&self) -> &[Song] {
        self.queue.original()
    }

    /// Cursor into the active queue
    pub fn current_index(&self) -> usize {
        self.queue.index()
    }

    /// Recently played songs, most recent first
    pub fn recently_played(&self) -> &RecentlyPlayed {
        &self.recently_played
    }

    /// Derived playback state
    pub fn state(&self) -> PlaybackState {
        match (&self.current_song, self.is_playing) {
            (None, _) => PlaybackState::Idle,
            (Some(_), true) => PlaybackState::Playing,
            (Some(_), false) => PlaybackState::Paused,
        }
    }

    /// Serializable view for rendering
    pub fn snapshot(&self) -> PlaybackSnapshot {
        let mut liked_songs: Vec<SongId> = self.liked.iter().cloned().collect();
        liked_songs.sort();

        PlaybackSnapshot {
            state: self.state(),
            current_song: self.current_song.clone(),
            current_time: self.current_time,
            duration: self.duration,
            volume: self.volume.level(),
            is_muted: self.volume.is_muted(),
            is_shuffled: self.shuffle,
            repeat: self.repeat,
            queue: self.queue.songs().iter().map(|s| s.id.clone()).collect(),
            current_index: self.queue.index(),
            recently_played: self.recently_played.ids(),
            liked_songs,
        }
    }

    // ===== Events =====

    /// Drain all pending events
    ///
    /// Returns the events emitted since the last drain. Only the newest
    /// [`MAX_PENDING_EVENTS`] are kept between drains.
    pub fn drain_events(&mut self) -> Vec<PlaybackEvent> {
        std::mem::take(&mut self.pending_events)
    }

    /// Check if there are pending events
    pub fn has_pending_events(&self) -> bool {
        !self.pending_events.is_empty()
    }

    // ===== Private helpers =====

    /// Move the cursor and load the song under it
    fn jump_to(&mut self, index: usize) {
        self.queue.set_index(index);
        if let Some(song) = self.queue.current().cloned() {
            self.load_song(song);
        }
    }

    /// Make a song current from the start
    fn load_song(&mut self, song: Song) {
        let previous_song_id = self.current_song.as_ref().map(|s| s.id.clone());
        let song_id = song.id.clone();

        self.current_time = 0.0;
        self.duration = song.duration;
        self.recently_played.push(song.clone());
        self.current_song = Some(song);

        self.push_event(PlaybackEvent::SongChanged {
            song_id,
            previous_song_id,
        });
    }

    fn set_playing(&mut self, playing: bool) {
        let before = self.state();
        self.is_playing = playing;
        let after = self.state();
        if before != after {
            self.push_event(PlaybackEvent::StateChanged { state: after });
        }
    }

    fn push_event(&mut self, event: PlaybackEvent) {
        if self.pending_events.len() >= MAX_PENDING_EVENTS {
            self.pending_events.remove(0);
        }
        self.pending_events.push(event);
    }

    fn emit_position(&mut self) {
        self.push_event(PlaybackEvent::PositionUpdate {
            position_secs: self.current_time,
            duration_secs: self.duration,
        });
    }

    fn emit_volume_changed(&mut self) {
        self.push_event(PlaybackEvent::VolumeChanged {
            level: self.volume.level(),
            is_muted: self.volume.is_muted(),
        });
    }

    fn emit_queue_changed(&mut self) {
        self.push_event(PlaybackEvent::QueueChanged {
            length: self.queue.len(),
        });
    }
}

impl Default for PlaybackController {
    fn default() -> Self {
        Self::new(PlaybackConfig::default())
    }
}
