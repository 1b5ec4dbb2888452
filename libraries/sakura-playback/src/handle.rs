//! Shared playback handle with automatic time progression
//!
//! [`PlaybackHandle`] owns the controller behind `Arc<Mutex<_>>` and keeps a
//! [`Ticker`] running exactly while a song is playing. The ticker is
//! restarted whenever the playing flag or the current song changes and is
//! cancelled when the handle is dropped.

use std::ops::ControlFlow;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use sakura_core::{Catalog, CatalogItem, Playlist, Song, SongId};
use tracing::debug;

use crate::{
    controller::PlaybackController,
    events::PlaybackEvent,
    ticker::Ticker,
    types::{PlaybackConfig, PlaybackSnapshot},
};

/// State shared between the handle and its tick task
struct Shared {
    controller: PlaybackController,

    /// Bumped on every reschedule; stale tick tasks compare and exit
    generation: u64,

    /// Song the running ticker advances, `None` when no ticker should run
    ticking_for: Option<SongId>,
}

/// Thread-safe playback controller with a built-in clock
///
/// Mutating methods need a tokio runtime, since they may spawn the tick
/// task. Every tick queues a position update; owners should call
/// [`PlaybackHandle::drain_events`] regularly, since only the newest
/// [`MAX_PENDING_EVENTS`](crate::MAX_PENDING_EVENTS) are retained.
pub struct PlaybackHandle {
    shared: Arc<Mutex<Shared>>,
    ticker: Mutex<Ticker>,
    tick_period: Duration,
}

impl PlaybackHandle {
    /// Create a handle around a fresh controller
    pub fn new(config: PlaybackConfig) -> Self {
        let tick_period = config.tick_period;
        Self::from_controller(PlaybackController::new(config), tick_period)
    }

    /// Wrap an existing controller
    pub fn from_controller(controller: PlaybackController, tick_period: Duration) -> Self {
        Self {
            shared: Arc::new(Mutex::new(Shared {
                controller,
                generation: 0,
                ticking_for: None,
            })),
            ticker: Mutex::new(Ticker::new()),
            tick_period,
        }
    }

    // ===== Transport =====

    /// See [`PlaybackController::play`]
    pub fn play(&self, song: Song, queue: Option<Vec<Song>>, start_index: Option<usize>) {
        self.update(|c| c.play(song, queue, start_index));
    }

    /// See [`PlaybackController::pause`]
    pub fn pause(&self) {
        self.update(PlaybackController::pause);
    }

    /// See [`PlaybackController::resume`]
    pub fn resume(&self) {
        self.update(PlaybackController::resume);
    }

    /// See [`PlaybackController::next`]
    pub fn next(&self) {
        self.update(PlaybackController::next);
    }

    /// See [`PlaybackController::previous`]
    pub fn previous(&self) {
        self.update(PlaybackController::previous);
    }

    /// See [`PlaybackController::seek`]
    pub fn seek(&self, seconds: f64) {
        self.update(|c| c.seek(seconds));
    }

    /// See [`PlaybackController::set_volume`]
    pub fn set_volume(&self, level: f32) {
        self.update(|c| c.set_volume(level));
    }

    /// See [`PlaybackController::toggle_mute`]
    pub fn toggle_mute(&self) {
        self.update(PlaybackController::toggle_mute);
    }

    /// See [`PlaybackController::toggle_shuffle`]
    pub fn toggle_shuffle(&self) {
        self.update(PlaybackController::toggle_shuffle);
    }

    /// See [`PlaybackController::toggle_repeat`]
    pub fn toggle_repeat(&self) {
        self.update(PlaybackController::toggle_repeat);
    }

    /// See [`PlaybackController::toggle_like`]
    pub fn toggle_like(&self, song_id: &SongId) {
        self.update(|c| c.toggle_like(song_id));
    }

    /// See [`PlaybackController::set_current_playlist`]
    pub fn set_current_playlist(&self, playlist: Option<Playlist>) {
        self.update(|c| c.set_current_playlist(playlist));
    }

    /// Play button on an album, playlist or artist card
    ///
    /// If the item is already the one playing, toggles pause/resume.
    /// Otherwise starts its first song with all of its songs as the queue.
    /// Playlists also become the current playlist. Items without songs are
    /// ignored.
    pub fn play_item(&self, item: &CatalogItem, catalog: &Catalog) {
        let songs = item.songs(catalog);
        let Some(first) = songs.first().cloned() else {
            debug!(item_id = item.id(), "Item has no songs");
            return;
        };

        self.update(|c| {
            let is_current = match item {
                CatalogItem::Playlist(playlist) => {
                    c.current_playlist().is_some_and(|p| p.id == playlist.id)
                }
                _ => c
                    .current_song()
                    .is_some_and(|s| item.contains_song(&s.id, catalog)),
            };

            if is_current {
                if c.is_playing() {
                    c.pause();
                } else {
                    c.resume();
                }
                return;
            }

            if let CatalogItem::Playlist(playlist) = item {
                c.set_current_playlist(Some(playlist.clone()));
            }
            c.play(first, Some(songs), None);
        });
    }

    // ===== Queries =====

    /// Serializable view of the controller
    pub fn snapshot(&self) -> PlaybackSnapshot {
        self.lock_shared().controller.snapshot()
    }

    /// Drain events emitted by user actions and ticks
    pub fn drain_events(&self) -> Vec<PlaybackEvent> {
        self.lock_shared().controller.drain_events()
    }

    /// Read the controller under the lock
    pub fn with_controller<R>(&self, f: impl FnOnce(&PlaybackController) -> R) -> R {
        f(&self.lock_shared().controller)
    }

    /// Whether the tick task is running
    pub fn is_ticking(&self) -> bool {
        self.lock_ticker().is_active()
    }

    /// Configured real time per simulated second
    pub fn tick_period(&self) -> Duration {
        self.tick_period
    }

    // ===== Private helpers =====

    /// Mutate the controller, then bring the ticker in line with the new
    /// `(is_playing, current song)` pair
    fn update<R>(&self, f: impl FnOnce(&mut PlaybackController) -> R) -> R {
        let mut ticker = self.lock_ticker();
        let mut shared = self.lock_shared();

        let result = f(&mut shared.controller);

        let wanted = if shared.controller.is_playing() {
            shared.controller.current_song().map(|s| s.id.clone())
        } else {
            None
        };

        if wanted == shared.ticking_for && (wanted.is_none() || ticker.is_active()) {
            return result;
        }

        shared.generation += 1;
        shared.ticking_for.clone_from(&wanted);
        let generation = shared.generation;
        drop(shared);

        match wanted {
            Some(song_id) => {
                debug!(%song_id, "Starting tick task");
                let shared = Arc::clone(&self.shared);
                ticker.schedule(self.tick_period, move || tick_once(&shared, generation));
            }
            None => {
                debug!("Stopping tick task");
                ticker.cancel();
            }
        }

        result
    }

    fn lock_shared(&self) -> MutexGuard<'_, Shared> {
        self.shared.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn lock_ticker(&self) -> MutexGuard<'_, Ticker> {
        self.ticker.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for PlaybackHandle {
    fn default() -> Self {
        Self::new(PlaybackConfig::default())
    }
}

/// One tick from the background task
fn tick_once(shared: &Mutex<Shared>, generation: u64) -> ControlFlow<()> {
    let mut shared = shared.lock().unwrap_or_else(PoisonError::into_inner);
    if shared.generation != generation {
        return ControlFlow::Break(());
    }

    if shared.controller.tick() {
        // Auto-advance may have switched songs; keep ticking for the new one
        shared.ticking_for = shared.controller.current_song().map(|s| s.id.clone());
        ControlFlow::Continue(())
    } else {
        shared.ticking_for = None;
        ControlFlow::Break(())
    }
}
