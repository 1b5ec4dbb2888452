//! Sakura Player - Playback Management
//!
//! Platform-agnostic playback state for Sakura Player.
//!
//! This crate provides:
//! - Transport state machine (Idle / Playing / Paused)
//! - Queue with canonical order for exact un-shuffle
//! - Fisher-Yates shuffle that keeps the current song in place
//! - Repeat modes (Off, All, One)
//! - Volume with independent mute flag
//! - Recently played list (deduplicated, capped)
//! - Liked songs
//! - Simulated clock: a cancellable tokio tick task
//!
//! # Architecture
//!
//! No audio is decoded or output. [`PlaybackController`] is a synchronous
//! value whose time only moves when [`PlaybackController::tick`] is called.
//! [`PlaybackHandle`] shares it behind a mutex and drives `tick` from a
//! [`Ticker`] while a song is playing.
//!
//! # Example: Basic Playback
//!
//! ```rust
//! use sakura_core::{Catalog, AlbumId};
//! use sakura_playback::{PlaybackController, PlaybackConfig, PlaybackState};
//!
//! let catalog = Catalog::builtin();
//! let songs: Vec<_> = catalog
//!     .songs_by_album(&AlbumId::new("album_1"))
//!     .into_iter()
//!     .cloned()
//!     .collect();
//!
//! let mut controller = PlaybackController::new(PlaybackConfig::default());
//! controller.play(songs[0].clone(), Some(songs.clone()), None);
//! assert_eq!(controller.state(), PlaybackState::Playing);
//!
//! controller.next();
//! assert_eq!(controller.current_index(), 1);
//!
//! controller.set_volume(0.5);
//! controller.pause();
//! assert_eq!(controller.state(), PlaybackState::Paused);
//! ```
//!
//! # Example: Shuffle and Repeat
//!
//! ```rust
//! use sakura_playback::{PlaybackController, RepeatMode};
//!
//! let mut controller = PlaybackController::default();
//!
//! controller.toggle_shuffle();
//! assert!(controller.is_shuffled());
//!
//! // off → all
//! controller.toggle_repeat();
//! assert_eq!(controller.repeat(), RepeatMode::All);
//! ```

mod controller;
pub mod events;
mod handle;
mod history;
mod queue;
mod shuffle;
mod ticker;
pub mod types;
mod volume;

// Public exports
pub use controller::{PlaybackController, MAX_PENDING_EVENTS};
pub use events::PlaybackEvent;
pub use handle::PlaybackHandle;
pub use history::RecentlyPlayed;
pub use queue::Queue;
pub use shuffle::{fisher_yates, shuffled};
pub use ticker::Ticker;
pub use types::{PlaybackConfig, PlaybackSnapshot, PlaybackState, RepeatMode};
pub use volume::Volume;
