//! Integration tests for the playback controller
//!
//! These tests drive the controller through the built-in catalog the way
//! the UI does.

use rand::rngs::StdRng;
use rand::SeedableRng;
use sakura_core::{AlbumId, ArtistId, Catalog, PlaylistId, Song, SongId};
use sakura_playback::{
    PlaybackConfig, PlaybackController, PlaybackEvent, PlaybackState, RepeatMode,
};

// ===== Test Helpers =====

fn song(id: &str, duration: u32) -> Song {
    Song {
        id: SongId::new(id),
        title: id.to_uppercase(),
        artist_id: ArtistId::new("artist_1"),
        album_id: AlbumId::new("album_1"),
        duration,
        track_number: 1,
        explicit: false,
        popularity: 50,
        play_count: 0,
    }
}

fn seeded() -> PlaybackController {
    PlaybackController::with_rng(PlaybackConfig::default(), StdRng::seed_from_u64(2024))
}

fn playlist_songs(catalog: &Catalog, id: &str) -> Vec<Song> {
    catalog
        .playlist_songs(&PlaylistId::new(id))
        .into_iter()
        .cloned()
        .collect()
}

// ===== Scenarios =====

#[test]
fn three_ticks_advance_to_next_song() {
    let mut ctrl = seeded();
    let queue = vec![song("a", 3), song("b", 120), song("c", 90)];
    ctrl.play(queue[0].clone(), Some(queue), None);

    for _ in 0..3 {
        ctrl.tick();
    }

    assert_eq!(ctrl.current_song().unwrap().id.as_str(), "b");
    assert_eq!(ctrl.current_time(), 0.0);
    assert_eq!(ctrl.duration(), 120);
    assert!(ctrl.is_playing());
}

#[test]
fn repeat_all_wraps_from_last_song() {
    let mut ctrl = seeded();
    let queue = vec![song("a", 10), song("b", 10), song("c", 10)];
    ctrl.toggle_repeat();
    assert_eq!(ctrl.repeat(), RepeatMode::All);

    ctrl.play(queue[2].clone(), Some(queue), None);
    assert_eq!(ctrl.current_index(), 2);

    ctrl.next();
    assert_eq!(ctrl.current_index(), 0);
    assert_eq!(ctrl.current_song().unwrap().id.as_str(), "a");
}

#[test]
fn whole_playlist_plays_through_and_stops() {
    let catalog = Catalog::builtin();
    let songs = playlist_songs(&catalog, "playlist_1");
    let total: u32 = songs.iter().map(|s| s.duration).sum();

    let mut ctrl = seeded();
    ctrl.play(songs[0].clone(), Some(songs.clone()), None);

    let mut ticks = 0;
    while ctrl.tick() {
        ticks += 1;
        assert!(ticks <= total, "playback never stopped");
    }

    assert_eq!(ticks + 1, total);
    assert_eq!(ctrl.state(), PlaybackState::Paused);
    assert_eq!(ctrl.current_index(), songs.len() - 1);

    let recent = ctrl.recently_played().ids();
    let expected: Vec<SongId> = songs.iter().rev().map(|s| s.id.clone()).collect();
    assert_eq!(recent, expected);
}

#[test]
fn shuffled_play_keeps_canonical_order() {
    let catalog = Catalog::builtin();
    let songs: Vec<Song> = catalog.songs().to_vec();

    let mut ctrl = seeded();
    ctrl.toggle_shuffle();
    ctrl.play(songs[4].clone(), Some(songs.clone()), None);

    assert_eq!(ctrl.original_queue(), songs.as_slice());
    let index = ctrl.current_index();
    assert_eq!(ctrl.queue()[index].id, songs[4].id);

    ctrl.toggle_shuffle();
    assert_eq!(ctrl.queue(), songs.as_slice());
    assert_eq!(ctrl.current_index(), 4);
}

#[test]
fn liked_and_recent_survive_queue_changes() {
    let catalog = Catalog::builtin();
    let mut ctrl = seeded();

    let first = playlist_songs(&catalog, "playlist_1");
    ctrl.play(first[0].clone(), Some(first.clone()), None);
    ctrl.toggle_like(&first[0].id);

    let second = playlist_songs(&catalog, "playlist_2");
    ctrl.play(second[0].clone(), Some(second.clone()), None);

    assert!(ctrl.is_liked(&first[0].id));
    assert_eq!(ctrl.recently_played().len(), 2);
    assert_eq!(ctrl.queue(), second.as_slice());
}

// ===== Events =====

#[test]
fn play_emits_queue_song_and_state_events() {
    let mut ctrl = seeded();
    let queue = vec![song("a", 10), song("b", 10)];
    ctrl.play(queue[0].clone(), Some(queue), None);

    let events = ctrl.drain_events();
    assert_eq!(
        events,
        vec![
            PlaybackEvent::QueueChanged { length: 2 },
            PlaybackEvent::SongChanged {
                song_id: SongId::new("a"),
                previous_song_id: None,
            },
            PlaybackEvent::StateChanged {
                state: PlaybackState::Playing,
            },
        ]
    );
    assert!(!ctrl.has_pending_events());
}

#[test]
fn toggles_emit_events() {
    let mut ctrl = seeded();
    ctrl.toggle_repeat();
    ctrl.toggle_shuffle();
    ctrl.toggle_mute();
    ctrl.toggle_like(&SongId::new("x"));

    let events = ctrl.drain_events();
    assert!(events.contains(&PlaybackEvent::RepeatChanged {
        mode: RepeatMode::All
    }));
    assert!(events.contains(&PlaybackEvent::ShuffleChanged { enabled: true }));
    assert!(events.contains(&PlaybackEvent::VolumeChanged {
        level: 0.7,
        is_muted: true
    }));
    assert!(events.contains(&PlaybackEvent::LikeToggled {
        song_id: SongId::new("x"),
        liked: true
    }));
}

#[test]
fn pause_when_idle_emits_nothing() {
    let mut ctrl = seeded();
    ctrl.pause();
    ctrl.resume();
    ctrl.next();
    ctrl.previous();
    assert!(ctrl.drain_events().is_empty());
    assert_eq!(ctrl.state(), PlaybackState::Idle);
}

#[test]
fn snapshot_serializes_for_ui() {
    let catalog = Catalog::builtin();
    let songs = playlist_songs(&catalog, "playlist_1");
    let mut ctrl = seeded();
    ctrl.play(songs[0].clone(), Some(songs), None);

    let json = serde_json::to_value(ctrl.snapshot()).unwrap();
    assert_eq!(json["state"], "playing");
    assert_eq!(json["repeat"], "off");
    assert_eq!(json["queue"].as_array().unwrap().len(), 5);
}
