//! Plain-text rendering of catalog entries, events and accounts

use sakura_core::{
    format_duration, format_play_count, Album, Artist, Catalog, CatalogItem, Playlist, Song, User,
};
use sakura_playback::{PlaybackEvent, PlaybackSnapshot, PlaybackState, RepeatMode};

pub fn song_row(catalog: &Catalog, song: &Song) -> String {
    let artist = catalog.artist_name(song).unwrap_or("Unknown Artist");
    let explicit = if song.explicit { " [E]" } else { "" };
    format!(
        "{:<10} {}{} - {} ({}, {} plays)",
        song.id,
        song.title,
        explicit,
        artist,
        format_duration(song.duration),
        format_play_count(song.play_count)
    )
}

pub fn artist_row(artist: &Artist) -> String {
    let verified = if artist.verified { " (verified)" } else { "" };
    format!(
        "{:<10} {}{} - {} followers",
        artist.id,
        artist.name,
        verified,
        format_play_count(artist.followers)
    )
}

pub fn album_row(catalog: &Catalog, album: &Album) -> String {
    let item = CatalogItem::Album(album.clone());
    let year = album
        .release_year()
        .map(|y| y.to_string())
        .unwrap_or_default();
    format!(
        "{:<10} {} - {} ({}, {})",
        album.id,
        album.title,
        item.subtitle(catalog),
        year,
        album.genre
    )
}

pub fn playlist_row(catalog: &Catalog, playlist: &Playlist) -> String {
    let item = CatalogItem::Playlist(playlist.clone());
    format!(
        "{:<10} {} - {} ({})",
        playlist.id,
        playlist.name,
        item.subtitle(catalog),
        playlist.description
    )
}

/// One line per event; position updates render as a progress line
pub fn event_line(catalog: &Catalog, event: &PlaybackEvent) -> String {
    match event {
        PlaybackEvent::StateChanged { state } => match state {
            PlaybackState::Playing => "Playing".to_string(),
            PlaybackState::Paused => "Paused".to_string(),
            PlaybackState::Idle => "Stopped".to_string(),
        },
        PlaybackEvent::SongChanged { song_id, .. } => match catalog.song(song_id) {
            Some(song) => format!("Now playing: {}", song_row(catalog, song)),
            None => format!("Now playing: {song_id}"),
        },
        PlaybackEvent::PositionUpdate {
            position_secs,
            duration_secs,
        } => format!(
            "  {} / {}",
            format_duration(position_secs.max(0.0) as u32),
            format_duration(*duration_secs)
        ),
        PlaybackEvent::VolumeChanged { level, is_muted } => {
            let muted = if *is_muted { " (muted)" } else { "" };
            format!("Volume {:.0}%{}", level * 100.0, muted)
        }
        PlaybackEvent::QueueChanged { length } => format!("Queue: {length} songs"),
        PlaybackEvent::ShuffleChanged { enabled } => {
            format!("Shuffle {}", if *enabled { "on" } else { "off" })
        }
        PlaybackEvent::RepeatChanged { mode } => format!("Repeat {}", repeat_label(*mode)),
        PlaybackEvent::LikeToggled { song_id, liked } => {
            format!("{} {song_id}", if *liked { "Liked" } else { "Unliked" })
        }
        PlaybackEvent::QueueEnded => "End of queue".to_string(),
    }
}

pub fn repeat_label(mode: RepeatMode) -> &'static str {
    match mode {
        RepeatMode::Off => "off",
        RepeatMode::All => "all",
        RepeatMode::One => "one",
    }
}

/// Closing summary after a play session
pub fn session_summary(catalog: &Catalog, snapshot: &PlaybackSnapshot) -> String {
    let mut out = String::from("Recently played:");
    for id in &snapshot.recently_played {
        let title = catalog.song(id).map_or(id.as_str(), |s| s.title.as_str());
        out.push_str("\n  ");
        out.push_str(title);
    }
    out
}

pub fn user_summary(user: &User) -> String {
    format!(
        "{} <{}>\n  id: {}\n  avatar: {}\n  member since: {}",
        user.display_name,
        user.email,
        user.id,
        user.avatar_url.as_deref().unwrap_or("-"),
        user.created_at
    )
}
