//! Command implementations
//!
//! Each command renders into a writer so tests can capture output.

use std::io::Write;
use std::path::Path;

use clap::ValueEnum;
use sakura_auth::{AuthController, FileStore, ProfileUpdate, SignUpForm};
use sakura_core::{AlbumId, ArtistId, Catalog, CatalogItem, PlaylistId, SakuraError};
use sakura_playback::{PlaybackHandle, PlaybackState, RepeatMode};
use tokio::time::{interval, Instant};

use crate::error::Result;
use crate::render;

/// Which part of the catalog to list
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Listing {
    Songs,
    Artists,
    Albums,
    Playlists,
    Top,
    /// Home page "recently played" shelf
    Recent,
}

/// Options for a play session
#[derive(Debug, Clone)]
pub struct PlayOptions {
    /// Simulated seconds to run for
    pub seconds: u64,
    pub shuffle: bool,
    pub repeat: Option<RepeatMode>,
}

/// List catalog entries
pub fn list_catalog(
    out: &mut impl Write,
    catalog: &Catalog,
    listing: Listing,
    limit: Option<usize>,
) -> anyhow::Result<()> {
    let limit = limit.unwrap_or(usize::MAX);
    match listing {
        Listing::Songs => {
            for song in catalog.songs().iter().take(limit) {
                writeln!(out, "{}", render::song_row(catalog, song))?;
            }
        }
        Listing::Artists => {
            for artist in catalog.artists().iter().take(limit) {
                writeln!(out, "{}", render::artist_row(artist))?;
            }
        }
        Listing::Albums => {
            for album in catalog.albums().iter().take(limit) {
                writeln!(out, "{}", render::album_row(catalog, album))?;
            }
        }
        Listing::Playlists => {
            for playlist in catalog.playlists().iter().take(limit) {
                writeln!(out, "{}", render::playlist_row(catalog, playlist))?;
            }
        }
        Listing::Top => {
            let limit = if limit == usize::MAX { 10 } else { limit };
            for (rank, song) in catalog.top_songs(limit).into_iter().enumerate() {
                writeln!(out, "{:>2}. {}", rank + 1, render::song_row(catalog, song))?;
            }
        }
        Listing::Recent => {
            for song in catalog.recently_played_sample().into_iter().take(limit) {
                writeln!(out, "{}", render::song_row(catalog, song))?;
            }
        }
    }
    Ok(())
}

/// Search songs, artists and albums
pub fn search(out: &mut impl Write, catalog: &Catalog, query: &str) -> anyhow::Result<()> {
    let songs = catalog.search_songs(query);
    let artists = catalog.search_artists(query);
    let albums = catalog.search_albums(query);

    if songs.is_empty() && artists.is_empty() && albums.is_empty() {
        writeln!(out, "No results for \"{query}\"")?;
        return Ok(());
    }

    if !songs.is_empty() {
        writeln!(out, "Songs:")?;
        for song in songs {
            writeln!(out, "  {}", render::song_row(catalog, song))?;
        }
    }
    if !artists.is_empty() {
        writeln!(out, "Artists:")?;
        for artist in artists {
            writeln!(out, "  {}", render::artist_row(artist))?;
        }
    }
    if !albums.is_empty() {
        writeln!(out, "Albums:")?;
        for album in albums {
            writeln!(out, "  {}", render::album_row(catalog, album))?;
        }
    }
    Ok(())
}

/// Resolve a playlist, album or artist id
pub fn find_item(catalog: &Catalog, id: &str) -> Result<CatalogItem> {
    if let Some(playlist) = catalog.playlist(&PlaylistId::new(id)) {
        return Ok(CatalogItem::Playlist(playlist.clone()));
    }
    if let Some(album) = catalog.album(&AlbumId::new(id)) {
        return Ok(CatalogItem::Album(album.clone()));
    }
    if let Some(artist) = catalog.artist(&ArtistId::new(id)) {
        return Ok(CatalogItem::Artist(artist.clone()));
    }
    Err(SakuraError::not_found("Playlist, album or artist", id).into())
}

/// Play an item, printing events until the time runs out, the queue ends
/// or Ctrl-C is pressed
pub async fn play(
    out: &mut impl Write,
    handle: &PlaybackHandle,
    catalog: &Catalog,
    item: &CatalogItem,
    options: &PlayOptions,
) -> anyhow::Result<()> {
    if options.shuffle && !handle.with_controller(|c| c.is_shuffled()) {
        handle.toggle_shuffle();
    }
    if let Some(mode) = options.repeat {
        while handle.with_controller(|c| c.repeat()) != mode {
            handle.toggle_repeat();
        }
    }

    writeln!(out, "{} - {}", item.title(), item.subtitle(catalog))?;
    handle.play_item(item, catalog);

    let period = handle.tick_period();
    let ticks = u32::try_from(options.seconds).unwrap_or(u32::MAX);
    let deadline = Instant::now() + period * ticks;
    let mut poll = interval(period);

    loop {
        tokio::select! {
            _ = poll.tick() => {}
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("Interrupted");
                break;
            }
        }

        for event in handle.drain_events() {
            writeln!(out, "{}", render::event_line(catalog, &event))?;
        }

        let stopped = handle.snapshot().state != PlaybackState::Playing;
        if stopped || Instant::now() >= deadline {
            break;
        }
    }

    handle.pause();
    for event in handle.drain_events() {
        writeln!(out, "{}", render::event_line(catalog, &event))?;
    }
    writeln!(out, "{}", render::session_summary(catalog, &handle.snapshot()))?;
    Ok(())
}

/// Account commands, all backed by the data directory
pub enum AccountCommand {
    SignUp(SignUpForm),
    Login { email: String, password: String },
    Logout,
    WhoAmI,
    Profile(ProfileUpdate),
}

/// Run an account command against the store in `data_dir`
pub fn account(out: &mut impl Write, data_dir: &Path, command: AccountCommand) -> anyhow::Result<()> {
    let mut auth = AuthController::load(FileStore::open(data_dir)?)?;

    match command {
        AccountCommand::SignUp(form) => {
            let user = auth.sign_up(form)?;
            writeln!(out, "Welcome, {}!", user.display_name)?;
        }
        AccountCommand::Login { email, password } => {
            let user = auth.login(&email, &password)?;
            writeln!(out, "Logged in as {}", user.display_name)?;
        }
        AccountCommand::Logout => {
            auth.logout()?;
            writeln!(out, "Logged out")?;
        }
        AccountCommand::WhoAmI => match auth.current_user() {
            Some(user) => writeln!(out, "{}", render::user_summary(user))?,
            None => writeln!(out, "Not logged in")?,
        },
        AccountCommand::Profile(update) => {
            let user = auth.update_profile(update)?;
            writeln!(out, "{}", render::user_summary(&user))?;
        }
    }
    Ok(())
}
