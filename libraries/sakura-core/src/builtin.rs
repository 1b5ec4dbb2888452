//! Sample library shipped with the player

use crate::types::{Album, AlbumId, Artist, ArtistId, Playlist, PlaylistId, Song, SongId};

const PORTRAIT: &str = "?w=300&h=300&fit=crop&crop=face";
const COVER: &str = "?w=300&h=300&fit=crop";

const PHOTOS: [&str; 6] = [
    "https://images.unsplash.com/photo-1493225457124-a3eb161ffa5f",
    "https://images.unsplash.com/photo-1544005313-94ddf0286df2",
    "https://images.unsplash.com/photo-1438761681033-6461ffad8d80",
    "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d",
    "https://images.unsplash.com/photo-1494790108755-2616b332c1c2",
    "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e",
];

// (name, followers)
const ARTISTS: [(&str, u64); 6] = [
    ("The Weeknd", 85_000_000),
    ("Billie Eilish", 95_000_000),
    ("Dua Lipa", 75_000_000),
    ("Post Malone", 65_000_000),
    ("Ariana Grande", 80_000_000),
    ("Drake", 90_000_000),
];

// (title, release date, total tracks, genre); album N belongs to artist N
const ALBUMS: [(&str, &str, u32, &str); 6] = [
    ("After Hours", "2020-03-20", 14, "R&B"),
    ("Happier Than Ever", "2021-07-30", 16, "Alternative"),
    ("Future Nostalgia", "2020-03-27", 11, "Pop"),
    ("Hollywood's Bleeding", "2019-09-06", 17, "Hip-Hop"),
    ("Positions", "2020-10-30", 14, "Pop"),
    ("Certified Lover Boy", "2021-09-03", 21, "Hip-Hop"),
];

// (title, duration, explicit, popularity, play count); three per album, in album order
const SONGS: [(&str, u32, bool, u8, u64); 18] = [
    ("Blinding Lights", 200, false, 95, 2_500_000_000),
    ("Save Your Tears", 215, false, 88, 1_800_000_000),
    ("After Hours", 361, true, 82, 950_000_000),
    ("Happier Than Ever", 298, false, 90, 1_200_000_000),
    ("Therefore I Am", 174, false, 85, 980_000_000),
    ("Your Power", 240, false, 78, 750_000_000),
    ("Don't Start Now", 183, false, 92, 1_600_000_000),
    ("Levitating", 203, false, 89, 1_400_000_000),
    ("Physical", 193, false, 84, 1_100_000_000),
    ("Circles", 215, false, 91, 1_700_000_000),
    ("Sunflower", 158, false, 94, 2_200_000_000),
    ("Congratulations", 220, true, 87, 1_300_000_000),
    ("positions", 172, true, 86, 1_100_000_000),
    ("34+35", 173, true, 83, 950_000_000),
    ("pov", 201, false, 79, 800_000_000),
    ("Way 2 Sexy", 267, true, 88, 1_250_000_000),
    ("Girls Want Girls", 244, true, 85, 1_050_000_000),
    ("Fair Trade", 291, true, 81, 900_000_000),
];

// (name, description, song numbers, created at)
const PLAYLISTS: [(&str, &str, &[u32], &str); 4] = [
    ("Today's Top Hits", "The biggest songs right now", &[1, 4, 7, 10, 11], "2024-01-01"),
    (
        "Chill Hits",
        "Kick back to the best new and recent chill hits",
        &[2, 6, 9, 15],
        "2024-01-02",
    ),
    ("Pop Rising", "The next generation of pop superstars", &[8, 13, 14, 5], "2024-01-03"),
    ("Hip-Hop Central", "The sounds that define hip-hop culture", &[12, 16, 17, 18], "2024-01-04"),
];

pub(crate) fn artists() -> Vec<Artist> {
    ARTISTS
        .iter()
        .enumerate()
        .map(|(i, &(name, followers))| Artist {
            id: ArtistId::new(format!("artist_{}", i + 1)),
            name: name.to_string(),
            image_url: format!("{}{}", PHOTOS[i], PORTRAIT),
            followers,
            verified: true,
        })
        .collect()
}

pub(crate) fn albums() -> Vec<Album> {
    ALBUMS
        .iter()
        .enumerate()
        .map(|(i, &(title, release_date, total_tracks, genre))| Album {
            id: AlbumId::new(format!("album_{}", i + 1)),
            title: title.to_string(),
            artist_id: ArtistId::new(format!("artist_{}", i + 1)),
            cover_url: format!("{}{}", PHOTOS[i], COVER),
            release_date: release_date.to_string(),
            total_tracks,
            genre: genre.to_string(),
        })
        .collect()
}

pub(crate) fn songs() -> Vec<Song> {
    SONGS
        .iter()
        .enumerate()
        .map(|(i, &(title, duration, explicit, popularity, play_count))| {
            let album = i / 3 + 1;
            Song {
                id: SongId::new(format!("song_{}", i + 1)),
                title: title.to_string(),
                artist_id: ArtistId::new(format!("artist_{album}")),
                album_id: AlbumId::new(format!("album_{album}")),
                duration,
                track_number: (i % 3) as u32 + 1,
                explicit,
                popularity,
                play_count,
            }
        })
        .collect()
}

pub(crate) fn playlists() -> Vec<Playlist> {
    PLAYLISTS
        .iter()
        .enumerate()
        .map(|(i, &(name, description, song_numbers, created_at))| Playlist {
            id: PlaylistId::new(format!("playlist_{}", i + 1)),
            name: name.to_string(),
            description: description.to_string(),
            cover_url: format!("{}{}", PHOTOS[i], COVER),
            user_id: "spotify".to_string(),
            public: true,
            collaborative: false,
            song_ids: song_numbers
                .iter()
                .map(|n| SongId::new(format!("song_{n}")))
                .collect(),
            created_at: created_at.to_string(),
        })
        .collect()
}
