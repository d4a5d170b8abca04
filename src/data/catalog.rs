//! Listener catalog fixtures

use crate::model::{Album, Artist, Playlist, SearchCategory, Song, User};

use super::strings;

/// Owner id used for editorial playlists
pub const SYSTEM_OWNER_ID: &str = "system";

/// The whole listener catalog the simulated backend serves from
#[derive(Clone, Debug)]
pub struct Catalog {
    pub current_user: User,
    pub artists: Vec<Artist>,
    pub songs: Vec<Song>,
    pub albums: Vec<Album>,
    pub playlists: Vec<Playlist>,
    pub categories: Vec<SearchCategory>,
}

/// Hero block on the home screen
#[derive(Clone, Debug, PartialEq)]
pub struct Trending {
    pub title: String,
    pub subtitle: String,
    pub image: String,
    pub songs: Vec<Song>,
}

impl Catalog {
    pub fn seed() -> Self {
        let current_user = current_user();
        let songs = songs();
        let albums = albums(&songs);
        let playlists = playlists(&songs, &current_user);
        Self {
            current_user,
            artists: artists(),
            songs,
            albums,
            playlists,
            categories: search_categories(),
        }
    }

    pub fn trending(&self) -> Trending {
        Trending {
            title: "Trending in Kenya".to_string(),
            subtitle: "This Week's Hot Tracks".to_string(),
            image: "/trending-hero.jpg".to_string(),
            songs: take(&self.songs, 0, 5),
        }
    }

    pub fn new_releases(&self) -> Vec<Song> {
        take(&self.songs, 0, 6)
    }

    pub fn recently_played(&self) -> Vec<Song> {
        take(&self.songs, 2, 6)
    }
}

/// `items[start..end]` clipped to the slice bounds
pub fn take<T: Clone>(items: &[T], start: usize, end: usize) -> Vec<T> {
    let end = end.min(items.len());
    let start = start.min(end);
    items[start..end].to_vec()
}

fn current_user() -> User {
    User {
        id: "user-1".to_string(),
        email: "user@niatunes.com".to_string(),
        name: "Alex Kimani".to_string(),
        avatar: "/artist-avatar.jpg".to_string(),
        is_premium: true,
        followers: 234,
        following: 156,
    }
}

fn artist(
    id: &str,
    name: &str,
    bio: &str,
    followers: u64,
    monthly_listeners: u64,
    genres: &[&str],
) -> Artist {
    Artist {
        id: id.to_string(),
        name: name.to_string(),
        avatar: format!("/{}.jpg", id),
        header_image: "/artist-header.jpg".to_string(),
        bio: bio.to_string(),
        followers,
        monthly_listeners,
        genres: strings(genres),
        is_verified: true,
    }
}

fn artists() -> Vec<Artist> {
    vec![
        artist(
            "artist-1",
            "Zahara",
            "Award-winning Afro-pop sensation from Nairobi",
            2_500_000,
            850_000,
            &["Afrobeat", "Pop"],
        ),
        artist(
            "artist-2",
            "King Kaka",
            "Rapper, songwriter, and entrepreneur",
            1_800_000,
            620_000,
            &["Hip Hop", "Gengetone"],
        ),
        artist(
            "artist-3",
            "Mercy Masika",
            "Gospel artist spreading hope through music",
            1_200_000,
            450_000,
            &["Gospel", "Worship"],
        ),
        artist(
            "artist-4",
            "Sauti Sol",
            "East African Afro-pop band",
            3_200_000,
            1_200_000,
            &["Afrobeat", "Pop", "R&B"],
        ),
    ]
}

struct SongSeed {
    n: u8,
    title: &'static str,
    artist: &'static str,
    artist_n: u8,
    album: &'static str,
    album_n: u8,
    cover: &'static str,
    duration: u32,
    genre: &'static str,
    release_date: &'static str,
    plays: u64,
}

const SONG_SEEDS: [SongSeed; 8] = [
    SongSeed { n: 1, title: "Nakupenda", artist: "Zahara", artist_n: 1, album: "Echoes of Tomorrow", album_n: 1, cover: "/album-2.jpg", duration: 214, genre: "Afrobeat", release_date: "2024-01-15", plays: 5_200_000 },
    SongSeed { n: 2, title: "Dundaing", artist: "King Kaka", artist_n: 2, album: "Eastlando Royalty", album_n: 2, cover: "/album-1.jpg", duration: 198, genre: "Hip Hop", release_date: "2024-02-20", plays: 3_800_000 },
    SongSeed { n: 3, title: "Mwema", artist: "Mercy Masika", artist_n: 3, album: "Healed", album_n: 3, cover: "/album-3.jpg", duration: 245, genre: "Gospel", release_date: "2024-01-10", plays: 2_100_000 },
    SongSeed { n: 4, title: "Suzanna", artist: "Sauti Sol", artist_n: 4, album: "Midnight Train", album_n: 4, cover: "/album-1.jpg", duration: 201, genre: "Afrobeat", release_date: "2024-03-05", plays: 6_700_000 },
    SongSeed { n: 5, title: "Kuliko Jana", artist: "Sauti Sol", artist_n: 4, album: "Live and Die in Afrika", album_n: 5, cover: "/album-2.jpg", duration: 268, genre: "Afrobeat", release_date: "2024-02-14", plays: 4_500_000 },
    SongSeed { n: 6, title: "Lala Salama", artist: "Zahara", artist_n: 1, album: "Echoes of Tomorrow", album_n: 1, cover: "/album-2.jpg", duration: 192, genre: "Afrobeat", release_date: "2024-01-20", plays: 3_200_000 },
    SongSeed { n: 7, title: "Mungu Pekee", artist: "Mercy Masika", artist_n: 3, album: "Healed", album_n: 3, cover: "/album-3.jpg", duration: 276, genre: "Gospel", release_date: "2024-03-01", plays: 1_800_000 },
    SongSeed { n: 8, title: "Wajinga Nyinyi", artist: "King Kaka", artist_n: 2, album: "Eastlando Royalty", album_n: 2, cover: "/album-1.jpg", duration: 223, genre: "Hip Hop", release_date: "2024-02-28", plays: 4_100_000 },
];

fn songs() -> Vec<Song> {
    SONG_SEEDS
        .iter()
        .map(|s| Song {
            id: format!("song-{}", s.n),
            title: s.title.to_string(),
            artist: s.artist.to_string(),
            artist_id: format!("artist-{}", s.artist_n),
            album: s.album.to_string(),
            album_id: format!("album-{}", s.album_n),
            cover: s.cover.to_string(),
            duration: s.duration,
            url: format!("/audio/song{}.mp3", s.n),
            genre: s.genre.to_string(),
            release_date: s.release_date.to_string(),
            plays: s.plays,
        })
        .collect()
}

fn albums(songs: &[Song]) -> Vec<Album> {
    let album = |n: u8, title: &str, artist: &str, artist_n: u8, cover: &str, release_date: &str, total_duration: u32| {
        let id = format!("album-{}", n);
        Album {
            songs: songs.iter().filter(|s| s.album_id == id).cloned().collect(),
            id,
            title: title.to_string(),
            artist: artist.to_string(),
            artist_id: format!("artist-{}", artist_n),
            cover: cover.to_string(),
            release_date: release_date.to_string(),
            total_duration,
        }
    };

    vec![
        album(1, "Echoes of Tomorrow", "Zahara", 1, "/album-2.jpg", "2024-01-15", 406),
        album(2, "Eastlando Royalty", "King Kaka", 2, "/album-1.jpg", "2024-02-20", 421),
        album(3, "Healed", "Mercy Masika", 3, "/album-3.jpg", "2024-01-10", 521),
        album(4, "Midnight Train", "Sauti Sol", 4, "/album-1.jpg", "2024-03-05", 201),
        album(5, "Live and Die in Afrika", "Sauti Sol", 4, "/album-2.jpg", "2024-02-14", 268),
    ]
}

fn playlists(songs: &[Song], user: &User) -> Vec<Playlist> {
    let editorial = |n: u8, name: &str, description: &str, tracks: Vec<Song>, created_at: &str, total_duration: u32| Playlist {
        id: format!("playlist-{}", n),
        name: name.to_string(),
        description: description.to_string(),
        cover: format!("/playlist-{}.jpg", n),
        owner: "NiaTunes".to_string(),
        owner_id: SYSTEM_OWNER_ID.to_string(),
        songs: tracks,
        is_public: true,
        created_at: created_at.to_string(),
        total_duration,
    };
    let by_genre = |genre: &str| -> Vec<Song> {
        songs.iter().filter(|s| s.genre == genre).cloned().collect()
    };

    vec![
        editorial(
            1,
            "Daily Mix 1",
            "Made for you based on your listening history",
            take(songs, 0, 4),
            "2024-03-01",
            815,
        ),
        editorial(
            2,
            "Afrobeat Hits",
            "The hottest Afrobeat tracks right now",
            by_genre("Afrobeat"),
            "2024-02-15",
            875,
        ),
        editorial(
            3,
            "Kenyan Vibes",
            "Best of Kenyan music",
            take(songs, 2, 6),
            "2024-01-20",
            932,
        ),
        editorial(
            4,
            "Gospel Favorites",
            "Uplifting gospel music",
            by_genre("Gospel"),
            "2024-03-10",
            521,
        ),
        Playlist {
            id: "playlist-5".to_string(),
            name: "Liked Songs".to_string(),
            description: "Your favorite tracks".to_string(),
            cover: "/album-art.jpg".to_string(),
            owner: user.name.clone(),
            owner_id: user.id.clone(),
            songs: take(songs, 0, 5),
            is_public: false,
            created_at: "2024-01-01".to_string(),
            total_duration: 1100,
        },
    ]
}

fn search_categories() -> Vec<SearchCategory> {
    [
        ("afrobeat", "Afrobeat", "#D32F2F", "music"),
        ("gengetone", "Gengetone", "#388E3C", "mic"),
        ("gospel", "Gospel", "#FFFFFF", "heart"),
        ("benga", "Benga", "#D32F2F", "guitar"),
        ("hiphop", "Hip Hop", "#616161", "mic-2"),
        ("randb", "R&B", "#388E3C", "music-2"),
        ("reggae", "Reggae", "#D32F2F", "sun"),
        ("pop", "Pop", "#FFFFFF", "star"),
    ]
    .into_iter()
    .map(|(id, name, color, icon)| SearchCategory {
        id: id.to_string(),
        name: name.to_string(),
        color: color.to_string(),
        icon: icon.to_string(),
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_has_expected_shape() {
        let catalog = Catalog::seed();
        assert_eq!(catalog.songs.len(), 8);
        assert_eq!(catalog.artists.len(), 4);
        assert_eq!(catalog.albums.len(), 5);
        assert_eq!(catalog.playlists.len(), 5);
        assert_eq!(catalog.categories.len(), 8);
        assert_eq!(catalog.current_user.id, "user-1");
    }

    #[test]
    fn albums_collect_their_songs() {
        let catalog = Catalog::seed();
        let healed = &catalog.albums[2];
        let ids: Vec<&str> = healed.songs.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["song-3", "song-7"]);
    }

    #[test]
    fn genre_playlists_filter_by_genre() {
        let catalog = Catalog::seed();
        let afrobeat = &catalog.playlists[1];
        assert_eq!(afrobeat.songs.len(), 4);
        assert!(afrobeat.songs.iter().all(|s| s.genre == "Afrobeat"));
        assert_eq!(catalog.playlists[4].owner_id, "user-1");
    }

    #[test]
    fn take_clips_to_bounds() {
        let v = vec![1, 2, 3];
        assert_eq!(take(&v, 0, 10), vec![1, 2, 3]);
        assert_eq!(take(&v, 5, 10), Vec::<i32>::new());
    }
}
