//! Catalog endpoints

use chrono::{Local, Timelike};

use crate::data::{
    self,
    catalog::{SYSTEM_OWNER_ID, Trending, take},
};
use crate::model::{Album, Artist, Playlist, SearchCategory, SearchResult, Song};

use super::{ApiError, ApiResponse, ApiResult, MockApi, PaginatedResponse, paginate};

/// Payload of the home screen
#[derive(Clone, Debug, PartialEq)]
pub struct HomeData {
    pub greeting: String,
    pub trending: Trending,
    pub new_releases: Vec<Song>,
    pub recently_played: Vec<Song>,
    pub recommended_playlists: Vec<Playlist>,
    pub featured_artists: Vec<Artist>,
}

/// Payload of the library screen
#[derive(Clone, Debug, PartialEq)]
pub struct LibraryData {
    pub playlists: Vec<Playlist>,
    pub liked_songs: Vec<Song>,
    pub downloaded_songs: Vec<Song>,
    pub followed_artists: Vec<Artist>,
}

/// Time-of-day greeting for a local hour (0-23)
pub fn greeting_for_hour(hour: u32) -> &'static str {
    if hour < 12 {
        "Good morning"
    } else if hour < 18 {
        "Good afternoon"
    } else {
        "Good evening"
    }
}

fn total_duration(songs: &[Song]) -> u32 {
    songs.iter().map(|s| s.duration).sum()
}

pub struct MusicApi<'a> {
    pub(super) api: &'a MockApi,
}

impl MusicApi<'_> {
    fn catalog(&self) -> &crate::data::catalog::Catalog {
        &self.api.catalog
    }

    // ===== Songs =====

    pub async fn get_songs(&self, page: usize, limit: usize) -> PaginatedResponse<Song> {
        self.api.latency.wait(400).await;
        paginate(&self.catalog().songs, page, limit)
    }

    pub async fn get_song_by_id(&self, id: &str) -> ApiResult<Song> {
        self.api.latency.wait(300).await;
        let result = self
            .catalog()
            .songs
            .iter()
            .find(|s| s.id == id)
            .cloned()
            .map(ApiResponse::ok)
            .ok_or(ApiError::NotFound("Song"));
        crate::log_api_result!("music.get_song_by_id", result);
        result
    }

    pub async fn get_songs_by_genre(&self, genre: &str) -> ApiResult<Vec<Song>> {
        self.api.latency.wait(400).await;
        let genre = genre.to_lowercase();
        let songs = self
            .catalog()
            .songs
            .iter()
            .filter(|s| s.genre.to_lowercase() == genre)
            .cloned()
            .collect();
        Ok(ApiResponse::ok(songs))
    }

    // ===== Artists =====

    pub async fn get_artists(&self, page: usize, limit: usize) -> PaginatedResponse<Artist> {
        self.api.latency.wait(400).await;
        paginate(&self.catalog().artists, page, limit)
    }

    pub async fn get_artist_by_id(&self, id: &str) -> ApiResult<Artist> {
        self.api.latency.wait(300).await;
        let result = self
            .catalog()
            .artists
            .iter()
            .find(|a| a.id == id)
            .cloned()
            .map(ApiResponse::ok)
            .ok_or(ApiError::NotFound("Artist"));
        crate::log_api_result!("music.get_artist_by_id", result);
        result
    }

    pub async fn get_artist_songs(&self, artist_id: &str) -> ApiResult<Vec<Song>> {
        self.api.latency.wait(400).await;
        let songs = self
            .catalog()
            .songs
            .iter()
            .filter(|s| s.artist_id == artist_id)
            .cloned()
            .collect();
        Ok(ApiResponse::ok(songs))
    }

    pub async fn follow_artist(&self, artist_id: &str) -> ApiResult<Artist> {
        crate::log_api_request!("music.follow_artist", artist_id);
        self.api.latency.wait(500).await;
        let result = self
            .catalog()
            .artists
            .iter()
            .find(|a| a.id == artist_id)
            .map(|a| {
                let mut artist = a.clone();
                artist.followers += 1;
                ApiResponse::ok(artist)
            })
            .ok_or(ApiError::NotFound("Artist"));
        crate::log_api_result!("music.follow_artist", result);
        result
    }

    // ===== Albums =====

    pub async fn get_albums(&self, page: usize, limit: usize) -> PaginatedResponse<Album> {
        self.api.latency.wait(400).await;
        paginate(&self.catalog().albums, page, limit)
    }

    pub async fn get_album_by_id(&self, id: &str) -> ApiResult<Album> {
        self.api.latency.wait(300).await;
        let result = self
            .catalog()
            .albums
            .iter()
            .find(|a| a.id == id)
            .cloned()
            .map(ApiResponse::ok)
            .ok_or(ApiError::NotFound("Album"));
        crate::log_api_result!("music.get_album_by_id", result);
        result
    }

    // ===== Playlists =====

    pub async fn get_playlists(&self, page: usize, limit: usize) -> PaginatedResponse<Playlist> {
        self.api.latency.wait(400).await;
        let playlists = self.api.playlists.read().await;
        paginate(&playlists, page, limit)
    }

    /// Playlists in the shared list owned by `owner_id`; no simulated delay
    pub async fn count_owned_playlists(&self, owner_id: &str) -> usize {
        self.api
            .playlists
            .read()
            .await
            .iter()
            .filter(|p| p.owner_id == owner_id)
            .count()
    }

    pub async fn get_playlist_by_id(&self, id: &str) -> ApiResult<Playlist> {
        self.api.latency.wait(300).await;
        let playlists = self.api.playlists.read().await;
        let result = playlists
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .map(ApiResponse::ok)
            .ok_or(ApiError::NotFound("Playlist"));
        crate::log_api_result!("music.get_playlist_by_id", result);
        result
    }

    pub async fn create_playlist(&self, name: &str, description: Option<&str>) -> ApiResult<Playlist> {
        crate::log_api_request!("music.create_playlist", name);
        self.api.latency.wait(600).await;

        let user = &self.catalog().current_user;
        let playlist = Playlist {
            id: data::generate_id("playlist"),
            name: name.to_string(),
            description: description.unwrap_or_default().to_string(),
            cover: "/playlist-1.jpg".to_string(),
            owner: user.name.clone(),
            owner_id: user.id.clone(),
            songs: Vec::new(),
            is_public: false,
            created_at: data::now_iso(),
            total_duration: 0,
        };
        self.api.playlists.write().await.push(playlist.clone());
        tracing::info!(operation = "music.create_playlist", playlist_id = %playlist.id, "API request successful");
        Ok(ApiResponse::ok(playlist).with_message("Playlist created"))
    }

    pub async fn add_to_playlist(&self, playlist_id: &str, song_id: &str) -> ApiResult<Playlist> {
        crate::log_api_request!("music.add_to_playlist", playlist_id, song_id);
        self.api.latency.wait(400).await;

        let song = self.catalog().songs.iter().find(|s| s.id == song_id).cloned();
        let mut playlists = self.api.playlists.write().await;
        let result = match (playlists.iter_mut().find(|p| p.id == playlist_id), song) {
            (Some(playlist), Some(song)) => {
                playlist.songs.push(song);
                playlist.total_duration = total_duration(&playlist.songs);
                Ok(ApiResponse::ok(playlist.clone()).with_message("Song added to playlist"))
            }
            _ => Err(ApiError::PlaylistOrSongNotFound),
        };
        crate::log_api_result!("music.add_to_playlist", result);
        result
    }

    pub async fn remove_from_playlist(&self, playlist_id: &str, song_id: &str) -> ApiResult<Playlist> {
        crate::log_api_request!("music.remove_from_playlist", playlist_id, song_id);
        self.api.latency.wait(400).await;

        let mut playlists = self.api.playlists.write().await;
        let result = match playlists.iter_mut().find(|p| p.id == playlist_id) {
            Some(playlist) => {
                playlist.songs.retain(|s| s.id != song_id);
                playlist.total_duration = total_duration(&playlist.songs);
                Ok(ApiResponse::ok(playlist.clone()).with_message("Song removed from playlist"))
            }
            None => Err(ApiError::NotFound("Playlist")),
        };
        crate::log_api_result!("music.remove_from_playlist", result);
        result
    }

    // ===== Search & discovery =====

    /// Case-insensitive substring search across titles, names and descriptions
    pub async fn search(&self, query: &str) -> ApiResult<SearchResult> {
        crate::log_api_request!("music.search", query);
        self.api.latency.wait(500).await;

        let needle = query.to_lowercase();
        let hit = |field: &str| field.to_lowercase().contains(&needle);
        let catalog = self.catalog();
        let playlists = self.api.playlists.read().await;

        let result = SearchResult {
            songs: catalog
                .songs
                .iter()
                .filter(|s| hit(&s.title) || hit(&s.artist))
                .cloned()
                .collect(),
            artists: catalog.artists.iter().filter(|a| hit(&a.name)).cloned().collect(),
            albums: catalog
                .albums
                .iter()
                .filter(|a| hit(&a.title) || hit(&a.artist))
                .cloned()
                .collect(),
            playlists: playlists
                .iter()
                .filter(|p| hit(&p.name) || hit(&p.description))
                .cloned()
                .collect(),
        };
        tracing::info!(
            query,
            songs = result.songs.len(),
            artists = result.artists.len(),
            albums = result.albums.len(),
            playlists = result.playlists.len(),
            "Search completed successfully"
        );
        Ok(ApiResponse::ok(result))
    }

    pub async fn get_search_categories(&self) -> ApiResult<Vec<SearchCategory>> {
        self.api.latency.wait(200).await;
        Ok(ApiResponse::ok(self.catalog().categories.clone()))
    }

    pub async fn get_home_data(&self) -> ApiResult<HomeData> {
        self.api.latency.wait(600).await;
        let catalog = self.catalog();
        let playlists = self.api.playlists.read().await;
        Ok(ApiResponse::ok(HomeData {
            greeting: greeting_for_hour(Local::now().hour()).to_string(),
            trending: catalog.trending(),
            new_releases: catalog.new_releases(),
            recently_played: catalog.recently_played(),
            recommended_playlists: take(&playlists, 0, 4),
            featured_artists: take(&catalog.artists, 0, 4),
        }))
    }

    pub async fn get_library_data(&self, user_id: &str) -> ApiResult<LibraryData> {
        self.api.latency.wait(500).await;
        let catalog = self.catalog();
        let playlists = self.api.playlists.read().await;
        Ok(ApiResponse::ok(LibraryData {
            playlists: playlists
                .iter()
                .filter(|p| p.owner_id == user_id || p.owner_id == SYSTEM_OWNER_ID)
                .cloned()
                .collect(),
            liked_songs: take(&catalog.songs, 0, 10),
            downloaded_songs: take(&catalog.songs, 2, 5),
            followed_artists: take(&catalog.artists, 0, 3),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Latency;

    fn api() -> MockApi {
        MockApi::new(Latency::none())
    }

    #[tokio::test]
    async fn song_pages_over_eight_fixtures() {
        let api = api();
        let all = api.music().get_songs(1, 20).await;
        assert_eq!(all.data.len(), 8);
        assert_eq!(all.total, 8);
        assert!(!all.has_more);

        let first = api.music().get_songs(1, 4).await;
        assert_eq!(first.data.len(), 4);
        assert!(first.has_more);
        assert_eq!(first.data[0].id, "song-1");

        let second = api.music().get_songs(2, 4).await;
        assert_eq!(second.data.len(), 4);
        assert!(!second.has_more);
        assert_eq!(second.data[0].id, "song-5");
    }

    #[tokio::test]
    async fn concatenated_pages_reproduce_fixture_order() {
        let api = api();
        let limit = 3;
        let total = api.music().get_songs(1, limit).await.total;
        let mut ids = Vec::new();
        for page in 1..=total.div_ceil(limit) {
            ids.extend(api.music().get_songs(page, limit).await.data.into_iter().map(|s| s.id));
        }
        let expected: Vec<String> = (1..=8).map(|n| format!("song-{}", n)).collect();
        assert_eq!(ids, expected);
    }

    #[tokio::test]
    async fn lookups_report_not_found() {
        let api = api();
        assert_eq!(
            api.music().get_song_by_id("nope").await.unwrap_err().to_string(),
            "Song not found"
        );
        assert_eq!(
            api.music().get_artist_by_id("nope").await.unwrap_err(),
            ApiError::NotFound("Artist")
        );
        assert_eq!(
            api.music().get_album_by_id("nope").await.unwrap_err(),
            ApiError::NotFound("Album")
        );
        assert_eq!(
            api.music().get_playlist_by_id("nope").await.unwrap_err(),
            ApiError::NotFound("Playlist")
        );
    }

    #[tokio::test]
    async fn search_is_case_insensitive() {
        let api = api();
        let upper = api.music().search("SAUTI").await.unwrap().data;
        let lower = api.music().search("sauti").await.unwrap().data;
        assert_eq!(upper, lower);
        assert_eq!(upper.songs.len(), 2);
        assert_eq!(upper.artists.len(), 1);
        assert_eq!(upper.albums.len(), 2);
    }

    #[tokio::test]
    async fn search_matches_playlist_descriptions() {
        let api = api();
        let result = api.music().search("uplifting").await.unwrap().data;
        assert_eq!(result.playlists.len(), 1);
        assert_eq!(result.playlists[0].id, "playlist-4");
        assert!(result.songs.is_empty());
    }

    #[tokio::test]
    async fn genre_filter_ignores_case() {
        let api = api();
        let gospel = api.music().get_songs_by_genre("gOsPeL").await.unwrap().data;
        assert_eq!(gospel.len(), 2);
    }

    #[tokio::test]
    async fn follow_artist_bumps_followers_without_mutating_fixture() {
        let api = api();
        let followed = api.music().follow_artist("artist-1").await.unwrap().data;
        assert_eq!(followed.followers, 2_500_001);
        let again = api.music().get_artist_by_id("artist-1").await.unwrap().data;
        assert_eq!(again.followers, 2_500_000);
        assert!(api.music().follow_artist("artist-99").await.is_err());
    }

    #[tokio::test]
    async fn created_playlists_accept_songs() {
        let api = api();
        let created = api.music().create_playlist("Road Trip", None).await.unwrap().data;
        assert_eq!(created.owner_id, "user-1");
        assert!(!created.is_public);
        assert_eq!(created.description, "");

        let updated = api.music().add_to_playlist(&created.id, "song-3").await.unwrap().data;
        assert_eq!(updated.songs.len(), 1);
        assert_eq!(updated.total_duration, 245);

        let emptied = api
            .music()
            .remove_from_playlist(&created.id, "song-3")
            .await
            .unwrap()
            .data;
        assert!(emptied.songs.is_empty());
        assert_eq!(emptied.total_duration, 0);
    }

    #[tokio::test]
    async fn add_to_playlist_needs_both_records() {
        let api = api();
        assert_eq!(
            api.music().add_to_playlist("playlist-1", "song-99").await.unwrap_err(),
            ApiError::PlaylistOrSongNotFound
        );
        assert_eq!(
            api.music().remove_from_playlist("playlist-99", "song-1").await.unwrap_err(),
            ApiError::NotFound("Playlist")
        );
    }

    #[tokio::test]
    async fn library_shows_own_and_editorial_playlists() {
        let api = api();
        let library = api.music().get_library_data("user-1").await.unwrap().data;
        assert_eq!(library.playlists.len(), 5);
        assert_eq!(library.liked_songs.len(), 8);
        assert_eq!(library.downloaded_songs.len(), 3);
        assert_eq!(library.followed_artists.len(), 3);

        let stranger = api.music().get_library_data("user-2").await.unwrap().data;
        assert_eq!(stranger.playlists.len(), 4);
    }

    #[tokio::test]
    async fn home_data_slices_fixtures() {
        let api = api();
        let home = api.music().get_home_data().await.unwrap().data;
        assert_eq!(home.trending.songs.len(), 5);
        assert_eq!(home.new_releases.len(), 6);
        assert_eq!(home.recently_played.len(), 4);
        assert_eq!(home.recommended_playlists.len(), 4);
        assert_eq!(home.featured_artists.len(), 4);
        assert!(home.greeting.starts_with("Good "));
    }

    #[test]
    fn greeting_boundaries() {
        assert_eq!(greeting_for_hour(0), "Good morning");
        assert_eq!(greeting_for_hour(11), "Good morning");
        assert_eq!(greeting_for_hour(12), "Good afternoon");
        assert_eq!(greeting_for_hour(17), "Good afternoon");
        assert_eq!(greeting_for_hour(18), "Good evening");
    }
}
