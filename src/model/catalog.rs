//! Music catalog cache: what the listener screens were last loaded with

use crate::api::{ApiError, HomeData, LibraryData};

use super::types::{Album, Artist, Playlist, SearchCategory, SearchResult, Song};

#[derive(Clone, Debug, Default)]
pub struct MusicStore {
    pub songs: Vec<Song>,
    pub artists: Vec<Artist>,
    pub albums: Vec<Album>,
    pub playlists: Vec<Playlist>,
    pub categories: Vec<SearchCategory>,
    pub home: Option<HomeData>,
    pub library: Option<LibraryData>,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl MusicStore {
    pub fn begin_fetch(&mut self) {
        self.is_loading = true;
        self.error = None;
    }

    /// Settle a fetch: store the payload on success, the message on failure
    pub fn finish_fetch<T>(&mut self, result: Result<T, ApiError>, store: impl FnOnce(&mut Self, T)) {
        self.is_loading = false;
        match result {
            Ok(data) => store(self, data),
            Err(e) => {
                tracing::warn!(error = %e, "Catalog fetch failed");
                self.error = Some(e.to_string());
            }
        }
    }

    /// Search never fails from the caller's point of view
    pub fn search_or_empty(result: Result<SearchResult, ApiError>) -> SearchResult {
        result.unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Search failed, showing no results");
            SearchResult::default()
        })
    }

    /// Swap in an edited playlist wherever it is cached, or add it if new
    pub fn upsert_playlist(&mut self, playlist: Playlist) {
        if let Some(library) = self.library.as_mut() {
            match library.playlists.iter_mut().find(|p| p.id == playlist.id) {
                Some(slot) => *slot = playlist.clone(),
                None => library.playlists.push(playlist.clone()),
            }
        }
        match self.playlists.iter_mut().find(|p| p.id == playlist.id) {
            Some(slot) => *slot = playlist,
            None => self.playlists.push(playlist),
        }
    }
}
