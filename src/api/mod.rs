//! Simulated backend
//!
//! Every call waits an artificial delay and then answers from the seeded
//! fixtures. Lookups that miss fail with [`ApiError`]; everything else
//! returns an [`ApiResponse`] or [`PaginatedResponse`] envelope.
//!
//! - `auth`: listener and creator sign-in, registration, profile
//! - `music`: catalog browsing, playlists, search, home and library data

mod auth;
mod music;

pub use auth::{AuthApi, CreatorRegistration, ProfileUpdate};
pub use music::{HomeData, LibraryData, MusicApi};

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use thiserror::Error;
use tokio::sync::RwLock;

use crate::data::catalog::Catalog;

/// Minimum password length accepted by the mock sign-in endpoints
pub const MIN_PASSWORD_LEN: usize = 6;

/// Page size the list endpoints default to
pub const DEFAULT_PAGE_SIZE: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("Playlist or song not found")]
    PlaylistOrSongNotFound,
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("Invalid registration data")]
    InvalidRegistration,
    #[error("{0}")]
    Validation(String),
}

pub type ApiResult<T> = Result<ApiResponse<T>, ApiError>;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiResponse<T> {
    pub data: T,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            data,
            success: true,
            message: None,
        }
    }

    pub fn with_message(mut self, message: &str) -> Self {
        self.message = Some(message.to_string());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedResponse<T> {
    pub data: Vec<T>,
    pub total: usize,
    pub page: usize,
    pub limit: usize,
    pub has_more: bool,
}

/// Slice one 1-based page out of `items`. Page 0 is read as page 1.
pub fn paginate<T: Clone>(items: &[T], page: usize, limit: usize) -> PaginatedResponse<T> {
    let page = page.max(1);
    let total = items.len();
    let start = (page - 1).saturating_mul(limit);
    let end = start.saturating_add(limit);
    let data = if start < total {
        items[start..end.min(total)].to_vec()
    } else {
        Vec::new()
    };

    PaginatedResponse {
        data,
        total,
        page,
        limit,
        has_more: end < total,
    }
}

/// Artificial network delay, scaled so tests and demos can run instantly
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Latency {
    scale: f64,
}

impl Latency {
    pub fn new(scale: f64) -> Self {
        let scale = if scale.is_finite() && scale > 0.0 { scale } else { 0.0 };
        Self { scale }
    }

    #[cfg(test)]
    pub fn none() -> Self {
        Self { scale: 0.0 }
    }

    pub fn scaled(&self, ms: u64) -> Duration {
        Duration::from_millis((ms as f64 * self.scale).round() as u64)
    }

    pub async fn wait(&self, ms: u64) {
        let delay = self.scaled(ms);
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }
}

impl Default for Latency {
    fn default() -> Self {
        Self::new(1.0)
    }
}

/// Handle to the simulated backend. Cheap to clone; clones share state.
#[derive(Clone)]
pub struct MockApi {
    pub(crate) latency: Latency,
    pub(crate) catalog: Arc<Catalog>,
    /// Playlists created or edited through the API
    pub(crate) playlists: Arc<RwLock<Vec<crate::model::Playlist>>>,
}

impl MockApi {
    pub fn new(latency: Latency) -> Self {
        let catalog = Catalog::seed();
        let playlists = catalog.playlists.clone();
        Self {
            latency,
            catalog: Arc::new(catalog),
            playlists: Arc::new(RwLock::new(playlists)),
        }
    }

    pub fn latency(&self) -> Latency {
        self.latency
    }

    pub fn auth(&self) -> AuthApi<'_> {
        AuthApi { api: self }
    }

    pub fn music(&self) -> MusicApi<'_> {
        MusicApi { api: self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pages_walk_the_whole_list_once() {
        let items: Vec<u32> = (1..=8).collect();
        let mut seen = Vec::new();
        for page in 1..=3 {
            let resp = paginate(&items, page, 3);
            assert!(resp.data.len() <= 3);
            seen.extend(resp.data);
        }
        assert_eq!(seen, items);
    }

    #[test]
    fn has_more_tracks_the_end() {
        let items: Vec<u32> = (1..=8).collect();
        assert!(paginate(&items, 1, 4).has_more);
        assert!(!paginate(&items, 2, 4).has_more);
        assert!(!paginate(&items, 1, 20).has_more);
    }

    #[test]
    fn degenerate_pages() {
        let items: Vec<u32> = (1..=8).collect();
        let zero_page = paginate(&items, 0, 4);
        assert_eq!(zero_page.page, 1);
        assert_eq!(zero_page.data, vec![1, 2, 3, 4]);

        let zero_limit = paginate(&items, 1, 0);
        assert!(zero_limit.data.is_empty());
        assert!(zero_limit.has_more);

        assert!(paginate(&items, 9, 4).data.is_empty());
    }

    #[test]
    fn error_messages_read_like_the_backend() {
        assert_eq!(ApiError::NotFound("Song").to_string(), "Song not found");
        assert_eq!(ApiError::InvalidCredentials.to_string(), "Invalid credentials");
    }

    #[test]
    fn latency_scale_is_applied() {
        assert_eq!(Latency::new(0.5).scaled(800), Duration::from_millis(400));
        assert_eq!(Latency::new(-1.0).scaled(800), Duration::ZERO);
        assert_eq!(Latency::none().scaled(800), Duration::ZERO);
    }
}
