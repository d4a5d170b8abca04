//! Main application model with state management

use std::sync::Arc;
use std::time::{Duration, Instant};

use serde::Serialize;
use tokio::sync::Mutex;

use crate::api::{ApiError, CreatorRegistration, Latency, MockApi, PaginatedResponse, ProfileUpdate, DEFAULT_PAGE_SIZE};
use crate::config::AppConfig;
use crate::data::{self, creator::current_creator};
use crate::timer::Ticker;

use super::catalog::MusicStore;
use super::content::{ContentItem, ContentPage, ContentState, Listing, PageKind};
use super::creator::{
    Creator, CreatorProfileUpdate, CreatorUpload, DashboardTab, Payout, PayoutMethod, SubscriptionTier,
    UploadKind, UploadProgress, UploadProgressStatus, UploadProgressUpdate, UploadStatus, UploadUpdate,
};
use super::dashboard::CreatorDashboardStore;
use super::playback::{PlayerAction, PlayerStore};
use super::session::{AuthSnapshot, AuthStore, CreatorAuthStore, CreatorSnapshot};
use super::social::{self, Announcement, ArtistNote, ChatParticipant, CollaborationPost, Comment, Event, Message, Review, SocialState};
use super::storage::{SessionStorage, AUTH_STORAGE_KEY, CREATOR_AUTH_STORAGE_KEY};
use super::types::{Album, Artist, Playlist, SearchResult, Song, User};
use super::navigation::{UiState, RATING_RANGE};

/// How often a live stream's viewer count moves
pub const VIEWER_JITTER_PERIOD: Duration = Duration::from_secs(3);

const PAYOUT_DELAY_MS: u64 = 1000;
const CONTACT_SYNC_DELAY_MS: u64 = 1500;
const DEFAULT_TIER_PRICE: f64 = 4.99;
const UPLOAD_STEP_DELAY_MS: u64 = 300;
const UPLOAD_STEPS: [u8; 4] = [25, 50, 75, 100];

/// Everything one frame needs, cloned out so no lock is held while drawing
#[derive(Clone, Debug)]
pub struct ModelSnapshot {
    pub player: PlayerStore,
    pub ui: UiState,
    pub content: ContentState,
    pub user: Option<User>,
    /// Signed-in creator, if any
    pub creator: Option<Creator>,
    pub dashboard: CreatorDashboardStore,
    pub social: SocialState,
}

impl ModelSnapshot {
    /// Id the studio filters by: the signed-in creator, else the demo account
    pub fn studio_creator_id(&self) -> String {
        match &self.creator {
            Some(creator) => creator.id.clone(),
            None => current_creator().id,
        }
    }
}

/// Where a freshly loaded page goes
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Placement {
    Root,
    Push,
    Replace,
}

/// Main application model containing all state
pub struct AppModel {
    api: MockApi,
    storage: SessionStorage,
    tick: Duration,
    auth: Arc<Mutex<AuthStore>>,
    creator_auth: Arc<Mutex<CreatorAuthStore>>,
    player: Arc<Mutex<PlayerStore>>,
    music: Arc<Mutex<MusicStore>>,
    dashboard: Arc<Mutex<CreatorDashboardStore>>,
    social: Arc<Mutex<SocialState>>,
    pub ui_state: Arc<Mutex<UiState>>,
    pub content_state: Arc<Mutex<ContentState>>,
    playback_ticker: Mutex<Option<Ticker>>,
    viewer_ticker: Mutex<Option<Ticker>>,
}

impl AppModel {
    pub fn new(config: &AppConfig) -> Self {
        Self::with_parts(
            MockApi::new(Latency::new(config.latency_scale)),
            SessionStorage::new(&config.storage_dir),
            config.tick,
        )
    }

    pub fn with_parts(api: MockApi, storage: SessionStorage, tick: Duration) -> Self {
        Self {
            api,
            storage,
            tick,
            auth: Arc::new(Mutex::new(AuthStore::default())),
            creator_auth: Arc::new(Mutex::new(CreatorAuthStore::default())),
            player: Arc::new(Mutex::new(PlayerStore::new())),
            music: Arc::new(Mutex::new(MusicStore::default())),
            dashboard: Arc::new(Mutex::new(CreatorDashboardStore::seeded())),
            social: Arc::new(Mutex::new(SocialState::seeded())),
            ui_state: Arc::new(Mutex::new(UiState::default())),
            content_state: Arc::new(Mutex::new(ContentState::default())),
            playback_ticker: Mutex::new(None),
            viewer_ticker: Mutex::new(None),
        }
    }

    // ========================================================================
    // Snapshots & UI state
    // ========================================================================

    pub async fn snapshot(&self) -> ModelSnapshot {
        let creator_auth = self.creator_auth.lock().await;
        let creator = creator_auth
            .is_authenticated
            .then(|| creator_auth.creator.clone())
            .flatten();
        drop(creator_auth);

        ModelSnapshot {
            player: self.player.lock().await.clone(),
            ui: self.get_ui_state().await,
            content: self.get_content_state().await,
            user: self.current_user().await,
            creator,
            dashboard: self.dashboard.lock().await.clone(),
            social: self.social.lock().await.clone(),
        }
    }

    pub async fn get_ui_state(&self) -> UiState {
        self.ui_state.lock().await.clone()
    }

    pub async fn get_content_state(&self) -> ContentState {
        self.content_state.lock().await.clone()
    }

    pub async fn get_player_state(&self) -> PlayerStore {
        self.player.lock().await.clone()
    }

    /// Run a short mutation on the UI state
    pub async fn with_ui<R>(&self, f: impl FnOnce(&mut UiState) -> R) -> R {
        f(&mut *self.ui_state.lock().await)
    }

    /// Run a short mutation on the content state
    pub async fn with_content<R>(&self, f: impl FnOnce(&mut ContentState) -> R) -> R {
        f(&mut *self.content_state.lock().await)
    }

    pub async fn should_quit(&self) -> bool {
        self.ui_state.lock().await.should_quit
    }

    pub async fn set_should_quit(&self, quit: bool) {
        self.ui_state.lock().await.should_quit = quit;
    }

    pub async fn set_error(&self, message: String) {
        self.ui_state.lock().await.set_error(message);
    }

    pub async fn clear_error(&self) {
        self.ui_state.lock().await.clear_error();
    }

    pub async fn set_status(&self, message: impl Into<String>) {
        self.ui_state.lock().await.status_message = Some(message.into());
    }

    pub async fn auto_clear_old_errors(&self) {
        self.ui_state.lock().await.clear_stale_error(Instant::now());
    }

    // ========================================================================
    // Sessions
    // ========================================================================

    pub async fn current_user(&self) -> Option<User> {
        let auth = self.auth.lock().await;
        auth.is_authenticated.then(|| auth.user.clone()).flatten()
    }

    pub async fn is_creator_signed_in(&self) -> bool {
        self.creator_auth.lock().await.is_authenticated
    }

    /// Read both identity snapshots back. Unreadable files are logged and skipped.
    pub async fn restore_sessions(&self) {
        match self.storage.load::<AuthSnapshot>(AUTH_STORAGE_KEY) {
            Ok(Some(snapshot)) => {
                let user_missing = snapshot.is_authenticated && snapshot.user.is_none();
                let mut store = AuthStore::restore(snapshot);
                if user_missing {
                    // Flag kept but the user was lost; ask the backend who is signed in
                    let result = self.api.auth().get_current_user().await.map(|r| r.data);
                    crate::log_api_result!("auth.get_current_user", result);
                    store.finish_sign_in(result);
                    self.persist(AUTH_STORAGE_KEY, &store.snapshot());
                }
                tracing::info!(authenticated = store.is_authenticated, "Restored listener session");
                *self.auth.lock().await = store;
            }
            Ok(None) => tracing::debug!("No listener session stored"),
            Err(e) => tracing::warn!(error = ?e, "Ignoring unreadable listener session"),
        }

        match self.storage.load::<CreatorSnapshot>(CREATOR_AUTH_STORAGE_KEY) {
            Ok(Some(snapshot)) => {
                let store = CreatorAuthStore::restore(snapshot);
                tracing::info!(authenticated = store.is_authenticated, "Restored creator session");
                *self.creator_auth.lock().await = store;
            }
            Ok(None) => tracing::debug!("No creator session stored"),
            Err(e) => tracing::warn!(error = ?e, "Ignoring unreadable creator session"),
        }
    }

    fn persist<S: Serialize>(&self, key: &str, snapshot: &S) {
        if let Err(e) = self.storage.save(key, snapshot) {
            tracing::warn!(key, error = ?e, "Could not persist session");
        }
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<User, ApiError> {
        self.auth.lock().await.begin_request();
        let result = self.api.auth().login(email, password).await.map(|r| r.data);
        crate::log_api_result!("auth.login", result);
        self.finish_listener_sign_in(result).await
    }

    pub async fn register(&self, name: &str, email: &str, password: &str) -> Result<User, ApiError> {
        self.auth.lock().await.begin_request();
        let result = self.api.auth().register(name, email, password).await.map(|r| r.data);
        crate::log_api_result!("auth.register", result);
        self.finish_listener_sign_in(result).await
    }

    async fn finish_listener_sign_in(&self, result: Result<User, ApiError>) -> Result<User, ApiError> {
        let snapshot = {
            let mut auth = self.auth.lock().await;
            auth.finish_sign_in(result.clone());
            auth.snapshot()
        };
        if result.is_ok() {
            self.persist(AUTH_STORAGE_KEY, &snapshot);
        }
        result
    }

    pub async fn logout(&self) {
        self.auth.lock().await.begin_request();
        let result = self.api.auth().logout().await;
        crate::log_api_result!("auth.logout", result);
        let snapshot = {
            let mut auth = self.auth.lock().await;
            auth.finish_logout();
            auth.snapshot()
        };
        self.persist(AUTH_STORAGE_KEY, &snapshot);
        self.music.lock().await.library = None;
    }

    pub async fn creator_login(&self, email: &str, password: &str) -> Result<Creator, ApiError> {
        self.creator_auth.lock().await.begin_request();
        let result = self.api.auth().creator_login(email, password).await.map(|r| r.data);
        crate::log_api_result!("auth.creator_login", result);
        self.finish_creator_sign_in(result).await
    }

    pub async fn creator_register(&self, form: CreatorRegistration) -> Result<Creator, ApiError> {
        self.creator_auth.lock().await.begin_request();
        let result = self.api.auth().creator_register(form).await.map(|r| r.data);
        crate::log_api_result!("auth.creator_register", result);
        self.finish_creator_sign_in(result).await
    }

    async fn finish_creator_sign_in(&self, result: Result<Creator, ApiError>) -> Result<Creator, ApiError> {
        let snapshot = {
            let mut creator_auth = self.creator_auth.lock().await;
            creator_auth.finish_sign_in(result.clone());
            creator_auth.snapshot()
        };
        if result.is_ok() {
            self.persist(CREATOR_AUTH_STORAGE_KEY, &snapshot);
        }
        result
    }

    pub async fn creator_logout(&self) {
        self.end_active_stream().await;
        let snapshot = {
            let mut creator_auth = self.creator_auth.lock().await;
            creator_auth.logout();
            creator_auth.snapshot()
        };
        self.persist(CREATOR_AUTH_STORAGE_KEY, &snapshot);
        tracing::info!("Creator signed out");
    }

    /// Change the listener's display name and persist it
    pub async fn rename_listener(&self, name: &str) -> Result<User, ApiError> {
        let Some(mut user) = self.current_user().await else {
            return Err(ApiError::Validation("Sign in to edit your profile".to_string()));
        };
        let update = ProfileUpdate {
            name: Some(name.to_string()),
            ..Default::default()
        };
        self.api.auth().update_profile(update.clone()).await?;
        update.apply(&mut user);

        let snapshot = {
            let mut auth = self.auth.lock().await;
            auth.user = Some(user.clone());
            auth.snapshot()
        };
        self.persist(AUTH_STORAGE_KEY, &snapshot);
        Ok(user)
    }

    /// The signed-in creator, or a validation error naming what needs one
    async fn require_creator(&self, action: &str) -> Result<Creator, ApiError> {
        let creator_auth = self.creator_auth.lock().await;
        match &creator_auth.creator {
            Some(creator) if creator_auth.is_authenticated => Ok(creator.clone()),
            _ => Err(ApiError::Validation(format!("Sign in as a creator to {}", action))),
        }
    }

    pub async fn update_creator_profile(&self, update: CreatorProfileUpdate) -> Result<Creator, ApiError> {
        self.require_creator("edit your profile").await?;
        let (snapshot, creator) = {
            let mut creator_auth = self.creator_auth.lock().await;
            creator_auth.update_profile(update);
            (creator_auth.snapshot(), creator_auth.creator.clone())
        };
        self.persist(CREATOR_AUTH_STORAGE_KEY, &snapshot);
        creator.ok_or(ApiError::NotFound("Creator"))
    }

    // ========================================================================
    // Catalog pages
    // ========================================================================

    async fn begin_page_load(&self) {
        self.content_state.lock().await.is_loading = true;
        self.music.lock().await.begin_fetch();
    }

    async fn settle_page(&self, page: Result<ContentPage, ApiError>, placement: Placement) -> Result<(), ApiError> {
        let mut content = self.content_state.lock().await;
        match page {
            Ok(page) => {
                match placement {
                    Placement::Root => content.show_root(page),
                    Placement::Push => content.push(page),
                    Placement::Replace => content.replace(page),
                }
                Ok(())
            }
            Err(e) => {
                content.is_loading = false;
                Err(e)
            }
        }
    }

    pub async fn load_home(&self) -> Result<(), ApiError> {
        self.begin_page_load().await;
        let result = self.api.music().get_home_data().await.map(|r| r.data);
        let page = result.as_ref().map(ContentPage::home).map_err(Clone::clone);
        self.music.lock().await.finish_fetch(result, |music, home| music.home = Some(home));
        self.settle_page(page, Placement::Root).await
    }

    /// Genre grid shown before anything is typed into search
    pub async fn load_browse(&self) -> Result<(), ApiError> {
        self.begin_page_load().await;
        let result = self.api.music().get_search_categories().await.map(|r| r.data);
        let page = result.as_ref().map(|c| ContentPage::browse(c)).map_err(Clone::clone);
        self.music.lock().await.finish_fetch(result, |music, categories| music.categories = categories);
        self.settle_page(page, Placement::Root).await
    }

    /// An empty query falls back to the genre grid
    pub async fn search(&self, query: &str) -> Result<(), ApiError> {
        let query = query.trim();
        self.ui_state.lock().await.navigation.set_search_query(query);
        if query.is_empty() {
            return self.load_browse().await;
        }

        self.content_state.lock().await.is_loading = true;
        let result = self.search_music(query).await;
        tracing::debug!(query, empty = result.is_empty(), "Search finished");
        self.settle_page(Ok(ContentPage::search(query, &result)), Placement::Root).await
    }

    pub async fn open_listing(&self, listing: Listing) -> Result<(), ApiError> {
        self.content_state.lock().await.is_loading = true;
        let page = match listing {
            Listing::Songs => ContentPage::listing(listing, &self.fetch_songs(1, DEFAULT_PAGE_SIZE).await, |song| {
                ContentItem::Song { song: song.clone(), group: 0 }
            }),
            Listing::Artists => ContentPage::listing(listing, &self.fetch_artists(1, DEFAULT_PAGE_SIZE).await, |artist| {
                ContentItem::Artist(artist.clone())
            }),
            Listing::Albums => ContentPage::listing(listing, &self.fetch_albums(1, DEFAULT_PAGE_SIZE).await, |album| {
                ContentItem::Album(album.clone())
            }),
            Listing::Playlists => {
                ContentPage::listing(listing, &self.fetch_playlists(1, DEFAULT_PAGE_SIZE).await, |playlist| {
                    ContentItem::Playlist(playlist.clone())
                })
            }
        };
        self.settle_page(Ok(page), Placement::Push).await
    }

    pub async fn open_genre(&self, genre: &str) -> Result<(), ApiError> {
        self.begin_page_load().await;
        let result = self.api.music().get_songs_by_genre(genre).await.map(|r| r.data);
        let page = result.as_ref().map(|songs| ContentPage::genre(genre, songs)).map_err(Clone::clone);
        self.music.lock().await.finish_fetch(result, |music, songs| music.songs = songs);
        self.settle_page(page, Placement::Push).await
    }

    pub async fn open_playlist(&self, id: &str) -> Result<(), ApiError> {
        self.begin_page_load().await;
        let result = self.api.music().get_playlist_by_id(id).await.map(|r| r.data);
        let page = result.as_ref().map(ContentPage::playlist).map_err(Clone::clone);
        self.music.lock().await.finish_fetch(result, MusicStore::upsert_playlist);
        self.settle_page(page, Placement::Push).await
    }

    pub async fn open_album(&self, id: &str) -> Result<(), ApiError> {
        self.begin_page_load().await;
        let result = self.api.music().get_album_by_id(id).await.map(|r| r.data);
        let page = result.as_ref().map(ContentPage::album).map_err(Clone::clone);
        self.music.lock().await.finish_fetch(result, |music, album| music.songs = album.songs);
        self.settle_page(page, Placement::Push).await
    }

    pub async fn open_artist(&self, id: &str) -> Result<(), ApiError> {
        self.begin_page_load().await;
        let music = self.api.music();
        let result = match music.get_artist_by_id(id).await {
            Ok(artist) => music
                .get_artist_songs(id)
                .await
                .map(|songs| (artist.data, songs.data)),
            Err(e) => Err(e),
        };
        let page = result
            .as_ref()
            .map(|(artist, songs)| ContentPage::artist(artist, songs))
            .map_err(Clone::clone);
        self.music.lock().await.finish_fetch(result, |music, (_, songs)| music.songs = songs);
        self.settle_page(page, Placement::Push).await
    }

    // ========================================================================
    // Catalog store fetches
    // ========================================================================

    pub async fn fetch_songs(&self, page: usize, limit: usize) -> PaginatedResponse<Song> {
        self.music.lock().await.begin_fetch();
        let response = self.api.music().get_songs(page, limit).await;
        tracing::debug!(page, total = response.total, has_more = response.has_more, "Fetched songs");
        self.music
            .lock()
            .await
            .finish_fetch(Ok(response.data.clone()), |music, songs| music.songs = songs);
        response
    }

    pub async fn fetch_artists(&self, page: usize, limit: usize) -> PaginatedResponse<Artist> {
        self.music.lock().await.begin_fetch();
        let response = self.api.music().get_artists(page, limit).await;
        tracing::debug!(page, total = response.total, has_more = response.has_more, "Fetched artists");
        self.music
            .lock()
            .await
            .finish_fetch(Ok(response.data.clone()), |music, artists| music.artists = artists);
        response
    }

    pub async fn fetch_albums(&self, page: usize, limit: usize) -> PaginatedResponse<Album> {
        self.music.lock().await.begin_fetch();
        let response = self.api.music().get_albums(page, limit).await;
        tracing::debug!(page, total = response.total, has_more = response.has_more, "Fetched albums");
        self.music
            .lock()
            .await
            .finish_fetch(Ok(response.data.clone()), |music, albums| music.albums = albums);
        response
    }

    pub async fn fetch_playlists(&self, page: usize, limit: usize) -> PaginatedResponse<Playlist> {
        self.music.lock().await.begin_fetch();
        let response = self.api.music().get_playlists(page, limit).await;
        tracing::debug!(page, total = response.total, has_more = response.has_more, "Fetched playlists");
        self.music
            .lock()
            .await
            .finish_fetch(Ok(response.data.clone()), |music, playlists| music.playlists = playlists);
        response
    }

    /// Failures are kept on the store and come back as no results
    pub async fn search_music(&self, query: &str) -> SearchResult {
        self.music.lock().await.begin_fetch();
        let result = self.api.music().search(query).await.map(|r| r.data);
        let mut music = self.music.lock().await;
        music.is_loading = false;
        if let Err(e) = &result {
            music.error = Some(e.to_string());
        }
        MusicStore::search_or_empty(result)
    }

    pub async fn load_library(&self) -> Result<(), ApiError> {
        self.reload_library(Placement::Root).await
    }

    async fn reload_library(&self, placement: Placement) -> Result<(), ApiError> {
        let Some(user) = self.current_user().await else {
            self.music.lock().await.library = None;
            return self.settle_page(Ok(ContentPage::signed_out_library()), placement).await;
        };
        self.begin_page_load().await;
        let result = self.api.music().get_library_data(&user.id).await.map(|r| r.data);
        let page = result.as_ref().map(ContentPage::library).map_err(Clone::clone);
        self.music.lock().await.finish_fetch(result, |music, library| {
            music.playlists = library.playlists.clone();
            music.library = Some(library);
        });
        self.settle_page(page, placement).await
    }

    pub async fn show_profile(&self) {
        let user = self.current_user().await;
        let creator_name = {
            let creator_auth = self.creator_auth.lock().await;
            creator_auth
                .creator
                .as_ref()
                .filter(|_| creator_auth.is_authenticated)
                .map(|c| c.artist_name.clone())
        };
        let page = ContentPage::profile(user.as_ref(), creator_name.as_deref());
        self.content_state.lock().await.show_root(page);
    }

    /// Re-render the visible page after a playlist changed
    async fn refresh_after_playlist_edit(&self, playlist: &Playlist) {
        let kind = self.content_state.lock().await.current_kind().cloned();
        match kind {
            Some(PageKind::Playlist(id)) if id == playlist.id => {
                self.content_state.lock().await.replace(ContentPage::playlist(playlist));
            }
            Some(PageKind::Library) => {
                if let Err(e) = self.reload_library(Placement::Replace).await {
                    tracing::warn!(error = %e, "Library refresh failed");
                }
            }
            _ => {}
        }
    }

    // ========================================================================
    // Playlists & follows
    // ========================================================================

    /// Named after how many playlists the listener already owns
    pub async fn create_playlist(&self) -> Result<Playlist, ApiError> {
        let Some(user) = self.current_user().await else {
            return Err(ApiError::Validation("Sign in to create playlists".to_string()));
        };
        let owned = self.api.music().count_owned_playlists(&user.id).await;
        let name = format!("My Playlist #{}", owned + 1);
        let result = self.api.music().create_playlist(&name, None).await.map(|r| r.data);
        if let Ok(playlist) = &result {
            self.music.lock().await.upsert_playlist(playlist.clone());
            self.refresh_after_playlist_edit(playlist).await;
        }
        result
    }

    pub async fn add_to_playlist(&self, playlist_id: &str, song_id: &str) -> Result<Playlist, ApiError> {
        let result = self.api.music().add_to_playlist(playlist_id, song_id).await.map(|r| r.data);
        if let Ok(playlist) = &result {
            self.music.lock().await.upsert_playlist(playlist.clone());
            self.refresh_after_playlist_edit(playlist).await;
        }
        result
    }

    pub async fn remove_from_playlist(&self, playlist_id: &str, song_id: &str) -> Result<Playlist, ApiError> {
        let result = self
            .api
            .music()
            .remove_from_playlist(playlist_id, song_id)
            .await
            .map(|r| r.data);
        if let Ok(playlist) = &result {
            self.music.lock().await.upsert_playlist(playlist.clone());
            self.refresh_after_playlist_edit(playlist).await;
        }
        result
    }

    pub async fn follow_artist(&self, artist_id: &str) -> Result<String, ApiError> {
        let response = self.api.music().follow_artist(artist_id).await?;
        let artist = response.data;
        let mut music = self.music.lock().await;
        match music.artists.iter_mut().find(|a| a.id == artist.id) {
            Some(slot) => *slot = artist.clone(),
            None => music.artists.push(artist.clone()),
        }
        Ok(artist.name)
    }

    // ========================================================================
    // Playback
    // ========================================================================

    /// Apply a player action, then start or stop the playback clock to match
    pub async fn player_action(&self, action: PlayerAction) {
        let is_playing = {
            let mut player = self.player.lock().await;
            player.dispatch(action);
            player.is_playing()
        };
        self.sync_playback_ticker(is_playing).await;
    }

    async fn sync_playback_ticker(&self, is_playing: bool) {
        let mut slot = self.playback_ticker.lock().await;
        if !is_playing {
            if let Some(ticker) = slot.take() {
                ticker.stop();
            }
            return;
        }
        if slot.as_ref().is_some_and(Ticker::is_running) {
            return;
        }

        let player = self.player.clone();
        *slot = Some(Ticker::start("playback", self.tick, move || {
            let player = player.clone();
            async move {
                let mut player = player.lock().await;
                player.dispatch(PlayerAction::Tick);
                player.is_playing()
            }
        }));
    }

    #[cfg(test)]
    pub async fn is_playback_clock_running(&self) -> bool {
        self.playback_ticker
            .lock()
            .await
            .as_ref()
            .is_some_and(Ticker::is_running)
    }

    // ========================================================================
    // Creator dashboard
    // ========================================================================

    pub async fn set_dashboard_tab(&self, tab: DashboardTab) {
        self.dashboard.lock().await.set_active_tab(tab);
        self.ui_state.lock().await.studio_selected = 0;
    }

    pub async fn with_dashboard<R>(&self, f: impl FnOnce(&mut CreatorDashboardStore) -> R) -> R {
        f(&mut *self.dashboard.lock().await)
    }

    pub async fn with_social<R>(&self, f: impl FnOnce(&mut SocialState) -> R) -> R {
        f(&mut *self.social.lock().await)
    }

    /// Pays out this month's revenue after a simulated delay
    pub async fn request_payout(&self, method: PayoutMethod) -> Result<Payout, ApiError> {
        let amount = {
            let mut dashboard = self.dashboard.lock().await;
            if dashboard.is_loading {
                return Err(ApiError::Validation("A payout is already in progress".to_string()));
            }
            let amount = dashboard.stats.monthly_revenue;
            if amount <= 0.0 {
                return Err(ApiError::Validation("Nothing to pay out".to_string()));
            }
            dashboard.begin_payout();
            amount
        };
        self.api.latency().wait(PAYOUT_DELAY_MS).await;
        Ok(self.dashboard.lock().await.record_payout(amount, method))
    }

    pub async fn publish_upload(&self, upload_id: &str) {
        self.dashboard.lock().await.update_upload(
            upload_id,
            UploadUpdate {
                status: Some(UploadStatus::Published),
                ..Default::default()
            },
        );
    }

    /// Walk a new file through the progress list, then add it as an upload
    pub async fn simulate_upload(&self, title: &str, kind: UploadKind) -> CreatorUpload {
        let file_name = format!("{}.mp3", title.to_lowercase().replace(' ', "-"));
        self.dashboard.lock().await.add_upload_progress(UploadProgress {
            file_name: file_name.clone(),
            progress: 0,
            status: UploadProgressStatus::Uploading,
            error_message: None,
        });

        let latency = self.api.latency();
        for step in UPLOAD_STEPS {
            latency.wait(UPLOAD_STEP_DELAY_MS).await;
            let status = if step == 100 {
                UploadProgressStatus::Processing
            } else {
                UploadProgressStatus::Uploading
            };
            self.dashboard.lock().await.update_upload_progress(
                &file_name,
                UploadProgressUpdate {
                    progress: Some(step),
                    status: Some(status),
                    ..Default::default()
                },
            );
        }
        latency.wait(UPLOAD_STEP_DELAY_MS).await;

        let now = data::now_iso();
        let upload = CreatorUpload {
            id: data::generate_id("upload"),
            title: title.to_string(),
            kind,
            cover: "/album-1.jpg".to_string(),
            audio_url: format!("/uploads/{}", file_name),
            duration: 0,
            status: UploadStatus::Processing,
            genre: String::new(),
            description: String::new(),
            tags: Vec::new(),
            release_date: now.clone(),
            uploaded_at: now,
            streams: 0,
            likes: 0,
            comments: 0,
            revenue: 0.0,
            is_explicit: false,
            lyrics: None,
        };

        let mut dashboard = self.dashboard.lock().await;
        dashboard.update_upload_progress(
            &file_name,
            UploadProgressUpdate {
                status: Some(UploadProgressStatus::Complete),
                ..Default::default()
            },
        );
        dashboard.remove_upload_progress(&file_name);
        dashboard.add_upload(upload.clone());
        upload
    }

    pub async fn add_event(&self, title: &str) -> Result<Event, ApiError> {
        let creator = self.require_creator("add events").await?;
        let event = social::new_event(&creator, title);
        self.social.lock().await.events.add_event(event.clone());
        Ok(event)
    }

    pub async fn announce(&self, content: &str) -> Result<Announcement, ApiError> {
        let creator = self.require_creator("post announcements").await?;
        let announcement = social::new_announcement(&creator, content);
        tracing::info!(announcement_id = %announcement.id, creator_id = %creator.id, "Announcement posted");
        self.social.lock().await.events.add_announcement(announcement.clone());
        Ok(announcement)
    }

    /// Note on `song_id`, or a general note without one
    pub async fn add_note(&self, song_id: Option<String>, content: &str) -> Result<ArtistNote, ApiError> {
        let creator = self.require_creator("write notes").await?;
        let note = social::new_note(&creator, song_id, content);
        self.social.lock().await.notes.add(note.clone());
        Ok(note)
    }

    /// Collaboration on `song_id` that waits for the song's artist to approve
    pub async fn start_collaboration(&self, song_id: &str, title: &str) -> Result<CollaborationPost, ApiError> {
        let creator = self.require_creator("start collaborations").await?;
        let song = self.api.music().get_song_by_id(song_id).await?.data;
        let post = social::new_collaboration(&creator, &song, title);
        self.social.lock().await.collaborations.create(post.clone());
        Ok(post)
    }

    /// New active tier at the default price, no subscribers yet
    pub async fn add_subscription_tier(&self, name: &str) -> Result<SubscriptionTier, ApiError> {
        self.require_creator("add subscription tiers").await?;
        let tier = SubscriptionTier {
            id: data::generate_id("tier"),
            name: name.to_string(),
            price: DEFAULT_TIER_PRICE,
            currency: "USD".to_string(),
            description: String::new(),
            benefits: Vec::new(),
            subscriber_count: 0,
            is_active: true,
        };
        self.dashboard.lock().await.add_subscription_tier(tier.clone());
        Ok(tier)
    }

    // ========================================================================
    // Messages
    // ========================================================================

    /// Who the listener posts as; guests get a placeholder identity
    async fn listener_participant(&self) -> ChatParticipant {
        match self.current_user().await {
            Some(user) => ChatParticipant {
                id: user.id,
                name: user.name,
                avatar: user.avatar,
                is_online: true,
                last_seen: None,
            },
            None => ChatParticipant {
                id: "guest".to_string(),
                name: "Guest".to_string(),
                avatar: String::new(),
                is_online: true,
                last_seen: None,
            },
        }
    }

    /// Post into an open conversation; your own message leaves it read
    pub async fn send_message(&self, conversation_id: &str, content: &str) -> Result<Message, ApiError> {
        let me = self.listener_participant().await;
        let message = social::text_message(conversation_id, &me.id, content);
        let mut social = self.social.lock().await;
        if social.messaging.conversations().iter().all(|c| c.id != conversation_id) {
            return Err(ApiError::NotFound("Conversation"));
        }
        social.messaging.add_message(conversation_id, message.clone());
        social.messaging.mark_as_read(conversation_id);
        tracing::info!(conversation_id, message_id = %message.id, "Message sent");
        Ok(message)
    }

    /// Open a chat with a contact, reusing one that already exists
    pub async fn start_conversation(&self, contact_id: &str) -> Result<String, ApiError> {
        let me = self.listener_participant().await;
        let mut social = self.social.lock().await;
        let contact = social
            .messaging
            .contacts()
            .iter()
            .find(|c| c.id == contact_id)
            .cloned()
            .ok_or(ApiError::NotFound("Contact"))?;
        if !contact.is_on_nia_tunes {
            return Err(ApiError::Validation(format!("{} is not on NiaTunes yet", contact.name)));
        }

        let id = match social.messaging.conversation_with(&contact) {
            Some(existing) => existing.id.clone(),
            None => {
                let conversation = social::direct_conversation(&contact, me);
                let id = conversation.id.clone();
                tracing::info!(conversation_id = %id, contact_id, "Conversation started");
                social.messaging.add_conversation(conversation);
                id
            }
        };
        social.messaging.set_active_conversation(Some(id.clone()));
        social.messaging.mark_as_read(&id);
        Ok(id)
    }

    /// Merge the device address book in; returns how many contacts were new
    pub async fn sync_contacts(&self) -> usize {
        self.social.lock().await.messaging.begin_sync();
        self.api.latency().wait(CONTACT_SYNC_DELAY_MS).await;
        let mut social = self.social.lock().await;
        let mut added = 0;
        for contact in data::social::device_contacts() {
            if social.messaging.contacts().iter().all(|c| c.id != contact.id) {
                social.messaging.add_contact(contact);
                added += 1;
            }
        }
        social.messaging.finish_sync();
        added
    }

    /// Play a song someone shared in a chat
    pub async fn play_shared_song(&self, song_id: &str) -> Result<Song, ApiError> {
        let song = self.api.music().get_song_by_id(song_id).await?.data;
        self.player_action(PlayerAction::Play(song.clone())).await;
        Ok(song)
    }

    // ========================================================================
    // Comments & reviews
    // ========================================================================

    async fn require_listener(&self, action: &str) -> Result<User, ApiError> {
        self.current_user()
            .await
            .ok_or_else(|| ApiError::Validation(format!("Sign in to {}", action)))
    }

    pub async fn post_comment(&self, song_id: &str, content: &str) -> Result<Comment, ApiError> {
        let user = self.require_listener("comment").await?;
        let comment = social::new_comment(&user, song_id, content);
        self.social.lock().await.comments.add_comment(comment.clone());
        Ok(comment)
    }

    pub async fn reply_to_comment(&self, song_id: &str, parent_id: &str, content: &str) -> Result<Comment, ApiError> {
        let user = self.require_listener("reply").await?;
        let reply = social::new_comment(&user, song_id, content);
        let mut social = self.social.lock().await;
        if social.comments.comments().iter().all(|c| c.id != parent_id) {
            return Err(ApiError::NotFound("Comment"));
        }
        social.comments.add_reply(parent_id, reply.clone());
        Ok(reply)
    }

    pub async fn review_song(&self, song_id: &str, rating: u8, text: &str) -> Result<Review, ApiError> {
        if !RATING_RANGE.contains(&rating) {
            return Err(ApiError::Validation(format!(
                "Ratings go from {} to {} stars",
                RATING_RANGE.start(),
                RATING_RANGE.end()
            )));
        }
        let user = self.require_listener("review").await?;
        let review = social::new_review(&user, song_id, rating, text);
        self.social.lock().await.comments.add_review(review.clone());
        Ok(review)
    }

    /// Only the comment's author may delete it
    pub async fn delete_comment(&self, comment_id: &str) -> Result<(), ApiError> {
        let user = self.require_listener("delete comments").await?;
        let mut social = self.social.lock().await;
        let author = social
            .comments
            .comments()
            .iter()
            .find(|c| c.id == comment_id)
            .map(|c| c.user_id.clone())
            .ok_or(ApiError::NotFound("Comment"))?;
        if author != user.id {
            return Err(ApiError::Validation("You can only delete your own comments".to_string()));
        }
        social.comments.delete_comment(comment_id);
        Ok(())
    }

    // ========================================================================
    // Live streaming
    // ========================================================================

    /// Go live as the signed-in creator and start the viewer jitter
    pub async fn start_stream(&self, title: &str) -> Result<String, ApiError> {
        let creator = self.require_creator("go live").await?;

        let stream = social::new_stream(&creator, title, None);
        let id = stream.id.clone();
        {
            let mut social = self.social.lock().await;
            if let Some(active) = social.live.active_stream().map(|s| s.id.clone()) {
                social.live.end_stream(&active);
            }
            social.live.start_stream(stream);
        }

        let state = self.social.clone();
        let ticker = Ticker::start("viewers", VIEWER_JITTER_PERIOD, move || {
            let state = state.clone();
            async move {
                let mut social = state.lock().await;
                let viewers = social.live.apply_viewer_jitter(&mut rand::rng());
                viewers.is_some()
            }
        });
        if let Some(previous) = self.viewer_ticker.lock().await.replace(ticker) {
            previous.stop();
        }
        Ok(id)
    }

    /// End whatever is on air; no-op when nothing is
    pub async fn end_active_stream(&self) {
        if let Some(ticker) = self.viewer_ticker.lock().await.take() {
            ticker.stop();
        }
        let mut social = self.social.lock().await;
        if let Some(id) = social.live.active_stream().map(|s| s.id.clone()) {
            social.live.end_stream(&id);
        }
    }

    pub async fn schedule_stream(&self, title: &str, scheduled_at: String) -> Result<(), ApiError> {
        let creator = self.require_creator("schedule a stream").await?;
        let stream = social::new_stream(&creator, title, Some(scheduled_at));
        self.social.lock().await.live.schedule_stream(stream);
        Ok(())
    }

    /// A listener tips the active stream with one gift
    pub async fn send_tip(&self, gift_index: usize) -> Result<f64, ApiError> {
        let sender = self.listener_participant().await;
        let mut social = self.social.lock().await;
        let stream_id = social
            .live
            .active_stream()
            .map(|s| s.id.clone())
            .ok_or(ApiError::NotFound("Live stream"))?;
        let gift = social
            .live
            .gifts()
            .get(gift_index)
            .cloned()
            .ok_or(ApiError::NotFound("Gift"))?;
        let tip = social::gift_tip(&stream_id, &gift, &sender.id, &sender.name, &sender.avatar);
        social.live.add_tip(&stream_id, tip);
        Ok(gift.price)
    }

    #[cfg(test)]
    pub async fn is_viewer_jitter_running(&self) -> bool {
        self.viewer_ticker
            .lock()
            .await
            .as_ref()
            .is_some_and(Ticker::is_running)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ContentItem, CreatorType, RepeatMode};
    use tempfile::TempDir;

    fn model_in(dir: &TempDir) -> AppModel {
        AppModel::with_parts(
            MockApi::new(Latency::none()),
            SessionStorage::new(dir.path()),
            Duration::from_secs(1),
        )
    }

    async fn signed_in_creator(model: &AppModel) {
        model
            .creator_login("alex@niatunes.com", "password123")
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn login_persists_and_restores() {
        let dir = TempDir::new().unwrap();
        let model = model_in(&dir);
        let user = model.login("a@b.com", "123456").await.unwrap();
        assert_eq!(model.current_user().await, Some(user.clone()));

        let fresh = model_in(&dir);
        assert!(fresh.current_user().await.is_none());
        fresh.restore_sessions().await;
        assert_eq!(fresh.current_user().await, Some(user));
    }

    #[tokio::test]
    async fn failed_login_keeps_error_on_store() {
        let dir = TempDir::new().unwrap();
        let model = model_in(&dir);
        assert!(model.login("a@b.com", "123").await.is_err());
        let auth = model.auth.lock().await;
        assert!(!auth.is_authenticated);
        assert!(!auth.is_loading);
        assert_eq!(auth.error.as_deref(), Some("Invalid credentials"));
    }

    #[tokio::test]
    async fn malformed_snapshot_is_ignored() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("auth-storage.json"), "{not json").unwrap();
        let model = model_in(&dir);
        model.restore_sessions().await;
        assert!(model.current_user().await.is_none());
    }

    #[tokio::test]
    async fn logout_clears_persisted_identity() {
        let dir = TempDir::new().unwrap();
        let model = model_in(&dir);
        model.login("a@b.com", "123456").await.unwrap();
        model.logout().await;

        let fresh = model_in(&dir);
        fresh.restore_sessions().await;
        assert!(fresh.current_user().await.is_none());
    }

    #[tokio::test]
    async fn home_is_root_and_details_stack() {
        let dir = TempDir::new().unwrap();
        let model = model_in(&dir);
        model.load_home().await.unwrap();
        model.open_album("album-1").await.unwrap();

        let content = model.get_content_state().await;
        assert_eq!(content.current_kind(), Some(&PageKind::Album("album-1".into())));
        assert_eq!(content.navigation_stack.len(), 1);
        assert!(!content.is_loading);

        assert!(model.with_content(ContentState::back).await);
        assert_eq!(model.get_content_state().await.current_kind(), Some(&PageKind::Home));
    }

    #[tokio::test]
    async fn missing_album_leaves_page_untouched() {
        let dir = TempDir::new().unwrap();
        let model = model_in(&dir);
        model.load_home().await.unwrap();
        let err = model.open_album("album-404").await.unwrap_err();
        assert_eq!(err, ApiError::NotFound("Album"));

        let content = model.get_content_state().await;
        assert_eq!(content.current_kind(), Some(&PageKind::Home));
        assert!(!content.is_loading);
        assert!(model.music.lock().await.error.is_some());
    }

    #[tokio::test]
    async fn empty_search_shows_genres() {
        let dir = TempDir::new().unwrap();
        let model = model_in(&dir);
        model.search("   ").await.unwrap();
        assert_eq!(model.get_content_state().await.current_kind(), Some(&PageKind::Browse));

        model.search("NAKUPENDA").await.unwrap();
        let content = model.get_content_state().await;
        assert_eq!(content.current_kind(), Some(&PageKind::Search("NAKUPENDA".into())));
        assert_eq!(model.get_ui_state().await.navigation.search_query, "NAKUPENDA");
    }

    #[tokio::test]
    async fn catalog_fetches_fill_the_store_page_by_page() {
        let dir = TempDir::new().unwrap();
        let model = model_in(&dir);
        let first = model.fetch_songs(1, 4).await;
        assert_eq!(first.data.len(), 4);
        assert!(first.has_more);
        let second = model.fetch_songs(2, 4).await;
        assert!(!second.has_more);
        {
            let music = model.music.lock().await;
            assert_eq!(music.songs, second.data);
            assert!(!music.is_loading);
        }

        assert_eq!(model.fetch_artists(1, 20).await.data, model.music.lock().await.artists);
        let albums = model.fetch_albums(1, 20).await;
        assert_eq!(albums.total, 5);
        assert_eq!(albums.data, model.music.lock().await.albums);
        assert_eq!(model.fetch_playlists(1, 20).await.data, model.music.lock().await.playlists);
    }

    #[tokio::test]
    async fn search_music_is_case_insensitive() {
        let dir = TempDir::new().unwrap();
        let model = model_in(&dir);
        let result = model.search_music("sauti sol").await;
        assert!(!result.songs.is_empty());
        assert!(result.songs.iter().all(|s| s.artist == "Sauti Sol" || s.title.to_lowercase().contains("sauti sol")));
        assert!(model.search_music("zzzz").await.is_empty());
    }

    #[tokio::test]
    async fn library_needs_a_listener() {
        let dir = TempDir::new().unwrap();
        let model = model_in(&dir);
        model.load_library().await.unwrap();
        let content = model.get_content_state().await;
        assert!(matches!(content.selected_item(), Some(ContentItem::Action { .. })));
        assert!(model.create_playlist().await.is_err());
    }

    #[tokio::test]
    async fn new_playlist_shows_up_in_library() {
        let dir = TempDir::new().unwrap();
        let model = model_in(&dir);
        model.login("a@b.com", "123456").await.unwrap();
        model.load_library().await.unwrap();

        let playlist = model.create_playlist().await.unwrap();
        assert!(playlist.name.starts_with("My Playlist #"));
        let content = model.get_content_state().await;
        let page = content.page.unwrap();
        assert!(page
            .items
            .iter()
            .any(|item| matches!(item, ContentItem::Playlist(p) if p.id == playlist.id)));

        let updated = model.add_to_playlist(&playlist.id, "song-1").await.unwrap();
        assert_eq!(updated.songs.len(), 1);
        let updated = model.remove_from_playlist(&playlist.id, "song-1").await.unwrap();
        assert!(updated.songs.is_empty());
    }

    #[tokio::test]
    async fn created_playlists_are_numbered_in_order() {
        let dir = TempDir::new().unwrap();
        let model = model_in(&dir);
        model.login("a@b.com", "123456").await.unwrap();
        model.load_home().await.unwrap();

        // The listener already owns one fixture playlist
        let first = model.create_playlist().await.unwrap();
        let second = model.create_playlist().await.unwrap();
        assert_eq!(first.name, "My Playlist #2");
        assert_eq!(second.name, "My Playlist #3");
    }

    #[tokio::test(start_paused = true)]
    async fn playback_clock_follows_play_state() {
        let dir = TempDir::new().unwrap();
        let model = model_in(&dir);
        let song = crate::data::catalog::Catalog::seed().songs[0].clone();

        model.player_action(PlayerAction::Play(song)).await;
        assert!(model.is_playback_clock_running().await);

        tokio::time::sleep(Duration::from_millis(3500)).await;
        assert_eq!(model.get_player_state().await.elapsed(), 3);

        model.player_action(PlayerAction::Pause).await;
        assert!(!model.is_playback_clock_running().await);
        tokio::time::sleep(Duration::from_secs(5)).await;
        assert_eq!(model.get_player_state().await.elapsed(), 3);

        model.player_action(PlayerAction::ToggleRepeat).await;
        assert_eq!(model.get_player_state().await.repeat(), RepeatMode::All);
    }

    #[tokio::test]
    async fn going_live_needs_a_creator() {
        let dir = TempDir::new().unwrap();
        let model = model_in(&dir);
        assert!(model.start_stream("Hello").await.is_err());
        assert!(model.send_tip(0).await.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn live_stream_lifecycle() {
        let dir = TempDir::new().unwrap();
        let model = model_in(&dir);
        signed_in_creator(&model).await;

        let id = model.start_stream("Studio session").await.unwrap();
        assert!(model.is_viewer_jitter_running().await);

        tokio::time::sleep(VIEWER_JITTER_PERIOD * 4 + Duration::from_millis(100)).await;
        let price = model.send_tip(0).await.unwrap();
        {
            let social = model.social.lock().await;
            let active = social.live.active_stream().unwrap();
            assert!(active.viewers >= 1);
            assert!(active.peak_viewers >= active.viewers);
            assert_eq!(active.total_tips, price);
        }

        model.end_active_stream().await;
        assert!(!model.is_viewer_jitter_running().await);
        let social = model.social.lock().await;
        assert!(!social.live.is_live());
        let stored = social.live.streams().iter().find(|s| s.id == id).unwrap();
        assert_eq!(stored.status, crate::model::social::StreamStatus::Ended);
        assert_eq!(stored.tips.len(), 1);
    }

    #[tokio::test]
    async fn payout_uses_monthly_revenue() {
        let dir = TempDir::new().unwrap();
        let model = model_in(&dir);
        let revenue = model.dashboard.lock().await.stats.monthly_revenue;
        let payout = model.request_payout(PayoutMethod::Mpesa).await.unwrap();
        assert_eq!(payout.amount, revenue);
        let dashboard = model.dashboard.lock().await;
        assert_eq!(dashboard.payouts[0].id, payout.id);
        assert!(!dashboard.is_loading);
    }

    #[tokio::test]
    async fn simulated_upload_lands_first() {
        let dir = TempDir::new().unwrap();
        let model = model_in(&dir);
        let songs = model.dashboard.lock().await.stats.total_songs;
        let upload = model.simulate_upload("Night Drive", UploadKind::Song).await;

        let dashboard = model.dashboard.lock().await;
        assert_eq!(dashboard.uploads[0].id, upload.id);
        assert!(dashboard.upload_progress.is_empty());
        assert_eq!(dashboard.stats.total_songs, songs + 1);
    }

    #[tokio::test]
    async fn contacts_sync_only_adds_new_entries() {
        let dir = TempDir::new().unwrap();
        let model = model_in(&dir);
        assert_eq!(model.sync_contacts().await, 2);
        assert_eq!(model.sync_contacts().await, 0);
        let social = model.social.lock().await;
        assert!(!social.messaging.is_syncing);
        assert_eq!(social.messaging.contacts().len(), 5);
    }

    #[tokio::test]
    async fn lost_user_is_fetched_back_on_restore() {
        let dir = TempDir::new().unwrap();
        let model = model_in(&dir);
        model
            .storage
            .save(AUTH_STORAGE_KEY, &serde_json::json!({"user": null, "isAuthenticated": true}))
            .unwrap();
        model.restore_sessions().await;
        let user = model.current_user().await.unwrap();
        assert_eq!(user.id, "user-1");

        let fresh = model_in(&dir);
        fresh.restore_sessions().await;
        assert_eq!(fresh.current_user().await, Some(user));
    }

    #[tokio::test]
    async fn rename_is_kept_across_restarts() {
        let dir = TempDir::new().unwrap();
        let model = model_in(&dir);
        assert!(model.rename_listener("Wanjiru").await.is_err());

        let user = model.login("a@b.com", "123456").await.unwrap();
        let renamed = model.rename_listener("Wanjiru").await.unwrap();
        assert_eq!(renamed.name, "Wanjiru");
        assert_eq!(renamed.id, user.id);

        let fresh = model_in(&dir);
        fresh.restore_sessions().await;
        assert_eq!(fresh.current_user().await.map(|u| u.name), Some("Wanjiru".to_string()));
    }

    #[tokio::test]
    async fn sent_messages_become_last_and_read() {
        let dir = TempDir::new().unwrap();
        let model = model_in(&dir);
        model.login("a@b.com", "123456").await.unwrap();
        let message = model.send_message("conv-1", "Sawa sawa").await.unwrap();
        assert_eq!(message.sender_id, "user-1");
        assert_eq!(
            model.send_message("conv-404", "Hello?").await.unwrap_err(),
            ApiError::NotFound("Conversation")
        );

        let social = model.social.lock().await;
        let conversation = &social.messaging.conversations()[0];
        assert_eq!(conversation.last_message.id, message.id);
        assert_eq!(conversation.unread_count, 0);
    }

    #[tokio::test]
    async fn contacts_open_or_reuse_conversations() {
        let dir = TempDir::new().unwrap();
        let model = model_in(&dir);
        // Jane already has a chat
        assert_eq!(model.start_conversation("contact-1").await.unwrap(), "conv-1");
        assert!(model.start_conversation("contact-3").await.is_err());

        let id = model.start_conversation("contact-2").await.unwrap();
        assert_eq!(model.start_conversation("contact-2").await.unwrap(), id);
        let social = model.social.lock().await;
        assert_eq!(social.messaging.conversations().len(), 3);
        assert_eq!(social.messaging.active_conversation().map(|c| c.id.clone()), Some(id));
    }

    #[tokio::test]
    async fn shared_songs_play() {
        let dir = TempDir::new().unwrap();
        let model = model_in(&dir);
        let song = model.play_shared_song("song-1").await.unwrap();
        let player = model.get_player_state().await;
        assert_eq!(player.current().map(|s| s.id.clone()), Some(song.id));
        assert!(player.is_playing());
        assert!(model.play_shared_song("song-404").await.is_err());
    }

    #[tokio::test]
    async fn comments_and_reviews_need_a_listener() {
        let dir = TempDir::new().unwrap();
        let model = model_in(&dir);
        assert!(model.post_comment("song-1", "Fire").await.is_err());

        model.login("a@b.com", "123456").await.unwrap();
        let comment = model.post_comment("song-1", "Fire").await.unwrap();
        model.reply_to_comment("song-1", "comment-2", "Agreed").await.unwrap();
        assert_eq!(
            model.reply_to_comment("song-1", "comment-404", "?").await.unwrap_err(),
            ApiError::NotFound("Comment")
        );
        assert!(model.review_song("song-1", 0, "meh").await.is_err());
        let review = model.review_song("song-1", 4, "Solid").await.unwrap();

        {
            let social = model.social.lock().await;
            assert_eq!(social.comments.comments()[0].id, comment.id);
            assert_eq!(social.comments.reviews()[0].id, review.id);
            let parent = social.comments.comments().iter().find(|c| c.id == "comment-2").unwrap();
            assert_eq!(parent.replies.last().map(|r| r.content.as_str()), Some("Agreed"));
        }

        assert!(model.delete_comment("comment-2").await.is_err());
        model.delete_comment(&comment.id).await.unwrap();
        let social = model.social.lock().await;
        assert!(social.comments.comments().iter().all(|c| c.id != comment.id));
    }

    #[tokio::test]
    async fn studio_records_belong_to_the_signed_in_creator() {
        let dir = TempDir::new().unwrap();
        let model = model_in(&dir);
        assert!(model.add_event("Listening party").await.is_err());
        assert!(model.announce("Hello fans").await.is_err());
        assert!(model.add_subscription_tier("Backstage").await.is_err());

        signed_in_creator(&model).await;
        let event = model.add_event("Listening party").await.unwrap();
        let announcement = model.announce("Hello fans").await.unwrap();
        let tier = model.add_subscription_tier("Backstage").await.unwrap();
        let creator = model
            .update_creator_profile(CreatorProfileUpdate {
                bio: Some("Nairobi born".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(creator.bio, "Nairobi born");
        assert_eq!(event.creator_id, creator.id);
        assert_eq!(announcement.creator_id, creator.id);
        assert_eq!(tier.price, DEFAULT_TIER_PRICE);

        let note = model.add_note(Some("song-1".to_string()), "Recorded in one take").await.unwrap();
        assert_eq!(note.title, "Recorded in one take");

        let snapshot = model.snapshot().await;
        assert_eq!(snapshot.social.notes.by_creator(&creator.id).count(), 2);
        assert_eq!(snapshot.social.events.events_by_creator(&creator.id).count(), 4);
        assert_eq!(snapshot.social.events.announcements()[0].id, announcement.id);
        assert!(snapshot.dashboard.subscription_tiers.iter().any(|t| t.id == tier.id));
    }

    #[tokio::test]
    async fn registered_creator_sees_only_their_own_studio() {
        let dir = TempDir::new().unwrap();
        let model = model_in(&dir);
        assert_eq!(model.snapshot().await.studio_creator_id(), current_creator().id);

        let creator = model
            .creator_register(CreatorRegistration {
                name: "Wanjiru".to_string(),
                artist_name: "W".to_string(),
                email: "w@niatunes.com".to_string(),
                password: "password123".to_string(),
                creator_type: CreatorType::Artist,
            })
            .await
            .unwrap();
        model.add_event("First show").await.unwrap();

        let snapshot = model.snapshot().await;
        let id = snapshot.studio_creator_id();
        assert_eq!(id, creator.id);
        assert_eq!(snapshot.social.merchandise.by_creator(&id).count(), 0);
        assert_eq!(snapshot.social.events.events_by_creator(&id).count(), 1);
    }
}
