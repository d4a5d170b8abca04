//! Navigation-related controller methods (tabs, catalog pages, search)

use crossterm::event::{KeyCode, KeyEvent};

use crate::model::{
    AppMode, ComposeTarget, ContentItem, ContentState, FormKind, PageAction, PlayerAction, Tab, UiState,
};
use super::AppController;

impl AppController {
    /// Listener keys; `false` lets the key fall through to the global map
    pub(super) async fn handle_listener_key(&self, key: KeyEvent, ui_state: &UiState) -> bool {
        if ui_state.navigation.is_player_expanded && self.handle_sheet_key(key, ui_state).await {
            return true;
        }
        match key.code {
            KeyCode::Tab => self.switch_tab(ui_state.navigation.active_tab.next()).await,
            KeyCode::BackTab => self.switch_tab(ui_state.navigation.active_tab.prev()).await,
            KeyCode::Char(c @ '1'..='4') => {
                let index = c as usize - '1' as usize;
                self.switch_tab(Tab::ALL[index]).await;
            }
            KeyCode::Up => self.model.with_content(ContentState::move_up).await,
            KeyCode::Down => self.model.with_content(ContentState::move_down).await,
            KeyCode::Enter => self.open_selected().await,
            KeyCode::Backspace | KeyCode::Esc => {
                if ui_state.navigation.is_player_expanded {
                    self.model.with_ui(|ui| ui.navigation.set_player_expanded(false)).await;
                } else {
                    self.go_back().await;
                }
            }
            KeyCode::Char('/') => {
                self.model
                    .with_ui(|ui| {
                        ui.navigation.set_active_tab(Tab::Search);
                        ui.search_editing = true;
                    })
                    .await;
                if ui_state.navigation.active_tab != Tab::Search {
                    self.spawn(|c| async move {
                        let result = c.model.load_browse().await;
                        c.report("load_browse", result).await;
                    });
                }
            }
            // Now playing details
            KeyCode::Char('f') | KeyCode::Char('F') => {
                let has_song = self.model.get_player_state().await.current().is_some();
                if has_song {
                    self.model
                        .with_ui(|ui| {
                            let expanded = ui.navigation.is_player_expanded;
                            ui.navigation.set_player_expanded(!expanded);
                            ui.sheet_selected = 0;
                        })
                        .await;
                }
            }
            KeyCode::Char('k') | KeyCode::Char('K') => self.queue_selected_song().await,
            KeyCode::Char('a') | KeyCode::Char('A') => self.add_current_to_selected_playlist().await,
            KeyCode::Delete | KeyCode::Char('x') | KeyCode::Char('X') => {
                self.remove_selected_from_playlist().await;
            }
            KeyCode::Char('w') | KeyCode::Char('W') => self.follow_selected_artist().await,
            KeyCode::Char('c') | KeyCode::Char('C') => self.create_playlist().await,
            _ => return false,
        }
        true
    }

    pub async fn perform_search(&self, query: &str) {
        tracing::debug!(query, "Performing search");
        let result = self.model.search(query).await;
        self.report("search", result).await;
    }

    /// Show a bottom tab and load its root page
    pub async fn switch_tab(&self, tab: Tab) {
        tracing::debug!(tab = tab.title(), "Switching tab");
        let query = self
            .model
            .with_ui(|ui| {
                ui.navigation.set_active_tab(tab);
                ui.navigation.search_query.clone()
            })
            .await;

        match tab {
            Tab::Home => self.spawn(|c| async move {
                let result = c.model.load_home().await;
                c.report("load_home", result).await;
            }),
            Tab::Search => self.spawn(move |c| async move { c.perform_search(&query).await }),
            Tab::Library => self.spawn(|c| async move {
                let result = c.model.load_library().await;
                c.report("load_library", result).await;
            }),
            Tab::Profile => self.model.show_profile().await,
        }
    }

    /// Enter on the selected row
    pub async fn open_selected(&self) {
        let content = self.model.get_content_state().await;
        let Some(item) = content.selected_item().cloned() else {
            return;
        };

        match item {
            ContentItem::Song { song, group } => {
                let (songs, start_index) = content
                    .page
                    .as_ref()
                    .map(|page| page.song_group(group, &song.id))
                    .unwrap_or_else(|| (vec![song.clone()], 0));
                tracing::info!(song_id = %song.id, queued = songs.len(), "Playing from page");
                self.model.player_action(PlayerAction::PlayPlaylist { songs, start_index }).await;
            }
            ContentItem::Album(album) => self.spawn(move |c| async move {
                let result = c.model.open_album(&album.id).await;
                c.report("open_album", result).await;
            }),
            ContentItem::Artist(artist) => self.spawn(move |c| async move {
                let result = c.model.open_artist(&artist.id).await;
                c.report("open_artist", result).await;
            }),
            ContentItem::Playlist(playlist) => self.spawn(move |c| async move {
                let result = c.model.open_playlist(&playlist.id).await;
                c.report("open_playlist", result).await;
            }),
            ContentItem::Category(category) => self.spawn(move |c| async move {
                let result = c.model.open_genre(&category.name).await;
                c.report("open_genre", result).await;
            }),
            ContentItem::Action { action, .. } => self.run_page_action(action).await,
            ContentItem::Heading(_) | ContentItem::Info(_) => {}
        }
    }

    async fn run_page_action(&self, action: PageAction) {
        match action {
            PageAction::SignIn => self.open_form(FormKind::ListenerLogin).await,
            PageAction::SignOut => self.sign_out().await,
            PageAction::EditName => self.open_composer(ComposeTarget::DisplayName).await,
            PageAction::OpenStudio => self.enter_studio().await,
            PageAction::CreatePlaylist => self.create_playlist().await,
            PageAction::Browse(listing) => self.spawn(move |c| async move {
                let result = c.model.open_listing(listing).await;
                c.report("open_listing", result).await;
            }),
        }
    }

    pub async fn go_back(&self) {
        if !self.model.with_content(ContentState::back).await {
            tracing::debug!("Already at the root page");
        }
    }

    /// `m`: flip between listening and the creator studio
    pub async fn toggle_mode(&self) {
        let mode = self.model.get_ui_state().await.mode;
        match mode {
            AppMode::Listener => self.enter_studio().await,
            AppMode::Studio => self.model.with_ui(|ui| ui.mode = AppMode::Listener).await,
        }
    }

    /// Studio needs a creator; without one the creator login form opens on top
    pub async fn enter_studio(&self) {
        let signed_in = self.model.is_creator_signed_in().await;
        self.model.with_ui(|ui| ui.mode = AppMode::Studio).await;
        if !signed_in {
            self.open_form(FormKind::CreatorLogin).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use tempfile::TempDir;

    use super::*;
    use crate::api::{Latency, MockApi};
    use crate::model::{AppModel, Listing, PageKind, SessionStorage};

    fn controller(dir: &TempDir) -> AppController {
        let model = AppModel::with_parts(
            MockApi::new(Latency::none()),
            SessionStorage::new(dir.path()),
            Duration::from_secs(1),
        );
        AppController::new(Arc::new(model))
    }

    #[tokio::test]
    async fn enter_on_a_song_plays_its_section() {
        let dir = TempDir::new().unwrap();
        let controller = controller(&dir);
        controller.model.open_album("album-1").await.unwrap();
        controller.open_selected().await;

        let player = controller.model.get_player_state().await;
        let album_songs = controller
            .model
            .get_content_state()
            .await
            .page
            .unwrap()
            .song_group(0, "")
            .0;
        assert_eq!(player.current(), album_songs.first());
        assert!(player.is_playing());
        assert_eq!(player.queue().len(), album_songs.len() - 1);
    }

    #[tokio::test]
    async fn profile_tab_is_synchronous() {
        let dir = TempDir::new().unwrap();
        let controller = controller(&dir);
        controller.switch_tab(Tab::Profile).await;
        let content = controller.model.get_content_state().await;
        assert_eq!(content.current_kind(), Some(&PageKind::Profile));
        assert_eq!(controller.model.get_ui_state().await.navigation.active_tab, Tab::Profile);
    }

    #[tokio::test]
    async fn sign_in_action_opens_listener_form() {
        let dir = TempDir::new().unwrap();
        let controller = controller(&dir);
        controller.switch_tab(Tab::Profile).await;
        controller.open_selected().await;
        let form = controller.model.get_ui_state().await.auth_form.unwrap();
        assert_eq!(form.kind, FormKind::ListenerLogin);
    }

    #[tokio::test]
    async fn back_pops_the_detail_page() {
        let dir = TempDir::new().unwrap();
        let controller = controller(&dir);
        controller.model.load_home().await.unwrap();
        controller.model.open_artist("artist-1").await.unwrap();
        controller.go_back().await;
        assert_eq!(controller.model.get_content_state().await.current_kind(), Some(&PageKind::Home));
        controller.go_back().await;
        assert_eq!(controller.model.get_content_state().await.current_kind(), Some(&PageKind::Home));
    }

    #[tokio::test]
    async fn listing_rows_open_in_place() {
        let dir = TempDir::new().unwrap();
        let controller = controller(&dir);
        controller.model.load_browse().await.unwrap();
        controller.model.open_listing(Listing::Songs).await.unwrap();

        let content = controller.model.get_content_state().await;
        assert_eq!(content.current_kind(), Some(&PageKind::Listing(Listing::Songs)));
        assert_eq!(content.navigation_stack.len(), 1);

        controller.open_selected().await;
        assert!(controller.model.get_player_state().await.is_playing());
    }

    #[tokio::test]
    async fn studio_mode_with_a_creator_skips_the_form() {
        let dir = TempDir::new().unwrap();
        let controller = controller(&dir);
        controller.model.creator_login("alex@niatunes.com", "password123").await.unwrap();
        controller.toggle_mode().await;
        let ui = controller.model.get_ui_state().await;
        assert_eq!(ui.mode, AppMode::Studio);
        assert!(ui.auth_form.is_none());

        controller.toggle_mode().await;
        assert_eq!(controller.model.get_ui_state().await.mode, AppMode::Listener);
    }
}
