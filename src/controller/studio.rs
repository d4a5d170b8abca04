//! Creator studio actions

use chrono::{Duration as ChronoDuration, SecondsFormat, Utc};
use crossterm::event::{KeyCode, KeyEvent};

use crate::data;
use crate::model::social::{EventStatus, EventUpdate, MerchandiseUpdate};
use crate::model::{
    AppMode, ComposeTarget, DashboardTab, ModelSnapshot, PayoutMethod, PlayerAction, TierUpdate, UiState, UploadKind,
};
use super::AppController;

/// Rows the cursor can move over in the active studio tab
pub fn studio_row_count(snapshot: &ModelSnapshot) -> usize {
    let creator_id = snapshot.studio_creator_id();
    let dashboard = &snapshot.dashboard;
    let social = &snapshot.social;
    match dashboard.active_tab {
        DashboardTab::Overview => social.collaborations.by_creator(&creator_id).count(),
        DashboardTab::Uploads => dashboard.uploads.len(),
        DashboardTab::Analytics => 0,
        DashboardTab::Subscribers => dashboard.subscription_tiers.len(),
        DashboardTab::Earnings => dashboard.payouts.len(),
        DashboardTab::Notifications => dashboard.notifications().len(),
        DashboardTab::Live => social.live.gifts().len(),
        DashboardTab::Merchandise => social.merchandise.by_creator(&creator_id).count(),
        DashboardTab::Notes => social.notes.by_creator(&creator_id).count(),
        // Events, then announcements
        DashboardTab::Events => {
            social.events.events_by_creator(&creator_id).count()
                + social.events.announcements_by_creator(&creator_id).count()
        }
    }
}

impl AppController {
    pub(super) async fn handle_studio_key(&self, key: KeyEvent, ui_state: &UiState) -> bool {
        match key.code {
            KeyCode::Tab | KeyCode::Right => self.shift_dashboard_tab(DashboardTab::next).await,
            KeyCode::BackTab | KeyCode::Left => self.shift_dashboard_tab(DashboardTab::prev).await,
            KeyCode::Up => {
                self.model
                    .with_ui(|ui| ui.studio_selected = ui.studio_selected.saturating_sub(1))
                    .await;
            }
            KeyCode::Down => {
                let rows = studio_row_count(&self.model.snapshot().await);
                self.model
                    .with_ui(|ui| {
                        if ui.studio_selected + 1 < rows {
                            ui.studio_selected += 1;
                        }
                    })
                    .await;
            }
            KeyCode::Enter => self.studio_primary_action(ui_state.studio_selected).await,
            KeyCode::Delete | KeyCode::Char('x') | KeyCode::Char('X') => {
                self.studio_delete(ui_state.studio_selected).await;
            }
            KeyCode::Char('a') | KeyCode::Char('A') => {
                self.model.with_dashboard(|d| d.mark_all_notifications_read()).await;
                self.model.set_status("All notifications read").await;
            }
            // Payout method
            KeyCode::Char('c') | KeyCode::Char('C') => {
                self.model.with_ui(|ui| ui.payout_method = ui.payout_method.next()).await;
            }
            KeyCode::Char('n') | KeyCode::Char('N') => return self.compose_for_tab().await,
            KeyCode::Char('b') | KeyCode::Char('B') => {
                if self.model.with_dashboard(|d| d.active_tab).await != DashboardTab::Events {
                    return false;
                }
                self.open_composer(ComposeTarget::Announcement).await;
            }
            KeyCode::Char('j') | KeyCode::Char('J') => {
                if self.model.with_dashboard(|d| d.active_tab).await != DashboardTab::Overview {
                    return false;
                }
                match self.model.get_player_state().await.current() {
                    Some(song) => {
                        let song_id = song.id.clone();
                        self.open_composer(ComposeTarget::Collaboration { song_id }).await;
                    }
                    None => self.model.set_status("Play a song to collaborate on").await,
                }
            }
            KeyCode::Char('g') | KeyCode::Char('G') => self.go_live().await,
            KeyCode::Char('e') | KeyCode::Char('E') => {
                self.model.end_active_stream().await;
                self.model.set_status("Stream ended").await;
            }
            KeyCode::Char('k') | KeyCode::Char('K') => self.schedule_stream().await,
            KeyCode::Char('d') | KeyCode::Char('D') => self.start_demo_upload().await,
            KeyCode::Char('o') | KeyCode::Char('O') => self.creator_sign_out().await,
            KeyCode::Esc | KeyCode::Char('l') | KeyCode::Char('L') => {
                self.model.with_ui(|ui| ui.mode = AppMode::Listener).await;
            }
            _ => return false,
        }
        true
    }

    /// `n`: start a new record for the tab; other tabs leave `n` to the player
    async fn compose_for_tab(&self) -> bool {
        let target = match self.model.with_dashboard(|d| d.active_tab).await {
            DashboardTab::Overview => ComposeTarget::Bio,
            DashboardTab::Subscribers => ComposeTarget::Tier,
            DashboardTab::Events => ComposeTarget::Event,
            DashboardTab::Notes => {
                let song_id = self.model.get_player_state().await.current().map(|s| s.id.clone());
                ComposeTarget::Note { song_id }
            }
            _ => return false,
        };
        self.open_composer(target).await;
        true
    }

    async fn shift_dashboard_tab(&self, step: fn(DashboardTab) -> DashboardTab) {
        let current = self.model.with_dashboard(|d| d.active_tab).await;
        self.model.set_dashboard_tab(step(current)).await;
    }

    /// Enter inside the studio; what it does depends on the tab
    pub async fn studio_primary_action(&self, selected: usize) {
        let snapshot = self.model.snapshot().await;
        let creator_id = snapshot.studio_creator_id();
        let dashboard = &snapshot.dashboard;
        let social = &snapshot.social;

        match dashboard.active_tab {
            DashboardTab::Overview => {
                let Some(post) = social.collaborations.by_creator(&creator_id).nth(selected) else {
                    return;
                };
                let post_id = post.id.clone();
                let title = post.title.clone();
                self.model
                    .with_social(|s| {
                        s.collaborations.approve(&post_id, &creator_id);
                        s.collaborations.post(&post_id, &creator_id, &data::generate_id("post"));
                    })
                    .await;
                self.model.set_status(format!("Posted \"{}\"", title)).await;
            }
            DashboardTab::Uploads => {
                if let Some(upload) = dashboard.uploads.get(selected) {
                    self.model.publish_upload(&upload.id).await;
                    self.model.set_status(format!("Published \"{}\"", upload.title)).await;
                }
            }
            DashboardTab::Subscribers => {
                if let Some(tier) = dashboard.subscription_tiers.get(selected) {
                    let update = TierUpdate {
                        is_active: Some(!tier.is_active),
                        ..Default::default()
                    };
                    let id = tier.id.clone();
                    self.model.with_dashboard(|d| d.update_subscription_tier(&id, update)).await;
                }
            }
            DashboardTab::Earnings => self.request_payout(snapshot.ui.payout_method).await,
            DashboardTab::Notifications => {
                if let Some(notification) = dashboard.notifications().get(selected) {
                    let id = notification.id.clone();
                    self.model.with_dashboard(|d| d.mark_notification_read(&id)).await;
                }
            }
            DashboardTab::Live => {
                let result = self.model.send_tip(selected).await;
                if let Some(amount) = self.report("send_tip", result).await {
                    self.model.set_status(format!("Sent a ${:.2} gift", amount)).await;
                }
            }
            DashboardTab::Merchandise => {
                if let Some(item) = social.merchandise.by_creator(&creator_id).nth(selected) {
                    let update = MerchandiseUpdate {
                        is_available: Some(!item.is_available),
                        ..Default::default()
                    };
                    let id = item.id.clone();
                    self.model.with_social(|s| s.merchandise.update(&id, update)).await;
                }
            }
            DashboardTab::Notes => {
                if let Some(note) = social.notes.by_creator(&creator_id).nth(selected) {
                    let id = note.id.clone();
                    self.model.with_social(|s| s.notes.toggle_pin(&id)).await;
                }
            }
            // Announcements have nothing to toggle
            DashboardTab::Events => {
                if let Some(event) = social.events.events_by_creator(&creator_id).nth(selected) {
                    let status = match event.status {
                        EventStatus::Cancelled => EventStatus::Upcoming,
                        _ => EventStatus::Cancelled,
                    };
                    let update = EventUpdate {
                        status: Some(status),
                        ..Default::default()
                    };
                    let id = event.id.clone();
                    self.model.with_social(|s| s.events.update_event(&id, update)).await;
                }
            }
            DashboardTab::Analytics => {}
        }
    }

    pub async fn studio_delete(&self, selected: usize) {
        let snapshot = self.model.snapshot().await;
        let creator_id = snapshot.studio_creator_id();
        let social = &snapshot.social;

        match snapshot.dashboard.active_tab {
            DashboardTab::Uploads => {
                if let Some(upload) = snapshot.dashboard.uploads.get(selected) {
                    let id = upload.id.clone();
                    self.model.with_dashboard(|d| d.delete_upload(&id)).await;
                }
            }
            DashboardTab::Merchandise => {
                if let Some(item) = social.merchandise.by_creator(&creator_id).nth(selected) {
                    let id = item.id.clone();
                    self.model.with_social(|s| s.merchandise.delete(&id)).await;
                }
            }
            DashboardTab::Notes => {
                if let Some(note) = social.notes.by_creator(&creator_id).nth(selected) {
                    let id = note.id.clone();
                    self.model.with_social(|s| s.notes.delete(&id)).await;
                }
            }
            DashboardTab::Events => {
                let events = social.events.events_by_creator(&creator_id).count();
                if let Some(event) = social.events.events_by_creator(&creator_id).nth(selected) {
                    let id = event.id.clone();
                    self.model.with_social(|s| s.events.delete_event(&id)).await;
                } else if let Some(announcement) = social
                    .events
                    .announcements_by_creator(&creator_id)
                    .nth(selected - events)
                {
                    let id = announcement.id.clone();
                    self.model.with_social(|s| s.events.delete_announcement(&id)).await;
                }
            }
            _ => return,
        }

        let rows = studio_row_count(&self.model.snapshot().await);
        self.model
            .with_ui(|ui| ui.studio_selected = ui.studio_selected.min(rows.saturating_sub(1)))
            .await;
    }

    async fn request_payout(&self, method: PayoutMethod) {
        self.spawn(move |c| async move {
            let result = c.model.request_payout(method).await;
            if let Some(payout) = c.report("request_payout", result).await {
                c.model
                    .set_status(format!("Payout of ${:.2} requested via {}", payout.amount, method.label()))
                    .await;
            }
        });
    }

    async fn go_live(&self) {
        let title = match self.model.snapshot().await.creator {
            Some(creator) => format!("{} Live", creator.artist_name),
            None => "Live session".to_string(),
        };
        let result = self.model.start_stream(&title).await;
        if let Some(id) = self.report("start_stream", result).await {
            tracing::info!(stream_id = %id, "Went live");
            self.model.player_action(PlayerAction::Pause).await;
            self.model.set_dashboard_tab(DashboardTab::Live).await;
            self.model.set_status("You are live").await;
        }
    }

    /// Schedule a session for this time tomorrow
    async fn schedule_stream(&self) {
        let at = (Utc::now() + ChronoDuration::days(1)).to_rfc3339_opts(SecondsFormat::Millis, true);
        let result = self.model.schedule_stream("Listening party", at).await;
        if self.report("schedule_stream", result).await.is_some() {
            self.model.set_status("Stream scheduled for tomorrow").await;
        }
    }

    async fn start_demo_upload(&self) {
        let count = self.model.with_dashboard(|d| d.uploads.len()).await;
        let title = format!("Demo Track {}", count + 1);
        self.model.set_status(format!("Uploading \"{}\"", title)).await;
        self.spawn(move |c| async move {
            let upload = c.model.simulate_upload(&title, UploadKind::Song).await;
            c.model.set_status(format!("\"{}\" is processing", upload.title)).await;
        });
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use tempfile::TempDir;

    use super::*;
    use crate::api::{Latency, MockApi};
    use crate::model::{AppModel, SessionStorage, UploadStatus};

    fn controller(dir: &TempDir) -> AppController {
        let model = AppModel::with_parts(
            MockApi::new(Latency::none()),
            SessionStorage::new(dir.path()),
            Duration::from_secs(1),
        );
        AppController::new(Arc::new(model))
    }

    #[tokio::test]
    async fn switching_tabs_resets_the_cursor() {
        let dir = TempDir::new().unwrap();
        let controller = controller(&dir);
        controller.model.with_ui(|ui| ui.studio_selected = 2).await;
        controller.shift_dashboard_tab(DashboardTab::prev).await;

        let snapshot = controller.model.snapshot().await;
        assert_eq!(snapshot.dashboard.active_tab, DashboardTab::Events);
        assert_eq!(snapshot.ui.studio_selected, 0);
    }

    #[tokio::test]
    async fn enter_publishes_the_selected_upload() {
        let dir = TempDir::new().unwrap();
        let controller = controller(&dir);
        controller.model.set_dashboard_tab(DashboardTab::Uploads).await;
        controller.studio_primary_action(0).await;
        let snapshot = controller.model.snapshot().await;
        assert_eq!(snapshot.dashboard.uploads[0].status, UploadStatus::Published);
    }

    #[tokio::test]
    async fn notifications_mark_read_one_by_one() {
        let dir = TempDir::new().unwrap();
        let controller = controller(&dir);
        controller.model.set_dashboard_tab(DashboardTab::Notifications).await;
        let before = controller.model.snapshot().await.dashboard.unread_notifications();
        let index = controller
            .model
            .snapshot()
            .await
            .dashboard
            .notifications()
            .iter()
            .position(|n| !n.read)
            .unwrap();
        controller.studio_primary_action(index).await;
        let after = controller.model.snapshot().await.dashboard.unread_notifications();
        assert_eq!(after, before - 1);
    }

    #[tokio::test]
    async fn deleting_merch_keeps_cursor_in_range() {
        let dir = TempDir::new().unwrap();
        let controller = controller(&dir);
        controller.model.set_dashboard_tab(DashboardTab::Merchandise).await;
        let rows = studio_row_count(&controller.model.snapshot().await);
        assert!(rows > 0);

        controller.model.with_ui(|ui| ui.studio_selected = rows - 1).await;
        controller.studio_delete(rows - 1).await;
        let snapshot = controller.model.snapshot().await;
        assert_eq!(studio_row_count(&snapshot), rows - 1);
        assert_eq!(snapshot.ui.studio_selected, (rows - 1).saturating_sub(1));
    }

    #[tokio::test]
    async fn events_toggle_cancelled() {
        let dir = TempDir::new().unwrap();
        let controller = controller(&dir);
        controller.model.set_dashboard_tab(DashboardTab::Events).await;
        controller.studio_primary_action(0).await;
        let snapshot = controller.model.snapshot().await;
        let creator_id = snapshot.studio_creator_id();
        let first = snapshot.social.events.events_by_creator(&creator_id).next().unwrap();
        assert_eq!(first.status, EventStatus::Cancelled);
    }

    #[tokio::test]
    async fn events_tab_lists_announcements_after_events() {
        let dir = TempDir::new().unwrap();
        let controller = controller(&dir);
        controller.model.creator_login("alex@niatunes.com", "password123").await.unwrap();
        controller.model.set_dashboard_tab(DashboardTab::Events).await;
        let rows = studio_row_count(&controller.model.snapshot().await);

        controller.model.announce("Album out Friday").await.unwrap();
        assert_eq!(studio_row_count(&controller.model.snapshot().await), rows + 1);

        // Enter on an announcement changes nothing
        let before = controller.model.snapshot().await.social.events.clone();
        controller.studio_primary_action(rows).await;
        let snapshot = controller.model.snapshot().await;
        assert_eq!(snapshot.social.events.events(), before.events());

        let creator_id = snapshot.studio_creator_id();
        let first_announcement = snapshot.social.events.events_by_creator(&creator_id).count();
        controller.studio_delete(first_announcement).await;
        let snapshot = controller.model.snapshot().await;
        assert!(snapshot.social.events.announcements().iter().all(|a| a.content != "Album out Friday"));
        assert_eq!(studio_row_count(&snapshot), rows);
    }

    #[tokio::test]
    async fn new_key_depends_on_the_tab() {
        let dir = TempDir::new().unwrap();
        let controller = controller(&dir);
        let key = KeyEvent::from(KeyCode::Char('n'));
        let ui = controller.model.get_ui_state().await;

        controller.model.set_dashboard_tab(DashboardTab::Subscribers).await;
        assert!(controller.handle_studio_key(key, &ui).await);
        let target = controller.model.get_ui_state().await.composer.map(|c| c.target);
        assert_eq!(target, Some(ComposeTarget::Tier));

        controller.model.with_ui(|ui| ui.composer = None).await;
        controller.model.set_dashboard_tab(DashboardTab::Analytics).await;
        assert!(!controller.handle_studio_key(key, &ui).await);
        assert!(controller.model.get_ui_state().await.composer.is_none());
    }

    #[tokio::test]
    async fn notes_pin_and_delete() {
        let dir = TempDir::new().unwrap();
        let controller = controller(&dir);
        controller.model.set_dashboard_tab(DashboardTab::Notes).await;
        assert_eq!(studio_row_count(&controller.model.snapshot().await), 1);

        controller.studio_primary_action(0).await;
        let snapshot = controller.model.snapshot().await;
        let creator_id = snapshot.studio_creator_id();
        let note = snapshot.social.notes.by_creator(&creator_id).next().unwrap();
        assert!(!note.is_pinned);

        controller.studio_delete(0).await;
        assert_eq!(studio_row_count(&controller.model.snapshot().await), 0);
    }

    #[tokio::test]
    async fn going_live_switches_to_the_live_tab() {
        let dir = TempDir::new().unwrap();
        let controller = controller(&dir);
        controller.model.creator_login("alex@niatunes.com", "password123").await.unwrap();
        let song = crate::data::catalog::Catalog::seed().songs[0].clone();
        controller.model.player_action(PlayerAction::Play(song)).await;
        controller.go_live().await;

        let snapshot = controller.model.snapshot().await;
        assert_eq!(snapshot.dashboard.active_tab, DashboardTab::Live);
        assert!(!snapshot.player.is_playing());
        let stream = snapshot.social.live.active_stream().unwrap();
        assert_eq!(stream.title, "Alex K Live");

        controller.studio_primary_action(0).await;
        let snapshot = controller.model.snapshot().await;
        assert_eq!(snapshot.social.live.active_stream().unwrap().tips.len(), 1);
        controller.model.end_active_stream().await;
    }

    #[tokio::test]
    async fn collaborations_start_from_the_playing_song() {
        let dir = TempDir::new().unwrap();
        let controller = controller(&dir);
        controller.model.set_dashboard_tab(DashboardTab::Overview).await;
        let key = KeyEvent::from(KeyCode::Char('j'));
        let ui = controller.model.get_ui_state().await;

        assert!(controller.handle_studio_key(key, &ui).await);
        assert!(controller.model.get_ui_state().await.composer.is_none());

        let song = crate::data::catalog::Catalog::seed().songs[0].clone();
        controller.model.player_action(PlayerAction::Play(song.clone())).await;
        assert!(controller.handle_studio_key(key, &ui).await);
        let target = controller.model.get_ui_state().await.composer.map(|c| c.target);
        let expected = ComposeTarget::Collaboration { song_id: song.id.clone() };
        assert_eq!(target, Some(expected.clone()));

        controller.submit_composer(expected.clone(), "Late night remix".into()).await;
        assert!(controller.model.snapshot().await.social.collaborations.posts().iter().all(|p| p.title != "Late night remix"));

        controller.model.creator_login("alex@niatunes.com", "password123").await.unwrap();
        controller.submit_composer(expected, "Late night remix".into()).await;
        let snapshot = controller.model.snapshot().await;
        let post = snapshot
            .social
            .collaborations
            .by_creator("creator-1")
            .find(|p| p.title == "Late night remix")
            .unwrap();
        assert!(post.collaborators.iter().any(|c| c.creator_id == song.artist_id && !c.has_approved));
        assert_eq!(snapshot.ui.status_message.as_deref(), Some("Started \"Late night remix\""));
    }
}
