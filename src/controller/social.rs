//! Messages overlay, the now-playing sheet and the one-line composer

use crossterm::event::{KeyCode, KeyEvent};

use crate::model::social::FeedbackRow;
use crate::model::{ComposeTarget, Composer, CreatorProfileUpdate, PageKind, UiState, RATING_RANGE};
use super::AppController;

/// A row of the messages overlay: conversations first, then contacts
#[derive(Clone, Debug, PartialEq, Eq)]
enum MessagesRow {
    Conversation(String),
    Contact(String),
}

impl AppController {
    pub(super) async fn open_composer(&self, target: ComposeTarget) {
        self.model.with_ui(|ui| ui.composer = Some(Composer::new(target))).await;
    }

    pub(super) async fn handle_composer_key(&self, key: KeyEvent, composer: Composer) {
        match key.code {
            KeyCode::Esc => self.model.with_ui(|ui| ui.composer = None).await,
            KeyCode::Enter => {
                let Some(text) = composer.submission() else {
                    return;
                };
                self.model.with_ui(|ui| ui.composer = None).await;
                let target = composer.target;
                self.spawn(move |c| async move { c.submit_composer(target, text).await });
            }
            KeyCode::Up => self.edit_composer(|composer| composer.adjust_rating(1)).await,
            KeyCode::Down => self.edit_composer(|composer| composer.adjust_rating(-1)).await,
            KeyCode::Backspace => {
                self.edit_composer(|composer| {
                    composer.text.pop();
                })
                .await;
            }
            KeyCode::Char(c) => self.edit_composer(|composer| composer.text.push(c)).await,
            _ => {}
        }
    }

    async fn edit_composer(&self, f: impl FnOnce(&mut Composer)) {
        self.model
            .with_ui(|ui| {
                if let Some(composer) = ui.composer.as_mut() {
                    f(composer);
                }
            })
            .await;
    }

    /// Turn a finished line into whatever the composer was opened for
    pub(crate) async fn submit_composer(&self, target: ComposeTarget, text: String) {
        let status = match target {
            ComposeTarget::Message { conversation_id } => {
                let result = self.model.send_message(&conversation_id, &text).await;
                self.report("send_message", result).await.map(|_| "Message sent".to_string())
            }
            ComposeTarget::Comment { song_id } => {
                let result = self.model.post_comment(&song_id, &text).await;
                self.report("post_comment", result).await.map(|_| "Comment posted".to_string())
            }
            ComposeTarget::Reply { song_id, parent_id } => {
                let result = self.model.reply_to_comment(&song_id, &parent_id, &text).await;
                self.report("reply_to_comment", result).await.map(|_| "Reply posted".to_string())
            }
            ComposeTarget::Review { song_id, rating } => {
                let result = self.model.review_song(&song_id, rating, &text).await;
                self.report("review_song", result)
                    .await
                    .map(|review| format!("Rated {} stars", review.rating))
            }
            ComposeTarget::DisplayName => {
                let result = self.model.rename_listener(&text).await;
                let user = self.report("rename_listener", result).await;
                if user.is_some() && self.model.get_content_state().await.current_kind() == Some(&PageKind::Profile) {
                    self.model.show_profile().await;
                }
                user.map(|user| format!("You are now {}", user.name))
            }
            ComposeTarget::Bio => {
                let update = CreatorProfileUpdate {
                    bio: Some(text),
                    ..Default::default()
                };
                let result = self.model.update_creator_profile(update).await;
                self.report("update_creator_profile", result).await.map(|_| "Bio updated".to_string())
            }
            ComposeTarget::Event => {
                let result = self.model.add_event(&text).await;
                self.report("add_event", result)
                    .await
                    .map(|event| format!("Added \"{}\"", event.title))
            }
            ComposeTarget::Announcement => {
                let result = self.model.announce(&text).await;
                self.report("announce", result).await.map(|_| "Announcement posted".to_string())
            }
            ComposeTarget::Tier => {
                let result = self.model.add_subscription_tier(&text).await;
                self.report("add_subscription_tier", result)
                    .await
                    .map(|tier| format!("Added the {} tier", tier.name))
            }
            ComposeTarget::Note { song_id } => {
                let result = self.model.add_note(song_id, &text).await;
                self.report("add_note", result).await.map(|_| "Note saved".to_string())
            }
            ComposeTarget::Collaboration { song_id } => {
                let result = self.model.start_collaboration(&song_id, &text).await;
                self.report("start_collaboration", result)
                    .await
                    .map(|post| format!("Started \"{}\"", post.title))
            }
        };
        if let Some(status) = status {
            self.model.set_status(status).await;
        }
    }

    // ========================================================================
    // Now-playing sheet
    // ========================================================================

    /// Keys on the expanded player; `false` falls through to the listener map
    pub(super) async fn handle_sheet_key(&self, key: KeyEvent, ui_state: &UiState) -> bool {
        let snapshot = self.model.snapshot().await;
        let Some(song_id) = snapshot.player.current().map(|s| s.id.clone()) else {
            return false;
        };
        let rows = snapshot.social.feedback_rows(&song_id);
        let selected = rows.get(ui_state.sheet_selected).cloned();

        match key.code {
            KeyCode::Up => {
                self.model
                    .with_ui(|ui| ui.sheet_selected = ui.sheet_selected.saturating_sub(1))
                    .await;
            }
            KeyCode::Down => {
                self.model
                    .with_ui(|ui| {
                        if ui.sheet_selected + 1 < rows.len() {
                            ui.sheet_selected += 1;
                        }
                    })
                    .await;
            }
            KeyCode::Char('l') | KeyCode::Char('L') => {
                let Some(row) = selected else {
                    return true;
                };
                self.model
                    .with_social(|s| match &row {
                        FeedbackRow::Review(id) => s.comments.like_review(id),
                        FeedbackRow::Comment(id) => s.comments.like_comment(id),
                    })
                    .await;
            }
            KeyCode::Char('c') | KeyCode::Char('C') => {
                self.open_composer(ComposeTarget::Comment { song_id }).await;
            }
            KeyCode::Char('y') | KeyCode::Char('Y') => match selected {
                Some(FeedbackRow::Comment(parent_id)) => {
                    self.open_composer(ComposeTarget::Reply { song_id, parent_id }).await;
                }
                _ => self.model.set_status("Select a comment to reply to").await,
            },
            KeyCode::Char('v') | KeyCode::Char('V') => {
                let rating = *RATING_RANGE.end();
                self.open_composer(ComposeTarget::Review { song_id, rating }).await;
            }
            KeyCode::Delete | KeyCode::Char('x') | KeyCode::Char('X') => {
                let Some(FeedbackRow::Comment(id)) = selected else {
                    return true;
                };
                let result = self.model.delete_comment(&id).await;
                if self.report("delete_comment", result).await.is_some() {
                    let remaining = rows.len() - 1;
                    self.model
                        .with_ui(|ui| ui.sheet_selected = ui.sheet_selected.min(remaining.saturating_sub(1)))
                        .await;
                    self.model.set_status("Comment deleted").await;
                }
            }
            _ => return false,
        }
        true
    }

    // ========================================================================
    // Messages overlay
    // ========================================================================

    async fn messages_rows(&self) -> Vec<MessagesRow> {
        self.model
            .with_social(|s| {
                let conversations = s
                    .messaging
                    .conversations()
                    .iter()
                    .map(|c| MessagesRow::Conversation(c.id.clone()));
                let contacts = s.messaging.contacts().iter().map(|c| MessagesRow::Contact(c.id.clone()));
                conversations.chain(contacts).collect()
            })
            .await
    }

    pub(super) async fn handle_messages_key(&self, key: KeyEvent) {
        let rows = self.messages_rows().await;

        match key.code {
            KeyCode::Esc | KeyCode::Char('i') | KeyCode::Char('I') => {
                self.model.with_ui(|ui| ui.show_messages = false).await;
            }
            KeyCode::Up => {
                self.model
                    .with_ui(|ui| ui.messages_selected = ui.messages_selected.saturating_sub(1))
                    .await;
            }
            KeyCode::Down => {
                self.model
                    .with_ui(|ui| {
                        if ui.messages_selected + 1 < rows.len() {
                            ui.messages_selected += 1;
                        }
                    })
                    .await;
            }
            KeyCode::Enter => {
                let selected = self.model.get_ui_state().await.messages_selected;
                match rows.get(selected).cloned() {
                    Some(MessagesRow::Conversation(id)) => {
                        self.model
                            .with_social(|s| {
                                s.messaging.mark_as_read(&id);
                                s.messaging.set_active_conversation(Some(id));
                            })
                            .await;
                    }
                    Some(MessagesRow::Contact(id)) => {
                        let result = self.model.start_conversation(&id).await;
                        if self.report("start_conversation", result).await.is_some() {
                            self.model.set_status("Conversation opened").await;
                        }
                    }
                    None => {}
                }
            }
            // Write into the open conversation
            KeyCode::Char('w') | KeyCode::Char('W') => {
                let active = self
                    .model
                    .with_social(|s| s.messaging.active_conversation().map(|c| c.id.clone()))
                    .await;
                match active {
                    Some(conversation_id) => self.open_composer(ComposeTarget::Message { conversation_id }).await,
                    None => self.model.set_status("Open a conversation first").await,
                }
            }
            // Play the song shared in the open conversation
            KeyCode::Char('p') | KeyCode::Char('P') => {
                let shared = self
                    .model
                    .with_social(|s| {
                        s.messaging
                            .active_conversation()
                            .and_then(|c| c.last_message.song_info.as_ref())
                            .map(|song| song.song_id.clone())
                    })
                    .await;
                let Some(song_id) = shared else {
                    self.model.set_status("No song shared here").await;
                    return;
                };
                self.spawn(move |c| async move {
                    let result = c.model.play_shared_song(&song_id).await;
                    if let Some(song) = c.report("play_shared_song", result).await {
                        c.model.set_status(format!("Playing {}", song.title)).await;
                    }
                });
            }
            // Contact sync
            KeyCode::Char('y') | KeyCode::Char('Y') => {
                self.spawn(|c| async move {
                    let count = c.model.sync_contacts().await;
                    c.model.set_status(format!("Found {} new contacts", count)).await;
                });
            }
            _ => {}
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
    use crate::data::catalog::Catalog;
    use crate::model::{AppModel, ContentItem, PlayerAction, SessionStorage};

    fn controller(dir: &TempDir) -> AppController {
        let model = AppModel::with_parts(
            MockApi::new(Latency::none()),
            SessionStorage::new(dir.path()),
            Duration::from_secs(1),
        );
        AppController::new(Arc::new(model))
    }

    async fn press(controller: &AppController, code: KeyCode) {
        controller.handle_key_event(KeyEvent::from(code)).await.unwrap();
    }

    async fn type_keys(controller: &AppController, text: &str) {
        for c in text.chars() {
            press(controller, KeyCode::Char(c)).await;
        }
    }

    async fn expanded_on_first_song(controller: &AppController) {
        let song = Catalog::seed().songs[0].clone();
        controller.model.player_action(PlayerAction::Play(song)).await;
        controller.model.with_ui(|ui| ui.navigation.set_player_expanded(true)).await;
    }

    #[tokio::test]
    async fn opening_a_conversation_marks_it_read() {
        let dir = TempDir::new().unwrap();
        let controller = controller(&dir);
        controller.model.with_ui(|ui| ui.show_messages = true).await;
        controller.handle_messages_key(KeyEvent::from(KeyCode::Enter)).await;

        let snapshot = controller.model.snapshot().await;
        let messaging = &snapshot.social.messaging;
        let active = messaging.active_conversation().unwrap();
        assert_eq!(active.id, messaging.conversations()[0].id);
        assert_eq!(active.unread_count, 0);
    }

    #[tokio::test]
    async fn cursor_reaches_contacts_after_conversations() {
        let dir = TempDir::new().unwrap();
        let controller = controller(&dir);
        controller.model.with_ui(|ui| ui.show_messages = true).await;
        for _ in 0..10 {
            press(&controller, KeyCode::Down).await;
        }
        // Two conversations and three contacts
        assert_eq!(controller.model.get_ui_state().await.messages_selected, 4);

        // Mary is not on NiaTunes
        press(&controller, KeyCode::Enter).await;
        let ui = controller.model.get_ui_state().await;
        assert_eq!(ui.error_message.as_deref(), Some("Mary Atieno is not on NiaTunes yet"));
    }

    #[tokio::test]
    async fn write_key_composes_into_the_open_conversation() {
        let dir = TempDir::new().unwrap();
        let controller = controller(&dir);
        controller.model.with_ui(|ui| ui.show_messages = true).await;
        press(&controller, KeyCode::Char('w')).await;
        assert!(controller.model.get_ui_state().await.composer.is_none());

        press(&controller, KeyCode::Enter).await;
        press(&controller, KeyCode::Char('w')).await;
        type_keys(&controller, "Nakuja!").await;
        let composer = controller.model.get_ui_state().await.composer.unwrap();
        assert_eq!(composer.text, "Nakuja!");
        assert!(controller.model.get_ui_state().await.show_messages);

        controller.submit_composer(composer.target, composer.text).await;
        let snapshot = controller.model.snapshot().await;
        let active = snapshot.social.messaging.active_conversation().unwrap();
        assert_eq!(active.last_message.content, "Nakuja!");
        assert_eq!(snapshot.ui.status_message.as_deref(), Some("Message sent"));
    }

    #[tokio::test]
    async fn escape_discards_the_draft() {
        let dir = TempDir::new().unwrap();
        let controller = controller(&dir);
        controller.open_composer(ComposeTarget::Event).await;
        type_keys(&controller, "q").await;
        press(&controller, KeyCode::Esc).await;
        let ui = controller.model.get_ui_state().await;
        assert!(ui.composer.is_none());
        // The q went into the draft, not the quit key
        assert!(!controller.model.should_quit().await);
    }

    #[tokio::test]
    async fn sheet_likes_the_selected_row() {
        let dir = TempDir::new().unwrap();
        let controller = controller(&dir);
        expanded_on_first_song(&controller).await;

        let snapshot = controller.model.snapshot().await;
        let rows = snapshot.social.feedback_rows("song-1");
        let FeedbackRow::Review(first) = &rows[0] else {
            panic!("reviews come first");
        };
        let before = snapshot.social.comments.reviews().iter().find(|r| &r.id == first).unwrap().likes;

        press(&controller, KeyCode::Char('l')).await;
        let after = controller
            .model
            .snapshot()
            .await
            .social
            .comments
            .reviews()
            .iter()
            .find(|r| &r.id == first)
            .unwrap()
            .likes;
        assert_eq!(after, before + 1);
    }

    #[tokio::test]
    async fn reply_needs_a_selected_comment() {
        let dir = TempDir::new().unwrap();
        let controller = controller(&dir);
        expanded_on_first_song(&controller).await;

        press(&controller, KeyCode::Char('y')).await;
        let ui = controller.model.get_ui_state().await;
        assert!(ui.composer.is_none());
        assert_eq!(ui.status_message.as_deref(), Some("Select a comment to reply to"));

        let reviews = controller.model.snapshot().await.social.comments.reviews_for_song("song-1").count();
        for _ in 0..reviews {
            press(&controller, KeyCode::Down).await;
        }
        press(&controller, KeyCode::Char('y')).await;
        let target = controller.model.get_ui_state().await.composer.map(|c| c.target);
        assert!(matches!(target, Some(ComposeTarget::Reply { .. })));
    }

    #[tokio::test]
    async fn review_stars_follow_the_arrows() {
        let dir = TempDir::new().unwrap();
        let controller = controller(&dir);
        controller.model.login("a@b.com", "123456").await.unwrap();
        expanded_on_first_song(&controller).await;

        press(&controller, KeyCode::Char('v')).await;
        press(&controller, KeyCode::Down).await;
        press(&controller, KeyCode::Down).await;
        type_keys(&controller, "Good").await;
        let composer = controller.model.get_ui_state().await.composer.unwrap();
        assert_eq!(composer.target, ComposeTarget::Review { song_id: "song-1".into(), rating: 3 });

        controller.submit_composer(composer.target, composer.text).await;
        let snapshot = controller.model.snapshot().await;
        assert_eq!(snapshot.social.comments.reviews()[0].rating, 3);
        assert_eq!(snapshot.ui.status_message.as_deref(), Some("Rated 3 stars"));
    }

    #[tokio::test]
    async fn renaming_refreshes_the_profile_page() {
        let dir = TempDir::new().unwrap();
        let controller = controller(&dir);
        controller.model.login("a@b.com", "123456").await.unwrap();
        controller.model.show_profile().await;

        controller.submit_composer(ComposeTarget::DisplayName, "Wanjiru".into()).await;
        let page = controller.model.get_content_state().await.page.unwrap();
        assert!(matches!(&page.items[0], ContentItem::Info(line) if line.starts_with("Wanjiru <")));
    }
}
