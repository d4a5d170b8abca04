//! Key event handling

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::model::{AppMode, PlayerAction, UiState};
use super::AppController;

/// Seconds skipped by `[` and `]`
pub const SEEK_STEP: u32 = 10;
/// Volume change per `+` / `-`
pub const VOLUME_STEP: f32 = 0.1;

impl AppController {
    pub async fn handle_key_event(&self, key: KeyEvent) -> Result<()> {
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.model.set_should_quit(true).await;
            return Ok(());
        }

        let ui_state = self.model.get_ui_state().await;

        // Error message blocks all other interactions
        if ui_state.error_message.is_some() {
            if matches!(key.code, KeyCode::Esc | KeyCode::Enter) {
                self.model.clear_error().await;
            }
            return Ok(());
        }

        if ui_state.show_help_popup {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('?')) {
                self.model.with_ui(|ui| ui.show_help_popup = false).await;
            }
            return Ok(());
        }

        if let Some(composer) = ui_state.composer.clone() {
            self.handle_composer_key(key, composer).await;
            return Ok(());
        }

        if ui_state.auth_form.is_some() {
            self.handle_form_key(key).await;
            return Ok(());
        }

        if ui_state.show_queue {
            self.handle_queue_key(key).await;
            return Ok(());
        }

        if ui_state.show_messages {
            self.handle_messages_key(key).await;
            return Ok(());
        }

        if self.model.get_player_state().await.is_scrubbing() {
            self.handle_scrub_key(key).await;
            return Ok(());
        }

        if ui_state.search_editing {
            self.handle_search_key(key, &ui_state).await;
            return Ok(());
        }

        let handled = match ui_state.mode {
            AppMode::Listener => self.handle_listener_key(key, &ui_state).await,
            AppMode::Studio => self.handle_studio_key(key, &ui_state).await,
        };
        if handled {
            return Ok(());
        }

        self.handle_global_key(key).await;
        Ok(())
    }

    async fn handle_search_key(&self, key: KeyEvent, ui_state: &UiState) {
        match key.code {
            KeyCode::Enter => {
                let query = ui_state.navigation.search_query.clone();
                self.model.with_ui(|ui| ui.search_editing = false).await;
                self.spawn(move |c| async move { c.perform_search(&query).await });
            }
            KeyCode::Esc => {
                self.model
                    .with_ui(|ui| {
                        ui.search_editing = false;
                        ui.navigation.set_search_query("");
                    })
                    .await;
            }
            KeyCode::Backspace => {
                self.model.with_ui(|ui| { ui.navigation.search_query.pop(); }).await;
            }
            KeyCode::Char(c) => {
                self.model.with_ui(|ui| ui.navigation.search_query.push(c)).await;
            }
            _ => {}
        }
    }

    async fn handle_queue_key(&self, key: KeyEvent) {
        let queue_len = self.model.get_player_state().await.queue().len();
        match key.code {
            KeyCode::Esc | KeyCode::Char('u') | KeyCode::Char('U') => {
                self.model.with_ui(|ui| ui.show_queue = false).await;
            }
            KeyCode::Up => {
                self.model
                    .with_ui(|ui| ui.queue_selected = ui.queue_selected.saturating_sub(1))
                    .await;
            }
            KeyCode::Down => {
                self.model
                    .with_ui(|ui| {
                        if ui.queue_selected + 1 < queue_len {
                            ui.queue_selected += 1;
                        }
                    })
                    .await;
            }
            KeyCode::Delete | KeyCode::Char('x') | KeyCode::Char('X') => {
                self.remove_selected_from_queue().await;
            }
            KeyCode::Char('c') | KeyCode::Char('C') => {
                self.model.player_action(PlayerAction::ClearQueue).await;
                self.model.with_ui(|ui| ui.queue_selected = 0).await;
            }
            _ => {}
        }
    }

    async fn handle_global_key(&self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.model.set_should_quit(true).await;
            }
            // Play/Pause toggle
            KeyCode::Char(' ') => {
                self.model.player_action(PlayerAction::TogglePlay).await;
            }
            KeyCode::Char('n') | KeyCode::Char('N') => {
                self.model.player_action(PlayerAction::Next).await;
            }
            KeyCode::Char('p') | KeyCode::Char('P') => {
                self.model.player_action(PlayerAction::Previous).await;
            }
            KeyCode::Char('s') | KeyCode::Char('S') => {
                self.model.player_action(PlayerAction::ToggleShuffle).await;
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                self.model.player_action(PlayerAction::ToggleRepeat).await;
            }
            KeyCode::Char('+') | KeyCode::Char('=') => {
                self.change_volume(VOLUME_STEP).await;
            }
            KeyCode::Char('-') => {
                self.change_volume(-VOLUME_STEP).await;
            }
            KeyCode::Char('[') => {
                self.seek_relative(-(SEEK_STEP as i64)).await;
            }
            KeyCode::Char(']') => {
                self.seek_relative(SEEK_STEP as i64).await;
            }
            KeyCode::Char('z') | KeyCode::Char('Z') => {
                self.start_scrub().await;
            }
            // Show queue
            KeyCode::Char('u') | KeyCode::Char('U') => {
                self.model
                    .with_ui(|ui| {
                        ui.show_queue = true;
                        ui.queue_selected = 0;
                    })
                    .await;
            }
            // Messages
            KeyCode::Char('i') | KeyCode::Char('I') => {
                self.model
                    .with_ui(|ui| {
                        ui.show_messages = true;
                        ui.messages_selected = 0;
                    })
                    .await;
            }
            // Listener <-> studio
            KeyCode::Char('m') | KeyCode::Char('M') => {
                self.toggle_mode().await;
            }
            KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('?') => {
                self.model.with_ui(|ui| ui.show_help_popup = true).await;
            }
            _ => {}
        }
    }
}
