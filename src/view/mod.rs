//! View module - UI rendering
//!
//! This module handles all UI rendering for the application using ratatui.
//! Every frame is drawn from one [`ModelSnapshot`], so no lock is held
//! while rendering. It is organized into submodules by component type:
//!
//! - `utils`: Shared utility functions (formatting, scrollable lists, popups)
//! - `layout`: Top tab bar and status line
//! - `content`: Listener pages (home, search, library, details)
//! - `studio`: Creator dashboard tabs
//! - `progress`: Progress bar rendering
//! - `overlays`: Modal overlays (error, help, queue, messages, forms, now playing)

mod utils;
mod layout;
mod content;
mod studio;
mod progress;
mod overlays;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::model::{AppMode, ModelSnapshot};

pub struct AppView;

impl AppView {
    pub fn render(frame: &mut Frame, snapshot: &ModelSnapshot) {
        let ui = &snapshot.ui;
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Tabs + search / account
                Constraint::Min(0),    // Page or dashboard
                Constraint::Length(1), // Status line
                Constraint::Length(3), // Progress bar with playback info
            ])
            .split(frame.area());

        layout::render_top_bar(frame, chunks[0], snapshot);

        match ui.mode {
            AppMode::Listener => {
                content::render_main_content(frame, chunks[1], ui, &snapshot.content, snapshot.player.current())
            }
            AppMode::Studio => studio::render_studio(frame, chunks[1], snapshot),
        }

        layout::render_status_line(frame, chunks[2], snapshot);
        progress::render_progress_bar(frame, chunks[3], &snapshot.player);

        // Now playing sheet sits under every other popup
        if ui.navigation.is_player_expanded && ui.mode == AppMode::Listener {
            overlays::render_now_playing(frame, snapshot);
        }

        if ui.show_queue {
            overlays::render_queue(frame, &snapshot.player, ui.queue_selected);
        }

        if ui.show_messages {
            overlays::render_messages(frame, &snapshot.social.messaging, ui.messages_selected);
        }

        if let Some(form) = &ui.auth_form {
            overlays::render_auth_form(frame, form);
        }

        if let Some(composer) = &ui.composer {
            overlays::render_composer(frame, composer);
        }

        // Help popup overlay (if open)
        if ui.show_help_popup {
            overlays::render_help_popup(frame);
        }

        // Error notification overlay (if there's an error)
        if ui.error_message.is_some() {
            overlays::render_error_notification(frame, ui);
        }
    }
}
