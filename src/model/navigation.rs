//! Navigation and transient UI state

use std::time::{Duration, Instant};

use super::creator::PayoutMethod;
use super::forms::AuthForm;
use super::types::Tab;

/// How long an error stays on screen
pub const ERROR_DISPLAY_TIME: Duration = Duration::from_secs(5);

/// Listener navigation: bottom tabs, player sheet, search box
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NavigationState {
    pub active_tab: Tab,
    pub is_player_expanded: bool,
    pub search_query: String,
}

impl NavigationState {
    pub fn set_active_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
    }

    pub fn set_player_expanded(&mut self, expanded: bool) {
        self.is_player_expanded = expanded;
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }
}

/// Which half of the app owns the screen
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AppMode {
    #[default]
    Listener,
    Studio,
}

impl AppMode {
    pub fn toggle(self) -> Self {
        match self {
            AppMode::Listener => AppMode::Studio,
            AppMode::Studio => AppMode::Listener,
        }
    }
}

/// Ratings a review can carry
pub const RATING_RANGE: std::ops::RangeInclusive<u8> = 1..=5;

/// What a line typed into the composer turns into
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ComposeTarget {
    Message { conversation_id: String },
    Comment { song_id: String },
    Reply { song_id: String, parent_id: String },
    Review { song_id: String, rating: u8 },
    DisplayName,
    Bio,
    Event,
    Announcement,
    Tier,
    /// Artist note pinned to the playing song, if any
    Note { song_id: Option<String> },
    Collaboration { song_id: String },
}

impl ComposeTarget {
    pub fn prompt(&self) -> String {
        match self {
            ComposeTarget::Message { .. } => "Message".to_string(),
            ComposeTarget::Comment { .. } => "Comment".to_string(),
            ComposeTarget::Reply { .. } => "Reply".to_string(),
            ComposeTarget::Review { rating, .. } => format!("Review {} (↑/↓ stars)", "★".repeat(*rating as usize)),
            ComposeTarget::DisplayName => "Display name".to_string(),
            ComposeTarget::Bio => "Artist bio".to_string(),
            ComposeTarget::Event => "Event title".to_string(),
            ComposeTarget::Announcement => "Announcement".to_string(),
            ComposeTarget::Tier => "Tier name".to_string(),
            ComposeTarget::Note { .. } => "Artist note".to_string(),
            ComposeTarget::Collaboration { .. } => "Collaboration title".to_string(),
        }
    }
}

/// One-line text box shared by messages, comments and studio forms
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Composer {
    pub target: ComposeTarget,
    pub text: String,
}

impl Composer {
    pub fn new(target: ComposeTarget) -> Self {
        Self { target, text: String::new() }
    }

    /// Only reviews carry a rating
    pub fn adjust_rating(&mut self, delta: i8) {
        if let ComposeTarget::Review { rating, .. } = &mut self.target {
            let next = (*rating as i16 + delta as i16).clamp(*RATING_RANGE.start() as i16, *RATING_RANGE.end() as i16);
            *rating = next as u8;
        }
    }

    /// Trimmed text, `None` when blank
    pub fn submission(&self) -> Option<String> {
        let text = self.text.trim();
        (!text.is_empty()).then(|| text.to_string())
    }
}

#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub mode: AppMode,
    pub navigation: NavigationState,
    /// Keystrokes go to the search box
    pub search_editing: bool,
    pub error_message: Option<String>,
    pub error_timestamp: Option<Instant>,
    /// One-line confirmation shown in the status bar
    pub status_message: Option<String>,
    pub show_help_popup: bool,
    pub show_queue: bool,
    /// Selected row in the queue overlay
    pub queue_selected: usize,
    pub show_messages: bool,
    /// Selected row in the messages overlay: conversations, then contacts
    pub messages_selected: usize,
    /// Selected review or comment in the now-playing sheet
    pub sheet_selected: usize,
    pub composer: Option<Composer>,
    pub auth_form: Option<AuthForm>,
    /// Selected row inside the active studio tab
    pub studio_selected: usize,
    pub payout_method: PayoutMethod,
    pub should_quit: bool,
}

impl UiState {
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error_message = Some(message.into());
        self.error_timestamp = Some(Instant::now());
    }

    pub fn clear_error(&mut self) {
        self.error_message = None;
        self.error_timestamp = None;
    }

    /// Drop an error that has been visible long enough
    pub fn clear_stale_error(&mut self, now: Instant) {
        if let Some(timestamp) = self.error_timestamp {
            if now.duration_since(timestamp) > ERROR_DISPLAY_TIME {
                self.clear_error();
            }
        }
    }

    /// Any popup that captures input
    pub fn has_overlay(&self) -> bool {
        self.show_help_popup
            || self.show_queue
            || self.show_messages
            || self.auth_form.is_some()
            || self.composer.is_some()
    }
}
