//! Social features around songs and creators
//!
//! Each store owns one slice of the social fixtures:
//! - `merchandise`: creator shop items
//! - `events`: shows, launches and announcements
//! - `canvas`: looping song visuals
//! - `messaging`: conversations and contacts
//! - `comments`: song comments and reviews
//! - `notes`: artist notes attached to songs
//! - `collaboration`: joint posts between creators
//! - `live`: live streams, tips and viewer counts

mod canvas;
mod collaboration;
mod comments;
mod events;
mod live;
mod merchandise;
mod messaging;
mod notes;
mod types;

pub use canvas::CanvasStore;
pub use collaboration::{new_collaboration, CollaborationStore};
pub use comments::{new_comment, new_review, CommentStore};
pub use events::{new_announcement, new_event, EventStore};
pub use live::{gift_tip, new_stream, LiveStore, MAX_VIEWER_DROP, MAX_VIEWER_GAIN};
pub use merchandise::MerchandiseStore;
pub use messaging::{direct_conversation, text_message, MessagingStore};
pub use notes::{new_note, NoteStore};
pub use types::*;

use crate::data::social as fixtures;

/// A selectable row of the now-playing sheet
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FeedbackRow {
    Review(String),
    Comment(String),
}

/// All social stores, locked together by `AppModel`
#[derive(Clone, Debug)]
pub struct SocialState {
    pub merchandise: MerchandiseStore,
    pub events: EventStore,
    pub canvas: CanvasStore,
    pub messaging: MessagingStore,
    pub comments: CommentStore,
    pub notes: NoteStore,
    pub collaborations: CollaborationStore,
    pub live: LiveStore,
    pub song_links: Vec<SongSocialLinks>,
}

impl Default for SocialState {
    fn default() -> Self {
        Self::seeded()
    }
}

impl SocialState {
    pub fn seeded() -> Self {
        Self {
            merchandise: MerchandiseStore::new(fixtures::merchandise()),
            events: EventStore::new(fixtures::events(), fixtures::announcements()),
            canvas: CanvasStore::new(fixtures::canvas_videos()),
            messaging: MessagingStore::new(fixtures::conversations(), fixtures::contacts()),
            comments: CommentStore::new(fixtures::comments(), fixtures::reviews()),
            notes: NoteStore::new(fixtures::artist_notes()),
            collaborations: CollaborationStore::new(fixtures::collaboration_posts()),
            live: LiveStore::new(fixtures::live_streams(), fixtures::tip_gifts()),
            song_links: fixtures::song_social_links(),
        }
    }

    pub fn links_for_song(&self, song_id: &str) -> Option<&SongSocialLinks> {
        self.song_links.iter().find(|l| l.song_id == song_id)
    }

    /// Reviews first, then top-level comments, in display order
    pub fn feedback_rows(&self, song_id: &str) -> Vec<FeedbackRow> {
        self.comments
            .reviews_for_song(song_id)
            .map(|r| FeedbackRow::Review(r.id.clone()))
            .chain(self.comments.comments_for_song(song_id).map(|c| FeedbackRow::Comment(c.id.clone())))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_state_has_fixtures() {
        let social = SocialState::seeded();
        assert_eq!(social.merchandise.items().len(), 5);
        assert_eq!(social.live.streams().len(), 2);
        assert!(social.live.active_stream().is_none());
        assert!(social.links_for_song("missing").is_none());
    }

    #[test]
    fn feedback_lists_reviews_before_comments() {
        let social = SocialState::seeded();
        let rows = social.feedback_rows("song-1");
        let first_comment = rows
            .iter()
            .position(|r| matches!(r, FeedbackRow::Comment(_)))
            .unwrap();
        assert!(rows[..first_comment].iter().all(|r| matches!(r, FeedbackRow::Review(_))));
        assert!(rows[first_comment..].iter().all(|r| matches!(r, FeedbackRow::Comment(_))));
        assert!(social.feedback_rows("song-404").is_empty());
    }
}
