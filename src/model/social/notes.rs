//! Artist notes pinned to songs and albums

use crate::data;
use crate::model::Creator;

use super::types::ArtistNote;

/// A note by `creator`; the first line of `content` becomes the title
pub fn new_note(creator: &Creator, song_id: Option<String>, content: &str) -> ArtistNote {
    ArtistNote {
        id: data::generate_id("note"),
        creator_id: creator.id.clone(),
        song_id,
        album_id: None,
        title: content.lines().next().unwrap_or_default().chars().take(40).collect(),
        content: content.to_string(),
        attachments: Vec::new(),
        is_pinned: false,
        likes: 0,
        created_at: data::now_iso(),
    }
}

#[derive(Clone, Debug, Default)]
pub struct NoteStore {
    notes: Vec<ArtistNote>,
}

impl NoteStore {
    pub fn new(notes: Vec<ArtistNote>) -> Self {
        Self { notes }
    }

    pub fn notes(&self) -> &[ArtistNote] {
        &self.notes
    }

    pub fn add(&mut self, note: ArtistNote) {
        self.notes.insert(0, note);
    }

    pub fn delete(&mut self, id: &str) {
        self.notes.retain(|n| n.id != id);
    }

    pub fn toggle_pin(&mut self, id: &str) {
        if let Some(note) = self.notes.iter_mut().find(|n| n.id == id) {
            note.is_pinned = !note.is_pinned;
        }
    }

    pub fn for_song<'a>(&'a self, song_id: &'a str) -> impl Iterator<Item = &'a ArtistNote> {
        self.notes.iter().filter(move |n| n.song_id.as_deref() == Some(song_id))
    }

    pub fn by_creator<'a>(&'a self, creator_id: &'a str) -> impl Iterator<Item = &'a ArtistNote> {
        self.notes.iter().filter(move |n| n.creator_id == creator_id)
    }
}
