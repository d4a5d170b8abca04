//! Looping canvas videos attached to songs

use super::types::{CanvasUpdate, CanvasVideo};

#[derive(Clone, Debug, Default)]
pub struct CanvasStore {
    videos: Vec<CanvasVideo>,
}

impl CanvasStore {
    pub fn new(videos: Vec<CanvasVideo>) -> Self {
        Self { videos }
    }

    pub fn videos(&self) -> &[CanvasVideo] {
        &self.videos
    }

    pub fn add(&mut self, video: CanvasVideo) {
        self.videos.push(video);
    }

    pub fn update(&mut self, id: &str, update: CanvasUpdate) {
        if let Some(video) = self.videos.iter_mut().find(|v| v.id == id) {
            update.apply(video);
        }
    }

    pub fn delete(&mut self, id: &str) {
        self.videos.retain(|v| v.id != id);
    }

    /// A song shows at most one canvas; the first match wins
    pub fn for_song(&self, song_id: &str) -> Option<&CanvasVideo> {
        self.videos.iter().find(|v| v.song_id == song_id)
    }

    pub fn by_creator<'a>(&'a self, creator_id: &'a str) -> impl Iterator<Item = &'a CanvasVideo> {
        self.videos.iter().filter(move |v| v.creator_id == creator_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::social::canvas_videos;
    use crate::model::social::CanvasStatus;

    #[test]
    fn first_canvas_wins_for_a_song() {
        let mut store = CanvasStore::new(canvas_videos());
        let mut duplicate = store.videos()[0].clone();
        duplicate.id = "canvas-dup".into();
        store.add(duplicate);
        assert_eq!(store.for_song("song-1").map(|v| v.id.as_str()), Some("canvas-1"));
        assert!(store.for_song("song-9").is_none());
    }

    #[test]
    fn update_and_delete() {
        let mut store = CanvasStore::new(canvas_videos());
        store.update(
            "canvas-2",
            CanvasUpdate {
                status: Some(CanvasStatus::Rejected),
                duration: Some(8),
                ..Default::default()
            },
        );
        let video = store.for_song("song-2").unwrap();
        assert_eq!(video.status, CanvasStatus::Rejected);
        assert_eq!(video.duration, 8);

        store.delete("canvas-2");
        assert!(store.for_song("song-2").is_none());
        assert_eq!(store.by_creator("creator-1").count(), 1);
    }
}
