//! Song comments, replies and star reviews

use crate::data;
use crate::model::User;

use super::types::{Comment, CommentKind, Review};

/// A text comment by `author` on `song_id`
pub fn new_comment(author: &User, song_id: &str, content: &str) -> Comment {
    Comment {
        id: data::generate_id("comment"),
        song_id: song_id.to_string(),
        user_id: author.id.clone(),
        user_name: author.name.clone(),
        user_avatar: author.avatar.clone(),
        content: content.to_string(),
        kind: CommentKind::Text,
        video_url: None,
        likes: 0,
        replies: Vec::new(),
        is_pinned: false,
        created_at: data::now_iso(),
    }
}

pub fn new_review(author: &User, song_id: &str, rating: u8, review: &str) -> Review {
    Review {
        id: data::generate_id("review"),
        song_id: song_id.to_string(),
        user_id: author.id.clone(),
        user_name: author.name.clone(),
        user_avatar: author.avatar.clone(),
        rating,
        review: review.to_string(),
        video_reaction: None,
        likes: 0,
        is_verified_purchase: false,
        created_at: data::now_iso(),
    }
}

/// Song comments (one level of replies) and star reviews
#[derive(Clone, Debug, Default)]
pub struct CommentStore {
    comments: Vec<Comment>,
    reviews: Vec<Review>,
}

impl CommentStore {
    pub fn new(comments: Vec<Comment>, reviews: Vec<Review>) -> Self {
        Self { comments, reviews }
    }

    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    pub fn reviews(&self) -> &[Review] {
        &self.reviews
    }

    pub fn add_comment(&mut self, comment: Comment) {
        self.comments.insert(0, comment);
    }

    pub fn add_reply(&mut self, parent_id: &str, reply: Comment) {
        if let Some(parent) = self.comments.iter_mut().find(|c| c.id == parent_id) {
            parent.replies.push(reply);
        }
    }

    pub fn like_comment(&mut self, id: &str) {
        if let Some(comment) = self.comments.iter_mut().find(|c| c.id == id) {
            comment.likes += 1;
        }
    }

    pub fn delete_comment(&mut self, id: &str) {
        self.comments.retain(|c| c.id != id);
    }

    pub fn add_review(&mut self, review: Review) {
        self.reviews.insert(0, review);
    }

    pub fn like_review(&mut self, id: &str) {
        if let Some(review) = self.reviews.iter_mut().find(|r| r.id == id) {
            review.likes += 1;
        }
    }

    pub fn comments_for_song<'a>(&'a self, song_id: &'a str) -> impl Iterator<Item = &'a Comment> {
        self.comments.iter().filter(move |c| c.song_id == song_id)
    }

    pub fn reviews_for_song<'a>(&'a self, song_id: &'a str) -> impl Iterator<Item = &'a Review> {
        self.reviews.iter().filter(move |r| r.song_id == song_id)
    }

    /// Mean star rating, `None` without reviews
    pub fn average_rating(&self, song_id: &str) -> Option<f32> {
        let (sum, count) = self
            .reviews_for_song(song_id)
            .fold((0u32, 0u32), |(sum, count), r| (sum + r.rating as u32, count + 1));
        (count > 0).then(|| sum as f32 / count as f32)
    }
}
