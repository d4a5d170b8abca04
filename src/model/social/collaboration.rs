//! Joint posts shared between collaborating creators

use crate::data;
use crate::model::{Creator, Song};

use super::types::{CollaborationPartner, CollaborationPost, IndividualPost, TotalEngagement};

/// A post on `song` started by `creator`; the song's artist is invited when
/// it is someone else
pub fn new_collaboration(creator: &Creator, song: &Song, title: &str) -> CollaborationPost {
    let mut collaborators = vec![CollaborationPartner {
        creator_id: creator.id.clone(),
        name: creator.artist_name.clone(),
        avatar: creator.avatar.clone(),
        has_approved: true,
        posted_at: None,
    }];
    if song.artist_id != creator.id {
        collaborators.push(CollaborationPartner {
            creator_id: song.artist_id.clone(),
            name: song.artist.clone(),
            avatar: String::new(),
            has_approved: false,
            posted_at: None,
        });
    }
    let individual_posts = collaborators
        .iter()
        .map(|c| IndividualPost {
            creator_id: c.creator_id.clone(),
            post_id: String::new(),
            is_posted: false,
            engagement: Default::default(),
        })
        .collect();

    CollaborationPost {
        id: data::generate_id("collab"),
        primary_creator_id: creator.id.clone(),
        collaborators,
        song_id: song.id.clone(),
        title: title.to_string(),
        description: String::new(),
        cover_image: song.cover.clone(),
        is_posted_on_all: false,
        individual_posts,
        total_engagement: TotalEngagement::default(),
        created_at: data::now_iso(),
    }
}

/// Posts shared between several creators; each collaborator approves and
/// publishes on their own profile
#[derive(Clone, Debug, Default)]
pub struct CollaborationStore {
    posts: Vec<CollaborationPost>,
}

impl CollaborationStore {
    pub fn new(posts: Vec<CollaborationPost>) -> Self {
        Self { posts }
    }

    pub fn posts(&self) -> &[CollaborationPost] {
        &self.posts
    }

    pub fn create(&mut self, post: CollaborationPost) {
        tracing::info!(post_id = %post.id, collaborators = post.collaborators.len(), "Collaboration created");
        self.posts.push(post);
    }

    pub fn approve(&mut self, post_id: &str, creator_id: &str) {
        if let Some(partner) = self
            .posts
            .iter_mut()
            .find(|p| p.id == post_id)
            .and_then(|p| p.collaborators.iter_mut().find(|c| c.creator_id == creator_id))
        {
            partner.has_approved = true;
        }
    }

    /// Approves on behalf of the creator and records their own post
    pub fn post(&mut self, post_id: &str, creator_id: &str, individual_post_id: &str) {
        let Some(post) = self.posts.iter_mut().find(|p| p.id == post_id) else {
            return;
        };
        if let Some(partner) = post.collaborators.iter_mut().find(|c| c.creator_id == creator_id) {
            partner.has_approved = true;
            partner.posted_at = Some(data::now_iso());
        }
        if let Some(individual) = post.individual_posts.iter_mut().find(|i| i.creator_id == creator_id) {
            individual.is_posted = true;
            individual.post_id = individual_post_id.to_string();
        }
    }

    /// Posts waiting on this creator's approval
    pub fn pending_for<'a>(&'a self, creator_id: &'a str) -> impl Iterator<Item = &'a CollaborationPost> {
        self.posts.iter().filter(move |p| {
            p.collaborators
                .iter()
                .any(|c| c.creator_id == creator_id && !c.has_approved)
        })
    }

    pub fn by_creator<'a>(&'a self, creator_id: &'a str) -> impl Iterator<Item = &'a CollaborationPost> {
        self.posts.iter().filter(move |p| {
            p.primary_creator_id == creator_id || p.collaborators.iter().any(|c| c.creator_id == creator_id)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::social::collaboration_posts;

    fn pending_post() -> CollaborationPost {
        let mut post = collaboration_posts().remove(0);
        post.id = "collab-new".into();
        for partner in &mut post.collaborators {
            partner.has_approved = false;
            partner.posted_at = None;
        }
        for individual in &mut post.individual_posts {
            individual.is_posted = false;
            individual.post_id.clear();
        }
        post
    }

    #[test]
    fn approval_clears_pending() {
        let mut store = CollaborationStore::new(collaboration_posts());
        store.create(pending_post());
        assert_eq!(store.pending_for("artist-1").count(), 1);

        store.approve("collab-new", "artist-1");
        assert_eq!(store.pending_for("artist-1").count(), 0);
        assert_eq!(store.pending_for("creator-1").count(), 1);
    }

    #[test]
    fn posting_marks_partner_and_individual_post() {
        let mut store = CollaborationStore::new(Vec::new());
        store.create(pending_post());
        store.post("collab-new", "creator-1", "post-9");

        let post = &store.posts()[0];
        let partner = post.collaborators.iter().find(|c| c.creator_id == "creator-1").unwrap();
        assert!(partner.has_approved);
        assert!(partner.posted_at.is_some());
        let individual = post.individual_posts.iter().find(|i| i.creator_id == "creator-1").unwrap();
        assert!(individual.is_posted);
        assert_eq!(individual.post_id, "post-9");
    }

    #[test]
    fn new_collaboration_invites_the_song_artist() {
        let creator = crate::data::creator::current_creator();
        let song = crate::data::catalog::Catalog::seed().songs.remove(0);
        let mut store = CollaborationStore::new(Vec::new());
        store.create(new_collaboration(&creator, &song, "Remix drop"));

        assert_eq!(store.pending_for(&song.artist_id).count(), 1);
        assert_eq!(store.pending_for("creator-1").count(), 0);
        let post = &store.posts()[0];
        assert_eq!(post.primary_creator_id, "creator-1");
        assert_eq!(post.individual_posts.len(), 2);
        assert!(post.individual_posts.iter().all(|i| !i.is_posted));
    }

    #[test]
    fn by_creator_includes_collaborators() {
        let store = CollaborationStore::new(collaboration_posts());
        assert_eq!(store.by_creator("artist-1").count(), 1);
        assert_eq!(store.by_creator("creator-teremi").count(), 0);
    }
}
