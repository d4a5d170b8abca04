//! Playback control and playlist editing

use crossterm::event::{KeyCode, KeyEvent};

use crate::model::{ContentItem, PageKind, PlayerAction};

use super::input::SEEK_STEP;
use super::AppController;

impl AppController {
    pub async fn change_volume(&self, delta: f32) {
        let volume = self.model.get_player_state().await.volume();
        let target = volume + delta;
        tracing::debug!(from = volume, to = target, "Changing volume");
        self.model.player_action(PlayerAction::SetVolume(target)).await;
    }

    /// Seek by `offset` seconds, clamped to the song. While scrubbing only
    /// the playhead moves.
    pub async fn seek_relative(&self, offset: i64) {
        let player = self.model.get_player_state().await;
        if player.current().is_none() {
            return;
        }
        let target = (player.elapsed() as i64 + offset).clamp(0, player.duration() as i64) as u32;
        let action = if player.is_scrubbing() {
            PlayerAction::UpdateCurrentTime(target)
        } else {
            PlayerAction::Seek(target)
        };
        self.model.player_action(action).await;
    }

    /// `z`: hold the clock still and move the playhead with `[` / `]`
    pub async fn start_scrub(&self) {
        if self.model.get_player_state().await.current().is_some() {
            self.model.player_action(PlayerAction::BeginScrub).await;
        }
    }

    pub(crate) async fn handle_scrub_key(&self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('[') | KeyCode::Left => self.seek_relative(-(SEEK_STEP as i64)).await,
            KeyCode::Char(']') | KeyCode::Right => self.seek_relative(SEEK_STEP as i64).await,
            KeyCode::Enter | KeyCode::Esc | KeyCode::Char('z') | KeyCode::Char('Z') => {
                self.model.player_action(PlayerAction::EndScrub).await;
            }
            _ => {}
        }
    }

    pub async fn remove_selected_from_queue(&self) {
        let (selected, queue) = {
            let selected = self.model.get_ui_state().await.queue_selected;
            (selected, self.model.get_player_state().await.queue().to_vec())
        };
        let Some(song) = queue.get(selected) else {
            return;
        };
        self.model.player_action(PlayerAction::RemoveFromQueue(song.id.clone())).await;
        let remaining = queue.len() - 1;
        self.model
            .with_ui(|ui| ui.queue_selected = ui.queue_selected.min(remaining.saturating_sub(1)))
            .await;
    }

    /// `k`: put the selected song at the end of the queue
    pub async fn queue_selected_song(&self) {
        let item = self.model.get_content_state().await.selected_item().cloned();
        if let Some(ContentItem::Song { song, .. }) = item {
            let title = song.title.clone();
            self.model.player_action(PlayerAction::AddToQueue(song)).await;
            self.model.set_status(format!("Queued \"{}\"", title)).await;
        }
    }

    /// `a`: add the playing song to the selected playlist, or to the open one
    pub async fn add_current_to_selected_playlist(&self) {
        let Some(song) = self.model.get_player_state().await.current().cloned() else {
            self.model.set_status("Nothing is playing").await;
            return;
        };
        let content = self.model.get_content_state().await;
        let target = match (content.selected_item(), content.current_kind()) {
            (Some(ContentItem::Playlist(playlist)), _) => Some(playlist.id.clone()),
            (_, Some(PageKind::Playlist(id))) => Some(id.clone()),
            _ => None,
        };
        let Some(playlist_id) = target else {
            self.model.set_status("Select a playlist first").await;
            return;
        };

        self.spawn(move |c| async move {
            let result = c.model.add_to_playlist(&playlist_id, &song.id).await;
            if let Some(playlist) = c.report("add_to_playlist", result).await {
                tracing::info!(playlist_id = %playlist.id, song_id = %song.id, "Added to playlist");
                c.model
                    .set_status(format!("Added \"{}\" to {}", song.title, playlist.name))
                    .await;
            }
        });
    }

    /// `x` on a playlist page removes the selected song from it
    pub async fn remove_selected_from_playlist(&self) {
        let content = self.model.get_content_state().await;
        let (Some(PageKind::Playlist(playlist_id)), Some(ContentItem::Song { song, .. })) =
            (content.current_kind().cloned(), content.selected_item().cloned())
        else {
            return;
        };

        self.spawn(move |c| async move {
            let result = c.model.remove_from_playlist(&playlist_id, &song.id).await;
            if c.report("remove_from_playlist", result).await.is_some() {
                c.model.set_status(format!("Removed \"{}\"", song.title)).await;
            }
        });
    }

    /// `w`: follow the selected artist, or the one whose page is open
    pub async fn follow_selected_artist(&self) {
        let content = self.model.get_content_state().await;
        let artist_id = match (content.selected_item(), content.current_kind()) {
            (Some(ContentItem::Artist(artist)), _) => artist.id.clone(),
            (_, Some(PageKind::Artist(id))) => id.clone(),
            _ => return,
        };

        self.spawn(move |c| async move {
            let result = c.model.follow_artist(&artist_id).await;
            if let Some(name) = c.report("follow_artist", result).await {
                c.model.set_status(format!("Following {}", name)).await;
            }
        });
    }

    pub async fn create_playlist(&self) {
        self.spawn(|c| async move {
            let result = c.model.create_playlist().await;
            if let Some(playlist) = c.report("create_playlist", result).await {
                tracing::info!(playlist_id = %playlist.id, "Playlist created");
                c.model.set_status(format!("Created {}", playlist.name)).await;
            }
        });
    }
}
