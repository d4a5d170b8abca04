//! Playback state: now playing, queue, history and the position clock

use rand::Rng;

use super::types::{RepeatMode, Song};

pub const DEFAULT_VOLUME: f32 = 0.8;

/// Every mutation the player accepts
#[derive(Clone, Debug, PartialEq)]
pub enum PlayerAction {
    Play(Song),
    Pause,
    TogglePlay,
    Next,
    Previous,
    Seek(u32),
    SetVolume(f32),
    ToggleShuffle,
    ToggleRepeat,
    AddToQueue(Song),
    RemoveFromQueue(String),
    ClearQueue,
    PlayPlaylist { songs: Vec<Song>, start_index: usize },
    /// Move the playhead while scrubbing
    UpdateCurrentTime(u32),
    /// One second of wall-clock playback
    Tick,
    BeginScrub,
    EndScrub,
}

/// Player state. The current song is never also in the queue or history.
#[derive(Clone, Debug, PartialEq)]
pub struct PlayerStore {
    current: Option<Song>,
    is_playing: bool,
    /// Seconds into the current song
    elapsed: u32,
    duration: u32,
    volume: f32,
    shuffle: bool,
    repeat: RepeatMode,
    queue: Vec<Song>,
    history: Vec<Song>,
    scrubbing: bool,
}

impl Default for PlayerStore {
    fn default() -> Self {
        Self {
            current: None,
            is_playing: false,
            elapsed: 0,
            duration: 0,
            volume: DEFAULT_VOLUME,
            shuffle: false,
            repeat: RepeatMode::None,
            queue: Vec::new(),
            history: Vec::new(),
            scrubbing: false,
        }
    }
}

impl PlayerStore {
    pub fn new() -> Self {
        Self::default()
    }

    // ===== Accessors =====

    pub fn current(&self) -> Option<&Song> {
        self.current.as_ref()
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn elapsed(&self) -> u32 {
        self.elapsed
    }

    pub fn duration(&self) -> u32 {
        self.duration
    }

    pub fn volume(&self) -> f32 {
        self.volume
    }

    pub fn shuffle(&self) -> bool {
        self.shuffle
    }

    pub fn repeat(&self) -> RepeatMode {
        self.repeat
    }

    pub fn queue(&self) -> &[Song] {
        &self.queue
    }

    pub fn history(&self) -> &[Song] {
        &self.history
    }

    pub fn is_scrubbing(&self) -> bool {
        self.scrubbing
    }

    /// Fraction of the current song played, in [0, 1]
    pub fn progress_ratio(&self) -> f64 {
        if self.duration == 0 {
            0.0
        } else {
            (self.elapsed as f64 / self.duration as f64).clamp(0.0, 1.0)
        }
    }

    // ===== Reducer =====

    pub fn dispatch(&mut self, action: PlayerAction) {
        match action {
            PlayerAction::Play(song) => self.play(song),
            PlayerAction::Pause => self.pause(),
            PlayerAction::TogglePlay => self.toggle_play(),
            PlayerAction::Next => self.next(),
            PlayerAction::Previous => self.previous(),
            PlayerAction::Seek(time) => self.seek(time),
            PlayerAction::SetVolume(volume) => self.set_volume(volume),
            PlayerAction::ToggleShuffle => self.toggle_shuffle(),
            PlayerAction::ToggleRepeat => self.toggle_repeat(),
            PlayerAction::AddToQueue(song) => self.add_to_queue(song),
            PlayerAction::RemoveFromQueue(id) => self.remove_from_queue(&id),
            PlayerAction::ClearQueue => self.clear_queue(),
            PlayerAction::PlayPlaylist { songs, start_index } => self.play_playlist(songs, start_index),
            PlayerAction::UpdateCurrentTime(time) => self.update_current_time(time),
            PlayerAction::Tick => self.tick(),
            PlayerAction::BeginScrub => self.begin_scrub(),
            PlayerAction::EndScrub => self.end_scrub(),
        }
    }

    // ===== Transport =====

    pub fn play(&mut self, song: Song) {
        tracing::debug!(song_id = %song.id, title = %song.title, "Play");
        if let Some(previous) = self.current.take() {
            self.history.push(previous);
        }
        self.load(song);
    }

    pub fn pause(&mut self) {
        self.is_playing = false;
    }

    pub fn toggle_play(&mut self) {
        if self.current.is_some() {
            self.is_playing = !self.is_playing;
        }
    }

    pub fn next(&mut self) {
        self.next_with(&mut rand::rng());
    }

    /// `next()` with an explicit random source for shuffle picks
    pub fn next_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        if self.queue.is_empty() {
            return;
        }
        let index = if self.shuffle {
            rng.random_range(0..self.queue.len())
        } else {
            0
        };
        let song = self.queue.remove(index);
        if let Some(previous) = self.current.take() {
            self.history.push(previous);
        }
        self.load(song);
    }

    pub fn previous(&mut self) {
        let Some(song) = self.history.pop() else {
            return;
        };
        if let Some(current) = self.current.take() {
            self.queue.insert(0, current);
        }
        self.load(song);
    }

    pub fn seek(&mut self, time: u32) {
        self.elapsed = time.min(self.duration);
    }

    pub fn play_playlist(&mut self, songs: Vec<Song>, start_index: usize) {
        if start_index >= songs.len() {
            tracing::warn!(start_index, len = songs.len(), "Ignoring playlist start outside the list");
            return;
        }
        let mut songs = songs;
        let start = songs.remove(start_index);
        tracing::debug!(song_id = %start.id, queued = songs.len(), "Play playlist");
        self.queue = songs;
        self.history.clear();
        self.current = None;
        self.load(start);
    }

    // ===== Settings =====

    pub fn set_volume(&mut self, volume: f32) {
        self.volume = if volume.is_nan() { 0.0 } else { volume.clamp(0.0, 1.0) };
    }

    pub fn toggle_shuffle(&mut self) {
        self.shuffle = !self.shuffle;
    }

    pub fn toggle_repeat(&mut self) {
        self.repeat = self.repeat.next();
    }

    // ===== Queue =====

    /// Append to the queue. Queueing the song that is already playing is ignored.
    pub fn add_to_queue(&mut self, song: Song) {
        if self.current.as_ref().is_some_and(|c| c.id == song.id) {
            return;
        }
        self.queue.push(song);
    }

    pub fn remove_from_queue(&mut self, song_id: &str) {
        self.queue.retain(|s| s.id != song_id);
    }

    pub fn clear_queue(&mut self) {
        self.queue.clear();
    }

    // ===== Clock =====

    pub fn update_current_time(&mut self, time: u32) {
        self.seek(time);
    }

    pub fn tick(&mut self) {
        if !self.is_playing || self.scrubbing || self.current.is_none() {
            return;
        }
        self.elapsed = self.elapsed.saturating_add(1).min(self.duration);
        if self.elapsed >= self.duration {
            self.track_finished();
        }
    }

    pub fn track_finished(&mut self) {
        if self.repeat == RepeatMode::One {
            self.elapsed = 0;
            self.is_playing = true;
        } else if !self.queue.is_empty() {
            self.next();
        } else if self.repeat == RepeatMode::All && !self.history.is_empty() {
            self.queue = std::mem::take(&mut self.history);
            self.next();
        } else if self.repeat == RepeatMode::All {
            self.elapsed = 0;
            self.is_playing = true;
        } else {
            self.elapsed = self.duration;
            self.is_playing = false;
        }
    }

    pub fn begin_scrub(&mut self) {
        self.scrubbing = true;
    }

    pub fn end_scrub(&mut self) {
        self.scrubbing = false;
    }

    fn load(&mut self, song: Song) {
        self.queue.retain(|s| s.id != song.id);
        self.history.retain(|s| s.id != song.id);
        self.duration = song.duration;
        self.elapsed = 0;
        self.is_playing = true;
        self.current = Some(song);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn song(n: u32) -> Song {
        Song {
            id: format!("song-{}", n),
            title: format!("Track {}", n),
            artist: "Artist".into(),
            artist_id: "artist-1".into(),
            album: "Album".into(),
            album_id: "album-1".into(),
            cover: "/c.jpg".into(),
            duration: 3,
            url: format!("/audio/song{}.mp3", n),
            genre: "Pop".into(),
            release_date: "2024-01-01".into(),
            plays: 0,
        }
    }

    fn ids(songs: &[Song]) -> Vec<&str> {
        songs.iter().map(|s| s.id.as_str()).collect()
    }

    fn assert_current_not_listed(player: &PlayerStore) {
        if let Some(current) = player.current() {
            assert!(player.queue().iter().all(|s| s.id != current.id));
            assert!(player.history().iter().all(|s| s.id != current.id));
        }
        assert!(player.elapsed() <= player.duration());
    }

    #[test]
    fn starts_empty_and_paused() {
        let player = PlayerStore::new();
        assert!(player.current().is_none());
        assert!(!player.is_playing());
        assert_eq!(player.volume(), DEFAULT_VOLUME);
        assert_eq!(player.repeat(), RepeatMode::None);
    }

    #[test]
    fn play_moves_previous_song_to_history() {
        let mut player = PlayerStore::new();
        player.play(song(1));
        player.play(song(2));
        assert_eq!(player.current().map(|s| s.id.as_str()), Some("song-2"));
        assert_eq!(player.history().last().map(|s| s.id.as_str()), Some("song-1"));
        assert!(player.is_playing());
        assert_eq!(player.elapsed(), 0);
        assert_eq!(player.duration(), 3);
    }

    #[test]
    fn replaying_the_current_song_keeps_it_out_of_history() {
        let mut player = PlayerStore::new();
        player.play(song(1));
        player.play(song(1));
        assert!(player.history().is_empty());
        assert_current_not_listed(&player);
    }

    #[test]
    fn play_removes_the_song_from_the_queue() {
        let mut player = PlayerStore::new();
        player.add_to_queue(song(2));
        player.add_to_queue(song(3));
        player.play(song(2));
        assert_eq!(ids(player.queue()), ["song-3"]);
    }

    #[test]
    fn next_on_empty_queue_is_a_noop() {
        let mut player = PlayerStore::new();
        player.play(song(1));
        player.play(song(2));
        let before = player.clone();
        player.next();
        assert_eq!(player, before);
    }

    #[test]
    fn next_takes_the_queue_head() {
        let mut player = PlayerStore::new();
        player.play_playlist(vec![song(1), song(2), song(3)], 0);
        player.pause();
        player.next();
        assert_eq!(player.current().map(|s| s.id.as_str()), Some("song-2"));
        assert_eq!(ids(player.queue()), ["song-3"]);
        assert_eq!(ids(player.history()), ["song-1"]);
        assert!(player.is_playing());
    }

    #[test]
    fn shuffled_next_removes_only_the_pick() {
        let mut player = PlayerStore::new();
        player.play_playlist((1..=6).map(song).collect(), 0);
        player.toggle_shuffle();
        let mut rng = StdRng::seed_from_u64(7);
        player.next_with(&mut rng);

        let current = player.current().map(|s| s.id.clone()).unwrap();
        assert_ne!(current, "song-1");
        assert_eq!(player.queue().len(), 4);
        assert_current_not_listed(&player);
    }

    #[test]
    fn previous_on_empty_history_is_a_noop() {
        let mut player = PlayerStore::new();
        player.play(song(1));
        player.add_to_queue(song(2));
        let before = player.clone();
        player.previous();
        assert_eq!(player, before);
    }

    #[test]
    fn previous_requeues_the_current_song_first() {
        let mut player = PlayerStore::new();
        player.play(song(1));
        player.play(song(2));
        player.add_to_queue(song(3));
        player.previous();
        assert_eq!(player.current().map(|s| s.id.as_str()), Some("song-1"));
        assert_eq!(ids(player.queue()), ["song-2", "song-3"]);
        assert!(player.history().is_empty());
    }

    #[test]
    fn play_playlist_replaces_queue_and_history() {
        let mut player = PlayerStore::new();
        player.play(song(9));
        player.play(song(8));
        let tracks = vec![song(1), song(2), song(3)];
        player.play_playlist(tracks.clone(), 1);
        assert_eq!(player.current(), Some(&tracks[1]));
        assert_eq!(ids(player.queue()), ["song-1", "song-3"]);
        assert!(player.history().is_empty());
    }

    #[test]
    fn play_playlist_ignores_bad_input() {
        let mut player = PlayerStore::new();
        player.play(song(1));
        let before = player.clone();
        player.play_playlist(Vec::new(), 0);
        player.play_playlist(vec![song(2)], 3);
        assert_eq!(player, before);
    }

    #[test]
    fn seek_and_volume_clamp() {
        let mut player = PlayerStore::new();
        player.play(song(1));
        player.seek(99);
        assert_eq!(player.elapsed(), 3);
        player.set_volume(1.7);
        assert_eq!(player.volume(), 1.0);
        player.set_volume(-0.2);
        assert_eq!(player.volume(), 0.0);
    }

    #[test]
    fn repeat_cycles_back_to_none() {
        let mut player = PlayerStore::new();
        for _ in 0..3 {
            player.dispatch(PlayerAction::ToggleRepeat);
        }
        assert_eq!(player.repeat(), RepeatMode::None);
    }

    #[test]
    fn queueing_the_current_song_is_ignored() {
        let mut player = PlayerStore::new();
        player.play(song(1));
        player.add_to_queue(song(1));
        assert!(player.queue().is_empty());
        player.add_to_queue(song(2));
        player.remove_from_queue("song-2");
        assert!(player.queue().is_empty());
    }

    #[test]
    fn ticking_to_the_end_advances() {
        let mut player = PlayerStore::new();
        player.play_playlist(vec![song(1), song(2)], 0);
        for _ in 0..3 {
            player.dispatch(PlayerAction::Tick);
        }
        assert_eq!(player.current().map(|s| s.id.as_str()), Some("song-2"));
        assert_eq!(player.elapsed(), 0);
    }

    #[test]
    fn last_song_pauses_at_the_end() {
        let mut player = PlayerStore::new();
        player.play(song(1));
        for _ in 0..5 {
            player.tick();
        }
        assert!(!player.is_playing());
        assert_eq!(player.elapsed(), player.duration());
    }

    #[test]
    fn repeat_one_restarts_the_song() {
        let mut player = PlayerStore::new();
        player.play_playlist(vec![song(1), song(2)], 0);
        player.toggle_repeat();
        player.toggle_repeat();
        for _ in 0..3 {
            player.tick();
        }
        assert_eq!(player.current().map(|s| s.id.as_str()), Some("song-1"));
        assert_eq!(player.elapsed(), 0);
        assert!(player.is_playing());
    }

    #[test]
    fn repeat_all_recycles_history() {
        let mut player = PlayerStore::new();
        player.play_playlist(vec![song(1), song(2)], 0);
        player.toggle_repeat();
        player.next();
        player.track_finished();
        assert_eq!(player.current().map(|s| s.id.as_str()), Some("song-1"));
        assert_eq!(ids(player.history()), ["song-2"]);
        assert_current_not_listed(&player);
    }

    #[test]
    fn scrubbing_freezes_the_clock() {
        let mut player = PlayerStore::new();
        player.play(song(1));
        player.dispatch(PlayerAction::BeginScrub);
        player.tick();
        assert_eq!(player.elapsed(), 0);
        player.dispatch(PlayerAction::UpdateCurrentTime(2));
        assert!(player.is_scrubbing());
        assert_eq!(player.elapsed(), 2);
        player.dispatch(PlayerAction::EndScrub);
        player.tick();
        assert_eq!(player.elapsed(), 3);
    }

    #[test]
    fn toggle_play_needs_a_song() {
        let mut player = PlayerStore::new();
        player.toggle_play();
        assert!(!player.is_playing());
        player.play(song(1));
        player.toggle_play();
        assert!(!player.is_playing());
    }

    #[test]
    fn random_walk_keeps_invariants() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut player = PlayerStore::new();
        for _ in 0..500 {
            let n = rng.random_range(1..=5);
            match rng.random_range(0..8) {
                0 => player.play(song(n)),
                1 => player.next_with(&mut rng),
                2 => player.previous(),
                3 => player.add_to_queue(song(n)),
                4 => player.seek(rng.random_range(0..10)),
                5 => player.tick(),
                6 => player.toggle_shuffle(),
                _ => player.toggle_repeat(),
            }
            assert_current_not_listed(&player);
        }
    }
}
