//! Live streams: going live, tips, chat and the viewer counter

use rand::Rng;

use crate::data;
use crate::model::Creator;

use super::types::{LiveComment, LiveStream, StreamStatus, Tip, TipGift};

/// Largest drop in viewers per jitter step
pub const MAX_VIEWER_DROP: i64 = 3;
/// Largest gain in viewers per jitter step
pub const MAX_VIEWER_GAIN: i64 = 6;

/// A fresh stream for `creator`: on air when `scheduled_at` is `None`,
/// otherwise planned for that time
pub fn new_stream(creator: &Creator, title: &str, scheduled_at: Option<String>) -> LiveStream {
    let on_air = scheduled_at.is_none();
    LiveStream {
        id: data::generate_id("live"),
        creator_id: creator.id.clone(),
        creator_name: creator.artist_name.clone(),
        creator_avatar: creator.avatar.clone(),
        title: title.to_string(),
        thumbnail_url: creator.cover_image.clone(),
        status: if on_air { StreamStatus::Live } else { StreamStatus::Scheduled },
        scheduled_at,
        started_at: None,
        ended_at: None,
        viewers: on_air as u32,
        peak_viewers: on_air as u32,
        total_views: 0,
        duration: 0,
        tips: Vec::new(),
        total_tips: 0.0,
        comments: Vec::new(),
        is_recording: on_air,
        recording_url: None,
    }
}

/// Tip worth one gift, sent by `sender_name`
pub fn gift_tip(stream_id: &str, gift: &TipGift, sender_id: &str, sender_name: &str, sender_avatar: &str) -> Tip {
    Tip {
        id: data::generate_id("tip"),
        stream_id: stream_id.to_string(),
        sender_id: sender_id.to_string(),
        sender_name: sender_name.to_string(),
        sender_avatar: sender_avatar.to_string(),
        amount: gift.price,
        currency: gift.currency.clone(),
        message: None,
        gift_type: Some(gift.name.clone()),
        created_at: data::now_iso(),
    }
}

#[derive(Clone, Debug, Default)]
pub struct LiveStore {
    streams: Vec<LiveStream>,
    /// Copy of the stream being broadcast; tips and viewers land here first
    active_stream: Option<LiveStream>,
    gifts: Vec<TipGift>,
}

impl LiveStore {
    pub fn new(streams: Vec<LiveStream>, gifts: Vec<TipGift>) -> Self {
        Self {
            streams,
            active_stream: None,
            gifts,
        }
    }

    pub fn streams(&self) -> &[LiveStream] {
        &self.streams
    }

    pub fn active_stream(&self) -> Option<&LiveStream> {
        self.active_stream.as_ref()
    }

    pub fn is_live(&self) -> bool {
        self.active_stream.is_some()
    }

    pub fn gifts(&self) -> &[TipGift] {
        &self.gifts
    }

    // ===== Broadcast lifecycle =====

    /// Replaces any active stream; the new one is added to the list if unknown
    pub fn start_stream(&mut self, mut stream: LiveStream) {
        stream.status = StreamStatus::Live;
        stream.started_at = Some(data::now_iso());
        stream.ended_at = None;
        tracing::info!(stream_id = %stream.id, creator_id = %stream.creator_id, "Stream started");

        match self.streams.iter_mut().find(|s| s.id == stream.id) {
            Some(stored) => *stored = stream.clone(),
            None => self.streams.push(stream.clone()),
        }
        self.active_stream = Some(stream);
    }

    /// Marks the stored entry ended and clears the active stream
    pub fn end_stream(&mut self, stream_id: &str) {
        let ended_at = data::now_iso();
        let active = self.active_stream.take_if(|s| s.id == stream_id);
        if let Some(stored) = self.streams.iter_mut().find(|s| s.id == stream_id) {
            if let Some(active) = active {
                *stored = active;
            }
            stored.status = StreamStatus::Ended;
            stored.ended_at = Some(ended_at);
            stored.viewers = 0;
            tracing::info!(
                stream_id,
                peak_viewers = stored.peak_viewers,
                total_tips = stored.total_tips,
                "Stream ended"
            );
        }
    }

    pub fn schedule_stream(&mut self, mut stream: LiveStream) {
        stream.status = StreamStatus::Scheduled;
        self.streams.push(stream);
    }

    // ===== Interaction =====

    /// Tips are append-only; the total always grows by the tip amount
    pub fn add_tip(&mut self, stream_id: &str, tip: Tip) {
        let amount = tip.amount;
        if let Some(stored) = self.streams.iter_mut().find(|s| s.id == stream_id) {
            stored.tips.push(tip.clone());
            stored.total_tips += amount;
        }
        if let Some(active) = self.active_stream.as_mut().filter(|s| s.id == stream_id) {
            active.tips.push(tip);
            active.total_tips += amount;
        }
        tracing::debug!(stream_id, amount, "Tip received");
    }

    /// Chat only reaches a stream that is on air
    pub fn add_comment(&mut self, stream_id: &str, comment: LiveComment) {
        if let Some(active) = self.active_stream.as_mut().filter(|s| s.id == stream_id) {
            active.comments.push(comment);
        }
    }

    pub fn update_viewers(&mut self, stream_id: &str, viewers: u32) {
        if let Some(active) = self.active_stream.as_mut().filter(|s| s.id == stream_id) {
            active.viewers = viewers;
            active.peak_viewers = active.peak_viewers.max(viewers);
        }
    }

    /// One random-walk step of the viewer counter, never below one viewer.
    /// Returns the new count, or `None` when nothing is live.
    pub fn apply_viewer_jitter<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<u32> {
        let active = self.active_stream.as_ref()?;
        let change = rng.random_range(-MAX_VIEWER_DROP..=MAX_VIEWER_GAIN);
        let viewers = (active.viewers as i64 + change).max(1) as u32;
        let id = active.id.clone();
        self.update_viewers(&id, viewers);
        Some(viewers)
    }

    // ===== Queries =====

    pub fn by_creator<'a>(&'a self, creator_id: &'a str) -> impl Iterator<Item = &'a LiveStream> {
        self.streams.iter().filter(move |s| s.creator_id == creator_id)
    }

    pub fn upcoming(&self) -> impl Iterator<Item = &LiveStream> {
        self.streams.iter().filter(|s| s.status == StreamStatus::Scheduled)
    }

    pub fn live_streams(&self) -> impl Iterator<Item = &LiveStream> {
        self.streams.iter().filter(|s| s.status == StreamStatus::Live)
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::data::social::{live_streams, tip_gifts};

    fn store() -> LiveStore {
        LiveStore::new(live_streams(), tip_gifts())
    }

    fn tip(stream_id: &str, amount: f64) -> Tip {
        Tip {
            id: data::generate_id("tip"),
            stream_id: stream_id.to_string(),
            sender_id: "user-1".into(),
            sender_name: "Jane Wanjiku".into(),
            sender_avatar: "/artist-1.jpg".into(),
            amount,
            currency: "USD".into(),
            message: None,
            gift_type: None,
            created_at: data::now_iso(),
        }
    }

    fn go_live(store: &mut LiveStore) -> String {
        let mut stream = store.streams()[1].clone();
        stream.viewers = 10;
        let id = stream.id.clone();
        store.start_stream(stream);
        id
    }

    #[test]
    fn start_then_end_marks_stored_entry() {
        let mut store = store();
        let id = go_live(&mut store);
        assert!(store.is_live());
        assert_eq!(store.live_streams().count(), 1);
        assert_eq!(store.upcoming().count(), 0);
        assert!(store.active_stream().unwrap().started_at.is_some());

        store.end_stream(&id);
        assert!(!store.is_live());
        let stored = store.streams().iter().find(|s| s.id == id).unwrap();
        assert_eq!(stored.status, StreamStatus::Ended);
        assert!(stored.ended_at.is_some());
        assert_eq!(store.live_streams().count(), 0);
    }

    #[test]
    fn tips_accumulate_on_stored_and_active() {
        let mut store = store();
        let id = go_live(&mut store);
        store.add_tip(&id, tip(&id, 5.0));
        store.add_tip(&id, tip(&id, 2.5));

        let active = store.active_stream().unwrap();
        assert_eq!(active.tips.len(), 2);
        assert_eq!(active.total_tips, 7.5);
        let stored = store.streams().iter().find(|s| s.id == id).unwrap();
        assert_eq!(stored.total_tips, 7.5);

        store.end_stream(&id);
        let stored = store.streams().iter().find(|s| s.id == id).unwrap();
        assert_eq!(stored.tips.len(), 2);
    }

    #[test]
    fn tips_to_past_streams_only_touch_the_list() {
        let mut store = store();
        let before = store.streams()[0].total_tips;
        store.add_tip("live-1", tip("live-1", 1.0));
        assert_eq!(store.streams()[0].total_tips, before + 1.0);
        assert!(store.active_stream().is_none());
    }

    #[test]
    fn peak_tracks_the_maximum() {
        let mut store = store();
        let id = go_live(&mut store);
        store.update_viewers(&id, 40);
        store.update_viewers(&id, 12);
        let active = store.active_stream().unwrap();
        assert_eq!(active.viewers, 12);
        assert_eq!(active.peak_viewers, 40);
    }

    #[test]
    fn comments_need_an_active_stream() {
        let mut store = store();
        let comment = LiveComment {
            id: "lc-1".into(),
            stream_id: "live-2".into(),
            user_id: "user-2".into(),
            user_name: "John Ochieng".into(),
            user_avatar: "/artist-2.jpg".into(),
            message: "Tuko pamoja!".into(),
            is_vip: false,
            created_at: data::now_iso(),
        };
        store.add_comment("live-1", comment.clone());
        let id = go_live(&mut store);
        store.add_comment(&id, comment);
        assert_eq!(store.active_stream().unwrap().comments.len(), 1);
    }

    #[test]
    fn jitter_stays_in_range_and_above_zero() {
        let mut store = store();
        assert_eq!(store.apply_viewer_jitter(&mut StdRng::seed_from_u64(1)), None);

        let id = go_live(&mut store);
        store.update_viewers(&id, 1);
        let mut rng = StdRng::seed_from_u64(42);
        let mut previous = 1i64;
        for _ in 0..200 {
            let viewers = store.apply_viewer_jitter(&mut rng).unwrap() as i64;
            assert!(viewers >= 1);
            assert!(viewers - previous <= MAX_VIEWER_GAIN);
            assert!(previous - viewers <= MAX_VIEWER_DROP);
            previous = viewers;
        }
        let active = store.active_stream().unwrap();
        assert!(active.peak_viewers >= active.viewers);
    }

    #[test]
    fn new_streams_start_with_one_viewer_or_none() {
        let creator = crate::data::creator::current_creator();
        let live = new_stream(&creator, "Studio session", None);
        assert_eq!(live.status, StreamStatus::Live);
        assert_eq!((live.viewers, live.peak_viewers), (1, 1));
        assert!(live.is_recording);

        let planned = new_stream(&creator, "Album preview", Some("2024-05-01T20:00:00".into()));
        assert_eq!(planned.status, StreamStatus::Scheduled);
        assert_eq!(planned.viewers, 0);
        assert_eq!(planned.creator_name, creator.artist_name);
    }

    #[test]
    fn gift_tips_carry_the_gift_price() {
        let mut store = store();
        let id = go_live(&mut store);
        let gift = store.gifts()[2].clone();
        store.add_tip(&id, gift_tip(&id, &gift, "user-1", "Jane Wanjiku", "/artist-1.jpg"));
        let active = store.active_stream().unwrap();
        assert_eq!(active.total_tips, gift.price);
        assert_eq!(active.tips[0].gift_type.as_deref(), Some(gift.name.as_str()));
    }

    #[test]
    fn scheduling_and_creator_filter() {
        let mut store = store();
        let mut stream = store.streams()[0].clone();
        stream.id = "live-new".into();
        store.schedule_stream(stream);
        assert_eq!(store.upcoming().count(), 2);
        assert_eq!(store.by_creator("creator-1").count(), 2);
    }
}
