//! Social and commerce entity types

use serde::{Deserialize, Serialize};

// ===== Merchandise =====

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MerchCategory {
    Clothing,
    Accessories,
    Digital,
    Physical,
    Tickets,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingInfo {
    pub weight: f64,
    pub dimensions: String,
    pub shipping_cost: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Merchandise {
    pub id: String,
    pub creator_id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub currency: String,
    pub images: Vec<String>,
    pub category: MerchCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sizes: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colors: Option<Vec<String>>,
    pub stock: u32,
    pub sold: u32,
    pub is_available: bool,
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipping_info: Option<ShippingInfo>,
}

#[derive(Clone, Debug, Default)]
pub struct MerchandiseUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub stock: Option<u32>,
    pub sold: Option<u32>,
    pub is_available: Option<bool>,
}

impl MerchandiseUpdate {
    pub fn apply(self, item: &mut Merchandise) {
        if let Some(name) = self.name {
            item.name = name;
        }
        if let Some(description) = self.description {
            item.description = description;
        }
        if let Some(price) = self.price {
            item.price = price;
        }
        if let Some(stock) = self.stock {
            item.stock = stock;
        }
        if let Some(sold) = self.sold {
            item.sold = sold;
        }
        if let Some(available) = self.is_available {
            item.is_available = available;
        }
    }
}

// ===== Events & Announcements =====

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    Concert,
    Tour,
    Release,
    MeetGreet,
    LiveStream,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    Upcoming,
    Ongoing,
    Completed,
    Cancelled,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EventLocation {
    pub venue: String,
    pub address: String,
    pub city: String,
    pub country: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketInfo {
    pub price: f64,
    pub currency: String,
    pub available_tickets: u32,
    pub sold_tickets: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ticket_link: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub creator_id: String,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: EventKind,
    pub cover_image: String,
    pub start_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<EventLocation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ticket_info: Option<TicketInfo>,
    pub is_virtual: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub virtual_link: Option<String>,
    pub status: EventStatus,
    pub attendees: u32,
    pub created_at: String,
}

#[derive(Clone, Debug, Default)]
pub struct EventUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub start_date: Option<String>,
    pub status: Option<EventStatus>,
    pub attendees: Option<u32>,
}

impl EventUpdate {
    pub fn apply(self, event: &mut Event) {
        if let Some(title) = self.title {
            event.title = title;
        }
        if let Some(description) = self.description {
            event.description = description;
        }
        if let Some(start_date) = self.start_date {
            event.start_date = start_date;
        }
        if let Some(status) = self.status {
            event.status = status;
        }
        if let Some(attendees) = self.attendees {
            event.attendees = attendees;
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnnouncementKind {
    General,
    AlbumDrop,
    SingleRelease,
    Collaboration,
    Milestone,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Announcement {
    pub id: String,
    pub creator_id: String,
    pub title: String,
    pub content: String,
    #[serde(rename = "type")]
    pub kind: AnnouncementKind,
    pub attachments: Vec<String>,
    pub likes: u32,
    pub comments: u32,
    pub shares: u32,
    pub created_at: String,
}

// ===== Canvas =====

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CanvasStatus {
    Processing,
    Active,
    Rejected,
}

/// Short looping video shown behind a song; at most 30 seconds
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanvasVideo {
    pub id: String,
    pub song_id: String,
    pub creator_id: String,
    pub video_url: String,
    pub thumbnail_url: String,
    pub duration: u32,
    pub status: CanvasStatus,
    pub views: u64,
    pub created_at: String,
}

#[derive(Clone, Debug, Default)]
pub struct CanvasUpdate {
    pub video_url: Option<String>,
    pub thumbnail_url: Option<String>,
    pub duration: Option<u32>,
    pub status: Option<CanvasStatus>,
}

impl CanvasUpdate {
    pub fn apply(self, video: &mut CanvasVideo) {
        if let Some(url) = self.video_url {
            video.video_url = url;
        }
        if let Some(url) = self.thumbnail_url {
            video.thumbnail_url = url;
        }
        if let Some(duration) = self.duration {
            video.duration = duration;
        }
        if let Some(status) = self.status {
            video.status = status;
        }
    }
}

// ===== Messaging =====

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatParticipant {
    pub id: String,
    pub name: String,
    pub avatar: String,
    pub is_online: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_seen: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    Text,
    Image,
    Audio,
    Song,
    Video,
    Reaction,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SharedSong {
    pub song_id: String,
    pub title: String,
    pub artist: String,
    pub cover: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: String,
    pub conversation_id: String,
    pub sender_id: String,
    #[serde(rename = "type")]
    pub kind: MessageKind,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub song_info: Option<SharedSong>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_to: Option<String>,
    pub is_read: bool,
    pub created_at: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conversation {
    pub id: String,
    pub participants: Vec<ChatParticipant>,
    pub last_message: Message,
    pub unread_count: u32,
    pub is_group: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_avatar: Option<String>,
    pub created_at: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: String,
    pub name: String,
    pub avatar: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    pub is_on_nia_tunes: bool,
    pub is_friend: bool,
    pub mutual_friends: u32,
}

// ===== Comments & Reviews =====

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommentKind {
    Text,
    VideoReaction,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    pub song_id: String,
    pub user_id: String,
    pub user_name: String,
    pub user_avatar: String,
    pub content: String,
    #[serde(rename = "type")]
    pub kind: CommentKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    pub likes: u32,
    pub replies: Vec<Comment>,
    pub is_pinned: bool,
    pub created_at: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: String,
    pub song_id: String,
    pub user_id: String,
    pub user_name: String,
    pub user_avatar: String,
    /// 1 to 5 stars
    pub rating: u8,
    pub review: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_reaction: Option<String>,
    pub likes: u32,
    pub is_verified_purchase: bool,
    pub created_at: String,
}

// ===== Artist notes =====

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtistNote {
    pub id: String,
    pub creator_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub song_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub album_id: Option<String>,
    pub title: String,
    pub content: String,
    pub attachments: Vec<String>,
    pub is_pinned: bool,
    pub likes: u32,
    pub created_at: String,
}

// ===== Collaborations =====

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollaborationPartner {
    pub creator_id: String,
    pub name: String,
    pub avatar: String,
    pub has_approved: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub posted_at: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PostEngagement {
    pub likes: u64,
    pub comments: u64,
    pub shares: u64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndividualPost {
    pub creator_id: String,
    pub post_id: String,
    pub is_posted: bool,
    pub engagement: PostEngagement,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TotalEngagement {
    pub likes: u64,
    pub comments: u64,
    pub shares: u64,
    pub streams: u64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollaborationPost {
    pub id: String,
    pub primary_creator_id: String,
    pub collaborators: Vec<CollaborationPartner>,
    pub song_id: String,
    pub title: String,
    pub description: String,
    pub cover_image: String,
    pub is_posted_on_all: bool,
    pub individual_posts: Vec<IndividualPost>,
    pub total_engagement: TotalEngagement,
    pub created_at: String,
}

// ===== Live streaming =====

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StreamStatus {
    Scheduled,
    Live,
    Ended,
}

impl StreamStatus {
    pub fn label(self) -> &'static str {
        match self {
            StreamStatus::Scheduled => "Scheduled",
            StreamStatus::Live => "LIVE",
            StreamStatus::Ended => "Ended",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveComment {
    pub id: String,
    pub stream_id: String,
    pub user_id: String,
    pub user_name: String,
    pub user_avatar: String,
    pub message: String,
    #[serde(rename = "isVIP")]
    pub is_vip: bool,
    pub created_at: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tip {
    pub id: String,
    pub stream_id: String,
    pub sender_id: String,
    pub sender_name: String,
    pub sender_avatar: String,
    pub amount: f64,
    pub currency: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gift_type: Option<String>,
    pub created_at: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveStream {
    pub id: String,
    pub creator_id: String,
    pub creator_name: String,
    pub creator_avatar: String,
    pub title: String,
    pub thumbnail_url: String,
    pub status: StreamStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheduled_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub started_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ended_at: Option<String>,
    pub viewers: u32,
    pub peak_viewers: u32,
    pub total_views: u64,
    /// Seconds
    pub duration: u32,
    pub tips: Vec<Tip>,
    pub total_tips: f64,
    pub comments: Vec<LiveComment>,
    pub is_recording: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recording_url: Option<String>,
}

/// A purchasable animated tip
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TipGift {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub price: f64,
    pub currency: String,
    pub animation: String,
}

// ===== External links =====

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SongSocialLinks {
    pub song_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub youtube_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spotify_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apple_music_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub soundcloud_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audiomack_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub boomplay_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tiktok_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram_reel_url: Option<String>,
}
