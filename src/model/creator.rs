//! Creator-portal types: identity, uploads, analytics and earnings

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CreatorType {
    #[default]
    Artist,
    Podcaster,
    Label,
}

impl CreatorType {
    pub const ALL: [CreatorType; 3] = [CreatorType::Artist, CreatorType::Podcaster, CreatorType::Label];

    pub fn label(self) -> &'static str {
        match self {
            CreatorType::Artist => "Artist",
            CreatorType::Podcaster => "Podcaster",
            CreatorType::Label => "Label",
        }
    }

    pub fn next(self) -> Self {
        match self {
            CreatorType::Artist => CreatorType::Podcaster,
            CreatorType::Podcaster => CreatorType::Label,
            CreatorType::Label => CreatorType::Artist,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub youtube: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankDetails {
    pub account_name: String,
    pub account_number: String,
    pub bank_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mpesa_number: Option<String>,
}

/// Creator identity
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Creator {
    pub id: String,
    pub email: String,
    pub name: String,
    pub artist_name: String,
    pub avatar: String,
    pub cover_image: String,
    pub bio: String,
    pub creator_type: CreatorType,
    pub genres: Vec<String>,
    pub is_verified: bool,
    pub is_premium: bool,
    pub social_links: SocialLinks,
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_details: Option<BankDetails>,
}

/// Partial update applied to a creator profile; `None` leaves a field alone
#[derive(Clone, Debug, Default)]
pub struct CreatorProfileUpdate {
    pub name: Option<String>,
    pub artist_name: Option<String>,
    pub bio: Option<String>,
    pub avatar: Option<String>,
    pub cover_image: Option<String>,
    pub genres: Option<Vec<String>>,
    pub social_links: Option<SocialLinks>,
    pub bank_details: Option<BankDetails>,
}

impl CreatorProfileUpdate {
    pub fn apply(self, creator: &mut Creator) {
        if let Some(name) = self.name {
            creator.name = name;
        }
        if let Some(artist_name) = self.artist_name {
            creator.artist_name = artist_name;
        }
        if let Some(bio) = self.bio {
            creator.bio = bio;
        }
        if let Some(avatar) = self.avatar {
            creator.avatar = avatar;
        }
        if let Some(cover_image) = self.cover_image {
            creator.cover_image = cover_image;
        }
        if let Some(genres) = self.genres {
            creator.genres = genres;
        }
        if let Some(links) = self.social_links {
            creator.social_links = links;
        }
        if let Some(bank) = self.bank_details {
            creator.bank_details = Some(bank);
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatorStats {
    pub total_streams: u64,
    pub monthly_streams: u64,
    pub total_subscribers: u32,
    pub new_subscribers_this_month: u32,
    pub total_revenue: f64,
    pub monthly_revenue: f64,
    pub total_songs: u32,
    pub total_podcasts: u32,
    pub average_stream_duration: u32,
    pub top_performing_song: String,
    pub top_performing_song_id: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UploadKind {
    Song,
    Podcast,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UploadStatus {
    Draft,
    Processing,
    Published,
    Rejected,
}

impl UploadStatus {
    pub fn label(self) -> &'static str {
        match self {
            UploadStatus::Draft => "Draft",
            UploadStatus::Processing => "Processing",
            UploadStatus::Published => "Published",
            UploadStatus::Rejected => "Rejected",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatorUpload {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: UploadKind,
    pub cover: String,
    pub audio_url: String,
    pub duration: u32,
    pub status: UploadStatus,
    pub genre: String,
    pub description: String,
    pub tags: Vec<String>,
    pub release_date: String,
    pub uploaded_at: String,
    pub streams: u64,
    pub likes: u64,
    pub comments: u64,
    pub revenue: f64,
    pub is_explicit: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lyrics: Option<String>,
}

/// Partial update for an upload
#[derive(Clone, Debug, Default)]
pub struct UploadUpdate {
    pub title: Option<String>,
    pub status: Option<UploadStatus>,
    pub genre: Option<String>,
    pub description: Option<String>,
    pub tags: Option<Vec<String>>,
    pub release_date: Option<String>,
    pub is_explicit: Option<bool>,
    pub lyrics: Option<String>,
}

impl UploadUpdate {
    pub fn apply(self, upload: &mut CreatorUpload) {
        if let Some(title) = self.title {
            upload.title = title;
        }
        if let Some(status) = self.status {
            upload.status = status;
        }
        if let Some(genre) = self.genre {
            upload.genre = genre;
        }
        if let Some(description) = self.description {
            upload.description = description;
        }
        if let Some(tags) = self.tags {
            upload.tags = tags;
        }
        if let Some(release_date) = self.release_date {
            upload.release_date = release_date;
        }
        if let Some(explicit) = self.is_explicit {
            upload.is_explicit = explicit;
        }
        if let Some(lyrics) = self.lyrics {
            upload.lyrics = Some(lyrics);
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreamAnalytics {
    pub date: String,
    pub streams: u64,
    pub unique_listeners: u64,
    pub revenue: f64,
    pub avg_listen_time: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DemographicData {
    pub country: String,
    pub percentage: u8,
    pub streams: u64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DeviceData {
    pub device: String,
    pub percentage: u8,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgeGroupData {
    pub age_group: String,
    pub percentage: u8,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionTier {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub currency: String,
    pub description: String,
    pub benefits: Vec<String>,
    pub subscriber_count: u32,
    pub is_active: bool,
}

#[derive(Clone, Debug, Default)]
pub struct TierUpdate {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub description: Option<String>,
    pub benefits: Option<Vec<String>>,
    pub is_active: Option<bool>,
}

impl TierUpdate {
    pub fn apply(self, tier: &mut SubscriptionTier) {
        if let Some(name) = self.name {
            tier.name = name;
        }
        if let Some(price) = self.price {
            tier.price = price;
        }
        if let Some(description) = self.description {
            tier.description = description;
        }
        if let Some(benefits) = self.benefits {
            tier.benefits = benefits;
        }
        if let Some(active) = self.is_active {
            tier.is_active = active;
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubscriberStatus {
    Active,
    Cancelled,
    Paused,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscriber {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub avatar: String,
    pub tier_id: String,
    pub tier_name: String,
    pub subscribed_at: String,
    pub amount: f64,
    pub status: SubscriberStatus,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PayoutStatus {
    Pending,
    Processing,
    Completed,
    Failed,
}

impl PayoutStatus {
    pub fn label(self) -> &'static str {
        match self {
            PayoutStatus::Pending => "Pending",
            PayoutStatus::Processing => "Processing",
            PayoutStatus::Completed => "Completed",
            PayoutStatus::Failed => "Failed",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PayoutMethod {
    Bank,
    #[default]
    Mpesa,
    Paypal,
}

impl PayoutMethod {
    pub const ALL: [PayoutMethod; 3] = [PayoutMethod::Mpesa, PayoutMethod::Bank, PayoutMethod::Paypal];

    pub fn label(self) -> &'static str {
        match self {
            PayoutMethod::Bank => "Bank",
            PayoutMethod::Mpesa => "M-Pesa",
            PayoutMethod::Paypal => "PayPal",
        }
    }

    pub fn next(self) -> Self {
        match self {
            PayoutMethod::Mpesa => PayoutMethod::Bank,
            PayoutMethod::Bank => PayoutMethod::Paypal,
            PayoutMethod::Paypal => PayoutMethod::Mpesa,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payout {
    pub id: String,
    pub amount: f64,
    pub currency: String,
    pub status: PayoutStatus,
    pub requested_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub processed_at: Option<String>,
    pub method: PayoutMethod,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Same,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartPosition {
    pub position: u32,
    pub previous_position: u32,
    pub song_id: String,
    pub song_title: String,
    pub artist_name: String,
    pub cover: String,
    pub streams: u64,
    pub trend: Trend,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Milestone,
    NewSubscriber,
    Payout,
    UploadApproved,
    Feedback,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatorNotification {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub read: bool,
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_url: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UploadProgressStatus {
    Uploading,
    Processing,
    Complete,
    Error,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadProgress {
    pub file_name: String,
    pub progress: u8,
    pub status: UploadProgressStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

#[derive(Clone, Debug, Default)]
pub struct UploadProgressUpdate {
    pub progress: Option<u8>,
    pub status: Option<UploadProgressStatus>,
    pub error_message: Option<String>,
}

impl UploadProgressUpdate {
    pub fn apply(self, entry: &mut UploadProgress) {
        if let Some(progress) = self.progress {
            entry.progress = progress.min(100);
        }
        if let Some(status) = self.status {
            entry.status = status;
        }
        if let Some(message) = self.error_message {
            entry.error_message = Some(message);
        }
    }
}

/// Creator dashboard section
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DashboardTab {
    #[default]
    Overview,
    Uploads,
    Analytics,
    Subscribers,
    Earnings,
    Notifications,
    Live,
    Merchandise,
    Notes,
    Events,
}

impl DashboardTab {
    pub const ALL: [DashboardTab; 10] = [
        DashboardTab::Overview,
        DashboardTab::Uploads,
        DashboardTab::Analytics,
        DashboardTab::Subscribers,
        DashboardTab::Earnings,
        DashboardTab::Notifications,
        DashboardTab::Live,
        DashboardTab::Merchandise,
        DashboardTab::Notes,
        DashboardTab::Events,
    ];

    pub fn title(self) -> &'static str {
        match self {
            DashboardTab::Overview => "Overview",
            DashboardTab::Uploads => "Uploads",
            DashboardTab::Analytics => "Analytics",
            DashboardTab::Subscribers => "Subscribers",
            DashboardTab::Earnings => "Earnings",
            DashboardTab::Notifications => "Notifications",
            DashboardTab::Live => "Live",
            DashboardTab::Merchandise => "Merch",
            DashboardTab::Notes => "Notes",
            DashboardTab::Events => "Events",
        }
    }

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|t| *t == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}
