//! Model module - Application state and data types
//!
//! Domain types and the state containers the controller mutates and the
//! view renders. Organized by responsibility:
//!
//! - `types`: Listener catalog entities and small UI enums
//! - `creator`: Creator portal entities (uploads, analytics, earnings)
//! - `social`: Social entities and their stores
//! - `playback`: The player state machine
//! - `session`: Listener and creator identities
//! - `storage`: On-disk session snapshots
//! - `catalog`: What the listener screens were last loaded with
//! - `dashboard`: Creator dashboard state
//! - `validation`: Client-side form checks
//! - `forms`: Sign-in / sign-up form state
//! - `navigation`: Tabs, overlays and transient UI state
//! - `content`: The main content list and its back stack
//! - `app_model`: Main application model owning every container

mod app_model;
mod catalog;
mod content;
mod creator;
mod dashboard;
mod forms;
mod navigation;
mod playback;
mod session;
mod storage;
mod types;

pub mod social;
pub mod validation;

pub use types::{
    Album, Artist, Playlist, RepeatMode, SearchCategory, SearchResult, Song, Tab, User,
};

pub use creator::{
    AgeGroupData, BankDetails, ChartPosition, Creator, CreatorNotification, CreatorProfileUpdate,
    CreatorStats, CreatorType, CreatorUpload, DashboardTab, DemographicData, DeviceData,
    NotificationKind, Payout, PayoutMethod, PayoutStatus, SocialLinks, StreamAnalytics, Subscriber,
    SubscriberStatus, SubscriptionTier, TierUpdate, Trend, UploadKind, UploadProgressStatus,
    UploadStatus,
};

pub use playback::{PlayerAction, PlayerStore};
pub use storage::SessionStorage;
pub use forms::{AuthForm, FormKind};
pub use navigation::{AppMode, ComposeTarget, Composer, UiState, RATING_RANGE};
pub use content::{format_count, ContentItem, ContentPage, ContentState, Listing, PageAction, PageKind};

pub use app_model::{AppModel, ModelSnapshot};
