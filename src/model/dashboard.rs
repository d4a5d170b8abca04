//! Creator dashboard state: stats, uploads, notifications, earnings

use crate::data::{self, creator as fixtures};

use super::creator::{
    AgeGroupData, ChartPosition, CreatorNotification, CreatorStats, CreatorUpload, DashboardTab,
    DemographicData, DeviceData, Payout, PayoutMethod, PayoutStatus, StreamAnalytics, Subscriber,
    SubscriptionTier, TierUpdate, UploadKind, UploadProgress, UploadProgressUpdate, UploadUpdate,
};

pub const PAYOUT_CURRENCY: &str = "USD";

#[derive(Clone, Debug)]
pub struct CreatorDashboardStore {
    pub stats: CreatorStats,
    pub uploads: Vec<CreatorUpload>,
    notifications: Vec<CreatorNotification>,
    /// Kept equal to the number of unread entries in `notifications`
    unread_notifications: usize,
    pub subscription_tiers: Vec<SubscriptionTier>,
    pub payouts: Vec<Payout>,
    pub upload_progress: Vec<UploadProgress>,
    pub is_loading: bool,
    pub active_tab: DashboardTab,
    // Read-only analytics
    pub stream_analytics: Vec<StreamAnalytics>,
    pub demographics: Vec<DemographicData>,
    pub devices: Vec<DeviceData>,
    pub age_groups: Vec<AgeGroupData>,
    pub subscribers: Vec<Subscriber>,
    pub chart_positions: Vec<ChartPosition>,
}

impl Default for CreatorDashboardStore {
    fn default() -> Self {
        Self::seeded()
    }
}

impl CreatorDashboardStore {
    pub fn seeded() -> Self {
        let notifications = fixtures::notifications();
        let unread_notifications = notifications.iter().filter(|n| !n.read).count();
        Self {
            stats: fixtures::stats(),
            uploads: fixtures::uploads(),
            notifications,
            unread_notifications,
            subscription_tiers: fixtures::subscription_tiers(),
            payouts: fixtures::payouts(),
            upload_progress: Vec::new(),
            is_loading: false,
            active_tab: DashboardTab::Overview,
            stream_analytics: fixtures::stream_analytics(),
            demographics: fixtures::demographics(),
            devices: fixtures::devices(),
            age_groups: fixtures::age_groups(),
            subscribers: fixtures::subscribers(),
            chart_positions: fixtures::chart_positions(),
        }
    }

    pub fn set_active_tab(&mut self, tab: DashboardTab) {
        self.active_tab = tab;
    }

    // ===== Uploads =====

    pub fn add_upload(&mut self, upload: CreatorUpload) {
        match upload.kind {
            UploadKind::Song => self.stats.total_songs += 1,
            UploadKind::Podcast => self.stats.total_podcasts += 1,
        }
        tracing::info!(upload_id = %upload.id, title = %upload.title, "Upload added");
        self.uploads.insert(0, upload);
    }

    pub fn update_upload(&mut self, id: &str, update: UploadUpdate) {
        if let Some(upload) = self.uploads.iter_mut().find(|u| u.id == id) {
            update.apply(upload);
        }
    }

    /// Removes the upload; stats totals are left as they are
    pub fn delete_upload(&mut self, id: &str) {
        self.uploads.retain(|u| u.id != id);
    }

    // ===== Notifications =====

    pub fn notifications(&self) -> &[CreatorNotification] {
        &self.notifications
    }

    pub fn unread_notifications(&self) -> usize {
        self.unread_notifications
    }

    pub fn mark_notification_read(&mut self, id: &str) {
        if let Some(notification) = self.notifications.iter_mut().find(|n| n.id == id) {
            if !notification.read {
                notification.read = true;
                self.unread_notifications = self.unread_notifications.saturating_sub(1);
            }
        }
    }

    pub fn mark_all_notifications_read(&mut self) {
        for notification in &mut self.notifications {
            notification.read = true;
        }
        self.unread_notifications = 0;
    }

    // ===== Upload progress =====

    pub fn add_upload_progress(&mut self, progress: UploadProgress) {
        self.upload_progress.push(progress);
    }

    pub fn update_upload_progress(&mut self, file_name: &str, update: UploadProgressUpdate) {
        if let Some(entry) = self.upload_progress.iter_mut().find(|p| p.file_name == file_name) {
            update.apply(entry);
        }
    }

    pub fn remove_upload_progress(&mut self, file_name: &str) {
        self.upload_progress.retain(|p| p.file_name != file_name);
    }

    // ===== Earnings =====

    pub fn begin_payout(&mut self) {
        self.is_loading = true;
    }

    /// Second half of a payout request, after the simulated delay
    pub fn record_payout(&mut self, amount: f64, method: PayoutMethod) -> Payout {
        let payout = Payout {
            id: data::generate_id("payout"),
            amount,
            currency: PAYOUT_CURRENCY.to_string(),
            status: PayoutStatus::Pending,
            requested_at: data::now_iso(),
            processed_at: None,
            method,
        };
        tracing::info!(payout_id = %payout.id, amount, method = method.label(), "Payout requested");
        self.payouts.insert(0, payout.clone());
        self.is_loading = false;
        payout
    }

    pub fn add_subscription_tier(&mut self, tier: SubscriptionTier) {
        self.subscription_tiers.push(tier);
    }

    pub fn update_subscription_tier(&mut self, id: &str, update: TierUpdate) {
        if let Some(tier) = self.subscription_tiers.iter_mut().find(|t| t.id == id) {
            update.apply(tier);
        }
    }
}
