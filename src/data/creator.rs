//! Creator portal fixtures

use crate::model::{
    AgeGroupData, BankDetails, ChartPosition, Creator, CreatorNotification, CreatorStats,
    CreatorType, CreatorUpload, DemographicData, DeviceData, NotificationKind, Payout,
    PayoutMethod, PayoutStatus, SocialLinks, StreamAnalytics, Subscriber, SubscriberStatus,
    SubscriptionTier, Trend, UploadKind, UploadStatus,
};

use super::strings;

pub fn current_creator() -> Creator {
    Creator {
        id: "creator-1".to_string(),
        email: "artist@niatunes.com".to_string(),
        name: "Alex Kimani".to_string(),
        artist_name: "Alex K".to_string(),
        avatar: "/artist-4.jpg".to_string(),
        cover_image: "/artist-header.jpg".to_string(),
        bio: "Afrobeat artist from Nairobi, Kenya. Creating music that moves the soul.".to_string(),
        creator_type: CreatorType::Artist,
        genres: strings(&["Afrobeat", "Pop", "R&B"]),
        is_verified: true,
        is_premium: true,
        social_links: SocialLinks {
            instagram: Some("@alexkmusic".to_string()),
            twitter: Some("@alexk_official".to_string()),
            youtube: Some("AlexKMusic".to_string()),
            website: Some("www.alexkmusic.com".to_string()),
        },
        created_at: "2023-01-15".to_string(),
        bank_details: Some(BankDetails {
            account_name: "Alex Kimani".to_string(),
            account_number: "1234567890".to_string(),
            bank_name: "KCB Bank".to_string(),
            mpesa_number: Some("+254712345678".to_string()),
        }),
    }
}

pub fn stats() -> CreatorStats {
    CreatorStats {
        total_streams: 2_450_000,
        monthly_streams: 156_000,
        total_subscribers: 12_500,
        new_subscribers_this_month: 850,
        total_revenue: 48_500.0,
        monthly_revenue: 3_200.0,
        total_songs: 24,
        total_podcasts: 0,
        average_stream_duration: 184,
        top_performing_song: "Nakupenda".to_string(),
        top_performing_song_id: "song-1".to_string(),
    }
}

#[allow(clippy::too_many_arguments)]
fn upload(
    n: u8,
    title: &str,
    kind: UploadKind,
    cover: &str,
    audio_url: &str,
    duration: u32,
    status: UploadStatus,
    genre: &str,
    description: &str,
    tags: &[&str],
    release_date: &str,
    uploaded_at: &str,
    counts: (u64, u64, u64, f64),
) -> CreatorUpload {
    let (streams, likes, comments, revenue) = counts;
    CreatorUpload {
        id: format!("upload-{}", n),
        title: title.to_string(),
        kind,
        cover: cover.to_string(),
        audio_url: audio_url.to_string(),
        duration,
        status,
        genre: genre.to_string(),
        description: description.to_string(),
        tags: strings(tags),
        release_date: release_date.to_string(),
        uploaded_at: uploaded_at.to_string(),
        streams,
        likes,
        comments,
        revenue,
        is_explicit: false,
        lyrics: None,
    }
}

pub fn uploads() -> Vec<CreatorUpload> {
    let mut first = upload(
        1, "Nakupenda", UploadKind::Song, "/album-2.jpg", "/audio/song1.mp3", 214,
        UploadStatus::Published, "Afrobeat", "A love song dedicated to my fans",
        &["afrobeat", "love", "kenya"], "2024-01-15", "2024-01-10",
        (520_000, 45_000, 2_300, 2_600.0),
    );
    first.lyrics = Some("Nakupenda, nakupenda...".to_string());

    vec![
        first,
        upload(
            2, "Lala Salama", UploadKind::Song, "/album-2.jpg", "/audio/song2.mp3", 192,
            UploadStatus::Published, "Afrobeat", "Sleep peacefully my love",
            &["afrobeat", "ballad"], "2024-02-20", "2024-02-15",
            (320_000, 28_000, 1_500, 1_600.0),
        ),
        upload(
            3, "Behind the Music - Episode 1", UploadKind::Podcast, "/playlist-3.jpg",
            "/audio/podcast1.mp3", 1800, UploadStatus::Published, "Talk",
            "My journey in the music industry", &["podcast", "interview", "story"],
            "2024-03-01", "2024-02-28", (45_000, 5_200, 890, 450.0),
        ),
        upload(
            4, "New Single (Unreleased)", UploadKind::Song, "/album-1.jpg", "", 0,
            UploadStatus::Draft, "Afrobeat", "Coming soon...", &["afrobeat", "new"],
            "", "2024-03-10", (0, 0, 0, 0.0),
        ),
        upload(
            5, "Summer Vibes", UploadKind::Song, "/album-3.jpg", "/audio/song3.mp3", 201,
            UploadStatus::Processing, "Pop", "Feel good summer track",
            &["pop", "summer", "dance"], "2024-03-20", "2024-03-15", (0, 0, 0, 0.0),
        ),
    ]
}

pub fn stream_analytics() -> Vec<StreamAnalytics> {
    [
        (1, 4200, 3800, 84.0, 165),
        (2, 5100, 4500, 102.0, 172),
        (3, 4800, 4200, 96.0, 168),
        (4, 5500, 4900, 110.0, 180),
        (5, 6200, 5400, 124.0, 185),
        (6, 5800, 5100, 116.0, 178),
        (7, 6500, 5800, 130.0, 190),
        (8, 7200, 6400, 144.0, 195),
        (9, 6800, 6000, 136.0, 188),
        (10, 7500, 6700, 150.0, 192),
        (11, 8100, 7200, 162.0, 198),
        (12, 7900, 7000, 158.0, 194),
        (13, 8500, 7600, 170.0, 200),
        (14, 9200, 8200, 184.0, 205),
        (15, 8800, 7900, 176.0, 202),
    ]
    .into_iter()
    .map(|(day, streams, unique_listeners, revenue, avg_listen_time)| StreamAnalytics {
        date: format!("2024-03-{:02}", day),
        streams,
        unique_listeners,
        revenue,
        avg_listen_time,
    })
    .collect()
}

pub fn demographics() -> Vec<DemographicData> {
    [
        ("Kenya", 45, 1_102_500),
        ("Nigeria", 18, 441_000),
        ("Tanzania", 12, 294_000),
        ("Uganda", 10, 245_000),
        ("South Africa", 8, 196_000),
        ("Others", 7, 171_500),
    ]
    .into_iter()
    .map(|(country, percentage, streams)| DemographicData {
        country: country.to_string(),
        percentage,
        streams,
    })
    .collect()
}

pub fn devices() -> Vec<DeviceData> {
    [("Mobile", 72), ("Desktop", 18), ("Tablet", 7), ("Smart Speaker", 3)]
        .into_iter()
        .map(|(device, percentage)| DeviceData {
            device: device.to_string(),
            percentage,
        })
        .collect()
}

pub fn age_groups() -> Vec<AgeGroupData> {
    [("18-24", 35), ("25-34", 32), ("35-44", 18), ("45-54", 10), ("55+", 5)]
        .into_iter()
        .map(|(age_group, percentage)| AgeGroupData {
            age_group: age_group.to_string(),
            percentage,
        })
        .collect()
}

pub fn subscription_tiers() -> Vec<SubscriptionTier> {
    let tier = |n: u8, name: &str, price: f64, description: &str, benefits: &[&str], subscriber_count: u32| {
        SubscriptionTier {
            id: format!("tier-{}", n),
            name: name.to_string(),
            price,
            currency: "USD".to_string(),
            description: description.to_string(),
            benefits: strings(benefits),
            subscriber_count,
            is_active: true,
        }
    };

    vec![
        tier(
            1,
            "Fan Club",
            2.99,
            "Support your favorite artist",
            &["Exclusive updates", "Early access to new releases", "Fan badge on profile"],
            8500,
        ),
        tier(
            2,
            "Super Fan",
            5.99,
            "Get closer to the music",
            &[
                "All Fan Club benefits",
                "Behind-the-scenes content",
                "Monthly live Q&A",
                "Exclusive merchandise discounts",
            ],
            3200,
        ),
        tier(
            3,
            "VIP",
            12.99,
            "The ultimate fan experience",
            &[
                "All Super Fan benefits",
                "1-on-1 video call monthly",
                "Free concert tickets",
                "Signed merchandise",
                "Name in album credits",
            ],
            800,
        ),
    ]
}

pub fn subscribers() -> Vec<Subscriber> {
    [
        (1, "Jane Wanjiku", 2, "Super Fan", "2024-02-15", 5.99),
        (2, "John Ochieng", 1, "Fan Club", "2024-03-01", 2.99),
        (3, "Mary Atieno", 3, "VIP", "2024-01-20", 12.99),
    ]
    .into_iter()
    .map(|(n, name, tier_n, tier_name, subscribed_at, amount)| Subscriber {
        id: format!("sub-{}", n),
        user_id: format!("user-{}", n),
        name: name.to_string(),
        avatar: format!("/artist-{}.jpg", n),
        tier_id: format!("tier-{}", tier_n),
        tier_name: tier_name.to_string(),
        subscribed_at: subscribed_at.to_string(),
        amount,
        status: SubscriberStatus::Active,
    })
    .collect()
}

pub fn payouts() -> Vec<Payout> {
    vec![
        Payout {
            id: "payout-1".to_string(),
            amount: 2800.0,
            currency: "USD".to_string(),
            status: PayoutStatus::Completed,
            requested_at: "2024-02-28".to_string(),
            processed_at: Some("2024-03-01".to_string()),
            method: PayoutMethod::Mpesa,
        },
        Payout {
            id: "payout-2".to_string(),
            amount: 3200.0,
            currency: "USD".to_string(),
            status: PayoutStatus::Completed,
            requested_at: "2024-01-31".to_string(),
            processed_at: Some("2024-02-02".to_string()),
            method: PayoutMethod::Bank,
        },
        Payout {
            id: "payout-3".to_string(),
            amount: 3500.0,
            currency: "USD".to_string(),
            status: PayoutStatus::Processing,
            requested_at: "2024-03-28".to_string(),
            processed_at: None,
            method: PayoutMethod::Mpesa,
        },
    ]
}

pub fn chart_positions() -> Vec<ChartPosition> {
    [
        (3, 5, 1, "Nakupenda", "/album-2.jpg", 520_000, Trend::Up),
        (12, 10, 2, "Lala Salama", "/album-2.jpg", 320_000, Trend::Down),
        (28, 28, 3, "Behind the Music - Episode 1", "/playlist-3.jpg", 45_000, Trend::Same),
    ]
    .into_iter()
    .map(|(position, previous_position, upload_n, title, cover, streams, trend)| ChartPosition {
        position,
        previous_position,
        song_id: format!("upload-{}", upload_n),
        song_title: title.to_string(),
        artist_name: "Alex K".to_string(),
        cover: cover.to_string(),
        streams,
        trend,
    })
    .collect()
}

pub fn notifications() -> Vec<CreatorNotification> {
    [
        (
            1,
            NotificationKind::Milestone,
            "2 Million Streams!",
            "Congratulations! You have reached 2 million total streams on NiaTunes.",
            false,
            "2024-03-15T10:30:00",
        ),
        (
            2,
            NotificationKind::NewSubscriber,
            "New VIP Subscriber",
            "Mary Atieno just subscribed to your VIP tier!",
            false,
            "2024-03-14T16:45:00",
        ),
        (
            3,
            NotificationKind::Payout,
            "Payout Processed",
            "Your payout of $3,200 has been processed to your bank account.",
            true,
            "2024-03-01T09:00:00",
        ),
        (
            4,
            NotificationKind::UploadApproved,
            "Song Published",
            "Your song \"Lala Salama\" has been published successfully.",
            true,
            "2024-02-20T14:20:00",
        ),
    ]
    .into_iter()
    .map(|(n, kind, title, message, read, created_at)| CreatorNotification {
        id: format!("notif-{}", n),
        kind,
        title: title.to_string(),
        message: message.to_string(),
        read,
        created_at: created_at.to_string(),
        action_url: None,
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixtures_match_dashboard_expectations() {
        assert_eq!(uploads().len(), 5);
        assert_eq!(subscription_tiers().len(), 3);
        assert_eq!(payouts().len(), 3);
        assert_eq!(notifications().iter().filter(|n| !n.read).count(), 2);
        assert_eq!(stream_analytics().len(), 15);
        assert_eq!(stream_analytics()[0].date, "2024-03-01");
    }

    #[test]
    fn demographics_add_up_to_one_hundred() {
        let total: u32 = demographics().iter().map(|d| d.percentage as u32).sum();
        assert_eq!(total, 100);
    }
}
