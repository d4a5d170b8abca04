//! Social feature fixtures

use crate::model::social::{
    Announcement, AnnouncementKind, ArtistNote, CanvasStatus, CanvasVideo, ChatParticipant,
    CollaborationPartner, CollaborationPost, Comment, CommentKind, Contact, Conversation, Event,
    EventKind, EventLocation, EventStatus, IndividualPost, LiveStream, MerchCategory, Merchandise,
    Message, MessageKind, PostEngagement, Review, SharedSong, ShippingInfo, SongSocialLinks,
    StreamStatus, TicketInfo, Tip, TipGift, TotalEngagement,
};

use super::strings;

fn text(value: &str) -> String {
    value.to_string()
}

fn some(value: &str) -> Option<String> {
    Some(value.to_string())
}

pub fn merchandise() -> Vec<Merchandise> {
    vec![
        Merchandise {
            id: text("merch-1"),
            creator_id: text("creator-1"),
            name: text("Alex K Official T-Shirt"),
            description: text("Premium cotton t-shirt with Alex K logo. Available in multiple colors."),
            price: 25.0,
            currency: text("USD"),
            images: strings(&["/playlist-1.jpg", "/playlist-2.jpg"]),
            category: MerchCategory::Clothing,
            sizes: Some(strings(&["S", "M", "L", "XL", "XXL"])),
            colors: Some(strings(&["Black", "White", "Red"])),
            stock: 150,
            sold: 47,
            is_available: true,
            created_at: text("2024-01-15"),
            shipping_info: Some(ShippingInfo {
                weight: 0.3,
                dimensions: text("30x20x5 cm"),
                shipping_cost: 5.0,
            }),
        },
        Merchandise {
            id: text("merch-2"),
            creator_id: text("creator-1"),
            name: text("Nakupenda Album Vinyl"),
            description: text("Limited edition vinyl of the hit album Nakupenda. Signed by Alex K."),
            price: 45.0,
            currency: text("USD"),
            images: strings(&["/album-2.jpg"]),
            category: MerchCategory::Physical,
            sizes: None,
            colors: None,
            stock: 100,
            sold: 23,
            is_available: true,
            created_at: text("2024-02-01"),
            shipping_info: Some(ShippingInfo {
                weight: 0.5,
                dimensions: text("32x32x1 cm"),
                shipping_cost: 8.0,
            }),
        },
        Merchandise {
            id: text("merch-3"),
            creator_id: text("creator-teremi"),
            name: text("Teremi King Hoodie"),
            description: text("Stay warm with this premium Teremi King hoodie. Perfect for any season."),
            price: 55.0,
            currency: text("USD"),
            images: strings(&["/teremi-king.jpg"]),
            category: MerchCategory::Clothing,
            sizes: Some(strings(&["M", "L", "XL"])),
            colors: Some(strings(&["Black", "Green"])),
            stock: 80,
            sold: 32,
            is_available: true,
            created_at: text("2024-02-20"),
            shipping_info: Some(ShippingInfo {
                weight: 0.8,
                dimensions: text("40x30x10 cm"),
                shipping_cost: 10.0,
            }),
        },
        Merchandise {
            id: text("merch-4"),
            creator_id: text("creator-1"),
            name: text("Concert Tickets - Nairobi"),
            description: text("VIP tickets to the upcoming Nairobi concert. Meet & greet included!"),
            price: 80.0,
            currency: text("USD"),
            images: strings(&["/trending-hero.jpg"]),
            category: MerchCategory::Tickets,
            sizes: None,
            colors: None,
            stock: 200,
            sold: 156,
            is_available: true,
            created_at: text("2024-03-01"),
            shipping_info: None,
        },
        Merchandise {
            id: text("merch-5"),
            creator_id: text("creator-1"),
            name: text("Digital Download Pack"),
            description: text("Get all Alex K songs in high-quality FLAC format. Includes bonus tracks."),
            price: 15.0,
            currency: text("USD"),
            images: strings(&["/album-art.jpg"]),
            category: MerchCategory::Digital,
            sizes: None,
            colors: None,
            stock: 999_999,
            sold: 312,
            is_available: true,
            created_at: text("2024-01-10"),
            shipping_info: None,
        },
    ]
}

pub fn events() -> Vec<Event> {
    vec![
        Event {
            id: text("event-1"),
            creator_id: text("creator-1"),
            title: text("Alex K Live in Nairobi"),
            description: text("An unforgettable night of Afrobeat music! Join Alex K for his biggest concert yet."),
            kind: EventKind::Concert,
            cover_image: text("/trending-hero.jpg"),
            start_date: text("2024-04-15T19:00:00"),
            end_date: some("2024-04-15T23:00:00"),
            location: Some(EventLocation {
                venue: text("KICC Grounds"),
                address: text("Harambee Avenue"),
                city: text("Nairobi"),
                country: text("Kenya"),
            }),
            ticket_info: Some(TicketInfo {
                price: 50.0,
                currency: text("USD"),
                available_tickets: 500,
                sold_tickets: 345,
                ticket_link: some("https://tickets.niatunes.com/alex-k-nairobi"),
            }),
            is_virtual: false,
            virtual_link: None,
            status: EventStatus::Upcoming,
            attendees: 345,
            created_at: text("2024-02-15"),
        },
        Event {
            id: text("event-2"),
            creator_id: text("creator-1"),
            title: text("East African Tour 2024"),
            description: text("Alex K is going on tour! Catch him in Nairobi, Kampala, Dar es Salaam, and Kigali."),
            kind: EventKind::Tour,
            cover_image: text("/artist-header.jpg"),
            start_date: text("2024-05-01"),
            end_date: some("2024-05-30"),
            location: None,
            ticket_info: None,
            is_virtual: false,
            virtual_link: None,
            status: EventStatus::Upcoming,
            attendees: 1200,
            created_at: text("2024-03-01"),
        },
        Event {
            id: text("event-3"),
            creator_id: text("creator-teremi"),
            title: text("Teremi King Album Drop Party"),
            description: text("Celebrate the release of Teremi King's debut album with an exclusive listening party."),
            kind: EventKind::Release,
            cover_image: text("/teremi-king.jpg"),
            start_date: text("2024-03-25T18:00:00"),
            end_date: None,
            location: Some(EventLocation {
                venue: text("The Alchemist"),
                address: text("Parklands Road"),
                city: text("Nairobi"),
                country: text("Kenya"),
            }),
            ticket_info: None,
            is_virtual: false,
            virtual_link: None,
            status: EventStatus::Upcoming,
            attendees: 89,
            created_at: text("2024-03-10"),
        },
        Event {
            id: text("event-4"),
            creator_id: text("creator-1"),
            title: text("Virtual Meet & Greet"),
            description: text("Join Alex K for an exclusive virtual meet and greet. Limited spots available!"),
            kind: EventKind::MeetGreet,
            cover_image: text("/artist-4.jpg"),
            start_date: text("2024-03-30T15:00:00"),
            end_date: None,
            location: None,
            ticket_info: Some(TicketInfo {
                price: 20.0,
                currency: text("USD"),
                available_tickets: 100,
                sold_tickets: 67,
                ticket_link: None,
            }),
            is_virtual: true,
            virtual_link: some("https://meet.niatunes.com/alex-k-meet-greet"),
            status: EventStatus::Upcoming,
            attendees: 67,
            created_at: text("2024-03-15"),
        },
    ]
}

pub fn announcements() -> Vec<Announcement> {
    vec![
        Announcement {
            id: text("announce-1"),
            creator_id: text("creator-1"),
            title: text("New Single Dropping Soon!"),
            content: text("I've been working on something special. My new single \"Mambo Vipi\" drops next Friday! Pre-save link in bio."),
            kind: AnnouncementKind::SingleRelease,
            attachments: strings(&["/album-1.jpg"]),
            likes: 2340,
            comments: 456,
            shares: 189,
            created_at: text("2024-03-20T10:00:00"),
        },
        Announcement {
            id: text("announce-2"),
            creator_id: text("creator-teremi"),
            title: text("Just Hit 100K Streams!"),
            content: text("Thank you to all my fans! We just hit 100,000 streams on NiaTunes. This is just the beginning!"),
            kind: AnnouncementKind::Milestone,
            attachments: strings(&["/teremi-king.jpg"]),
            likes: 1567,
            comments: 234,
            shares: 89,
            created_at: text("2024-03-18T14:30:00"),
        },
        Announcement {
            id: text("announce-3"),
            creator_id: text("creator-1"),
            title: text("Collaboration with Zahara!"),
            content: text("Excited to announce my upcoming collaboration with the amazing Zahara! Stay tuned for \"Nakupenda Remix\" dropping next month!"),
            kind: AnnouncementKind::Collaboration,
            attachments: strings(&["/artist-1.jpg", "/artist-4.jpg"]),
            likes: 5678,
            comments: 892,
            shares: 1234,
            created_at: text("2024-03-15T09:00:00"),
        },
    ]
}

pub fn canvas_videos() -> Vec<CanvasVideo> {
    [
        ("canvas-1", "song-1", "creator-1", "/canvas/nakupenda-canvas.mp4", "/album-2.jpg", 15, 125_000, "2024-01-15"),
        ("canvas-2", "song-2", "creator-1", "/canvas/lala-salama-canvas.mp4", "/album-2.jpg", 12, 89_000, "2024-02-20"),
        ("canvas-3", "upload-3", "creator-teremi", "/canvas/teremi-canvas.mp4", "/teremi-king.jpg", 18, 45_000, "2024-03-10"),
    ]
    .into_iter()
    .map(|(id, song_id, creator_id, video_url, thumbnail_url, duration, views, created_at)| CanvasVideo {
        id: text(id),
        song_id: text(song_id),
        creator_id: text(creator_id),
        video_url: text(video_url),
        thumbnail_url: text(thumbnail_url),
        duration,
        status: CanvasStatus::Active,
        views,
        created_at: text(created_at),
    })
    .collect()
}

pub fn conversations() -> Vec<Conversation> {
    vec![
        Conversation {
            id: text("conv-1"),
            participants: vec![
                ChatParticipant {
                    id: text("user-1"),
                    name: text("Jane Wanjiku"),
                    avatar: text("/artist-1.jpg"),
                    is_online: true,
                    last_seen: some("2024-03-20T10:30:00"),
                },
                ChatParticipant {
                    id: text("current-user"),
                    name: text("Alex K"),
                    avatar: text("/artist-4.jpg"),
                    is_online: true,
                    last_seen: None,
                },
            ],
            last_message: Message {
                id: text("msg-3"),
                conversation_id: text("conv-1"),
                sender_id: text("user-1"),
                kind: MessageKind::Song,
                content: text("Check out this new song!"),
                media_url: None,
                song_info: Some(SharedSong {
                    song_id: text("song-1"),
                    title: text("Nakupenda"),
                    artist: text("Alex K"),
                    cover: text("/album-2.jpg"),
                }),
                reply_to: None,
                is_read: false,
                created_at: text("2024-03-20T10:30:00"),
            },
            unread_count: 2,
            is_group: false,
            group_name: None,
            group_avatar: None,
            created_at: text("2024-01-15"),
        },
        Conversation {
            id: text("conv-2"),
            participants: vec![ChatParticipant {
                id: text("user-2"),
                name: text("Music Lovers Group"),
                avatar: text("/playlist-1.jpg"),
                is_online: false,
                last_seen: some("2024-03-19T18:00:00"),
            }],
            last_message: Message {
                id: text("msg-5"),
                conversation_id: text("conv-2"),
                sender_id: text("user-3"),
                kind: MessageKind::Text,
                content: text("Who's going to the concert next week?"),
                media_url: None,
                song_info: None,
                reply_to: None,
                is_read: true,
                created_at: text("2024-03-19T18:00:00"),
            },
            unread_count: 0,
            is_group: true,
            group_name: some("Music Lovers"),
            group_avatar: some("/playlist-1.jpg"),
            created_at: text("2024-02-01"),
        },
    ]
}

pub fn contacts() -> Vec<Contact> {
    [
        (1, "Jane Wanjiku", "+254712345678", true, true, 12),
        (2, "John Ochieng", "+254723456789", true, false, 5),
        (3, "Mary Atieno", "+254734567890", false, false, 0),
    ]
    .into_iter()
    .map(|(n, name, phone, on_platform, is_friend, mutual_friends)| Contact {
        id: format!("contact-{}", n),
        name: text(name),
        avatar: format!("/artist-{}.jpg", n),
        phone_number: some(phone),
        is_on_nia_tunes: on_platform,
        is_friend,
        mutual_friends,
    })
    .collect()
}

/// Address book entries a contact sync finds on the device
pub fn device_contacts() -> Vec<Contact> {
    [
        (2, "John Ochieng", "+254723456789", true, false, 5),
        (4, "Grace Njeri", "+254745678901", true, false, 3),
        (5, "Peter Mwangi", "+254756789012", false, false, 1),
    ]
    .into_iter()
    .map(|(n, name, phone, on_platform, is_friend, mutual_friends)| Contact {
        id: format!("contact-{}", n),
        name: text(name),
        avatar: format!("/artist-{}.jpg", n),
        phone_number: some(phone),
        is_on_nia_tunes: on_platform,
        is_friend,
        mutual_friends,
    })
    .collect()
}

pub fn comments() -> Vec<Comment> {
    let reply = Comment {
        id: text("reply-1"),
        song_id: text("song-1"),
        user_id: text("creator-1"),
        user_name: text("Alex K"),
        user_avatar: text("/artist-4.jpg"),
        content: text("Thank you! Glad you love it!"),
        kind: CommentKind::Text,
        video_url: None,
        likes: 89,
        replies: Vec::new(),
        is_pinned: false,
        created_at: text("2024-01-16T10:00:00"),
    };

    vec![
        Comment {
            id: text("comment-1"),
            song_id: text("song-1"),
            user_id: text("user-1"),
            user_name: text("Jane Wanjiku"),
            user_avatar: text("/artist-1.jpg"),
            content: text("This song is fire! Can't stop listening to it!"),
            kind: CommentKind::Text,
            video_url: None,
            likes: 234,
            replies: vec![reply],
            is_pinned: true,
            created_at: text("2024-01-15T14:30:00"),
        },
        Comment {
            id: text("comment-2"),
            song_id: text("song-1"),
            user_id: text("user-2"),
            user_name: text("John Ochieng"),
            user_avatar: text("/artist-2.jpg"),
            content: text("Video reaction"),
            kind: CommentKind::VideoReaction,
            video_url: some("/reactions/reaction-1.mp4"),
            likes: 567,
            replies: Vec::new(),
            is_pinned: false,
            created_at: text("2024-01-18T16:45:00"),
        },
    ]
}

pub fn reviews() -> Vec<Review> {
    vec![
        Review {
            id: text("review-1"),
            song_id: text("song-1"),
            user_id: text("user-1"),
            user_name: text("Jane Wanjiku"),
            user_avatar: text("/artist-1.jpg"),
            rating: 5,
            review: text("Absolute masterpiece! The production quality is incredible and the lyrics are so meaningful. Alex K never disappoints!"),
            video_reaction: None,
            likes: 123,
            is_verified_purchase: true,
            created_at: text("2024-01-20"),
        },
        Review {
            id: text("review-2"),
            song_id: text("song-1"),
            user_id: text("user-3"),
            user_name: text("Mary Atieno"),
            user_avatar: text("/artist-3.jpg"),
            rating: 4,
            review: text("Great song! Love the Afrobeat vibes. Would love to hear more collaborations like this."),
            video_reaction: None,
            likes: 67,
            is_verified_purchase: false,
            created_at: text("2024-01-22"),
        },
    ]
}

pub fn artist_notes() -> Vec<ArtistNote> {
    vec![
        ArtistNote {
            id: text("note-1"),
            creator_id: text("creator-1"),
            song_id: some("song-1"),
            album_id: None,
            title: text("The Story Behind Nakupenda"),
            content: text("I wrote this song during a rainy night in Nairobi. It was inspired by a special someone who showed me what true love means. Every lyric comes from the heart. I hope this song resonates with anyone who has ever been in love."),
            attachments: strings(&["/album-2.jpg", "/artist-4.jpg"]),
            is_pinned: true,
            likes: 3456,
            created_at: text("2024-01-16"),
        },
        ArtistNote {
            id: text("note-2"),
            creator_id: text("creator-teremi"),
            song_id: some("upload-3"),
            album_id: None,
            title: text("My Journey to This Moment"),
            content: text("This song represents years of hard work, sacrifices, and believing in myself. From performing in small clubs to now having my music on NiaTunes - it's been an incredible journey. Thank you to everyone who supported me along the way."),
            attachments: strings(&["/teremi-king.jpg"]),
            is_pinned: false,
            likes: 1890,
            created_at: text("2024-03-12"),
        },
    ]
}

pub fn collaboration_posts() -> Vec<CollaborationPost> {
    vec![CollaborationPost {
        id: text("collab-1"),
        primary_creator_id: text("creator-1"),
        collaborators: vec![
            CollaborationPartner {
                creator_id: text("creator-1"),
                name: text("Alex K"),
                avatar: text("/artist-4.jpg"),
                has_approved: true,
                posted_at: some("2024-03-15T10:00:00"),
            },
            CollaborationPartner {
                creator_id: text("artist-1"),
                name: text("Zahara"),
                avatar: text("/artist-1.jpg"),
                has_approved: true,
                posted_at: some("2024-03-15T10:05:00"),
            },
        ],
        song_id: text("song-1"),
        title: text("Nakupenda Remix Out Now!"),
        description: text("Two voices, one heart. The Nakupenda Remix featuring the incredible Zahara is now live on NiaTunes! Stream it now and let us know what you think!"),
        cover_image: text("/album-2.jpg"),
        is_posted_on_all: true,
        individual_posts: vec![
            IndividualPost {
                creator_id: text("creator-1"),
                post_id: text("post-1"),
                is_posted: true,
                engagement: PostEngagement { likes: 5678, comments: 892, shares: 1234 },
            },
            IndividualPost {
                creator_id: text("artist-1"),
                post_id: text("post-2"),
                is_posted: true,
                engagement: PostEngagement { likes: 8901, comments: 1234, shares: 2345 },
            },
        ],
        total_engagement: TotalEngagement {
            likes: 14_579,
            comments: 2_126,
            shares: 3_579,
            streams: 125_000,
        },
        created_at: text("2024-03-15"),
    }]
}

pub fn live_streams() -> Vec<LiveStream> {
    vec![
        LiveStream {
            id: text("live-1"),
            creator_id: text("creator-1"),
            creator_name: text("Alex K"),
            creator_avatar: text("/artist-4.jpg"),
            title: text("Live Studio Session - Creating New Music!"),
            thumbnail_url: text("/artist-header.jpg"),
            status: StreamStatus::Ended,
            scheduled_at: None,
            started_at: some("2024-03-18T20:00:00"),
            ended_at: some("2024-03-18T22:30:00"),
            viewers: 0,
            peak_viewers: 3456,
            total_views: 12_500,
            duration: 9000,
            tips: vec![
                Tip {
                    id: text("tip-1"),
                    stream_id: text("live-1"),
                    sender_id: text("user-1"),
                    sender_name: text("Jane Wanjiku"),
                    sender_avatar: text("/artist-1.jpg"),
                    amount: 50.0,
                    currency: text("USD"),
                    message: some("Love your music! Keep creating!"),
                    gift_type: some("rose"),
                    created_at: text("2024-03-18T20:15:00"),
                },
                Tip {
                    id: text("tip-2"),
                    stream_id: text("live-1"),
                    sender_id: text("user-2"),
                    sender_name: text("John Ochieng"),
                    sender_avatar: text("/artist-2.jpg"),
                    amount: 100.0,
                    currency: text("USD"),
                    message: some("This is amazing! Can't wait for the new album!"),
                    gift_type: some("diamond"),
                    created_at: text("2024-03-18T20:30:00"),
                },
            ],
            total_tips: 450.0,
            comments: Vec::new(),
            is_recording: true,
            recording_url: some("/recordings/live-1-recording.mp4"),
        },
        LiveStream {
            id: text("live-2"),
            creator_id: text("creator-teremi"),
            creator_name: text("Teremi King"),
            creator_avatar: text("/teremi-king.jpg"),
            title: text("Q&A with Teremi King - Ask Me Anything!"),
            thumbnail_url: text("/teremi-king.jpg"),
            status: StreamStatus::Scheduled,
            scheduled_at: some("2024-03-25T19:00:00"),
            started_at: None,
            ended_at: None,
            viewers: 0,
            peak_viewers: 0,
            total_views: 0,
            duration: 0,
            tips: Vec::new(),
            total_tips: 0.0,
            comments: Vec::new(),
            is_recording: false,
            recording_url: None,
        },
    ]
}

pub fn tip_gifts() -> Vec<TipGift> {
    [
        (1, "Rose", "🌹", 1.0, "float"),
        (2, "Heart", "❤️", 5.0, "pulse"),
        (3, "Star", "⭐", 10.0, "sparkle"),
        (4, "Diamond", "💎", 50.0, "shine"),
        (5, "Crown", "👑", 100.0, "royal"),
        (6, "Rocket", "🚀", 500.0, "fly"),
    ]
    .into_iter()
    .map(|(n, name, icon, price, animation)| TipGift {
        id: format!("gift-{}", n),
        name: text(name),
        icon: text(icon),
        price,
        currency: text("USD"),
        animation: text(animation),
    })
    .collect()
}

pub fn song_social_links() -> Vec<SongSocialLinks> {
    vec![
        SongSocialLinks {
            song_id: text("song-1"),
            youtube_url: some("https://youtube.com/watch?v=nakupenda"),
            spotify_url: some("https://open.spotify.com/track/nakupenda"),
            apple_music_url: some("https://music.apple.com/song/nakupenda"),
            tiktok_url: some("https://tiktok.com/music/nakupenda"),
            instagram_reel_url: some("https://instagram.com/reel/nakupenda"),
            ..SongSocialLinks::default()
        },
        SongSocialLinks {
            song_id: text("upload-3"),
            youtube_url: some("https://youtube.com/watch?v=teremi-debut"),
            audiomack_url: some("https://audiomack.com/teremiking/song/debut"),
            boomplay_url: some("https://boomplay.com/song/teremi-debut"),
            ..SongSocialLinks::default()
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixture_counts() {
        assert_eq!(merchandise().len(), 5);
        assert_eq!(events().len(), 4);
        assert_eq!(announcements().len(), 3);
        assert_eq!(canvas_videos().len(), 3);
        assert_eq!(conversations().len(), 2);
        assert_eq!(contacts().len(), 3);
        assert_eq!(live_streams().len(), 2);
        assert_eq!(tip_gifts().len(), 6);
    }

    #[test]
    fn gifts_are_priced_in_ascending_order() {
        let prices: Vec<f64> = tip_gifts().iter().map(|g| g.price).collect();
        assert!(prices.windows(2).all(|w| w[0] < w[1]));
    }
}
