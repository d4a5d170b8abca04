//! Creator events and announcements

use chrono::{Duration, SecondsFormat, Utc};

use crate::data;
use crate::model::Creator;

use super::types::{Announcement, AnnouncementKind, Event, EventKind, EventStatus, EventUpdate};

/// Days ahead a quick-added event is placed
const NEW_EVENT_LEAD_DAYS: i64 = 7;

/// A virtual event `NEW_EVENT_LEAD_DAYS` from now, hosted by `creator`
pub fn new_event(creator: &Creator, title: &str) -> Event {
    let start = Utc::now() + Duration::days(NEW_EVENT_LEAD_DAYS);
    Event {
        id: data::generate_id("event"),
        creator_id: creator.id.clone(),
        title: title.to_string(),
        description: String::new(),
        kind: EventKind::LiveStream,
        cover_image: creator.cover_image.clone(),
        start_date: start.to_rfc3339_opts(SecondsFormat::Secs, true),
        end_date: None,
        location: None,
        ticket_info: None,
        is_virtual: true,
        virtual_link: None,
        status: EventStatus::Upcoming,
        attendees: 0,
        created_at: data::now_iso(),
    }
}

/// A general announcement; the first line becomes the title
pub fn new_announcement(creator: &Creator, content: &str) -> Announcement {
    let title = content.lines().next().unwrap_or_default();
    Announcement {
        id: data::generate_id("announcement"),
        creator_id: creator.id.clone(),
        title: title.chars().take(40).collect(),
        content: content.to_string(),
        kind: AnnouncementKind::General,
        attachments: Vec::new(),
        likes: 0,
        comments: 0,
        shares: 0,
        created_at: data::now_iso(),
    }
}

/// Events and the announcements creators post alongside them
#[derive(Clone, Debug, Default)]
pub struct EventStore {
    events: Vec<Event>,
    announcements: Vec<Announcement>,
}

impl EventStore {
    pub fn new(events: Vec<Event>, announcements: Vec<Announcement>) -> Self {
        Self { events, announcements }
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn announcements(&self) -> &[Announcement] {
        &self.announcements
    }

    pub fn add_event(&mut self, event: Event) {
        tracing::debug!(event_id = %event.id, title = %event.title, "Event added");
        self.events.push(event);
    }

    pub fn update_event(&mut self, id: &str, update: EventUpdate) {
        if let Some(event) = self.events.iter_mut().find(|e| e.id == id) {
            update.apply(event);
        }
    }

    pub fn delete_event(&mut self, id: &str) {
        self.events.retain(|e| e.id != id);
    }

    /// Newest first
    pub fn add_announcement(&mut self, announcement: Announcement) {
        self.announcements.insert(0, announcement);
    }

    pub fn delete_announcement(&mut self, id: &str) {
        self.announcements.retain(|a| a.id != id);
    }

    pub fn events_by_creator<'a>(&'a self, creator_id: &'a str) -> impl Iterator<Item = &'a Event> {
        self.events.iter().filter(move |e| e.creator_id == creator_id)
    }

    pub fn announcements_by_creator<'a>(&'a self, creator_id: &'a str) -> impl Iterator<Item = &'a Announcement> {
        self.announcements.iter().filter(move |a| a.creator_id == creator_id)
    }
}
