//! Core type definitions for the listener side of the application

use serde::{Deserialize, Serialize};

/// A playable track
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Song {
    pub id: String,
    pub title: String,
    pub artist: String,
    pub artist_id: String,
    pub album: String,
    pub album_id: String,
    pub cover: String,
    /// Length in seconds
    pub duration: u32,
    pub url: String,
    pub genre: String,
    pub release_date: String,
    pub plays: u64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artist {
    pub id: String,
    pub name: String,
    pub avatar: String,
    pub header_image: String,
    pub bio: String,
    pub followers: u64,
    pub monthly_listeners: u64,
    pub genres: Vec<String>,
    pub is_verified: bool,
}

/// A read-only collection of songs released together
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Album {
    pub id: String,
    pub title: String,
    pub artist: String,
    pub artist_id: String,
    pub cover: String,
    pub release_date: String,
    pub songs: Vec<Song>,
    pub total_duration: u32,
}

/// A user-editable collection of songs
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Playlist {
    pub id: String,
    pub name: String,
    pub description: String,
    pub cover: String,
    pub owner: String,
    pub owner_id: String,
    pub songs: Vec<Song>,
    pub is_public: bool,
    pub created_at: String,
    pub total_duration: u32,
}

/// Listener identity
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    pub avatar: String,
    pub is_premium: bool,
    pub followers: u32,
    pub following: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchCategory {
    pub id: String,
    pub name: String,
    pub color: String,
    pub icon: String,
}

/// Combined results of a catalog search
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub songs: Vec<Song>,
    pub artists: Vec<Artist>,
    pub albums: Vec<Album>,
    pub playlists: Vec<Playlist>,
}

impl SearchResult {
    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
            && self.artists.is_empty()
            && self.albums.is_empty()
            && self.playlists.is_empty()
    }
}

/// Repeat mode state
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepeatMode {
    #[default]
    None,
    All,
    One,
}

impl RepeatMode {
    pub fn next(self) -> Self {
        match self {
            RepeatMode::None => RepeatMode::All,
            RepeatMode::All => RepeatMode::One,
            RepeatMode::One => RepeatMode::None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RepeatMode::None => "Off",
            RepeatMode::All => "All",
            RepeatMode::One => "One",
        }
    }
}

/// Bottom-navigation tab of the listener app
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    Home,
    Search,
    Library,
    Profile,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Home, Tab::Search, Tab::Library, Tab::Profile];

    pub fn next(self) -> Self {
        match self {
            Tab::Home => Tab::Search,
            Tab::Search => Tab::Library,
            Tab::Library => Tab::Profile,
            Tab::Profile => Tab::Home,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Tab::Home => Tab::Profile,
            Tab::Search => Tab::Home,
            Tab::Library => Tab::Search,
            Tab::Profile => Tab::Library,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Tab::Home => "Home",
            Tab::Search => "Search",
            Tab::Library => "Library",
            Tab::Profile => "Profile",
        }
    }

    pub fn index(self) -> usize {
        Tab::ALL.iter().position(|t| *t == self).unwrap_or(0)
    }
}
