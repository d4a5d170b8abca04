//! Main content area: one scrollable page of rows plus a back stack

use crate::api::{HomeData, LibraryData, PaginatedResponse};

use super::types::{Album, Artist, Playlist, SearchCategory, SearchResult, Song, User};

/// What a page shows, used to refresh it after edits
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PageKind {
    Home,
    Browse,
    Search(String),
    Genre(String),
    Library,
    Profile,
    Playlist(String),
    Album(String),
    Artist(String),
    Listing(Listing),
}

/// Whole-catalog listings reachable from the browse page
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Listing {
    Songs,
    Artists,
    Albums,
    Playlists,
}

impl Listing {
    pub const ALL: [Listing; 4] = [Listing::Songs, Listing::Artists, Listing::Albums, Listing::Playlists];

    pub fn title(self) -> &'static str {
        match self {
            Listing::Songs => "All songs",
            Listing::Artists => "All artists",
            Listing::Albums => "All albums",
            Listing::Playlists => "All playlists",
        }
    }
}

/// Buttons on listener pages
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageAction {
    SignIn,
    SignOut,
    EditName,
    OpenStudio,
    CreatePlaylist,
    Browse(Listing),
}

/// One row of a page
#[derive(Clone, Debug, PartialEq)]
pub enum ContentItem {
    Heading(String),
    /// Plain text, not selectable
    Info(String),
    /// Songs sharing a `group` form one play queue
    Song { song: Song, group: usize },
    Album(Album),
    Artist(Artist),
    Playlist(Playlist),
    Category(SearchCategory),
    Action { label: String, action: PageAction },
}

impl ContentItem {
    pub fn is_selectable(&self) -> bool {
        !matches!(self, ContentItem::Heading(_) | ContentItem::Info(_))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ContentPage {
    pub kind: PageKind,
    pub title: String,
    pub items: Vec<ContentItem>,
    /// Index into `items`; always a selectable row when set
    pub selected: Option<usize>,
}

impl ContentPage {
    pub fn new(kind: PageKind, title: impl Into<String>, items: Vec<ContentItem>) -> Self {
        let selected = items.iter().position(ContentItem::is_selectable);
        Self {
            kind,
            title: title.into(),
            items,
            selected,
        }
    }

    pub fn selected_item(&self) -> Option<&ContentItem> {
        self.selected.and_then(|i| self.items.get(i))
    }

    pub fn move_down(&mut self) {
        if let Some(current) = self.selected {
            if let Some(offset) = self.items[current + 1..].iter().position(ContentItem::is_selectable) {
                self.selected = Some(current + 1 + offset);
            }
        }
    }

    pub fn move_up(&mut self) {
        if let Some(current) = self.selected {
            if let Some(found) = self.items[..current].iter().rposition(ContentItem::is_selectable) {
                self.selected = Some(found);
            }
        }
    }

    /// Songs of one group in page order, with the position of `song_id` in it
    pub fn song_group(&self, group: usize, song_id: &str) -> (Vec<Song>, usize) {
        let songs: Vec<Song> = self
            .items
            .iter()
            .filter_map(|item| match item {
                ContentItem::Song { song, group: g } if *g == group => Some(song.clone()),
                _ => None,
            })
            .collect();
        let index = songs.iter().position(|s| s.id == song_id).unwrap_or(0);
        (songs, index)
    }

    // ===== Builders =====

    pub fn home(data: &HomeData) -> Self {
        let mut items = Vec::new();
        push_songs(&mut items, &data.trending.title, &data.trending.songs, 0);
        push_songs(&mut items, "New releases", &data.new_releases, 1);
        push_songs(&mut items, "Recently played", &data.recently_played, 2);
        push_section(&mut items, "Made for you", &data.recommended_playlists, |p| ContentItem::Playlist(p.clone()));
        push_section(&mut items, "Featured artists", &data.featured_artists, |a| ContentItem::Artist(a.clone()));
        Self::new(PageKind::Home, data.greeting.clone(), items)
    }

    pub fn browse(categories: &[SearchCategory]) -> Self {
        let mut items = Vec::new();
        push_section(&mut items, "Browse all", categories, |c| ContentItem::Category(c.clone()));
        items.push(ContentItem::Heading("Everything".to_string()));
        items.extend(Listing::ALL.iter().map(|&listing| ContentItem::Action {
            label: listing.title().to_string(),
            action: PageAction::Browse(listing),
        }));
        Self::new(PageKind::Browse, "Search", items)
    }

    /// First page of a catalog listing
    pub fn listing<T>(listing: Listing, response: &PaginatedResponse<T>, row: impl Fn(&T) -> ContentItem) -> Self {
        let shown = if response.has_more {
            format!("Showing {} of {}", response.data.len(), response.total)
        } else {
            format!("{} in total", response.total)
        };
        let mut items = vec![ContentItem::Info(shown)];
        items.extend(response.data.iter().map(row));
        Self::new(PageKind::Listing(listing), listing.title(), items)
    }

    pub fn search(query: &str, result: &SearchResult) -> Self {
        let mut items = Vec::new();
        if result.is_empty() {
            items.push(ContentItem::Info(format!("No results for \"{}\"", query)));
        }
        push_songs(&mut items, "Songs", &result.songs, 0);
        push_section(&mut items, "Artists", &result.artists, |a| ContentItem::Artist(a.clone()));
        push_section(&mut items, "Albums", &result.albums, |a| ContentItem::Album(a.clone()));
        push_section(&mut items, "Playlists", &result.playlists, |p| ContentItem::Playlist(p.clone()));
        Self::new(PageKind::Search(query.to_string()), format!("Results for \"{}\"", query), items)
    }

    pub fn genre(name: &str, songs: &[Song]) -> Self {
        let mut items = Vec::new();
        if songs.is_empty() {
            items.push(ContentItem::Info("Nothing here yet".to_string()));
        }
        push_songs(&mut items, "Songs", songs, 0);
        Self::new(PageKind::Genre(name.to_string()), name, items)
    }

    pub fn library(data: &LibraryData) -> Self {
        let mut items = Vec::new();
        push_section(&mut items, "Playlists", &data.playlists, |p| ContentItem::Playlist(p.clone()));
        push_songs(&mut items, "Liked songs", &data.liked_songs, 0);
        push_songs(&mut items, "Downloaded", &data.downloaded_songs, 1);
        push_section(&mut items, "Artists", &data.followed_artists, |a| ContentItem::Artist(a.clone()));
        items.push(ContentItem::Action {
            label: "+ New playlist".to_string(),
            action: PageAction::CreatePlaylist,
        });
        Self::new(PageKind::Library, "Your Library", items)
    }

    pub fn signed_out_library() -> Self {
        let items = vec![
            ContentItem::Info("Sign in to see your playlists and liked songs".to_string()),
            ContentItem::Action {
                label: "Sign in".to_string(),
                action: PageAction::SignIn,
            },
        ];
        Self::new(PageKind::Library, "Your Library", items)
    }

    pub fn playlist(playlist: &Playlist) -> Self {
        let mut items = vec![ContentItem::Info(format!(
            "{} · {} songs · {}",
            playlist.owner,
            playlist.songs.len(),
            format_total(playlist.total_duration)
        ))];
        if !playlist.description.is_empty() {
            items.push(ContentItem::Info(playlist.description.clone()));
        }
        push_songs(&mut items, "Songs", &playlist.songs, 0);
        Self::new(PageKind::Playlist(playlist.id.clone()), playlist.name.clone(), items)
    }

    pub fn album(album: &Album) -> Self {
        let mut items = vec![ContentItem::Info(format!(
            "{} · {} · {}",
            album.artist,
            album.release_date,
            format_total(album.total_duration)
        ))];
        push_songs(&mut items, "Tracks", &album.songs, 0);
        Self::new(PageKind::Album(album.id.clone()), album.title.clone(), items)
    }

    pub fn artist(artist: &Artist, songs: &[Song]) -> Self {
        let mut items = vec![
            ContentItem::Info(artist.bio.clone()),
            ContentItem::Info(format!(
                "{} followers · {} monthly listeners",
                format_count(artist.followers),
                format_count(artist.monthly_listeners)
            )),
        ];
        push_songs(&mut items, "Popular", songs, 0);
        Self::new(PageKind::Artist(artist.id.clone()), artist.name.clone(), items)
    }

    pub fn profile(user: Option<&User>, creator_name: Option<&str>) -> Self {
        let mut items = Vec::new();
        match user {
            Some(user) => {
                items.push(ContentItem::Info(format!("{} <{}>", user.name, user.email)));
                items.push(ContentItem::Info(format!(
                    "{} followers · {} following{}",
                    user.followers,
                    user.following,
                    if user.is_premium { " · Premium" } else { "" }
                )));
                items.push(ContentItem::Action {
                    label: "Change display name".to_string(),
                    action: PageAction::EditName,
                });
                items.push(ContentItem::Action {
                    label: "Sign out".to_string(),
                    action: PageAction::SignOut,
                });
            }
            None => {
                items.push(ContentItem::Info("You are listening as a guest".to_string()));
                items.push(ContentItem::Action {
                    label: "Sign in".to_string(),
                    action: PageAction::SignIn,
                });
            }
        }
        let studio_label = match creator_name {
            Some(name) => format!("Open NiaTunes Studio ({})", name),
            None => "Open NiaTunes Studio".to_string(),
        };
        items.push(ContentItem::Action {
            label: studio_label,
            action: PageAction::OpenStudio,
        });
        Self::new(PageKind::Profile, "Profile", items)
    }
}

fn push_songs(items: &mut Vec<ContentItem>, heading: &str, songs: &[Song], group: usize) {
    push_section(items, heading, songs, |s| ContentItem::Song { song: s.clone(), group });
}

fn push_section<T>(items: &mut Vec<ContentItem>, heading: &str, entries: &[T], row: impl Fn(&T) -> ContentItem) {
    if entries.is_empty() {
        return;
    }
    items.push(ContentItem::Heading(heading.to_string()));
    items.extend(entries.iter().map(row));
}

/// `1h 05m` / `13m 35s`
pub fn format_total(seconds: u32) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    if hours > 0 {
        format!("{}h {:02}m", hours, minutes)
    } else {
        format!("{}m {:02}s", minutes, seconds % 60)
    }
}

/// `2.5M`, `850K`, `234`
pub fn format_count(n: u64) -> String {
    if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{}K", n / 1_000)
    } else {
        n.to_string()
    }
}

/// Content area state
#[derive(Clone, Debug, Default)]
pub struct ContentState {
    pub page: Option<ContentPage>,
    pub navigation_stack: Vec<ContentPage>,
    pub is_loading: bool,
}

impl ContentState {
    /// Replace everything, e.g. when switching tabs
    pub fn show_root(&mut self, page: ContentPage) {
        self.navigation_stack.clear();
        self.page = Some(page);
        self.is_loading = false;
    }

    /// Open a detail page on top of the current one
    pub fn push(&mut self, page: ContentPage) {
        if let Some(previous) = self.page.take() {
            self.navigation_stack.push(previous);
        }
        self.page = Some(page);
        self.is_loading = false;
    }

    /// Swap the visible page in place, keeping the selection where possible
    pub fn replace(&mut self, page: ContentPage) {
        let selected = self.page.as_ref().and_then(|p| p.selected);
        let mut page = page;
        if let Some(i) = selected {
            if page.items.get(i).is_some_and(ContentItem::is_selectable) {
                page.selected = Some(i);
            }
        }
        self.page = Some(page);
        self.is_loading = false;
    }

    /// `false` when already at the root
    pub fn back(&mut self) -> bool {
        match self.navigation_stack.pop() {
            Some(previous) => {
                self.page = Some(previous);
                true
            }
            None => false,
        }
    }

    pub fn current_kind(&self) -> Option<&PageKind> {
        self.page.as_ref().map(|p| &p.kind)
    }

    pub fn selected_item(&self) -> Option<&ContentItem> {
        self.page.as_ref().and_then(ContentPage::selected_item)
    }

    pub fn move_up(&mut self) {
        if let Some(page) = self.page.as_mut() {
            page.move_up();
        }
    }

    pub fn move_down(&mut self) {
        if let Some(page) = self.page.as_mut() {
            page.move_down();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::catalog::Catalog;

    fn library_data(catalog: &Catalog) -> LibraryData {
        LibraryData {
            playlists: catalog.playlists.clone(),
            liked_songs: catalog.songs.clone(),
            downloaded_songs: catalog.songs[2..5].to_vec(),
            followed_artists: catalog.artists[..3].to_vec(),
        }
    }

    #[test]
    fn selection_skips_headings_and_info() {
        let catalog = Catalog::seed();
        let mut page = ContentPage::playlist(&catalog.playlists[0]);
        let first = page.selected_item().cloned();
        assert!(matches!(first, Some(ContentItem::Song { .. })));

        page.move_up();
        assert_eq!(page.selected_item().cloned(), first);

        for _ in 0..20 {
            page.move_down();
        }
        assert!(matches!(page.selected_item(), Some(ContentItem::Song { song, .. }) if song.id == "song-4"));
    }

    #[test]
    fn song_groups_become_play_queues() {
        let catalog = Catalog::seed();
        let page = ContentPage::library(&library_data(&catalog));
        let (songs, index) = page.song_group(1, "song-4");
        let ids: Vec<&str> = songs.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["song-3", "song-4", "song-5"]);
        assert_eq!(index, 1);
    }

    #[test]
    fn empty_search_says_so() {
        let page = ContentPage::search("zzz", &SearchResult::default());
        assert_eq!(page.items, vec![ContentItem::Info("No results for \"zzz\"".into())]);
        assert!(page.selected.is_none());
    }

    #[test]
    fn stack_navigation() {
        let catalog = Catalog::seed();
        let mut state = ContentState::default();
        state.show_root(ContentPage::browse(&catalog.categories));
        state.push(ContentPage::album(&catalog.albums[0]));
        assert_eq!(state.current_kind(), Some(&PageKind::Album("album-1".into())));
        assert!(state.back());
        assert_eq!(state.current_kind(), Some(&PageKind::Browse));
        assert!(!state.back());
    }

    #[test]
    fn replace_keeps_the_cursor() {
        let catalog = Catalog::seed();
        let mut state = ContentState::default();
        state.show_root(ContentPage::playlist(&catalog.playlists[0]));
        state.move_down();
        let cursor = state.page.as_ref().and_then(|p| p.selected);
        state.replace(ContentPage::playlist(&catalog.playlists[0]));
        assert_eq!(state.page.as_ref().and_then(|p| p.selected), cursor);
    }

    #[test]
    fn listing_page_says_when_there_is_more() {
        let catalog = Catalog::seed();
        let response = crate::api::paginate(&catalog.artists, 1, 2);
        let page = ContentPage::listing(Listing::Artists, &response, |a| ContentItem::Artist(a.clone()));
        assert_eq!(page.kind, PageKind::Listing(Listing::Artists));
        assert_eq!(
            page.items[0],
            ContentItem::Info(format!("Showing 2 of {}", catalog.artists.len()))
        );
        assert_eq!(page.items.len(), 3);
        assert_eq!(page.selected, Some(1));
    }

    #[test]
    fn browse_page_offers_full_listings() {
        let page = ContentPage::browse(&[]);
        let actions: Vec<PageAction> = page
            .items
            .iter()
            .filter_map(|item| match item {
                ContentItem::Action { action, .. } => Some(*action),
                _ => None,
            })
            .collect();
        assert_eq!(actions, Listing::ALL.map(PageAction::Browse));
    }

    #[test]
    fn formatting_helpers() {
        assert_eq!(format_total(815), "13m 35s");
        assert_eq!(format_total(3900), "1h 05m");
        assert_eq!(format_count(2_500_000), "2.5M");
        assert_eq!(format_count(850_000), "850K");
        assert_eq!(format_count(234), "234");
    }
}
