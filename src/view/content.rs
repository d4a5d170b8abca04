//! Main content area rendering (listener pages)

use std::collections::HashMap;
use std::str::FromStr;

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, ListItem, Paragraph},
    Frame,
};
use ratatui::widgets::Padding;

use crate::model::{format_count, ContentItem, ContentPage, ContentState, Song, UiState};
use super::utils::{
    border_style, calculate_num_width, format_duration, render_scrollable_list, row_style, truncate_string,
};

pub fn render_main_content(
    frame: &mut Frame,
    area: Rect,
    ui_state: &UiState,
    content_state: &ContentState,
    current_song: Option<&Song>,
) {
    let is_focused = !ui_state.has_overlay() && !ui_state.search_editing;

    if content_state.is_loading {
        let loading = Paragraph::new("Loading...")
            .style(Style::default().fg(Color::Yellow))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!(" {} ", ui_state.navigation.active_tab.title()))
                    .border_style(border_style(is_focused)),
            );
        frame.render_widget(loading, area);
        return;
    }

    let Some(page) = &content_state.page else {
        let content = Paragraph::new("Press 1-4 to pick a tab\n\nUse ↑/↓ to select items\nPress Enter to open or play\nPress h for every key")
            .style(Style::default().fg(Color::DarkGray))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .padding(Padding::horizontal(1))
                    .border_style(border_style(is_focused)),
            );
        frame.render_widget(content, area);
        return;
    };

    render_page(frame, area, page, content_state.navigation_stack.len(), is_focused, current_song);
}

fn render_page(
    frame: &mut Frame,
    area: Rect,
    page: &ContentPage,
    depth: usize,
    is_focused: bool,
    current_song: Option<&Song>,
) {
    let content_width = area.width.saturating_sub(4) as usize;

    // Songs are numbered within their play group
    let mut group_sizes: HashMap<usize, usize> = HashMap::new();
    for item in &page.items {
        if let ContentItem::Song { group, .. } = item {
            *group_sizes.entry(*group).or_default() += 1;
        }
    }
    let num_width = calculate_num_width(group_sizes.values().copied().max().unwrap_or(0));

    let mut positions: HashMap<usize, usize> = HashMap::new();
    let items: Vec<ListItem> = page
        .items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let is_selected = is_focused && page.selected == Some(i);
            let number = match item {
                ContentItem::Song { group, .. } => {
                    let position = positions.entry(*group).or_default();
                    *position += 1;
                    *position
                }
                _ => 0,
            };
            let columns = SongColumns { number, num_width, width: content_width };
            render_item(item, is_selected, current_song, columns)
        })
        .collect();

    let title = if depth > 0 {
        format!(" ← {} ", page.title)
    } else {
        format!(" {} ", page.title)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .padding(Padding::horizontal(1))
        .border_style(border_style(is_focused));

    render_scrollable_list(frame, area, items, page.selected.unwrap_or(0), block);
}

/// Layout of one song row
#[derive(Clone, Copy)]
struct SongColumns {
    number: usize,
    num_width: usize,
    width: usize,
}

fn render_item(item: &ContentItem, is_selected: bool, current_song: Option<&Song>, columns: SongColumns) -> ListItem<'static> {
    match item {
        ContentItem::Heading(text) => ListItem::new(Line::from(Span::styled(
            text.clone(),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ))),
        ContentItem::Info(text) => ListItem::new(text.clone()).style(Style::default().fg(Color::DarkGray)),
        ContentItem::Song { song, .. } => {
            let is_playing = current_song.is_some_and(|c| c.id == song.id);
            let duration_width = 6;
            let num_width = columns.num_width;
            let remaining = columns.width.saturating_sub(num_width + 1 + 3 + 3 + duration_width);
            let title_width = remaining * 55 / 100;
            let artist_width = remaining.saturating_sub(title_width);
            let style = if is_selected {
                row_style(true)
            } else if is_playing {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            let marker = if is_playing { "▶".to_string() } else { columns.number.to_string() };
            ListItem::new(format!(
                "{:>num_width$} {}   {}   {:>duration_width$}",
                marker,
                truncate_string(&song.title, title_width),
                truncate_string(&song.artist, artist_width),
                format_duration(song.duration),
            ))
            .style(style)
        }
        ContentItem::Album(album) => {
            ListItem::new(format!("💿 {} · {}", album.title, album.artist)).style(row_style(is_selected))
        }
        ContentItem::Artist(artist) => {
            let verified = if artist.is_verified { " ✔" } else { "" };
            ListItem::new(format!(
                "🎤 {}{} · {} followers",
                artist.name,
                verified,
                format_count(artist.followers)
            ))
            .style(row_style(is_selected))
        }
        ContentItem::Playlist(playlist) => {
            ListItem::new(format!("📃 {} · {} songs", playlist.name, playlist.songs.len())).style(row_style(is_selected))
        }
        ContentItem::Category(category) => {
            let swatch = Color::from_str(&category.color).unwrap_or(Color::Gray);
            ListItem::new(Line::from(vec![
                Span::styled("■ ", Style::default().fg(swatch)),
                Span::styled(category.name.clone(), row_style(is_selected)),
            ]))
        }
        ContentItem::Action { label, .. } => {
            let style = if is_selected {
                Style::default().fg(Color::Black).bg(Color::Green).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Green)
            };
            ListItem::new(format!("[ {} ]", label)).style(style)
        }
    }
}
