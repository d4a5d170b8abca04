//! Layout rendering (top tab bar, status line)

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};
use ratatui::widgets::Padding;

use crate::model::{AppMode, DashboardTab, ModelSnapshot, Tab};
use super::utils::border_style;

pub fn render_top_bar(frame: &mut Frame, area: Rect, snapshot: &ModelSnapshot) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),     // Tabs
            Constraint::Length(34), // Search box or account
        ])
        .split(area);

    match snapshot.ui.mode {
        AppMode::Listener => {
            let titles: Vec<String> = Tab::ALL
                .iter()
                .enumerate()
                .map(|(i, tab)| format!("{} {}", i + 1, tab.title()))
                .collect();
            let tabs = Tabs::new(titles)
                .select(snapshot.ui.navigation.active_tab.index())
                .highlight_style(Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
                .block(Block::default().borders(Borders::ALL).title(" NiaTunes "));
            frame.render_widget(tabs, chunks[0]);

            if snapshot.ui.navigation.active_tab == Tab::Search {
                render_search_box(frame, chunks[1], snapshot);
            } else {
                let who = match &snapshot.user {
                    Some(user) => format!("👤 {}", user.name),
                    None => "👤 Guest".to_string(),
                };
                let account = Paragraph::new(who)
                    .style(Style::default().fg(Color::Cyan))
                    .block(Block::default().borders(Borders::ALL).title(" Account "));
                frame.render_widget(account, chunks[1]);
            }
        }
        AppMode::Studio => {
            let titles: Vec<&str> = DashboardTab::ALL.iter().map(|tab| tab.title()).collect();
            let tabs = Tabs::new(titles)
                .select(snapshot.dashboard.active_tab.index())
                .highlight_style(Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD))
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .title(" NiaTunes Studio ")
                        .border_style(Style::default().fg(Color::Magenta)),
                );
            frame.render_widget(tabs, chunks[0]);

            let mut spans = vec![Span::styled(
                snapshot
                    .creator
                    .as_ref()
                    .map_or("Not signed in".to_string(), |c| c.artist_name.clone()),
                Style::default().fg(Color::Cyan),
            )];
            if snapshot.social.live.is_live() {
                spans.push(Span::styled(
                    "  ● LIVE",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ));
            }
            let creator = Paragraph::new(Line::from(spans))
                .block(Block::default().borders(Borders::ALL).title(" Creator "));
            frame.render_widget(creator, chunks[1]);
        }
    }
}

fn render_search_box(frame: &mut Frame, area: Rect, snapshot: &ModelSnapshot) {
    let editing = snapshot.ui.search_editing;
    let query = &snapshot.ui.navigation.search_query;
    let text = if query.is_empty() && !editing {
        "Press / to search...".to_string()
    } else if editing {
        format!("{}▏", query)
    } else {
        query.clone()
    };

    let search = Paragraph::new(text)
        .style(if editing {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::White)
        })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Search ")
                .padding(Padding::horizontal(1))
                .border_style(border_style(editing)),
        );
    frame.render_widget(search, area);
}

/// One line between the page and the player: confirmations, unread counts, hints
pub fn render_status_line(frame: &mut Frame, area: Rect, snapshot: &ModelSnapshot) {
    let mut spans = Vec::new();
    if let Some(message) = &snapshot.ui.status_message {
        spans.push(Span::styled(format!(" {} ", message), Style::default().fg(Color::Yellow)));
    }

    let unread_messages = snapshot.social.messaging.unread_total();
    if unread_messages > 0 {
        spans.push(Span::styled(
            format!(" ✉ {} ", unread_messages),
            Style::default().fg(Color::Cyan),
        ));
    }
    if snapshot.ui.mode == AppMode::Studio {
        let unread = snapshot.dashboard.unread_notifications();
        if unread > 0 {
            spans.push(Span::styled(format!(" 🔔 {} ", unread), Style::default().fg(Color::Magenta)));
        }
    }
    if snapshot.content.is_loading {
        spans.push(Span::styled(" Loading... ", Style::default().fg(Color::DarkGray)));
    }

    let hint = match snapshot.ui.mode {
        AppMode::Listener => " m studio · i messages · u queue · h help ",
        AppMode::Studio => " m listen · g go live · d upload · h help ",
    };
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(hint.chars().count() as u16)])
        .split(area);
    frame.render_widget(Paragraph::new(Line::from(spans)), chunks[0]);
    frame.render_widget(
        Paragraph::new(hint).style(Style::default().fg(Color::DarkGray)),
        chunks[1],
    );
}
