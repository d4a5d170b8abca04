//! Overlay rendering (error notification, help, queue, messages, forms, now playing, composer)

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, ListItem, Paragraph, Wrap},
    Frame,
};

use crate::model::social::MessagingStore;
use crate::model::{AuthForm, Composer, ModelSnapshot, PlayerStore, UiState};
use super::utils::{centered_rect, format_duration, render_scrollable_list, row_style};

fn popup_block(title: &str, color: Color) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
        .title(format!(" {} ", title))
        .title_style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .style(Style::default().bg(Color::Black))
}

pub fn render_error_notification(frame: &mut Frame, ui_state: &UiState) {
    if let Some(ref error_msg) = ui_state.error_message {
        let area = frame.area();

        // Fixed width popup (responsive to screen size)
        let popup_width = 52.min(area.width.saturating_sub(4));
        let inner_width = popup_width.saturating_sub(4).max(1) as usize; // account for borders

        // Calculate how many lines the error message will take when wrapped
        let error_line_count = error_msg.chars().count().div_ceil(inner_width) as u16;

        // Height: top border (1) + error lines + bottom border (1)
        let popup_area = centered_rect(popup_width, 2 + error_line_count.max(1), area);

        // Clear the area behind the popup first
        frame.render_widget(Clear, popup_area);

        let error_widget = Paragraph::new(error_msg.to_string())
            .style(Style::default().fg(Color::Red))
            .wrap(Wrap { trim: false })
            .block(popup_block("Error (Esc to dismiss)", Color::Red));

        frame.render_widget(error_widget, popup_area);
    }
}

pub fn render_help_popup(frame: &mut Frame) {
    let area = frame.area();

    // Define keybindings organized by category
    let keybindings = vec![
        ("", "── Listening ──"),
        ("Tab / 1-4", "Switch tab"),
        ("↑ ↓ / Enter", "Move / Open or play"),
        ("Backspace / Esc", "Go back"),
        ("/", "Search"),
        ("K / A / X", "Queue / Add to playlist / Remove"),
        ("W / C", "Follow artist / New playlist"),
        ("F", "Now playing details"),
        ("L / C / Y", "Like / Comment / Reply (details)"),
        ("V / X", "Review / Delete your comment"),
        ("", ""),
        ("", "── Playback ──"),
        ("Space", "Play / Pause"),
        ("N / P", "Next / Previous"),
        ("S / R", "Shuffle / Cycle repeat"),
        ("+ / -", "Volume up / down"),
        ("[ / ]", "Seek -10s / +10s"),
        ("Z", "Scrub (Enter releases)"),
        ("U", "Show queue"),
        ("", ""),
        ("", "── Studio ──"),
        ("← / →", "Switch dashboard tab"),
        ("Enter / X", "Act on / delete row"),
        ("N / B", "New bio, tier, event or note / Announce"),
        ("J", "Collaborate on the playing song"),
        ("G / E / K", "Go live / End / Schedule"),
        ("D", "Simulate an upload"),
        ("C", "Cycle payout method"),
        ("O", "Sign out of the studio"),
        ("", ""),
        ("", "── General ──"),
        ("M", "Listener / Studio"),
        ("I", "Messages (W write · P play shared song)"),
        ("H", "Toggle this help"),
        ("Q", "Quit"),
    ];

    let popup_area = centered_rect(62, keybindings.len() as u16 + 2, area);

    // Clear the area behind the popup
    frame.render_widget(Clear, popup_area);

    let lines: Vec<Line> = keybindings
        .iter()
        .map(|(key, desc)| {
            if key.is_empty() {
                // Section header or empty line
                Line::from(Span::styled(
                    format!("{:^38}", desc),
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(vec![
                    Span::styled(
                        format!("{:>18}", key),
                        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                    ),
                    Span::raw("  "),
                    Span::styled(desc.to_string(), Style::default().fg(Color::White)),
                ])
            }
        })
        .collect();

    let help_text = Paragraph::new(lines)
        .block(popup_block("Help (H or Esc to close)", Color::Cyan))
        .style(Style::default().bg(Color::Black));

    frame.render_widget(help_text, popup_area);
}

pub fn render_queue(frame: &mut Frame, player: &PlayerStore, selected: usize) {
    let popup_area = centered_rect(64, 20, frame.area());
    frame.render_widget(Clear, popup_area);

    let mut items: Vec<ListItem> = Vec::new();
    let now = match player.current() {
        Some(song) => format!("▶ {} - {}", song.title, song.artist),
        None => "Nothing playing".to_string(),
    };
    items.push(ListItem::new(now).style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)));

    if player.queue().is_empty() {
        items.push(ListItem::new("  Queue is empty").style(Style::default().fg(Color::DarkGray)));
    }
    items.extend(player.queue().iter().enumerate().map(|(i, song)| {
        ListItem::new(format!(
            "{:>3}. {} - {}  {}",
            i + 1,
            song.title,
            song.artist,
            format_duration(song.duration)
        ))
        .style(row_style(i == selected))
    }));

    render_scrollable_list(
        frame,
        popup_area,
        items,
        selected + 1,
        popup_block("Up Next (x remove · c clear · Esc)", Color::Cyan),
    );
}

pub fn render_messages(frame: &mut Frame, messaging: &MessagingStore, selected: usize) {
    let popup_area = centered_rect(90, 22, frame.area());
    frame.render_widget(Clear, popup_area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(popup_area);

    let conversations = messaging.conversations().len();
    let mut items: Vec<ListItem> = messaging
        .conversations()
        .iter()
        .enumerate()
        .map(|(i, conversation)| {
            let name = conversation
                .group_name
                .clone()
                .or_else(|| conversation.participants.first().map(|p| p.name.clone()))
                .unwrap_or_default();
            let unread = if conversation.unread_count > 0 {
                format!(" ({})", conversation.unread_count)
            } else {
                String::new()
            };
            ListItem::new(format!("{}{}", name, unread)).style(row_style(i == selected))
        })
        .collect();
    items.extend(messaging.contacts().iter().enumerate().map(|(i, contact)| {
        let style = if conversations + i == selected {
            row_style(true)
        } else if contact.is_on_nia_tunes {
            Style::default()
        } else {
            Style::default().fg(Color::DarkGray)
        };
        ListItem::new(format!("👤 {}", contact.name)).style(style)
    }));
    let title = if messaging.is_syncing {
        "Messages · syncing contacts..."
    } else {
        "Messages (Enter open · w write · y sync · Esc)"
    };
    render_scrollable_list(frame, chunks[0], items, selected, popup_block(title, Color::Cyan));

    let detail: Vec<Line> = match messaging.active_conversation() {
        Some(conversation) => {
            let mut lines = vec![Line::from(Span::styled(
                conversation
                    .participants
                    .iter()
                    .map(|p| if p.is_online { format!("{} ●", p.name) } else { p.name.clone() })
                    .collect::<Vec<_>>()
                    .join(", "),
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            ))];
            let last = &conversation.last_message;
            lines.push(Line::from(""));
            lines.push(Line::from(last.content.clone()));
            if let Some(song) = &last.song_info {
                lines.push(Line::from(Span::styled(
                    format!("♪ {} - {} (p to play)", song.title, song.artist),
                    Style::default().fg(Color::Cyan),
                )));
            }
            lines
        }
        None => {
            let on_platform = messaging.contacts().iter().filter(|c| c.is_on_nia_tunes).count();
            vec![
                Line::from("Pick a conversation, or a contact to start one"),
                Line::from(""),
                Line::from(Span::styled(
                    format!("{} contacts · {} on NiaTunes", messaging.contacts().len(), on_platform),
                    Style::default().fg(Color::DarkGray),
                )),
            ]
        }
    };
    frame.render_widget(
        Paragraph::new(detail)
            .wrap(Wrap { trim: true })
            .block(popup_block("Conversation", Color::Cyan)),
        chunks[1],
    );
}

pub fn render_auth_form(frame: &mut Frame, form: &AuthForm) {
    let fields = form.fields();
    // Each field takes a label line and a value line; errors add one more
    let height = fields.len() as u16 * 3 + 4;
    let popup_area = centered_rect(56, height, frame.area());
    frame.render_widget(Clear, popup_area);

    let mut lines = Vec::new();
    for (i, field) in fields.iter().enumerate() {
        let focused = i == form.focus;
        lines.push(Line::from(Span::styled(
            field.label(),
            if focused {
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            },
        )));
        let cursor = if focused { "▏" } else { "" };
        lines.push(Line::from(format!("  {}{}", form.display_value(*field), cursor)));
        if let Some(error) = form.errors.get(field.key()) {
            lines.push(Line::from(Span::styled(format!("  {}", error), Style::default().fg(Color::Red))));
        }
    }
    if let Some(error) = form.errors.get("form") {
        lines.push(Line::from(Span::styled(error.to_string(), Style::default().fg(Color::Red))));
    }
    lines.push(Line::from(Span::styled(
        "Enter submit · Tab next · Ctrl+N switch · Esc close",
        Style::default().fg(Color::DarkGray),
    )));

    let color = if form.kind.is_creator() { Color::Magenta } else { Color::Green };
    frame.render_widget(
        Paragraph::new(lines).block(popup_block(form.kind.title(), color)),
        popup_area,
    );
}

/// Expanded player: canvas, artist notes, links, comments and reviews for the playing song
pub fn render_now_playing(frame: &mut Frame, snapshot: &ModelSnapshot) {
    let Some(song) = snapshot.player.current() else {
        return;
    };
    let social = &snapshot.social;
    let popup_area = centered_rect(96, 28, frame.area());
    frame.render_widget(Clear, popup_area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(popup_area);

    let mut left = vec![
        Line::from(Span::styled(song.title.clone(), Style::default().add_modifier(Modifier::BOLD))),
        Line::from(format!("{} · {}", song.artist, song.album)),
        Line::from(""),
    ];
    match social.canvas.for_song(&song.id) {
        Some(canvas) => left.push(Line::from(Span::styled(
            format!("▣ Canvas · {}s loop · {:?}", canvas.duration, canvas.status),
            Style::default().fg(Color::Magenta),
        ))),
        None => left.push(Line::from(Span::styled("No canvas", Style::default().fg(Color::DarkGray)))),
    }
    for note in social.notes.for_song(&song.id) {
        let pin = if note.is_pinned { "📌 " } else { "" };
        left.push(Line::from(""));
        left.push(Line::from(Span::styled(
            format!("{}{}", pin, note.title),
            Style::default().fg(Color::Yellow),
        )));
        left.push(Line::from(note.content.clone()));
    }
    if let Some(links) = social.links_for_song(&song.id) {
        left.push(Line::from(""));
        let listed = [
            ("YouTube", &links.youtube_url),
            ("Spotify", &links.spotify_url),
            ("Apple Music", &links.apple_music_url),
            ("SoundCloud", &links.soundcloud_url),
            ("Audiomack", &links.audiomack_url),
            ("Boomplay", &links.boomplay_url),
            ("TikTok", &links.tiktok_url),
            ("Instagram", &links.instagram_reel_url),
        ];
        let names: Vec<&str> = listed
            .iter()
            .filter(|(_, url)| url.is_some())
            .map(|(name, _)| *name)
            .collect();
        left.push(Line::from(format!("Also on: {}", names.join(", "))));
    }
    frame.render_widget(
        Paragraph::new(left)
            .wrap(Wrap { trim: true })
            .block(popup_block("Now Playing (f or Esc to close)", Color::Green)),
        chunks[0],
    );

    let selected = snapshot.ui.sheet_selected;
    let marker = |row: usize| if row == selected { "› " } else { "  " };
    let header_style = |row: usize, color: Color| {
        if row == selected {
            row_style(true)
        } else {
            Style::default().fg(color)
        }
    };

    let mut right = vec![Line::from(Span::styled(
        "l like · c comment · y reply · v review · x delete",
        Style::default().fg(Color::DarkGray),
    ))];
    match social.comments.average_rating(&song.id) {
        Some(rating) => right.push(Line::from(Span::styled(
            format!("★ {:.1} average", rating),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ))),
        None => right.push(Line::from(Span::styled("No reviews yet", Style::default().fg(Color::DarkGray)))),
    }
    let mut row = 0;
    for review in social.comments.reviews_for_song(&song.id) {
        right.push(Line::from(Span::styled(
            format!(
                "{}{} {} · {} ♥",
                marker(row),
                "★".repeat(review.rating as usize),
                review.user_name,
                review.likes
            ),
            header_style(row, Color::Yellow),
        )));
        right.push(Line::from(Span::styled(
            format!("  {}", review.review),
            Style::default().fg(Color::Gray),
        )));
        row += 1;
    }
    right.push(Line::from(""));
    for comment in social.comments.comments_for_song(&song.id) {
        right.push(Line::from(Span::styled(
            format!("{}{} · {} ♥", marker(row), comment.user_name, comment.likes),
            header_style(row, Color::Cyan),
        )));
        right.push(Line::from(format!("  {}", comment.content)));
        for reply in &comment.replies {
            right.push(Line::from(Span::styled(
                format!("    ↳ {}: {}", reply.user_name, reply.content),
                Style::default().fg(Color::Gray),
            )));
        }
        row += 1;
    }
    frame.render_widget(
        Paragraph::new(right)
            .wrap(Wrap { trim: true })
            .block(popup_block("Comments & Reviews", Color::Green)),
        chunks[1],
    );
}

/// One-line text box over everything else
pub fn render_composer(frame: &mut Frame, composer: &Composer) {
    let popup_area = centered_rect(60, 5, frame.area());
    frame.render_widget(Clear, popup_area);
    let lines = vec![
        Line::from(format!("{}▏", composer.text)),
        Line::from(Span::styled("Enter send · Esc cancel", Style::default().fg(Color::DarkGray))),
    ];
    frame.render_widget(
        Paragraph::new(lines).block(popup_block(&composer.target.prompt(), Color::Yellow)),
        popup_area,
    );
}
