//! Creator studio rendering, one function per dashboard tab

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, ListItem, Paragraph, Sparkline, Wrap},
    Frame,
};
use ratatui::widgets::Padding;

use crate::model::social::{EventStatus, StreamStatus};
use crate::model::{format_count, DashboardTab, ModelSnapshot, Trend, UploadKind};
use super::utils::{format_duration, format_money, render_scrollable_list, row_style, truncate_string};

const STUDIO_ACCENT: Color = Color::Magenta;

pub fn render_studio(frame: &mut Frame, area: Rect, snapshot: &ModelSnapshot) {
    if snapshot.creator.is_none() {
        let prompt = Paragraph::new("Sign in as a creator to manage your music.\n\nPress m to go back to listening.")
            .style(Style::default().fg(Color::DarkGray))
            .block(studio_block(snapshot.dashboard.active_tab.title()));
        frame.render_widget(prompt, area);
        return;
    }

    match snapshot.dashboard.active_tab {
        DashboardTab::Overview => render_overview(frame, area, snapshot),
        DashboardTab::Uploads => render_uploads(frame, area, snapshot),
        DashboardTab::Analytics => render_analytics(frame, area, snapshot),
        DashboardTab::Subscribers => render_subscribers(frame, area, snapshot),
        DashboardTab::Earnings => render_earnings(frame, area, snapshot),
        DashboardTab::Notifications => render_notifications(frame, area, snapshot),
        DashboardTab::Live => render_live(frame, area, snapshot),
        DashboardTab::Merchandise => render_merchandise(frame, area, snapshot),
        DashboardTab::Notes => render_notes(frame, area, snapshot),
        DashboardTab::Events => render_events(frame, area, snapshot),
    }
}

fn studio_block(title: &str) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", title))
        .padding(Padding::horizontal(1))
        .border_style(Style::default().fg(STUDIO_ACCENT))
}

/// Summary on top, selectable rows below
fn split_summary(area: Rect, summary_height: u16) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(summary_height), Constraint::Min(0)])
        .split(area);
    (chunks[0], chunks[1])
}

fn render_rows(frame: &mut Frame, area: Rect, title: &str, rows: Vec<String>, selected: usize) {
    let items: Vec<ListItem> = if rows.is_empty() {
        vec![ListItem::new("Nothing here yet").style(Style::default().fg(Color::DarkGray))]
    } else {
        rows.into_iter()
            .enumerate()
            .map(|(i, row)| ListItem::new(row).style(row_style(i == selected)))
            .collect()
    };
    render_scrollable_list(frame, area, items, selected, studio_block(title));
}

fn stat(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:<22}", label), Style::default().fg(Color::DarkGray)),
        Span::styled(value, Style::default().fg(Color::White).add_modifier(Modifier::BOLD)),
    ])
}

// ============================================================================
// Tabs
// ============================================================================

fn render_overview(frame: &mut Frame, area: Rect, snapshot: &ModelSnapshot) {
    let stats = &snapshot.dashboard.stats;
    let (top, bottom) = split_summary(area, 10);
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(top);

    let bio = snapshot.creator.as_ref().map(|c| c.bio.clone()).unwrap_or_default();
    let lines = vec![
        stat("Bio", truncate_string(&bio, columns[0].width.saturating_sub(12) as usize)),
        stat("Total streams", format_count(stats.total_streams)),
        stat("This month", format_count(stats.monthly_streams)),
        stat("Subscribers", format!("{} (+{})", stats.total_subscribers, stats.new_subscribers_this_month)),
        stat("Revenue this month", format_money(stats.monthly_revenue)),
        stat("Songs / podcasts", format!("{} / {}", stats.total_songs, stats.total_podcasts)),
        stat("Avg. listen", format_duration(stats.average_stream_duration)),
        stat("Top song", stats.top_performing_song.clone()),
    ];
    frame.render_widget(Paragraph::new(lines).block(studio_block("Overview (n edit bio)")), columns[0]);

    let chart: Vec<Line> = snapshot
        .dashboard
        .chart_positions
        .iter()
        .map(|entry| {
            let (arrow, color) = match entry.trend {
                Trend::Up => ("▲", Color::Green),
                Trend::Down => ("▼", Color::Red),
                Trend::Same => ("●", Color::DarkGray),
            };
            Line::from(vec![
                Span::styled(format!("#{:<3}", entry.position), Style::default().add_modifier(Modifier::BOLD)),
                Span::styled(format!("{} ", arrow), Style::default().fg(color)),
                Span::raw(format!("{} · {}", entry.song_title, format_count(entry.streams))),
            ])
        })
        .collect();
    frame.render_widget(Paragraph::new(chart).block(studio_block("Charts")), columns[1]);

    let creator_id = snapshot.studio_creator_id();
    let collaborations = &snapshot.social.collaborations;
    let title = format!(
        "Collaborations · {} awaiting you (Enter to post · j new)",
        collaborations.pending_for(&creator_id).count()
    );
    let rows = collaborations
        .by_creator(&creator_id)
        .map(|post| {
            let approved = post.collaborators.iter().filter(|c| c.has_approved).count();
            let posted = if post.is_posted_on_all { "posted everywhere" } else { "pending" };
            format!(
                "🤝 {} · {}/{} approved · {} · {} streams",
                post.title,
                approved,
                post.collaborators.len(),
                posted,
                format_count(post.total_engagement.streams)
            )
        })
        .collect();
    render_rows(frame, bottom, &title, rows, snapshot.ui.studio_selected);
}

fn render_uploads(frame: &mut Frame, area: Rect, snapshot: &ModelSnapshot) {
    let dashboard = &snapshot.dashboard;
    let in_flight = dashboard.upload_progress.len() as u16;
    let (top, bottom) = split_summary(area, if in_flight > 0 { in_flight * 3 } else { 0 });

    for (i, progress) in dashboard.upload_progress.iter().enumerate() {
        let slot = Rect {
            y: top.y + i as u16 * 3,
            height: 3,
            ..top
        };
        if slot.bottom() > top.bottom() {
            break;
        }
        let gauge = Gauge::default()
            .block(studio_block(&progress.file_name))
            .gauge_style(Style::default().fg(STUDIO_ACCENT))
            .percent(u16::from(progress.progress.min(100)))
            .label(format!("{}% · {:?}", progress.progress, progress.status));
        frame.render_widget(gauge, slot);
    }

    let width = bottom.width.saturating_sub(4) as usize;
    let rows = dashboard
        .uploads
        .iter()
        .map(|upload| {
            let icon = match upload.kind {
                UploadKind::Song => "🎵",
                UploadKind::Podcast => "🎙",
            };
            format!(
                "{} {} {:<10} {:>8} streams {:>10}",
                icon,
                truncate_string(&upload.title, width.saturating_sub(40).max(8)),
                upload.status.label(),
                format_count(upload.streams),
                format_money(upload.revenue)
            )
        })
        .collect();
    render_rows(frame, bottom, "Uploads (Enter publish · x delete · d new)", rows, snapshot.ui.studio_selected);
}

fn render_analytics(frame: &mut Frame, area: Rect, snapshot: &ModelSnapshot) {
    let dashboard = &snapshot.dashboard;
    let (top, bottom) = split_summary(area, 8);

    let streams: Vec<u64> = dashboard.stream_analytics.iter().map(|day| day.streams).collect();
    let sparkline = Sparkline::default()
        .block(studio_block("Analytics · daily streams"))
        .style(Style::default().fg(STUDIO_ACCENT))
        .data(streams.iter().copied());
    frame.render_widget(sparkline, top);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(40),
            Constraint::Percentage(30),
            Constraint::Percentage(30),
        ])
        .split(bottom);

    let countries: Vec<Line> = dashboard
        .demographics
        .iter()
        .map(|d| stat(&d.country, format!("{}% · {}", d.percentage, format_count(d.streams))))
        .collect();
    frame.render_widget(Paragraph::new(countries).block(studio_block("Countries")), columns[0]);

    let devices: Vec<Line> = dashboard
        .devices
        .iter()
        .map(|d| stat(&d.device, format!("{}%", d.percentage)))
        .collect();
    frame.render_widget(Paragraph::new(devices).block(studio_block("Devices")), columns[1]);

    let ages: Vec<Line> = dashboard
        .age_groups
        .iter()
        .map(|a| stat(&a.age_group, format!("{}%", a.percentage)))
        .collect();
    frame.render_widget(Paragraph::new(ages).block(studio_block("Age groups")), columns[2]);
}

fn render_subscribers(frame: &mut Frame, area: Rect, snapshot: &ModelSnapshot) {
    let dashboard = &snapshot.dashboard;
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    let tiers = dashboard
        .subscription_tiers
        .iter()
        .map(|tier| {
            format!(
                "{} {} · {}/mo · {} subscribers",
                if tier.is_active { "●" } else { "○" },
                tier.name,
                format_money(tier.price),
                tier.subscriber_count
            )
        })
        .collect();
    render_rows(frame, columns[0], "Subscribers · tiers (Enter toggles · n new)", tiers, snapshot.ui.studio_selected);

    let recent: Vec<Line> = dashboard
        .subscribers
        .iter()
        .map(|s| Line::from(format!("{} · {} · {:?}", s.name, s.tier_name, s.status)))
        .collect();
    frame.render_widget(Paragraph::new(recent).block(studio_block("Recent")), columns[1]);
}

fn render_earnings(frame: &mut Frame, area: Rect, snapshot: &ModelSnapshot) {
    let dashboard = &snapshot.dashboard;
    let (top, bottom) = split_summary(area, 6);
    let mut lines = vec![
        stat("Total revenue", format_money(dashboard.stats.total_revenue)),
        stat("Available this month", format_money(dashboard.stats.monthly_revenue)),
        stat("Payout method (c)", snapshot.ui.payout_method.label().to_string()),
    ];
    if dashboard.is_loading {
        lines.push(Line::from(Span::styled("Requesting payout...", Style::default().fg(Color::Yellow))));
    }
    frame.render_widget(Paragraph::new(lines).block(studio_block("Earnings")), top);

    let rows = dashboard
        .payouts
        .iter()
        .map(|p| {
            format!(
                "{:>12} {} · {} · {}",
                format_money(p.amount),
                p.currency,
                p.method.label(),
                p.status.label()
            )
        })
        .collect();
    render_rows(frame, bottom, "Payouts (Enter to request)", rows, snapshot.ui.studio_selected);
}

fn render_notifications(frame: &mut Frame, area: Rect, snapshot: &ModelSnapshot) {
    let rows = snapshot
        .dashboard
        .notifications()
        .iter()
        .map(|n| format!("{} {} · {}", if n.read { " " } else { "●" }, n.title, n.message))
        .collect();
    let title = format!(
        "Notifications · {} unread (Enter read · a all)",
        snapshot.dashboard.unread_notifications()
    );
    render_rows(frame, area, &title, rows, snapshot.ui.studio_selected);
}

fn render_live(frame: &mut Frame, area: Rect, snapshot: &ModelSnapshot) {
    let live = &snapshot.social.live;
    let (top, bottom) = split_summary(area, 7);

    let summary: Vec<Line> = match live.active_stream() {
        Some(stream) => vec![
            Line::from(Span::styled(
                format!("● LIVE  {}", stream.title),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )),
            stat("Viewers", format!("{} (peak {})", stream.viewers, stream.peak_viewers)),
            stat("Tips", format!("{} · {}", stream.tips.len(), format_money(stream.total_tips))),
            stat("Chat", format!("{} messages", stream.comments.len())),
        ],
        None => vec![
            Line::from("You are offline. g goes live, k schedules for tomorrow."),
            stat("Upcoming", live.upcoming().count().to_string()),
        ],
    };
    frame.render_widget(
        Paragraph::new(summary).wrap(Wrap { trim: true }).block(studio_block("Live")),
        top,
    );

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(bottom);

    let gifts = live
        .gifts()
        .iter()
        .map(|g| format!("{} {} · {}", g.icon, g.name, format_money(g.price)))
        .collect();
    render_rows(frame, columns[0], "Gifts (Enter to tip)", gifts, snapshot.ui.studio_selected);

    let creator_id = snapshot.studio_creator_id();
    let streams: Vec<Line> = live
        .by_creator(&creator_id)
        .map(|s| {
            let color = match s.status {
                StreamStatus::Live => Color::Red,
                StreamStatus::Scheduled => Color::Yellow,
                StreamStatus::Ended => Color::DarkGray,
            };
            Line::from(vec![
                Span::styled(format!("{:<10}", s.status.label()), Style::default().fg(color)),
                Span::raw(format!("{} · peak {}", s.title, s.peak_viewers)),
            ])
        })
        .collect();
    frame.render_widget(Paragraph::new(streams).block(studio_block("Your streams")), columns[1]);
}

fn render_merchandise(frame: &mut Frame, area: Rect, snapshot: &ModelSnapshot) {
    let creator_id = snapshot.studio_creator_id();
    let rows = snapshot
        .social
        .merchandise
        .by_creator(&creator_id)
        .map(|item| {
            format!(
                "{} {} · {} · {} in stock · {} sold",
                if item.is_available { "●" } else { "○" },
                item.name,
                format_money(item.price),
                item.stock,
                item.sold
            )
        })
        .collect();
    render_rows(frame, area, "Merch (Enter toggles · x delete)", rows, snapshot.ui.studio_selected);
}

fn render_notes(frame: &mut Frame, area: Rect, snapshot: &ModelSnapshot) {
    let creator_id = snapshot.studio_creator_id();
    let rows = snapshot
        .social
        .notes
        .by_creator(&creator_id)
        .map(|note| {
            let pin = if note.is_pinned { "📌" } else { "  " };
            let on = note.song_id.as_deref().unwrap_or("general");
            format!("{} {} · {} · {} likes", pin, note.title, on, note.likes)
        })
        .collect();
    render_rows(
        frame,
        area,
        "Artist notes (Enter pins · n new on playing song · x delete)",
        rows,
        snapshot.ui.studio_selected,
    );
}

/// Events first, then announcements, in one selectable list
fn render_events(frame: &mut Frame, area: Rect, snapshot: &ModelSnapshot) {
    let creator_id = snapshot.studio_creator_id();
    let events = &snapshot.social.events;

    let mut rows: Vec<String> = events
        .events_by_creator(&creator_id)
        .map(|event| {
            let status = match event.status {
                EventStatus::Cancelled => "cancelled",
                EventStatus::Completed => "done",
                EventStatus::Ongoing => "on now",
                EventStatus::Upcoming => "upcoming",
            };
            let place = event
                .location
                .as_ref()
                .map_or("Online".to_string(), |l| format!("{}, {}", l.venue, l.city));
            format!("📅 {} · {} · {} · {}", event.title, event.start_date.get(..10).unwrap_or(&event.start_date), place, status)
        })
        .collect();
    rows.extend(
        events
            .announcements_by_creator(&creator_id)
            .map(|a| format!("📣 {} · {} likes", a.title, a.likes)),
    );
    render_rows(
        frame,
        area,
        "Events & announcements (Enter cancels · n event · b announce · x delete)",
        rows,
        snapshot.ui.studio_selected,
    );
}
