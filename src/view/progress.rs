//! Progress bar rendering

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Gauge},
    Frame,
};

use crate::model::PlayerStore;
use super::utils::format_duration;

pub fn render_progress_bar(frame: &mut Frame, area: Rect, player: &PlayerStore) {
    let status_text = match player.current() {
        None => " No song playing".to_string(),
        Some(song) if player.is_playing() => format!(" ▶ {} | {} ({})", song.title, song.artist, song.album),
        Some(song) => format!("⏸  {} | {} ({})", song.title, song.artist, song.album),
    };

    let shuffle_text = if player.shuffle() { "Shuffle: On" } else { "Shuffle: Off" };
    let repeat_text = format!("Repeat: {}", player.repeat().label());
    let volume_text = format!("Vol: {}%", (player.volume() * 100.0).round() as u32);
    let queue_text = format!("Up next: {}", player.queue().len());

    let mut time_str = format!(
        "{} / {}",
        format_duration(player.elapsed()),
        format_duration(player.duration())
    );
    // Scrubbing: clock held, playhead follows [ and ]
    let bar_color = if player.is_scrubbing() {
        time_str.push_str("  scrubbing · Enter to release");
        Color::Yellow
    } else {
        Color::Green
    };

    let title = format!("{} ", status_text);
    let controls_info = format!(" {} | {} | {} | {} ", shuffle_text, repeat_text, volume_text, queue_text);

    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .title_bottom(Line::from(controls_info).right_aligned()),
        )
        .gauge_style(Style::default().fg(bar_color))
        .ratio(player.progress_ratio())
        .label(time_str);

    frame.render_widget(gauge, area);
}
