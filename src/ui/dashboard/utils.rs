//! Dashboard utility functions
//!
//! Contains helper functions used across dashboard components

use crate::dashboard::badges::Badge;
use ratatui::prelude::{Color, Style};

const SPINNER: [&str; 4] = ["|", "/", "-", "\\"];

/// Terminal colour for each badge style.
pub const BADGE_COLORS: [(Badge, Color); 6] = [
    (Badge::Secondary, Color::Gray),
    (Badge::Primary, Color::Blue),
    (Badge::Success, Color::Green),
    (Badge::Info, Color::Cyan),
    (Badge::Warning, Color::Yellow),
    (Badge::Danger, Color::Red),
];

pub fn badge_color(badge: Badge) -> Color {
    BADGE_COLORS
        .iter()
        .find(|(b, _)| *b == badge)
        .map(|(_, color)| *color)
        .unwrap_or(Color::Gray)
}

/// Filled badge style; light backgrounds get black text.
pub fn badge_style(badge: Badge) -> Style {
    let fg = if badge.dark_text() {
        Color::Black
    } else {
        Color::White
    };
    Style::default().bg(badge_color(badge)).fg(fg)
}

pub fn spinner(tick: usize) -> &'static str {
    SPINNER[tick % SPINNER.len()]
}

/// Format compact timestamp with date and time from full timestamp
pub fn format_compact_timestamp(timestamp: &str) -> String {
    // Extract from "YYYY-MM-DD HH:MM:SS" format
    if let Some(date_part) = timestamp.split(' ').next() {
        if let Some(time_part) = timestamp.split(' ').nth(1) {
            if let Some(month_day) = date_part.get(5..10) {
                if let Some(hour_min) = time_part.get(0..5) {
                    return format!("{} {}", month_day, hour_min);
                }
            }
        }
    }
    // Fallback to original timestamp if parsing fails
    timestamp.to_string()
}
