//! Dashboard logs panel component
//!
//! Renders the activity log fed by the channel logger

use super::super::screen::DashboardScreen;
use super::super::utils::format_compact_timestamp;
use crate::logging::LogLevel;
use ratatui::Frame;
use ratatui::prelude::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};

pub fn render_logs_panel(f: &mut Frame, area: ratatui::layout::Rect, screen: &DashboardScreen) {
    // Account for the top and bottom borders
    let max_logs = (area.height.saturating_sub(2)) as usize;
    let log_count = if max_logs > 0 { max_logs } else { 1 };

    let log_lines: Vec<Line> = screen
        .activity_logs
        .iter()
        .rev()
        .take(log_count)
        .map(|event| {
            let color = match event.log_level {
                LogLevel::Error => Color::LightRed,
                LogLevel::Warn => Color::Yellow,
                LogLevel::Info => Color::Gray,
                LogLevel::Debug | LogLevel::Trace => Color::DarkGray,
            };
            let icon = if event.is_error() { "! " } else { "  " };
            Line::from(vec![
                Span::styled(icon, Style::default().fg(color)),
                Span::styled(
                    format!("{} ", format_compact_timestamp(&event.timestamp)),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(event.msg.clone(), Style::default().fg(color)),
            ])
        })
        .collect();

    let log_paragraph = if log_lines.is_empty() {
        Paragraph::new(vec![Line::from("No activity yet")])
    } else {
        Paragraph::new(log_lines)
    };

    let logs_block = Block::default()
        .title("ACTIVITY LOG")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan));

    f.render_widget(log_paragraph.block(logs_block).wrap(Wrap { trim: true }), area);
}
