//! Dashboard summary tiles
//!
//! Totals across the loaded campaigns plus a per-state breakdown

use super::super::screen::DashboardScreen;
use super::super::utils::{badge_color, spinner};
use crate::dashboard::badges::{MessageState, state_badge};
use crate::dashboard::format::format_cost;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use strum::IntoEnumIterator;

fn tile(f: &mut Frame, area: Rect, title: &str, value: String, color: Color) {
    let widget = Paragraph::new(Line::from(Span::styled(
        value,
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .title(title.to_string())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    f.render_widget(widget, area);
}

pub fn render_summary(f: &mut Frame, area: Rect, screen: &DashboardScreen) {
    let state = &screen.snapshot;
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 5),
            Constraint::Ratio(1, 5),
            Constraint::Ratio(1, 5),
            Constraint::Ratio(1, 5),
            Constraint::Ratio(1, 5),
        ])
        .split(area);

    let pending = |value: String| {
        if state.loading() {
            spinner(screen.tick).to_string()
        } else {
            value
        }
    };

    tile(
        f,
        columns[0],
        "CAMPAIGNS",
        pending(state.campaign_count().to_string()),
        Color::Cyan,
    );
    tile(
        f,
        columns[1],
        "SMS SENT",
        pending(state.total_sent().to_string()),
        Color::LightGreen,
    );
    tile(
        f,
        columns[2],
        "TOTAL COST",
        pending(format_cost(Some(state.total_cost()))),
        Color::LightYellow,
    );
    let departments = if state.is_manager() {
        state.dept_count().to_string()
    } else {
        "-".to_string()
    };
    tile(f, columns[3], "DEPARTMENTS", pending(departments), Color::LightMagenta);

    let mut breakdown = Vec::new();
    for message_state in MessageState::iter() {
        let count = state
            .messages()
            .iter()
            .filter(|m| m.state.as_deref() == Some(message_state.as_ref()))
            .count();
        if count == 0 {
            continue;
        }
        breakdown.push(Span::styled(
            format!("{} {} ", message_state, count),
            Style::default().fg(badge_color(state_badge(message_state.as_ref()))),
        ));
    }
    if breakdown.is_empty() {
        breakdown.push(Span::styled("-", Style::default().fg(Color::DarkGray)));
    }
    let widget = Paragraph::new(Line::from(breakdown))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title("BY STATE")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
    f.render_widget(widget, columns[4]);
}
