//! Recent campaigns table

use super::super::screen::DashboardScreen;
use super::super::utils::badge_style;
use crate::dashboard::badges::{state_badge, type_badge, type_label};
use crate::dashboard::format::{format_cost, format_optional_date};

use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table};

pub fn render_campaigns(f: &mut Frame, area: Rect, screen: &DashboardScreen) {
    let state = &screen.snapshot;
    let block = Block::default()
        .title("RECENT CAMPAIGNS")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan));

    if state.messages().is_empty() {
        let text = if state.loading() {
            "Loading..."
        } else {
            "No campaigns yet. Press [n] to compose one."
        };
        f.render_widget(Paragraph::new(text).block(block), area);
        return;
    }

    // Only as many rows as fit between the borders and the header line.
    let visible = area.height.saturating_sub(3) as usize;
    let rows: Vec<Row> = state
        .messages()
        .iter()
        .take(visible)
        .map(|message| {
            let sms_type = message.sms_type.as_deref().unwrap_or_default();
            let message_state = message.state.as_deref().unwrap_or_default();
            let department = message
                .department_id
                .as_ref()
                .map(|d| d.name().to_string())
                .unwrap_or_else(|| "-".to_string());
            Row::new(vec![
                Cell::from(format_optional_date(message.create_date.as_deref())),
                Cell::from(Span::styled(
                    format!(" {} ", type_label(sms_type)),
                    badge_style(type_badge(sms_type)),
                )),
                Cell::from(Span::styled(
                    format!(" {} ", message_state),
                    badge_style(state_badge(message_state)),
                )),
                Cell::from(message.recipient_count.to_string()),
                Cell::from(message.success_count.to_string()),
                Cell::from(format_cost(message.total_cost)),
                Cell::from(department),
            ])
        })
        .collect();

    let header = Row::new(vec![
        "Date", "Type", "Status", "Recipients", "Sent", "Cost", "Department",
    ])
    .style(
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::BOLD),
    );

    let table = Table::new(
        rows,
        [
            Constraint::Length(12),
            Constraint::Length(10),
            Constraint::Length(10),
            Constraint::Length(10),
            Constraint::Length(8),
            Constraint::Length(10),
            Constraint::Fill(1),
        ],
    )
    .header(header)
    .block(block);

    f.render_widget(table, area);
}
