//! Dashboard header component
//!
//! Renders the title and the provider balance line

use super::super::screen::DashboardScreen;
use super::super::utils::spinner;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Render header with title and balance.
pub fn render_header(f: &mut Frame, area: ratatui::layout::Rect, screen: &DashboardScreen) {
    let header_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(2)])
        .split(area);

    let version = env!("CARGO_PKG_VERSION");
    let title = Paragraph::new(format!("SU SMS DASHBOARD v{}", version))
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_type(BorderType::Thick),
        );
    f.render_widget(title, header_chunks[0]);

    let state = &screen.snapshot;
    let mut spans = vec![Span::styled(
        "Credit balance: ",
        Style::default().fg(Color::DarkGray),
    )];
    if state.loading_balance() {
        spans.push(Span::styled(
            format!("{} checking...", spinner(screen.tick)),
            Style::default().fg(Color::LightBlue),
        ));
    } else {
        spans.push(Span::styled(
            state.balance().to_string(),
            Style::default()
                .fg(Color::LightGreen)
                .add_modifier(Modifier::BOLD),
        ));
    }
    if let Some(error) = state.balance_error() {
        spans.push(Span::styled(
            format!("  ({})", error),
            Style::default().fg(Color::LightRed),
        ));
    }
    spans.push(Span::styled(
        format!("  @ {}", screen.environment),
        Style::default().fg(Color::DarkGray),
    ));

    let balance = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
    f.render_widget(balance, header_chunks[1]);
}
