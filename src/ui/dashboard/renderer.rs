//! Dashboard main renderer

use super::components::{campaigns, departments, footer, header, logs, summary};
use super::screen::DashboardScreen;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::{Color, Style};
use ratatui::widgets::Block;

pub fn render_dashboard(f: &mut Frame, screen: &DashboardScreen) {
    if screen.with_background_color {
        f.render_widget(
            Block::default().style(Style::default().bg(Color::Rgb(16, 20, 24))),
            f.area(),
        );
    }

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(3),
            Constraint::Fill(1),
            Constraint::Percentage(25),
            Constraint::Length(2),
        ])
        .margin(1)
        .split(f.area());

    header::render_header(f, main_chunks[0], screen);
    summary::render_summary(f, main_chunks[1], screen);

    // Department expenditure is only sent to managers.
    if screen.snapshot.is_manager() {
        let content_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(main_chunks[2]);
        campaigns::render_campaigns(f, content_chunks[0], screen);
        departments::render_departments(f, content_chunks[1], screen);
    } else {
        campaigns::render_campaigns(f, main_chunks[2], screen);
    }

    logs::render_logs_panel(f, main_chunks[3], screen);
    footer::render_footer(f, main_chunks[4]);
}
