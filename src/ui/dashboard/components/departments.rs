//! Department expenditure table (managers only)

use super::super::screen::DashboardScreen;
use crate::dashboard::format::format_cost;

use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Cell, Row, Table};

pub fn render_departments(f: &mut Frame, area: Rect, screen: &DashboardScreen) {
    let state = &screen.snapshot;
    let dash = || "-".to_string();

    let rows: Vec<Row> = state
        .dept_stats()
        .iter()
        .map(|dept| {
            let processed = if dept.kfs5_processed { "yes" } else { "no" };
            Row::new(vec![
                Cell::from(dept.name.clone()),
                Cell::from(dept.short_name.clone().unwrap_or_else(dash)),
                Cell::from(dept.chart_code.clone().unwrap_or_else(dash)),
                Cell::from(dept.account_number.clone().unwrap_or_else(dash)),
                Cell::from(dept.object_code.clone().unwrap_or_else(dash)),
                Cell::from(format_cost(dept.total_cost)),
                Cell::from(processed),
            ])
        })
        .collect();

    let header = Row::new(vec![
        "Department", "Code", "Chart", "Account", "Object", "Cost", "KFS5",
    ])
    .style(
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::BOLD),
    );

    let table = Table::new(
        rows,
        [
            Constraint::Fill(1),
            Constraint::Length(8),
            Constraint::Length(8),
            Constraint::Length(12),
            Constraint::Length(8),
            Constraint::Length(10),
            Constraint::Length(5),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .title(format!("DEPARTMENT EXPENDITURE ({})", state.dept_count()))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Magenta)),
    );

    f.render_widget(table, area);
}
