//! TUI mode execution

use super::{SessionData, announce_exit, announce_start};
use crate::consts::cli_consts::EVENT_QUEUE_SIZE;
use crate::logging::{ChannelLogger, get_rust_log_level};
use crate::ui;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{error::Error, io};
use tokio::sync::mpsc;

/// Runs the dashboard in TUI mode
///
/// This function handles:
/// 1. Routing log output into the activity panel
/// 2. Terminal setup and cleanup
/// 3. UI application initialization and execution
///
/// # Arguments
/// * `session` - Session data from setup
/// * `with_background` - Whether to enable background colors
pub async fn run_tui_mode(
    session: SessionData,
    with_background: bool,
) -> Result<(), Box<dyn Error>> {
    announce_start("Terminal", &session.environment);

    let (event_sender, event_receiver) = mpsc::channel(EVENT_QUEUE_SIZE);
    ChannelLogger::new(get_rust_log_level(), event_sender).install()?;

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    // Initialize the terminal with Crossterm backend
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let app = ui::App::new(
        session.dashboard,
        session.environment,
        event_receiver,
        with_background,
    );
    let result = ui::run(&mut terminal, app).await;

    // Clean up the terminal after running the application
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result?;
    announce_exit();

    Ok(())
}
