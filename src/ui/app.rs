//! Main application state and UI loop
//!
//! Contains the App struct and the key bindings of the dashboard

use crate::dashboard::badges::SmsType;
use crate::dashboard::{DashboardState, SmsDashboard, StateField};
use crate::environment::Environment;
use crate::events::Event as LogEvent;
use crate::logging::LogLevel;
use crate::ui::dashboard::{DashboardScreen, render_dashboard};
use crossterm::event::{self, Event, KeyCode};
use ratatui::{Terminal, backend::Backend};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::broadcast::error::TryRecvError;
use tokio::sync::{broadcast, mpsc, watch};

/// What a key press asks the dashboard to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Quit,
    Refresh,
    Compose(Option<SmsType>),
    History,
}

impl Command {
    pub fn from_key(code: KeyCode) -> Option<Self> {
        match code {
            KeyCode::Esc | KeyCode::Char('q') => Some(Command::Quit),
            KeyCode::Char('r') => Some(Command::Refresh),
            KeyCode::Char('n') => Some(Command::Compose(None)),
            KeyCode::Char('m') => Some(Command::Compose(Some(SmsType::Manual))),
            KeyCode::Char('a') => Some(Command::Compose(Some(SmsType::Adhoc))),
            KeyCode::Char('s') => Some(Command::Compose(Some(SmsType::Staff))),
            KeyCode::Char('t') => Some(Command::Compose(Some(SmsType::Student))),
            KeyCode::Char('h') => Some(Command::History),
            _ => None,
        }
    }
}

/// Activity-log line for a changed field, read from the state after the change.
pub fn describe_change(field: StateField, state: &DashboardState) -> Option<String> {
    match field {
        StateField::Balance => Some(format!("Credit balance: {}", state.balance())),
        StateField::CampaignCount => Some(format!("Loaded {} campaigns", state.campaign_count())),
        StateField::DeptCount if state.is_manager() => Some(format!(
            "Loaded expenditure for {} departments",
            state.dept_count()
        )),
        _ => None,
    }
}

/// Application state
pub struct App {
    /// The view-model shared with background fetches.
    dashboard: Arc<SmsDashboard>,

    /// What is currently on screen.
    screen: DashboardScreen,

    /// Receives log records from the channel logger.
    event_receiver: mpsc::Receiver<LogEvent>,

    /// Latest view-model state.
    snapshots: watch::Receiver<DashboardState>,

    /// Names of fields as the view-model changes them.
    changes: broadcast::Receiver<StateField>,
}

impl App {
    pub fn new(
        dashboard: Arc<SmsDashboard>,
        environment: Environment,
        event_receiver: mpsc::Receiver<LogEvent>,
        with_background_color: bool,
    ) -> Self {
        let snapshots = dashboard.subscribe();
        let changes = dashboard.subscribe_fields();
        let screen = DashboardScreen::new(
            (*snapshots.borrow()).clone(),
            environment,
            with_background_color,
        );
        Self {
            dashboard,
            screen,
            event_receiver,
            snapshots,
            changes,
        }
    }

    /// Pulls pending log records and view-model changes into the screen.
    fn sync(&mut self) {
        while let Ok(event) = self.event_receiver.try_recv() {
            self.screen.add_to_activity_log(event);
        }

        // Drain before reading the snapshot: a received field is always
        // already visible in the watch channel.
        let mut changed = Vec::new();
        loop {
            match self.changes.try_recv() {
                Ok(field) => changed.push(field),
                Err(TryRecvError::Lagged(_)) => continue,
                Err(_) => break,
            }
        }

        if self.snapshots.has_changed().unwrap_or(false) {
            self.screen.snapshot = (*self.snapshots.borrow_and_update()).clone();
        }
        for field in changed {
            if let Some(msg) = describe_change(field, &self.screen.snapshot) {
                self.screen
                    .add_to_activity_log(LogEvent::new(LogLevel::Info, msg));
            }
        }
    }

    /// Executes a command. Returns false when the app should exit.
    fn handle(&mut self, command: Command) -> bool {
        match command {
            Command::Quit => return false,
            Command::Refresh => {
                let dashboard = self.dashboard.clone();
                tokio::spawn(async move { dashboard.refresh_balance().await });
            }
            Command::Compose(sms_type) => {
                let sms_type = sms_type.map(|t| t.to_string());
                if let Err(e) = self.dashboard.open_compose(sms_type.as_deref()) {
                    log::warn!("Could not open compose form: {}", e);
                }
            }
            Command::History => {
                if let Err(e) = self.dashboard.view_history() {
                    log::warn!("Could not open message history: {}", e);
                }
            }
        }
        true
    }
}

/// Runs the dashboard UI in a loop until the user quits.
pub async fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    // Both fetches start together; nothing is cancelled if we quit early.
    let dashboard = app.dashboard.clone();
    tokio::spawn(async move { dashboard.mount().await });

    loop {
        app.sync();
        app.screen.tick();
        terminal.draw(|f| render_dashboard(f, &app.screen))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                // Skip events that are not KeyEventKind::Press
                if key.kind == event::KeyEventKind::Release {
                    continue;
                }
                if let Some(command) = Command::from_key(key.code) {
                    if !app.handle(command) {
                        return Ok(());
                    }
                }
            }
        }
    }
}
