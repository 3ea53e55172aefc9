//! Screen state for the terminal dashboard
//!
//! Everything the renderer needs besides the view-model snapshot.

use crate::consts::cli_consts::MAX_ACTIVITY_LOGS;
use crate::dashboard::DashboardState;
use crate::environment::Environment;
use crate::events::Event;

use std::collections::VecDeque;
use std::time::Instant;

#[derive(Debug)]
pub struct DashboardScreen {
    /// Latest view-model snapshot.
    pub snapshot: DashboardState,
    /// The server the dashboard reads from.
    pub environment: Environment,
    /// When the screen was opened.
    pub start_time: Instant,
    /// Recent log output, oldest first.
    pub activity_logs: VecDeque<Event>,
    /// Animation tick counter
    pub tick: usize,
    /// Whether to enable background colors
    pub with_background_color: bool,
}

impl DashboardScreen {
    pub fn new(snapshot: DashboardState, environment: Environment, with_background_color: bool) -> Self {
        Self {
            snapshot,
            environment,
            start_time: Instant::now(),
            activity_logs: VecDeque::new(),
            tick: 0,
            with_background_color,
        }
    }

    /// Advance the animation.
    pub fn tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
    }

    /// Add an event to activity logs with size limit
    pub fn add_to_activity_log(&mut self, event: Event) {
        if self.activity_logs.len() >= MAX_ACTIVITY_LOGS {
            self.activity_logs.pop_front();
        }
        self.activity_logs.push_back(event);
    }
}
