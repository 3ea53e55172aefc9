//! Dashboard state management
//!
//! Contains the view state struct and the field identifiers used for change
//! notification.

use crate::consts::cli_consts::PLACEHOLDER;
use crate::rpc::types::{DeptStat, Message};

/// Identifies a single field of [`DashboardState`] in change notifications.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, strum::Display)]
pub enum StateField {
    Loading,
    LoadingBalance,
    Balance,
    BalanceError,
    Messages,
    DeptStats,
    TotalSent,
    TotalCost,
    CampaignCount,
    DeptCount,
    IsManager,
}

/// View state of the SMS dashboard.
///
/// The collections are private so the derived counts can only change together
/// with them.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardState {
    /// Statistics have not arrived (or failed) yet.
    pub(super) loading: bool,
    /// A balance request is outstanding.
    pub(super) loading_balance: bool,
    /// Provider credit, `-` until a balance arrives.
    pub(super) balance: String,
    /// Error text of the last balance request.
    pub(super) balance_error: Option<String>,
    pub(super) messages: Vec<Message>,
    pub(super) dept_stats: Vec<DeptStat>,
    pub(super) total_sent: u64,
    pub(super) total_cost: f64,
    pub(super) campaign_count: usize,
    pub(super) dept_count: usize,
    /// Whether the server considers the user an SMS manager.
    pub(super) is_manager: bool,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardState {
    /// State at mount time, before any request completes.
    pub fn new() -> Self {
        Self {
            loading: true,
            loading_balance: true,
            balance: PLACEHOLDER.to_string(),
            balance_error: None,
            messages: Vec::new(),
            dept_stats: Vec::new(),
            total_sent: 0,
            total_cost: 0.0,
            campaign_count: 0,
            dept_count: 0,
            is_manager: false,
        }
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn loading_balance(&self) -> bool {
        self.loading_balance
    }

    pub fn balance(&self) -> &str {
        &self.balance
    }

    pub fn balance_error(&self) -> Option<&str> {
        self.balance_error.as_deref()
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn dept_stats(&self) -> &[DeptStat] {
        &self.dept_stats
    }

    pub fn total_sent(&self) -> u64 {
        self.total_sent
    }

    pub fn total_cost(&self) -> f64 {
        self.total_cost
    }

    pub fn campaign_count(&self) -> usize {
        self.campaign_count
    }

    pub fn dept_count(&self) -> usize {
        self.dept_count
    }

    pub fn is_manager(&self) -> bool {
        self.is_manager
    }
}
