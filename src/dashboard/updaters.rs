//! Dashboard state update logic
//!
//! Each updater mutates the state and reports which fields it touched.

use super::state::{DashboardState, StateField};
use crate::consts::cli_consts::PLACEHOLDER;
use crate::rpc::types::{BalanceReply, DashboardStats};

impl DashboardState {
    /// Replace the statistics wholesale and recompute the derived counts.
    pub(super) fn apply_stats(&mut self, stats: DashboardStats) -> Vec<StateField> {
        self.messages = stats.messages;
        self.dept_stats = stats.dept_stats;
        self.total_sent = stats.total_sent;
        self.total_cost = stats.total_cost;
        self.campaign_count = self.messages.len();
        self.dept_count = self.dept_stats.len();
        self.is_manager = stats.is_manager;

        vec![
            StateField::Messages,
            StateField::DeptStats,
            StateField::TotalSent,
            StateField::TotalCost,
            StateField::CampaignCount,
            StateField::DeptCount,
            StateField::IsManager,
        ]
    }

    pub(super) fn finish_stats(&mut self) -> Vec<StateField> {
        self.loading = false;
        vec![StateField::Loading]
    }

    pub(super) fn begin_balance(&mut self) -> Vec<StateField> {
        self.loading_balance = true;
        self.balance_error = None;
        vec![StateField::LoadingBalance, StateField::BalanceError]
    }

    /// An application-reported error wins over any balance in the same reply.
    pub(super) fn apply_balance(&mut self, reply: BalanceReply) -> Vec<StateField> {
        match reply.error {
            Some(error) => {
                self.balance_error = Some(error);
                self.balance = PLACEHOLDER.to_string();
                vec![StateField::BalanceError, StateField::Balance]
            }
            None => {
                self.balance = reply.balance.unwrap_or_else(|| PLACEHOLDER.to_string());
                vec![StateField::Balance]
            }
        }
    }

    /// Transport failure: the error is shown but the last balance stays.
    pub(super) fn fail_balance(&mut self, error: String) -> Vec<StateField> {
        self.balance_error = Some(error);
        vec![StateField::BalanceError]
    }

    pub(super) fn finish_balance(&mut self) -> Vec<StateField> {
        self.loading_balance = false;
        vec![StateField::LoadingBalance]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rpc::types::{DeptStat, Message};

    #[test]
    fn test_apply_stats_recomputes_counts() {
        let mut state = DashboardState::new();
        state.apply_stats(DashboardStats {
            messages: vec![Message::default(), Message::default()],
            dept_stats: vec![DeptStat::default()],
            total_sent: 12,
            total_cost: 9.6,
            is_manager: true,
        });
        assert_eq!(state.campaign_count(), 2);
        assert_eq!(state.dept_count(), 1);
        assert!(state.is_manager());

        state.apply_stats(DashboardStats::default());
        assert_eq!(state.campaign_count(), 0);
        assert_eq!(state.dept_count(), 0);
        assert_eq!(state.total_sent(), 0);
        assert!(!state.is_manager());
    }

    #[test]
    fn test_apply_balance_error_resets_balance() {
        let mut state = DashboardState::new();
        state.apply_balance(BalanceReply {
            balance: Some("KES 10".to_string()),
            error: None,
        });
        assert_eq!(state.balance(), "KES 10");

        state.apply_balance(BalanceReply {
            balance: None,
            error: Some("insufficient credit".to_string()),
        });
        assert_eq!(state.balance(), "-");
        assert_eq!(state.balance_error(), Some("insufficient credit"));
    }

    #[test]
    fn test_fail_balance_keeps_previous_value() {
        let mut state = DashboardState::new();
        state.apply_balance(BalanceReply {
            balance: Some("KES 10".to_string()),
            error: None,
        });
        let changed = state.fail_balance("timed out".to_string());
        assert_eq!(changed, vec![StateField::BalanceError]);
        assert_eq!(state.balance(), "KES 10");
    }
}
