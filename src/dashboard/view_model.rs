//! SMS dashboard view-model
//!
//! Owns the observable [`DashboardState`] and the operations the renderer and
//! key bindings call. Both fetches only touch their own fields, so they can
//! run concurrently against the same view-model.

use super::state::{DashboardState, StateField};
use crate::actions::{ActionError, ActionService, WindowAction};
use crate::consts::cli_consts::{
    BALANCE_ROUTE, COMPOSE_MODEL, COMPOSE_TITLE, COMPOSE_TYPE_CONTEXT_KEY, DASHBOARD_STATS_ROUTE,
    HISTORY_ACTION_ID, STATE_CHANGE_CAPACITY,
};
use crate::rpc::RpcClient;
use crate::rpc::error::RpcError;
use crate::rpc::types::{BalanceReply, DashboardStats, decode};
use serde_json::json;
use std::sync::Arc;
use tokio::sync::{broadcast, watch};

pub struct SmsDashboard {
    rpc: Arc<dyn RpcClient>,
    actions: Arc<dyn ActionService>,
    state: watch::Sender<DashboardState>,
    changes: broadcast::Sender<StateField>,
}

impl SmsDashboard {
    pub fn new(rpc: Arc<dyn RpcClient>, actions: Arc<dyn ActionService>) -> Self {
        let (changes, _) = broadcast::channel(STATE_CHANGE_CAPACITY);
        Self {
            rpc,
            actions,
            state: watch::Sender::new(DashboardState::new()),
            changes,
        }
    }

    /// Current state.
    pub fn snapshot(&self) -> DashboardState {
        self.state.borrow().clone()
    }

    /// Receives a fresh snapshot after every mutation.
    pub fn subscribe(&self) -> watch::Receiver<DashboardState> {
        self.state.subscribe()
    }

    /// Receives the name of every field as it changes.
    pub fn subscribe_fields(&self) -> broadcast::Receiver<StateField> {
        self.changes.subscribe()
    }

    fn update<F>(&self, mutate: F)
    where
        F: FnOnce(&mut DashboardState) -> Vec<StateField>,
    {
        let mut changed = Vec::new();
        self.state.send_modify(|state| changed = mutate(state));
        for field in changed {
            // No subscribers is fine.
            let _ = self.changes.send(field);
        }
    }

    /// Starts both fetches without ordering them.
    pub async fn mount(&self) {
        tokio::join!(self.load_stats(), self.load_balance());
    }

    async fn fetch_stats(&self) -> Result<DashboardStats, RpcError> {
        let result = self.rpc.post(DASHBOARD_STATS_ROUTE, json!({})).await?;
        Ok(decode(result)?)
    }

    async fn fetch_balance(&self) -> Result<BalanceReply, RpcError> {
        let result = self.rpc.post(BALANCE_ROUTE, json!({})).await?;
        Ok(decode(result)?)
    }

    /// Failures are logged only; the previous figures stay on screen.
    pub async fn load_stats(&self) {
        match self.fetch_stats().await {
            Ok(stats) => self.update(|state| state.apply_stats(stats)),
            Err(e) => {
                log::error!("Failed to load SMS stats: {}", e);
                if e.is_session_expired() {
                    log::warn!("Session expired, run `su-sms login` again");
                }
            }
        }
        self.update(DashboardState::finish_stats);
    }

    pub async fn load_balance(&self) {
        self.update(DashboardState::begin_balance);
        match self.fetch_balance().await {
            Ok(reply) => self.update(|state| state.apply_balance(reply)),
            Err(e) => {
                log::warn!("Balance request failed: {}", e);
                self.update(|state| state.fail_balance(e.to_string()));
            }
        }
        self.update(DashboardState::finish_balance);
    }

    /// Balance first, then statistics, one after the other.
    pub async fn refresh_balance(&self) {
        self.load_balance().await;
        self.load_stats().await;
    }

    /// Opens the compose dialog, preselecting `sms_type` when given.
    pub fn open_compose(&self, sms_type: Option<&str>) -> Result<(), ActionError> {
        let mut action = WindowAction::new_record_dialog(COMPOSE_TITLE, COMPOSE_MODEL);
        if let Some(sms_type) = sms_type.filter(|t| !t.is_empty()) {
            action = action.with_context(COMPOSE_TYPE_CONTEXT_KEY, sms_type);
        }
        self.actions.open_form(&action)
    }

    pub fn view_history(&self) -> Result<(), ActionError> {
        self.actions.open_list(HISTORY_ACTION_ID)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::MockActionService;
    use crate::rpc::MockRpcClient;
    use mockall::Sequence;
    use serde_json::{Value, json};

    fn stats_reply() -> Value {
        json!({
            "messages": [
                {"id": 1, "sms_type": "staff", "state": "done", "success_count": 40, "total_cost": 32.0},
                {"id": 2, "sms_type": "adhoc", "state": "partial", "success_count": 8, "total_cost": 6.4},
                {"id": 3, "sms_type": "manual", "state": "failed", "success_count": 0, "total_cost": 0.0}
            ],
            "dept_stats": [{"id": 1, "name": "ICT Services", "total_cost": 38.4}],
            "total_sent": 48,
            "total_cost": 38.4,
            "is_manager": true
        })
    }

    fn dashboard_with(rpc: MockRpcClient) -> SmsDashboard {
        SmsDashboard::new(Arc::new(rpc), Arc::new(MockActionService::new()))
    }

    fn rpc_answering(route: &'static str, reply: Result<Value, RpcError>) -> MockRpcClient {
        let mut rpc = MockRpcClient::new();
        let mut reply = Some(reply);
        rpc.expect_post()
            .withf(move |r, _| r == route)
            .times(1)
            .returning(move |_, _| reply.take().unwrap_or(Err(RpcError::MissingResult)));
        rpc
    }

    /// Answers successive calls with `replies`, in order.
    fn rpc_replaying(replies: Vec<Result<Value, RpcError>>) -> MockRpcClient {
        let mut rpc = MockRpcClient::new();
        let count = replies.len();
        let mut replies = replies.into_iter();
        rpc.expect_post()
            .times(count)
            .returning(move |_, _| replies.next().unwrap_or(Err(RpcError::MissingResult)));
        rpc
    }

    #[test]
    fn test_initial_state() {
        let dashboard = dashboard_with(MockRpcClient::new());
        let state = dashboard.snapshot();
        assert!(state.loading());
        assert!(state.loading_balance());
        assert_eq!(state.balance(), "-");
        assert_eq!(state.balance_error(), None);
        assert_eq!(state.campaign_count(), 0);
    }

    #[tokio::test]
    async fn test_load_stats_populates_state() {
        let dashboard = dashboard_with(rpc_answering(DASHBOARD_STATS_ROUTE, Ok(stats_reply())));
        dashboard.load_stats().await;

        let state = dashboard.snapshot();
        assert!(!state.loading());
        assert_eq!(state.campaign_count(), state.messages().len());
        assert_eq!(state.campaign_count(), 3);
        assert_eq!(state.dept_count(), state.dept_stats().len());
        assert_eq!(state.dept_count(), 1);
        assert_eq!(state.total_sent(), 48);
        assert_eq!(state.total_cost(), 38.4);
        assert!(state.is_manager());
    }

    #[tokio::test]
    async fn test_load_stats_defaults_missing_fields() {
        let dashboard = dashboard_with(rpc_answering(DASHBOARD_STATS_ROUTE, Ok(json!({}))));
        dashboard.load_stats().await;

        let state = dashboard.snapshot();
        assert!(!state.loading());
        assert!(state.messages().is_empty());
        assert_eq!(state.campaign_count(), 0);
        assert_eq!(state.dept_count(), 0);
        assert!(!state.is_manager());
    }

    #[tokio::test]
    async fn test_load_stats_failure_keeps_previous_values() {
        let dashboard = dashboard_with(rpc_replaying(vec![
            Ok(stats_reply()),
            Err(RpcError::Http {
                status: 502,
                message: "Bad Gateway".to_string(),
            }),
        ]));

        dashboard.load_stats().await;
        let before = dashboard.snapshot();
        dashboard.load_stats().await;
        let after = dashboard.snapshot();

        assert_eq!(before, after);
        assert!(!after.loading());
        assert_eq!(after.campaign_count(), 3);
    }

    #[tokio::test]
    async fn test_load_stats_keeps_records_with_unexpected_shapes() {
        let reply = json!({
            "messages": [
                {"id": 1, "sms_type": "staff", "state": "done", "success_count": 40},
                {"id": 2, "sms_type": "adhoc", "state": "partial", "success_count": 2.0}
            ],
            "dept_stats": [{"id": 1, "name": "ICT Services", "chart_code": 12}],
            "total_sent": 42,
            "total_cost": 33.6,
            "is_manager": true
        });
        let dashboard = dashboard_with(rpc_answering(DASHBOARD_STATS_ROUTE, Ok(reply)));
        dashboard.load_stats().await;

        let state = dashboard.snapshot();
        assert_eq!(state.campaign_count(), 2);
        assert_eq!(state.messages()[1].success_count, 2);
        assert_eq!(state.dept_count(), 1);
        assert_eq!(state.total_sent(), 42);
        assert!(state.is_manager());
    }

    #[tokio::test]
    async fn test_load_stats_null_result_is_logged_not_applied() {
        let dashboard = dashboard_with(rpc_answering(DASHBOARD_STATS_ROUTE, Ok(Value::Null)));
        dashboard.load_stats().await;

        let state = dashboard.snapshot();
        assert!(!state.loading());
        assert_eq!(state.campaign_count(), 0);
    }

    #[tokio::test]
    async fn test_load_balance_success() {
        let dashboard = dashboard_with(rpc_answering(
            BALANCE_ROUTE,
            Ok(json!({"balance": "120.50", "error": false})),
        ));
        dashboard.load_balance().await;

        let state = dashboard.snapshot();
        assert_eq!(state.balance(), "120.50");
        assert_eq!(state.balance_error(), None);
        assert!(!state.loading_balance());
    }

    #[tokio::test]
    async fn test_load_balance_application_error() {
        let dashboard = dashboard_with(rpc_answering(
            BALANCE_ROUTE,
            Ok(json!({"balance": null, "error": "insufficient credit"})),
        ));
        dashboard.load_balance().await;

        let state = dashboard.snapshot();
        assert_eq!(state.balance_error(), Some("insufficient credit"));
        assert_eq!(state.balance(), "-");
        assert!(!state.loading_balance());
    }

    #[tokio::test]
    async fn test_load_balance_empty_value_shows_placeholder() {
        let dashboard = dashboard_with(rpc_answering(BALANCE_ROUTE, Ok(json!({"balance": ""}))));
        dashboard.load_balance().await;
        assert_eq!(dashboard.snapshot().balance(), "-");
    }

    #[tokio::test]
    async fn test_load_balance_transport_failure_keeps_balance() {
        let dashboard = dashboard_with(rpc_replaying(vec![
            Ok(json!({"balance": "KES 55.00"})),
            Err(RpcError::Server {
                code: 100,
                message: "Odoo Session Expired".to_string(),
            }),
        ]));

        dashboard.load_balance().await;
        dashboard.load_balance().await;

        let state = dashboard.snapshot();
        assert_eq!(state.balance(), "KES 55.00");
        assert_eq!(
            state.balance_error(),
            Some("RPC error 100: Odoo Session Expired")
        );
        assert!(!state.loading_balance());
    }

    #[tokio::test]
    async fn test_load_balance_clears_previous_error() {
        let dashboard = dashboard_with(rpc_replaying(vec![
            Ok(json!({"error": "insufficient credit"})),
            Ok(json!({"balance": "KES 1.00"})),
        ]));

        dashboard.load_balance().await;
        dashboard.load_balance().await;

        let state = dashboard.snapshot();
        assert_eq!(state.balance_error(), None);
        assert_eq!(state.balance(), "KES 1.00");
    }

    #[tokio::test]
    async fn test_refresh_balance_runs_balance_before_stats() {
        let mut rpc = MockRpcClient::new();
        let mut seq = Sequence::new();
        rpc.expect_post()
            .withf(|route, _| route == BALANCE_ROUTE)
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(json!({"balance": "KES 9.00"})));
        rpc.expect_post()
            .withf(|route, _| route == DASHBOARD_STATS_ROUTE)
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(stats_reply()));
        let dashboard = dashboard_with(rpc);

        dashboard.refresh_balance().await;

        let state = dashboard.snapshot();
        assert_eq!(state.balance(), "KES 9.00");
        assert_eq!(state.campaign_count(), 3);
    }

    #[tokio::test]
    async fn test_mount_runs_both_fetches() {
        let mut rpc = MockRpcClient::new();
        rpc.expect_post()
            .withf(|route, params| route == DASHBOARD_STATS_ROUTE && *params == json!({}))
            .times(1)
            .returning(|_, _| Ok(stats_reply()));
        rpc.expect_post()
            .withf(|route, params| route == BALANCE_ROUTE && *params == json!({}))
            .times(1)
            .returning(|_, _| Ok(json!({"balance": "KES 3.00"})));
        let dashboard = dashboard_with(rpc);

        dashboard.mount().await;

        let state = dashboard.snapshot();
        assert!(!state.loading());
        assert!(!state.loading_balance());
        assert_eq!(state.balance(), "KES 3.00");
        assert_eq!(state.campaign_count(), 3);
    }

    #[tokio::test]
    async fn test_field_notifications() {
        let dashboard = dashboard_with(rpc_answering(BALANCE_ROUTE, Ok(json!({"balance": "1"}))));
        let mut fields = dashboard.subscribe_fields();
        let mut snapshots = dashboard.subscribe();

        dashboard.load_balance().await;

        let mut seen = Vec::new();
        while let Ok(field) = fields.try_recv() {
            seen.push(field);
        }
        assert_eq!(
            seen,
            vec![
                StateField::LoadingBalance,
                StateField::BalanceError,
                StateField::Balance,
                StateField::LoadingBalance,
            ]
        );
        assert!(snapshots.has_changed().unwrap());
        assert_eq!(snapshots.borrow_and_update().balance(), "1");
    }

    #[test]
    fn test_open_compose_with_type() {
        let mut actions = MockActionService::new();
        actions
            .expect_open_form()
            .withf(|action| {
                action.res_model == "su.sms.compose"
                    && action.target == crate::actions::ActionTarget::New
                    && action.context.get("default_sms_type") == Some(&json!("staff"))
            })
            .times(1)
            .returning(|_| Ok(()));
        let dashboard = SmsDashboard::new(Arc::new(MockRpcClient::new()), Arc::new(actions));

        assert!(dashboard.open_compose(Some("staff")).is_ok());
    }

    #[test]
    fn test_open_compose_without_type_sets_no_default() {
        let mut actions = MockActionService::new();
        actions
            .expect_open_form()
            .withf(|action| action.context.is_empty() && action.name == "Send SMS")
            .times(1)
            .returning(|_| Ok(()));
        let dashboard = SmsDashboard::new(Arc::new(MockRpcClient::new()), Arc::new(actions));

        assert!(dashboard.open_compose(None).is_ok());
    }

    #[test]
    fn test_view_history_opens_list_action() {
        let mut actions = MockActionService::new();
        actions
            .expect_open_list()
            .withf(|action_id| action_id == "su_sms_integrated.action_su_sms_message")
            .times(1)
            .returning(|_| Ok(()));
        let dashboard = SmsDashboard::new(Arc::new(MockRpcClient::new()), Arc::new(actions));

        assert!(dashboard.view_history().is_ok());
    }
}
