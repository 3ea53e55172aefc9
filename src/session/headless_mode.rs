//! Headless mode execution
//!
//! One-shot commands that fetch once and print plain text.

use super::{SessionData, announce_exit, announce_start};
use crate::dashboard::DashboardState;
use crate::dashboard::badges::type_label;
use crate::dashboard::format::{format_cost, format_optional_date};
use crate::pretty::print_cmd_error;
use std::error::Error;
use std::fmt::Write;

/// Plain-text rendering of a dashboard snapshot.
pub fn render_report(state: &DashboardState) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Credit balance : {}", state.balance());
    if let Some(error) = state.balance_error() {
        let _ = writeln!(out, "Balance error  : {}", error);
    }
    let _ = writeln!(out, "Campaigns      : {}", state.campaign_count());
    let _ = writeln!(out, "SMS sent       : {}", state.total_sent());
    let _ = writeln!(out, "Total cost     : {}", format_cost(Some(state.total_cost())));

    if !state.messages().is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "{:<12} {:<8} {:<8} {:>10} {:>6} {:>10}",
            "DATE", "TYPE", "STATUS", "RECIPIENTS", "SENT", "COST"
        );
        for message in state.messages() {
            let _ = writeln!(
                out,
                "{:<12} {:<8} {:<8} {:>10} {:>6} {:>10}",
                format_optional_date(message.create_date.as_deref()),
                type_label(message.sms_type.as_deref().unwrap_or_default()),
                message.state.as_deref().unwrap_or("-"),
                message.recipient_count,
                message.success_count,
                format_cost(message.total_cost),
            );
        }
    }

    if state.is_manager() && state.dept_count() > 0 {
        let _ = writeln!(out);
        let _ = writeln!(out, "Departments    : {}", state.dept_count());
        for dept in state.dept_stats() {
            let _ = writeln!(
                out,
                "  {:<40} {:>10}",
                dept.name,
                format_cost(dept.total_cost)
            );
        }
    }
    out
}

/// Loads the dashboard once and prints it.
pub async fn run_headless_mode(session: SessionData) -> Result<(), Box<dyn Error>> {
    announce_start("Headless", &session.environment);

    session.dashboard.mount().await;
    print!("{}", render_report(&session.dashboard.snapshot()));

    announce_exit();
    Ok(())
}

/// Refreshes the balance (then the statistics) and prints the balance line.
pub async fn run_balance(session: SessionData) -> Result<(), Box<dyn Error>> {
    session.dashboard.refresh_balance().await;
    let state = session.dashboard.snapshot();
    match state.balance_error() {
        Some(error) => {
            print_cmd_error!("Balance unavailable", "{}", error);
            Err(Box::from(error.to_string()))
        }
        None => {
            println!("{}", state.balance());
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::MockActionService;
    use crate::dashboard::SmsDashboard;
    use crate::rpc::MockRpcClient;
    use crate::consts::cli_consts::{BALANCE_ROUTE, DASHBOARD_STATS_ROUTE};
    use serde_json::json;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_report_lists_campaigns_and_departments() {
        let mut rpc = MockRpcClient::new();
        rpc.expect_post()
            .withf(|route, _| route == DASHBOARD_STATS_ROUTE)
            .returning(|_, _| {
                Ok(json!({
                    "messages": [{
                        "sms_type": "student",
                        "state": "done",
                        "recipient_count": 10,
                        "success_count": 9,
                        "total_cost": 7.2,
                        "create_date": "2025-01-15 08:00:00"
                    }],
                    "dept_stats": [{"name": "Finance", "total_cost": 7.2}],
                    "total_sent": 9,
                    "total_cost": 7.2,
                    "is_manager": true
                }))
            });
        rpc.expect_post()
            .withf(|route, _| route == BALANCE_ROUTE)
            .returning(|_, _| Ok(json!({"error": "Could not reach Africa's Talking API"})));
        let dashboard = SmsDashboard::new(Arc::new(rpc), Arc::new(MockActionService::new()));

        dashboard.mount().await;
        let report = render_report(&dashboard.snapshot());

        assert!(report.contains("Credit balance : -"));
        assert!(report.contains("Balance error  : Could not reach Africa's Talking API"));
        assert!(report.contains("15 Jan 2025"));
        assert!(report.contains("Student"));
        assert!(report.contains("Finance"));
        assert!(report.contains("7.20"));
    }

    #[test]
    fn test_report_for_fresh_state() {
        let report = render_report(&DashboardState::new());
        assert!(report.contains("Campaigns      : 0"));
        assert!(!report.contains("DATE"));
    }
}
