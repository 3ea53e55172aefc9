//! Session setup
//!
//! Builds the host services and instantiates the dashboard through the
//! client-action registry.

use crate::actions::WebClientActions;
use crate::config::Config;
use crate::consts::cli_consts::DASHBOARD_ACTION_KEY;
use crate::dashboard::{self, SmsDashboard};
use crate::environment::Environment;
use crate::registry::{ActionRegistry, Services};
use crate::rpc::OdooRpcClient;
use std::error::Error;
use std::sync::Arc;

/// Everything a command needs to talk to the server.
pub struct SessionData {
    pub dashboard: Arc<SmsDashboard>,
    pub environment: Environment,
}

/// Wires the RPC client and action service for `environment` and builds the
/// dashboard registered under [`DASHBOARD_ACTION_KEY`].
///
/// # Arguments
/// * `environment` - The server to talk to.
/// * `config` - Saved session; its cookie authenticates the RPC calls.
/// * `launch_browser` - Whether navigation opens a browser or only logs the URL.
pub fn setup_session(
    environment: Environment,
    config: &Config,
    launch_browser: bool,
) -> Result<SessionData, Box<dyn Error>> {
    let rpc = OdooRpcClient::new(environment.clone(), Some(config.session_id.clone()))?;
    let services = Services {
        rpc: Arc::new(rpc),
        actions: Arc::new(WebClientActions::new(environment.clone(), launch_browser)),
    };

    let mut registry = ActionRegistry::new();
    dashboard::register(&mut registry)?;
    let dashboard = registry.instantiate(DASHBOARD_ACTION_KEY, &services)?;

    Ok(SessionData {
        dashboard: Arc::new(dashboard),
        environment,
    })
}
