//! SMS campaign dashboard
//!
//! View-model, state and display helpers. Rendering lives in `crate::ui`.

pub mod badges;
pub mod format;
pub mod state;
pub mod updaters;
pub mod view_model;

pub use state::{DashboardState, StateField};
pub use view_model::SmsDashboard;

use crate::consts::cli_consts::DASHBOARD_ACTION_KEY;
use crate::registry::{ActionRegistry, RegistryError, Services};

/// Registers the dashboard as a client action. Call once during bootstrap.
pub fn register(registry: &mut ActionRegistry) -> Result<(), RegistryError> {
    registry.add(DASHBOARD_ACTION_KEY, |services: &Services| {
        SmsDashboard::new(services.rpc.clone(), services.actions.clone())
    })
}
