pub mod headless_mode;
pub mod setup;
pub mod tui_mode;

pub use headless_mode::{run_balance, run_headless_mode};
pub use setup::{SessionData, setup_session};
pub use tui_mode::run_tui_mode;

use crate::environment::Environment;
use crate::pretty::print_cmd_info;

/// Names the server a dashboard mode reads from before it takes over stdout.
fn announce_start(mode: &str, environment: &Environment) {
    print_cmd_info!("SU SMS", "{} dashboard on {}", mode, environment.server_url());
}

fn announce_exit() {
    print_cmd_info!("SU SMS", "Dashboard closed");
}
