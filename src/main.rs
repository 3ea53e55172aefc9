mod actions;
mod config;
mod consts;
mod dashboard;
mod environment;
mod events;
mod logging;
mod pretty;
mod registry;
mod rpc;
mod session;
mod ui;

use crate::config::{Config, get_config_path};
use crate::dashboard::badges::SmsType;
use crate::environment::Environment;
use crate::logging::init_console_logger;
use crate::pretty::{print_cmd_error, print_cmd_info};
use crate::rpc::OdooRpcClient;
use crate::session::{run_balance, run_headless_mode, run_tui_mode, setup_session};
use clap::{Parser, Subcommand};
use std::error::Error;
use std::path::Path;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Terminal dashboard for SU SMS campaigns
struct Args {
    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Authenticate against an Odoo server and save the session.
    Login {
        /// Server URL, or "local" for http://localhost:8069
        #[arg(long, value_name = "URL", default_value = "local")]
        url: String,

        /// Odoo database name
        #[arg(long, value_name = "DATABASE")]
        db: String,

        /// Odoo user login
        #[arg(long, value_name = "LOGIN")]
        login: String,

        /// Password; read from SU_SMS_PASSWORD when omitted
        #[arg(long, env = "SU_SMS_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Clear the saved session.
    Logout,
    /// Open the SMS dashboard.
    Dashboard {
        /// Print a one-shot report instead of starting the TUI
        #[arg(long, action = clap::ArgAction::SetTrue)]
        headless: bool,

        /// Paint a background color behind the dashboard
        #[arg(long, action = clap::ArgAction::SetTrue)]
        with_background: bool,
    },
    /// Print the provider credit balance.
    Balance,
    /// Open the Send SMS form in the browser.
    Compose {
        /// Preselected SMS type
        #[arg(long, value_enum)]
        sms_type: Option<SmsType>,
    },
    /// Open the SMS message history in the browser.
    History,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    let config_path = get_config_path()?;

    match args.command {
        Command::Login {
            url,
            db,
            login,
            password,
        } => {
            init_console_logger();
            let environment = url.parse::<Environment>()?;
            login_command(environment, &db, &login, &password, &config_path).await
        }
        Command::Logout => {
            println!("Logging out and clearing session configuration file...");
            Config::clear(&config_path).map_err(Into::into)
        }
        Command::Dashboard {
            headless,
            with_background,
        } => {
            let (config, environment) = load_session(&config_path)?;
            if headless {
                init_console_logger();
                let session = setup_session(environment, &config, false)?;
                run_headless_mode(session).await
            } else {
                // Log records go to the activity panel instead of stderr.
                let session = setup_session(environment, &config, true)?;
                run_tui_mode(session, with_background).await
            }
        }
        Command::Balance => {
            init_console_logger();
            let (config, environment) = load_session(&config_path)?;
            run_balance(setup_session(environment, &config, false)?).await
        }
        Command::Compose { sms_type } => {
            init_console_logger();
            let (config, environment) = load_session(&config_path)?;
            let session = setup_session(environment, &config, true)?;
            let sms_type = sms_type.map(|t| t.to_string());
            session.dashboard.open_compose(sms_type.as_deref())?;
            Ok(())
        }
        Command::History => {
            init_console_logger();
            let (config, environment) = load_session(&config_path)?;
            let session = setup_session(environment, &config, true)?;
            session.dashboard.view_history()?;
            Ok(())
        }
    }
}

/// Opens an Odoo session and stores its cookie in the config file.
async fn login_command(
    environment: Environment,
    database: &str,
    login: &str,
    password: &str,
    config_path: &Path,
) -> Result<(), Box<dyn Error>> {
    let client = OdooRpcClient::new(environment, None)?;
    match client.authenticate(database, login, password).await {
        Ok(session_id) => {
            let config = Config::new(
                client.environment().server_url(),
                database.to_string(),
                session_id,
            );
            config
                .save(config_path)
                .map_err(|e| format!("Failed to save config: {}", e))?;
            print_cmd_info!(
                "Logged in",
                "{} on {} ({})",
                login,
                client.environment(),
                database
            );
            Ok(())
        }
        Err(e) => {
            print_cmd_error!("Login failed", "{}", e);
            Err(e.into())
        }
    }
}

/// Reads the saved session. `SU_SMS_SERVER` overrides the stored server.
fn load_session(config_path: &Path) -> Result<(Config, Environment), Box<dyn Error>> {
    if !config_path.exists() {
        return Err(Box::from(
            "No saved session. Run `su-sms login` first.".to_string(),
        ));
    }
    let config = Config::load_from_file(config_path)
        .map_err(|e| format!("Failed to load config: {}", e))?;

    let environment = match std::env::var("SU_SMS_SERVER") {
        Ok(server) if !server.is_empty() => server.parse::<Environment>()?,
        _ => config.environment(),
    };
    Ok((config, environment))
}
