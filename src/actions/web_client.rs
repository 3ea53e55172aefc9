//! Action service backed by the Odoo web client in a browser.

use super::{ActionError, ActionService, WindowAction};
use crate::environment::Environment;
use serde_json::Value;

#[derive(Debug, Clone)]
pub struct WebClientActions {
    environment: Environment,
    /// When false the URL is only logged, e.g. on headless machines.
    launch: bool,
}

impl WebClientActions {
    pub fn new(environment: Environment, launch: bool) -> Self {
        Self {
            environment,
            launch,
        }
    }

    /// `/odoo/action-<xml id>`
    pub fn list_url(&self, action_id: &str) -> String {
        format!(
            "{}/odoo/action-{}",
            self.environment.server_url(),
            urlencoding::encode(action_id)
        )
    }

    /// Hash URL of a new-record form. Context entries ride along as extra hash
    /// parameters, which the web client passes through as defaults.
    pub fn form_url(&self, action: &WindowAction) -> Result<String, ActionError> {
        if action.view_mode != "form" {
            return Err(ActionError::Unsupported(format!(
                "view mode '{}' for {}",
                action.view_mode, action.res_model
            )));
        }

        let mut url = format!(
            "{}/web#model={}&view_type=form",
            self.environment.server_url(),
            urlencoding::encode(&action.res_model)
        );
        for (key, value) in &action.context {
            let text = match value {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            url.push_str(&format!(
                "&{}={}",
                urlencoding::encode(key),
                urlencoding::encode(&text)
            ));
        }
        Ok(url)
    }

    fn launch_url(&self, url: String) -> Result<(), ActionError> {
        if !self.launch {
            log::info!("Open in browser: {}", url);
            return Ok(());
        }
        log::debug!("Launching {}", url);
        open::that(&url).map_err(|source| ActionError::Launch {
            target: url,
            source,
        })
    }
}

impl ActionService for WebClientActions {
    fn open_form(&self, action: &WindowAction) -> Result<(), ActionError> {
        let url = self.form_url(action)?;
        self.launch_url(url)
    }

    fn open_list(&self, action_id: &str) -> Result<(), ActionError> {
        self.launch_url(self.list_url(action_id))
    }
}
