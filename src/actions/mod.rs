//! Host action service
//!
//! The dashboard never navigates itself; it describes what to open and hands
//! the request to an [`ActionService`].

use serde::{Serialize, Serializer};
use serde_json::{Map, Value};
use thiserror::Error;

pub mod web_client;
pub use web_client::WebClientActions;

#[cfg(test)]
use mockall::automock;

#[derive(Debug, Error)]
pub enum ActionError {
    /// The action could not be expressed for this host.
    #[error("Unsupported action: {0}")]
    Unsupported(String),

    /// Launching the target failed.
    #[error("Failed to open {target}: {source}")]
    Launch {
        target: String,
        #[source]
        source: std::io::Error,
    },
}

/// An `ir.actions.act_window` request, serialised the way the web client expects it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WindowAction {
    #[serde(rename = "type")]
    pub action_type: &'static str,
    pub name: String,
    pub res_model: String,
    pub view_mode: String,
    /// `[[view_id, view_type]]`; `None` selects the model's default view.
    #[serde(serialize_with = "views_with_false")]
    pub views: Vec<(Option<i64>, String)>,
    pub target: ActionTarget,
    pub context: Map<String, Value>,
}

impl WindowAction {
    /// A single form view opened as a modal dialog on a new record.
    pub fn new_record_dialog(name: &str, res_model: &str) -> Self {
        Self {
            action_type: "ir.actions.act_window",
            name: name.to_string(),
            res_model: res_model.to_string(),
            view_mode: "form".to_string(),
            views: vec![(None, "form".to_string())],
            target: ActionTarget::New,
            context: Map::new(),
        }
    }

    pub fn with_context(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.context.insert(key.to_string(), value.into());
        self
    }
}

// Odoo spells "no specific view" as `false`, not `null`.
fn views_with_false<S: Serializer>(
    views: &[(Option<i64>, String)],
    serializer: S,
) -> Result<S::Ok, S::Error> {
    let pairs: Vec<(Value, &str)> = views
        .iter()
        .map(|(id, kind)| (id.map_or(Value::Bool(false), Value::from), kind.as_str()))
        .collect();
    pairs.serialize(serializer)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionTarget {
    /// Modal dialog.
    New,
}

/// Navigation capability provided by the host.
#[cfg_attr(test, automock)]
pub trait ActionService: Send + Sync {
    /// Opens a window action (typically a form). Does not wait for the form to close.
    fn open_form(&self, action: &WindowAction) -> Result<(), ActionError>;

    /// Opens a host-registered action by its XML identifier.
    fn open_list(&self, action_id: &str) -> Result<(), ActionError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_window_action_serialises_like_web_client() {
        let action = WindowAction::new_record_dialog("Send SMS", "su.sms.compose")
            .with_context("default_sms_type", "staff");
        assert_eq!(
            serde_json::to_value(&action).unwrap(),
            json!({
                "type": "ir.actions.act_window",
                "name": "Send SMS",
                "res_model": "su.sms.compose",
                "view_mode": "form",
                "views": [[false, "form"]],
                "target": "new",
                "context": {"default_sms_type": "staff"}
            })
        );
    }
}
