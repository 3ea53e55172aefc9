use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;

/// The Odoo server the client talks to.
#[derive(Clone, Default, PartialEq, Eq)]
pub enum Environment {
    /// Odoo running on the developer machine.
    #[default]
    Local,
    /// Any other deployment, addressed by its base URL.
    Custom { server_url: String },
}

impl Environment {
    /// Returns the base URL of the Odoo server, without a trailing slash.
    pub fn server_url(&self) -> String {
        match self {
            Environment::Local => "http://localhost:8069".to_string(),
            Environment::Custom { server_url } => server_url.trim_end_matches('/').to_string(),
        }
    }
}

impl FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("local") {
            return Ok(Environment::Local);
        }
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            return Ok(Environment::Custom {
                server_url: trimmed.to_string(),
            });
        }
        Err(format!(
            "Unknown environment '{}': expected 'local' or an http(s) URL",
            s
        ))
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Local => write!(f, "Local"),
            Environment::Custom { server_url } => write!(f, "{}", server_url),
        }
    }
}

impl Debug for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Environment::{}, URL: {}", self, self.server_url())
    }
}
