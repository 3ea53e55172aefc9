//! Odoo JSON-RPC Client
//!
//! Posts JSON-RPC 2.0 envelopes to Odoo `type='jsonrpc'` routes, carrying the
//! session cookie of a logged-in user.

use crate::consts::cli_consts::{AUTHENTICATE_ROUTE, SESSION_COOKIE, network};
use crate::environment::Environment;
use crate::rpc::RpcClient;
use crate::rpc::error::RpcError;
use reqwest::header::{COOKIE, HeaderMap, SET_COOKIE};
use reqwest::{Client, ClientBuilder, Response};
use serde_json::{Value, json};
use std::sync::atomic::{AtomicU64, Ordering};

// User-Agent string with CLI version
const USER_AGENT: &str = concat!("su-sms/", env!("CARGO_PKG_VERSION"));

#[derive(Debug)]
pub struct OdooRpcClient {
    client: Client,
    environment: Environment,
    session_id: Option<String>,
    next_id: AtomicU64,
}

impl OdooRpcClient {
    pub fn new(environment: Environment, session_id: Option<String>) -> Result<Self, RpcError> {
        let client = ClientBuilder::new()
            .connect_timeout(network::connect_timeout())
            .timeout(network::request_timeout())
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self {
            client,
            environment,
            session_id: session_id.filter(|s| !s.is_empty()),
            next_id: AtomicU64::new(1),
        })
    }

    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    fn build_url(&self, route: &str) -> String {
        format!(
            "{}/{}",
            self.environment.server_url(),
            route.trim_start_matches('/')
        )
    }

    fn envelope(id: u64, params: Value) -> Value {
        json!({
            "jsonrpc": "2.0",
            "method": "call",
            "params": params,
            "id": id,
        })
    }

    /// Extracts `result` from a JSON-RPC reply, or turns its `error` into an [`RpcError`].
    fn unwrap_reply(reply: Value) -> Result<Value, RpcError> {
        let Value::Object(mut reply) = reply else {
            return Err(RpcError::MissingResult);
        };

        if let Some(error) = reply.remove("error").filter(|e| !e.is_null()) {
            let code = error.get("code").and_then(Value::as_i64).unwrap_or(0);
            // Odoo puts the exception text in data.message; the top-level
            // message is the generic "Odoo Server Error".
            let message = error
                .pointer("/data/message")
                .and_then(Value::as_str)
                .or_else(|| error.get("message").and_then(Value::as_str))
                .unwrap_or("Unknown server error")
                .to_string();
            return Err(RpcError::Server { code, message });
        }

        reply.remove("result").ok_or(RpcError::MissingResult)
    }

    fn session_from_headers(headers: &HeaderMap) -> Option<String> {
        let prefix = format!("{}=", SESSION_COOKIE);
        headers
            .get_all(SET_COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .filter_map(|cookie| cookie.split(';').next())
            .find_map(|pair| pair.trim().strip_prefix(prefix.as_str()))
            .filter(|id| !id.is_empty())
            .map(str::to_string)
    }

    async fn handle_response_status(response: Response) -> Result<Response, RpcError> {
        if !response.status().is_success() {
            return Err(RpcError::from_response(response).await);
        }
        Ok(response)
    }

    async fn send(&self, route: &str, params: Value) -> Result<Response, RpcError> {
        let url = self.build_url(route);
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let mut request = self.client.post(&url).json(&Self::envelope(id, params));
        if let Some(session_id) = &self.session_id {
            request = request.header(COOKIE, format!("{}={}", SESSION_COOKIE, session_id));
        }

        log::debug!("POST {} (rpc id {})", url, id);
        let response = request.send().await?;
        Self::handle_response_status(response).await
    }

    /// Opens a session and returns its `session_id` cookie.
    pub async fn authenticate(
        &self,
        database: &str,
        login: &str,
        password: &str,
    ) -> Result<String, RpcError> {
        let params = json!({ "db": database, "login": login, "password": password });
        let response = self.send(AUTHENTICATE_ROUTE, params).await?;
        let session_id = Self::session_from_headers(response.headers());
        let reply: Value = response.json().await?;
        Self::unwrap_reply(reply)?;
        session_id.ok_or(RpcError::MissingSession)
    }
}

#[async_trait::async_trait]
impl RpcClient for OdooRpcClient {
    async fn post(&self, route: &str, params: Value) -> Result<Value, RpcError> {
        let response = self.send(route, params).await?;
        let reply: Value = response.json().await?;
        Self::unwrap_reply(reply)
    }
}
