//! Error handling for the rpc module

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RpcError {
    /// Reqwest error, typically related to network issues or request failures.
    #[error("Reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// The server answered with a non-success HTTP status.
    #[error("HTTP error with status {status}: {message}")]
    Http { status: u16, message: String },

    /// The JSON-RPC reply carried an `error` member.
    #[error("RPC error {code}: {message}")]
    Server { code: i64, message: String },

    /// The reply (or its `result`) did not have the expected shape.
    #[error("Decoding error: {0}")]
    Decode(#[from] serde_json::Error),

    /// The JSON-RPC reply had neither `result` nor `error`.
    #[error("Malformed RPC reply: no result")]
    MissingResult,

    /// Authentication succeeded but no session cookie came back.
    #[error("Server did not return a session cookie")]
    MissingSession,
}

impl RpcError {
    pub async fn from_response(response: reqwest::Response) -> RpcError {
        let status = response.status().as_u16();
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Failed to read response text".to_string());

        RpcError::Http { status, message }
    }

    /// Odoo reports an expired or missing session with code 100.
    pub fn is_session_expired(&self) -> bool {
        matches!(self, RpcError::Server { code: 100, .. })
    }
}
