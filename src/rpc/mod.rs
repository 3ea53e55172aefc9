use crate::rpc::error::RpcError;
use serde_json::Value;

pub(crate) mod client;
pub use client::OdooRpcClient;
pub mod error;
pub mod types;

#[cfg(test)]
use mockall::automock;

/// Request/response channel to the host server.
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait RpcClient: Send + Sync {
    /// Posts `params` to a JSON-RPC route and returns the reply's `result`.
    async fn post(&self, route: &str, params: Value) -> Result<Value, RpcError>;
}
