//! Wire types for the dashboard routes.
//!
//! Odoo serialises empty fields as `false`, so every optional field goes
//! through [`falsy`] or [`or_default`] instead of plain `Option`.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// `null`, `false` and values that do not decode as `T` become `None`.
pub fn falsy<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null | Value::Bool(false) => None,
        value => T::deserialize(value).ok(),
    })
}

/// Like [`falsy`], collapsing the absent case into `T::default()`.
pub fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    falsy(deserializer).map(Option::unwrap_or_default)
}

/// Integral counts, also when sent as a float (`2.0`). Other values count as 0.
pub fn count<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| *f >= 0.0).map(|f| f as u64))
            .unwrap_or_default(),
        _ => 0,
    })
}

/// A list of records. Entries that are not records of the expected shape are
/// kept as `T::default()`, so the list length always matches the reply.
pub fn records<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items
            .into_iter()
            .map(|item| T::deserialize(item).unwrap_or_default())
            .collect(),
        _ => Vec::new(),
    })
}

/// Non-empty strings and numbers are kept as text; every other value is absent.
pub fn truthy_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) if !s.is_empty() => Some(s),
        Value::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
        Value::Bool(true) => Some("true".to_string()),
        _ => None,
    })
}

/// A many2one reference as returned by `search_read`: `[id, display_name]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Many2one(pub i64, pub String);

impl Many2one {
    pub fn name(&self) -> &str {
        &self.1
    }
}

/// One SMS campaign. Fields the dashboard does not read stay in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Message {
    #[serde(default, deserialize_with = "or_default")]
    pub id: i64,
    #[serde(default, deserialize_with = "falsy")]
    pub sms_type: Option<String>,
    #[serde(default, deserialize_with = "falsy")]
    pub state: Option<String>,
    #[serde(default, deserialize_with = "count")]
    pub recipient_count: u64,
    #[serde(default, deserialize_with = "count")]
    pub success_count: u64,
    #[serde(default, deserialize_with = "falsy")]
    pub total_cost: Option<f64>,
    #[serde(default, deserialize_with = "falsy")]
    pub create_date: Option<String>,
    #[serde(default, deserialize_with = "falsy")]
    pub department_id: Option<Many2one>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Expenditure for one department.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeptStat {
    #[serde(default, deserialize_with = "or_default")]
    pub id: i64,
    #[serde(default, deserialize_with = "or_default")]
    pub name: String,
    #[serde(default, deserialize_with = "falsy")]
    pub short_name: Option<String>,
    #[serde(default, deserialize_with = "falsy")]
    pub chart_code: Option<String>,
    #[serde(default, deserialize_with = "falsy")]
    pub account_number: Option<String>,
    #[serde(default, deserialize_with = "falsy")]
    pub object_code: Option<String>,
    #[serde(default, deserialize_with = "falsy")]
    pub total_cost: Option<f64>,
    #[serde(default, deserialize_with = "or_default")]
    pub kfs5_processed: bool,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Reply of the dashboard statistics route. Every member may be absent.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DashboardStats {
    #[serde(default, deserialize_with = "records")]
    pub messages: Vec<Message>,
    #[serde(default, deserialize_with = "records")]
    pub dept_stats: Vec<DeptStat>,
    #[serde(default, deserialize_with = "count")]
    pub total_sent: u64,
    #[serde(default, deserialize_with = "or_default")]
    pub total_cost: f64,
    #[serde(default, deserialize_with = "or_default")]
    pub is_manager: bool,
}

/// Reply of the balance route: a balance string, or an application error.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct BalanceReply {
    #[serde(default, deserialize_with = "truthy_text")]
    pub balance: Option<String>,
    #[serde(default, deserialize_with = "truthy_text")]
    pub error: Option<String>,
}

/// Decodes a JSON-RPC `result` into a typed reply.
pub fn decode<T: DeserializeOwned>(value: Value) -> Result<T, serde_json::Error> {
    serde_json::from_value(value)
}
