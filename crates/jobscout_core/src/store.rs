//! Request/response contract of the store proxy.
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

pub const STORED_MESSAGE: &str = "Data stored successfully";
pub const CLEARED_MESSAGE: &str = "Data cleared successfully";
pub const STORE_FAILED_MESSAGE: &str = "Failed to store data";
pub const READ_FAILED_MESSAGE: &str = "Failed to read data";
pub const CLEAR_FAILED_MESSAGE: &str = "Failed to clear data";
pub const MALFORMED_MESSAGE: &str = "Malformed request";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum StoreRequest {
    StoreData { key: String, value: Value },
    GetData { key: String },
    ClearAllData,
}

impl StoreRequest {
    pub fn from_value(raw: Value) -> Result<Self, RequestError> {
        serde_json::from_value(raw).map_err(|err| RequestError::Malformed(err.to_string()))
    }

    pub fn action(&self) -> &'static str {
        match self {
            StoreRequest::StoreData { .. } => "storeData",
            StoreRequest::GetData { .. } => "getData",
            StoreRequest::ClearAllData => "clearAllData",
        }
    }

    pub fn key(&self) -> Option<&str> {
        match self {
            StoreRequest::StoreData { key, .. } | StoreRequest::GetData { key } => Some(key),
            StoreRequest::ClearAllData => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    #[error("malformed store request: {0}")]
    Malformed(String),
}

/// Exactly one of these answers every [`StoreRequest`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl StoreResponse {
    pub fn stored() -> Self {
        Self::ok(Some(Value::from(STORED_MESSAGE)))
    }

    /// A missing key is a successful read with no message.
    pub fn read(value: Option<Value>) -> Self {
        Self::ok(value)
    }

    pub fn cleared() -> Self {
        Self::ok(Some(Value::from(CLEARED_MESSAGE)))
    }

    pub fn failed(message: &str, error: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(Value::from(message)),
            error: Some(error.into()),
        }
    }

    pub fn malformed(err: &RequestError) -> Self {
        Self::failed(MALFORMED_MESSAGE, err.to_string())
    }

    fn ok(message: Option<Value>) -> Self {
        Self {
            success: true,
            message,
            error: None,
        }
    }
}
