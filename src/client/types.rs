//! Request and response types for the deployment API

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Tunables for the underlying HTTP client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientSettings {
    /// Request timeout in seconds
    pub timeout: u64,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self { timeout: 30 }
    }
}

/// Body of `PUT /v1/models/update/{model_id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateRequest {
    pub model: ServingUpdate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServingUpdate {
    pub serving_configuration: Value,
}

impl UpdateRequest {
    pub fn new(serving_configuration: Value) -> Self {
        Self {
            model: ServingUpdate {
                serving_configuration,
            },
        }
    }
}

/// A successful (200/201) answer from the deployment API
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    /// Body parsed as JSON, if it is JSON
    pub fn json(&self) -> Option<Value> {
        serde_json::from_str(&self.body).ok()
    }

    /// Printable form of the body.
    ///
    /// `None` for an empty body, pretty JSON when the body parses, raw text
    /// otherwise.
    pub fn render(&self) -> Option<String> {
        if self.body.is_empty() {
            return None;
        }
        match self.json() {
            Some(value) => {
                Some(serde_json::to_string_pretty(&value).unwrap_or_else(|_| self.body.clone()))
            }
            None => Some(self.body.clone()),
        }
    }
}
