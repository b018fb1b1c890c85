//! Model deployment configuration
//!
//! The configuration file is a single JSON object that is forwarded to the
//! deployment API as-is. Only the handful of fields the tool itself reads
//! have typed accessors; everything else is opaque passthrough.

pub mod defaults;

pub use defaults::default_config;

use crate::error::{DeployError, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::borrow::Cow;
use std::path::Path;
use tracing::{debug, info};

/// Prefix of every derived model identifier
pub const MODEL_ID_PREFIX: &str = "CD";

/// A model deployment configuration, kept as a loosely-typed JSON object
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeploymentConfig(Map<String, Value>);

impl DeploymentConfig {
    /// Load configuration from a JSON file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading model configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                DeployError::ConfigNotFound {
                    path: path.to_path_buf(),
                }
            } else {
                DeployError::ConfigRead {
                    path: path.to_path_buf(),
                    source: e,
                }
            }
        })?;

        let config = Self::from_json_str(&content).map_err(|message| DeployError::ConfigParse {
            path: path.to_path_buf(),
            message,
        })?;

        debug!("Configuration loaded with {} top-level fields", config.0.len());
        Ok(config)
    }

    fn from_json_str(content: &str) -> std::result::Result<Self, String> {
        match serde_json::from_str::<Value>(content).map_err(|e| e.to_string())? {
            Value::Object(map) => Ok(Self(map)),
            other => Err(format!(
                "expected a JSON object at the top level, found {}",
                json_type_name(&other)
            )),
        }
    }

    /// Raw access to the underlying object
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Text form of a top-level field; only absence is an error.
    ///
    /// Strings come back unquoted, any other value in its JSON form.
    fn text_field(&self, key: &'static str) -> Result<Cow<'_, str>> {
        match self.0.get(key) {
            Some(Value::String(s)) => Ok(Cow::Borrowed(s.as_str())),
            Some(other) => Ok(Cow::Owned(other.to_string())),
            None => Err(DeployError::MissingField(key)),
        }
    }

    pub fn model_name(&self) -> Result<Cow<'_, str>> {
        self.text_field("model_name")
    }

    pub fn variant(&self) -> Result<Cow<'_, str>> {
        self.text_field("variant")
    }

    pub fn owner_team(&self) -> Result<Cow<'_, str>> {
        self.text_field("owner_team")
    }

    /// `serving_configuration`, or an empty object when absent
    pub fn serving_configuration(&self) -> Value {
        self.0
            .get("serving_configuration")
            .cloned()
            .unwrap_or_else(|| Value::Object(Map::new()))
    }

    /// Derive the `CD:<owner_team>:<model_name>:<variant>` identifier
    pub fn model_id(&self) -> Result<String> {
        Ok(format!(
            "{}:{}:{}:{}",
            MODEL_ID_PREFIX,
            self.owner_team()?,
            self.model_name()?,
            self.variant()?
        ))
    }

    /// Pretty JSON rendering, as shown by dry-run
    pub fn to_pretty_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.0)?)
    }
}

impl From<Map<String, Value>> for DeploymentConfig {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl TryFrom<Value> for DeploymentConfig {
    type Error = DeployError;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(DeployError::Validation(format!(
                "model configuration must be a JSON object, found {}",
                json_type_name(&other)
            ))),
        }
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
