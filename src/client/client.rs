//! Deployment API client

use super::types::{ApiResponse, ClientSettings, UpdateRequest};
use crate::config::DeploymentConfig;
use crate::error::{DeployError, Result};
use crate::logging::mask_secret;
use reqwest::StatusCode;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use std::fmt;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Client for the model deployment API
pub struct DeploymentClient {
    base_url: String,
    api_token: String,
    http_client: reqwest::Client,
}

impl DeploymentClient {
    /// Create a client with default settings
    pub fn new(api_url: &str, api_token: &str) -> Result<Self> {
        Self::with_settings(api_url, api_token, ClientSettings::default())
    }

    pub fn with_settings(api_url: &str, api_token: &str, settings: ClientSettings) -> Result<Self> {
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", api_token)).map_err(|_| {
            DeployError::Validation("API token contains characters not allowed in a header".into())
        })?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http_client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(settings.timeout))
            .build()
            .map_err(|e| DeployError::Validation(format!("Failed to create HTTP client: {}", e)))?;

        let base_url = api_url.trim_end_matches('/').to_string();
        debug!("DeploymentClient created for {}", base_url);

        Ok(Self {
            base_url,
            api_token: api_token.to_string(),
            http_client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Register a new model with the full configuration as body
    pub async fn register(&self, config: &DeploymentConfig) -> Result<ApiResponse> {
        let model_name = config.model_name()?;
        let variant = config.variant()?;
        let url = format!("{}/v1/models/register", self.base_url);

        info!("Registering model: {} (variant: {})", model_name, variant);
        info!("API URL: {}", url);

        let request = self.http_client.post(&url).json(config);
        self.send(request).await
    }

    /// Update the serving configuration of an existing model.
    ///
    /// Without `model_id` the identifier is derived from the configuration.
    pub async fn update(
        &self,
        config: &DeploymentConfig,
        model_id: Option<&str>,
    ) -> Result<ApiResponse> {
        let model_id = match model_id.filter(|id| !id.is_empty()) {
            Some(id) => id.to_string(),
            None => config.model_id()?,
        };

        let payload = UpdateRequest::new(config.serving_configuration());
        let url = format!("{}/v1/models/update/{}", self.base_url, model_id);

        info!("Updating model: {}", model_id);
        info!("API URL: {}", url);

        let request = self.http_client.put(&url).json(&payload);
        self.send(request).await
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> Result<ApiResponse> {
        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        debug!("API answered {} with {} bytes", status, body.len());

        if status == StatusCode::OK || status == StatusCode::CREATED {
            Ok(ApiResponse {
                status: status.as_u16(),
                body,
            })
        } else {
            warn!("API returned non-success status {}", status);
            Err(DeployError::Api {
                status: status.as_u16(),
                body,
            })
        }
    }
}

impl fmt::Debug for DeploymentClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeploymentClient")
            .field("base_url", &self.base_url)
            .field("api_token", &mask_secret(&self.api_token))
            .finish()
    }
}
