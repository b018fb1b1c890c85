//! Command-line driver
//!
//! Validates credentials, loads the configuration file and dispatches one
//! register or update call. Dry-run stops after printing the configuration.

use crate::client::{ApiResponse, ClientSettings, DeploymentClient};
use crate::config::DeploymentConfig;
use crate::error::{DeployError, Result};
use clap::{Parser, ValueEnum};
use std::fmt;
use std::path::PathBuf;
use tracing::{debug, error};

/// Version string including the git revision the binary was built from
pub const LONG_VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")");

/// Deploy models via API
#[derive(Debug, Clone, Parser)]
#[command(name = "model-deploy", version, long_version = LONG_VERSION, about = "Deploy models via API")]
pub struct Cli {
    /// Action to perform
    #[arg(value_enum)]
    pub action: Action,

    /// Path to model configuration file
    #[arg(long)]
    pub config: PathBuf,

    /// API base URL
    #[arg(long, env = "MODEL_API_URL")]
    pub api_url: Option<String>,

    /// API authentication token
    #[arg(long, env = "API_TOKEN", hide_env_values = true)]
    pub api_token: Option<String>,

    /// Model ID for update operations (derived from the config when omitted)
    #[arg(long)]
    pub model_id: Option<String>,

    /// Show what would be done without making API calls
    #[arg(long)]
    pub dry_run: bool,

    /// Request timeout in seconds
    #[arg(
        long,
        env = "MODEL_API_TIMEOUT",
        default_value_t = 30,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout: u64,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Action {
    /// Register a new model
    Register,
    /// Update an existing model's serving configuration
    Update,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Register => write!(f, "register"),
            Action::Update => write!(f, "update"),
        }
    }
}

impl Cli {
    /// Resolved API URL and token; both must be non-empty
    pub fn credentials(&self) -> Result<(&str, &str)> {
        let api_url = non_empty(self.api_url.as_deref()).ok_or_else(|| {
            DeployError::Validation(
                "API URL is required (use --api-url or MODEL_API_URL env var)".to_string(),
            )
        })?;

        let api_token = non_empty(self.api_token.as_deref()).ok_or_else(|| {
            DeployError::Validation(
                "API token is required (use --api-token or API_TOKEN env var)".to_string(),
            )
        })?;

        Ok((api_url, api_token))
    }

    fn settings(&self) -> ClientSettings {
        ClientSettings {
            timeout: self.timeout,
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Run one invocation of the tool
pub async fn run(cli: Cli) -> Result<()> {
    let (api_url, api_token) = cli.credentials()?;

    let config = DeploymentConfig::from_file(&cli.config).await?;

    if cli.dry_run {
        println!("DRY RUN MODE - No API calls will be made");
        println!("Action: {}", cli.action);
        println!("Config: {}", config.to_pretty_json()?);
        return Ok(());
    }

    let client = DeploymentClient::with_settings(api_url, api_token, cli.settings())?;
    debug!("Using {:?}", client);

    match cli.action {
        Action::Register => {
            let response = client
                .register(&config)
                .await
                .inspect_err(|e| report_failure("register", e))?;
            println!("Model registered successfully!");
            print_response(&response);
        }
        Action::Update => {
            let response = client
                .update(&config, cli.model_id.as_deref())
                .await
                .inspect_err(|e| report_failure("update", e))?;
            println!("Model updated successfully!");
            print_response(&response);
        }
    }

    println!("Deployment completed successfully!");
    Ok(())
}

fn report_failure(action: &str, err: &DeployError) {
    if err.is_request_error() {
        error!("Failed to {} model", action);
    }
}

fn print_response(response: &ApiResponse) {
    if let Some(rendered) = response.render() {
        println!("Response: {}", rendered);
    }
}
