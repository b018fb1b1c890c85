//! # model-deploy
//!
//! Register or update machine-learning model deployment records against a
//! model deployment API, driven by a JSON configuration file.
//!
//! ## Library usage
//!
//! ```rust,no_run
//! use model_deploy::{DeploymentClient, DeploymentConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DeploymentConfig::from_file("model.json").await?;
//!     let client = DeploymentClient::new("https://models.example.com", "token")?;
//!
//!     let response = client.register(&config).await?;
//!     println!("registered: {}", response.status);
//!
//!     // Only the serving configuration is sent on update
//!     client.update(&config, None).await?;
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod logging;

// Re-export main types
pub use client::{ApiResponse, ClientSettings, DeploymentClient};
pub use config::{DeploymentConfig, default_config};
pub use error::{DeployError, Result};
