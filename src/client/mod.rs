//! Deployment API client module
//!
//! One request per operation: `register` POSTs the full configuration,
//! `update` PUTs only the serving configuration. Statuses 200 and 201 are
//! success; anything else is `DeployError::Api`, and a request that never
//! got an answer is `DeployError::Transport`. Nothing is retried.

mod client;
mod types;


pub use client::DeploymentClient;
pub use types::{ApiResponse, ClientSettings, ServingUpdate, UpdateRequest};
