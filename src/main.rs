//! model-deploy - register or update model deployments via API

use clap::Parser;
use model_deploy::cli::{self, Cli};
use model_deploy::logging;
use std::process::ExitCode;
use tracing::debug;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Lets MODEL_API_URL / API_TOKEN come from a local .env file
    let dotenv = dotenvy::dotenv();

    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Ok(path) = dotenv {
        debug!("Loaded environment from {}", path.display());
    }

    match cli::run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
