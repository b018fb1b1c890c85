//! Default model configuration generator
//!
//! Prints (or writes) a starting configuration file for `model-deploy`.

use clap::Parser;
use model_deploy::{default_config, logging};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;

#[derive(Debug, Parser)]
#[command(
    name = "model-deploy-defaults",
    version,
    about = "Generate a default model deployment configuration"
)]
struct Args {
    /// Model name to put in the configuration
    #[arg(long)]
    model_name: String,

    /// Model variant to put in the configuration
    #[arg(long)]
    variant: String,

    /// Write to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(false);

    match generate(&args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn generate(args: &Args) -> model_deploy::Result<()> {
    let rendered = default_config(&args.model_name, &args.variant).to_pretty_json()?;

    match &args.output {
        Some(path) => {
            tokio::fs::write(path, format!("{}\n", rendered)).await?;
            info!("Wrote default configuration to {}", path.display());
        }
        None => println!("{}", rendered),
    }
    Ok(())
}
