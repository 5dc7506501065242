//! LeafScan command-line client.

mod cli;
mod logging;
mod screen;

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use leafscan_client::{ClientConfig, Dispatcher, InferenceClient, ScreenState};
use leafscan_models::Endpoint;
use tracing::{error, info};

use crate::cli::{Cli, Command};

#[tokio::main]
async fn main() -> ExitCode {
    // Load environment variables
    dotenvy::dotenv().ok();
    logging::init();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            error!("{:#}", e);
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<ExitCode> {
    let config = ClientConfig::new(&cli.server)?.with_env_timeouts();
    info!("Using inference server {}", config.base_url);
    let client = InferenceClient::new(config)?;

    let (endpoint, image_path, output, detailed) = match cli.command {
        Command::Health => {
            let health = client.health_check().await?;
            println!(
                "status: {} (model loaded: {})",
                health.status, health.model_loaded
            );
            return Ok(if health.is_healthy() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            });
        }
        Command::ModelInfo => {
            let info = client.model_info().await?;
            println!("classes ({}): {}", info.num_classes, info.class_names.join(", "));
            println!("input shape: {:?}", info.input_shape);
            println!("image size: {:?}", info.image_size);
            return Ok(ExitCode::SUCCESS);
        }
        Command::Classify { image, detailed } => (Endpoint::Classification, image, None, detailed),
        Command::Detect { image, output } => (Endpoint::Detection, image, output, false),
        Command::Segment { image, output } => (Endpoint::Segmentation, image, output, false),
    };

    let image = image::open(&image_path)
        .with_context(|| format!("failed to load {}", image_path.display()))?;

    let (dispatcher, mut deliveries) = Dispatcher::new(client);
    let state = screen::run_screen(&dispatcher, &mut deliveries, image, endpoint).await?;

    if let Some(text) = screen::render(&state, detailed) {
        println!("{}", text);
    }
    if let Some(path) = output {
        if screen::save_annotated(&state, &path)? {
            info!("Annotated image written to {}", path.display());
        }
    }

    Ok(match state {
        ScreenState::Failed(_) => ExitCode::FAILURE,
        _ => ExitCode::SUCCESS,
    })
}
