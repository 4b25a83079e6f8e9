mod config;
mod routes;

use std::process::ExitCode;

use config::ServerConfig;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt::init();

    // A missing .env file is normal outside local development.
    if let Err(e) = dotenvy::dotenv() {
        tracing::debug!(error = %e, "no .env file loaded");
    }

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "server failed");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = ServerConfig::from_env()?;
    if !config.assets_dir.is_dir() {
        tracing::warn!(path = %config.assets_dir.display(), "assets directory not found; sounds and images will 404");
    }

    let app = routes::app(&config)?;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port)).await?;

    tracing::info!(port = config.port, "portfolio listening");
    axum::serve(listener, app).await?;
    Ok(())
}
