use anyhow::{Context, Result};
use clap::Parser;
use quiz_core::config::QuizConfig;
use quiz_server::{AppState, create_router};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "quiz-server")]
#[command(about = "Personality quiz server", long_about = None)]
struct Args {
    /// Address to bind (overrides config and QUIZ_HOST)
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on (overrides config and QUIZ_PORT)
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let mut config = QuizConfig::load()?.server;
    if let Some(host) = args.host {
        config.host = host;
    }
    if let Some(port) = args.port {
        config.port = port;
    }

    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {address}"))?;
    tracing::info!("Personality quiz server listening on {}", address);

    axum::serve(listener, create_router(AppState::in_memory()))
        .await
        .context("Server error")?;

    Ok(())
}
