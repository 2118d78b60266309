use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use quiz_core::config::{ClientConfig, QuizConfig};
use tracing_subscriber::EnvFilter;

mod commands;

const DEFAULT_INSPECTOR_URL: &str = "http://localhost:8080";

#[derive(Parser)]
#[command(name = "quiz")]
#[command(about = "Personality quiz client", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Take the personality test in the terminal
    Test {
        /// Quiz server URL
        #[arg(long)]
        server: Option<String>,
    },
    /// Take the test, then chat with a model tuned to your personality type
    Chat {
        /// Quiz server URL
        #[arg(long)]
        server: Option<String>,
        /// Ollama API URL
        #[arg(long)]
        ollama: Option<String>,
        /// Ollama model to use
        #[arg(long)]
        model: Option<String>,
    },
    /// Run a scripted query sequence against the server
    Inspect {
        /// Quiz server URL
        #[arg(long)]
        mcp: Option<String>,
        /// MCP Inspector URL
        #[arg(long, default_value = DEFAULT_INSPECTOR_URL)]
        inspector: String,
        /// Talk to the server directly instead of through the Inspector
        #[arg(long)]
        direct: bool,
    },
}

fn override_with(target: &mut String, value: Option<String>) {
    if let Some(value) = value {
        *target = value;
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut config: ClientConfig = QuizConfig::load()?.client;

    let outcome = match cli.command {
        Commands::Test { server } => {
            override_with(&mut config.server_url, server);
            commands::test::run(&config).await
        }
        Commands::Chat {
            server,
            ollama,
            model,
        } => {
            override_with(&mut config.server_url, server);
            override_with(&mut config.ollama_url, ollama);
            override_with(&mut config.model, model);
            commands::chat::run(&config).await
        }
        Commands::Inspect {
            mcp,
            inspector,
            direct,
        } => {
            override_with(&mut config.server_url, mcp);
            commands::inspect::run(&config, &inspector, direct).await
        }
    };

    if let Err(err) = outcome {
        eprintln!("{}", format!("Error: {err:#}").red());
        std::process::exit(1);
    }

    Ok(())
}
