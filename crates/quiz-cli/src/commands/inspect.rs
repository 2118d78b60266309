//! Scripted query sequence for checking a server by hand, either directly or
//! through an MCP Inspector.

use super::banner;
use anyhow::Result;
use colored::Colorize;
use quiz_core::config::ClientConfig;
use quiz_interaction::{DirectTransport, InspectorTransport, QuizClient};
use std::io::{self, Write};

/// Fixed session id so runs are easy to find in server logs.
pub const INSPECTION_SESSION_ID: &str = "test-session-123";

/// Queries sent in order. `back` has no server-side meaning and shows the
/// current question again.
pub const SCRIPT: [&str; 6] = [
    "start test",
    "answer: 3",
    "answer: 3",
    "answer: 3",
    "back",
    "answer: 5",
];

pub async fn run(config: &ClientConfig, inspector_url: &str, direct: bool) -> Result<()> {
    let mut client = if direct {
        QuizClient::with_session_id(
            DirectTransport::new(&config.server_url),
            INSPECTION_SESSION_ID,
        )
    } else {
        QuizClient::with_session_id(
            InspectorTransport::new(inspector_url, &config.server_url),
            INSPECTION_SESSION_ID,
        )
    };

    let title = if direct {
        "Testing Personality Test MCP directly"
    } else {
        "Testing Personality Test MCP with Inspector"
    };

    let mut out = io::stdout();
    banner(&mut out, title)?;
    run_script(&mut client, &mut out).await
}

/// Sends every query in [`SCRIPT`], printing query, response and context.
///
/// A failed request is reported and the script carries on.
pub async fn run_script(client: &mut QuizClient, out: &mut dyn Write) -> Result<()> {
    for query in SCRIPT {
        writeln!(out, "\n{} {query}", "Query:".bright_cyan())?;
        match client.send_query(query).await {
            Ok(response) => writeln!(out, "{} {response}", "Response:".bright_cyan())?,
            Err(err) => writeln!(
                out,
                "{}",
                format!("Error communicating with {}: {err}", err.service()).red()
            )?,
        }
        let context = serde_json::to_string_pretty(client.context())?;
        writeln!(out, "{} {context}", "Context:".bright_cyan())?;
    }

    writeln!(out, "{}", "\nTest sequence completed successfully!".bright_green())?;
    Ok(())
}
