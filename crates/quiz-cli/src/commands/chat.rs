//! Personality-tuned chat: take the test, then talk to a model whose system
//! prompt is chosen from the result.

use super::input::{LineSource, ReadlineSource};
use super::test::{TestOutcome, run_test};
use anyhow::Result;
use colored::Colorize;
use quiz_core::config::ClientConfig;
use quiz_interaction::prompts::system_prompt;
use quiz_interaction::{ChatAgent, Conversation, DirectTransport, OllamaChatAgent, QuizClient};
use std::io::{self, Write};

const EXIT_COMMAND: &str = "exit";

pub async fn run(config: &ClientConfig) -> Result<()> {
    let mut client = QuizClient::new(DirectTransport::new(&config.server_url));
    let agent = OllamaChatAgent::new(&config.ollama_url, config.model.clone());
    let mut input = ReadlineSource::new()?;
    let mut out = io::stdout();

    writeln!(
        out,
        "{}",
        "Starting personality test to personalize your Ollama experience...".bright_magenta()
    )?;
    if let TestOutcome::Aborted = run_test(&mut client, &mut input, &mut out).await? {
        return Ok(());
    }

    chat_loop(&client, &agent, &mut input, &mut out).await
}

/// Runs the chat until the user types `exit`, closes input, or a call fails.
pub async fn chat_loop(
    client: &QuizClient,
    agent: &dyn ChatAgent,
    input: &mut dyn LineSource,
    out: &mut dyn Write,
) -> Result<()> {
    let Some(code) = client.personality_code() else {
        writeln!(out, "{}", "Please run a personality test first.".yellow())?;
        return Ok(());
    };

    let mut conversation = Conversation::new(system_prompt(Some(code), client.description()));

    writeln!(
        out,
        "{}",
        format!("\nStarting personalized chat for {code} personality type...").bright_green()
    )?;
    writeln!(out, "{}", "Type 'exit' to end the conversation.\n".bright_black())?;

    loop {
        let Some(line) = input.read_line("\nYou: ")? else {
            break;
        };
        if line.trim().eq_ignore_ascii_case(EXIT_COMMAND) {
            break;
        }

        match conversation.send(agent, &line).await {
            Ok(reply) => writeln!(
                out,
                "\n{} {}",
                "Assistant:".bright_magenta(),
                reply.bright_blue()
            )?,
            Err(err) => {
                tracing::warn!(error = %err, "Chat turn failed");
                writeln!(out, "{}", format!("Error communicating with Ollama: {err}").red())?;
                break;
            }
        }
    }

    Ok(())
}
