//! Interactive personality test in the terminal.

use super::banner;
use super::input::{LineSource, ReadlineSource};
use anyhow::Result;
use colored::Colorize;
use quiz_core::command::Likert;
use quiz_core::config::ClientConfig;
use quiz_interaction::{DirectTransport, QuizClient};
use std::io::{self, Write};

const ANSWER_PROMPT: &str = "\nYour answer (1-5): ";

/// How an interactive test ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TestOutcome {
    /// All questions answered; holds the server's results message.
    Completed(String),
    /// The user closed the input before finishing.
    Aborted,
}

#[derive(Debug, PartialEq, Eq)]
enum AnswerInputError {
    NotANumber,
    OutOfRange,
}

fn parse_answer(line: &str) -> Result<Likert, AnswerInputError> {
    let number: i64 = line
        .trim()
        .parse()
        .map_err(|_| AnswerInputError::NotANumber)?;
    Likert::try_from(number).map_err(|_| AnswerInputError::OutOfRange)
}

pub async fn run(config: &ClientConfig) -> Result<()> {
    let mut client = QuizClient::new(DirectTransport::new(&config.server_url));
    let mut input = ReadlineSource::new()?;
    let mut out = io::stdout();

    let title = "Personality Test MCP Client".bright_magenta().bold();
    banner(&mut out, &title.to_string())?;
    run_test(&mut client, &mut input, &mut out).await?;
    Ok(())
}

/// Starts a test and prompts for answers until the server reports completion.
///
/// Answers that are not integers in 1-5 are rejected locally and never sent.
/// A failed request ends the loop with an error.
pub async fn run_test(
    client: &mut QuizClient,
    input: &mut dyn LineSource,
    out: &mut dyn Write,
) -> Result<TestOutcome> {
    let intro = client.start_test().await?;
    writeln!(out, "{}", intro.bright_blue())?;

    while !client.is_completed() {
        let Some(line) = input.read_line(ANSWER_PROMPT)? else {
            writeln!(out, "{}", "\nTest aborted.".yellow())?;
            return Ok(TestOutcome::Aborted);
        };

        match parse_answer(&line) {
            Ok(answer) => {
                let response = client.answer_question(answer).await?;
                writeln!(out, "\n{}", response.bright_blue())?;
            }
            Err(AnswerInputError::OutOfRange) => {
                writeln!(out, "{}", "\nPlease enter a number between 1 and 5.".yellow())?;
            }
            Err(AnswerInputError::NotANumber) => {
                writeln!(out, "{}", "\nPlease enter a valid number.".yellow())?;
            }
        }
    }

    let results = client.get_results().await?;
    writeln!(out)?;
    banner(out, &"Test Complete!".bright_green().bold().to_string())?;
    writeln!(out, "{results}")?;
    writeln!(out, "{}", "=".repeat(60))?;

    Ok(TestOutcome::Completed(results))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::input::ScriptedLines;
    use quiz_server::{AppState, create_router};

    async fn spawn_server() -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, create_router(AppState::in_memory()))
                .await
                .unwrap();
        });
        format!("http://{addr}")
    }

    #[test]
    fn test_parse_answer() {
        assert_eq!(parse_answer(" 4 ").unwrap().value(), 4);
        assert_eq!(parse_answer("0"), Err(AnswerInputError::OutOfRange));
        assert_eq!(parse_answer("6"), Err(AnswerInputError::OutOfRange));
        assert_eq!(parse_answer("four"), Err(AnswerInputError::NotANumber));
        assert_eq!(parse_answer(""), Err(AnswerInputError::NotANumber));
    }

    #[tokio::test]
    async fn test_interactive_run_completes() {
        let server_url = spawn_server().await;
        let mut client = QuizClient::new(DirectTransport::new(&server_url));
        let mut lines = vec!["abc".to_string(), "9".to_string()];
        lines.extend(std::iter::repeat("5".to_string()).take(20));
        let mut input = ScriptedLines::new(lines);
        let mut out = Vec::new();

        let outcome = run_test(&mut client, &mut input, &mut out).await.unwrap();

        match outcome {
            TestOutcome::Completed(results) => {
                assert!(results.starts_with("Your personality type is: ESTJ"))
            }
            other => panic!("unexpected outcome {other:?}"),
        }
        assert_eq!(input.prompts.len(), 22);
        assert!(input.prompts.iter().all(|p| p == ANSWER_PROMPT));

        let printed = String::from_utf8(out).unwrap();
        assert!(printed.contains("Please enter a valid number."));
        assert!(printed.contains("Please enter a number between 1 and 5."));
        assert!(printed.contains("Test Complete!"));
        assert_eq!(client.personality_code(), Some("ESTJ"));
    }

    #[tokio::test]
    async fn test_interactive_run_aborts_on_eof() {
        let server_url = spawn_server().await;
        let mut client = QuizClient::new(DirectTransport::new(&server_url));
        let mut input = ScriptedLines::new(["2", "3"]);
        let mut out = Vec::new();

        let outcome = run_test(&mut client, &mut input, &mut out).await.unwrap();

        assert_eq!(outcome, TestOutcome::Aborted);
        assert_eq!(client.context()["current_question"], 3);
    }

    #[tokio::test]
    async fn test_transport_failure_halts() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}", listener.local_addr().unwrap());
        drop(listener);

        let mut client = QuizClient::new(DirectTransport::new(&url));
        let mut input = ScriptedLines::new(["3"]);
        let mut out = Vec::new();

        assert!(run_test(&mut client, &mut input, &mut out).await.is_err());
        assert!(input.prompts.is_empty());
    }
}
