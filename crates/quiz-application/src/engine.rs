//! Test engine: turns session transitions into user-facing replies.

use quiz_core::command::Likert;
use quiz_core::error::Result;
use quiz_core::protocol::{Context, McpResponse, keys};
use quiz_core::question::{QUESTIONS, TOTAL_QUESTIONS};
use quiz_core::session::{AnswerOutcome, Session};
use serde_json::Value;

const SCALE_HINT: &str = "(1=Strongly Disagree, 5=Strongly Agree)";

/// A message for the caller plus the context fields the server sets.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub message: String,
    pub context: Context,
}

impl Reply {
    /// A reply whose context carries only `session_id`.
    pub fn for_session(session_id: &str, message: impl Into<String>) -> Self {
        let mut context = Context::new();
        context.insert(keys::SESSION_ID.to_string(), Value::from(session_id));
        Self {
            message: message.into(),
            context,
        }
    }

    fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.context.insert(key.to_string(), value.into());
        self
    }
}

impl From<Reply> for McpResponse {
    fn from(reply: Reply) -> Self {
        McpResponse::new(reply.message, reply.context)
    }
}

/// Drives a session through start, answers and results.
///
/// The engine holds no state of its own; callers pass the session they have
/// locked.
#[derive(Debug, Clone, Copy, Default)]
pub struct TestEngine;

impl TestEngine {
    pub fn new() -> Self {
        Self
    }

    /// Starts (or restarts) the test at question 1.
    pub fn start(&self, session: &mut Session) -> Reply {
        session.restart();
        tracing::info!(session_id = %session.id, "Personality test started");

        let first = &QUESTIONS[0];
        let message = format!(
            "Let's start your personality test. For each statement, respond with a number from 1-5:\n\
             1 = Strongly Disagree\n2 = Disagree\n3 = Neutral\n4 = Agree\n5 = Strongly Agree\n\n\
             Question 1: {}\n\n\
             Respond with 'answer: X' where X is your rating.",
            first.text
        );

        Reply::for_session(&session.id, message)
            .with(keys::CURRENT_QUESTION, 1)
            .with(keys::TOTAL_QUESTIONS, TOTAL_QUESTIONS)
    }

    /// Records an answer to the current question and moves on.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::InvalidInput` if the session has no question in
    /// progress. The router never calls this for such sessions.
    pub fn answer(&self, session: &mut Session, value: Likert) -> Result<Reply> {
        let answered = session.current_question_index();
        let outcome = session.record_answer(value)?;
        tracing::debug!(
            session_id = %session.id,
            question = answered,
            value = value.value(),
            "Answer recorded"
        );

        let reply = match outcome {
            AnswerOutcome::Completed(personality_type) => {
                tracing::info!(
                    session_id = %session.id,
                    personality_type = %personality_type,
                    "Personality test completed"
                );
                Reply::for_session(
                    &session.id,
                    "Thank you for completing the test! Type 'results' to see your personality type.",
                )
                .with(keys::COMPLETED, true)
            }
            AnswerOutcome::Next { number, question } => Reply::for_session(
                &session.id,
                format!(
                    "Question {number}/{TOTAL_QUESTIONS}: {}\n\n{SCALE_HINT}",
                    question.text
                ),
            )
            .with(keys::CURRENT_QUESTION, number)
            .with(keys::TOTAL_QUESTIONS, TOTAL_QUESTIONS)
            .with(keys::PROGRESS, format!("{number}/{TOTAL_QUESTIONS}")),
        };

        Ok(reply)
    }

    /// Reports the computed type and its description.
    pub fn results(&self, session: &Session) -> Reply {
        let Some(personality_type) = session.personality_type() else {
            return Reply::for_session(&session.id, "You haven't completed the test yet.");
        };

        let description = personality_type.description();
        Reply::for_session(
            &session.id,
            format!("Your personality type is: {personality_type}\n\n{description}"),
        )
        .with(keys::PERSONALITY_TYPE, personality_type.code())
        .with(keys::DESCRIPTION, description)
    }

    /// Reply for queries that match no operation. Never mutates the session.
    pub fn idle(&self, session: &Session) -> Reply {
        if session.is_completed() {
            return Reply::for_session(
                &session.id,
                "Your personality test is complete. Ask for 'results' to see your personality type.",
            );
        }

        match session.current_question() {
            Some(question) => Reply::for_session(
                &session.id,
                format!(
                    "Please answer the current question: {} (1-5, where 1=Strongly Disagree, 5=Strongly Agree)",
                    question.text
                ),
            )
            .with(keys::CURRENT_QUESTION, session.current_question_index()),
            None => Reply::for_session(
                &session.id,
                "Welcome to the Personality Test. Type 'start test' to begin.",
            ),
        }
    }
}
