//! Stateful client for the quiz protocol.

use crate::error::ClientError;
use crate::transport::QuizTransport;
use quiz_core::command::Likert;
use quiz_core::personality::PersonalityType;
use quiz_core::protocol::{Context, McpRequest, keys, merge_context};
use serde_json::Value;
use uuid::Uuid;

/// Keeps the conversation context and round-trips it on every query.
pub struct QuizClient {
    transport: Box<dyn QuizTransport>,
    context: Context,
}

impl QuizClient {
    /// Creates a client with a freshly generated session id.
    pub fn new(transport: impl QuizTransport + 'static) -> Self {
        Self::with_session_id(transport, Uuid::new_v4().to_string())
    }

    /// Creates a client bound to a known session id.
    pub fn with_session_id(
        transport: impl QuizTransport + 'static,
        session_id: impl Into<String>,
    ) -> Self {
        let mut context = Context::new();
        context.insert(keys::SESSION_ID.to_string(), Value::String(session_id.into()));
        Self {
            transport: Box::new(transport),
            context,
        }
    }

    /// Sends a raw query and returns the server's message.
    ///
    /// The reply's context is merged into ours key by key.
    pub async fn send_query(&mut self, query: &str) -> Result<String, ClientError> {
        let request = McpRequest::new(query, Some(self.context.clone()));
        let response = self.transport.send(&request).await?;
        if let Some(update) = response.context {
            merge_context(&mut self.context, update);
        }
        Ok(response.response)
    }

    pub async fn start_test(&mut self) -> Result<String, ClientError> {
        self.send_query("start test").await
    }

    pub async fn answer_question(&mut self, answer: Likert) -> Result<String, ClientError> {
        self.send_query(&format!("answer: {}", answer.value())).await
    }

    pub async fn get_results(&mut self) -> Result<String, ClientError> {
        self.send_query("results").await
    }

    pub fn context(&self) -> &Context {
        &self.context
    }

    pub fn session_id(&self) -> &str {
        self.context
            .get(keys::SESSION_ID)
            .and_then(Value::as_str)
            .unwrap_or_default()
    }

    /// Whether the server has reported the test as finished.
    pub fn is_completed(&self) -> bool {
        self.context
            .get(keys::COMPLETED)
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }

    /// The raw type code from the context, once results were fetched.
    pub fn personality_code(&self) -> Option<&str> {
        self.context.get(keys::PERSONALITY_TYPE).and_then(Value::as_str)
    }

    /// The type from the context, if it names one of the sixteen codes.
    pub fn personality_type(&self) -> Option<PersonalityType> {
        self.personality_code().and_then(|code| code.parse().ok())
    }

    pub fn description(&self) -> Option<&str> {
        self.context.get(keys::DESCRIPTION).and_then(Value::as_str)
    }
}
