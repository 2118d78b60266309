//! Chat-completion collaborator.
//!
//! [`OllamaChatAgent`] calls Ollama's `/api/chat` endpoint without streaming.
//! [`Conversation`] keeps the running message history for one chat.

use crate::error::ClientError;
use crate::transport::post_json;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

const OLLAMA_SERVICE: &str = "Ollama";

/// Who authored a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    System,
    User,
    Assistant,
}

/// One message in a chat history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn new(role: ChatRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }
}

/// Something that can produce the next assistant reply for a history.
#[async_trait]
pub trait ChatAgent: Send + Sync {
    /// Returns the assistant's reply to `messages`. One attempt, no retry.
    async fn chat(&self, messages: &[ChatMessage]) -> Result<String, ClientError>;
}

/// Agent implementation that talks to the Ollama HTTP API.
#[derive(Clone)]
pub struct OllamaChatAgent {
    client: Client,
    endpoint: String,
    model: String,
}

impl OllamaChatAgent {
    /// Creates a new agent for the given base URL and model.
    pub fn new(base_url: &str, model: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: format!("{}/api/chat", base_url.trim_end_matches('/')),
            model: model.into(),
        }
    }

    /// Overrides the model after construction.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl ChatAgent for OllamaChatAgent {
    async fn chat(&self, messages: &[ChatMessage]) -> Result<String, ClientError> {
        let request = ChatRequest {
            model: &self.model,
            messages,
            stream: false,
        };

        let parsed: ChatResponse =
            post_json(&self.client, &self.endpoint, &request, OLLAMA_SERVICE).await?;
        Ok(parsed.message.content)
    }
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    stream: bool,
}

#[derive(Deserialize)]
struct ChatResponse {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: String,
}

/// Message history for one chat, seeded with a system prompt.
#[derive(Debug, Clone)]
pub struct Conversation {
    messages: Vec<ChatMessage>,
}

impl Conversation {
    pub fn new(system_prompt: impl Into<String>) -> Self {
        Self {
            messages: vec![ChatMessage::new(ChatRole::System, system_prompt)],
        }
    }

    /// Sends a user turn and records the assistant's reply.
    ///
    /// The user message stays in the history even if the call fails.
    pub async fn send(
        &mut self,
        agent: &dyn ChatAgent,
        user_input: &str,
    ) -> Result<String, ClientError> {
        self.messages.push(ChatMessage::new(ChatRole::User, user_input));
        let reply = agent.chat(&self.messages).await?;
        self.messages.push(ChatMessage::new(ChatRole::Assistant, reply.clone()));
        Ok(reply)
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }
}
