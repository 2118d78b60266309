//! Wire types for the request/response protocol.
//!
//! Both directions carry an open `context` map. `context.session_id` is the
//! correlation key; callers echo the context back on every request.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Free-form key/value context carried alongside queries and responses.
pub type Context = Map<String, Value>;

/// Session id used when a request carries no `session_id`.
pub const DEFAULT_SESSION_ID: &str = "default";

/// Context keys written by the server.
pub mod keys {
    pub const SESSION_ID: &str = "session_id";
    pub const CURRENT_QUESTION: &str = "current_question";
    pub const TOTAL_QUESTIONS: &str = "total_questions";
    pub const PROGRESS: &str = "progress";
    pub const COMPLETED: &str = "completed";
    pub const PERSONALITY_TYPE: &str = "personality_type";
    pub const DESCRIPTION: &str = "description";
}

/// A query sent to the quiz server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct McpRequest {
    pub query: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<Context>,
}

impl McpRequest {
    pub fn new(query: impl Into<String>, context: Option<Context>) -> Self {
        Self {
            query: query.into(),
            context,
        }
    }

    /// The session this request belongs to.
    ///
    /// A missing or non-string `session_id` maps to [`DEFAULT_SESSION_ID`].
    pub fn session_id(&self) -> &str {
        self.context
            .as_ref()
            .and_then(|context| context.get(keys::SESSION_ID))
            .and_then(Value::as_str)
            .unwrap_or(DEFAULT_SESSION_ID)
    }
}

/// The server's reply to a query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct McpResponse {
    pub response: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<Context>,
}

impl McpResponse {
    pub fn new(response: impl Into<String>, context: Context) -> Self {
        Self {
            response: response.into(),
            context: Some(context),
        }
    }
}

/// Applies the server's context update on top of the caller's context.
///
/// Keys present in `update` overwrite; keys absent from it are kept.
pub fn merge_context(target: &mut Context, update: Context) {
    for (key, value) in update {
        target.insert(key, value);
    }
}
