//! Client-side integrations: talking to the quiz server and to a chat model.

pub mod chat;
pub mod client;
pub mod error;
pub mod prompts;
pub mod transport;

pub use chat::{ChatAgent, ChatMessage, ChatRole, Conversation, OllamaChatAgent};
pub use client::QuizClient;
pub use error::ClientError;
pub use transport::{DirectTransport, InspectorTransport, QuizTransport};
