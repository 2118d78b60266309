pub mod command;
pub mod config;
pub mod error;
pub mod personality;
pub mod protocol;
pub mod question;
pub mod scoring;
pub mod session;

// Re-export common error type
pub use error::QuizError;

pub use command::{AnswerValue, Command, Likert};
pub use personality::{Dimension, PersonalityType};
pub use protocol::{Context, McpRequest, McpResponse};
pub use question::{QUESTIONS, Question, TOTAL_QUESTIONS};
pub use session::{AnswerOutcome, Session, SessionHandle, SessionStore, TestState};
