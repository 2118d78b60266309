//! Request router: resolves a parsed query against session state.

use crate::engine::{Reply, TestEngine};
use quiz_core::command::{AnswerValue, Command};
use quiz_core::protocol::{McpRequest, McpResponse};
use quiz_core::session::{Session, SessionStore};
use std::sync::Arc;

const ANSWER_OUT_OF_RANGE: &str =
    "Please provide an answer between 1 (Strongly Disagree) and 5 (Strongly Agree).";
const ANSWER_UNPARSABLE: &str =
    "I couldn't understand your answer. Please respond with 'answer: X' where X is a number from 1-5.";

/// Dispatches incoming queries to the [`TestEngine`].
///
/// Precedence, first match wins:
/// 1. `start test` / `take personality test` starts or restarts the test.
/// 2. `answer: N` on an unfinished test records the answer, or replies with
///    guidance when `N` is not an integer in 1-5.
/// 3. `results` on a finished test returns the type.
/// 4. Anything else re-prompts without touching the session.
pub struct RequestRouter {
    store: Arc<dyn SessionStore>,
    engine: TestEngine,
}

impl RequestRouter {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self {
            store,
            engine: TestEngine::new(),
        }
    }

    /// Handles one request.
    ///
    /// Unknown session ids get a fresh session. The session stays locked
    /// for the whole call, so concurrent requests for the same id apply one
    /// after the other.
    pub async fn handle(&self, request: McpRequest) -> McpResponse {
        let command = Command::parse(&request.query);
        let session_id = request.session_id();

        let handle = self.store.get_or_create(session_id).await;
        let mut session = handle.lock().await;

        self.dispatch(command, &mut session).into()
    }

    fn dispatch(&self, command: Command, session: &mut Session) -> Reply {
        match command {
            Command::Start => self.engine.start(session),
            Command::Answer { value, .. } if !session.is_completed() => {
                self.handle_answer(value, session)
            }
            Command::Answer {
                mentions_results: true,
                ..
            }
            | Command::Results
                if session.is_completed() =>
            {
                self.engine.results(session)
            }
            _ => self.engine.idle(session),
        }
    }

    fn handle_answer(&self, value: AnswerValue, session: &mut Session) -> Reply {
        match value {
            AnswerValue::Valid(likert) => {
                if session.current_question().is_none() {
                    // Not started yet: nothing to answer.
                    return self.engine.idle(session);
                }
                match self.engine.answer(session, likert) {
                    Ok(reply) => reply,
                    Err(err) => {
                        tracing::warn!(session_id = %session.id, error = %err, "Answer rejected");
                        self.engine.idle(session)
                    }
                }
            }
            AnswerValue::OutOfRange => {
                tracing::debug!(session_id = %session.id, "Answer out of range");
                Reply::for_session(&session.id, ANSWER_OUT_OF_RANGE)
            }
            AnswerValue::Unparsable => {
                tracing::debug!(session_id = %session.id, "Answer not understood");
                Reply::for_session(&session.id, ANSWER_UNPARSABLE)
            }
        }
    }
}
