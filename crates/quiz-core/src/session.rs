//! Session domain model and store interface.
//!
//! A session is one caller's progress through a single test attempt. The
//! state machine is:
//!
//! ```text
//! NotStarted --start--> InProgress { question: 1 }
//! InProgress { n } --answer--> InProgress { n + 1 }        (n < 20)
//! InProgress { 20 } --answer--> Completed { personality_type }
//! any --start--> InProgress { question: 1 }                (answers cleared)
//! ```

use crate::command::Likert;
use crate::error::{QuizError, Result};
use crate::personality::PersonalityType;
use crate::question::{self, Question, TOTAL_QUESTIONS};
use crate::scoring;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Where a session is in the test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestState {
    /// No `start` received yet.
    NotStarted,
    /// Waiting for an answer to the 1-based `question`.
    InProgress { question: usize },
    /// All questions answered; the type was computed at the transition.
    Completed { personality_type: PersonalityType },
}

/// What happened after an answer was recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerOutcome {
    /// Another question follows; `number` is its 1-based position.
    Next {
        number: usize,
        question: &'static Question,
    },
    /// That was the last question.
    Completed(PersonalityType),
}

/// Per-caller progress record.
#[derive(Debug, Clone)]
pub struct Session {
    /// Correlation key supplied by the caller
    pub id: String,
    state: TestState,
    answers: HashMap<String, Likert>,
    /// Timestamp when the session was first seen
    pub created_at: DateTime<Utc>,
    /// Timestamp of the last state change
    pub updated_at: DateTime<Utc>,
}

impl Session {
    /// Creates a session in the initial state.
    pub fn new(id: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            state: TestState::NotStarted,
            answers: HashMap::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn state(&self) -> TestState {
        self.state
    }

    /// Recorded answers keyed by question id.
    pub fn answers(&self) -> &HashMap<String, Likert> {
        &self.answers
    }

    /// Position in the test: 0 before start, the 1-based current question
    /// while in progress, and 20 once completed.
    pub fn current_question_index(&self) -> usize {
        match self.state {
            TestState::NotStarted => 0,
            TestState::InProgress { question } => question,
            TestState::Completed { .. } => TOTAL_QUESTIONS,
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self.state, TestState::Completed { .. })
    }

    /// The computed type, present only once the test is completed.
    pub fn personality_type(&self) -> Option<PersonalityType> {
        match self.state {
            TestState::Completed { personality_type } => Some(personality_type),
            _ => None,
        }
    }

    /// The question awaiting an answer, if a test is in progress.
    pub fn current_question(&self) -> Option<&'static Question> {
        match self.state {
            TestState::InProgress { question } => question::question_at(question),
            _ => None,
        }
    }

    /// Re-initializes the session at question 1, discarding prior answers.
    pub fn restart(&mut self) {
        self.answers.clear();
        self.state = TestState::InProgress { question: 1 };
        self.touch();
    }

    /// Stores `answer` for the current question and advances.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::InvalidInput` if no question is in progress.
    pub fn record_answer(&mut self, answer: Likert) -> Result<AnswerOutcome> {
        let current = self.current_question().ok_or_else(|| {
            QuizError::invalid_input(format!("session '{}' has no question in progress", self.id))
        })?;

        self.answers.insert(current.id.to_string(), answer);
        let next = self.current_question_index() + 1;

        let outcome = match question::question_at(next) {
            Some(question) => {
                self.state = TestState::InProgress { question: next };
                AnswerOutcome::Next {
                    number: next,
                    question,
                }
            }
            None => {
                let personality_type = scoring::calculate_personality_type(&self.answers);
                self.state = TestState::Completed { personality_type };
                AnswerOutcome::Completed(personality_type)
            }
        };

        self.touch();
        Ok(outcome)
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

/// Shared, individually locked session.
///
/// Holding the lock for the duration of one query serializes mutations of
/// the same session without blocking other sessions.
pub type SessionHandle = Arc<Mutex<Session>>;

/// An abstract store of live sessions.
///
/// The engine only sees this trait, so a bounded or expiring store can stand
/// in for the unbounded in-memory map.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Returns the session for `session_id`, if one exists.
    async fn get(&self, session_id: &str) -> Option<SessionHandle>;

    /// Inserts a fresh session, replacing any existing one with the same id.
    async fn create(&self, session_id: &str) -> SessionHandle;

    /// Removes a session. Returns whether one was present.
    async fn delete(&self, session_id: &str) -> bool;

    /// Returns the existing session or atomically inserts a fresh one.
    async fn get_or_create(&self, session_id: &str) -> SessionHandle;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answer(value: i64) -> Likert {
        Likert::try_from(value).unwrap()
    }

    #[test]
    fn test_new_session_is_not_started() {
        let session = Session::new("s1");
        assert_eq!(session.state(), TestState::NotStarted);
        assert_eq!(session.current_question_index(), 0);
        assert!(session.answers().is_empty());
        assert!(session.personality_type().is_none());
        assert!(session.current_question().is_none());
    }

    #[test]
    fn test_answer_before_start_is_rejected() {
        let mut session = Session::new("s1");
        let err = session.record_answer(answer(3)).unwrap_err();
        assert!(matches!(err, QuizError::InvalidInput(_)));
        assert!(session.answers().is_empty());
    }

    #[test]
    fn test_walk_through_all_questions() {
        let mut session = Session::new("s1");
        session.restart();
        assert_eq!(session.current_question_index(), 1);

        for number in 1..TOTAL_QUESTIONS {
            match session.record_answer(answer(1)).unwrap() {
                AnswerOutcome::Next { number: next, .. } => assert_eq!(next, number + 1),
                other => panic!("unexpected outcome {other:?}"),
            }
        }

        let outcome = session.record_answer(answer(1)).unwrap();
        let expected: PersonalityType = "INFP".parse().unwrap();
        assert_eq!(outcome, AnswerOutcome::Completed(expected));
        assert!(session.is_completed());
        assert_eq!(session.current_question_index(), TOTAL_QUESTIONS);
        assert_eq!(session.answers().len(), TOTAL_QUESTIONS);
        assert_eq!(session.personality_type(), Some(expected));

        // Completed sessions accept no further answers.
        assert!(session.record_answer(answer(5)).is_err());
        assert_eq!(session.personality_type(), Some(expected));
    }

    #[test]
    fn test_restart_discards_answers() {
        let mut session = Session::new("s1");
        session.restart();
        session.record_answer(answer(5)).unwrap();
        session.record_answer(answer(4)).unwrap();
        assert_eq!(session.current_question_index(), 3);

        session.restart();
        assert_eq!(session.current_question_index(), 1);
        assert!(session.answers().is_empty());
    }
}
