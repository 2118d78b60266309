//! Query parsing.
//!
//! Free-text queries are turned into a [`Command`] once, at the boundary, so
//! the engine never inspects strings. Whether a command applies still depends
//! on session state; that resolution happens in the router.

use crate::error::QuizError;
use serde::{Deserialize, Serialize};
use std::num::IntErrorKind;

const START_KEYWORDS: [&str; 2] = ["start test", "take personality test"];
const ANSWER_MARKER: &str = "answer:";
const RESULTS_KEYWORD: &str = "results";

/// An answer on the five-point agreement scale.
///
/// 1 = Strongly Disagree, 3 = Neutral, 5 = Strongly Agree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Likert(u8);

impl Likert {
    pub const MIN: u8 = 1;
    pub const NEUTRAL: u8 = 3;
    pub const MAX: u8 = 5;

    /// Raw value in `1..=5`.
    pub fn value(self) -> u8 {
        self.0
    }

    /// Value shifted so that neutral is zero (`-2..=2`).
    pub fn centered(self) -> i32 {
        i32::from(self.0) - i32::from(Self::NEUTRAL)
    }
}

impl TryFrom<i64> for Likert {
    type Error = QuizError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if (i64::from(Self::MIN)..=i64::from(Self::MAX)).contains(&value) {
            Ok(Likert(value as u8))
        } else {
            Err(QuizError::invalid_input(format!(
                "answer {value} is outside {}-{}",
                Self::MIN,
                Self::MAX
            )))
        }
    }
}

impl From<Likert> for u8 {
    fn from(value: Likert) -> Self {
        value.0
    }
}

/// Outcome of reading the number after `answer:`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerValue {
    /// A usable answer.
    Valid(Likert),
    /// An integer, but not on the scale.
    OutOfRange,
    /// Not an integer at all.
    Unparsable,
}

impl AnswerValue {
    fn parse(raw: &str) -> Self {
        match raw.trim().parse::<i64>() {
            Ok(number) => match Likert::try_from(number) {
                Ok(likert) => AnswerValue::Valid(likert),
                Err(_) => AnswerValue::OutOfRange,
            },
            Err(err) => match err.kind() {
                IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => AnswerValue::OutOfRange,
                _ => AnswerValue::Unparsable,
            },
        }
    }
}

/// A parsed query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Begin (or restart) the test.
    Start,
    /// Submit an answer for the current question.
    ///
    /// `mentions_results` records that the query also asked for results, which
    /// matters once the test is complete and answers no longer apply.
    Answer {
        value: AnswerValue,
        mentions_results: bool,
    },
    /// Show the computed type.
    Results,
    /// Anything else, including `back`.
    Unknown,
}

impl Command {
    /// Parses a free-text query. Matching is case-insensitive and by substring.
    pub fn parse(query: &str) -> Self {
        let query = query.to_lowercase();

        if START_KEYWORDS.iter().any(|keyword| query.contains(keyword)) {
            return Command::Start;
        }

        let mentions_results = query.contains(RESULTS_KEYWORD);

        let mut segments = query.split(ANSWER_MARKER);
        // The first segment is whatever precedes the marker.
        segments.next();
        if let Some(raw) = segments.next() {
            return Command::Answer {
                value: AnswerValue::parse(raw),
                mentions_results,
            };
        }

        if mentions_results {
            Command::Results
        } else {
            Command::Unknown
        }
    }
}
