//! The fixed question bank.
//!
//! Twenty statements, five per dimension, answered on a 1-5 agreement scale.
//! Agreement pushes the score toward the first-listed letter of the
//! statement's dimension.

use crate::personality::Dimension;
use serde::Serialize;

/// A single statement in the question bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Question {
    /// Stable identifier such as `EI1`
    pub id: &'static str,
    /// Statement presented to the test taker
    pub text: &'static str,
    /// Axis the answer is scored against
    pub dimension: Dimension,
}

impl Question {
    const fn new(id: &'static str, text: &'static str, dimension: Dimension) -> Self {
        Self {
            id,
            text,
            dimension,
        }
    }
}

/// Number of questions in one test.
pub const TOTAL_QUESTIONS: usize = 20;

/// The question bank, in presentation order.
pub static QUESTIONS: [Question; TOTAL_QUESTIONS] = [
    // Extraversion (E) vs. Introversion (I)
    Question::new("EI1", "You prefer spending time with others rather than alone.", Dimension::Ei),
    Question::new("EI2", "You often take initiative in social situations.", Dimension::Ei),
    Question::new("EI3", "You get energized from social gatherings.", Dimension::Ei),
    Question::new("EI4", "You enjoy being the center of attention.", Dimension::Ei),
    Question::new("EI5", "You prefer working in teams rather than independently.", Dimension::Ei),
    // Sensing (S) vs. Intuition (N)
    Question::new("SN1", "You focus more on details than the big picture.", Dimension::Sn),
    Question::new("SN2", "You prefer concrete facts over abstract theories.", Dimension::Sn),
    Question::new("SN3", "You trust experience more than intuition.", Dimension::Sn),
    Question::new("SN4", "You prefer practical solutions over innovative ideas.", Dimension::Sn),
    Question::new(
        "SN5",
        "You focus more on present realities than future possibilities.",
        Dimension::Sn,
    ),
    // Thinking (T) vs. Feeling (F)
    Question::new("TF1", "You make decisions based on logic rather than feelings.", Dimension::Tf),
    Question::new("TF2", "You value objective truth over social harmony.", Dimension::Tf),
    Question::new("TF3", "You find it easy to criticize others when necessary.", Dimension::Tf),
    Question::new("TF4", "You prioritize efficiency over people's feelings.", Dimension::Tf),
    Question::new("TF5", "You prefer honest feedback over tactful communication.", Dimension::Tf),
    // Judging (J) vs. Perceiving (P)
    Question::new(
        "JP1",
        "You prefer having a detailed plan rather than being spontaneous.",
        Dimension::Jp,
    ),
    Question::new("JP2", "You like to have things decided and settled.", Dimension::Jp),
    Question::new("JP3", "You prefer structure and order over flexibility.", Dimension::Jp),
    Question::new("JP4", "You tend to complete tasks well ahead of deadlines.", Dimension::Jp),
    Question::new("JP5", "You prefer environments that are neat and organized.", Dimension::Jp),
];

/// Returns the question at a 1-based position, if any.
pub fn question_at(number: usize) -> Option<&'static Question> {
    number.checked_sub(1).and_then(|index| QUESTIONS.get(index))
}

/// Looks up a question by its id.
pub fn find_by_id(id: &str) -> Option<&'static Question> {
    QUESTIONS.iter().find(|q| q.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_each_dimension_has_five_questions() {
        for dimension in Dimension::ALL {
            let count = QUESTIONS.iter().filter(|q| q.dimension == dimension).count();
            assert_eq!(count, 5, "dimension {dimension}");
        }
    }

    #[test]
    fn test_ids_are_unique_and_tagged_by_dimension() {
        let ids: HashSet<_> = QUESTIONS.iter().map(|q| q.id).collect();
        assert_eq!(ids.len(), TOTAL_QUESTIONS);
        for question in &QUESTIONS {
            assert!(question.id.starts_with(question.dimension.as_str()));
        }
    }

    #[test]
    fn test_question_at_is_one_based() {
        assert!(question_at(0).is_none());
        assert_eq!(question_at(1).unwrap().id, "EI1");
        assert_eq!(question_at(20).unwrap().id, "JP5");
        assert!(question_at(21).is_none());
    }

    #[test]
    fn test_find_by_id() {
        assert_eq!(find_by_id("TF3").unwrap().dimension, Dimension::Tf);
        assert!(find_by_id("XX1").is_none());
    }
}
