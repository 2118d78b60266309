//! Four-dimension score tally.

use crate::command::Likert;
use crate::personality::{Dimension, PersonalityType};
use crate::question;
use std::collections::HashMap;

/// Running score per dimension.
///
/// Each answer adds `value - 3`; a non-negative total picks the first letter
/// of the pair, so a tie resolves to E, S, T or J.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DimensionScores {
    totals: [i32; 4],
}

impl DimensionScores {
    /// Tallies a set of answers keyed by question id.
    ///
    /// Ids that are not in the question bank are ignored.
    pub fn tally(answers: &HashMap<String, Likert>) -> Self {
        let mut scores = Self::default();
        for (question_id, answer) in answers {
            if let Some(question) = question::find_by_id(question_id) {
                scores.add(question.dimension, *answer);
            }
        }
        scores
    }

    /// Folds one answer into its dimension.
    pub fn add(&mut self, dimension: Dimension, answer: Likert) {
        self.totals[dimension.position()] += answer.centered();
    }

    /// Current total for a dimension.
    pub fn get(&self, dimension: Dimension) -> i32 {
        self.totals[dimension.position()]
    }

    /// Resolves each dimension to a letter and builds the code.
    pub fn personality_type(&self) -> PersonalityType {
        PersonalityType::from_poles(self.totals.map(|total| total >= 0))
    }
}

/// Computes the personality type for a set of answers.
pub fn calculate_personality_type(answers: &HashMap<String, Likert>) -> PersonalityType {
    DimensionScores::tally(answers).personality_type()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::question::QUESTIONS;

    fn uniform(value: i64) -> HashMap<String, Likert> {
        let answer = Likert::try_from(value).unwrap();
        QUESTIONS.iter().map(|q| (q.id.to_string(), answer)).collect()
    }

    fn per_dimension(values: [i64; 4]) -> HashMap<String, Likert> {
        QUESTIONS
            .iter()
            .map(|q| {
                let value = values[q.dimension.position()];
                (q.id.to_string(), Likert::try_from(value).unwrap())
            })
            .collect()
    }

    #[test]
    fn test_all_neutral_ties_to_estj() {
        let scores = DimensionScores::tally(&uniform(3));
        for dimension in Dimension::ALL {
            assert_eq!(scores.get(dimension), 0);
        }
        assert_eq!(scores.personality_type().code(), "ESTJ");
    }

    #[test]
    fn test_all_strongly_agree() {
        let scores = DimensionScores::tally(&uniform(5));
        for dimension in Dimension::ALL {
            assert_eq!(scores.get(dimension), 10);
        }
        assert_eq!(scores.personality_type().code(), "ESTJ");
    }

    #[test]
    fn test_all_strongly_disagree() {
        let scores = DimensionScores::tally(&uniform(1));
        for dimension in Dimension::ALL {
            assert_eq!(scores.get(dimension), -10);
        }
        assert_eq!(scores.personality_type().code(), "INFP");
    }

    #[test]
    fn test_dimensions_resolve_independently() {
        assert_eq!(calculate_personality_type(&per_dimension([1, 5, 2, 4])).code(), "ISFJ");
        assert_eq!(calculate_personality_type(&per_dimension([4, 2, 5, 1])).code(), "ENTP");
    }

    #[test]
    fn test_every_answer_pattern_yields_valid_letters_deterministically() {
        // Vary one question at a time against a neutral baseline.
        for question in &QUESTIONS {
            for value in 1..=5 {
                let mut answers = uniform(3);
                answers.insert(question.id.to_string(), Likert::try_from(value).unwrap());
                let first = calculate_personality_type(&answers);
                let second = calculate_personality_type(&answers);
                assert_eq!(first, second);
                for dimension in Dimension::ALL {
                    let letter = first.letter(dimension);
                    assert!(
                        letter == dimension.first_letter() || letter == dimension.second_letter()
                    );
                }
                let expected_second = value < 3;
                assert_eq!(
                    first.letter(question.dimension) == question.dimension.second_letter(),
                    expected_second
                );
            }
        }
    }

    #[test]
    fn test_unknown_question_ids_are_ignored() {
        let mut answers = uniform(3);
        answers.insert("ZZ9".to_string(), Likert::try_from(1).unwrap());
        assert_eq!(calculate_personality_type(&answers).code(), "ESTJ");
    }
}
