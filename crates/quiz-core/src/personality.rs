//! Personality dimensions, the sixteen four-letter codes and their descriptions.

use crate::error::QuizError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the four independent personality axes.
///
/// Each axis has two poles; the first-listed pole is the one chosen on a tie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Dimension {
    /// Extraversion (E) vs. Introversion (I)
    #[serde(rename = "EI")]
    Ei,
    /// Sensing (S) vs. Intuition (N)
    #[serde(rename = "SN")]
    Sn,
    /// Thinking (T) vs. Feeling (F)
    #[serde(rename = "TF")]
    Tf,
    /// Judging (J) vs. Perceiving (P)
    #[serde(rename = "JP")]
    Jp,
}

impl Dimension {
    /// All dimensions in code order.
    pub const ALL: [Dimension; 4] = [Dimension::Ei, Dimension::Sn, Dimension::Tf, Dimension::Jp];

    /// Two-letter tag used in question ids (`EI`, `SN`, `TF`, `JP`).
    pub fn as_str(self) -> &'static str {
        match self {
            Dimension::Ei => "EI",
            Dimension::Sn => "SN",
            Dimension::Tf => "TF",
            Dimension::Jp => "JP",
        }
    }

    /// Letter for a non-negative score.
    pub fn first_letter(self) -> char {
        match self {
            Dimension::Ei => 'E',
            Dimension::Sn => 'S',
            Dimension::Tf => 'T',
            Dimension::Jp => 'J',
        }
    }

    /// Letter for a negative score.
    pub fn second_letter(self) -> char {
        match self {
            Dimension::Ei => 'I',
            Dimension::Sn => 'N',
            Dimension::Tf => 'F',
            Dimension::Jp => 'P',
        }
    }

    /// Position of this dimension in a four-letter code.
    pub fn position(self) -> usize {
        match self {
            Dimension::Ei => 0,
            Dimension::Sn => 1,
            Dimension::Tf => 2,
            Dimension::Jp => 3,
        }
    }

    // Bit set in a type index when the second pole is chosen.
    fn mask(self) -> u8 {
        1 << (3 - self.position())
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

struct TypeEntry {
    code: &'static str,
    description: &'static str,
}

// Indexed by the bit pattern of second poles: I=8, N=4, F=2, P=1.
const TYPE_TABLE: [TypeEntry; PersonalityType::COUNT] = [
    TypeEntry {
        code: "ESTJ",
        description: "Practical, realistic, and decisive. Organized and quick to implement decisions.",
    },
    TypeEntry {
        code: "ESTP",
        description: "Flexible, tolerant, and spontaneous. Focuses on immediate results.",
    },
    TypeEntry {
        code: "ESFJ",
        description: "Warmhearted, conscientious, and cooperative. Seeks harmony and values traditions.",
    },
    TypeEntry {
        code: "ESFP",
        description: "Outgoing, friendly, and accepting. Enjoys making things fun for others.",
    },
    TypeEntry {
        code: "ENTJ",
        description: "Frank, decisive, and assumes leadership easily. Driven to organize and implement.",
    },
    TypeEntry {
        code: "ENTP",
        description: "Quick, ingenious, and stimulating. Enjoys new challenges.",
    },
    TypeEntry {
        code: "ENFJ",
        description: "Warm, empathetic, responsive, and responsible. Attuned to others' needs.",
    },
    TypeEntry {
        code: "ENFP",
        description: "Enthusiastic, creative, and spontaneous. Sees possibilities and connections.",
    },
    TypeEntry {
        code: "ISTJ",
        description: "Quiet, serious, practical, and dependable. Values traditions and loyalty.",
    },
    TypeEntry {
        code: "ISTP",
        description: "Tolerant, flexible problem-solver. Interested in how things work.",
    },
    TypeEntry {
        code: "ISFJ",
        description: "Quiet, friendly, responsible, and conscientious. Committed to meeting obligations.",
    },
    TypeEntry {
        code: "ISFP",
        description: "Quiet, friendly, sensitive, and kind. Enjoys the present moment.",
    },
    TypeEntry {
        code: "INTJ",
        description: "Independent, analytical, and determined. High standards and original thinking.",
    },
    TypeEntry {
        code: "INTP",
        description: "Logical, original thinker. Interested in ideas and theoretical concepts.",
    },
    TypeEntry {
        code: "INFJ",
        description: "Seeks meaning and connection. Insightful about others with strong values.",
    },
    TypeEntry {
        code: "INFP",
        description: "Idealistic, loyal, and adaptable. Cares deeply about personal values.",
    },
];

/// A four-letter personality code such as `ESTJ` or `INFP`.
///
/// Only the sixteen valid codes can be represented. Serializes as the plain
/// code string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PersonalityType(u8);

impl PersonalityType {
    /// Number of distinct types.
    pub const COUNT: usize = 16;

    /// Builds a type from the chosen pole of each dimension.
    ///
    /// `first_pole[i]` is true when `Dimension::ALL[i]` resolves to its
    /// first-listed letter (E, S, T, J).
    pub fn from_poles(first_pole: [bool; 4]) -> Self {
        let index = Dimension::ALL
            .iter()
            .zip(first_pole)
            .filter(|(_, first)| !first)
            .fold(0u8, |acc, (dimension, _)| acc | dimension.mask());
        Self(index)
    }

    /// All sixteen types.
    pub fn all() -> impl Iterator<Item = PersonalityType> {
        (0..TYPE_TABLE.len() as u8).map(PersonalityType)
    }

    /// Position in the fixed type ordering, `0..COUNT`.
    ///
    /// Second poles set bits I=8, N=4, F=2, P=1, so `ESTJ` is 0 and `INFP`
    /// is 15. Tables keyed by type use this order.
    pub fn index(&self) -> usize {
        usize::from(self.0)
    }

    /// The four-letter code.
    pub fn code(&self) -> &'static str {
        TYPE_TABLE[self.index()].code
    }

    /// Human-readable summary of the type.
    pub fn description(&self) -> &'static str {
        TYPE_TABLE[self.index()].description
    }

    /// The letter this type holds for `dimension`.
    pub fn letter(&self, dimension: Dimension) -> char {
        if self.0 & dimension.mask() == 0 {
            dimension.first_letter()
        } else {
            dimension.second_letter()
        }
    }
}

impl fmt::Display for PersonalityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for PersonalityType {
    type Err = QuizError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_ascii_uppercase();
        TYPE_TABLE
            .iter()
            .position(|entry| entry.code == code)
            .map(|index| PersonalityType(index as u8))
            .ok_or_else(|| QuizError::invalid_input(format!("unknown personality type '{s}'")))
    }
}

impl TryFrom<String> for PersonalityType {
    type Error = QuizError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<PersonalityType> for String {
    fn from(value: PersonalityType) -> Self {
        value.code().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_codes_match_bit_layout() {
        for personality in PersonalityType::all() {
            let rebuilt: String = Dimension::ALL
                .iter()
                .map(|d| personality.letter(*d))
                .collect();
            assert_eq!(rebuilt, personality.code());
        }
    }

    #[test]
    fn test_from_poles() {
        assert_eq!(PersonalityType::from_poles([true; 4]).code(), "ESTJ");
        assert_eq!(PersonalityType::from_poles([false; 4]).code(), "INFP");
        assert_eq!(
            PersonalityType::from_poles([true, false, true, false]).code(),
            "ENTP"
        );
    }

    #[test]
    fn test_index_runs_from_estj_to_infp() {
        let indices: Vec<usize> = PersonalityType::all().map(|t| t.index()).collect();
        assert_eq!(indices, (0..PersonalityType::COUNT).collect::<Vec<_>>());
        assert_eq!(PersonalityType::from_poles([false; 4]).index(), 15);
    }

    #[test]
    fn test_all_sixteen_codes_are_distinct() {
        let mut codes: Vec<_> = PersonalityType::all().map(|t| t.code()).collect();
        codes.sort();
        codes.dedup();
        assert_eq!(codes.len(), 16);
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        let parsed: PersonalityType = " intj ".parse().unwrap();
        assert_eq!(parsed.code(), "INTJ");
        assert!(parsed.description().starts_with("Independent"));
    }

    #[test]
    fn test_parse_rejects_unknown_code() {
        assert!("XXXX".parse::<PersonalityType>().is_err());
        assert!("EST".parse::<PersonalityType>().is_err());
    }

    #[test]
    fn test_serializes_as_code_string() {
        let personality: PersonalityType = "ENFP".parse().unwrap();
        let json = serde_json::to_string(&personality).unwrap();
        assert_eq!(json, "\"ENFP\"");
        let back: PersonalityType = serde_json::from_str(&json).unwrap();
        assert_eq!(back, personality);
    }
}
