use std::fmt;

use crate::markup::strip_tags;
use crate::model::ids::{QuestionId, SchemaKey};

//
// ─── DIFFICULTY ────────────────────────────────────────────────────────────────
//

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Difficulty {
    WarmUp,
    Intermediate,
    ExamLevel,
    StringLogic,
    BossLevel,
}

/// Visual weight of a difficulty badge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BadgeTone {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::WarmUp => "Warm Up",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::ExamLevel => "Exam Level",
            Difficulty::StringLogic => "String Logic",
            Difficulty::BossLevel => "Boss Level",
        }
    }

    #[must_use]
    pub fn tone(self) -> BadgeTone {
        match self {
            Difficulty::ExamLevel | Difficulty::BossLevel => BadgeTone::Hard,
            Difficulty::Intermediate => BadgeTone::Medium,
            Difficulty::WarmUp | Difficulty::StringLogic => BadgeTone::Easy,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// A single drill problem.
///
/// `description` and `logic` hold trusted rich text (HTML fragments) that the
/// views render verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub id: QuestionId,
    pub difficulty: Difficulty,
    pub title: String,
    pub description: String,
    pub schema_key: SchemaKey,
    pub solution: String,
    pub logic: String,
}

impl Question {
    /// Description with rich-text markup removed, for prompts and terminals.
    #[must_use]
    pub fn plain_description(&self) -> String {
        strip_tags(&self.description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tones_group_difficulties() {
        assert_eq!(Difficulty::WarmUp.tone(), BadgeTone::Easy);
        assert_eq!(Difficulty::StringLogic.tone(), BadgeTone::Easy);
        assert_eq!(Difficulty::Intermediate.tone(), BadgeTone::Medium);
        assert_eq!(Difficulty::ExamLevel.tone(), BadgeTone::Hard);
        assert_eq!(Difficulty::BossLevel.tone(), BadgeTone::Hard);
    }

    #[test]
    fn plain_description_drops_markup() {
        let question = Question {
            id: QuestionId::new(1),
            difficulty: Difficulty::WarmUp,
            title: "t".into(),
            description: "<strong>Goal:</strong> list orders".into(),
            schema_key: SchemaKey::new("main"),
            solution: "SELECT 1;".into(),
            logic: String::new(),
        };
        assert_eq!(question.plain_description(), "Goal: list orders");
    }
}
