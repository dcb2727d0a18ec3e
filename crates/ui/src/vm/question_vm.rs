use drill_core::model::{BadgeTone, Difficulty, DrillSummary, QuestionBank};

use super::time_fmt::format_datetime;

#[must_use]
pub fn badge_class(difficulty: Difficulty) -> &'static str {
    match difficulty.tone() {
        BadgeTone::Easy => "badge badge-easy",
        BadgeTone::Medium => "badge badge-medium",
        BadgeTone::Hard => "badge badge-hard",
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionCardVm {
    pub number: usize,
    pub title: String,
    pub difficulty: &'static str,
    pub badge_class: &'static str,
    pub summary: String,
    pub tables: String,
}

#[must_use]
pub fn map_question_cards(bank: &QuestionBank) -> Vec<QuestionCardVm> {
    bank.questions()
        .iter()
        .enumerate()
        .map(|(idx, question)| QuestionCardVm {
            number: idx + 1,
            title: question.title.clone(),
            difficulty: question.difficulty.label(),
            badge_class: badge_class(question.difficulty),
            summary: question.plain_description(),
            tables: bank.schema_tables(question).join(", "),
        })
        .collect()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SummaryVm {
    pub total: usize,
    pub revealed: usize,
    pub within_time: usize,
    pub expired: usize,
    pub hints: u32,
    pub feedback: u32,
    pub duration: String,
    pub finished_at: String,
}

impl SummaryVm {
    #[must_use]
    pub fn from_summary(summary: &DrillSummary) -> Self {
        let secs = summary.duration_secs().max(0);
        Self {
            total: summary.total_questions(),
            revealed: summary.revealed_count(),
            within_time: summary.within_time_count(),
            expired: summary.expired_count(),
            hints: summary.hints_requested(),
            feedback: summary.feedback_requested(),
            duration: format!("{}m {:02}s", secs / 60, secs % 60),
            finished_at: format_datetime(summary.completed_at()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn badge_classes_follow_tone() {
        assert_eq!(badge_class(Difficulty::WarmUp), "badge badge-easy");
        assert_eq!(badge_class(Difficulty::StringLogic), "badge badge-easy");
        assert_eq!(badge_class(Difficulty::Intermediate), "badge badge-medium");
        assert_eq!(badge_class(Difficulty::BossLevel), "badge badge-hard");
    }

    #[test]
    fn cards_number_from_one_with_plain_text() {
        let bank = QuestionBank::builtin();
        let cards = map_question_cards(&bank);
        assert_eq!(cards.len(), 5);
        assert_eq!(cards[0].number, 1);
        assert_eq!(cards[0].difficulty, "Warm Up");
        assert!(!cards[0].summary.contains('<'));
        assert_eq!(cards[0].tables, "customers, orders, returns");
    }
}
