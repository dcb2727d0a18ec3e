use chrono::{DateTime, Utc};

use crate::model::ids::QuestionId;

/// What happened on a single question before the user moved on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuestionOutcome {
    pub question_id: QuestionId,
    pub seconds_used: u32,
    pub revealed: bool,
    pub expired: bool,
    pub hints_requested: u32,
    pub feedback_requested: u32,
}

impl QuestionOutcome {
    #[must_use]
    pub fn new(question_id: QuestionId) -> Self {
        Self {
            question_id,
            seconds_used: 0,
            revealed: false,
            expired: false,
            hints_requested: 0,
            feedback_requested: 0,
        }
    }

    /// Revealed the solution before the countdown ran out.
    #[must_use]
    pub fn within_time(&self) -> bool {
        self.revealed && !self.expired
    }
}

/// Aggregate summary for a completed drill.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrillSummary {
    started_at: DateTime<Utc>,
    completed_at: DateTime<Utc>,
    outcomes: Vec<QuestionOutcome>,
}

impl DrillSummary {
    #[must_use]
    pub fn new(
        started_at: DateTime<Utc>,
        completed_at: DateTime<Utc>,
        outcomes: Vec<QuestionOutcome>,
    ) -> Self {
        // A system clock can step backwards between the two readings.
        let completed_at = completed_at.max(started_at);
        Self {
            started_at,
            completed_at,
            outcomes,
        }
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> DateTime<Utc> {
        self.completed_at
    }

    #[must_use]
    pub fn outcomes(&self) -> &[QuestionOutcome] {
        &self.outcomes
    }

    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.outcomes.len()
    }

    #[must_use]
    pub fn revealed_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.revealed).count()
    }

    #[must_use]
    pub fn expired_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.expired).count()
    }

    #[must_use]
    pub fn within_time_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.within_time()).count()
    }

    #[must_use]
    pub fn hints_requested(&self) -> u32 {
        self.outcomes
            .iter()
            .fold(0_u32, |acc, o| acc.saturating_add(o.hints_requested))
    }

    #[must_use]
    pub fn feedback_requested(&self) -> u32 {
        self.outcomes
            .iter()
            .fold(0_u32, |acc, o| acc.saturating_add(o.feedback_requested))
    }

    #[must_use]
    pub fn duration_secs(&self) -> i64 {
        (self.completed_at - self.started_at).num_seconds()
    }
}
