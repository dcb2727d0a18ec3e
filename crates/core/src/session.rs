//! Session controller state for one drill.
//!
//! `DrillSession` owns every mutable part of a drill: the current question,
//! its countdown, the draft query, solution visibility and the two assist
//! slots. It performs no I/O. Ticks and assist completions are fed in from
//! outside, tagged with the epoch they were issued for, so anything that
//! arrives after the user has moved on is discarded.

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::countdown::{Countdown, TickOutcome};
use crate::model::{DrillSettings, DrillSummary, Question, QuestionBank, QuestionId, QuestionOutcome};
use crate::time::Clock;

pub const QUERY_REQUIRED_MESSAGE: &str = "Please type a query first!";
pub const DRILL_COMPLETE_MESSAGE: &str = "Drill Complete! Great job.";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("Please type a query first!")]
    QueryRequired,

    #[error("question index {index} is out of range (drill has {len} questions)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("a {0} request is already pending")]
    AssistPending(AssistKind),
}

//
// ─── ASSIST SLOTS ──────────────────────────────────────────────────────────────
//

/// The two independent assistant flows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AssistKind {
    Hint,
    Feedback,
}

impl AssistKind {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            AssistKind::Hint => "hint",
            AssistKind::Feedback => "feedback",
        }
    }

    /// Shown when the service answered with nothing usable.
    #[must_use]
    pub fn empty_message(self) -> &'static str {
        match self {
            AssistKind::Hint => "Sorry, I couldn't generate a hint right now.",
            AssistKind::Feedback => "Sorry, I could not generate feedback at this time.",
        }
    }

    /// Shown when the request itself failed.
    #[must_use]
    pub fn failure_message(self) -> &'static str {
        match self {
            AssistKind::Hint => {
                "There was an error getting a hint. Please check your API key and try again."
            }
            AssistKind::Feedback => {
                "An error occurred while getting feedback. Please check your API key."
            }
        }
    }
}

impl fmt::Display for AssistKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AssistFailure {
    NoContent,
    Service,
}

/// Identifies one issued request: which flow, for which question load.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AssistTicket {
    pub kind: AssistKind,
    pub question_id: QuestionId,
    pub epoch: u64,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum AssistSlot {
    #[default]
    Idle,
    Pending(AssistTicket),
    Ready(String),
    Failed(AssistFailure),
}

impl AssistSlot {
    #[must_use]
    pub fn is_pending(&self) -> bool {
        matches!(self, AssistSlot::Pending(_))
    }

    /// Text to show for this slot, with failures resolved to their fixed messages.
    #[must_use]
    pub fn text(&self, kind: AssistKind) -> Option<&str> {
        match self {
            AssistSlot::Idle | AssistSlot::Pending(_) => None,
            AssistSlot::Ready(text) => Some(text),
            AssistSlot::Failed(AssistFailure::NoContent) => Some(kind.empty_message()),
            AssistSlot::Failed(AssistFailure::Service) => Some(kind.failure_message()),
        }
    }
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Advance {
    Next { index: usize },
    Complete,
}

#[derive(Debug, Clone)]
pub struct DrillSession {
    bank: Arc<QuestionBank>,
    settings: DrillSettings,
    clock: Clock,
    started_at: DateTime<Utc>,
    current_index: usize,
    epoch: u64,
    countdown: Countdown,
    draft_query: String,
    solution_visible: bool,
    hint: AssistSlot,
    feedback: AssistSlot,
    tally: QuestionOutcome,
    outcomes: Vec<QuestionOutcome>,
    summary: Option<DrillSummary>,
}

impl DrillSession {
    /// Start a drill on the first question with a running countdown.
    #[must_use]
    pub fn new(bank: Arc<QuestionBank>, settings: DrillSettings, clock: Clock) -> Self {
        let first = bank.questions()[0].id;
        Self {
            started_at: clock.now(),
            countdown: Countdown::started(settings.time_limit_secs()),
            tally: QuestionOutcome::new(first),
            bank,
            settings,
            clock,
            current_index: 0,
            epoch: 1,
            draft_query: String::new(),
            solution_visible: false,
            hint: AssistSlot::Idle,
            feedback: AssistSlot::Idle,
            outcomes: Vec::new(),
            summary: None,
        }
    }

    #[must_use]
    pub fn bank(&self) -> &Arc<QuestionBank> {
        &self.bank
    }

    #[must_use]
    pub fn settings(&self) -> DrillSettings {
        self.settings
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub fn question_count(&self) -> usize {
        self.bank.len()
    }

    #[must_use]
    pub fn current_question(&self) -> &Question {
        &self.bank.questions()[self.current_index]
    }

    /// Increments on every question load and on drill completion.
    #[must_use]
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    #[must_use]
    pub fn countdown(&self) -> &Countdown {
        &self.countdown
    }

    #[must_use]
    pub fn seconds_remaining(&self) -> u32 {
        self.countdown.remaining_secs()
    }

    #[must_use]
    pub fn timer_running(&self) -> bool {
        self.countdown.is_running()
    }

    #[must_use]
    pub fn is_urgent(&self) -> bool {
        self.countdown.remaining_secs() < self.settings.urgent_threshold_secs()
    }

    #[must_use]
    pub fn draft_query(&self) -> &str {
        &self.draft_query
    }

    #[must_use]
    pub fn solution_visible(&self) -> bool {
        self.solution_visible
    }

    #[must_use]
    pub fn slot(&self, kind: AssistKind) -> &AssistSlot {
        match kind {
            AssistKind::Hint => &self.hint,
            AssistKind::Feedback => &self.feedback,
        }
    }

    #[must_use]
    pub fn hint_text(&self) -> Option<&str> {
        self.hint.text(AssistKind::Hint)
    }

    #[must_use]
    pub fn hint_pending(&self) -> bool {
        self.hint.is_pending()
    }

    #[must_use]
    pub fn feedback_text(&self) -> Option<&str> {
        self.feedback.text(AssistKind::Feedback)
    }

    #[must_use]
    pub fn feedback_pending(&self) -> bool {
        self.feedback.is_pending()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.summary.is_some()
    }

    #[must_use]
    pub fn summary(&self) -> Option<&DrillSummary> {
        self.summary.as_ref()
    }

    /// Outcomes recorded so far, excluding the question in progress.
    #[must_use]
    pub fn outcomes(&self) -> &[QuestionOutcome] {
        &self.outcomes
    }

    /// Jump to a question and give it a fresh countdown, draft and assist state.
    ///
    /// Loading after the drill completed starts a new drill record.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::IndexOutOfRange` if `index` is not a question of this drill.
    pub fn load_question(&mut self, index: usize) -> Result<(), SessionError> {
        if index >= self.bank.len() {
            return Err(SessionError::IndexOutOfRange {
                index,
                len: self.bank.len(),
            });
        }

        if self.summary.take().is_some() {
            self.outcomes.clear();
            self.started_at = self.clock.now();
        } else {
            self.record_current();
        }
        self.enter(index);
        Ok(())
    }

    /// Move to the next question, or finish the drill after the last one.
    pub fn advance(&mut self) -> Advance {
        if self.summary.is_some() {
            self.solution_visible = false;
            return Advance::Complete;
        }

        let next = self.current_index + 1;
        if next < self.bank.len() {
            self.record_current();
            self.enter(next);
            return Advance::Next { index: next };
        }

        self.record_current();
        self.solution_visible = false;
        self.countdown.stop();
        self.epoch += 1;
        for slot in [&mut self.hint, &mut self.feedback] {
            if slot.is_pending() {
                *slot = AssistSlot::Idle;
            }
        }
        self.summary = Some(DrillSummary::new(
            self.started_at,
            self.clock.now(),
            self.outcomes.clone(),
        ));
        Advance::Complete
    }

    pub fn set_draft_query(&mut self, text: impl Into<String>) {
        self.draft_query = text.into();
    }

    /// Stop the clock and show the model solution.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::QueryRequired`, leaving state untouched, if the
    /// draft is empty or whitespace.
    pub fn reveal_solution(&mut self) -> Result<(), SessionError> {
        if self.draft_query.trim().is_empty() {
            return Err(SessionError::QueryRequired);
        }
        self.countdown.stop();
        self.solution_visible = true;
        self.tally.revealed = true;
        Ok(())
    }

    /// Hide the solution. The countdown stays stopped for this question.
    pub fn close_solution(&mut self) {
        self.solution_visible = false;
    }

    /// Apply one second of wall-clock time issued for `epoch`.
    ///
    /// Returns `None` when the tick belongs to an earlier question load.
    pub fn tick(&mut self, epoch: u64) -> Option<TickOutcome> {
        if epoch != self.epoch {
            return None;
        }
        let outcome = self.countdown.tick();
        if outcome == TickOutcome::Expired {
            self.tally.expired = true;
        }
        Some(outcome)
    }

    /// Mark a flow as pending and hand out the ticket its result must carry.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::AssistPending` while that flow already has a request out.
    pub fn begin_assist(&mut self, kind: AssistKind) -> Result<AssistTicket, SessionError> {
        if self.slot(kind).is_pending() {
            return Err(SessionError::AssistPending(kind));
        }
        let ticket = AssistTicket {
            kind,
            question_id: self.current_question().id,
            epoch: self.epoch,
        };
        match kind {
            AssistKind::Hint => {
                self.hint = AssistSlot::Pending(ticket);
                self.tally.hints_requested = self.tally.hints_requested.saturating_add(1);
            }
            AssistKind::Feedback => {
                self.feedback = AssistSlot::Pending(ticket);
                self.tally.feedback_requested = self.tally.feedback_requested.saturating_add(1);
            }
        }
        Ok(ticket)
    }

    /// Store the result of a request. Returns `false` if the ticket is stale
    /// (the user moved to another question, or the slot was reset).
    pub fn finish_assist(
        &mut self,
        ticket: AssistTicket,
        result: Result<String, AssistFailure>,
    ) -> bool {
        let slot = match ticket.kind {
            AssistKind::Hint => &mut self.hint,
            AssistKind::Feedback => &mut self.feedback,
        };
        if *slot != AssistSlot::Pending(ticket) {
            return false;
        }

        *slot = match result {
            Ok(text) if text.trim().is_empty() => AssistSlot::Failed(AssistFailure::NoContent),
            Ok(text) => AssistSlot::Ready(text),
            Err(failure) => AssistSlot::Failed(failure),
        };
        true
    }

    fn record_current(&mut self) {
        let mut outcome = self.tally;
        outcome.seconds_used = self.countdown.elapsed_secs();
        self.outcomes.push(outcome);
    }

    fn enter(&mut self, index: usize) {
        self.current_index = index;
        self.epoch += 1;
        self.draft_query.clear();
        self.solution_visible = false;
        self.hint = AssistSlot::Idle;
        self.feedback = AssistSlot::Idle;
        self.countdown.reset();
        self.tally = QuestionOutcome::new(self.current_question().id);
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
