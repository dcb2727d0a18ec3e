//! Drill controller: a `DrillSession` plus the asynchronous pieces around it.
//!
//! All state changes happen on the caller's thread. The ticker and the
//! assistant requests run as tokio tasks that only post `DrillEvent`s back;
//! the owner feeds those to [`DrillController::apply`].

use std::sync::Arc;
use std::time::Duration;

use drill_core::{
    Advance, AssistFailure, AssistKind, AssistTicket, DrillSession, SessionError, TickOutcome,
};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::assistant::AssistService;
use crate::error::AssistError;
use crate::ticker::{TICK_PERIOD, Ticker};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrillEvent {
    Tick {
        epoch: u64,
    },
    AssistDone {
        ticket: AssistTicket,
        result: Result<String, AssistFailure>,
    },
}

/// What applying an event changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrillUpdate {
    Ticked(TickOutcome),
    Assisted(AssistKind),
    /// The event was issued for a question the user has already left.
    Stale,
}

pub struct DrillController {
    session: DrillSession,
    assistant: Arc<AssistService>,
    ticker: Ticker,
    events_tx: UnboundedSender<DrillEvent>,
    events_rx: Option<UnboundedReceiver<DrillEvent>>,
}

impl DrillController {
    /// Take ownership of a session and start its countdown ticker.
    ///
    /// Must be called from within a tokio runtime.
    #[must_use]
    pub fn new(session: DrillSession, assistant: Arc<AssistService>) -> Self {
        Self::with_tick_period(session, assistant, TICK_PERIOD)
    }

    #[must_use]
    pub fn with_tick_period(
        session: DrillSession,
        assistant: Arc<AssistService>,
        period: Duration,
    ) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        let mut controller = Self {
            session,
            assistant,
            ticker: Ticker::new(period),
            events_tx,
            events_rx: Some(events_rx),
        };
        controller.sync_ticker();
        controller
    }

    #[must_use]
    pub fn session(&self) -> &DrillSession {
        &self.session
    }

    #[must_use]
    pub fn assistant_enabled(&self) -> bool {
        self.assistant.enabled()
    }

    #[must_use]
    pub fn ticker_running(&self) -> bool {
        self.ticker.is_running()
    }

    /// Hand the event stream to an external pump. Subsequent calls return `None`.
    pub fn take_events(&mut self) -> Option<UnboundedReceiver<DrillEvent>> {
        self.events_rx.take()
    }

    /// Wait for the next event when the stream has not been taken.
    pub async fn next_event(&mut self) -> Option<DrillEvent> {
        match self.events_rx.as_mut() {
            Some(rx) => rx.recv().await,
            None => None,
        }
    }

    pub fn apply(&mut self, event: DrillEvent) -> DrillUpdate {
        match event {
            DrillEvent::Tick { epoch } => match self.session.tick(epoch) {
                None => DrillUpdate::Stale,
                Some(outcome) => {
                    if outcome == TickOutcome::Expired {
                        tracing::info!(
                            question_id = self.session.current_question().id.value(),
                            "question time expired"
                        );
                    }
                    if !self.session.timer_running() {
                        self.ticker.stop();
                    }
                    DrillUpdate::Ticked(outcome)
                }
            },
            DrillEvent::AssistDone { ticket, result } => {
                if self.session.finish_assist(ticket, result) {
                    DrillUpdate::Assisted(ticket.kind)
                } else {
                    tracing::debug!(
                        kind = %ticket.kind,
                        question_id = ticket.question_id.value(),
                        "dropping stale assistant response"
                    );
                    DrillUpdate::Stale
                }
            }
        }
    }

    /// # Errors
    ///
    /// Returns `SessionError::IndexOutOfRange` for an index outside the drill.
    pub fn load_question(&mut self, index: usize) -> Result<(), SessionError> {
        self.session.load_question(index)?;
        self.sync_ticker();
        Ok(())
    }

    pub fn advance(&mut self) -> Advance {
        let advance = self.session.advance();
        match advance {
            Advance::Next { index } => {
                tracing::debug!(index, "advanced to next question");
                self.sync_ticker();
            }
            Advance::Complete => {
                self.ticker.stop();
                if let Some(summary) = self.session.summary() {
                    tracing::info!(
                        questions = summary.total_questions(),
                        revealed = summary.revealed_count(),
                        within_time = summary.within_time_count(),
                        "drill complete"
                    );
                }
            }
        }
        advance
    }

    pub fn set_draft_query(&mut self, text: impl Into<String>) {
        self.session.set_draft_query(text);
    }

    /// # Errors
    ///
    /// Returns `SessionError::QueryRequired` when the draft is blank.
    pub fn reveal_solution(&mut self) -> Result<(), SessionError> {
        self.session.reveal_solution()?;
        self.ticker.stop();
        Ok(())
    }

    pub fn close_solution(&mut self) {
        self.session.close_solution();
    }

    /// Ask the assistant for a hint on the current question.
    ///
    /// # Errors
    ///
    /// Returns `AssistError::NotConfigured` or `AssistError::AlreadyPending`
    /// without issuing a request.
    pub fn request_hint(&mut self) -> Result<AssistTicket, AssistError> {
        self.request(AssistKind::Hint)
    }

    /// Ask the assistant to compare the draft with the model solution.
    ///
    /// # Errors
    ///
    /// Returns `AssistError::NotConfigured` or `AssistError::AlreadyPending`
    /// without issuing a request.
    pub fn request_feedback(&mut self) -> Result<AssistTicket, AssistError> {
        self.request(AssistKind::Feedback)
    }

    fn request(&mut self, kind: AssistKind) -> Result<AssistTicket, AssistError> {
        if !self.assistant.enabled() {
            return Err(AssistError::NotConfigured);
        }

        let ticket = self
            .session
            .begin_assist(kind)
            .map_err(|_| AssistError::AlreadyPending(kind))?;
        let bank = Arc::clone(self.session.bank());
        let question = self.session.current_question().clone();
        let draft = self.session.draft_query().to_string();

        tracing::info!(
            kind = %kind,
            question_id = ticket.question_id.value(),
            "assistant request started"
        );

        let assistant = Arc::clone(&self.assistant);
        let events = self.events_tx.clone();
        tokio::spawn(async move {
            let reply = match kind {
                AssistKind::Hint => assistant.hint(&bank, &question).await,
                AssistKind::Feedback => assistant.feedback(&question, &draft).await,
            };
            let result = match reply {
                Ok(text) => {
                    tracing::info!(kind = %kind, "assistant request finished");
                    Ok(text)
                }
                Err(err) => {
                    tracing::warn!(kind = %kind, error = %err, "assistant request failed");
                    Err(err.failure())
                }
            };
            let _ = events.send(DrillEvent::AssistDone { ticket, result });
        });

        Ok(ticket)
    }

    fn sync_ticker(&mut self) {
        if self.session.timer_running() {
            self.ticker.start(self.session.epoch(), self.events_tx.clone());
        } else {
            self.ticker.stop();
        }
    }
}
