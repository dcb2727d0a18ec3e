use drill_core::model::Question;
use drill_core::{AssistKind, DrillSession};
use services::{AssistError, DrillController, DrillEvent, DrillUpdate};
use tokio::sync::mpsc::UnboundedReceiver;

use super::markdown_vm::markdown_to_html;
use super::question_vm::{SummaryVm, badge_class};
use super::time_fmt::format_countdown;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DrillIntent {
    EditDraft(String),
    Reveal,
    CloseSolution,
    Next,
    RequestHint,
    RequestFeedback,
    Restart,
}

/// View state for the drill page: the controller plus the one-line notice
/// shown under the editor.
pub struct DrillVm {
    controller: DrillController,
    notice: Option<String>,
}

impl DrillVm {
    #[must_use]
    pub fn new(controller: DrillController) -> Self {
        Self {
            controller,
            notice: None,
        }
    }

    #[must_use]
    pub fn session(&self) -> &DrillSession {
        self.controller.session()
    }

    #[must_use]
    pub fn question(&self) -> &Question {
        self.session().current_question()
    }

    #[must_use]
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn take_events(&mut self) -> Option<UnboundedReceiver<DrillEvent>> {
        self.controller.take_events()
    }

    pub fn apply(&mut self, event: DrillEvent) -> DrillUpdate {
        self.controller.apply(event)
    }

    pub fn dispatch(&mut self, intent: DrillIntent) {
        match intent {
            DrillIntent::EditDraft(text) => {
                self.controller.set_draft_query(text);
            }
            DrillIntent::Reveal => match self.controller.reveal_solution() {
                Ok(()) => self.notice = None,
                Err(err) => self.notice = Some(err.to_string()),
            },
            DrillIntent::CloseSolution => self.controller.close_solution(),
            DrillIntent::Next => {
                self.controller.advance();
                self.notice = None;
            }
            DrillIntent::RequestHint => self.request(AssistKind::Hint),
            DrillIntent::RequestFeedback => self.request(AssistKind::Feedback),
            DrillIntent::Restart => {
                if let Err(err) = self.controller.load_question(0) {
                    tracing::error!(error = %err, "failed to restart drill");
                }
                self.notice = None;
            }
        }
    }

    fn request(&mut self, kind: AssistKind) {
        let result = match kind {
            AssistKind::Hint => self.controller.request_hint(),
            AssistKind::Feedback => self.controller.request_feedback(),
        };
        match result {
            Ok(_) => self.notice = None,
            Err(AssistError::AlreadyPending(_)) => {}
            Err(err) => self.notice = Some(err.to_string()),
        }
    }

    #[must_use]
    pub fn assistant_enabled(&self) -> bool {
        self.controller.assistant_enabled()
    }

    #[must_use]
    pub fn title_target(&self) -> String {
        format!(
            "Target: {} Minutes / Query",
            self.session().settings().target_minutes()
        )
    }

    #[must_use]
    pub fn progress_label(&self) -> String {
        format!(
            "{} / {}",
            self.session().current_index() + 1,
            self.session().question_count()
        )
    }

    #[must_use]
    pub fn timer_label(&self) -> String {
        format_countdown(self.session().seconds_remaining())
    }

    #[must_use]
    pub fn timer_urgent(&self) -> bool {
        self.session().is_urgent()
    }

    #[must_use]
    pub fn badge_class(&self) -> &'static str {
        badge_class(self.question().difficulty)
    }

    #[must_use]
    pub fn schema_html(&self) -> &str {
        let session = self.session();
        session.bank().schema_html(session.current_question())
    }

    #[must_use]
    pub fn hint_button_label(&self) -> &'static str {
        if self.session().hint_pending() {
            "Getting Hint..."
        } else {
            "Need a hint?"
        }
    }

    #[must_use]
    pub fn feedback_button_label(&self) -> &'static str {
        if self.session().feedback_pending() {
            "Analyzing..."
        } else {
            "Get AI Feedback on Your Query"
        }
    }

    #[must_use]
    pub fn hint_text(&self) -> Option<&str> {
        self.session().hint_text()
    }

    #[must_use]
    pub fn feedback_html(&self) -> Option<String> {
        self.session().feedback_text().map(markdown_to_html)
    }

    #[must_use]
    pub fn summary(&self) -> Option<SummaryVm> {
        self.session().summary().map(SummaryVm::from_summary)
    }
}
