use std::sync::Arc;

use drill_core::model::{DrillSettings, QuestionBank};
use drill_core::{Clock, DrillSession};
use services::{AssistService, DrillController};

/// What the composition root supplies to the views.
pub trait UiApp: Send + Sync {
    fn question_bank(&self) -> Arc<QuestionBank>;
    fn assistant(&self) -> Arc<AssistService>;
    fn drill_settings(&self) -> DrillSettings;
    fn clock(&self) -> Clock;
}

#[derive(Clone)]
pub struct AppContext {
    question_bank: Arc<QuestionBank>,
    assistant: Arc<AssistService>,
    drill_settings: DrillSettings,
    clock: Clock,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            question_bank: app.question_bank(),
            assistant: app.assistant(),
            drill_settings: app.drill_settings(),
            clock: app.clock(),
        }
    }

    #[must_use]
    pub fn question_bank(&self) -> Arc<QuestionBank> {
        Arc::clone(&self.question_bank)
    }

    #[must_use]
    pub fn assistant(&self) -> Arc<AssistService> {
        Arc::clone(&self.assistant)
    }

    #[must_use]
    pub fn drill_settings(&self) -> DrillSettings {
        self.drill_settings
    }

    /// A fresh drill on the first question. Starts the countdown ticker, so
    /// it must run inside the tokio runtime.
    #[must_use]
    pub fn start_drill(&self) -> DrillController {
        let session = DrillSession::new(self.question_bank(), self.drill_settings, self.clock);
        DrillController::new(session, self.assistant())
    }
}

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
