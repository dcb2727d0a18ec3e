use dioxus::prelude::*;

use crate::vm::{DrillIntent, DrillVm};

use super::complete::DrillComplete;
use super::editor_panel::EditorPanel;
use super::header::DrillHeader;
use super::question_panel::QuestionPanel;
use super::solution_modal::SolutionModal;

#[component]
pub fn DrillView() -> Element {
    let mut vm = use_context::<Signal<DrillVm>>();

    let on_intent = use_callback(move |intent: DrillIntent| vm.write().dispatch(intent));

    let state = vm.read();
    let session = state.session();
    let question = state.question();

    rsx! {
        div { class: "page drill",
            DrillHeader {
                target: state.title_target(),
                progress: state.progress_label(),
                timer: state.timer_label(),
                urgent: state.timer_urgent(),
            }
            if let Some(summary) = state.summary() {
                DrillComplete { summary, on_intent }
            } else {
                div { class: "drill-grid",
                    QuestionPanel {
                        badge_class: state.badge_class(),
                        difficulty: question.difficulty.label(),
                        title: question.title.clone(),
                        description_html: question.description.clone(),
                        schema_html: state.schema_html().to_string(),
                    }
                    EditorPanel {
                        draft: session.draft_query().to_string(),
                        hint_label: state.hint_button_label(),
                        hint_pending: session.hint_pending(),
                        hint_text: state.hint_text().map(str::to_string),
                        notice: state.notice().map(str::to_string),
                        on_intent,
                    }
                }
                if session.solution_visible() {
                    SolutionModal {
                        solution: question.solution.clone(),
                        logic_html: question.logic.clone(),
                        assistant_enabled: state.assistant_enabled(),
                        feedback_label: state.feedback_button_label(),
                        feedback_pending: session.feedback_pending(),
                        feedback_html: state.feedback_html(),
                        on_intent,
                    }
                }
            }
        }
    }
}
