use dioxus::prelude::*;

use drill_core::session::DRILL_COMPLETE_MESSAGE;

use crate::vm::{DrillIntent, SummaryVm};

#[component]
pub fn DrillComplete(summary: SummaryVm, on_intent: Callback<DrillIntent>) -> Element {
    rsx! {
        section { class: "panel drill-complete",
            h2 { "{DRILL_COMPLETE_MESSAGE}" }
            ul { class: "summary-counts",
                li { "Questions: {summary.total}" }
                li { "Solutions revealed: {summary.revealed}" }
                li { "Within time: {summary.within_time}" }
                li { "Timed out: {summary.expired}" }
                li { "Hints used: {summary.hints}" }
                li { "Feedback requests: {summary.feedback}" }
                li { "Duration: {summary.duration}" }
                li { "Finished: {summary.finished_at}" }
            }
            button {
                class: "btn btn-primary",
                r#type: "button",
                onclick: move |_| on_intent.call(DrillIntent::Restart),
                "Start Again"
            }
        }
    }
}
