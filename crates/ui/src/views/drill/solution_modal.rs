use dioxus::prelude::*;

use crate::vm::DrillIntent;

#[component]
pub fn SolutionModal(
    solution: String,
    logic_html: String,
    assistant_enabled: bool,
    feedback_label: &'static str,
    feedback_pending: bool,
    feedback_html: Option<String>,
    on_intent: Callback<DrillIntent>,
) -> Element {
    rsx! {
        div {
            class: "modal-overlay",
            onclick: move |_| on_intent.call(DrillIntent::CloseSolution),
            div {
                class: "modal solution-modal",
                onclick: move |evt| evt.stop_propagation(),
                div { class: "modal-header",
                    h3 { "Model Solution" }
                    button {
                        class: "btn btn-close",
                        r#type: "button",
                        onclick: move |_| on_intent.call(DrillIntent::CloseSolution),
                        "×"
                    }
                }
                pre { class: "solution-code", "{solution}" }
                h4 { "Logic Breakdown" }
                div { class: "logic", dangerous_inner_html: "{logic_html}" }
                if assistant_enabled {
                    button {
                        class: "btn btn-feedback",
                        r#type: "button",
                        disabled: feedback_pending,
                        onclick: move |_| on_intent.call(DrillIntent::RequestFeedback),
                        "{feedback_label}"
                    }
                }
                if let Some(html) = feedback_html {
                    div { class: "feedback", dangerous_inner_html: "{html}" }
                }
                div { class: "modal-actions",
                    button {
                        class: "btn btn-primary",
                        r#type: "button",
                        onclick: move |_| on_intent.call(DrillIntent::Next),
                        "Next Question →"
                    }
                }
            }
        }
    }
}
