use dioxus::prelude::*;

use crate::vm::DrillIntent;

#[component]
pub fn EditorPanel(
    draft: String,
    hint_label: &'static str,
    hint_pending: bool,
    hint_text: Option<String>,
    notice: Option<String>,
    on_intent: Callback<DrillIntent>,
) -> Element {
    rsx! {
        section { class: "panel editor-panel",
            div { class: "editor-toolbar",
                h3 { "Your Query" }
                button {
                    class: "btn btn-hint",
                    r#type: "button",
                    disabled: hint_pending,
                    onclick: move |_| on_intent.call(DrillIntent::RequestHint),
                    "{hint_label}"
                }
            }
            if let Some(hint) = hint_text {
                div { class: "hint-bubble", "{hint}" }
            }
            textarea {
                class: "sql-editor",
                spellcheck: "false",
                placeholder: "-- Write your SQL here",
                value: "{draft}",
                oninput: move |evt| on_intent.call(DrillIntent::EditDraft(evt.value())),
            }
            if let Some(notice) = notice {
                p { class: "notice", "{notice}" }
            }
            div { class: "editor-actions",
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    onclick: move |_| on_intent.call(DrillIntent::Reveal),
                    "Compare Answer"
                }
            }
        }
    }
}
