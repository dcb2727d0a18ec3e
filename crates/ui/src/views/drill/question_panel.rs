use dioxus::prelude::*;

/// Description and schema are bundled content and rendered as HTML.
#[component]
pub fn QuestionPanel(
    badge_class: &'static str,
    difficulty: &'static str,
    title: String,
    description_html: String,
    schema_html: String,
) -> Element {
    rsx! {
        section { class: "panel question-panel",
            span { class: "{badge_class}", "{difficulty}" }
            h2 { class: "question-title", "{title}" }
            div { class: "question-description", dangerous_inner_html: "{description_html}" }
            h3 { class: "schema-heading", "Database Schema" }
            div { class: "schema", dangerous_inner_html: "{schema_html}" }
        }
    }
}
