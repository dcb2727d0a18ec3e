use dioxus::prelude::*;

use crate::context::AppContext;
use crate::vm::map_question_cards;

#[component]
pub fn QuestionsView() -> Element {
    let ctx = use_context::<AppContext>();
    let bank = ctx.question_bank();
    let cards = map_question_cards(&bank);
    let target = ctx.drill_settings().target_minutes();

    rsx! {
        div { class: "page questions",
            h2 { "Questions" }
            p { class: "questions-meta", "{cards.len()} questions, {target} minutes each" }
            ol { class: "question-list",
                for card in cards {
                    li { key: "{card.number}", class: "question-card",
                        div { class: "question-card-header",
                            span { class: "{card.badge_class}", "{card.difficulty}" }
                            h3 { "{card.number}. {card.title}" }
                        }
                        p { class: "question-card-summary", "{card.summary}" }
                        p { class: "question-card-tables", "Tables: {card.tables}" }
                    }
                }
            }
        }
    }
}
