use dioxus::prelude::*;

#[component]
pub fn DrillHeader(target: String, progress: String, timer: String, urgent: bool) -> Element {
    let timer_class = if urgent { "timer timer-urgent" } else { "timer" };

    rsx! {
        header { class: "drill-header",
            div { class: "drill-title",
                h1 { "Marketplace SQL Drill" }
                p { class: "drill-target", "{target}" }
            }
            div { class: "drill-status",
                span { class: "drill-progress", "Question {progress}" }
                span { class: "{timer_class}", "{timer}" }
            }
        }
    }
}
