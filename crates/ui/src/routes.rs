use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::views::{DrillView, QuestionsView, use_drill_provider};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", DrillView)] Drill {},
        #[route("/questions", QuestionsView)] Questions {},
}

#[component]
fn Layout() -> Element {
    use_drill_provider();

    rsx! {
        div { class: "app",
            nav { class: "topnav",
                Link { to: Route::Drill {}, "Drill" }
                Link { to: Route::Questions {}, "Questions" }
            }
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}
