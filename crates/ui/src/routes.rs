use dioxus::prelude::*;
use dioxus_router::{Outlet, Routable};

use crate::context::AppContext;
use crate::views::QuizView;

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", QuizView)] Quiz {},
}

#[component]
fn Layout() -> Element {
    let ctx = use_context::<AppContext>();
    rsx! {
        div { class: "app",
            header { class: "app-header",
                h1 { class: "app-title", "Quiz Interactivo Pro" }
                p { class: "app-subtitle", "Answer each question before the clock runs out." }
            }
            main { class: "content",
                Outlet::<Route> {}
            }
            footer { class: "app-footer", "{ctx.source_label()}" }
        }
    }
}
