use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::views::{PracticeView, TutorView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", TutorView)] Tutor {},
        #[route("/practice", PracticeView)] Practice {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            Sidebar {}
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn Sidebar() -> Element {
    rsx! {
        nav { class: "sidebar",
            h1 { "Prep" }
            ul {
                li { Link { to: Route::Tutor {}, "Tutor" } }
                li { Link { to: Route::Practice {}, "Practice" } }
            }
        }
    }
}
