use dioxus::prelude::*;
use dioxus_router::{Outlet, Routable};

use checklist_core::model::{SECTION_COUNT, Section, SessionState};

use crate::views::ChecklistView;

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", ChecklistView)] Checklist {},
}

/// Owns the session for the lifetime of the window.
#[component]
fn Layout() -> Element {
    let session = use_context_provider(|| Signal::new(SessionState::new()));
    let current = session.read().section();

    rsx! {
        div { class: "app",
            Stepper { current }
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn Stepper(current: Section) -> Element {
    rsx! {
        nav { class: "stepper",
            h1 { "AI Verify" }
            ol {
                for raw in 0..SECTION_COUNT {
                    li {
                        key: "{raw}",
                        class: step_class(raw, current),
                        "{Section::clamped(raw).title()}"
                    }
                }
            }
        }
    }
}

fn step_class(raw: u8, current: Section) -> &'static str {
    match raw.cmp(&current.value()) {
        std::cmp::Ordering::Less => "step step--done",
        std::cmp::Ordering::Equal => "step step--current",
        std::cmp::Ordering::Greater => "step",
    }
}
