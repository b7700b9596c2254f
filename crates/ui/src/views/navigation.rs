use dioxus::prelude::*;

use checklist_core::model::SessionState;
use services::{ResetOutcome, SectionNavigator};

use crate::context::AppContext;
use crate::views::ModalConfirm;
use crate::vm::map_nav_bar;

/// Ask through the modal, then clear the live session on "yes".
///
/// The reset runs on a copy; the live session is only replaced once cleared.
pub(crate) async fn start_over(
    mut session: Signal<SessionState>,
    navigator: SectionNavigator,
    confirm: ModalConfirm,
) -> ResetOutcome {
    let mut draft = session.peek().clone();
    let outcome = navigator.reset(&mut draft, &confirm).await;
    if outcome == ResetOutcome::Cleared {
        session.set(draft);
    }
    outcome
}

#[component]
pub fn NavigationBar(confirm: ModalConfirm) -> Element {
    let ctx = use_context::<AppContext>();
    let mut session = use_context::<Signal<SessionState>>();
    let navigator = ctx.navigator();
    let checklist = ctx.checklist();

    let vm = {
        let state = session.read();
        let stats = checklist.stats(&state);
        map_nav_bar(
            navigator.render_guard(&state),
            navigator.next_gate(&state, &stats),
        )
    };
    if vm.is_hidden() {
        return rsx! {};
    }

    rsx! {
        hr { class: "nav-divider" }
        div { class: "nav-bar",
            if vm.show_start_over {
                button {
                    class: "btn nav-home",
                    r#type: "button",
                    onclick: move |_| {
                        spawn(async move {
                            start_over(session, navigator, confirm).await;
                        });
                    },
                    "Home"
                }
            }
            div { class: "nav-spacer" }
            if vm.show_back {
                button {
                    class: "btn nav-back",
                    r#type: "button",
                    onclick: move |_| {
                        navigator.back(&mut session.write());
                    },
                    "← Back"
                }
            }
            if vm.show_next {
                button {
                    class: "btn btn-primary nav-next",
                    r#type: "button",
                    disabled: !vm.next_enabled,
                    title: vm.next_help.unwrap_or_default(),
                    onclick: move |_| {
                        navigator.next(&mut session.write());
                    },
                    "Next →"
                }
            }
        }
        if let Some(help) = vm.next_help {
            p { class: "nav-help", "{help}" }
        }
    }
}
