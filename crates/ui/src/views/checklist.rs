use dioxus::prelude::*;

use checklist_core::model::{Section, SessionState};

use crate::views::{
    ConfirmModal, GetStartedView, ModalConfirm, NavigationBar, PendingConfirm, ProcessChecksView,
    ReportView, TechnicalTestsView, WelcomeView,
};

/// Renders the current section with its navigation controls.
#[component]
pub fn ChecklistView() -> Element {
    let session = use_context::<Signal<SessionState>>();
    let pending = use_signal(|| None::<PendingConfirm>);
    let confirm = ModalConfirm::new(pending);
    let section = session.read().section();

    rsx! {
        div { class: "page",
            match section {
                Section::WELCOME => rsx! { WelcomeView {} },
                Section::GET_STARTED => rsx! { GetStartedView {} },
                Section::PROCESS_CHECKS => rsx! { ProcessChecksView {} },
                Section::TECHNICAL_TESTS => rsx! { TechnicalTestsView {} },
                _ => rsx! { ReportView {} },
            }
            NavigationBar { confirm }
            ConfirmModal { confirm }
        }
    }
}
