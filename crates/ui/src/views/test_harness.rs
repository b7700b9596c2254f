use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};

use checklist_core::model::SessionState;
use services::{AppServices, ChecklistService, ResetOutcome, SectionNavigator};

use super::navigation::start_over;
use super::principle_cards::use_progress_widget;
use super::process_checks::use_principle_selection;
use super::technical_tests::upload_from_path;
use crate::context::{AppContext, UiApp, build_app_context};
use crate::views::{ChecklistView, ConfirmModal, ModalConfirm, PendingConfirm};

#[derive(Clone)]
struct TestApp {
    services: AppServices,
}

impl UiApp for TestApp {
    fn checklist(&self) -> Arc<ChecklistService> {
        self.services.checklist()
    }

    fn navigator(&self) -> SectionNavigator {
        self.services.navigator()
    }
}

/// User actions played against the mounted checklist.
#[derive(Clone, Debug, PartialEq)]
pub enum Script {
    Idle,
    /// Press Home, then answer the prompt. `None` leaves the prompt open.
    StartOver(Option<bool>),
    /// Click the card at this index once the widget has drawn it.
    ClickCard(usize),
    /// Upload the results file at this path.
    Upload(String),
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    session: SessionState,
    script: Script,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| Signal::new(props.session.clone()));
    use_context_provider(|| props.script.clone());
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    match use_context::<Script>() {
        Script::Idle => rsx! { ChecklistView {} },
        Script::StartOver(answer) => rsx! {
            StartOverScript { answer }
            ChecklistView {}
        },
        Script::ClickCard(index) => rsx! { ClickCardScript { index } },
        Script::Upload(path) => rsx! {
            UploadScript { path }
            ChecklistView {}
        },
    }
}

#[component]
fn UploadScript(path: String) -> Element {
    let checklist = use_context::<AppContext>().checklist();
    let session = use_context::<Signal<SessionState>>();
    let mut message = use_signal(|| None::<String>);

    use_hook(move || {
        spawn(async move {
            let shown = match upload_from_path(&checklist, session, &path).await {
                Ok(()) => "upload ok".to_owned(),
                Err(error) => format!("upload failed: {error}"),
            };
            message.set(Some(shown));
        });
    });

    rsx! {
        if let Some(message) = message() {
            p { class: "script-outcome", "{message}" }
        }
    }
}

#[component]
fn StartOverScript(answer: Option<bool>) -> Element {
    let navigator = use_context::<AppContext>().navigator();
    let session = use_context::<Signal<SessionState>>();
    let pending = use_signal(|| None::<PendingConfirm>);
    let confirm = ModalConfirm::new(pending);
    let mut outcome = use_signal(|| None::<ResetOutcome>);

    use_hook(move || {
        spawn(async move {
            outcome.set(Some(start_over(session, navigator, confirm).await));
        });
    });
    use_effect(move || {
        if let (Some(accepted), Some(_)) = (answer, confirm.request()) {
            confirm.answer(accepted);
        }
    });

    let shown = format!("{:?}", outcome());
    rsx! {
        ConfirmModal { confirm }
        p { class: "script-outcome", "reset {shown}" }
    }
}

#[component]
fn ClickCardScript(index: usize) -> Element {
    let session = use_context::<Signal<SessionState>>();
    let (args, on_select) = use_principle_selection();
    let widget = use_progress_widget(args, on_select);
    let mut clicked = use_signal(|| false);

    use_effect(move || {
        let drawn = widget.dom.read().cards.len();
        if drawn > index && !*clicked.peek() {
            clicked.set(true);
            widget.click.call(index);
        }
    });

    let selected = session.read().selected_principle();
    let active: Vec<usize> = widget
        .dom
        .read()
        .cards
        .iter()
        .filter(|card| card.is_active)
        .map(|card| card.index)
        .collect();
    let active = format!("{active:?}");
    rsx! {
        p { "selected principle {selected}" }
        p { "active cards {active}" }
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
}

impl ViewHarness {
    pub fn new(dom: VirtualDom) -> Self {
        Self { dom }
    }

    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    /// Drive spawned tasks until `needle` shows up in the rendered html.
    pub async fn drive_until(&mut self, needle: &str) -> String {
        for _ in 0..40 {
            let html = self.render();
            if html.contains(needle) {
                return html;
            }
            self.drive_async().await;
        }
        self.render()
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(session: SessionState) -> ViewHarness {
    setup_scripted_harness(session, Script::Idle)
}

pub fn setup_scripted_harness(session: SessionState, script: Script) -> ViewHarness {
    let catalog = catalog::bundled().expect("bundled catalog");
    let app = Arc::new(TestApp {
        services: AppServices::from_catalog(catalog),
    });

    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app,
            session,
            script,
        },
    );

    ViewHarness::new(dom)
}
