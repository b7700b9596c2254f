use dioxus::prelude::*;

use checklist_core::model::{Implementation, ProcessId, SessionState};
use widget::RenderArgs;

use crate::context::AppContext;
use crate::views::PrincipleCards;
use crate::vm::{CheckVm, OutcomeVm, map_outcome_groups, map_progress_bar};

/// Widget payload for the session and the callback that applies a card selection.
pub(crate) fn use_principle_selection() -> (Memo<RenderArgs>, Callback<usize>) {
    let checklist = use_context::<AppContext>().checklist();
    let mut session = use_context::<Signal<SessionState>>();

    let snapshot_source = checklist.clone();
    let render_args = use_memo(move || {
        let state = session.read();
        let stats = snapshot_source.stats(&state);
        RenderArgs::from_snapshot(&snapshot_source.snapshot(&state, &stats))
    });

    let on_select = use_callback(move |index: usize| {
        checklist.select_principle(&mut session.write(), index);
    });

    (render_args, on_select)
}

#[component]
pub fn ProcessChecksView() -> Element {
    let ctx = use_context::<AppContext>();
    let checklist = ctx.checklist();
    let mut session = use_context::<Signal<SessionState>>();
    let (render_args, on_select) = use_principle_selection();

    let status_source = checklist.clone();
    let on_status = use_callback(move |(id, status): (ProcessId, Implementation)| {
        if let Err(error) = status_source.record_answer(&mut session.write(), &id, Some(status)) {
            tracing::warn!(%error, "answer rejected");
        }
    });

    let elaboration_source = checklist.clone();
    let on_elaboration = use_callback(move |(id, text): (ProcessId, String)| {
        if let Err(error) = elaboration_source.record_elaboration(&mut session.write(), &id, &text) {
            tracing::warn!(%error, "elaboration rejected");
        }
    });

    let (progress, principle, outcomes) = {
        let state = session.read();
        let stats = checklist.stats(&state);
        let principle = checklist
            .current_principle(&state)
            .map(|principle| (principle.friendly_name(), principle.description.clone()));
        let outcomes = map_outcome_groups(checklist.principle_checks(state.selected_principle()), &state);
        (map_progress_bar(&stats), principle, outcomes)
    };

    rsx! {
        section { class: "process-checks",
            h2 { "Process Checks" }
            div { class: "overall-progress",
                div { class: "overall-progress-track",
                    div { class: "overall-progress-bar", style: "width: {progress.width};" }
                }
                p { class: "overall-progress-message", "{progress.message}" }
            }
            div { class: "process-layout",
                PrincipleCards { args: render_args, on_select }
                div { class: "principle-detail",
                    if let Some((name, description)) = principle {
                        h3 { "{name}" }
                        if !description.is_empty() {
                            p { class: "principle-description", "{description}" }
                        }
                    }
                    for outcome in outcomes {
                        OutcomeBlock { key: "{outcome.outcome_id}", outcome: outcome.clone(), on_status, on_elaboration }
                    }
                }
            }
        }
    }
}

#[component]
fn OutcomeBlock(
    outcome: OutcomeVm,
    on_status: Callback<(ProcessId, Implementation)>,
    on_elaboration: Callback<(ProcessId, String)>,
) -> Element {
    rsx! {
        div { class: "outcome",
            h4 { class: "outcome-title",
                span { class: "outcome-id", "{outcome.outcome_id}" }
                " {outcome.outcome}"
            }
            for check in outcome.checks {
                CheckRow { key: "{check.process_id}", check: check.clone(), on_status, on_elaboration }
            }
        }
    }
}

#[component]
fn CheckRow(
    check: CheckVm,
    on_status: Callback<(ProcessId, Implementation)>,
    on_elaboration: Callback<(ProcessId, String)>,
) -> Element {
    let elaboration_id = check.process_id.clone();

    rsx! {
        div { class: "check",
            div { class: "check-head",
                span { class: "check-id", "{check.process_id}" }
                span { class: "check-process", "{check.process}" }
            }
            if !check.nature_of_evidence.is_empty() {
                p { class: "check-evidence-kind", "{check.nature_of_evidence}" }
            }
            if !check.evidence.is_empty() {
                p { class: "check-evidence", "{check.evidence}" }
            }
            div { class: "check-status",
                for option in Implementation::ALL {
                    label { key: "{option}",
                        input {
                            r#type: "radio",
                            name: "status-{check.process_id}",
                            checked: check.status == Some(option),
                            onchange: {
                                let id = check.process_id.clone();
                                move |_| on_status.call((id.clone(), option))
                            },
                        }
                        "{option}"
                    }
                }
            }
            textarea {
                class: "check-elaboration",
                placeholder: "Elaborate on your implementation (optional)",
                value: "{check.elaboration}",
                oninput: move |evt| on_elaboration.call((elaboration_id.clone(), evt.value())),
            }
        }
    }
}
