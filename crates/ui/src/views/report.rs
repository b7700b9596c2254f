use dioxus::prelude::*;

use checklist_core::model::SessionState;

use crate::context::AppContext;
use crate::views::TestResultsTable;
use crate::vm::{map_progress_bar, map_report_rows, map_test_results};

#[component]
pub fn ReportView() -> Element {
    let ctx = use_context::<AppContext>();
    let checklist = ctx.checklist();
    let session = use_context::<Signal<SessionState>>();

    let (info, progress, rows, tests) = {
        let state = session.read();
        let stats = checklist.stats(&state);
        (
            state.app_info().clone(),
            map_progress_bar(&stats),
            map_report_rows(&checklist, &state),
            state.test_results().map(map_test_results),
        )
    };

    rsx! {
        section { class: "report",
            h2 { "Summary Report" }
            if !info.is_empty() {
                dl { class: "app-info",
                    dt { "Application name" }
                    dd { "{info.name()}" }
                    dt { "Application description" }
                    dd { "{info.description()}" }
                }
            }
            p { class: "overall-progress-message", "{progress.message}" }
            table { class: "report-table",
                thead {
                    tr {
                        th { "Principle" }
                        th { "Yes" }
                        th { "No" }
                        th { "N/A" }
                        th { "Unanswered" }
                    }
                }
                tbody {
                    for row in rows {
                        tr { key: "{row.name}",
                            td { "{row.name}" }
                            td { "{row.yes}" }
                            td { "{row.no}" }
                            td { "{row.not_applicable}" }
                            td { "{row.unanswered}" }
                        }
                    }
                }
            }
            h3 { "Technical Test" }
            match tests {
                Some(results) => rsx! { TestResultsTable { results } },
                None => rsx! { p { class: "muted", "No technical test uploaded." } },
            }
        }
    }
}
