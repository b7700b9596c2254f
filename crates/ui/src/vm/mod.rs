mod checklist_vm;
mod markdown_vm;

pub use checklist_vm::{
    CheckVm, NavBarVm, OutcomeVm, ProgressBarVm, ReportRowVm, TestResultsVm, TestRowVm,
    map_nav_bar, map_outcome_groups, map_progress_bar, map_report_rows, map_test_results,
};
pub use markdown_vm::{markdown_to_html, plain_text, sanitize_html};
