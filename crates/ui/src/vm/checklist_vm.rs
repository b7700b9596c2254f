use checklist_core::model::{
    Implementation, NavControls, ProcessId, ProgressStats, SessionState, TestSummary,
    UploadedTestResults,
};
use services::{ChecklistService, NextGate, OutcomeGroup};

#[derive(Clone, Debug, PartialEq)]
pub struct ProgressBarVm {
    pub width: String,
    pub message: String,
}

#[must_use]
pub fn map_progress_bar(stats: &ProgressStats) -> ProgressBarVm {
    ProgressBarVm {
        width: format!("{:.1}%", stats.ratio() * 100.0),
        message: stats.message(),
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavBarVm {
    pub show_back: bool,
    pub show_start_over: bool,
    pub show_next: bool,
    pub next_enabled: bool,
    pub next_help: Option<&'static str>,
}

impl NavBarVm {
    #[must_use]
    pub fn is_hidden(&self) -> bool {
        !(self.show_back || self.show_start_over || self.show_next)
    }
}

#[must_use]
pub fn map_nav_bar(controls: NavControls, gate: NextGate) -> NavBarVm {
    let next_help = match gate {
        NextGate::Enabled => None,
        NextGate::Disabled { help } => Some(help),
    };
    NavBarVm {
        show_back: controls.show_back,
        show_start_over: controls.show_start_over,
        show_next: controls.show_next,
        next_enabled: gate.is_enabled(),
        next_help,
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CheckVm {
    pub process_id: ProcessId,
    pub process: String,
    pub nature_of_evidence: String,
    pub evidence: String,
    pub status: Option<Implementation>,
    pub elaboration: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutcomeVm {
    pub outcome_id: String,
    pub outcome: String,
    pub checks: Vec<CheckVm>,
}

#[must_use]
pub fn map_outcome_groups(groups: Vec<OutcomeGroup>, state: &SessionState) -> Vec<OutcomeVm> {
    groups
        .into_iter()
        .map(|group| OutcomeVm {
            outcome_id: group.outcome_id,
            outcome: group.outcome,
            checks: group
                .checks
                .into_iter()
                .map(|check| {
                    let answer = state.answer(&check.process_id);
                    CheckVm {
                        status: answer.and_then(|a| a.implementation),
                        elaboration: answer.map(|a| a.elaboration.clone()).unwrap_or_default(),
                        process_id: check.process_id,
                        process: check.process,
                        nature_of_evidence: check.nature_of_evidence,
                        evidence: check.evidence,
                    }
                })
                .collect(),
        })
        .collect()
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReportRowVm {
    pub name: String,
    pub yes: u32,
    pub no: u32,
    pub not_applicable: u32,
    pub unanswered: u32,
}

/// Per-principle answer breakdown for the summary report.
#[must_use]
pub fn map_report_rows(checklist: &ChecklistService, state: &SessionState) -> Vec<ReportRowVm> {
    checklist
        .catalog()
        .principles()
        .iter()
        .map(|principle| {
            let mut row = ReportRowVm {
                name: principle.friendly_name(),
                ..ReportRowVm::default()
            };
            for check in &principle.checks {
                let status = state
                    .answer(&check.process_id)
                    .and_then(|answer| answer.implementation);
                match status {
                    Some(Implementation::Yes) => row.yes += 1,
                    Some(Implementation::No) => row.no += 1,
                    Some(Implementation::NotApplicable) => row.not_applicable += 1,
                    None => row.unanswered += 1,
                }
            }
            row
        })
        .collect()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TestRowVm {
    pub name: String,
    pub model: String,
    pub prompts: usize,
    pub summary: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TestResultsVm {
    pub file_name: String,
    pub status: &'static str,
    pub success: u32,
    pub fail: u32,
    pub skip: u32,
    pub rows: Vec<TestRowVm>,
}

#[must_use]
pub fn map_test_results(uploaded: &UploadedTestResults) -> TestResultsVm {
    let summary = &uploaded.summary;
    TestResultsVm {
        file_name: uploaded.file_name.clone(),
        status: summary.status.label(),
        success: summary.counts.success,
        fail: summary.counts.fail,
        skip: summary.counts.skip,
        rows: summary.tests.iter().map(map_test_row).collect(),
    }
}

fn map_test_row(test: &TestSummary) -> TestRowVm {
    let summary = match &test.summary {
        Some(evaluation) if !evaluation.refusal.is_empty() => evaluation
            .refusal
            .iter()
            .map(|(metric, value)| format!("{}: {value}", metric.replace('_', " ")))
            .collect::<Vec<_>>()
            .join(", "),
        Some(_) => "Evaluated".to_owned(),
        None => "No evaluation summary".to_owned(),
    };
    TestRowVm {
        name: test.test_name.clone(),
        model: test.model_id.clone(),
        prompts: test.num_of_prompts,
        summary,
    }
}
