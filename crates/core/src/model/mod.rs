mod answer;
mod app_info;
mod ids;
mod principle;
mod progress;
mod section;
mod session;
mod test_results;

pub use answer::{Answer, AnswerError, Implementation};
pub use app_info::{AppInfo, AppInfoDraft, AppInfoError, MAX_APP_DESCRIPTION_CHARS, MAX_APP_NAME_CHARS};
pub use ids::{PrincipleKey, ProcessId, ProcessIdError, WorkspaceId};
pub use principle::{Principle, ProcessCheck, friendly_principle_name};
pub use progress::{
    CardViewState, PrincipleProgress, PrincipleSnapshot, ProgressError, ProgressStats,
    SnapshotEntry,
};
pub use section::{FINAL_SECTION, MAX_SECTION, NavControls, SECTION_COUNT, Section, render_guard};
pub use session::SessionState;
pub use test_results::{
    Connector, EvaluatedResult, EvaluationSummary, IndividualPrompt, MoonshotResults,
    PredictedResult, RunMetadata, RunResultEntry, RunResults, TestCounts, TestMetadata,
    TestResultError, TestResultSummary, TestRunStatus, TestSummary, UploadedTestResults,
};
