//! Project Moonshot v1 technical test results.
//!
//! The uploaded file is checked against the v1 result structure on parse.
//! Only the derived `TestResultSummary` is kept in the session.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use thiserror::Error;

/// Category whose prompts are counted per test.
const REFUSE_CATEGORY: &str = "refuse";

#[derive(Debug, Error)]
#[error("not a Project Moonshot v1 result file: {0}")]
pub struct TestResultError(#[from] serde_json::Error);

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct MoonshotResults {
    pub run_metadata: RunMetadata,
    pub run_results: Vec<RunResultEntry>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct RunMetadata {
    pub run_id: String,
    pub test_id: String,
    pub start_time: String,
    pub end_time: String,
    pub duration: f64,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct RunResultEntry {
    pub metadata: TestMetadata,
    pub results: RunResults,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct TestMetadata {
    pub test_name: String,
    pub dataset: String,
    pub metric: BTreeMap<String, String>,
    #[serde(rename = "type")]
    pub kind: String,
    pub connector: Connector,
    pub start_time: String,
    pub end_time: String,
    pub duration: f64,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Connector {
    pub connector_adapter: String,
    pub model: String,
    pub model_endpoint: Option<String>,
    pub params: Map<String, Value>,
    pub connector_pre_prompt: String,
    pub connector_post_prompt: String,
    pub system_prompt: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct RunResults {
    pub individual_results: BTreeMap<String, Vec<IndividualPrompt>>,
    pub evaluation_summary: Option<EvaluationSummary>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EvaluationSummary {
    pub refusal: BTreeMap<String, f64>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct IndividualPrompt {
    pub prompt_id: i64,
    pub prompt: String,
    pub predicted_result: PredictedResult,
    pub target: String,
    pub evaluated_result: EvaluatedResult,
    pub prompt_additional_info: Map<String, Value>,
    pub state: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct PredictedResult {
    pub response: String,
    pub context: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct EvaluatedResult {
    pub prompt: String,
    pub predicted_response: String,
    pub target: String,
    pub evaluated_prompt: String,
    pub evaluated_response: String,
    pub attack_success: bool,
}

impl MoonshotResults {
    /// # Errors
    ///
    /// Returns `TestResultError` when `raw` is not JSON or does not match the
    /// v1 result structure.
    pub fn parse(raw: &str) -> Result<Self, TestResultError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Status, pass/fail counts and one summary per test run.
    ///
    /// A run with an evaluation summary counts as a success; one without
    /// counts as a failure. Nothing is ever reported as skipped.
    #[must_use]
    pub fn report_info(&self) -> TestResultSummary {
        let mut counts = TestCounts::default();
        let tests = self
            .run_results
            .iter()
            .map(|entry| {
                if entry.results.evaluation_summary.is_some() {
                    counts.success += 1;
                } else {
                    counts.fail += 1;
                }
                TestSummary {
                    test_name: entry.metadata.test_name.clone(),
                    model_id: entry.metadata.connector.model.clone(),
                    num_of_prompts: entry
                        .results
                        .individual_results
                        .get(REFUSE_CATEGORY)
                        .map_or(0, Vec::len),
                    summary: entry.results.evaluation_summary.clone(),
                }
            })
            .collect::<Vec<_>>();

        TestResultSummary {
            status: if tests.is_empty() {
                TestRunStatus::Incomplete
            } else {
                TestRunStatus::Completed
            },
            counts,
            tests,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TestRunStatus {
    Completed,
    Incomplete,
}

impl TestRunStatus {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Completed => "Completed",
            Self::Incomplete => "Incomplete",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestCounts {
    pub success: u32,
    pub fail: u32,
    pub skip: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TestSummary {
    pub test_name: String,
    pub model_id: String,
    pub num_of_prompts: usize,
    pub summary: Option<EvaluationSummary>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TestResultSummary {
    pub status: TestRunStatus,
    pub counts: TestCounts,
    pub tests: Vec<TestSummary>,
}

/// Results file accepted for the current session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UploadedTestResults {
    pub file_name: String,
    pub summary: TestResultSummary,
}
