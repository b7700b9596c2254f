use std::sync::Arc;

use catalog::PrincipleCatalog;
use checklist_core::model::{
    AppInfoDraft, Implementation, MoonshotResults, Principle, PrincipleProgress, PrincipleSnapshot,
    ProcessCheck, ProcessId, ProgressStats, SessionState, SnapshotEntry, UploadedTestResults,
};

use crate::error::ChecklistError;

/// Process checks of one principle that share an outcome.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutcomeGroup {
    pub outcome_id: String,
    pub outcome: String,
    pub checks: Vec<ProcessCheck>,
}

/// Records answers and derives progress over a principle catalog.
#[derive(Clone)]
pub struct ChecklistService {
    catalog: Arc<PrincipleCatalog>,
}

impl ChecklistService {
    #[must_use]
    pub fn new(catalog: Arc<PrincipleCatalog>) -> Self {
        Self { catalog }
    }

    #[must_use]
    pub fn catalog(&self) -> &PrincipleCatalog {
        &self.catalog
    }

    /// The principle selected in the cards widget, if the index is valid.
    #[must_use]
    pub fn current_principle(&self, state: &SessionState) -> Option<&Principle> {
        self.catalog.at(state.selected_principle())
    }

    /// Select a principle by card index. Out-of-range indexes are ignored.
    ///
    /// Returns `true` when the selection changed.
    pub fn select_principle(&self, state: &mut SessionState, index: usize) -> bool {
        if index >= self.catalog.len() {
            tracing::warn!(index, len = self.catalog.len(), "ignoring out-of-range principle selection");
            return false;
        }
        if state.selected_principle() == index {
            return false;
        }
        state.select_principle(index);
        true
    }

    /// Set or clear the implementation status of a check.
    ///
    /// Returns `true` when the stored status changed.
    ///
    /// # Errors
    ///
    /// Returns `ChecklistError::UnknownProcess` if the id is not in the catalog.
    pub fn record_answer(
        &self,
        state: &mut SessionState,
        id: &ProcessId,
        implementation: Option<Implementation>,
    ) -> Result<bool, ChecklistError> {
        self.ensure_known(id)?;
        let answer = state.answer_mut(id.clone());
        let changed = answer.implementation != implementation;
        answer.implementation = implementation;
        if changed {
            tracing::debug!(process = %id, status = ?implementation, "answer recorded");
        }
        Ok(changed)
    }

    /// # Errors
    ///
    /// Returns `ChecklistError::UnknownProcess` if the id is not in the catalog.
    pub fn record_elaboration(
        &self,
        state: &mut SessionState,
        id: &ProcessId,
        elaboration: &str,
    ) -> Result<(), ChecklistError> {
        self.ensure_known(id)?;
        elaboration.clone_into(&mut state.answer_mut(id.clone()).elaboration);
        Ok(())
    }

    /// Validate and store the application details, leaving edit mode.
    ///
    /// # Errors
    ///
    /// Returns `ChecklistError::AppInfo` if validation fails; the session is unchanged.
    pub fn update_app_info(
        &self,
        state: &mut SessionState,
        draft: AppInfoDraft,
    ) -> Result<(), ChecklistError> {
        let info = draft.validate()?;
        state.ensure_workspace();
        state.set_app_info(info);
        state.set_edit_mode(false);
        Ok(())
    }

    /// Parse a Project Moonshot v1 results file and keep its summary in the session.
    ///
    /// A new upload replaces the previous one.
    ///
    /// # Errors
    ///
    /// Returns `ChecklistError::TestResults` if the file does not match the v1
    /// result structure; the session is unchanged.
    pub fn upload_test_results(
        &self,
        state: &mut SessionState,
        file_name: &str,
        contents: &str,
    ) -> Result<(), ChecklistError> {
        let summary = MoonshotResults::parse(contents)?.report_info();
        tracing::info!(
            file = file_name,
            status = summary.status.label(),
            tests = summary.tests.len(),
            "technical test results uploaded"
        );
        state.set_test_results(Some(UploadedTestResults {
            file_name: file_name.to_owned(),
            summary,
        }));
        Ok(())
    }

    /// Checks of the principle at `index`, grouped by outcome in version order.
    #[must_use]
    pub fn principle_checks(&self, index: usize) -> Vec<OutcomeGroup> {
        let Some(principle) = self.catalog.at(index) else {
            return Vec::new();
        };

        let mut groups: Vec<OutcomeGroup> = Vec::new();
        for check in &principle.checks {
            if check.outcome_id.is_empty() {
                continue;
            }
            match groups.iter_mut().find(|group| group.outcome_id == check.outcome_id) {
                Some(group) => group.checks.push(check.clone()),
                None => groups.push(OutcomeGroup {
                    outcome_id: check.outcome_id.clone(),
                    outcome: check.outcome.clone(),
                    checks: vec![check.clone()],
                }),
            }
        }
        groups.sort_by_key(|group| version_key(&group.outcome_id));
        groups
    }

    /// Overall and per-principle answer counts in one pass.
    #[must_use]
    pub fn stats(&self, state: &SessionState) -> ProgressStats {
        let mut stats = ProgressStats::default();
        for principle in self.catalog.principles() {
            let total = principle.total_checks();
            let answered = principle
                .checks
                .iter()
                .filter(|check| {
                    state
                        .answer(&check.process_id)
                        .is_some_and(|answer| answer.is_answered())
                })
                .count();
            let answered = u32::try_from(answered).unwrap_or(u32::MAX);

            stats.total_questions = stats.total_questions.saturating_add(total);
            stats.total_answered = stats.total_answered.saturating_add(answered);
            stats.principles.push((
                principle.key.clone(),
                PrincipleProgress {
                    total_checks: total,
                    answered_checks: answered,
                },
            ));
        }
        stats
    }

    /// The snapshot handed to the progress widget on every render.
    #[must_use]
    pub fn snapshot(&self, state: &SessionState, stats: &ProgressStats) -> PrincipleSnapshot {
        let entries = self
            .catalog
            .principles()
            .iter()
            .map(|principle| SnapshotEntry {
                key: principle.key.clone(),
                name: principle.friendly_name(),
                progress: stats.get(&principle.key).unwrap_or_default(),
            })
            .collect();
        PrincipleSnapshot::new(entries, state.selected_principle())
    }

    fn ensure_known(&self, id: &ProcessId) -> Result<(), ChecklistError> {
        if self.catalog.find_check(id).is_none() {
            return Err(ChecklistError::UnknownProcess(id.clone()));
        }
        Ok(())
    }
}

fn version_key(raw: &str) -> Vec<u64> {
    raw.split('.')
        .map(|part| part.trim().parse().unwrap_or(0))
        .collect()
}
