use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::model::{Answer, AppInfo, ProcessId, Section, UploadedTestResults, WorkspaceId};

/// Mutable record for a single checklist session.
///
/// Owned by the host and passed by reference into navigation and checklist
/// operations. `clear` is the only way back to a fresh session.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    section: Section,
    workspace_id: Option<WorkspaceId>,
    app_info: AppInfo,
    selected_principle: usize,
    answers: BTreeMap<ProcessId, Answer>,
    edit_mode: bool,
    test_results: Option<UploadedTestResults>,
}

impl SessionState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn section(&self) -> Section {
        self.section
    }

    pub fn set_section(&mut self, section: Section) {
        self.section = Section::clamped(section.value());
    }

    #[must_use]
    pub fn workspace_id(&self) -> Option<WorkspaceId> {
        self.workspace_id
    }

    /// Returns the workspace id, creating one on first use.
    pub fn ensure_workspace(&mut self) -> WorkspaceId {
        *self.workspace_id.get_or_insert_with(WorkspaceId::generate)
    }

    #[must_use]
    pub fn app_info(&self) -> &AppInfo {
        &self.app_info
    }

    pub fn set_app_info(&mut self, info: AppInfo) {
        self.app_info = info;
    }

    #[must_use]
    pub fn selected_principle(&self) -> usize {
        self.selected_principle
    }

    pub fn select_principle(&mut self, index: usize) {
        self.selected_principle = index;
    }

    #[must_use]
    pub fn answers(&self) -> &BTreeMap<ProcessId, Answer> {
        &self.answers
    }

    #[must_use]
    pub fn answer(&self, id: &ProcessId) -> Option<&Answer> {
        self.answers.get(id)
    }

    pub fn answer_mut(&mut self, id: ProcessId) -> &mut Answer {
        self.answers.entry(id).or_default()
    }

    #[must_use]
    pub fn edit_mode(&self) -> bool {
        self.edit_mode
    }

    pub fn set_edit_mode(&mut self, edit_mode: bool) {
        self.edit_mode = edit_mode;
    }

    #[must_use]
    pub fn test_results(&self) -> Option<&UploadedTestResults> {
        self.test_results.as_ref()
    }

    pub fn set_test_results(&mut self, results: Option<UploadedTestResults>) {
        self.test_results = results;
    }

    /// Drop every field and return to the welcome section.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn is_pristine(&self) -> bool {
        *self == Self::default()
    }
}
