//! Shared error types for the services crate.

use thiserror::Error;

use catalog::CatalogError;
use checklist_core::model::{AppInfoError, ProcessId, TestResultError};

/// Errors emitted by `ChecklistService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChecklistError {
    #[error("unknown process check: {0}")]
    UnknownProcess(ProcessId),
    #[error(transparent)]
    AppInfo(#[from] AppInfoError),
    #[error(transparent)]
    TestResults(#[from] TestResultError),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}
