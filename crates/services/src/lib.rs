#![forbid(unsafe_code)]

pub mod app_services;
pub mod checklist;
pub mod confirm;
pub mod error;
pub mod navigation;

pub use app_services::AppServices;
pub use checklist::{ChecklistService, OutcomeGroup};
pub use confirm::{Confirm, ConfirmRequest, FixedConfirm};
pub use error::{AppServicesError, ChecklistError};
pub use navigation::{NextGate, ResetOutcome, SectionNavigator, Transition};
