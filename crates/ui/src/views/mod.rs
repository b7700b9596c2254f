mod checklist;
mod confirm;
mod get_started;
mod navigation;
mod principle_cards;
mod process_checks;
mod report;
mod welcome;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use checklist::ChecklistView;
pub use confirm::{ConfirmModal, ModalConfirm, PendingConfirm};
pub use get_started::GetStartedView;
pub use navigation::NavigationBar;
pub use principle_cards::PrincipleCards;
pub use process_checks::ProcessChecksView;
pub use report::ReportView;
pub use technical_tests::{TechnicalTestsView, TestResultsTable};
pub use welcome::WelcomeView;
