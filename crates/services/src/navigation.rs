//! Section navigation over an explicit `SessionState`.

use checklist_core::model::{NavControls, ProgressStats, Section, SessionState, render_guard};

use crate::confirm::{Confirm, ConfirmRequest};

pub const ANSWER_ALL_HELP: &str = "Please answer all questions before proceeding.";

/// Section change produced by a navigation operation. The host re-renders `to`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    pub from: Section,
    pub to: Section,
}

impl Transition {
    #[must_use]
    pub fn changed(self) -> bool {
        self.from != self.to
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResetOutcome {
    /// The user confirmed; the session was cleared back to the welcome section.
    Cleared,
    /// The user declined or dismissed the prompt; nothing changed.
    Kept,
}

/// Whether a visible Next button can be pressed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NextGate {
    Enabled,
    Disabled { help: &'static str },
}

impl NextGate {
    #[must_use]
    pub fn is_enabled(self) -> bool {
        matches!(self, Self::Enabled)
    }
}

/// The back / next / start-over state machine.
///
/// Controls are only offered when `render_guard` allows them; the section is
/// still clamped so a bypassed guard cannot leave the valid range.
#[derive(Clone, Copy, Debug, Default)]
pub struct SectionNavigator;

impl SectionNavigator {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    pub fn back(&self, state: &mut SessionState) -> Transition {
        let from = state.section();
        state.set_section(from.prev());
        let transition = Transition {
            from,
            to: state.section(),
        };
        tracing::debug!(from = %transition.from, to = %transition.to, "navigate back");
        transition
    }

    pub fn next(&self, state: &mut SessionState) -> Transition {
        let from = state.section();
        state.set_section(from.next());
        let transition = Transition {
            from,
            to: state.section(),
        };
        tracing::debug!(from = %transition.from, to = %transition.to, "navigate next");
        transition
    }

    /// Ask for confirmation and clear the whole session on "yes".
    ///
    /// Either every field is cleared or nothing is touched.
    pub async fn reset(&self, state: &mut SessionState, confirm: &dyn Confirm) -> ResetOutcome {
        let request = ConfirmRequest::start_over();
        if confirm.confirm(&request).await {
            state.clear();
            tracing::info!("session cleared");
            ResetOutcome::Cleared
        } else {
            tracing::debug!("start over declined");
            ResetOutcome::Kept
        }
    }

    #[must_use]
    pub fn render_guard(&self, state: &SessionState) -> NavControls {
        render_guard(state.section())
    }

    /// Next stays disabled on the process checks until every check is answered.
    #[must_use]
    pub fn next_gate(&self, state: &SessionState, stats: &ProgressStats) -> NextGate {
        if state.section() == Section::PROCESS_CHECKS && !stats.all_answered() {
            return NextGate::Disabled {
                help: ANSWER_ALL_HELP,
            };
        }
        NextGate::Enabled
    }
}
