//! Yes/no confirmation capability injected into interactive operations.

use async_trait::async_trait;
use std::cell::Cell;

/// Text for a confirmation prompt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConfirmRequest {
    pub title: String,
    pub body: String,
    pub accept_label: String,
    pub cancel_label: String,
}

impl ConfirmRequest {
    #[must_use]
    pub fn start_over() -> Self {
        Self {
            title: "Confirm Reset".into(),
            body: "Are you sure you want to start over? All your progress will be lost.".into(),
            accept_label: "Yes, start over".into(),
            cancel_label: "No, cancel".into(),
        }
    }
}

/// Asks the user a yes/no question.
///
/// Dismissing the prompt without choosing counts as "no".
#[async_trait(?Send)]
pub trait Confirm {
    async fn confirm(&self, request: &ConfirmRequest) -> bool;
}

/// Always answers the same way. Used by tests and headless hosts.
#[derive(Debug, Default)]
pub struct FixedConfirm {
    answer: bool,
    asked: Cell<u32>,
}

impl FixedConfirm {
    #[must_use]
    pub fn yes() -> Self {
        Self {
            answer: true,
            asked: Cell::new(0),
        }
    }

    #[must_use]
    pub fn no() -> Self {
        Self {
            answer: false,
            asked: Cell::new(0),
        }
    }

    /// How many prompts were shown.
    #[must_use]
    pub fn asked(&self) -> u32 {
        self.asked.get()
    }
}

#[async_trait(?Send)]
impl Confirm for FixedConfirm {
    async fn confirm(&self, _request: &ConfirmRequest) -> bool {
        self.asked.set(self.asked.get() + 1);
        self.answer
    }
}
