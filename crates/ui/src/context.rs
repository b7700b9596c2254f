use std::sync::Arc;

use services::{ChecklistService, SectionNavigator};

pub trait UiApp: Send + Sync {
    fn checklist(&self) -> Arc<ChecklistService>;
    fn navigator(&self) -> SectionNavigator;
}

#[derive(Clone)]
pub struct AppContext {
    checklist: Arc<ChecklistService>,
    navigator: SectionNavigator,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            checklist: app.checklist(),
            navigator: app.navigator(),
        }
    }

    #[must_use]
    pub fn checklist(&self) -> Arc<ChecklistService> {
        Arc::clone(&self.checklist)
    }

    #[must_use]
    pub fn navigator(&self) -> SectionNavigator {
        self.navigator
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
