use std::sync::Arc;

use catalog::{CatalogRepository, PrincipleCatalog};

use crate::checklist::ChecklistService;
use crate::error::AppServicesError;
use crate::navigation::SectionNavigator;

/// Assembles app-facing services from a principle catalog.
#[derive(Clone)]
pub struct AppServices {
    checklist: Arc<ChecklistService>,
    navigator: SectionNavigator,
}

impl AppServices {
    /// Load the catalog from `repo` and build services over it.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if the catalog cannot be loaded.
    pub async fn load(repo: &dyn CatalogRepository) -> Result<Self, AppServicesError> {
        let catalog = repo.load().await?;
        tracing::info!(principles = catalog.len(), checks = catalog.total_checks(), "catalog loaded");
        Ok(Self::from_catalog(catalog))
    }

    #[must_use]
    pub fn from_catalog(catalog: PrincipleCatalog) -> Self {
        Self {
            checklist: Arc::new(ChecklistService::new(Arc::new(catalog))),
            navigator: SectionNavigator::new(),
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
