use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use thiserror::Error;

use crate::PrincipleCatalog;

/// Errors surfaced by catalog adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("catalog not found: {0}")]
    NotFound(String),

    #[error("catalog io error: {0}")]
    Io(String),

    #[error("catalog serialization error: {0}")]
    Serialization(String),

    #[error("catalog contains no principles with process checks")]
    Empty,

    #[error("catalog lock poisoned: {0}")]
    Poisoned(String),
}

/// Source of the principle reference data.
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// Load the full principle catalog.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the source cannot be read or yields no principles.
    async fn load(&self) -> Result<PrincipleCatalog, CatalogError>;
}

/// In-memory catalog for tests and the bundled default.
#[derive(Clone, Default)]
pub struct InMemoryCatalog {
    catalog: Arc<Mutex<PrincipleCatalog>>,
}

impl InMemoryCatalog {
    #[must_use]
    pub fn new(catalog: PrincipleCatalog) -> Self {
        Self {
            catalog: Arc::new(Mutex::new(catalog)),
        }
    }

    /// Swap the served catalog.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Poisoned` if the lock was poisoned.
    pub fn replace(&self, catalog: PrincipleCatalog) -> Result<(), CatalogError> {
        let mut guard = self
            .catalog
            .lock()
            .map_err(|e| CatalogError::Poisoned(e.to_string()))?;
        *guard = catalog;
        Ok(())
    }
}

#[async_trait]
impl CatalogRepository for InMemoryCatalog {
    async fn load(&self) -> Result<PrincipleCatalog, CatalogError> {
        let guard = self
            .catalog
            .lock()
            .map_err(|e| CatalogError::Poisoned(e.to_string()))?;
        if guard.is_empty() {
            return Err(CatalogError::Empty);
        }
        Ok(guard.clone())
    }
}
