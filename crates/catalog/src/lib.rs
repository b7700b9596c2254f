#![forbid(unsafe_code)]

mod catalog;
pub mod json;
pub mod repository;

pub use catalog::PrincipleCatalog;
pub use json::{JsonFileCatalog, SELECTED_AI_TYPE, bundled};
pub use repository::{CatalogError, CatalogRepository, InMemoryCatalog};
