//! Application Layer (Use Cases)
//!
//! Orchestrates domain operations and coordinates between
//! repositories and the built-in catalog.

mod catalog_service;
mod phrase_service;
mod settings_service;

pub use catalog_service::CatalogService;
pub use phrase_service::{PhraseService, UsageRecord};
pub use settings_service::SettingsService;
