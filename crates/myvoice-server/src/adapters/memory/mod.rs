//! In-memory adapters
//!
//! State lives for the lifetime of the process and is lost on restart.

mod phrase_repository;
mod settings_repository;

pub use phrase_repository::InMemoryPhraseRepository;
pub use settings_repository::InMemorySettingsRepository;
