//! Infrastructure Adapters
//!
//! Implementations of domain ports for the running process.

pub mod memory;

// Re-exports
pub use memory::{InMemoryPhraseRepository, InMemorySettingsRepository};
