//! My Voice Domain Library
//!
//! Core domain types and interfaces for the My Voice communication board.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain/`): Pure business entities and logic
//!   - `entities/`: Core domain models (Phrase, UserSettings, SessionId)
//!   - `value_objects/`: Immutable value types (Theme)
//!   - `services/`: Stateful domain logic (PhraseBook, WordList, DefaultBoards)
//!   - `errors/`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `repositories/`: Storage interfaces for Mine phrases, usage and settings
//!
//! # Usage
//!
//! ```rust,ignore
//! use myvoice::domain::{PhraseBook, WordList};
//! use myvoice::ports::PhraseRepository;
//! ```

pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    DefaultBoards, DomainError, Phrase, PhraseBook, SessionId, Theme, UsageSnapshot,
    UserSettings, WordList, MINE_BOARD, MINE_CATEGORY,
};
pub use ports::{PhraseRepository, SettingsRepository};
