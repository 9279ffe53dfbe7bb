//! Repository Ports
//!
//! Abstract interfaces for state held by the running process.

mod phrase_repository;
mod settings_repository;

pub use phrase_repository::*;
pub use settings_repository::*;
