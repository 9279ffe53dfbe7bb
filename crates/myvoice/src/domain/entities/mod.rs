//! Domain Entities
//!
//! - Phrase: A single board entry (text plus optional display hints)
//! - UserSettings: Per-session display and voice preferences
//! - SessionId: Opaque token naming a settings record

mod phrase;
mod session;
mod settings;

pub use phrase::*;
pub use session::*;
pub use settings::*;
