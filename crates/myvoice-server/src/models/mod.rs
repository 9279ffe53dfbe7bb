//! My Voice API Data Models
//!
//! - Phrase: Board entries, Mine and usage requests/responses
//! - Settings: Session display and voice preferences
//! - Speech: Text-to-speech and custom phrase stubs

mod phrase;
mod settings;
mod speech;

pub use phrase::*;
pub use settings::*;
pub use speech::*;
