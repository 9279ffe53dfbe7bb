//! My Voice API Routes
//!
//! - /api/boards, /api/words - Built-in boards and word suggestions
//! - /api/save-to-mine, /api/remove-from-mine, /api/mine-phrases - Mine list
//! - /api/phrase-usage - Usage counters
//! - /api/settings - Session settings
//! - /api/speak, /api/custom-phrase - Stubs that echo their input

pub mod boards;
pub mod mine;
pub mod settings;
pub mod speech;
pub mod swagger;
pub mod usage;
