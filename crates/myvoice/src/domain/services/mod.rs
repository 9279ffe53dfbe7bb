//! Domain Services
//!
//! - DefaultBoards: Built-in communication boards
//! - WordList: Fixed autocomplete vocabulary
//! - PhraseBook: Saved Mine phrases and usage counters

mod boards;
mod phrase_book;
mod word_list;

pub use boards::*;
pub use phrase_book::*;
pub use word_list::*;
