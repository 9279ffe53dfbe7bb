//! DefaultBoards - Built-in communication boards
//!
//! Loaded once at startup and never mutated.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::Phrase;

/// Board holding the built-in personal phrases
pub const MINE_BOARD: &str = "mine";
/// Board holding everyday requests and greetings
pub const DAILY_LIFE_BOARD: &str = "daily_life";

/// Immutable mapping of board name to its ordered phrases
///
/// Serializes as a JSON object with board names in sorted order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DefaultBoards {
    boards: BTreeMap<String, Vec<Phrase>>,
}

impl DefaultBoards {
    /// The boards shipped with the application
    pub fn builtin() -> Self {
        let mut boards = BTreeMap::new();
        boards.insert(MINE_BOARD.to_string(), builtin_mine());
        boards.insert(DAILY_LIFE_BOARD.to_string(), builtin_daily_life());
        Self { boards }
    }

    /// Phrases of a single board, in display order
    pub fn board(&self, name: &str) -> Option<&[Phrase]> {
        self.boards.get(name).map(Vec::as_slice)
    }

    /// Default entries of the Mine board
    pub fn mine(&self) -> &[Phrase] {
        self.board(MINE_BOARD).unwrap_or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Phrase])> {
        self.boards
            .iter()
            .map(|(name, phrases)| (name.as_str(), phrases.as_slice()))
    }
}

impl Default for DefaultBoards {
    fn default() -> Self {
        Self::builtin()
    }
}

fn builtin_mine() -> Vec<Phrase> {
    vec![
        Phrase::categorized(
            "Welcome to My Voice. A personalized assistant for spellers and non-speakers.",
            "intro",
        ),
        Phrase::categorized("My name is Kevan, and this is My Voice!", "intro"),
        Phrase::categorized("After school, can we play Battleship?", "activities"),
        Phrase::categorized("Mom and dad, can we watch Elio this weekend?", "family"),
        Phrase::categorized("I'm hungry!", "needs"),
        Phrase::categorized("Peter, you're silly", "social"),
    ]
}

fn builtin_daily_life() -> Vec<Phrase> {
    vec![
        Phrase::decorated("Help me please", "🆘", "#ff6b6b"),
        Phrase::decorated("What's for dinner?", "🍽️", "#ffd93d"),
        Phrase::decorated("I need a glass of water", "💧", "#74c0fc"),
        Phrase::decorated("What's for breakfast?", "🥞", "#ffd93d"),
        Phrase::decorated("What's for lunch?", "🥪", "#ffd93d"),
        Phrase::decorated("I'm hungry", "🍎", "#ff8cc8"),
        Phrase::decorated("I'm thirsty", "🥤", "#74c0fc"),
        Phrase::decorated("What time is it?", "🕐", "#ffd93d"),
        Phrase::decorated("What day is it?", "📅", "#51cf66"),
        Phrase::decorated("I need to brush my teeth", "🦷", "#74c0fc"),
        Phrase::decorated("I'd like to shower", "🚿", "#74c0fc"),
        Phrase::decorated("I need to use the bathroom", "🚽", "#ffd93d"),
        Phrase::decorated("I want to brush my hair", "🪄", "#ff8cc8"),
        Phrase::decorated("Open the window please", "🪟", "#51cf66"),
        Phrase::decorated("Close the window please", "🪟", "#ff6b6b"),
        Phrase::decorated("Turn on the TV please", "📺", "#74c0fc"),
        Phrase::decorated("Turn off the TV please", "📺", "#495057"),
        Phrase::decorated("Turn on the light please", "💡", "#ffd93d"),
        Phrase::decorated("Turn off the light please", "💡", "#495057"),
        Phrase::decorated("I'm tired", "😴", "#74c0fc"),
        Phrase::decorated("I need to sit down", "🪑", "#51cf66"),
        Phrase::decorated("Open the door please", "🚪", "#51cf66"),
        Phrase::decorated("Close the door please", "🚪", "#ff6b6b"),
        Phrase::decorated("I need to take my medicine", "💊", "#ff8cc8"),
        Phrase::decorated("I'm hot", "🔥", "#ff6b6b"),
        Phrase::decorated("I'm cold", "🧊", "#74c0fc"),
        Phrase::decorated("Happy birthday", "🎂", "#ffd93d"),
        Phrase::decorated("I have something to say", "💬", "#74c0fc"),
        Phrase::decorated("What's your name?", "❓", "#ff8cc8"),
        Phrase::decorated("What's new?", "🆕", "#51cf66"),
        Phrase::decorated("I missed you", "💙", "#74c0fc"),
        Phrase::decorated("How was school?", "🏫", "#ffd93d"),
        Phrase::decorated("Yes", "✅", "#51cf66"),
        Phrase::decorated("Hello", "👋", "#ffd93d"),
        Phrase::decorated("Goodbye", "👋", "#ff8cc8"),
        Phrase::decorated("What have you been doing?", "😊", "#ffd93d"),
        Phrase::decorated("Good night", "🌙", "#74c0fc"),
        Phrase::decorated("Thank you", "🙏", "#ffd93d"),
        Phrase::decorated("I'm good", "👍", "#51cf66"),
        Phrase::decorated("Good morning", "☀️", "#ffd93d"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_board_sizes() {
        let boards = DefaultBoards::builtin();
        assert_eq!(boards.mine().len(), 6);
        assert_eq!(boards.board(DAILY_LIFE_BOARD).map(<[Phrase]>::len), Some(40));
        assert!(boards.board("school").is_none());
    }

    #[test]
    fn test_mine_defaults_keep_order() {
        let boards = DefaultBoards::builtin();
        let first = &boards.mine()[0];
        assert!(first.text.starts_with("Welcome to My Voice"));
        assert_eq!(first.category.as_deref(), Some("intro"));
        assert_eq!(boards.mine()[5].text, "Peter, you're silly");
    }

    #[test]
    fn test_serializes_with_sorted_board_names() {
        let json = serde_json::to_string(&DefaultBoards::builtin()).unwrap();
        let daily = json.find("\"daily_life\"").unwrap();
        let mine = json.find("\"mine\"").unwrap();
        assert!(daily < mine);
        assert_eq!(
            DefaultBoards::builtin()
                .iter()
                .map(|(name, _)| name)
                .collect::<Vec<_>>(),
            vec![DAILY_LIFE_BOARD, MINE_BOARD]
        );
    }
}
