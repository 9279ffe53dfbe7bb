//! Theme - Display theme selection

use serde::{Deserialize, Serialize};

/// Display theme
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Play,
    Gamer,
    Zen,
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Theme::Play => write!(f, "play"),
            Theme::Gamer => write!(f, "gamer"),
            Theme::Zen => write!(f, "zen"),
        }
    }
}
