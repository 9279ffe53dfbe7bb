//! WordList - Fixed autocomplete vocabulary

/// Maximum number of suggestions returned for a non-empty prefix
pub const MAX_SUGGESTIONS: usize = 20;
/// Number of words returned when the prefix is empty
pub const DEFAULT_SUGGESTIONS: usize = 50;

/// Common words offered while typing, in display priority order
pub const DEFAULT_WORDS: &[&str] = &[
    "I", "a", "about", "after", "afternoon", "all", "am", "an", "and", "another", "are",
    "around", "at", "bad", "be", "because", "before", "behind", "between", "big", "but", "buy",
    "can", "come", "could", "day", "do", "does", "don't", "down", "each", "even", "every",
    "feel", "find", "first", "for", "from", "get", "give", "go", "good", "great", "had", "has",
    "have", "he", "help", "her", "here", "him", "his", "how", "if", "in", "into", "is", "it",
    "its", "just", "know", "last", "leave", "let", "like", "little", "look", "make", "man",
    "may", "me", "most", "my", "need", "new", "no", "not", "now", "of", "off", "old", "on",
    "one", "only", "or", "other", "our", "out", "over", "own", "people", "place", "please",
    "right", "said", "same", "say", "see", "she", "should", "so", "some", "take", "than",
    "that", "the", "their", "them", "there", "these", "they", "think", "this", "those",
    "through", "time", "to", "too", "two", "up", "use", "very", "want", "water", "way", "we",
    "well", "were", "what", "when", "where", "which", "who", "will", "with", "work", "would",
    "year", "you", "your",
];

/// Prefix-based word suggestion over a fixed list
#[derive(Debug, Clone)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    /// The built-in vocabulary
    pub fn builtin() -> Self {
        Self::new(DEFAULT_WORDS.iter().copied())
    }

    /// Suggest words for a typed prefix.
    ///
    /// Matching is a case-insensitive prefix test that keeps list order and
    /// stops at [`MAX_SUGGESTIONS`]. An empty prefix is not a filter: it
    /// returns the first [`DEFAULT_SUGGESTIONS`] words of the list.
    pub fn suggest(&self, prefix: &str) -> Vec<String> {
        if prefix.is_empty() {
            return self.words.iter().take(DEFAULT_SUGGESTIONS).cloned().collect();
        }

        let needle = prefix.to_lowercase();
        self.words
            .iter()
            .filter(|word| word.to_lowercase().starts_with(&needle))
            .take(MAX_SUGGESTIONS)
            .cloned()
            .collect()
    }
}

impl Default for WordList {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_size() {
        assert_eq!(DEFAULT_WORDS.len(), 140);
    }

    #[test]
    fn test_prefix_keeps_list_order() {
        let words = WordList::builtin();
        assert_eq!(
            words.suggest("w"),
            vec![
                "want", "water", "way", "we", "well", "were", "what", "when", "where", "which",
                "who", "will", "with", "work", "would"
            ]
        );
        assert_eq!(words.suggest("wa"), vec!["want", "water", "way"]);
    }

    #[test]
    fn test_prefix_is_case_insensitive() {
        let words = WordList::builtin();
        assert_eq!(words.suggest("WA"), words.suggest("wa"));
        // "I" is stored upper-case and still matches a lower-case query
        assert_eq!(words.suggest("i")[0], "I");
    }

    #[test]
    fn test_caps_at_twenty() {
        let words = WordList::builtin();
        let t = words.suggest("t");
        assert_eq!(t.len(), MAX_SUGGESTIONS);
        assert_eq!(t[0], "take");
    }

    #[test]
    fn test_empty_prefix_returns_first_fifty() {
        let words = WordList::builtin();
        let suggestions = words.suggest("");
        assert_eq!(suggestions.len(), DEFAULT_SUGGESTIONS);
        assert_eq!(suggestions[0], "I");
        assert_eq!(suggestions[49], "here");
    }

    #[test]
    fn test_no_match() {
        assert!(WordList::builtin().suggest("zz").is_empty());
        assert!(WordList::builtin().suggest(" a").is_empty());
    }
}
