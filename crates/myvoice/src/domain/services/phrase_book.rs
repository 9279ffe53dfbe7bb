//! PhraseBook - Saved Mine phrases and usage counters
//!
//! Owns both mutable collections so that a save can read the usage count
//! and append in one step. Callers share it behind a single lock.

use std::collections::HashMap;

use crate::domain::{DomainError, Phrase};

/// Snapshot of phrase text to usage count
pub type UsageSnapshot = HashMap<String, u64>;

/// Mutable Mine list plus usage counters
///
/// Invariant: no two saved phrases share the same `text`.
#[derive(Debug, Clone, Default)]
pub struct PhraseBook {
    saved: Vec<Phrase>,
    usage: HashMap<String, u64>,
}

impl PhraseBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Save a phrase into Mine.
    ///
    /// The input is trimmed. Empty text and text already present in Mine are
    /// rejected without touching the list.
    pub fn save(&mut self, raw: &str) -> Result<Phrase, DomainError> {
        let text = raw.trim();
        self.check_insertable(text)?;

        let phrase = Phrase::saved_to_mine(text, self.usage_of(text));
        self.saved.push(phrase.clone());
        Ok(phrase)
    }

    /// Promote a phrase into Mine automatically.
    ///
    /// Same duplicate check as [`save`](Self::save) but the text is taken as
    /// given and the entry is flagged `auto_saved`. Reading the usage count
    /// never inserts a zero entry for an unseen phrase.
    pub fn auto_save(&mut self, text: &str) -> Result<Phrase, DomainError> {
        self.check_insertable(text)?;

        let phrase = Phrase::saved_to_mine(text, self.usage_of(text)).with_auto_saved();
        self.saved.push(phrase.clone());
        Ok(phrase)
    }

    /// Remove every saved entry whose text equals the trimmed input.
    ///
    /// Returns how many entries were dropped; zero is not an error.
    pub fn remove(&mut self, raw: &str) -> usize {
        let text = raw.trim();
        let before = self.saved.len();
        self.saved.retain(|phrase| phrase.text != text);
        before - self.saved.len()
    }

    /// User-saved phrases in save order
    pub fn saved(&self) -> &[Phrase] {
        &self.saved
    }

    pub fn contains(&self, text: &str) -> bool {
        self.saved.iter().any(|phrase| phrase.text == text)
    }

    /// Count one use of a phrase, returning the new total
    pub fn record_usage(&mut self, text: &str) -> u64 {
        let count = self.usage.entry(text.to_string()).or_insert(0);
        *count += 1;
        *count
    }

    /// Usage count for a phrase, zero when never recorded
    pub fn usage_of(&self, text: &str) -> u64 {
        self.usage.get(text).copied().unwrap_or(0)
    }

    pub fn usage(&self) -> UsageSnapshot {
        self.usage.clone()
    }

    fn check_insertable(&self, text: &str) -> Result<(), DomainError> {
        if text.is_empty() {
            return Err(DomainError::EmptyPhrase);
        }
        if self.contains(text) {
            return Err(DomainError::DuplicatePhrase(text.to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_then_duplicate_rejected() {
        let mut book = PhraseBook::new();

        assert!(book.save("Can we go to the park?").is_ok());
        assert_eq!(
            book.save("Can we go to the park?"),
            Err(DomainError::DuplicatePhrase(
                "Can we go to the park?".to_string()
            ))
        );
        assert_eq!(book.saved().len(), 1);
    }

    #[test]
    fn test_save_trims_input() {
        let mut book = PhraseBook::new();

        let saved = book.save(" Hello ").unwrap();
        assert_eq!(saved.text, "Hello");
        assert!(matches!(
            book.save("Hello"),
            Err(DomainError::DuplicatePhrase(_))
        ));
    }

    #[test]
    fn test_empty_rejected() {
        let mut book = PhraseBook::new();

        assert_eq!(book.save(""), Err(DomainError::EmptyPhrase));
        assert_eq!(book.save("   "), Err(DomainError::EmptyPhrase));
        assert!(book.saved().is_empty());
    }

    #[test]
    fn test_match_is_case_sensitive() {
        let mut book = PhraseBook::new();

        book.save("hello").unwrap();
        assert!(book.save("Hello").is_ok());
        assert_eq!(book.saved().len(), 2);
    }

    #[test]
    fn test_save_order_preserved() {
        let mut book = PhraseBook::new();
        for text in ["one", "two", "three"] {
            book.save(text).unwrap();
        }

        let texts: Vec<_> = book.saved().iter().map(|p| p.text.as_str()).collect();
        assert_eq!(texts, vec!["one", "two", "three"]);
    }

    #[test]
    fn test_save_carries_usage_count() {
        let mut book = PhraseBook::new();
        book.record_usage("Thank you");
        book.record_usage("Thank you");

        let saved = book.save("Thank you").unwrap();
        assert_eq!(saved.usage_count, Some(2));
        assert_eq!(book.save("Goodbye").unwrap().usage_count, Some(0));
    }

    #[test]
    fn test_remove_trims_and_is_idempotent() {
        let mut book = PhraseBook::new();
        book.save("Hello").unwrap();
        book.save("World").unwrap();

        assert_eq!(book.remove("  Hello "), 1);
        assert_eq!(book.remove("Hello"), 0);
        assert_eq!(book.remove("never saved"), 0);
        assert_eq!(book.saved().len(), 1);
        assert_eq!(book.saved()[0].text, "World");
    }

    #[test]
    fn test_remove_drops_every_matching_entry() {
        let mut book = PhraseBook::new();
        book.saved.push(Phrase::saved_to_mine("Hi", 0));
        book.saved.push(Phrase::saved_to_mine("Other", 0));
        book.saved.push(Phrase::saved_to_mine("Hi", 0));

        assert_eq!(book.remove(" Hi "), 2);
        assert_eq!(book.saved().len(), 1);
        assert_eq!(book.saved()[0].text, "Other");
    }

    #[test]
    fn test_auto_save_leaves_usage_untouched() {
        let mut book = PhraseBook::new();
        book.auto_save("Never used").unwrap();

        assert!(book.usage().is_empty());
    }

    #[test]
    fn test_remove_allows_resave() {
        let mut book = PhraseBook::new();
        book.save("Hello").unwrap();
        book.remove("Hello");

        assert!(book.save("Hello").is_ok());
    }

    #[test]
    fn test_auto_save_flags_entry() {
        let mut book = PhraseBook::new();
        for _ in 0..3 {
            book.record_usage("I'm thirsty");
        }

        let phrase = book.auto_save("I'm thirsty").unwrap();
        assert!(phrase.is_auto_saved());
        assert_eq!(phrase.usage_count, Some(3));
        assert_eq!(phrase.category.as_deref(), Some("mine"));
        assert!(matches!(
            book.auto_save("I'm thirsty"),
            Err(DomainError::DuplicatePhrase(_))
        ));
        assert_eq!(book.auto_save(""), Err(DomainError::EmptyPhrase));
    }

    #[test]
    fn test_auto_save_respects_manual_save() {
        let mut book = PhraseBook::new();
        book.save("Good night").unwrap();

        assert!(book.auto_save("Good night").is_err());
        assert_eq!(book.saved().len(), 1);
    }

    #[test]
    fn test_usage_monotonic() {
        let mut book = PhraseBook::new();
        for expected in 1..=5 {
            assert_eq!(book.record_usage("Yes"), expected);
        }

        assert_eq!(book.usage_of("Yes"), 5);
        assert_eq!(book.usage_of("No"), 0);
        let snapshot = book.usage();
        assert_eq!(snapshot.get("Yes"), Some(&5));
        assert!(!snapshot.contains_key("No"));
    }

    #[test]
    fn test_record_usage_does_not_save() {
        let mut book = PhraseBook::new();
        for _ in 0..10 {
            book.record_usage("Hello");
        }

        assert!(book.saved().is_empty());
    }
}
