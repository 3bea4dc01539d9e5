//! Analyzed sentence

use serde::Serialize;

use crate::dictionary::Role;
use crate::grammar::{RelationshipEdge, Word};

/// Sentence type
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SentenceType {
    /// Not classified yet
    #[default]
    Unknown,
    Declarative,
    Imperative,
    Interrogative,
    Conditional,
}

impl SentenceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SentenceType::Unknown => "unknown",
            SentenceType::Declarative => "declarative",
            SentenceType::Imperative => "imperative",
            SentenceType::Interrogative => "interrogative",
            SentenceType::Conditional => "conditional",
        }
    }
}

/// One segmented sentence with its tagged words, relationships and type
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sentence {
    pub raw: String,
    pub words: Vec<Word>,
    pub edges: Vec<RelationshipEdge>,
    pub sentence_type: SentenceType,
    /// No word was found in the dictionary or the closed-class tables.
    /// Such sentences are still classified, possibly from an inferred
    /// opener ("Zorp blix." reads as imperative), so callers may want to
    /// drop or report them.
    pub degenerate: bool,
}

impl Sentence {
    pub fn new(raw: &str, words: Vec<Word>, edges: Vec<RelationshipEdge>) -> Self {
        let degenerate = words.iter().all(|w| w.unknown);
        Self {
            raw: raw.to_string(),
            words,
            edges,
            sentence_type: SentenceType::Unknown,
            degenerate,
        }
    }

    /// Index of the first verb, if any
    pub fn first_verb(&self) -> Option<usize> {
        self.words.iter().position(|w| w.is(Role::Verb))
    }

    /// Words that refer to the speaker
    pub fn self_references(&self) -> impl Iterator<Item = &Word> {
        self.words.iter().filter(|w| w.self_reference)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::DictionaryStore;
    use crate::grammar::{Tagger, Tokenizer};

    fn sentence(raw: &str) -> Sentence {
        let dictionary = DictionaryStore::builtin();
        let tokens = Tokenizer::new().words(raw, &dictionary);
        let words = Tagger::new(&dictionary).tag_sentence(raw, &tokens);
        Sentence::new(raw, words, Vec::new())
    }

    #[test]
    fn test_new_sentence_is_unclassified() {
        let s = sentence("I went home.");
        assert_eq!(s.sentence_type, SentenceType::Unknown);
        assert!(!s.degenerate);
        assert_eq!(s.first_verb(), Some(1));
    }

    #[test]
    fn test_degenerate_without_resolved_words() {
        let s = sentence("Zorp blix?");
        assert!(s.degenerate);
        assert_eq!(s.first_verb(), None);
    }

    #[test]
    fn test_inferred_opener_stays_degenerate() {
        let s = sentence("Zorp blix.");
        assert_eq!(s.words[0].role, Role::Verb);
        assert!(s.degenerate);

        let s = sentence("Zorp it.");
        assert!(!s.degenerate);
    }

    #[test]
    fn test_self_references() {
        let s = sentence("I told myself that you were right.");
        let texts: Vec<&str> = s.self_references().map(|w| w.text.as_str()).collect();
        assert_eq!(texts, vec!["I", "myself"]);
    }
}
