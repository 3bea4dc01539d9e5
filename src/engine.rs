//! Analysis engine

use std::path::Path;

use rayon::prelude::*;

use crate::config::Config;
use crate::dictionary::{DictionaryStore, SharedDictionary};
use crate::error::Result;
use crate::grammar::{build_relationships, Segmenter, SentenceClassifier, Tagger, Tokenizer};
use crate::sentence::Sentence;

/// Owns the active dictionary and runs the full pipeline:
/// segmentation, tokenization, tagging, relationships, classification.
pub struct Engine {
    dictionary: SharedDictionary,
    segmenter: Segmenter,
    tokenizer: Tokenizer,
}

impl Engine {
    /// Opens the dictionary snapshot named by the configuration. A missing
    /// snapshot means the built-in vocabulary. A corrupt one is an error
    /// unless `fallback_to_builtin` is set.
    pub fn new(config: &Config) -> Result<Self> {
        let store = match DictionaryStore::open(&config.dictionary_path) {
            Ok(store) => store,
            Err(e) if e.is_corrupt_snapshot() && config.fallback_to_builtin => {
                tracing::warn!(
                    path = %config.dictionary_path.display(),
                    error = %e,
                    "unreadable dictionary snapshot, falling back to built-in vocabulary"
                );
                DictionaryStore::builtin()
            }
            Err(e) => return Err(e),
        };
        Ok(Self::with_dictionary(store))
    }

    pub fn with_dictionary(store: DictionaryStore) -> Self {
        Self {
            dictionary: SharedDictionary::new(store),
            segmenter: Segmenter::new(),
            tokenizer: Tokenizer::new(),
        }
    }

    pub fn dictionary(&self) -> &SharedDictionary {
        &self.dictionary
    }

    /// Segments `text` and analyzes every sentence, in order
    pub fn analyze(&self, text: &str) -> Vec<Sentence> {
        let store = self.dictionary.current();
        self.segmenter
            .segment(text)
            .map(|raw| analyze_sentence(&store, &self.tokenizer, raw))
            .collect()
    }

    /// Same result as [`Engine::analyze`], with sentences spread over the
    /// rayon thread pool
    pub fn analyze_parallel(&self, text: &str) -> Vec<Sentence> {
        let store = self.dictionary.current();
        let raws: Vec<&str> = self.segmenter.segment(text).collect();
        raws.par_iter()
            .map(|raw| analyze_sentence(&store, &self.tokenizer, raw))
            .collect()
    }

    /// Analyzes a single sentence without segmenting it
    pub fn analyze_sentence(&self, raw: &str) -> Sentence {
        analyze_sentence(&self.dictionary.current(), &self.tokenizer, raw)
    }

    pub fn reload_dictionary<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        self.dictionary.reload_from(path)
    }

    pub fn save_dictionary<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        self.dictionary.save_to(path)
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::with_dictionary(DictionaryStore::builtin())
    }
}

/// Segments and analyzes `text` against `dictionary`
pub fn analyze(text: &str, dictionary: &DictionaryStore) -> Vec<Sentence> {
    let tokenizer = Tokenizer::new();
    Segmenter::new()
        .segment(text)
        .map(|raw| analyze_sentence(dictionary, &tokenizer, raw))
        .collect()
}

fn analyze_sentence(dictionary: &DictionaryStore, tokenizer: &Tokenizer, raw: &str) -> Sentence {
    let tokens = tokenizer.words(raw, dictionary);
    let words = Tagger::new(dictionary).tag_sentence(raw, &tokens);
    let edges = build_relationships(&words);

    let mut sentence = Sentence::new(raw, words, edges);
    sentence.sentence_type = SentenceClassifier::classify(&sentence);

    tracing::debug!(
        sentence = raw,
        kind = sentence.sentence_type.as_str(),
        words = sentence.words.len(),
        edges = sentence.edges.len(),
        degenerate = sentence.degenerate,
        "sentence classified"
    );
    sentence
}
