//! Role-indexed word store

use std::collections::BTreeSet;
use std::io::{Read, Write};
use std::path::Path;

use super::builtin;
use super::role::{Role, RoleSet};
use super::snapshot::{self, DictionarySnapshot};
use crate::error::Result;

/// Known words grouped by grammatical role.
///
/// The six role sets are not disjoint: "mean" is both an adjective and a
/// verb, and the tagger decides between them from context. Entries are
/// stored lowercased, so lookups are case-insensitive. A store is filled in
/// bulk only (built-in vocabulary, snapshot, or the `with_*` builders when
/// constructing one); it is never updated word by word afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DictionaryStore {
    nouns: BTreeSet<String>,
    verbs: BTreeSet<String>,
    adjectives: BTreeSet<String>,
    adverbs: BTreeSet<String>,
    conjunctions: BTreeSet<String>,
    prepositions: BTreeSet<String>,
    /// Verb forms known to be past tense (irregular forms mostly)
    past_tense: BTreeSet<String>,
    /// Longest entry, counted in words
    max_phrase_words: usize,
}

impl DictionaryStore {
    /// Empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Store populated with the built-in reference vocabulary
    pub fn builtin() -> Self {
        builtin::vocabulary()
    }

    /// Builder: adds `words` to the set of `role`. `Role::Unknown` is ignored.
    pub fn with_words<I, S>(mut self, role: Role, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            let word = normalize(word.as_ref());
            if word.is_empty() {
                continue;
            }
            let phrase_words = word.split(' ').count();
            if let Some(set) = self.set_mut(role) {
                set.insert(word);
                self.max_phrase_words = self.max_phrase_words.max(phrase_words);
            }
        }
        self
    }

    /// Builder: marks verb forms as past tense
    pub fn with_past_tense<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.past_tense.extend(
            words
                .into_iter()
                .map(|w| normalize(w.as_ref()))
                .filter(|w| !w.is_empty()),
        );
        self
    }

    /// Every role whose set contains `word` (case-insensitive)
    pub fn lookup(&self, word: &str) -> RoleSet {
        let key = normalize(word);
        if key.is_empty() {
            return RoleSet::empty();
        }

        Role::PRIORITY
            .into_iter()
            .filter(|role| self.set(*role).map_or(false, |set| set.contains(&key)))
            .collect()
    }

    /// Whether `word` is listed as a past-tense verb form
    pub fn is_past_tense(&self, word: &str) -> bool {
        self.past_tense.contains(&normalize(word))
    }

    /// Whether a multi-word phrase ("even if") is a known entry
    pub fn contains_phrase(&self, phrase: &str) -> bool {
        !self.lookup(phrase).is_empty()
    }

    /// Number of words in the longest entry (1 when only single words are known)
    pub fn phrase_len(&self) -> usize {
        self.max_phrase_words.max(1)
    }

    /// Words of one role, in lexicographic order
    pub fn words(&self, role: Role) -> impl Iterator<Item = &str> + '_ {
        self.set(role)
            .into_iter()
            .flat_map(|set| set.iter().map(String::as_str))
    }

    pub fn past_tense_forms(&self) -> impl Iterator<Item = &str> + '_ {
        self.past_tense.iter().map(String::as_str)
    }

    /// Number of words of one role
    pub fn len(&self, role: Role) -> usize {
        self.set(role).map_or(0, BTreeSet::len)
    }

    /// Whether every role set is empty
    pub fn is_empty(&self) -> bool {
        Role::PRIORITY.iter().all(|role| self.len(*role) == 0)
    }

    /// Builds the store for `path`: the built-in vocabulary when nothing exists
    /// there, the decoded snapshot otherwise. A snapshot that cannot be decoded
    /// is reported, never replaced by defaults.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::info!(
                path = %path.display(),
                "no dictionary snapshot found, using built-in vocabulary"
            );
            return Ok(Self::builtin());
        }
        Self::load_from(path)
    }

    /// Decodes a snapshot file
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let store = snapshot::load(path.as_ref())?;
        tracing::info!(
            path = %path.as_ref().display(),
            nouns = store.len(Role::Noun),
            verbs = store.len(Role::Verb),
            "dictionary snapshot loaded"
        );
        Ok(store)
    }

    /// Decodes a snapshot from any reader
    pub fn read_from<R: Read>(rdr: R) -> Result<Self> {
        snapshot::read(rdr)
    }

    /// Writes a snapshot to `path`, replacing any existing file. The write is
    /// all-or-nothing: on failure the previous file (if any) is left intact.
    pub fn save_to<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        snapshot::save(self, path.as_ref())?;
        tracing::info!(path = %path.as_ref().display(), "dictionary snapshot saved");
        Ok(())
    }

    /// Writes a snapshot to any writer
    pub fn write_to<W: Write>(&self, wtr: W) -> Result<()> {
        snapshot::write(self, wtr)
    }

    pub(crate) fn to_snapshot(&self) -> DictionarySnapshot {
        DictionarySnapshot {
            version: snapshot::SNAPSHOT_VERSION,
            nouns: self.nouns.clone(),
            verbs: self.verbs.clone(),
            adjectives: self.adjectives.clone(),
            adverbs: self.adverbs.clone(),
            conjunctions: self.conjunctions.clone(),
            prepositions: self.prepositions.clone(),
            past_tense: self.past_tense.clone(),
        }
    }

    pub(crate) fn from_snapshot(snapshot: DictionarySnapshot) -> Self {
        Self::new()
            .with_words(Role::Noun, snapshot.nouns)
            .with_words(Role::Verb, snapshot.verbs)
            .with_words(Role::Adjective, snapshot.adjectives)
            .with_words(Role::Adverb, snapshot.adverbs)
            .with_words(Role::Conjunction, snapshot.conjunctions)
            .with_words(Role::Preposition, snapshot.prepositions)
            .with_past_tense(snapshot.past_tense)
    }

    fn set(&self, role: Role) -> Option<&BTreeSet<String>> {
        match role {
            Role::Noun => Some(&self.nouns),
            Role::Verb => Some(&self.verbs),
            Role::Adjective => Some(&self.adjectives),
            Role::Adverb => Some(&self.adverbs),
            Role::Conjunction => Some(&self.conjunctions),
            Role::Preposition => Some(&self.prepositions),
            Role::Unknown => None,
        }
    }

    fn set_mut(&mut self, role: Role) -> Option<&mut BTreeSet<String>> {
        match role {
            Role::Noun => Some(&mut self.nouns),
            Role::Verb => Some(&mut self.verbs),
            Role::Adjective => Some(&mut self.adjectives),
            Role::Adverb => Some(&mut self.adverbs),
            Role::Conjunction => Some(&mut self.conjunctions),
            Role::Preposition => Some(&mut self.prepositions),
            Role::Unknown => None,
        }
    }
}

/// Lowercases, trims and collapses inner whitespace
fn normalize(word: &str) -> String {
    word.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}
