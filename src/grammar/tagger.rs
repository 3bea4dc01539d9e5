//! Word tagging and disambiguation

use crate::dictionary::{DictionaryStore, Role, RoleSet};

use super::lexicon;
use super::segmenter::terminal_punctuation;
use super::tokenizer::Token;
use super::word::{PointOfView, Tense, Word};

/// Assigns a role, tense, person and self-reference flag to each token.
///
/// Tagging is a pure function of the token, its position and the words
/// already tagged to its left; the same inputs always yield the same word.
pub struct Tagger<'d> {
    dictionary: &'d DictionaryStore,
}

impl<'d> Tagger<'d> {
    pub fn new(dictionary: &'d DictionaryStore) -> Self {
        Self { dictionary }
    }

    /// Tags a single token. `prior` holds the words to its left in the
    /// same sentence.
    pub fn tag(&self, token: &str, position: usize, prior: &[Word]) -> Word {
        let lower = token.to_lowercase();
        let candidates = self.candidates(&lower);

        let mut word = Word::new(token, position);
        word.candidates = candidates;
        word.unknown = candidates.is_empty();
        word.role = disambiguate(&lower, candidates, position, prior);
        word.self_reference = lexicon::is_self_reference(&lower);
        word.tense = self.tense(&lower, word.role, prior);
        word.point_of_view = point_of_view(&lower, word.role, prior);
        word
    }

    /// Tags every token of a sentence left to right, then applies the
    /// bare-imperative opener rule.
    pub fn tag_sentence(&self, sentence: &str, tokens: &[Token]) -> Vec<Word> {
        let mut words: Vec<Word> = Vec::with_capacity(tokens.len());
        for (position, token) in tokens.iter().enumerate() {
            let word = self
                .tag(&token.text, position, &words)
                .with_span(token.start, token.end);
            words.push(word);
        }
        infer_bare_imperative(sentence, &mut words);
        words
    }

    /// Dictionary roles plus the roles implied by closed word classes
    fn candidates(&self, lower: &str) -> RoleSet {
        let mut roles = self.dictionary.lookup(lower);
        if lexicon::is_pronoun(lower) {
            roles.insert(Role::Noun);
        }
        if lexicon::is_auxiliary(lower) {
            roles.insert(Role::Verb);
        }
        roles
    }

    fn tense(&self, lower: &str, role: Role, prior: &[Word]) -> Tense {
        if role != Role::Verb {
            return Tense::Unknown;
        }

        if lexicon::is_future_marker(lower) {
            Tense::Future
        } else if self.dictionary.is_past_tense(lower) || lexicon::is_past_auxiliary(lower) {
            Tense::Past
        } else if follows_future_marker(prior) {
            Tense::Future
        } else if is_regular_past(lower) {
            Tense::Past
        } else {
            Tense::Present
        }
    }
}

/// Picks one role out of the candidates. Rules, first match wins:
///
/// 1. no candidate: `Unknown`; a single candidate: that role
/// 2. conditional markers ("when", "if") that can be conjunctions are conjunctions
/// 3. an auxiliary opening the sentence is a verb ("Do you...", "Can you...")
/// 4. after a determiner or adjective: noun, else adjective
/// 5. priority order Verb > Noun > Adjective > Adverb > Preposition > Conjunction
fn disambiguate(lower: &str, candidates: RoleSet, position: usize, prior: &[Word]) -> Role {
    if candidates.len() < 2 {
        return candidates.first().unwrap_or(Role::Unknown);
    }

    if lexicon::is_conditional_marker(lower) && candidates.contains(Role::Conjunction) {
        return Role::Conjunction;
    }

    if position == 0 && lexicon::is_auxiliary(lower) && candidates.contains(Role::Verb) {
        return Role::Verb;
    }

    if let Some(previous) = prior.last() {
        if previous.is(Role::Adjective) || lexicon::is_determiner(&previous.lowercase()) {
            if candidates.contains(Role::Noun) {
                return Role::Noun;
            }
            if candidates.contains(Role::Adjective) {
                return Role::Adjective;
            }
        }
    }

    candidates.first().unwrap_or(Role::Unknown)
}

fn point_of_view(lower: &str, role: Role, prior: &[Word]) -> PointOfView {
    if let Some(person) = lexicon::pronoun_person(lower) {
        return person;
    }

    match role {
        Role::Noun => PointOfView::Third,
        Role::Verb => lexicon::verb_person(lower).unwrap_or_else(|| clause_subject_person(prior)),
        _ => PointOfView::Unknown,
    }
}

/// Person of the closest noun to the left, within the current clause
fn clause_subject_person(prior: &[Word]) -> PointOfView {
    prior
        .iter()
        .rev()
        .take_while(|w| !w.is(Role::Conjunction))
        .find(|w| w.is(Role::Noun))
        .map(|w| w.point_of_view)
        .unwrap_or_default()
}

/// "will go", "will not go", "I'll go"
fn follows_future_marker(prior: &[Word]) -> bool {
    prior
        .iter()
        .rev()
        .find(|w| !w.is(Role::Adverb))
        .map_or(false, |w| lexicon::is_future_marker(&w.lowercase()))
}

/// Regular "-ed" past forms. "-eed" endings ("need", "feed") are stems.
fn is_regular_past(lower: &str) -> bool {
    lower.chars().count() > 3 && lower.ends_with("ed") && !lower.ends_with("eed")
}

/// A sentence with no verb at all whose first word is unrecognised is most
/// likely a bare imperative built on a verb the dictionary lacks
/// ("Produce food."). The opener is re-tagged as a present-tense verb; its
/// `unknown` flag stays set.
///
/// The rule cannot tell "Produce food." from "Zorp blix." when neither word
/// is in the dictionary: both come out imperative. Such sentences keep the
/// `degenerate` flag, which is computed from `unknown` and not from the
/// inferred role.
fn infer_bare_imperative(sentence: &str, words: &mut [Word]) {
    if words.len() < 2
        || words.iter().any(|w| w.is(Role::Verb))
        || terminal_punctuation(sentence) == Some('?')
    {
        return;
    }

    let opener = &mut words[0];
    let lower = opener.lowercase();
    if opener.is_resolved()
        || lexicon::is_closed_class(&lower)
        || !opener.text.chars().any(char::is_alphabetic)
    {
        return;
    }

    opener.role = Role::Verb;
    opener.tense = Tense::Present;
    opener.point_of_view = PointOfView::Unknown;
}
