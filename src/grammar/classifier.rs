//! Sentence type classification

use crate::dictionary::Role;
use crate::sentence::{Sentence, SentenceType};

use super::lexicon;
use super::segmenter::terminal_punctuation;
use super::word::{PointOfView, Word};

/// Rule-based sentence type classifier.
///
/// Rules are tried in order and the first match wins:
///
/// 1. no word has a role: declarative
/// 2. ends with `?`: interrogative, so a conditional question stays a question
/// 3. a conditional conjunction ("if", "unless", "when", "once", "whenever")
///    before the first verb: conditional
/// 4. the first word with a role is a verb with no explicit subject: imperative
/// 5. anything else is declarative
///
/// Rule 1 looks at roles, not at dictionary hits. A sentence whose opener
/// was inferred as a verb ("Produce food.") has a role to go by and is
/// classified from it, while [`Sentence::degenerate`] still reports that
/// nothing was recognized.
pub struct SentenceClassifier;

impl SentenceClassifier {
    pub fn classify(sentence: &Sentence) -> SentenceType {
        if !sentence.words.iter().any(Word::is_resolved) {
            SentenceType::Declarative
        } else if terminal_punctuation(&sentence.raw) == Some('?') {
            SentenceType::Interrogative
        } else if Self::has_leading_condition(sentence) {
            SentenceType::Conditional
        } else if Self::is_imperative(sentence) {
            SentenceType::Imperative
        } else {
            SentenceType::Declarative
        }
    }

    fn has_leading_condition(sentence: &Sentence) -> bool {
        let limit = sentence.first_verb().unwrap_or(sentence.words.len());
        sentence.words[..limit]
            .iter()
            .any(|w| w.is(Role::Conjunction) && lexicon::is_conditional_marker(&w.lowercase()))
    }

    /// Unrecognized leading words ("Please help me.") are passed over, a
    /// leading adverb is not: "Quickly run!" opens with an adverb.
    fn is_imperative(sentence: &Sentence) -> bool {
        match sentence.words.iter().find(|w| w.is_resolved()) {
            Some(word) => {
                word.is(Role::Verb)
                    && matches!(
                        word.point_of_view,
                        PointOfView::Unknown | PointOfView::Second
                    )
            }
            None => false,
        }
    }
}
