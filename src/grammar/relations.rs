//! Relationship building
//!
//! One left-to-right pass over a tagged sentence that links verbs to their
//! subjects and objects, attaches modifiers and records prepositional links.
//! Conjunctions split the sentence into clauses; no link crosses a clause
//! boundary.

use serde::Serialize;

use crate::dictionary::Role;

use super::lexicon::{self, PrepositionCategory};
use super::word::Word;

/// How far (in words) a modifier looks for the word it modifies
pub const MODIFIER_WINDOW: usize = 3;

/// Kind of link between two words
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RelationKind {
    /// verb → subject noun
    Subject,
    /// verb → object noun
    Object,
    /// adjective → noun
    Modifier,
    /// adverb → verb, adjective or adverb
    Qualifier,
    /// noun → verb or subject, through a place preposition
    Locative,
    /// noun → verb or subject, through a time preposition
    Temporal,
    /// noun → verb or subject, through any other preposition
    Other,
}

impl RelationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RelationKind::Subject => "subject",
            RelationKind::Object => "object",
            RelationKind::Modifier => "modifier",
            RelationKind::Qualifier => "qualifier",
            RelationKind::Locative => "locative",
            RelationKind::Temporal => "temporal",
            RelationKind::Other => "other",
        }
    }
}

impl From<PrepositionCategory> for RelationKind {
    fn from(category: PrepositionCategory) -> Self {
        match category {
            PrepositionCategory::Locative => RelationKind::Locative,
            PrepositionCategory::Temporal => RelationKind::Temporal,
            PrepositionCategory::Other => RelationKind::Other,
        }
    }
}

/// Directed link between two words of a sentence, by word index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RelationshipEdge {
    pub from: usize,
    pub to: usize,
    pub kind: RelationKind,
    /// Preposition that introduced a locative/temporal/other link
    pub via: Option<usize>,
}

impl RelationshipEdge {
    pub fn new(from: usize, to: usize, kind: RelationKind) -> Self {
        Self {
            from,
            to,
            kind,
            via: None,
        }
    }
}

/// Builds the flat relationship list of a tagged sentence
pub fn build_relationships(words: &[Word]) -> Vec<RelationshipEdge> {
    let mut edges = Vec::new();
    let mut subject: Option<usize> = None;
    let mut predicate: Option<usize> = None;
    let mut pending_preposition: Option<usize> = None;

    for (i, word) in words.iter().enumerate() {
        match word.role {
            Role::Unknown => {}
            Role::Conjunction => {
                subject = None;
                predicate = None;
                pending_preposition = None;
            }
            Role::Noun => {
                if let Some(preposition) = pending_preposition.take() {
                    if let Some(anchor) = predicate.or(subject) {
                        let category = lexicon::preposition_category(&words[preposition].lowercase());
                        edges.push(RelationshipEdge {
                            from: i,
                            to: anchor,
                            kind: category.into(),
                            via: Some(preposition),
                        });
                    }
                } else if let Some(verb) = predicate {
                    if subject.map_or(true, |s| s < verb) {
                        edges.push(RelationshipEdge::new(verb, i, RelationKind::Object));
                    }
                }
                subject = Some(i);
            }
            Role::Verb => {
                if let Some(noun) = subject {
                    edges.push(RelationshipEdge::new(i, noun, RelationKind::Subject));
                }
                predicate = Some(i);
                pending_preposition = None;
            }
            Role::Adjective => {
                if let Some(noun) = nearest(words, i, |w| w.is(Role::Noun)) {
                    edges.push(RelationshipEdge::new(i, noun, RelationKind::Modifier));
                }
            }
            Role::Adverb => {
                let target = nearest(words, i, |w| {
                    matches!(w.role, Role::Verb | Role::Adjective | Role::Adverb)
                });
                if let Some(target) = target {
                    edges.push(RelationshipEdge::new(i, target, RelationKind::Qualifier));
                }
            }
            Role::Preposition => {
                pending_preposition = Some(i);
            }
        }
    }

    edges
}

/// Closest word matching `accept` within [`MODIFIER_WINDOW`] words of `index`,
/// looking left first. The search stops at conjunctions.
fn nearest<F>(words: &[Word], index: usize, accept: F) -> Option<usize>
where
    F: Fn(&Word) -> bool,
{
    let preceding = (index.saturating_sub(MODIFIER_WINDOW)..index)
        .rev()
        .take_while(|&k| !words[k].is(Role::Conjunction))
        .find(|&k| accept(&words[k]));

    preceding.or_else(|| {
        (index + 1..words.len().min(index + MODIFIER_WINDOW + 1))
            .take_while(|&k| !words[k].is(Role::Conjunction))
            .find(|&k| accept(&words[k]))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::DictionaryStore;
    use crate::grammar::{Tagger, Tokenizer};

    fn relations(dictionary: &DictionaryStore, sentence: &str) -> (Vec<Word>, Vec<RelationshipEdge>) {
        let tokens = Tokenizer::new().words(sentence, dictionary);
        let words = Tagger::new(dictionary).tag_sentence(sentence, &tokens);
        let edges = build_relationships(&words);
        (words, edges)
    }

    fn food_dictionary() -> DictionaryStore {
        DictionaryStore::builtin()
            .with_words(Role::Noun, ["food", "dog", "table", "dinner", "man"])
            .with_words(Role::Verb, ["eat", "eats", "bites"])
            .with_words(Role::Adjective, ["hungry"])
    }

    #[test]
    fn test_subject_and_object() {
        let (_, edges) = relations(&food_dictionary(), "The dog eats food.");
        assert_eq!(
            edges,
            vec![
                RelationshipEdge::new(2, 1, RelationKind::Subject),
                RelationshipEdge::new(2, 3, RelationKind::Object),
            ]
        );
    }

    #[test]
    fn test_adjective_prefers_preceding_noun() {
        let (_, edges) = relations(&food_dictionary(), "I am hungry");
        // "am" links to "I"; "hungry" has "I" two words back
        assert!(edges.contains(&RelationshipEdge::new(1, 0, RelationKind::Subject)));
        assert!(edges.contains(&RelationshipEdge::new(2, 0, RelationKind::Modifier)));
    }

    #[test]
    fn test_adjective_looks_ahead_when_nothing_precedes() {
        let (_, edges) = relations(&food_dictionary(), "Hungry dog");
        assert_eq!(edges, vec![RelationshipEdge::new(0, 1, RelationKind::Modifier)]);
    }

    #[test]
    fn test_modifier_window() {
        let (_, edges) = relations(&food_dictionary(), "good xx yy zz food");
        assert!(edges.is_empty());

        let (_, edges) = relations(&food_dictionary(), "good xx yy food");
        assert_eq!(edges, vec![RelationshipEdge::new(0, 3, RelationKind::Modifier)]);
    }

    #[test]
    fn test_adverb_qualifies_verb() {
        let (_, edges) = relations(&food_dictionary(), "The dog eats quickly");
        assert!(edges.contains(&RelationshipEdge::new(3, 2, RelationKind::Qualifier)));
    }

    #[test]
    fn test_conjunction_resets_clause() {
        let (words, edges) = relations(&food_dictionary(), "The dog eats and bites");
        assert_eq!(words[3].role, Role::Conjunction);
        // "bites" has no subject in its own clause
        assert!(!edges.iter().any(|e| e.from == 4));
    }

    #[test]
    fn test_modifiers_do_not_cross_conjunctions() {
        let (_, edges) = relations(&food_dictionary(), "food and good");
        assert!(edges.is_empty());
    }

    #[test]
    fn test_preposition_links_noun_to_predicate() {
        let (_, edges) = relations(&food_dictionary(), "The dog eats food on the table");
        assert!(edges.contains(&RelationshipEdge {
            from: 6,
            to: 2,
            kind: RelationKind::Locative,
            via: Some(4),
        }));
    }

    #[test]
    fn test_preposition_without_predicate_links_to_subject() {
        let (_, edges) = relations(&food_dictionary(), "The food during dinner");
        assert_eq!(
            edges,
            vec![RelationshipEdge {
                from: 3,
                to: 1,
                kind: RelationKind::Temporal,
                via: Some(2),
            }]
        );
    }

    #[test]
    fn test_other_preposition_kind() {
        let (_, edges) = relations(&food_dictionary(), "I eat with the man");
        assert!(edges.contains(&RelationshipEdge {
            from: 4,
            to: 1,
            kind: RelationKind::Other,
            via: Some(2),
        }));
        assert!(!edges.iter().any(|e| e.kind == RelationKind::Object));
    }

    #[test]
    fn test_unknown_words_are_skipped() {
        let (words, edges) = relations(&food_dictionary(), "the blorf zzz");
        assert!(words.iter().all(|w| !w.is_resolved()));
        assert!(edges.is_empty());
    }
}
