//! Closed word classes
//!
//! Small fixed tables that complement the dictionary: pronouns, determiners,
//! auxiliary verbs and the categories used to label prepositional links.
//! All lookups expect lowercase input.

use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;
use serde::Serialize;

use super::word::PointOfView;

/// Tokens that denote the speaking agent
pub const SELF_REFERENCE: &[&str] = &["i", "me", "my", "mine", "myself"];

/// Conjunctions that open a conditional clause
pub const CONDITIONAL_MARKERS: &[&str] = &["if", "unless", "when", "once", "whenever"];

static PRONOUNS: Lazy<HashMap<&'static str, PointOfView>> = Lazy::new(|| {
    let mut table = HashMap::new();
    for word in [
        "i", "me", "my", "mine", "myself", "we", "us", "our", "ours", "ourselves",
    ] {
        table.insert(word, PointOfView::First);
    }
    for word in ["you", "your", "yours", "yourself", "yourselves"] {
        table.insert(word, PointOfView::Second);
    }
    for word in [
        "he", "him", "his", "himself", "she", "her", "hers", "herself", "it", "its", "itself",
        "they", "them", "their", "theirs", "themselves",
    ] {
        table.insert(word, PointOfView::Third);
    }
    table
});

static DETERMINERS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "a", "an", "the", "this", "that", "these", "those", "some", "any", "every", "each",
        "another", "either", "neither", "much", "many", "few", "several", "all", "both", "my",
        "your", "his", "her", "its", "our", "their",
    ]
    .into_iter()
    .collect()
});

static AUXILIARIES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "be", "am", "is", "are", "was", "were", "been", "being", "do", "does", "did", "have",
        "has", "had", "will", "shall", "can", "could", "would", "should", "may", "might", "must",
    ]
    .into_iter()
    .collect()
});

const PAST_AUXILIARIES: &[&str] = &["was", "were", "did", "had"];
const FUTURE_AUXILIARIES: &[&str] = &["will", "shall"];
const FIRST_PERSON_VERBS: &[&str] = &["am"];
const THIRD_PERSON_VERBS: &[&str] = &["is", "was", "has", "does"];

/// Kind of relation a preposition introduces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PrepositionCategory {
    Locative,
    Temporal,
    Other,
}

static PREPOSITION_CATEGORIES: Lazy<HashMap<&'static str, PrepositionCategory>> =
    Lazy::new(|| {
        let mut table = HashMap::new();
        for word in [
            "above", "across", "against", "along", "among", "around", "at", "behind", "below",
            "beneath", "beside", "between", "beyond", "by", "down", "in", "inside", "into",
            "near", "off", "on", "onto", "out", "outside", "over", "through", "to", "toward",
            "towards", "under", "underneath", "up", "upon", "within",
        ] {
            table.insert(word, PrepositionCategory::Locative);
        }
        for word in ["after", "before", "during", "past", "since", "until"] {
            table.insert(word, PrepositionCategory::Temporal);
        }
        table
    });

pub fn pronoun_person(word: &str) -> Option<PointOfView> {
    PRONOUNS.get(word).copied()
}

pub fn is_pronoun(word: &str) -> bool {
    PRONOUNS.contains_key(word)
}

pub fn is_determiner(word: &str) -> bool {
    DETERMINERS.contains(word)
}

pub fn is_auxiliary(word: &str) -> bool {
    AUXILIARIES.contains(word)
}

pub fn is_self_reference(word: &str) -> bool {
    SELF_REFERENCE.contains(&word)
}

pub fn is_past_auxiliary(word: &str) -> bool {
    PAST_AUXILIARIES.contains(&word)
}

/// "will", "shall" and contractions such as "i'll" / "you’ll"
pub fn is_future_marker(word: &str) -> bool {
    FUTURE_AUXILIARIES.contains(&word) || word.ends_with("'ll") || word.ends_with("’ll")
}

/// Person fixed by the verb form itself ("am", "is"), if any
pub fn verb_person(word: &str) -> Option<PointOfView> {
    if FIRST_PERSON_VERBS.contains(&word) {
        Some(PointOfView::First)
    } else if THIRD_PERSON_VERBS.contains(&word) {
        Some(PointOfView::Third)
    } else {
        None
    }
}

/// Conditional marker, or a multi-word conjunction ending in one ("even if")
pub fn is_conditional_marker(word: &str) -> bool {
    let last = word.rsplit(' ').next().unwrap_or(word);
    CONDITIONAL_MARKERS.contains(&word) || last == "if"
}

/// Category of a preposition; prepositions missing from the table are `Other`
pub fn preposition_category(word: &str) -> PrepositionCategory {
    PREPOSITION_CATEGORIES
        .get(word)
        .copied()
        .unwrap_or(PrepositionCategory::Other)
}

/// Closed-class words the tagger knows without a dictionary
pub fn is_closed_class(word: &str) -> bool {
    is_pronoun(word) || is_determiner(word) || is_auxiliary(word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pronoun_person() {
        assert_eq!(pronoun_person("i"), Some(PointOfView::First));
        assert_eq!(pronoun_person("you"), Some(PointOfView::Second));
        assert_eq!(pronoun_person("they"), Some(PointOfView::Third));
        assert_eq!(pronoun_person("food"), None);
    }

    #[test]
    fn test_self_reference_is_closed() {
        for word in ["i", "me", "my", "mine", "myself"] {
            assert!(is_self_reference(word));
        }
        assert!(!is_self_reference("we"));
        assert!(!is_self_reference("I"));
    }

    #[test]
    fn test_conditional_markers() {
        assert!(is_conditional_marker("if"));
        assert!(is_conditional_marker("whenever"));
        assert!(is_conditional_marker("even if"));
        assert!(!is_conditional_marker("and"));
        assert!(!is_conditional_marker("even though"));
    }

    #[test]
    fn test_preposition_categories() {
        assert_eq!(preposition_category("in"), PrepositionCategory::Locative);
        assert_eq!(preposition_category("during"), PrepositionCategory::Temporal);
        assert_eq!(preposition_category("with"), PrepositionCategory::Other);
        assert_eq!(preposition_category("xyz"), PrepositionCategory::Other);
    }

    #[test]
    fn test_future_markers() {
        assert!(is_future_marker("will"));
        assert!(is_future_marker("i'll"));
        assert!(!is_future_marker("would"));
    }
}
