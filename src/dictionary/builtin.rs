//! Built-in reference vocabulary
//!
//! The word lists are kept exactly as they shipped so that stores built from
//! defaults behave the same as older snapshots. Multi-word conjunctions
//! ("even if", "so that") are matched as phrases by the tokenizer.

use super::role::Role;
use super::store::DictionaryStore;

const NOUNS: &[&str] = &[
    "object", "time", "word", "place", "question", "number", "fact", "thing", "entity", "yes",
    "no",
];

const VERBS: &[&str] = &[
    "be", "were", "been", "have", "had", "do", "did", "done", "say", "said", "go", "went",
    "gone", "get", "got", "gotten", "make", "made", "know", "knew", "known", "think", "thought",
    "take", "took", "taken", "come", "came", "want", "wanted", "use", "used", "find", "found",
    "give", "gave", "given", "tell", "told", "work", "worked", "call", "called", "try", "tried",
    "ask", "asked", "need", "needed", "feel", "felt", "become", "became", "leave", "left",
    "put", "mean", "meant", "keep", "kept", "let", "begin", "begun", "began", "seem", "seemed",
    "help", "helped", "show", "showed", "shown", "hear", "heard", "see", "saw", "run", "ran",
    "move", "moved", "live", "lived", "believe", "believed", "bring", "brought", "happen",
    "happened", "write", "written", "wrote", "read", "sit", "sat", "stand", "stood", "lose",
    "lost", "pay", "paid", "meet", "met", "include", "continue", "stop", "join", "joined",
    "set", "learn", "learned", "lead", "led", "follow", "followed", "understand", "understood",
    "watch", "watched", "create", "created", "destroy", "destroyed", "spend", "spent",
    "consider", "considered", "offer", "offered", "serve", "served", "die", "died", "send",
    "sent", "receive", "received", "who", "what", "when", "where", "why", "how", "does",
];

const ADJECTIVES: &[&str] = &[
    "different", "other", "new", "old", "good", "bad", "big", "small", "little", "large",
    "long", "short", "black", "white", "early", "late", "hard", "soft", "major", "minor",
    "better", "worse", "full", "empty", "local", "regional", "recent", "clear", "national",
    "easy", "available", "likely", "unlikely", "single", "wrong", "right", "private", "public",
    "past", "rich", "ready", "simple", "complex", "general", "precise", "accurate", "rude",
    "physical", "abstract", "nice", "mean", "final", "popular", "similiar", "dark", "dead",
    "alive", "hot", "cold", "light",
];

const ADVERBS: &[&str] = &[
    "accidentally", "afterwards", "almost", "always", "angrily", "annually", "anxiously",
    "awkwardly", "badly", "blindly", "boastfully", "boldly", "bravely", "briefly", "brightly ",
    "busily", "calmly", "carefully", "carelessly", "cautiously", "cheerfully", "clearly",
    "correctly", "courageously ", "crossly", "cruelly", "daily", "defiantly", "deliberately",
    "doubtfully", "easily", "elegantly", "enormously", "enthusiastically", "equally", "even",
    "eventually", "exactly", "faithfully", "far", "fast", "fatally", "fiercely", "fondly",
    "foolishly", "fortunately", "frantically", "gently", "gladly", "gracefully", "greedily",
    "happily", "hastily", "honestly", "hourly", "hungrily", "innocently", "inquisitively",
    "irritably", "joyously", "justly", "kindly", "lazily", "less", "loosely", "loudly", "madly",
    "merrily", "monthly", "more", "mortally", "mysteriously", "nearly", "neatly", "nervously",
    "never", "noisily", "not", "obediently", "obnoxiously", "often", "only", "painfully",
    "perfectly", "politely", "poorly", "powerfully", "promptly", "punctually", "quickly",
    "quietly", "rapidly", "rarely", "really", "recklessly", "regularly", "reluctantly",
    "repeatedly", "rightfully", "roughly", "rudely", "sadly", "safely", "seldom", "selfishly",
    "seriously", "shakily", "sharply", "shrilly", "shyly", "silently", "sleepily", "slowly",
    "smoothly", "softly", "solemnly", "sometimes", "soon", "speedily", "stealthily", "sternly",
    "successfully", "suddenly", "suspiciously", "swiftly", "tenderly", "tensely",
    "thoughtfully", "tightly", "tomorrow", "too", "truthfully", "unexpectedly", "very",
    "victoriously", "violently", "vivaciously", "warmly", "weakly", "wearily", "well", "wildly",
    "yearly", "yesterday",
];

const CONJUNCTIONS: &[&str] = &[
    "and", "but", "or", "yet", "for", "nor", "so", "after", "although", "because", "before",
    "by the time", "as", "even if", "even though", "every time", "if", "in case", "now that",
    "once", "since", "so that", "than", "the first time", "unless", "until", "when", "whenever",
    "whether or not", "while", "why",
];

const PREPOSITIONS: &[&str] = &[
    "about", "above", "across", "after", "against", "along", "among", "around", "at", "before",
    "behind", "below", "beneath", "beside", "between", "beyond", "but", "by", "concerning",
    "down", "during", "except", "for", "from", "in", "inside", "into", "like", "near", "of",
    "off", "on", "onto", "out", "outside", "over", "past", "regarding", "since", "through",
    "to", "toward", "towards", "under", "underneath", "until", "up", "upon", "with", "within",
    "without",
];

/// Irregular past and participle forms of the built-in verbs. Regular forms
/// are recognised by their "-ed" suffix and are not listed.
const PAST_TENSE: &[&str] = &[
    "were", "been", "had", "did", "done", "said", "went", "gone", "got", "gotten", "made",
    "knew", "known", "thought", "took", "taken", "came", "found", "gave", "given", "told",
    "felt", "became", "left", "meant", "kept", "begun", "began", "shown", "heard", "saw", "ran",
    "brought", "written", "wrote", "sat", "stood", "lost", "paid", "met", "led", "understood",
    "spent", "sent",
];

/// Builds a fresh store from the reference lists
pub fn vocabulary() -> DictionaryStore {
    DictionaryStore::new()
        .with_words(Role::Noun, NOUNS)
        .with_words(Role::Verb, VERBS)
        .with_words(Role::Adjective, ADJECTIVES)
        .with_words(Role::Adverb, ADVERBS)
        .with_words(Role::Conjunction, CONJUNCTIONS)
        .with_words(Role::Preposition, PREPOSITIONS)
        .with_past_tense(PAST_TENSE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_sizes() {
        let store = vocabulary();
        assert_eq!(store.len(Role::Noun), 11);
        assert_eq!(store.len(Role::Verb), 142);
        assert_eq!(store.len(Role::Adjective), 60);
        assert_eq!(store.len(Role::Adverb), 144);
        assert_eq!(store.len(Role::Conjunction), 31);
        assert_eq!(store.len(Role::Preposition), 51);
    }

    #[test]
    fn test_every_reference_word_is_found_in_its_role() {
        let store = vocabulary();
        let lists = [
            (Role::Noun, NOUNS),
            (Role::Verb, VERBS),
            (Role::Adjective, ADJECTIVES),
            (Role::Adverb, ADVERBS),
            (Role::Conjunction, CONJUNCTIONS),
            (Role::Preposition, PREPOSITIONS),
        ];

        for (role, words) in lists {
            for word in words {
                assert!(
                    store.lookup(word).contains(role),
                    "'{}' should be a {}",
                    word,
                    role
                );
            }
        }
    }

    #[test]
    fn test_trailing_space_entries_are_trimmed() {
        let store = vocabulary();
        assert!(store.lookup("brightly").contains(Role::Adverb));
        assert!(store.lookup("courageously").contains(Role::Adverb));
    }

    #[test]
    fn test_past_tense_forms_are_verbs() {
        let store = vocabulary();
        for form in PAST_TENSE {
            assert!(store.lookup(form).contains(Role::Verb), "'{}' should be a verb", form);
            assert!(store.is_past_tense(form));
        }
        assert!(!store.is_past_tense("go"));
    }

    #[test]
    fn test_overlapping_entries() {
        let store = vocabulary();
        let mean = store.lookup("mean");
        assert!(mean.contains(Role::Verb) && mean.contains(Role::Adjective));

        let after = store.lookup("after");
        assert!(after.contains(Role::Conjunction) && after.contains(Role::Preposition));
    }

    #[test]
    fn test_longest_phrase() {
        assert_eq!(vocabulary().phrase_len(), 3);
    }
}
