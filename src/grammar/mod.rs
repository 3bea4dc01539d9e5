//! Grammar engine
//!
//! Segmentation, tokenization, tagging, relationship building and sentence
//! type classification.

pub mod classifier;
pub mod lexicon;
pub mod relations;
pub mod segmenter;
pub mod tagger;
pub mod tokenizer;
pub mod word;

pub use classifier::SentenceClassifier;
pub use lexicon::PrepositionCategory;
pub use relations::{build_relationships, RelationKind, RelationshipEdge, MODIFIER_WINDOW};
pub use segmenter::{terminal_punctuation, Segmenter, Sentences};
pub use tagger::Tagger;
pub use tokenizer::{Token, TokenType, Tokenizer};
pub use word::{PointOfView, Tense, Word};
