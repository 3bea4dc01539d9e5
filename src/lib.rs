//! Lexis - dictionary-based word tagging and sentence classification
//!
//! Splits English text into sentences, tags every word with a grammatical
//! role, tense and person, links related words and classifies each sentence
//! as declarative, imperative, interrogative or conditional.

pub mod config;
pub mod dictionary;
pub mod engine;
pub mod error;
pub mod grammar;
pub mod report;
pub mod sentence;

pub use config::{Config, OutputFormat};
pub use dictionary::{DictionaryStore, Role, RoleSet, SharedDictionary};
pub use engine::{analyze, Engine};
pub use error::{Error, Result};
pub use grammar::{PointOfView, RelationKind, RelationshipEdge, Tense, Word};
pub use sentence::{Sentence, SentenceType};
