//! Tagged word

use serde::Serialize;

use crate::dictionary::{Role, RoleSet};

/// Verb tense
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tense {
    #[default]
    Unknown,
    Past,
    Present,
    Future,
}

impl Tense {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tense::Unknown => "unknown",
            Tense::Past => "past",
            Tense::Present => "present",
            Tense::Future => "future",
        }
    }
}

/// Grammatical person
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PointOfView {
    #[default]
    Unknown,
    First,
    Second,
    Third,
}

impl PointOfView {
    pub fn as_str(&self) -> &'static str {
        match self {
            PointOfView::Unknown => "unknown",
            PointOfView::First => "first",
            PointOfView::Second => "second",
            PointOfView::Third => "third",
        }
    }
}

/// One token after tagging.
///
/// `role` is always a single resolved value; `candidates` keeps every role
/// the word could have had so consumers can see how ambiguous it was.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Word {
    /// Token as written in the input
    pub text: String,
    pub role: Role,
    pub candidates: RoleSet,
    pub tense: Tense,
    pub point_of_view: PointOfView,
    /// Denotes the speaking agent ("I", "me", "my", ...)
    pub self_reference: bool,
    /// No dictionary entry or closed-class table matched
    pub unknown: bool,
    /// Index in the sentence's word sequence
    pub position: usize,
    /// Byte span inside the sentence text
    pub start: usize,
    pub end: usize,
}

impl Word {
    pub fn new(text: &str, position: usize) -> Self {
        Self {
            text: text.to_string(),
            role: Role::Unknown,
            candidates: RoleSet::empty(),
            tense: Tense::Unknown,
            point_of_view: PointOfView::Unknown,
            self_reference: false,
            unknown: true,
            position,
            start: 0,
            end: text.len(),
        }
    }

    pub fn with_span(mut self, start: usize, end: usize) -> Self {
        self.start = start;
        self.end = end;
        self
    }

    pub fn lowercase(&self) -> String {
        self.text.to_lowercase()
    }

    pub fn is(&self, role: Role) -> bool {
        self.role == role
    }

    /// Whether disambiguation settled on a role
    pub fn is_resolved(&self) -> bool {
        self.role != Role::Unknown
    }
}
