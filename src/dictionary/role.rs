//! Grammatical roles and role sets

use std::fmt;

use serde::{Deserialize, Serialize};

/// Grammatical role of a word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Noun,
    Verb,
    Adjective,
    Adverb,
    Conjunction,
    Preposition,
    Unknown,
}

impl Role {
    /// The six roles a dictionary can hold, in disambiguation priority order.
    pub const PRIORITY: [Role; 6] = [
        Role::Verb,
        Role::Noun,
        Role::Adjective,
        Role::Adverb,
        Role::Preposition,
        Role::Conjunction,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Noun => "noun",
            Role::Verb => "verb",
            Role::Adjective => "adjective",
            Role::Adverb => "adverb",
            Role::Conjunction => "conjunction",
            Role::Preposition => "preposition",
            Role::Unknown => "unknown",
        }
    }

    fn bit(self) -> u8 {
        match self {
            Role::Noun => 1,
            Role::Verb => 1 << 1,
            Role::Adjective => 1 << 2,
            Role::Adverb => 1 << 3,
            Role::Conjunction => 1 << 4,
            Role::Preposition => 1 << 5,
            Role::Unknown => 0,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Set of candidate roles for a word.
///
/// Iteration follows [`Role::PRIORITY`], so the first element is the role the
/// plain priority rule would pick. `Role::Unknown` is never a member.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct RoleSet(u8);

impl RoleSet {
    pub const fn empty() -> Self {
        RoleSet(0)
    }

    pub fn insert(&mut self, role: Role) {
        self.0 |= role.bit();
    }

    pub fn with(mut self, role: Role) -> Self {
        self.insert(role);
        self
    }

    pub fn contains(&self, role: Role) -> bool {
        role != Role::Unknown && self.0 & role.bit() != 0
    }

    pub fn union(self, other: RoleSet) -> RoleSet {
        RoleSet(self.0 | other.0)
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Roles in priority order
    pub fn iter(&self) -> impl Iterator<Item = Role> + '_ {
        Role::PRIORITY.into_iter().filter(move |role| self.contains(*role))
    }

    /// Highest-priority member, if any
    pub fn first(&self) -> Option<Role> {
        self.iter().next()
    }
}

impl FromIterator<Role> for RoleSet {
    fn from_iter<I: IntoIterator<Item = Role>>(iter: I) -> Self {
        let mut set = RoleSet::empty();
        for role in iter {
            set.insert(role);
        }
        set
    }
}

impl Serialize for RoleSet {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iteration_follows_priority() {
        let set: RoleSet = [Role::Conjunction, Role::Noun, Role::Verb].into_iter().collect();
        let roles: Vec<Role> = set.iter().collect();
        assert_eq!(roles, vec![Role::Verb, Role::Noun, Role::Conjunction]);
        assert_eq!(set.first(), Some(Role::Verb));
    }

    #[test]
    fn test_unknown_is_never_a_member() {
        let set = RoleSet::empty().with(Role::Unknown);
        assert!(set.is_empty());
        assert!(!set.contains(Role::Unknown));
    }

    #[test]
    fn test_union() {
        let a = RoleSet::empty().with(Role::Adjective);
        let b = RoleSet::empty().with(Role::Verb);
        let both = a.union(b);
        assert_eq!(both.len(), 2);
        assert!(both.contains(Role::Adjective));
        assert!(both.contains(Role::Verb));
    }
}
