//! Memoization of explored candidates.
//!
//! A `VisitedSet` is owned by whoever drives a search and lives exactly as
//! long as that search: one seed for the recursive rules, one run for the
//! lowercase-form dedup of the case rule.

use std::collections::HashSet;

/// Set of candidate strings that have already been generated.
#[derive(Debug, Default, Clone)]
pub struct VisitedSet {
    seen: HashSet<String>,
}

impl VisitedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `candidate`.
    ///
    /// Returns `true` the first time a given string is seen and `false`
    /// for every later attempt, so callers expand a candidate only when
    /// this returns `true`.
    pub fn insert(&mut self, candidate: &str) -> bool {
        if self.seen.contains(candidate) {
            return false;
        }
        self.seen.insert(candidate.to_owned())
    }

    pub fn contains(&self, candidate: &str) -> bool {
        self.seen.contains(candidate)
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}
