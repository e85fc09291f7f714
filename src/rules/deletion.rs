//! Character deletion rule - shrinks a seed one character at a time.

use super::{Probe, RuleResult, is_subsequence};
use crate::visited::VisitedSet;

/// Searches for the target among strings obtained by deleting characters
/// from the seed, down to the empty string.
///
/// A branch is dropped as soon as the target no longer appears in order in
/// the candidate, and strings reached by deleting in a different order are
/// expanded once per seed.
pub fn character_deletion_rule(seed: &str, probe: &Probe<'_>) -> RuleResult {
    let mut visited = VisitedSet::new();
    visited.insert(seed);
    let mut pending = vec![seed.to_owned()];

    while let Some(candidate) = pending.pop() {
        if candidate == probe.target {
            return Some(candidate);
        }
        if candidate.is_empty() || !is_subsequence(probe.target, &candidate) {
            continue;
        }

        for (i, c) in candidate.char_indices() {
            let mut child = String::with_capacity(candidate.len());
            child.push_str(&candidate[..i]);
            child.push_str(&candidate[i + c.len_utf8()..]);
            if visited.insert(&child) {
                pending.push(child);
            }
        }
    }

    None
}
