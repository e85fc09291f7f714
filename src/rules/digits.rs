//! Digit insertion rule - grows a seed one decimal digit at a time.

use super::{Probe, RuleResult, is_subsequence};
use crate::visited::VisitedSet;

/// Searches for the target among strings built by inserting digits `0-9`
/// into the seed, one digit per step, at any position including both ends.
///
/// Candidates are expanded only while shorter than both `max_len` and the
/// target. Digit insertion never touches the other characters, so a seed
/// whose non-digit characters differ from the target's is rejected up front.
/// Every generated string goes through a `VisitedSet` scoped to this
/// call, so a string produced by several insertion orders is expanded once.
///
/// # Returns
/// - `Some(candidate)` if a derived string equals the target
/// - `None` once every reachable candidate is exhausted
pub fn digit_insertion_rule(seed: &str, probe: &Probe<'_>) -> RuleResult {
    search(seed, probe, |_| {})
}

/// Worklist walk behind [`digit_insertion_rule`]; `on_expand` sees every
/// candidate taken off the stack.
fn search(seed: &str, probe: &Probe<'_>, mut on_expand: impl FnMut(&str)) -> RuleResult {
    if !is_subsequence(seed, probe.target) || non_digits(seed).ne(non_digits(probe.target)) {
        return None;
    }

    let bound = probe.max_len.min(probe.target_len());
    let mut visited = VisitedSet::new();
    visited.insert(seed);
    let mut pending = vec![seed.to_owned()];

    while let Some(candidate) = pending.pop() {
        on_expand(&candidate);
        if candidate == probe.target {
            return Some(candidate);
        }
        if candidate.chars().count() >= bound {
            continue;
        }

        for child in insertions(&candidate) {
            // A child the target does not contain in order can never grow into it.
            if is_subsequence(&child, probe.target) && visited.insert(&child) {
                pending.push(child);
            }
        }
    }

    None
}

fn non_digits(s: &str) -> impl Iterator<Item = char> + '_ {
    s.chars().filter(|c| !c.is_ascii_digit())
}

/// Every string obtained by inserting one digit into `candidate`.
fn insertions(candidate: &str) -> impl Iterator<Item = String> + '_ {
    candidate
        .char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(candidate.len()))
        .flat_map(move |at| {
            ('0'..='9').map(move |digit| {
                let mut child = String::with_capacity(candidate.len() + 1);
                child.push_str(&candidate[..at]);
                child.push(digit);
                child.push_str(&candidate[at..]);
                child
            })
        })
}
