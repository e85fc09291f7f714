//! Case toggle rule - walks the lattice of letter-case assignments.

use super::{Probe, RuleResult};
use crate::visited::VisitedSet;

/// Searches the case assignments of the seed's ASCII letters.
///
/// The walk starts from the all-lowercase form and moves one letter at a
/// time towards the all-uppercase form, which ends a path. Only letters the
/// target has in uppercase are flipped, so a path never moves away from it. Assignments
/// reached through different flip orders are expanded once, via a
/// `VisitedSet` shared by every branch of this seed. Other characters are
/// copied through. `max_len` plays no part, case changes keep the length.
///
/// # Returns
/// - `Some(candidate)` if some assignment equals the target
/// - `None` if the target is not a case variant of the seed
pub fn case_toggle_rule(seed: &str, probe: &Probe<'_>) -> RuleResult {
    let lo = seed.to_ascii_lowercase();
    if probe.target.to_ascii_lowercase() != lo {
        return None;
    }
    let hi = seed.to_ascii_uppercase();

    let mut visited = VisitedSet::new();
    visited.insert(&lo);
    let mut pending = vec![lo];

    while let Some(node) = pending.pop() {
        if node == probe.target {
            return Some(node);
        }
        if node == hi {
            continue;
        }

        // Reversed so the leftmost flip is explored first.
        for child in flips(&node, probe.target).into_iter().rev() {
            if visited.insert(&child) {
                pending.push(child);
            }
        }
    }

    None
}

/// Every assignment one step closer to `target` than `node`.
///
/// `target` equals `node` up to ASCII case, so byte offsets line up.
fn flips(node: &str, target: &str) -> Vec<String> {
    let wanted = target.as_bytes();
    node.char_indices()
        .filter(|&(i, c)| c.is_ascii_lowercase() && wanted[i].is_ascii_uppercase())
        .map(|(i, c)| {
            let mut child = String::with_capacity(node.len());
            child.push_str(&node[..i]);
            child.push(c.to_ascii_uppercase());
            child.push_str(&node[i + 1..]);
            child
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_upper_endpoint() {
        let probe = Probe::new("HELLO", 20);
        assert_eq!(case_toggle_rule("hello", &probe), Some("HELLO".to_string()));
    }

    #[test]
    fn test_lower_endpoint_from_mixed_seed() {
        let probe = Probe::new("hello", 20);
        assert_eq!(case_toggle_rule("HeLLo", &probe), Some("hello".to_string()));
    }

    #[test]
    fn test_mixed_assignment() {
        let probe = Probe::new("hElLo", 20);
        assert_eq!(case_toggle_rule("hello", &probe), Some("hElLo".to_string()));
    }

    #[test]
    fn test_every_assignment_reachable() {
        let seed = "abcd";
        for mask in 0u8..16 {
            let target: String = seed
                .chars()
                .enumerate()
                .map(|(i, c)| if mask & (1 << i) != 0 { c.to_ascii_uppercase() } else { c })
                .collect();
            let probe = Probe::new(&target, 0);
            assert_eq!(case_toggle_rule(seed, &probe), Some(target.clone()));
        }
    }

    #[test]
    fn test_non_letters_copied_through() {
        let probe = Probe::new("P4SS-word", 20);
        assert_eq!(
            case_toggle_rule("p4ss-WORD", &probe),
            Some("P4SS-word".to_string())
        );
    }

    #[test]
    fn test_different_word_fails() {
        let probe = Probe::new("WORLD", 20);
        assert_eq!(case_toggle_rule("hello", &probe), None);
    }

    #[test]
    fn test_seed_without_letters() {
        let probe = Probe::new("1234", 20);
        assert_eq!(case_toggle_rule("1234", &probe), Some("1234".to_string()));

        let probe = Probe::new("4321", 20);
        assert_eq!(case_toggle_rule("1234", &probe), None);
    }

    #[test]
    fn test_flips_only_move_towards_target() {
        assert_eq!(
            flips("aB1c", "AB1C"),
            vec!["AB1c".to_string(), "aB1C".to_string()]
        );
        assert_eq!(flips("ab1c", "aB1c"), vec!["aB1c".to_string()]);
        assert!(flips("ABC", "ABC").is_empty());
    }

    #[test]
    fn test_long_alternating_case_target() {
        let seed = "abcdefghijklmnopqrstuvwxyz";
        let target: String = seed
            .chars()
            .enumerate()
            .map(|(i, c)| if i % 2 == 0 { c.to_ascii_uppercase() } else { c })
            .collect();
        let probe = Probe::new(&target, 0);
        assert_eq!(case_toggle_rule(seed, &probe), Some(target.clone()));
    }
}
