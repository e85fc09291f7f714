//! Reversal rule - the seed spelled backwards.

use super::{Probe, RuleResult};

/// Checks whether the seed reversed character by character equals the target.
pub fn reversal_rule(seed: &str, probe: &Probe<'_>) -> RuleResult {
    let reversed: String = seed.chars().rev().collect();
    (reversed == probe.target).then_some(reversed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reversal_match() {
        let probe = Probe::new("olleh", 20);
        assert_eq!(reversal_rule("hello", &probe), Some("olleh".to_string()));
    }

    #[test]
    fn test_reversal_mismatch() {
        let probe = Probe::new("hello", 20);
        assert_eq!(reversal_rule("hello", &probe), None);
    }

    #[test]
    fn test_palindrome_matches_itself() {
        let probe = Probe::new("level", 20);
        assert_eq!(reversal_rule("level", &probe), Some("level".to_string()));
    }

    #[test]
    fn test_reversal_ignores_bound() {
        let probe = Probe::new("cba", 0);
        assert_eq!(reversal_rule("abc", &probe), Some("cba".to_string()));
    }

    #[test]
    fn test_reversal_multibyte() {
        let probe = Probe::new("éba", 20);
        assert_eq!(reversal_rule("abé", &probe), Some("éba".to_string()));
    }
}
