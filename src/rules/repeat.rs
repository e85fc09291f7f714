//! Repetition rule - the seed written twice.

use super::{Probe, RuleResult};

/// Checks whether the seed concatenated with itself equals the target.
///
/// The doubled seed is rejected outright when it would exceed `max_len`.
pub fn repetition_rule(seed: &str, probe: &Probe<'_>) -> RuleResult {
    if seed.chars().count() * 2 > probe.max_len {
        return None;
    }

    let repeated = seed.repeat(2);
    (repeated == probe.target).then_some(repeated)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repetition_match() {
        let probe = Probe::new("hellohello", 20);
        assert_eq!(repetition_rule("hello", &probe), Some("hellohello".to_string()));
    }

    #[test]
    fn test_repetition_exactly_at_bound() {
        let probe = Probe::new("hellohello", 10);
        assert_eq!(repetition_rule("hello", &probe), Some("hellohello".to_string()));
    }

    #[test]
    fn test_repetition_over_bound() {
        let probe = Probe::new("hellohello", 9);
        assert_eq!(repetition_rule("hello", &probe), None);
    }

    #[test]
    fn test_repetition_compares_against_target() {
        // The doubled seed must equal the target, not the seed.
        let probe = Probe::new("hello", 20);
        assert_eq!(repetition_rule("hello", &probe), None);
    }

    #[test]
    fn test_repetition_empty_seed() {
        let probe = Probe::new("", 0);
        assert_eq!(repetition_rule("", &probe), Some(String::new()));
    }
}
