//! Mutation rules
//!
//! Each rule decides whether the target can be derived from a single seed
//! word by one family of mechanical transformations.

mod casing;
mod deletion;
mod digits;
mod repeat;
mod reverse;

use std::fmt;

use crate::visited::VisitedSet;

pub use casing::case_toggle_rule;
pub use deletion::character_deletion_rule;
pub use digits::digit_insertion_rule;
pub use repeat::repetition_rule;
pub use reverse::reversal_rule;

/// Result type for rule functions.
/// - `Some(candidate)` - the target was reached, `candidate` is the literal match
/// - `None` - this seed cannot produce the target under the rule
pub type RuleResult = Option<String>;

/// Signature shared by every rule.
pub type RuleFn = fn(&str, &Probe<'_>) -> RuleResult;

/// What a rule is looking for and how far it may go.
#[derive(Debug, Clone, Copy)]
pub struct Probe<'a> {
    /// The password under test.
    pub target: &'a str,
    /// Upper bound on generated candidate length, in characters.
    pub max_len: usize,
}

impl<'a> Probe<'a> {
    pub fn new(target: &'a str, max_len: usize) -> Self {
        Self { target, max_len }
    }

    pub(crate) fn target_len(&self) -> usize {
        self.target.chars().count()
    }
}

/// The five mutation rules, in the order the sequential search tries them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleKind {
    DigitInsertion,
    Reversal,
    Repetition,
    CaseToggle,
    CharacterDeletion,
}

impl RuleKind {
    /// Priority order used by the sequential coordinator.
    pub const ALL: [RuleKind; 5] = [
        RuleKind::DigitInsertion,
        RuleKind::Reversal,
        RuleKind::Repetition,
        RuleKind::CaseToggle,
        RuleKind::CharacterDeletion,
    ];

    pub fn name(self) -> &'static str {
        match self {
            RuleKind::DigitInsertion => "digit-insertion",
            RuleKind::Reversal => "reversal",
            RuleKind::Repetition => "repetition",
            RuleKind::CaseToggle => "case-toggle",
            RuleKind::CharacterDeletion => "character-deletion",
        }
    }

    /// Phrase used in `Found the password by <description> '<seed>'.`
    pub fn description(self) -> &'static str {
        match self {
            RuleKind::DigitInsertion => "adding numbers to",
            RuleKind::Reversal => "reversing",
            RuleKind::Repetition => "repeating",
            RuleKind::CaseToggle => "changing casing on",
            RuleKind::CharacterDeletion => "removing characters from",
        }
    }

    pub fn rule_fn(self) -> RuleFn {
        match self {
            RuleKind::DigitInsertion => digit_insertion_rule,
            RuleKind::Reversal => reversal_rule,
            RuleKind::Repetition => repetition_rule,
            RuleKind::CaseToggle => case_toggle_rule,
            RuleKind::CharacterDeletion => character_deletion_rule,
        }
    }

    /// Applies this rule to one seed.
    ///
    /// `state` carries what must survive across seeds of the same run. The
    /// case rule skips seeds whose lowercase form was already explored, since
    /// every such seed spans the same set of case assignments.
    pub fn apply(self, seed: &str, probe: &Probe<'_>, state: &mut RunState) -> RuleResult {
        if self != RuleKind::CaseToggle {
            return (self.rule_fn())(seed, probe);
        }

        let lower = seed.to_ascii_lowercase();
        if state.lowered.contains(&lower) {
            #[cfg(feature = "tracing")]
            tracing::trace!("Case family of '{}' already explored", lower);
            return None;
        }

        let found = case_toggle_rule(seed, probe);
        if found.is_none() {
            state.lowered.insert(&lower);
        }
        found
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Whether every character of `needle` appears in `haystack`, in order.
///
/// Insertion rules only ever grow a candidate and deletion rules only ever
/// shrink it, so this is the reachability test both use to prune branches.
pub(crate) fn is_subsequence(needle: &str, haystack: &str) -> bool {
    let mut rest = haystack.chars();
    needle.chars().all(|c| rest.any(|h| h == c))
}

/// State that persists across all seeds of one run of one rule set.
#[derive(Debug, Default)]
pub struct RunState {
    lowered: VisitedSet,
}

impl RunState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct lowercase forms already explored by the case rule.
    pub fn lowered_forms(&self) -> usize {
        self.lowered.len()
    }
}

/// A successful rule application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleOutcome {
    pub rule: RuleKind,
    /// Wordlist entry the derivation started from.
    pub seed: String,
    /// The generated string equal to the target.
    pub candidate: String,
}

impl fmt::Display for RuleOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Found the password by {} '{}'.",
            self.rule.description(),
            self.seed
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_subsequence() {
        assert!(is_subsequence("", "abc"));
        assert!(is_subsequence("hlo", "hello"));
        assert!(is_subsequence("hello", "1hel5lo"));
        assert!(!is_subsequence("olh", "hello"));
        assert!(!is_subsequence("abc", ""));
    }

    #[test]
    fn test_priority_order() {
        assert_eq!(RuleKind::ALL[0], RuleKind::DigitInsertion);
        assert_eq!(RuleKind::ALL[4], RuleKind::CharacterDeletion);
    }

    #[test]
    fn test_outcome_message() {
        let outcome = RuleOutcome {
            rule: RuleKind::Reversal,
            seed: "hello".to_string(),
            candidate: "olleh".to_string(),
        };
        assert_eq!(outcome.to_string(), "Found the password by reversing 'hello'.");
    }

    #[test]
    fn test_apply_dispatches_to_rule() {
        let mut state = RunState::new();
        let probe = Probe::new("hellohello", 20);
        assert_eq!(
            RuleKind::Repetition.apply("hello", &probe, &mut state),
            Some("hellohello".to_string())
        );
        assert_eq!(RuleKind::Reversal.apply("hello", &probe, &mut state), None);
    }

    #[test]
    fn test_case_family_explored_once_per_run() {
        let mut state = RunState::new();
        let probe = Probe::new("xyz", 20);

        assert_eq!(RuleKind::CaseToggle.apply("Hello", &probe, &mut state), None);
        assert_eq!(state.lowered_forms(), 1);

        // Same lowercase form, nothing new recorded.
        assert_eq!(RuleKind::CaseToggle.apply("hELLO", &probe, &mut state), None);
        assert_eq!(state.lowered_forms(), 1);

        assert_eq!(RuleKind::CaseToggle.apply("world", &probe, &mut state), None);
        assert_eq!(state.lowered_forms(), 2);
    }

    #[test]
    fn test_case_family_skipped_after_failed_exploration() {
        let mut state = RunState::new();
        // "hello" fails against "xyz" and marks the family as explored.
        let miss = Probe::new("xyz", 20);
        assert_eq!(RuleKind::CaseToggle.apply("hello", &miss, &mut state), None);

        let hit = Probe::new("HeLLo", 20);
        assert_eq!(RuleKind::CaseToggle.apply("HELLO", &hit, &mut state), None);
    }
}
