//! Sequential search - dictionary lookup, then every rule on every seed.

use std::fmt;
use std::io::Write;

use crate::error::CrackError;
use crate::progress::Progress;
use crate::rules::{Probe, RuleKind, RuleOutcome, RunState};
use crate::target::Target;
use crate::wordlist::WordlistSource;

/// Final answer of a search run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// The target is itself a wordlist entry.
    Exact(String),
    /// The target was derived from a seed by a mutation rule.
    Mutated(RuleOutcome),
    NotCracked,
}

impl Verdict {
    pub fn is_cracked(&self) -> bool {
        !matches!(self, Verdict::NotCracked)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Exact(password) => write!(f, "Your password is: {}", password),
            Verdict::Mutated(outcome) => write!(f, "{}", outcome),
            Verdict::NotCracked => f.write_str("Nice password, couldn't crack it!"),
        }
    }
}

/// Scans the wordlist once for an entry equal to the target.
///
/// Draws the dictionary progress bar on `out`, closed with `>` when the
/// pass ends without a match.
pub fn exact_lookup<W: Write>(
    wordlist: &dyn WordlistSource,
    target: &Target,
    out: &mut W,
) -> Result<Option<String>, CrackError> {
    let mut progress = Progress::new(wordlist.len()).with_header("Dictionary attack progress:");

    for seed in wordlist.seeds() {
        if seed == target.expose() {
            #[cfg(feature = "tracing")]
            tracing::info!("Target found verbatim in wordlist");
            return Ok(Some(seed));
        }
        progress.tick(out)?;
    }

    writeln!(out, ">")?;
    Ok(None)
}

/// Applies every rule, in priority order, to every seed.
///
/// The first rule to reach the target ends the search.
pub fn mutation_search<W: Write>(
    wordlist: &dyn WordlistSource,
    target: &Target,
    max_len: usize,
    out: &mut W,
) -> Result<Option<RuleOutcome>, CrackError> {
    let probe = Probe::new(target.expose(), max_len);
    let mut state = RunState::new();
    let mut progress = Progress::new(wordlist.len());

    for seed in wordlist.seeds() {
        for rule in RuleKind::ALL {
            if let Some(candidate) = rule.apply(&seed, &probe, &mut state) {
                #[cfg(feature = "tracing")]
                tracing::info!("Rule {} matched from seed '{}'", rule, seed);
                return Ok(Some(RuleOutcome {
                    rule,
                    seed,
                    candidate,
                }));
            }
        }
        progress.tick(out)?;
    }

    Ok(None)
}

/// Runs a full single-process search and writes the report to `out`.
pub fn crack<W: Write>(
    wordlist: &dyn WordlistSource,
    target: &Target,
    max_len: usize,
    out: &mut W,
) -> Result<Verdict, CrackError> {
    writeln!(out, "Looking up password... ")?;

    #[cfg(feature = "tracing")]
    tracing::info!("Dictionary pass started (max length {})", max_len);

    let verdict = match exact_lookup(wordlist, target, out)? {
        Some(password) => Verdict::Exact(password),
        None => {
            writeln!(out, "Your password is not that common...")?;
            writeln!(out, "Starting a brute force attack...")?;

            #[cfg(feature = "tracing")]
            tracing::info!("Mutation pass started");

            match mutation_search(wordlist, target, max_len, out)? {
                Some(outcome) => Verdict::Mutated(outcome),
                None => Verdict::NotCracked,
            }
        }
    };

    if verdict.is_cracked() {
        writeln!(out)?;
    }
    writeln!(out, "{}", verdict)?;
    Ok(verdict)
}
