//! Distributed search - one worker per activity, first match wins.
//!
//! Every worker walks the whole wordlist on its own with private search
//! state. Workers share only a cancellation token and the winner slot.

use std::fmt;
use std::io::Write;
use std::sync::{Arc, OnceLock};
use std::time::{Duration, Instant};

use tokio_util::sync::CancellationToken;

use crate::coordinator::Verdict;
use crate::error::CrackError;
use crate::progress::Progress;
use crate::rules::{Probe, RuleKind, RuleOutcome, RunState};
use crate::target::Target;
use crate::wordlist::WordlistSource;

/// Responsibility bound to one worker slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activity {
    ExactLookup,
    Mutation(RuleKind),
}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Activity::ExactLookup => f.write_str("exact-lookup"),
            Activity::Mutation(rule) => write!(f, "{}", rule),
        }
    }
}

/// Worker slot (rank) to activity table.
pub const REGISTRY: [Activity; 6] = [
    Activity::ExactLookup,
    Activity::Mutation(RuleKind::DigitInsertion),
    Activity::Mutation(RuleKind::Reversal),
    Activity::Mutation(RuleKind::Repetition),
    Activity::Mutation(RuleKind::CaseToggle),
    Activity::Mutation(RuleKind::CharacterDeletion),
];

/// How a worker ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkerStatus {
    /// Matched and claimed the winner slot.
    Won,
    /// Matched after another rank had already claimed the win.
    Lost,
    /// Walked the whole wordlist without a match.
    Exhausted,
    /// Stopped early because another rank won.
    Cancelled,
}

#[derive(Debug, Clone)]
pub struct WorkerReport {
    pub rank: usize,
    pub activity: Activity,
    pub status: WorkerStatus,
    pub elapsed: Duration,
    /// Dictionary progress bar drawn by the exact-lookup rank, empty otherwise.
    pub progress: String,
}

/// Result of a whole pool run.
#[derive(Debug, Clone)]
pub struct PoolOutcome {
    /// Rank that claimed the win and what it found.
    pub winner: Option<(usize, Verdict)>,
    /// One report per rank, in rank order.
    pub reports: Vec<WorkerReport>,
}

impl PoolOutcome {
    pub fn verdict(&self) -> Verdict {
        self.winner
            .as_ref()
            .map(|(_, verdict)| verdict.clone())
            .unwrap_or(Verdict::NotCracked)
    }

    /// Writes the rank-prefixed summary of the run.
    pub fn write_report<W: Write>(&self, out: &mut W) -> Result<(), CrackError> {
        for report in self.reports.iter().filter(|r| !r.progress.is_empty()) {
            write!(out, "{}", report.progress)?;
            if !report.progress.ends_with('\n') {
                writeln!(out)?;
            }
        }

        match &self.winner {
            Some((_, Verdict::Exact(password))) => {
                writeln!(out)?;
                writeln!(out, "Your password is: {}", password)?;
            }
            Some((rank, Verdict::Mutated(outcome))) => {
                writeln!(out)?;
                writeln!(
                    out,
                    "Rank {} found the password by {} '{}'.",
                    rank,
                    outcome.rule.description(),
                    outcome.seed
                )?;
            }
            Some((_, Verdict::NotCracked)) | None => {}
        }

        for report in &self.reports {
            if report.status == WorkerStatus::Exhausted {
                writeln!(out, "Rank {}: could not find the password.", report.rank)?;
            }
        }
        if self.winner.is_none() {
            writeln!(out, "{}", Verdict::NotCracked)?;
        }
        for report in &self.reports {
            writeln!(
                out,
                "Rank {}: password lookup completed in {} seconds.",
                report.rank,
                report.elapsed.as_secs_f64()
            )?;
        }
        Ok(())
    }
}

/// First-winner arbitration shared by all workers.
struct Arbiter {
    winner: OnceLock<(usize, Verdict)>,
    token: CancellationToken,
}

impl Arbiter {
    /// Records a match. Only the first claim wins; every claim cancels the pool.
    fn claim(&self, rank: usize, verdict: Verdict) -> WorkerStatus {
        let won = self.winner.set((rank, verdict)).is_ok();
        self.token.cancel();
        if won {
            WorkerStatus::Won
        } else {
            WorkerStatus::Lost
        }
    }
}

fn run_worker(
    rank: usize,
    activity: Activity,
    wordlist: &dyn WordlistSource,
    target: &Target,
    max_len: usize,
    arbiter: &Arbiter,
) -> WorkerReport {
    let started = Instant::now();
    let probe = Probe::new(target.expose(), max_len);
    let mut state = RunState::new();
    let mut status = WorkerStatus::Exhausted;
    let mut bar: Vec<u8> = Vec::new();
    let mut progress = (activity == Activity::ExactLookup)
        .then(|| Progress::new(wordlist.len()).with_header("Dictionary attack progress:"));

    #[cfg(feature = "tracing")]
    tracing::debug!("Rank {} started ({})", rank, activity);

    for seed in wordlist.seeds() {
        if arbiter.token.is_cancelled() {
            status = WorkerStatus::Cancelled;
            break;
        }

        let verdict = match activity {
            Activity::ExactLookup => (seed == probe.target).then(|| Verdict::Exact(seed)),
            Activity::Mutation(rule) => rule.apply(&seed, &probe, &mut state).map(|candidate| {
                Verdict::Mutated(RuleOutcome {
                    rule,
                    seed,
                    candidate,
                })
            }),
        };

        if let Some(verdict) = verdict {
            status = arbiter.claim(rank, verdict);
            break;
        }
        if let Some(progress) = progress.as_mut() {
            // Drawing into a Vec cannot fail.
            let _ = progress.tick(&mut bar);
        }
    }

    if progress.is_some() && status == WorkerStatus::Exhausted {
        bar.extend_from_slice(b">\n");
    }

    #[cfg(feature = "tracing")]
    tracing::info!("Rank {} ({}) finished: {:?}", rank, activity, status);

    WorkerReport {
        rank,
        activity,
        status,
        elapsed: started.elapsed(),
        progress: String::from_utf8_lossy(&bar).into_owned(),
    }
}

/// Runs up to `workers` ranks of [`REGISTRY`] concurrently.
///
/// Announcements are written to `out` before the workers start; the
/// summary is left to [`PoolOutcome::write_report`].
pub async fn run_pool<W: Write>(
    wordlist: Arc<dyn WordlistSource>,
    target: Arc<Target>,
    max_len: usize,
    workers: usize,
    out: &mut W,
) -> Result<PoolOutcome, CrackError> {
    run_pool_with_token(wordlist, target, max_len, workers, CancellationToken::new(), out).await
}

/// Same as [`run_pool`], with a token the caller may cancel to stop every worker.
pub async fn run_pool_with_token<W: Write>(
    wordlist: Arc<dyn WordlistSource>,
    target: Arc<Target>,
    max_len: usize,
    workers: usize,
    token: CancellationToken,
    out: &mut W,
) -> Result<PoolOutcome, CrackError> {
    let arbiter = Arc::new(Arbiter {
        winner: OnceLock::new(),
        token,
    });
    let slots = workers.clamp(1, REGISTRY.len());

    #[cfg(feature = "tracing")]
    tracing::info!("Starting {} of {} worker slots", slots, REGISTRY.len());

    let mut handles = Vec::with_capacity(slots);
    for (rank, activity) in REGISTRY.into_iter().enumerate().take(slots) {
        match activity {
            Activity::ExactLookup => writeln!(
                out,
                "Rank {} is looking up the password in the dictionary... ",
                rank
            )?,
            Activity::Mutation(_) => {
                writeln!(out, "Rank {}: starting a brute force attack...", rank)?
            }
        }

        let wordlist = Arc::clone(&wordlist);
        let target = Arc::clone(&target);
        let arbiter = Arc::clone(&arbiter);
        let handle = tokio::task::spawn_blocking(move || {
            run_worker(rank, activity, wordlist.as_ref(), &target, max_len, &arbiter)
        });
        handles.push((rank, activity, handle));
    }

    let mut reports = Vec::with_capacity(slots);
    for (rank, activity, handle) in handles {
        match handle.await {
            Ok(report) => reports.push(report),
            Err(_e) => {
                #[cfg(feature = "tracing")]
                tracing::error!("Rank {} ({}) failed: {}", rank, activity, _e);
                arbiter.token.cancel();
                return Err(CrackError::WorkerFailed {
                    rank,
                    activity: activity.to_string(),
                });
            }
        }
    }

    Ok(PoolOutcome {
        winner: arbiter.winner.get().cloned(),
        reports,
    })
}
