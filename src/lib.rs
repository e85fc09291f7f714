//! Weak password auditing library
//!
//! Decides whether a password is a wordlist entry, or can be derived from
//! one by a small set of mechanical mutations: digit insertion, reversal,
//! repetition, case toggling and character deletion.
//!
//! # Features
//!
//! - `async` (default): Enables the distributed worker pool with cancellation support
//! - `tracing` (default): Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_CRACK_WORDLIST`: Custom path to the wordlist (default: `./rockyou.txt`)
//! - `PWD_CRACK_MODE`: `sequential` (default) or `distributed`
//! - `PWD_CRACK_WORKERS`: Distributed pool size, 1 to 6 (default: 6)
//! - `PWD_CRACK_LOG`: Log level for the binary (default: `info`)
//!
//! # Example
//!
//! ```rust,no_run
//! use pwd_crack::{crack, FileWordlist, Target};
//!
//! let wordlist = FileWordlist::new("./rockyou.txt");
//! let target = Target::new("hello1");
//!
//! let verdict = crack(&wordlist, &target, 20, &mut std::io::stdout()).expect("stdout is writable");
//! println!("Cracked: {}", verdict.is_cracked());
//! ```

// Internal modules
mod cli;
mod config;
mod coordinator;
mod error;
mod progress;
mod rules;
mod target;
mod visited;
mod wordlist;

#[cfg(feature = "async")]
mod partitioner;

// Public API
pub use cli::{Args, DEFAULT_MAX_LEN, UsageError, usage};
pub use config::{Config, Mode, get_wordlist_path};
pub use coordinator::{Verdict, crack, exact_lookup, mutation_search};
pub use error::CrackError;
pub use progress::{Progress, TERMINAL_WIDTH};
pub use rules::{
    Probe, RuleFn, RuleKind, RuleOutcome, RuleResult, RunState, case_toggle_rule,
    character_deletion_rule, digit_insertion_rule, repetition_rule, reversal_rule,
};
pub use target::Target;
pub use visited::VisitedSet;
pub use wordlist::{FileWordlist, MemoryWordlist, WordlistSource};

#[cfg(feature = "async")]
pub use partitioner::{
    Activity, PoolOutcome, REGISTRY, WorkerReport, WorkerStatus, run_pool, run_pool_with_token,
};
